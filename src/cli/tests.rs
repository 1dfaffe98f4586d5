use super::*;
use std::path::Path;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }
}

use test_helpers::parse_args;

#[test]
fn bare_invocation_starts_chat_without_logging() {
    let args = parse_args(&["solace"]);
    assert!(args.command.is_none());
    assert_eq!(args.verbose, 0);
    assert_eq!(args.log_sink(), LogSink::Discard);
    assert_eq!(args.overrides(), RuntimeOverrides::default());
}

#[test]
fn say_joins_words_and_logs_to_stderr() {
    let argv = ["solace", "say", "I", "feel", "-", "tired"];
    let args = parse_args(&argv);
    match &args.command {
        Some(Commands::Say { prompt }) => assert_eq!(prompt.join(" "), "I feel - tired"),
        _ => panic!("expected say subcommand for argv={argv:?}"),
    }
    assert_eq!(args.log_sink(), LogSink::Stderr);
}

#[test]
fn global_flags_work_after_subcommand() {
    let argv = [
        "solace",
        "chat",
        "--mode",
        "hosted",
        "--endpoint",
        "https://demo.hf.space",
        "--log-file",
        "/tmp/solace.log",
        "-vv",
    ];
    let args = parse_args(&argv);

    assert!(matches!(args.command, Some(Commands::Chat)));
    assert_eq!(args.verbose, 2);
    assert_eq!(args.log_sink(), LogSink::File(Path::new("/tmp/solace.log")));
    assert_eq!(
        args.overrides(),
        RuntimeOverrides {
            mode: Some(EndpointMode::Hosted),
            endpoint: Some("https://demo.hf.space".to_string()),
        }
    );
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(Args::try_parse_from(["solace", "--mode", "carrier-pigeon"]).is_err());
}

#[test]
fn set_requires_a_value_and_joins_words() {
    assert!(Args::try_parse_from(["solace", "set", "system-prompt"]).is_err());

    let args = parse_args(&["solace", "set", "system-prompt", "Be", "kind."]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, "system-prompt");
            assert_eq!(value.join(" "), "Be kind.");
        }
        _ => panic!("expected set subcommand"),
    }
}

#[test]
fn unset_and_config_parse() {
    assert!(matches!(
        parse_args(&["solace", "unset", "mode"]).command,
        Some(Commands::Unset { key }) if key == "mode"
    ));
    assert!(matches!(
        parse_args(&["solace", "config"]).command,
        Some(Commands::Config)
    ));
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
