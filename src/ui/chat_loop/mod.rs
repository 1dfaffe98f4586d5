//! Main chat event loop.
//!
//! Terminal input is read on a background task and forwarded over a channel.
//! Completion requests run on spawned tasks and report back over a second
//! channel, so the loop itself never waits on the network. A periodic tick
//! drives the spinner, the bobbing title and the countdown.

mod lifecycle;

use std::{error::Error, sync::Arc, time::Duration};

use chrono::Local;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use self::lifecycle::{install_panic_hook, restore_terminal, setup_terminal, ChatTerminal};
use crate::core::app::{App, AppCommand};
use crate::core::backend::{CompletionBackend, EndpointMode};
use crate::core::completion::Completer;
use crate::core::config::{data::Config, defaults::RuntimeOverrides};
use crate::core::constants::TICK_MILLIS;
use crate::core::message::Message;
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;
use crate::utils::browser::open_in_browser;
use crate::utils::url::display_host;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

/// Human description of where prompts are sent, e.g. `the proxy (localhost:3001)`.
pub fn endpoint_label(mode: EndpointMode, url: &str) -> String {
    format!("{} ({})", mode.route_description(), display_host(url))
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

fn spawn_completion<B>(
    completer: Arc<Completer<B>>,
    prompt: String,
    reply_tx: mpsc::UnboundedSender<Message>,
) where
    B: CompletionBackend + 'static,
{
    tokio::spawn(async move {
        let reply = completer.reply_to(&prompt).await;
        if reply_tx.send(reply).is_err() {
            debug!("chat loop closed before reply arrived");
        }
    });
}

/// Carry out the side effect a key press asked for.
pub fn execute_command<B>(
    app: &mut App,
    command: AppCommand,
    completer: &Arc<Completer<B>>,
    reply_tx: &mpsc::UnboundedSender<Message>,
) where
    B: CompletionBackend + 'static,
{
    match command {
        AppCommand::None | AppCommand::Quit => {}
        AppCommand::SendPrompt(prompt) => {
            spawn_completion(Arc::clone(completer), prompt, reply_tx.clone());
        }
        AppCommand::OpenUrl(url) => match open_in_browser(&url) {
            Ok(()) => app.set_status(format!("Opened {} in your browser", display_host(&url))),
            Err(e) => {
                warn!(error = %e, %url, "failed to open browser");
                app.set_status(format!("Could not open browser: {e}"));
            }
        },
    }
}

async fn event_loop<B>(
    terminal: &mut ChatTerminal,
    app: &mut App,
    completer: Arc<Completer<B>>,
    theme: &Theme,
) -> Result<(), Box<dyn Error>>
where
    B: CompletionBackend + 'static,
{
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<Message>();

    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MILLIS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result: Result<(), Box<dyn Error>> = loop {
        if let Err(e) = terminal.draw(|f| ui(f, app, theme)) {
            break Err(e.into());
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.on_tick(Local::now().naive_local());
            }
            Some(reply) = reply_rx.recv() => {
                app.receive_reply(reply);
            }
            Some(UiEvent::Crossterm(ev)) = event_rx.recv() => {
                match ev {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let width = match terminal.size() {
                            Ok(size) => size.width,
                            Err(e) => break Err(e.into()),
                        };
                        let command = app.handle_key(key, width);
                        execute_command(app, command, &completer, &reply_tx);
                    }
                    Event::Paste(text) => app.handle_paste(&text),
                    _ => {}
                }
            }
        }

        if app.exit_requested {
            break Ok(());
        }
    };

    event_reader_handle.abort();
    result
}

pub async fn run_chat(config: Config, overrides: RuntimeOverrides) -> Result<(), Box<dyn Error>> {
    let endpoint = config.resolve_endpoint(&overrides);
    let completer = Arc::new(config.completer(&overrides)?);
    let label = endpoint_label(endpoint.mode, &endpoint.url);
    info!(mode = %endpoint.mode, url = %endpoint.url, "starting chat session");

    let mut app = App::new(config.countdown(), label, Local::now().naive_local())
        .with_endpoint_mode(endpoint.mode);
    let theme = Theme::detect();

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, completer, &theme).await;
    restore_terminal(&mut terminal)?;

    info!(
        turns = app.chat.conversation().len(),
        "chat session ended"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::BackendError;
    use crate::core::completion::SamplingSettings;
    use crate::core::countdown::Countdown;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct EchoBackend;

    #[async_trait]
    impl CompletionBackend for EchoBackend {
        fn mode(&self) -> EndpointMode {
            EndpointMode::Proxy
        }

        async fn predict(
            &self,
            payload: &crate::api::ChatPayload,
        ) -> Result<Value, BackendError> {
            Ok(json!({ "data": format!("echo: {}", payload.message) }))
        }
    }

    fn app() -> App {
        App::new(Countdown::default(), "test", Local::now().naive_local())
    }

    #[test]
    fn label_names_route_and_host() {
        assert_eq!(
            endpoint_label(EndpointMode::Proxy, "http://localhost:3001/predict"),
            "the proxy (localhost:3001)"
        );
        assert_eq!(
            endpoint_label(EndpointMode::Hosted, "https://demo.hf.space"),
            "the inference endpoint (demo.hf.space)"
        );
    }

    #[tokio::test]
    async fn send_prompt_delivers_reply_over_channel() {
        let completer = Arc::new(Completer::new(EchoBackend, SamplingSettings::default()));
        let (reply_tx, mut reply_rx) = mpsc::unbounded_channel();
        let mut app = app();
        app.chat.set_input_text("hello");
        let command = app.submit_chat();

        execute_command(&mut app, command, &completer, &reply_tx);
        let reply = reply_rx.recv().await.expect("reply");
        app.receive_reply(reply);

        let messages = app.chat.conversation().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], Message::assistant("echo: hello"));
        assert!(!app.chat.is_loading());
    }

    #[tokio::test]
    async fn rejected_urls_surface_as_status() {
        let completer = Arc::new(Completer::new(EchoBackend, SamplingSettings::default()));
        let (reply_tx, _reply_rx) = mpsc::unbounded_channel();
        let mut app = app();

        execute_command(
            &mut app,
            AppCommand::OpenUrl("file:///etc/hosts".to_string()),
            &completer,
            &reply_tx,
        );
        assert!(app
            .status
            .as_deref()
            .is_some_and(|s| s.starts_with("Could not open browser")));
    }
}
