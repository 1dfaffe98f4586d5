//! Hand a URL to the platform's default browser.

use std::error::Error;
use std::process::{Command, Stdio};

fn launcher_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(url);
        command
    }
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

/// Only `http(s)` URLs are handed to the launcher.
pub fn is_openable(url: &str) -> bool {
    let url = url.trim();
    (url.starts_with("https://") || url.starts_with("http://")) && !url.contains(char::is_whitespace)
}

pub fn open_in_browser(url: &str) -> Result<(), Box<dyn Error>> {
    if !is_openable(url) {
        return Err(format!("refusing to open non-web URL: {url}").into());
    }

    // The launcher must not scribble over the alternate screen.
    let status = launcher_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("browser launcher exited with {status}").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_urls_are_openable() {
        assert!(is_openable("https://huggingface.co/spaces/x"));
        assert!(is_openable("http://localhost:3001"));
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable("https://example.com/a b"));
        assert!(open_in_browser("javascript:alert(1)").is_err());
    }
}
