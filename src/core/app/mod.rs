//! Application state shared by the chat loop and the renderer.
//!
//! [`App`] owns everything the interface shows: which screen is active, the
//! drawer, the chat screen's conversation and compose box, and the countdown
//! animation for placeholder screens. Input handling mutates it through the
//! methods here and reports side effects the loop must perform as an
//! [`AppCommand`].

pub mod chat;
mod input;
pub mod navigation;

pub use chat::ChatState;
pub use navigation::{DrawerState, Screen};

use chrono::NaiveDateTime;

use crate::core::backend::EndpointMode;
use crate::core::countdown::{Countdown, CountdownSnapshot, EasedProgress};
use crate::core::message::Message;

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    None,
    SendPrompt(String),
    OpenUrl(String),
    Quit,
}

pub struct App {
    pub screen: Screen,
    pub drawer: DrawerState,
    pub chat: ChatState,
    countdown: Countdown,
    snapshot: CountdownSnapshot,
    progress: EasedProgress,
    /// Short description of where requests go, for the header.
    pub endpoint_label: String,
    pub endpoint_mode: EndpointMode,
    /// Transient notice shown in the header (e.g. browser launch failures).
    pub status: Option<String>,
    /// Animation frame counter, advanced once per tick.
    pub frame: u64,
    pub exit_requested: bool,
}

impl App {
    pub fn new(countdown: Countdown, endpoint_label: impl Into<String>, now: NaiveDateTime) -> Self {
        let snapshot = countdown.snapshot(now);
        let mut progress = EasedProgress::default();
        progress.set_target(snapshot.progress);
        Self {
            screen: Screen::default(),
            drawer: DrawerState::new(),
            chat: ChatState::new(),
            countdown,
            snapshot,
            progress,
            endpoint_label: endpoint_label.into(),
            endpoint_mode: EndpointMode::default(),
            status: None,
            frame: 0,
            exit_requested: false,
        }
    }

    pub fn with_endpoint_mode(mut self, mode: EndpointMode) -> Self {
        self.endpoint_mode = mode;
        self
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn countdown_snapshot(&self) -> CountdownSnapshot {
        self.snapshot
    }

    /// Progress bar value as currently animated, in `0.0..=100.0`.
    pub fn displayed_progress(&self) -> f64 {
        self.progress.value()
    }

    /// Advance animations and refresh the countdown against `now`.
    pub fn on_tick(&mut self, now: NaiveDateTime) {
        self.frame = self.frame.wrapping_add(1);
        self.snapshot = self.countdown.snapshot(now);
        self.progress.set_target(self.snapshot.progress);
        self.progress.step();
    }

    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            // The progress bar re-animates from empty each time a countdown
            // screen is entered.
            if screen.is_placeholder() {
                self.progress = EasedProgress::default();
                self.progress.set_target(self.snapshot.progress);
            }
            self.screen = screen;
        }
        self.status = None;
    }

    pub fn toggle_drawer(&mut self, width: u16) {
        self.drawer.toggle(width, self.screen);
    }

    /// Activate the highlighted drawer entry.
    pub fn select_drawer_entry(&mut self) {
        let target = self.drawer.highlighted();
        self.drawer.close();
        self.navigate(target);
    }

    /// Send the compose box contents, if sending is currently allowed.
    pub fn submit_chat(&mut self) -> AppCommand {
        match self.chat.submit() {
            Some(prompt) => AppCommand::SendPrompt(prompt),
            None => AppCommand::None,
        }
    }

    pub fn receive_reply(&mut self, reply: Message) {
        self.chat.receive(reply);
    }

    pub fn request_exit(&mut self) -> AppCommand {
        self.exit_requested = true;
        AppCommand::Quit
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}
