use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::core::message::{Conversation, Message};

pub const WELCOME_TEXT: &str = "How can I help you?";
pub const INPUT_PLACEHOLDER: &str = "Type a message...";

/// Conversation starters offered before the first message.
pub const PRESET_PROMPTS: [&str; 4] = [
    "How can you help me?",
    "Tell me about your features",
    "I need assistance with...",
    "What can this app do?",
];

/// State of the chat screen: history, the compose box, and the in-flight flag.
pub struct ChatState {
    conversation: Conversation,
    textarea: TextArea<'static>,
    loading: bool,
    preset_cursor: Option<usize>,
    /// Lines scrolled up from the bottom of the transcript; zero follows new
    /// messages.
    scroll_from_bottom: u16,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        let mut state = Self {
            conversation: Conversation::new(),
            textarea: TextArea::default(),
            loading: false,
            preset_cursor: None,
            scroll_from_bottom: 0,
        };
        state.configure_textarea();
        state
    }

    fn configure_textarea(&mut self) {
        self.textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        self.textarea.set_cursor_line_style(Style::default());
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn has_messages(&self) -> bool {
        !self.conversation.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_input_text(&mut self, text: &str) {
        let lines: Vec<String> = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        self.textarea = TextArea::from(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.configure_textarea();
    }

    /// Apply an edit to the compose box. Input is read-only while a reply is
    /// pending; returns whether the edit was applied.
    pub fn edit_input<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        if self.is_loading() {
            return false;
        }
        edit(&mut self.textarea);
        true
    }

    /// Take the compose box contents as a prompt.
    ///
    /// Blank input and sends while a reply is pending are ignored. Otherwise
    /// the input is cleared, the user turn appended, and the trimmed prompt
    /// returned for dispatch.
    pub fn submit(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }
        let prompt = self.input_text().trim().to_string();
        if prompt.is_empty() {
            return None;
        }

        self.set_input_text("");
        self.loading = true;
        self.preset_cursor = None;
        self.conversation.push(Message::user(prompt.clone()));
        self.scroll_to_bottom();
        Some(prompt)
    }

    /// Record the assistant reply for the pending prompt.
    pub fn receive(&mut self, reply: Message) {
        self.conversation.push(reply);
        self.loading = false;
        self.scroll_to_bottom();
    }

    pub fn preset_cursor(&self) -> Option<usize> {
        self.preset_cursor
    }

    /// Presets are only offered on an empty conversation.
    pub fn presets_visible(&self) -> bool {
        !self.has_messages()
    }

    pub fn select_next_preset(&mut self) {
        self.step_preset(1);
    }

    pub fn select_previous_preset(&mut self) {
        self.step_preset(PRESET_PROMPTS.len() - 1);
    }

    fn step_preset(&mut self, delta: usize) {
        if !self.presets_visible() || self.is_loading() {
            return;
        }
        let len = PRESET_PROMPTS.len();
        let next = match self.preset_cursor {
            Some(current) => (current + delta) % len,
            None if delta == 1 => 0,
            None => len - 1,
        };
        self.preset_cursor = Some(next);
        self.set_input_text(PRESET_PROMPTS[next]);
    }

    pub fn scroll_from_bottom(&self) -> u16 {
        self.scroll_from_bottom
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    /// Keep the stored offset within what the transcript can actually scroll.
    pub fn clamp_scroll(&mut self, max_offset: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.min(max_offset);
    }
}
