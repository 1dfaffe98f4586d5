//! Screens reachable from the navigation drawer.

use crate::core::constants::LARGE_SCREEN_COLUMNS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Chat,
    MoodTracker,
    Goals,
    Journal,
    Profile,
    AddPeople,
    About,
}

impl Screen {
    /// Primary destinations, listed at the top of the drawer.
    pub const MAIN: [Screen; 4] = [
        Screen::Chat,
        Screen::MoodTracker,
        Screen::Goals,
        Screen::Journal,
    ];

    /// Account-ish destinations pinned to the drawer footer.
    pub const FOOTER: [Screen; 3] = [Screen::Profile, Screen::AddPeople, Screen::About];

    /// Drawer order: main group followed by the footer group.
    pub const ALL: [Screen; 7] = [
        Screen::Chat,
        Screen::MoodTracker,
        Screen::Goals,
        Screen::Journal,
        Screen::Profile,
        Screen::AddPeople,
        Screen::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Chat => "Chat",
            Screen::MoodTracker => "Mood Tracker",
            Screen::Goals => "Goals",
            Screen::Journal => "Journal",
            Screen::Profile => "Profile",
            Screen::AddPeople => "Add People",
            Screen::About => "About",
        }
    }

    pub fn header_title(self) -> &'static str {
        match self {
            Screen::About => "About This App",
            other => other.label(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Chat => "✉",
            Screen::MoodTracker => "♡",
            Screen::Goals => "⚑",
            Screen::Journal => "✎",
            Screen::Profile => "☺",
            Screen::AddPeople => "+",
            Screen::About => "i",
        }
    }

    /// Screens whose feature has not shipped and show the launch countdown.
    pub fn is_placeholder(self) -> bool {
        matches!(
            self,
            Screen::MoodTracker
                | Screen::Goals
                | Screen::Journal
                | Screen::Profile
                | Screen::AddPeople
        )
    }

    pub fn drawer_index(self) -> usize {
        Screen::ALL
            .iter()
            .position(|screen| *screen == self)
            .unwrap_or(0)
    }
}

/// On wide terminals the drawer is pinned beside the content; on narrow ones
/// it is an overlay that opens on demand.
pub fn is_large_screen(width: u16) -> bool {
    width >= LARGE_SCREEN_COLUMNS
}

#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    open: bool,
    focused: bool,
    cursor: usize,
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, width: u16) -> bool {
        is_large_screen(width) || self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> Screen {
        Screen::ALL[self.cursor.min(Screen::ALL.len() - 1)]
    }

    /// Menu button: on narrow terminals this opens/closes the overlay, on wide
    /// ones the drawer is always shown so only keyboard focus moves.
    pub fn toggle(&mut self, width: u16, current: Screen) {
        if is_large_screen(width) {
            self.open = false;
            self.focused = !self.focused;
        } else {
            self.open = !self.open;
            self.focused = self.open;
        }
        if self.focused {
            self.cursor = current.drawer_index();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focused = false;
    }

    pub fn move_up(&mut self) {
        let len = Screen::ALL.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % Screen::ALL.len();
    }
}
