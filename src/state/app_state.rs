//! Application state definitions

use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hero banner animation
    Splash,
    #[default]
    Home,
    Services,
    About,
    Contact,
}

impl View {
    /// Views reachable from the nav bar, in display order
    pub const NAV: [View; 4] = [View::Home, View::Services, View::About, View::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Splash => "",
            Self::Home => "Home",
            Self::Services => "Services",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Nav hotkey shown next to the title
    pub fn hotkey(&self) -> Option<char> {
        match self {
            Self::Splash => None,
            Self::Home => Some('1'),
            Self::Services => Some('2'),
            Self::About => Some('3'),
            Self::Contact => Some('4'),
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::NAV.into_iter().find(|v| v.hotkey() == Some(c))
    }

    /// Views that capture typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Contact)
    }

    /// Next nav entry, wrapping
    pub fn next(&self) -> Self {
        let idx = Self::NAV.iter().position(|v| v == self).unwrap_or(0);
        Self::NAV[(idx + 1) % Self::NAV.len()]
    }

    /// Previous nav entry, wrapping
    pub fn prev(&self) -> Self {
        let idx = Self::NAV.iter().position(|v| v == self).unwrap_or(0);
        Self::NAV[(idx + Self::NAV.len() - 1) % Self::NAV.len()]
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Services showcase
    pub selected_service: usize,

    // Errors waiting to be shown in the modal dialog
    pub error_queue: VecDeque<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn move_service_selection_down(&mut self, max: usize) {
        if self.selected_service + 1 < max {
            self.selected_service += 1;
        }
    }

    pub fn move_service_selection_up(&mut self) {
        self.selected_service = self.selected_service.saturating_sub(1);
    }
}
