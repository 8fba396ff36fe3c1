//! Application state and core logic

use crate::config::TuiConfig;
use crate::contact::{ContactController, SubmitOutcome};
use crate::relay::{RelayClient, RelayClientTrait};
use crate::state::{AppState, ContactField, SplashState, View, SERVICE_CATALOG};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact form controller
    pub contact: ContactController,
    /// Where inquiries are posted, shown in the status bar
    pub relay_endpoint: String,
    /// Hero animation state, `None` once finished
    pub splash_state: Option<SplashState>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance wired to the configured relay
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let relay = RelayClient::new(config.relay_url(), config.request_timeout())?;
        let endpoint = relay.endpoint().to_string();
        tracing::debug!(relay = %endpoint, "Contact relay configured");
        Ok(Self::with_relay(Arc::new(relay), endpoint, config))
    }

    /// Create an App around any relay implementation
    pub fn with_relay(
        relay: Arc<dyn RelayClientTrait>,
        relay_endpoint: String,
        config: &TuiConfig,
    ) -> Self {
        let mut state = AppState::default();
        let splash_state = if config.skip_splash() {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new())
        };

        Self {
            state,
            contact: ContactController::new(relay, config.success_delay()),
            relay_endpoint,
            splash_state,
            quit: false,
        }
    }

    /// Update splash animation state.
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, travel: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(travel);
            if splash.is_complete() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Home;
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        self.splash_state.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply finished background work (relay responses, banner timers)
    pub fn tick(&mut self) -> bool {
        self.contact.poll()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Surface an unreadable config file; the app keeps running on defaults
    pub fn report_config_error(&mut self, err: &anyhow::Error) {
        tracing::warn!("Ignoring unreadable config: {err:#}");
        self.push_error(format!(
            "Could not read the config file, using defaults.\n{err:#}"
        ));
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        match self.state.view_history.pop() {
            Some(view) => self.state.current_view = view,
            None => self.state.current_view = View::Home,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Any key skips the hero; the next frame tears it down
        if let Some(splash) = self.splash_state.as_mut() {
            splash.skip();
            return Ok(());
        }

        // Nav bar shortcuts only outside the form, where keys are text input
        if !self.state.current_view.is_form_view() {
            match key.code {
                KeyCode::Char('q') => {
                    self.quit = true;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    if let Some(view) = View::from_hotkey(c) {
                        self.navigate(view);
                        return Ok(());
                    }
                }
                KeyCode::Tab => {
                    let next = self.state.current_view.next();
                    self.navigate(next);
                    return Ok(());
                }
                KeyCode::BackTab => {
                    let prev = self.state.current_view.prev();
                    self.navigate(prev);
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.state.current_view {
            View::Splash => {}
            View::Home => self.handle_home_key(key),
            View::Services => self.handle_services_key(key),
            View::About => self.handle_about_key(key),
            View::Contact => self.handle_contact_key(key),
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Enter => self.open_contact(None),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_about_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.go_back();
        }
    }

    fn handle_services_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self
                .state
                .move_service_selection_down(SERVICE_CATALOG.len()),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_service_selection_up(),
            KeyCode::Enter => self.open_contact(Some(self.state.selected_service)),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Jump to the contact form, optionally preselecting a service
    fn open_contact(&mut self, service: Option<usize>) {
        if let Some(index) = service {
            self.contact
                .update_field(ContactField::Service, |f| f.set_choice(Some(index)));
        }
        self.contact.focus(ContactField::Name);
        self.navigate(View::Contact);
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let form = self.contact.form();
        let on_send_row = form.is_send_row_active();
        let on_service = form.active_contact_field() == Some(ContactField::Service);
        let on_message = form.active_contact_field() == Some(ContactField::Message);

        match key.code {
            KeyCode::Tab => self.contact.next_field(),
            KeyCode::BackTab => self.contact.prev_field(),
            // Send (Ctrl+S, or Cmd/Ctrl+Enter)
            KeyCode::Char('s') if ctrl => self.submit_contact(),
            KeyCode::Enter if key.modifiers.contains(crate::platform::SEND_MODIFIER) => {
                self.submit_contact()
            }
            KeyCode::Char('d') if ctrl => self.contact.dismiss_error(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Left if on_service => {
                self.contact.cycle_service(false);
            }
            KeyCode::Right if on_service => {
                self.contact.cycle_service(true);
            }
            KeyCode::Enter if on_send_row => self.submit_contact(),
            KeyCode::Enter if on_message => {
                self.contact.newline();
            }
            KeyCode::Enter => self.contact.next_field(),
            KeyCode::Char(c) if !ctrl => {
                self.contact.input_char(c);
            }
            KeyCode::Backspace => {
                self.contact.backspace();
            }
            _ => {}
        }
    }

    fn submit_contact(&mut self) {
        if self.contact.submit() == SubmitOutcome::Invalid {
            // Put the cursor on the first field that needs fixing
            let first = self.contact.errors().iter().next().map(|(field, _)| field);
            if let Some(field) = first {
                self.contact.focus(field);
            }
        }
    }
}
