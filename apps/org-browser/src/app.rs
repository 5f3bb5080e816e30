//! Application state for the org browser.

use crate::config::Config;
use crossterm::event::{KeyCode, KeyEvent};
use intranet_widgets::model::{sample, Person};
use intranet_widgets::{OrgBrowserState, OrgPane};

/// Main application state.
pub struct App {
    pub config: Config,
    pub state: OrgBrowserState,
    pub people: Vec<Person>,
    pub show_help: bool,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load();
        let data = sample::intranet();
        let mut state = OrgBrowserState::new(data.org_tree, data.folders);
        state.show_people = config.display.show_people;
        state.show_documents = config.display.show_documents;

        Self {
            config,
            state,
            people: data.people,
            show_help: false,
        }
    }

    /// The document search field is capturing text input.
    pub fn is_searching(&self) -> bool {
        self.state.pane == OrgPane::Detail && self.state.browser.searching
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        if key.code == KeyCode::Char('?') && !self.is_searching() {
            self.show_help = true;
            return;
        }
        self.state.handle_key(key);
    }
}
