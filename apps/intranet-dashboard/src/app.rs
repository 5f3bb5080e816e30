//! Application state for the intranet dashboard.

use crate::config::{Config, FeedStyle};
use crossterm::event::{KeyCode, KeyEvent};
use intranet_widgets::model::sample::{self, IntranetData};
use intranet_widgets::model::NewsItem;
use intranet_widgets::FeedVariant;

/// Main application state.
pub struct App {
    pub config: Config,
    pub data: IntranetData,
    /// Index into `data.departments`.
    pub department: usize,
    pub show_help: bool,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load();
        let data = sample::intranet();
        let department = config
            .department
            .initial
            .as_deref()
            .and_then(|id| data.departments.iter().position(|d| d.id == id))
            .unwrap_or(0);

        Self {
            config,
            data,
            department,
            show_help: false,
        }
    }

    pub fn feed_variant(&self) -> FeedVariant {
        match self.config.feed.variant {
            FeedStyle::Default => FeedVariant::Default,
            FeedStyle::Compact => FeedVariant::Compact,
            FeedStyle::Detailed => FeedVariant::Detailed,
        }
    }

    pub fn selected_department_id(&self) -> &str {
        self.data
            .departments
            .get(self.department)
            .map(|d| d.id.as_str())
            .unwrap_or("")
    }

    /// Company-wide news plus items of the selected department.
    pub fn visible_news(&self) -> Vec<NewsItem> {
        let selected = self.selected_department_id();
        self.data
            .news
            .iter()
            .filter(|item| match &item.department_id {
                None => true,
                Some(id) => id == selected,
            })
            .cloned()
            .collect()
    }

    fn switch_department(&mut self, delta: isize) {
        let len = self.data.departments.len();
        if len == 0 {
            return;
        }
        let current = self.department as isize;
        self.department = (current + delta).rem_euclid(len as isize) as usize;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        match key.code {
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Left | KeyCode::Char('h') => self.switch_department(-1),
            KeyCode::Right | KeyCode::Char('l') => self.switch_department(1),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.data.departments.len() {
                    self.department = index;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn department_switching_wraps() {
        let mut app = App::new();
        let len = app.data.departments.len();
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.department, len - 1);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.department, 0);
    }

    #[test]
    fn news_filters_by_selected_department() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('4')));
        let titles: Vec<_> = app.visible_news().iter().map(|n| n.title.clone()).collect();
        assert!(titles.iter().any(|t| t.contains("sistema de gestão")));
        assert!(!titles.iter().any(|t| t.contains("Resultados do Q4")));
    }

    #[test]
    fn digit_selects_department_and_ignores_out_of_range() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.department, 2);
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.department, 2);
    }
}
