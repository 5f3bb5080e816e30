//! State for the organizational structure browser.

use crate::browser::BrowserState;
use crate::model::{Folder, OrgUnit};

use crossterm::event::{KeyCode, KeyEvent};

/// Tabs of the unit detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    People,
    Documents,
}

impl DetailTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Visão Geral",
            Self::People => "Pessoas",
            Self::Documents => "Documentos",
        }
    }
}

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrgPane {
    #[default]
    Tree,
    Detail,
}

/// A flattened, visible tree row for rendering and cursor movement.
#[derive(Debug, Clone)]
pub struct UnitRow {
    pub id: String,
    pub title: String,
    pub depth: usize,
    pub expanded: bool,
    pub expandable: bool,
    pub active: bool,
}

/// Combined state of the organizational structure component: the unit tree,
/// the single active unit, the detail tab and the folder browser behind the
/// Documents tab.
#[derive(Debug, Clone, Default)]
pub struct OrgBrowserState {
    pub units: Vec<OrgUnit>,
    pub selected_unit: Option<String>,
    pub active_tab: DetailTab,
    pub pane: OrgPane,
    pub browser: BrowserState,
    pub cursor: usize,
    pub tree_scroll: usize,
    /// Whether the detail pane offers the People tab.
    pub show_people: bool,
    /// Whether the detail pane offers the Documents tab.
    pub show_documents: bool,
    /// One-shot message for the status line (navigation errors).
    pub status: Option<String>,
}

impl OrgBrowserState {
    pub fn new(units: Vec<OrgUnit>, folders: Vec<Folder>) -> Self {
        Self {
            units,
            browser: BrowserState::new(folders),
            show_people: true,
            show_documents: true,
            ..Self::default()
        }
    }

    /// Visible tree rows, honoring expansion flags.
    pub fn visible_rows(&self) -> Vec<UnitRow> {
        fn push_visible(units: &[OrgUnit], depth: usize, rows: &mut Vec<UnitRow>) {
            for unit in units {
                rows.push(UnitRow {
                    id: unit.id.clone(),
                    title: unit.title.clone(),
                    depth,
                    expanded: unit.expanded,
                    expandable: !unit.children.is_empty(),
                    active: unit.active,
                });
                if unit.expanded {
                    push_visible(&unit.children, depth + 1, rows);
                }
            }
        }

        let mut rows = Vec::new();
        push_visible(&self.units, 0, &mut rows);
        rows
    }

    /// The active unit, if any.
    pub fn selected(&self) -> Option<&OrgUnit> {
        self.selected_unit
            .as_deref()
            .and_then(|id| OrgUnit::find(&self.units, id))
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(len - 1) as isize;
        self.cursor = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Toggle expansion of the unit under the cursor.
    pub fn toggle_cursor(&mut self) {
        if let Some(row) = self.visible_rows().get(self.cursor) {
            let id = row.id.clone();
            OrgUnit::toggle(&mut self.units, &id);
        }
    }

    /// Make `id` the active unit.
    ///
    /// Always resets the detail tab to the overview and drops any folder
    /// navigation and search, so a fresh unit starts at the root listing.
    pub fn select(&mut self, id: &str) {
        self.selected_unit = Some(id.to_string());
        self.active_tab = DetailTab::Overview;
        self.browser.reset();
    }

    /// Select the unit under the cursor.
    pub fn select_cursor(&mut self) {
        if let Some(row) = self.visible_rows().get(self.cursor) {
            let id = row.id.clone();
            self.select(&id);
        }
    }

    /// Return to the empty-state placeholder.
    pub fn clear_selection(&mut self) {
        self.selected_unit = None;
        self.active_tab = DetailTab::Overview;
        self.browser.reset();
    }

    fn tabs(&self) -> Vec<DetailTab> {
        let mut tabs = vec![DetailTab::Overview];
        if self.show_people {
            tabs.push(DetailTab::People);
        }
        if self.show_documents {
            tabs.push(DetailTab::Documents);
        }
        tabs
    }

    /// Cycle the detail tab, skipping hidden tabs.
    pub fn next_tab(&mut self) {
        let tabs = self.tabs();
        let pos = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        self.active_tab = tabs[(pos + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = self.tabs();
        let pos = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        self.active_tab = tabs[(pos + tabs.len() - 1) % tabs.len()];
    }

    /// Handle a key event; returns whether it was consumed.
    ///
    /// The tree pane owns movement/expansion/selection; the detail pane owns
    /// tab cycling and, on the Documents tab, forwards to the browser.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.status = None;

        if key.code == KeyCode::Tab {
            self.pane = match self.pane {
                OrgPane::Tree => OrgPane::Detail,
                OrgPane::Detail => OrgPane::Tree,
            };
            return true;
        }

        match self.pane {
            OrgPane::Tree => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
                KeyCode::Char(' ') => self.toggle_cursor(),
                KeyCode::Enter => self.select_cursor(),
                KeyCode::Esc => self.clear_selection(),
                _ => return false,
            },
            OrgPane::Detail => match key.code {
                KeyCode::Char(']') => self.next_tab(),
                KeyCode::Char('[') => self.prev_tab(),
                _ if self.active_tab == DetailTab::Documents && self.selected_unit.is_some() => {
                    match self.browser.handle_key(key) {
                        Ok(consumed) => return consumed,
                        Err(err) => {
                            self.status = Some(format!("Navegação redefinida: {err}"));
                        }
                    }
                }
                _ => return false,
            },
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;

    fn state() -> OrgBrowserState {
        let data = sample::intranet();
        OrgBrowserState::new(data.org_tree, data.folders)
    }

    #[test]
    fn visible_rows_follow_expansion() {
        let mut state = state();
        // Sample root is expanded: root + two children visible.
        assert_eq!(state.visible_rows().len(), 3);

        // Expanding "Vendas" reveals its two teams.
        state.cursor = 1;
        state.toggle_cursor();
        assert_eq!(state.visible_rows().len(), 5);
    }

    #[test]
    fn select_resets_tab_and_navigation() {
        let mut state = state();
        state.active_tab = DetailTab::Documents;
        state.browser.activate_selected().unwrap();
        assert!(!state.browser.navigator.is_root());

        state.select("2");
        assert_eq!(state.active_tab, DetailTab::Overview);
        assert!(state.browser.navigator.is_root());
        assert_eq!(state.selected().unwrap().title, "Vendas");
    }

    #[test]
    fn clear_selection_returns_to_placeholder() {
        let mut state = state();
        state.select("2");
        state.clear_selection();
        assert!(state.selected().is_none());
    }

    #[test]
    fn tab_cycle_skips_hidden_tabs() {
        let mut state = state();
        state.show_people = false;
        state.select("2");

        state.next_tab();
        assert_eq!(state.active_tab, DetailTab::Documents);
        state.next_tab();
        assert_eq!(state.active_tab, DetailTab::Overview);
        state.prev_tab();
        assert_eq!(state.active_tab, DetailTab::Documents);
    }

    #[test]
    fn selection_survives_collapse_of_ancestor() {
        let mut state = state();
        state.cursor = 1;
        state.toggle_cursor(); // expand Vendas
        state.cursor = 2;
        state.select_cursor(); // Vendas Nacionais
        let selected = state.selected_unit.clone();

        state.cursor = 1;
        state.toggle_cursor(); // collapse Vendas
        assert_eq!(state.selected_unit, selected);
        assert!(state.selected().is_some());
    }
}
