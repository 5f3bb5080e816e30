//! State for the folder/document browser.

use crate::model::{Document, Folder};

use super::filter::filter_documents;
use super::path::{NavError, PathNavigator};

use crossterm::event::{KeyCode, KeyEvent};

/// How document rows are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// A selectable row in the browser listing.
#[derive(Debug, Clone)]
pub enum BrowserRow {
    Folder {
        id: String,
        name: String,
        depth: usize,
        expanded: bool,
        expandable: bool,
        owner_id: String,
    },
    Document {
        id: String,
    },
}

/// Browser over one folder tree: navigation path, expansion, search.
///
/// Owns the folder tree it browses. The current folder is always re-derived
/// from the navigation path; a path that stops resolving (folder removed or
/// moved) resets the browser to the root listing and reports the error once.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    pub folders: Vec<Folder>,
    pub navigator: PathNavigator,
    pub search: String,
    pub searching: bool,
    pub view_mode: ViewMode,
    pub selected: usize,
    pub scroll: usize,
}

impl BrowserState {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders,
            ..Self::default()
        }
    }

    /// The open folder, or `None` for the root listing.
    pub fn current_folder(&self) -> Option<&Folder> {
        // Stale paths are handled by `repair`, called on every action.
        self.navigator.resolve(&self.folders).ok().flatten()
    }

    /// Validate the path, resetting to root if it no longer resolves.
    pub fn repair(&mut self) -> Result<(), NavError> {
        match self.navigator.resolve(&self.folders) {
            Ok(_) => Ok(()),
            Err(err) => {
                self.navigator.reset();
                self.selected = 0;
                Err(err)
            }
        }
    }

    /// Sub-folders visible at the current location, honoring expansion.
    fn folder_rows(&self) -> Vec<BrowserRow> {
        fn push_visible(folders: &[Folder], depth: usize, rows: &mut Vec<BrowserRow>) {
            for folder in folders {
                rows.push(BrowserRow::Folder {
                    id: folder.id.clone(),
                    name: folder.name.clone(),
                    depth,
                    expanded: folder.expanded,
                    expandable: !folder.sub_folders.is_empty(),
                    owner_id: folder.owner_id.clone(),
                });
                if folder.expanded {
                    push_visible(&folder.sub_folders, depth + 1, rows);
                }
            }
        }

        let mut rows = Vec::new();
        match self.current_folder() {
            None => push_visible(&self.folders, 0, &mut rows),
            Some(folder) => push_visible(&folder.sub_folders, 0, &mut rows),
        }
        rows
    }

    /// Documents at the current location, before filtering.
    ///
    /// The root listing aggregates every document in tree order, matching the
    /// flat listing the dashboard shows before a folder is opened.
    pub fn documents_here(&self) -> Vec<&Document> {
        fn collect<'a>(folders: &'a [Folder], out: &mut Vec<&'a Document>) {
            for folder in folders {
                out.extend(folder.documents.iter());
                collect(&folder.sub_folders, out);
            }
        }

        match self.current_folder() {
            None => {
                let mut all = Vec::new();
                collect(&self.folders, &mut all);
                all
            }
            Some(folder) => folder.documents.iter().collect(),
        }
    }

    /// Documents after applying the search term.
    pub fn filtered_documents(&self) -> Vec<&Document> {
        filter_documents(self.documents_here(), &self.search)
    }

    /// All selectable rows: visible folders first, then filtered documents.
    pub fn rows(&self) -> Vec<BrowserRow> {
        let mut rows = self.folder_rows();
        rows.extend(
            self.filtered_documents()
                .into_iter()
                .map(|d| BrowserRow::Document { id: d.id.clone() }),
        );
        rows
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1) as isize;
        self.selected = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Open the selected folder (descend) if a folder row is selected.
    ///
    /// Tree rows can sit several levels below the current location, so the
    /// whole ancestor chain is pushed, keeping the path resolvable.
    pub fn activate_selected(&mut self) -> Result<(), NavError> {
        if let Some(BrowserRow::Folder { id, .. }) = self.rows().get(self.selected).cloned() {
            let base = match self.current_folder() {
                None => &self.folders,
                Some(current) => &current.sub_folders,
            };
            let chain: Vec<(String, String)> = Folder::path_to(base, &id)
                .unwrap_or_default()
                .into_iter()
                .map(|f| (f.id.clone(), f.name.clone()))
                .collect();
            for (id, name) in chain {
                self.navigator.push_segment(&id, &name);
            }
            self.selected = 0;
        }
        self.repair()
    }

    /// Toggle expansion of the selected folder row.
    pub fn toggle_selected(&mut self) {
        if let Some(BrowserRow::Folder { id, .. }) = self.rows().get(self.selected).cloned() {
            Folder::toggle(&mut self.folders, &id);
        }
    }

    /// Go up one level.
    pub fn go_back(&mut self) -> Result<(), NavError> {
        self.navigator.go_back();
        self.selected = 0;
        self.repair()
    }

    /// Jump to a breadcrumb segment.
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavError> {
        self.navigator.jump_to(index);
        self.selected = 0;
        self.repair()
    }

    /// Reset navigation and search, back to the root listing.
    pub fn reset(&mut self) {
        self.navigator.reset();
        self.search.clear();
        self.searching = false;
        self.selected = 0;
    }

    /// Handle a key event; returns `Ok(true)` when consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool, NavError> {
        if self.searching {
            match key.code {
                KeyCode::Esc => {
                    self.searching = false;
                    self.search.clear();
                }
                KeyCode::Enter => self.searching = false,
                KeyCode::Backspace => {
                    self.search.pop();
                }
                KeyCode::Char(c) => self.search.push(c),
                _ => return Ok(false),
            }
            self.selected = 0;
            return Ok(true);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.activate_selected()?,
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('h') | KeyCode::Left => {
                self.go_back()?
            }
            KeyCode::Char('/') => {
                self.searching = true;
                self.search.clear();
            }
            KeyCode::Char('v') => {
                self.view_mode = match self.view_mode {
                    ViewMode::List => ViewMode::Grid,
                    ViewMode::Grid => ViewMode::List,
                };
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0) as usize;
                if digit >= 1 {
                    self.jump_to(digit - 1)?;
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;

    fn state() -> BrowserState {
        BrowserState::new(sample::intranet().folders)
    }

    #[test]
    fn root_lists_folders_then_documents() {
        let state = state();
        let rows = state.rows();
        assert!(matches!(rows[0], BrowserRow::Folder { .. }));
        assert!(rows
            .iter()
            .any(|r| matches!(r, BrowserRow::Document { .. })));
    }

    #[test]
    fn descend_and_back() {
        let mut state = state();
        // "Relatórios" is expanded in the sample; first row is the root folder.
        state.selected = 0;
        state.activate_selected().unwrap();
        assert_eq!(state.current_folder().unwrap().name, "Relatórios");

        state.go_back().unwrap();
        assert!(state.current_folder().is_none());
    }

    #[test]
    fn search_narrows_documents() {
        let mut state = state();
        state.search = "organ".into();
        let names: Vec<_> = state
            .filtered_documents()
            .iter()
            .map(|d| d.name.clone())
            .collect();
        assert_eq!(names, vec!["Organograma.png".to_string()]);
    }

    #[test]
    fn stale_path_resets_to_root() {
        let mut state = state();
        state.selected = 0;
        state.activate_selected().unwrap();
        assert!(!state.navigator.is_root());

        state.folders.clear();
        assert!(state.repair().is_err());
        assert!(state.navigator.is_root());
        assert!(state.current_folder().is_none());
    }

    #[test]
    fn digit_key_jumps_to_breadcrumb_segment() {
        let mut state = state();
        state.activate_selected().unwrap();
        // Descend again into the sub-folder row if present.
        state.activate_selected().unwrap();
        assert_eq!(state.navigator.depth(), 2);

        state
            .handle_key(KeyEvent::from(KeyCode::Char('1')))
            .unwrap();
        assert_eq!(state.navigator.depth(), 1);
    }
}
