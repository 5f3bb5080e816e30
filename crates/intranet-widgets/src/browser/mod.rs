//! Folder/document browser - breadcrumb navigation over a folder tree with
//! incremental document search.

mod filter;
mod path;
mod state;

pub use filter::filter_documents;
pub use path::{NavError, PathNavigator, PathSegment};
pub use state::{BrowserRow, BrowserState, ViewMode};

use crate::host::HostContext;
use crate::model::{person_by_id, Document, Person};
use crate::text::truncate;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};

/// Browsing view over one folder tree.
///
/// Renders breadcrumb, search box, visible folder rows and the filtered
/// document listing of the current location. Selection ring appears only when
/// the editing host reports this component as selected.
pub struct FolderBrowser<'a> {
    title: &'a str,
    people: &'a [Person],
    host: HostContext<'a>,
    component_id: &'a str,
    focused: bool,
}

impl<'a> Default for FolderBrowser<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FolderBrowser<'a> {
    pub fn new() -> Self {
        Self {
            title: "Documentos",
            people: &[],
            host: HostContext::detached(),
            component_id: "folder-browser",
            focused: false,
        }
    }

    /// Heading shown as the breadcrumb root. Default: `Documentos`.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Person directory for owner initials on rows.
    pub fn people(mut self, people: &'a [Person]) -> Self {
        self.people = people;
        self
    }

    /// Attach the editing host context.
    pub fn host(mut self, host: HostContext<'a>, component_id: &'a str) -> Self {
        self.host = host;
        self.component_id = component_id;
        self
    }

    /// Draw the focused border.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn border_style(&self) -> Style {
        if self.host.is_selected(self.component_id) {
            Style::default().fg(Color::Yellow)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }

    fn owner_tag(&self, owner_id: &str) -> String {
        person_by_id(self.people, owner_id)
            .map(|p| p.initials())
            .unwrap_or_else(|| "??".to_string())
    }

    fn document_line(&self, doc: &Document, width: usize) -> String {
        let star = if doc.starred { " ★" } else { "" };
        let line = format!(
            "  {} [{}] {} · {} · {}{}",
            doc.name,
            doc.doc_type,
            doc.size,
            doc.sharing.label(),
            self.owner_tag(&doc.owner_id),
            star,
        );
        truncate(&line, width)
    }
}

impl StatefulWidget for FolderBrowser<'_> {
    type State = BrowserState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(self.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 3 {
            return;
        }
        let width = inner.width as usize;

        // Breadcrumb with view mode indicator.
        let mode = match state.view_mode {
            ViewMode::List => "lista",
            ViewMode::Grid => "grade",
        };
        let crumb = format!("{} [{}]", state.navigator.breadcrumb(self.title), mode);
        buf.set_string(
            inner.x,
            inner.y,
            truncate(&crumb, width),
            Style::default().fg(Color::DarkGray),
        );

        // Search box.
        let search = if state.searching {
            format!("Buscar: {}_", state.search)
        } else if !state.search.is_empty() {
            format!("Buscar: {}", state.search)
        } else {
            "Pressione / para buscar documentos".to_string()
        };
        let search_style = if state.searching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        buf.set_string(inner.x, inner.y + 1, truncate(&search, width), search_style);

        let rows = state.rows();
        let list_area = Rect {
            x: inner.x,
            y: inner.y + 2,
            width: inner.width,
            height: inner.height - 2,
        };

        if rows.is_empty() {
            let msg = if state.search.is_empty() {
                "Nenhum documento nesta pasta"
            } else {
                "Nenhum documento encontrado"
            };
            buf.set_string(
                list_area.x + 2,
                list_area.y + list_area.height / 2,
                truncate(msg, width.saturating_sub(2)),
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        // Map each selectable row to a display line. In grid mode two
        // documents share one line; folders are always full width.
        let folder_count = rows
            .iter()
            .take_while(|r| matches!(r, BrowserRow::Folder { .. }))
            .count();
        let columns = match state.view_mode {
            ViewMode::List => 1,
            ViewMode::Grid => 2,
        };
        let line_of = |index: usize| -> usize {
            if index < folder_count {
                index
            } else {
                folder_count + (index - folder_count) / columns
            }
        };

        // Keep the selection on screen, scrolling whole lines.
        let visible = list_area.height as usize;
        let selected_line = line_of(state.selected.min(rows.len() - 1));
        if selected_line < state.scroll {
            state.scroll = selected_line;
        } else if selected_line >= state.scroll + visible {
            state.scroll = selected_line + 1 - visible;
        }

        let docs = state.filtered_documents();
        let col_width = width / columns;
        for (index, row) in rows.iter().enumerate() {
            let line = line_of(index);
            if line < state.scroll || line >= state.scroll + visible {
                continue;
            }
            let y = list_area.y + (line - state.scroll) as u16;
            let x = if index < folder_count {
                list_area.x
            } else {
                list_area.x + (((index - folder_count) % columns) * col_width) as u16
            };
            let cell_width = if index < folder_count { width } else { col_width };

            let mut style = Style::default();
            if index == state.selected {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }

            let text = match row {
                BrowserRow::Folder {
                    name,
                    depth,
                    expanded,
                    expandable,
                    owner_id,
                    ..
                } => {
                    style = style.fg(Color::Yellow);
                    let indent = "  ".repeat(*depth);
                    let marker = if *expandable {
                        if *expanded {
                            "▼"
                        } else {
                            "▶"
                        }
                    } else {
                        " "
                    };
                    truncate(
                        &format!("{indent}{marker} 📁 {name} · {}", self.owner_tag(owner_id)),
                        cell_width,
                    )
                }
                BrowserRow::Document { id } => docs
                    .iter()
                    .find(|d| &d.id == id)
                    .map(|d| self.document_line(d, cell_width))
                    .unwrap_or_default(),
            };
            buf.set_string(x, y, text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;

    fn render(state: &mut BrowserState) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 14));
        let data = sample::intranet();
        FolderBrowser::new()
            .people(&data.people)
            .render(buf.area, &mut buf, state);
        buf
    }

    fn contents(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_root_folders() {
        let mut state = BrowserState::new(sample::intranet().folders);
        let text = contents(&render(&mut state));
        assert!(text.contains("Relatórios"));
        assert!(text.contains("Treinamentos"));
    }

    #[test]
    fn renders_breadcrumb_after_descend() {
        let mut state = BrowserState::new(sample::intranet().folders);
        state.activate_selected().unwrap();
        let text = contents(&render(&mut state));
        assert!(text.contains("Documentos > Relatórios"));
    }

    #[test]
    fn empty_search_shows_placeholder() {
        let mut state = BrowserState::new(sample::intranet().folders);
        state.search = "nada-disso".into();
        // Folders still render; documents are filtered out.
        let text = contents(&render(&mut state));
        assert!(!text.contains("Organograma"));
    }
}
