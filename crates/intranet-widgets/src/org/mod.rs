//! Organizational structure browser - unit tree with a tabbed detail pane.

mod state;

pub use state::{DetailTab, OrgBrowserState, OrgPane, UnitRow};

use crate::browser::FolderBrowser;
use crate::host::HostContext;
use crate::model::{person_by_id, OrgUnit, Person};
use crate::text::truncate;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};

/// The organizational structure component.
///
/// Left pane: expandable unit tree. Right pane: detail of the active unit
/// with Overview / People / Documents tabs, or a placeholder when nothing is
/// selected.
pub struct OrgStructure<'a> {
    title: &'a str,
    description: &'a str,
    people: &'a [Person],
    host: HostContext<'a>,
    component_id: &'a str,
}

impl<'a> Default for OrgStructure<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> OrgStructure<'a> {
    pub fn new() -> Self {
        Self {
            title: "Estrutura Organizacional",
            description: "Visualize e gerencie a estrutura organizacional da empresa",
            people: &[],
            host: HostContext::detached(),
            component_id: "org-structure",
        }
    }

    /// Heading of the tree pane. Default: `Estrutura Organizacional`.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Sub-heading of the tree pane.
    pub fn description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    /// Person directory for member lists and owner badges.
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

    fn pane_border(&self, state: &OrgBrowserState, pane: OrgPane) -> Style {
        if self.host.is_selected(self.component_id) {
            Style::default().fg(Color::Yellow)
        } else if state.pane == pane {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }

    fn render_tree(&self, area: Rect, buf: &mut Buffer, state: &mut OrgBrowserState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(self.pane_border(state, OrgPane::Tree));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 2 {
            return;
        }
        let width = inner.width as usize;

        buf.set_string(
            inner.x,
            inner.y,
            truncate(self.description, width),
            Style::default().fg(Color::DarkGray),
        );

        let rows = state.visible_rows();
        let list_top = inner.y + 2;
        let visible = inner.height.saturating_sub(2) as usize;
        if visible == 0 || rows.is_empty() {
            return;
        }

        if state.cursor < state.tree_scroll {
            state.tree_scroll = state.cursor;
        } else if state.cursor >= state.tree_scroll + visible {
            state.tree_scroll = state.cursor + 1 - visible;
        }

        for (i, row) in rows.iter().skip(state.tree_scroll).take(visible).enumerate() {
            let y = list_top + i as u16;
            let index = state.tree_scroll + i;

            let mut style = Style::default();
            if index == state.cursor && state.pane == OrgPane::Tree {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            if state.selected_unit.as_deref() == Some(row.id.as_str()) {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            for x in inner.x..inner.x + inner.width {
                buf[(x, y)].set_style(style);
            }

            let indent = "  ".repeat(row.depth);
            let marker = if row.expandable {
                if row.expanded {
                    "▼"
                } else {
                    "▶"
                }
            } else {
                " "
            };
            let badge = if row.active { "" } else { " (inativo)" };
            let line = format!("{indent}{marker} 🏢 {}{badge}", row.title);
            buf.set_string(inner.x, y, truncate(&line, width), style);
        }
    }

    fn render_placeholder(&self, area: Rect, buf: &mut Buffer, state: &OrgBrowserState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.pane_border(state, OrgPane::Detail));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 {
            return;
        }
        let center_y = inner.y + inner.height / 2;
        let lines = [
            "Selecione uma estrutura",
            "",
            "Escolha uma unidade na árvore ao lado para ver",
            "detalhes, membros e documentos",
        ];
        for (i, line) in lines.iter().enumerate() {
            let y = center_y.saturating_sub(2) + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let w = line.chars().count() as u16;
            let x = inner.x + inner.width.saturating_sub(w) / 2;
            buf.set_string(x, y, *line, Style::default().fg(Color::DarkGray));
        }
    }

    fn render_detail(&self, area: Rect, buf: &mut Buffer, state: &mut OrgBrowserState) {
        let Some(unit) = state.selected().cloned() else {
            self.render_placeholder(area, buf, state);
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", unit.title))
            .border_style(self.pane_border(state, OrgPane::Detail));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 10 || inner.height < 6 {
            return;
        }
        let width = inner.width as usize;

        buf.set_string(
            inner.x,
            inner.y,
            truncate(&unit.description, width),
            Style::default().fg(Color::DarkGray),
        );

        // Quick stats.
        let doc_count = state.browser.filtered_documents().len();
        let status = if unit.active { "Ativo" } else { "Inativo" };
        let stats = format!(
            "Membros: {} · Subáreas: {} · Documentos: {} · {}",
            unit.member_ids.len(),
            unit.children.len(),
            doc_count,
            status,
        );
        buf.set_string(inner.x, inner.y + 1, truncate(&stats, width), Style::default());

        // Tab bar.
        let mut x = inner.x;
        let mut tabs = vec![DetailTab::Overview];
        if state.show_people {
            tabs.push(DetailTab::People);
        }
        if state.show_documents {
            tabs.push(DetailTab::Documents);
        }
        for tab in tabs {
            let label = format!(" {} ", tab.label());
            let style = if tab == state.active_tab {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            buf.set_string(x, inner.y + 3, &label, style);
            x += label.chars().count() as u16 + 1;
        }

        let content = Rect {
            x: inner.x,
            y: inner.y + 5,
            width: inner.width,
            height: inner.height.saturating_sub(5),
        };
        match state.active_tab {
            DetailTab::Overview => self.render_overview(content, buf, &unit),
            DetailTab::People => self.render_people(content, buf, &unit),
            DetailTab::Documents => {
                if state.show_documents {
                    FolderBrowser::new()
                        .people(self.people)
                        .focused(state.pane == OrgPane::Detail)
                        .render(content, buf, &mut state.browser);
                } else {
                    buf.set_string(
                        content.x,
                        content.y,
                        "Visualização de documentos desabilitada",
                        Style::default().fg(Color::DarkGray),
                    );
                }
            }
        }
    }

    fn render_overview(&self, area: Rect, buf: &mut Buffer, unit: &OrgUnit) {
        let width = area.width as usize;
        let manager = unit
            .member_ids
            .first()
            .and_then(|id| person_by_id(self.people, id))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Não definido".to_string());

        let lines = [
            ("Missão".to_string(), Style::default().add_modifier(Modifier::BOLD)),
            (
                "Impulsionar o crescimento da empresa através de estratégias inovadoras."
                    .to_string(),
                Style::default(),
            ),
            (String::new(), Style::default()),
            ("✉ departamento@empresa.com".to_string(), Style::default()),
            ("☎ +55 11 3456-7890".to_string(), Style::default()),
            ("📍 Edifício Principal - 3º Andar".to_string(), Style::default()),
            (format!("👑 Gestor: {manager}"), Style::default()),
        ];
        for (i, (line, style)) in lines.iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            buf.set_string(area.x, area.y + i as u16, truncate(line, width), *style);
        }
    }

    fn render_people(&self, area: Rect, buf: &mut Buffer, unit: &OrgUnit) {
        let width = area.width as usize;
        if unit.member_ids.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                "Nenhum membro encontrado",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let mut y = area.y;
        for id in &unit.member_ids {
            if y >= area.y + area.height {
                break;
            }
            let line = match person_by_id(self.people, id) {
                Some(person) => {
                    let crown = if person.is_manager { " 👑" } else { "" };
                    format!(
                        "({}) {}{crown} · {} · {}",
                        person.initials(),
                        person.name,
                        person.role,
                        person.email,
                    )
                }
                // Dangling reference: placeholder instead of a panic.
                None => format!("(??) desconhecido · id {id}"),
            };
            buf.set_string(area.x, y, truncate(&line, width), Style::default());
            y += 1;
        }
    }
}

impl StatefulWidget for OrgStructure<'_> {
    type State = OrgBrowserState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        self.render_tree(chunks[0], buf, state);
        self.render_detail(chunks[1], buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;

    fn render(state: &mut OrgBrowserState) -> String {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 20));
        OrgStructure::new()
            .people(&data.people)
            .render(buf.area, &mut buf, state);

        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn state() -> OrgBrowserState {
        let data = sample::intranet();
        OrgBrowserState::new(data.org_tree, data.folders)
    }

    #[test]
    fn placeholder_without_selection() {
        let mut state = state();
        let text = render(&mut state);
        assert!(text.contains("Selecione uma estrutura"));
    }

    #[test]
    fn detail_shows_selected_unit() {
        let mut state = state();
        state.select("2");
        let text = render(&mut state);
        assert!(text.contains("Vendas"));
        assert!(text.contains("Visão Geral"));
        assert!(text.contains("Membros: 3"));
    }

    #[test]
    fn people_tab_lists_members() {
        let mut state = state();
        state.select("2");
        state.active_tab = DetailTab::People;
        let text = render(&mut state);
        assert!(text.contains("Maria Silva"));
        assert!(text.contains("Representante de Vendas"));
    }

    #[test]
    fn documents_tab_embeds_browser() {
        let mut state = state();
        state.select("2");
        state.active_tab = DetailTab::Documents;
        let text = render(&mut state);
        assert!(text.contains("Relatórios"));
    }
}
