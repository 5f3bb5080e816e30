//! Department selector - shows the chosen department with stats and manager.

use crate::host::HostContext;
use crate::model::{person_by_id, Department, Person};
use crate::text::truncate;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// Presentation of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorLayout {
    /// Bordered card with description and stats.
    #[default]
    Card,
    /// Single line.
    Compact,
    /// Colored full-width strip.
    Banner,
}

/// Selected-department display.
pub struct DepartmentSelector<'a> {
    departments: &'a [Department],
    people: &'a [Person],
    selected_id: &'a str,
    layout: SelectorLayout,
    show_stats: bool,
    show_manager: bool,
    show_access_button: bool,
    host: HostContext<'a>,
    component_id: &'a str,
}

impl<'a> DepartmentSelector<'a> {
    pub fn new(departments: &'a [Department]) -> Self {
        Self {
            departments,
            people: &[],
            selected_id: "",
            layout: SelectorLayout::default(),
            show_stats: true,
            show_manager: true,
            show_access_button: true,
            host: HostContext::detached(),
            component_id: "department-selector",
        }
    }

    /// Department to display; falls back to the first one.
    pub fn selected(mut self, selected_id: &'a str) -> Self {
        self.selected_id = selected_id;
        self
    }

    pub fn people(mut self, people: &'a [Person]) -> Self {
        self.people = people;
        self
    }

    pub fn layout(mut self, layout: SelectorLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn show_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    pub fn show_manager(mut self, show_manager: bool) -> Self {
        self.show_manager = show_manager;
        self
    }

    pub fn show_access_button(mut self, show_access_button: bool) -> Self {
        self.show_access_button = show_access_button;
        self
    }

    pub fn host(mut self, host: HostContext<'a>, component_id: &'a str) -> Self {
        self.host = host;
        self.component_id = component_id;
        self
    }

    fn department(&self) -> Option<&Department> {
        self.departments
            .iter()
            .find(|d| d.id == self.selected_id)
            .or_else(|| self.departments.first())
    }

    fn manager_name(&self, department: &Department) -> String {
        person_by_id(self.people, &department.manager_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Não definido".to_string())
    }
}

impl Widget for DepartmentSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(department) = self.department() else {
            return;
        };
        let selected = self.host.is_selected(self.component_id);

        match self.layout {
            SelectorLayout::Compact => {
                let mut line = format!("● {}", department.name);
                if self.show_stats {
                    line.push_str(&format!(" · {} membros", department.member_count));
                }
                if self.show_manager {
                    line.push_str(&format!(" · {}", self.manager_name(department)));
                }
                buf.set_string(
                    area.x,
                    area.y,
                    truncate(&line, area.width as usize),
                    Style::default().fg(department.color),
                );
            }
            SelectorLayout::Banner => {
                for y in area.y..area.y + area.height {
                    for x in area.x..area.x + area.width {
                        buf[(x, y)].set_style(
                            Style::default().bg(department.color).fg(Color::White),
                        );
                    }
                }
                let line = format!("  {}  —  {}", department.name, department.description);
                buf.set_string(
                    area.x,
                    area.y + area.height / 2,
                    truncate(&line, area.width as usize),
                    Style::default()
                        .bg(department.color)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                );
            }
            SelectorLayout::Card => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" ● {} ", department.name))
                    .border_style(if selected {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(department.color)
                    });
                let inner = block.inner(area);
                block.render(area, buf);

                if inner.width < 6 || inner.height < 1 {
                    return;
                }
                let width = inner.width as usize;

                let mut y = inner.y;
                buf.set_string(
                    inner.x,
                    y,
                    truncate(&department.description, width),
                    Style::default().fg(Color::DarkGray),
                );
                y += 1;
                if self.show_stats && y < inner.y + inner.height {
                    buf.set_string(
                        inner.x,
                        y,
                        truncate(&format!("👥 {} membros", department.member_count), width),
                        Style::default(),
                    );
                    y += 1;
                }
                if self.show_manager && y < inner.y + inner.height {
                    buf.set_string(
                        inner.x,
                        y,
                        truncate(
                            &format!("👑 Gestor: {}", self.manager_name(department)),
                            width,
                        ),
                        Style::default(),
                    );
                    y += 1;
                }
                if self.show_access_button && y < inner.y + inner.height {
                    buf.set_string(
                        inner.x,
                        y,
                        "[ Acessar Departamento → ]",
                        Style::default()
                            .fg(department.color)
                            .add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;

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
    fn card_layout_shows_stats_and_manager() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 8));
        DepartmentSelector::new(&data.departments)
            .people(&data.people)
            .selected("4")
            .render(buf.area, &mut buf);
        let text = contents(&buf);
        assert!(text.contains("TI"));
        assert!(text.contains("15 membros"));
        assert!(text.contains("Carlos Lima"));
        assert!(text.contains("Acessar Departamento"));
    }

    #[test]
    fn unknown_id_falls_back_to_first_department() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 8));
        DepartmentSelector::new(&data.departments)
            .people(&data.people)
            .selected("nope")
            .render(buf.area, &mut buf);
        assert!(contents(&buf).contains("Vendas"));
    }

    #[test]
    fn compact_layout_is_one_line() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 1));
        DepartmentSelector::new(&data.departments)
            .people(&data.people)
            .selected("1")
            .layout(SelectorLayout::Compact)
            .render(buf.area, &mut buf);
        let text = contents(&buf);
        assert!(text.contains("● Vendas"));
        assert!(text.contains("12 membros"));
    }
}
