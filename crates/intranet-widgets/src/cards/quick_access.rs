//! Quick access card: shortcuts to internal tools.

use crate::host::HostContext;
use crate::model::QuickLink;
use crate::text::truncate;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// How the shortcuts are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardLayout {
    #[default]
    Grid,
    List,
}

/// Shortcut grid/list.
pub struct QuickAccessCard<'a> {
    title: &'a str,
    items: &'a [QuickLink],
    layout: CardLayout,
    show_descriptions: bool,
    show_categories: bool,
    max_items: usize,
    host: HostContext<'a>,
    component_id: &'a str,
}

impl<'a> QuickAccessCard<'a> {
    pub fn new(items: &'a [QuickLink]) -> Self {
        Self {
            title: "Acesso Rápido",
            items,
            layout: CardLayout::default(),
            show_descriptions: true,
            show_categories: false,
            max_items: 8,
            host: HostContext::detached(),
            component_id: "quick-access",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn layout(mut self, layout: CardLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn show_descriptions(mut self, show_descriptions: bool) -> Self {
        self.show_descriptions = show_descriptions;
        self
    }

    pub fn show_categories(mut self, show_categories: bool) -> Self {
        self.show_categories = show_categories;
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn host(mut self, host: HostContext<'a>, component_id: &'a str) -> Self {
        self.host = host;
        self.component_id = component_id;
        self
    }

    fn item_text(&self, item: &QuickLink) -> String {
        let icon = item.icon.as_deref().unwrap_or("🔗");
        let star = if item.featured { " ★" } else { "" };
        let mut line = format!("{icon} {}{star}", item.title);
        if self.show_categories {
            if let Some(category) = &item.category {
                line.push_str(&format!(" [{category}]"));
            }
        }
        line
    }
}

impl Widget for QuickAccessCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(if self.host.is_selected(self.component_id) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 8 || inner.height < 1 {
            return;
        }
        let width = inner.width as usize;

        if self.items.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "Nenhum atalho configurado",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let items: Vec<&QuickLink> = self.items.iter().take(self.max_items).collect();
        match self.layout {
            CardLayout::List => {
                let mut y = inner.y;
                for item in items {
                    if y >= inner.y + inner.height {
                        break;
                    }
                    buf.set_string(
                        inner.x,
                        y,
                        truncate(&self.item_text(item), width),
                        Style::default().add_modifier(Modifier::BOLD),
                    );
                    y += 1;
                    if self.show_descriptions && y < inner.y + inner.height {
                        buf.set_string(
                            inner.x + 2,
                            y,
                            truncate(&item.description, width.saturating_sub(2)),
                            Style::default().fg(Color::DarkGray),
                        );
                        y += 1;
                    }
                }
            }
            CardLayout::Grid => {
                // Two columns; descriptions are dropped to keep cells short.
                let col_width = width / 2;
                for (i, item) in items.iter().enumerate() {
                    let y = inner.y + (i / 2) as u16;
                    if y >= inner.y + inner.height {
                        break;
                    }
                    let x = inner.x + ((i % 2) * col_width) as u16;
                    buf.set_string(
                        x,
                        y,
                        truncate(&self.item_text(item), col_width),
                        Style::default().add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::buffer_contents;
    use crate::model::sample;

    #[test]
    fn grid_renders_two_columns() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 6));
        QuickAccessCard::new(&data.quick_links).render(buf.area, &mut buf);
        let text = buffer_contents(&buf);
        let first_line = text.lines().nth(1).unwrap_or_default();
        assert!(first_line.contains("Portal RH"));
        assert!(first_line.contains("Sistema de Projetos"));
    }

    #[test]
    fn list_shows_descriptions() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 12));
        QuickAccessCard::new(&data.quick_links)
            .layout(CardLayout::List)
            .render(buf.area, &mut buf);
        let text = buffer_contents(&buf);
        assert!(text.contains("Portal RH"));
        assert!(text.contains("folha de pagamento"));
    }

    #[test]
    fn featured_items_are_starred() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 12));
        QuickAccessCard::new(&data.quick_links)
            .layout(CardLayout::List)
            .show_descriptions(false)
            .render(buf.area, &mut buf);
        assert!(buffer_contents(&buf).contains("Portal RH ★"));
    }

    #[test]
    fn categories_toggle() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 12));
        QuickAccessCard::new(&data.quick_links)
            .layout(CardLayout::List)
            .show_descriptions(false)
            .show_categories(true)
            .render(buf.area, &mut buf);
        assert!(buffer_contents(&buf).contains("[Produtividade]"));
    }
}
