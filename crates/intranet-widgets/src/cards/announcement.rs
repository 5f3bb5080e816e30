//! Announcement card.

use crate::host::HostContext;
use crate::model::{format_date, Announcement};
use crate::text::truncate;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// Visual tone of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Urgent,
    Info,
}

impl CardVariant {
    fn accent(&self) -> Color {
        match self {
            Self::Default => Color::Blue,
            Self::Urgent => Color::Red,
            Self::Info => Color::Cyan,
        }
    }
}

/// A single announcement with author/date/category meta.
pub struct AnnouncementCard<'a> {
    announcement: &'a Announcement,
    show_author: bool,
    show_date: bool,
    show_category: bool,
    variant: CardVariant,
    host: HostContext<'a>,
    component_id: &'a str,
}

impl<'a> AnnouncementCard<'a> {
    pub fn new(announcement: &'a Announcement) -> Self {
        // Urgent announcements force the urgent tone.
        let variant = if announcement.urgent {
            CardVariant::Urgent
        } else {
            CardVariant::Default
        };
        Self {
            announcement,
            show_author: true,
            show_date: true,
            show_category: true,
            variant,
            host: HostContext::detached(),
            component_id: "announcement-card",
        }
    }

    pub fn show_author(mut self, show_author: bool) -> Self {
        self.show_author = show_author;
        self
    }

    pub fn show_date(mut self, show_date: bool) -> Self {
        self.show_date = show_date;
        self
    }

    pub fn show_category(mut self, show_category: bool) -> Self {
        self.show_category = show_category;
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn host(mut self, host: HostContext<'a>, component_id: &'a str) -> Self {
        self.host = host;
        self.component_id = component_id;
        self
    }

    fn meta_line(&self) -> String {
        let mut parts = Vec::new();
        if self.show_author {
            parts.push(self.announcement.author.clone());
        }
        if self.show_date {
            parts.push(format_date(self.announcement.date));
        }
        if self.show_category {
            parts.push(self.announcement.category.clone());
        }
        parts.join(" · ")
    }
}

impl Widget for AnnouncementCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = if self.host.is_selected(self.component_id) {
            Color::Yellow
        } else {
            self.variant.accent()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.announcement.title))
            .border_style(Style::default().fg(accent));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 6 || inner.height < 1 {
            return;
        }
        let width = inner.width as usize;

        let mut y = inner.y;
        if self.variant == CardVariant::Urgent {
            buf.set_string(
                inner.x,
                y,
                "⚠ URGENTE",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
            y += 1;
        }
        if y < inner.y + inner.height {
            buf.set_string(
                inner.x,
                y,
                truncate(&self.announcement.content, width),
                Style::default(),
            );
            y += 1;
        }
        let meta = self.meta_line();
        if !meta.is_empty() && y < inner.y + inner.height {
            buf.set_string(
                inner.x,
                y,
                truncate(&meta, width),
                Style::default().fg(Color::DarkGray),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::buffer_contents;
    use crate::model::sample;

    #[test]
    fn renders_content_and_meta() {
        let ann = sample::intranet().announcement;
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 6));
        AnnouncementCard::new(&ann).render(buf.area, &mut buf);
        let text = buffer_contents(&buf);
        assert!(text.contains("Comunicado Importante"));
        assert!(text.contains("João Silva"));
        assert!(text.contains("15/01/2024"));
    }

    #[test]
    fn urgent_flag_adds_banner() {
        let mut ann = sample::intranet().announcement;
        ann.urgent = true;
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 6));
        AnnouncementCard::new(&ann).render(buf.area, &mut buf);
        assert!(buffer_contents(&buf).contains("⚠ URGENTE"));
    }

    #[test]
    fn meta_respects_visibility_toggles() {
        let ann = sample::intranet().announcement;
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 6));
        AnnouncementCard::new(&ann)
            .show_author(false)
            .show_category(false)
            .render(buf.area, &mut buf);
        let text = buffer_contents(&buf);
        assert!(!text.contains("João Silva"));
        assert!(text.contains("15/01/2024"));
    }
}
