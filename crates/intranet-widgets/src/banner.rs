//! Hero banner - large welcome header with an optional badge and call to
//! action.

use crate::host::HostContext;
use crate::text::truncate;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

/// Color scheme of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
}

impl BannerVariant {
    fn colors(&self) -> (Color, Color) {
        match self {
            Self::Primary => (Color::Blue, Color::White),
            Self::Secondary => (Color::DarkGray, Color::White),
            Self::Accent => (Color::Magenta, Color::White),
        }
    }
}

/// Full-width hero banner.
pub struct HeroBanner<'a> {
    title: &'a str,
    subtitle: &'a str,
    description: &'a str,
    cta_text: &'a str,
    badge_text: &'a str,
    show_badge: bool,
    variant: BannerVariant,
    host: HostContext<'a>,
    component_id: &'a str,
}

impl<'a> Default for HeroBanner<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> HeroBanner<'a> {
    pub fn new() -> Self {
        Self {
            title: "Bem-vindo à Nossa Intranet",
            subtitle: "Conectando pessoas, compartilhando conhecimento",
            description: "Acesse todas as informações e ferramentas que você precisa para ser mais produtivo no seu dia a dia.",
            cta_text: "Explorar Agora",
            badge_text: "Novo",
            show_badge: true,
            variant: BannerVariant::default(),
            host: HostContext::detached(),
            component_id: "hero-banner",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    pub fn cta_text(mut self, cta_text: &'a str) -> Self {
        self.cta_text = cta_text;
        self
    }

    pub fn badge_text(mut self, badge_text: &'a str) -> Self {
        self.badge_text = badge_text;
        self
    }

    pub fn show_badge(mut self, show_badge: bool) -> Self {
        self.show_badge = show_badge;
        self
    }

    pub fn variant(mut self, variant: BannerVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn host(mut self, host: HostContext<'a>, component_id: &'a str) -> Self {
        self.host = host;
        self.component_id = component_id;
        self
    }
}

impl Widget for HeroBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (bg, fg) = self.variant.colors();
        let selected = self.host.is_selected(self.component_id);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .border_style(if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(bg)
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 8 || inner.height < 3 {
            return;
        }
        let width = inner.width as usize;

        for y in inner.y..inner.y + inner.height {
            for x in inner.x..inner.x + inner.width {
                buf[(x, y)].set_style(Style::default().bg(bg).fg(fg));
            }
        }

        let centered = |buf: &mut Buffer, y: u16, text: &str, style: Style| {
            let text = truncate(text, width);
            let w = text.chars().count() as u16;
            let x = inner.x + inner.width.saturating_sub(w) / 2;
            buf.set_string(x, y, &text, style);
        };

        let mut y = inner.y;
        if self.show_badge && inner.height >= 5 {
            centered(
                buf,
                y,
                &format!("★ {}", self.badge_text),
                Style::default().bg(bg).fg(Color::Yellow).add_modifier(Modifier::BOLD),
            );
            y += 1;
        }
        centered(
            buf,
            y,
            self.title,
            Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
        );
        if y + 1 < inner.y + inner.height {
            centered(buf, y + 1, self.subtitle, Style::default().bg(bg).fg(fg));
        }
        if y + 2 < inner.y + inner.height {
            centered(
                buf,
                y + 2,
                self.description,
                Style::default().bg(bg).fg(fg).add_modifier(Modifier::DIM),
            );
        }
        if y + 3 < inner.y + inner.height {
            centered(
                buf,
                y + 3,
                &format!("[ {} ]", self.cta_text),
                Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::EditorHost;

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
    fn renders_default_copy() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 70, 8));
        HeroBanner::new().render(buf.area, &mut buf);
        let text = contents(&buf);
        assert!(text.contains("Bem-vindo à Nossa Intranet"));
        assert!(text.contains("★ Novo"));
        assert!(text.contains("[ Explorar Agora ]"));
    }

    #[test]
    fn badge_can_be_hidden() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 70, 8));
        HeroBanner::new().show_badge(false).render(buf.area, &mut buf);
        assert!(!contents(&buf).contains("★ Novo"));
    }

    #[test]
    fn host_selection_switches_to_double_border() {
        struct AlwaysSelected;
        impl EditorHost for AlwaysSelected {
            fn is_selected(&self, _: &str) -> bool {
                true
            }
        }

        let host = AlwaysSelected;
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 6));
        HeroBanner::new()
            .host(HostContext::new(&host), "hero")
            .render(buf.area, &mut buf);
        assert!(contents(&buf).contains('╔'));
    }
}
