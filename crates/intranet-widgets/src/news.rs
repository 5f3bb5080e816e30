//! News feed - recent company news with author, category and engagement
//! counters.

use crate::host::HostContext;
use crate::model::{format_date, NewsItem};
use crate::text::truncate;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// Density of the feed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedVariant {
    /// Title, summary and meta line per item.
    #[default]
    Default,
    /// One line per item.
    Compact,
    /// Adds a blank separator line between items.
    Detailed,
}

/// Recent news list.
pub struct NewsFeed<'a> {
    title: &'a str,
    items: &'a [NewsItem],
    max_items: usize,
    show_stats: bool,
    variant: FeedVariant,
    host: HostContext<'a>,
    component_id: &'a str,
}

impl<'a> NewsFeed<'a> {
    pub fn new(items: &'a [NewsItem]) -> Self {
        Self {
            title: "Notícias Recentes",
            items,
            max_items: 5,
            show_stats: true,
            variant: FeedVariant::default(),
            host: HostContext::detached(),
            component_id: "news-feed",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Cap of rendered items. Default: 5.
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Show like/comment counters. Default: true.
    pub fn show_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    pub fn variant(mut self, variant: FeedVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn host(mut self, host: HostContext<'a>, component_id: &'a str) -> Self {
        self.host = host;
        self.component_id = component_id;
        self
    }

    fn meta_line(&self, item: &NewsItem) -> String {
        let mut meta = format!(
            "{} · {} · {}",
            item.author,
            format_date(item.date),
            item.category
        );
        if self.show_stats {
            meta.push_str(&format!(" · ♥ {} 💬 {}", item.likes, item.comments));
        }
        meta
    }
}

impl Widget for NewsFeed<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = self.host.is_selected(self.component_id);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(if selected {
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
                "Nenhuma notícia publicada",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        for item in self.items.iter().take(self.max_items) {
            if y >= bottom {
                break;
            }
            match self.variant {
                FeedVariant::Compact => {
                    let line = format!("• {} ({})", item.title, format_date(item.date));
                    buf.set_string(inner.x, y, truncate(&line, width), Style::default());
                    y += 1;
                }
                FeedVariant::Default | FeedVariant::Detailed => {
                    buf.set_string(
                        inner.x,
                        y,
                        truncate(&format!("• {}", item.title), width),
                        Style::default().add_modifier(Modifier::BOLD),
                    );
                    y += 1;
                    if y < bottom {
                        buf.set_string(
                            inner.x + 2,
                            y,
                            truncate(&item.summary, width.saturating_sub(2)),
                            Style::default(),
                        );
                        y += 1;
                    }
                    if y < bottom {
                        buf.set_string(
                            inner.x + 2,
                            y,
                            truncate(&self.meta_line(item), width.saturating_sub(2)),
                            Style::default().fg(Color::DarkGray),
                        );
                        y += 1;
                    }
                    if self.variant == FeedVariant::Detailed {
                        y += 1;
                    }
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
    fn renders_items_with_meta() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 14));
        NewsFeed::new(&data.news).render(buf.area, &mut buf);
        let text = contents(&buf);
        assert!(text.contains("Nova política de trabalho remoto aprovada"));
        assert!(text.contains("♥ 24"));
    }

    #[test]
    fn max_items_caps_the_feed() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 14));
        NewsFeed::new(&data.news)
            .variant(FeedVariant::Compact)
            .max_items(1)
            .render(buf.area, &mut buf);
        let text = contents(&buf);
        assert!(text.contains("Nova política"));
        assert!(!text.contains("Resultados do Q4"));
    }

    #[test]
    fn stats_can_be_hidden() {
        let data = sample::intranet();
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 14));
        NewsFeed::new(&data.news)
            .show_stats(false)
            .render(buf.area, &mut buf);
        assert!(!contents(&buf).contains('♥'));
    }

    #[test]
    fn empty_feed_shows_placeholder() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 6));
        NewsFeed::new(&[]).render(buf.area, &mut buf);
        assert!(contents(&buf).contains("Nenhuma notícia publicada"));
    }
}
