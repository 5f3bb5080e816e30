//! Celebration card: birthdays, work anniversaries, new hires.

use crate::host::HostContext;
use crate::model::BirthdayEntry;
use crate::text::truncate;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// What the card celebrates; picks icon, title and empty message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CelebrationVariant {
    #[default]
    Birthday,
    Anniversary,
    NewHire,
}

impl CelebrationVariant {
    fn icon(&self) -> &'static str {
        match self {
            Self::Birthday => "🎂",
            Self::Anniversary => "🎁",
            Self::NewHire => "👋",
        }
    }

    fn default_title(&self) -> &'static str {
        match self {
            Self::Birthday => "Aniversariantes da Semana",
            Self::Anniversary => "Aniversários de Empresa",
            Self::NewHire => "Novos Colaboradores",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            Self::Birthday => "Nenhum aniversário esta semana",
            Self::Anniversary => "Nenhum aniversário de empresa",
            Self::NewHire => "Nenhuma contratação recente",
        }
    }
}

/// List of celebrated people.
pub struct BirthdayCard<'a> {
    title: Option<&'a str>,
    people: &'a [BirthdayEntry],
    variant: CelebrationVariant,
    show_department: bool,
    max_items: usize,
    host: HostContext<'a>,
    component_id: &'a str,
}

impl<'a> BirthdayCard<'a> {
    pub fn new(people: &'a [BirthdayEntry]) -> Self {
        Self {
            title: None,
            people,
            variant: CelebrationVariant::default(),
            show_department: true,
            max_items: 5,
            host: HostContext::detached(),
            component_id: "birthday-card",
        }
    }

    /// Override the variant's default title.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn variant(mut self, variant: CelebrationVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn show_department(mut self, show_department: bool) -> Self {
        self.show_department = show_department;
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
}

impl Widget for BirthdayCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self.title.unwrap_or_else(|| self.variant.default_title());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} {} ", self.variant.icon(), title))
            .border_style(if self.host.is_selected(self.component_id) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 6 || inner.height < 1 {
            return;
        }
        let width = inner.width as usize;

        if self.people.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                self.variant.empty_message(),
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        for (i, entry) in self.people.iter().take(self.max_items).enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let day_month = entry.date.format("%d/%m").to_string();
            let mut line = format!("{} {} · {}", self.variant.icon(), entry.name, day_month);
            if self.show_department {
                line.push_str(&format!(" · {}", entry.department));
            }
            if let Some(age) = entry.age {
                line.push_str(&format!(" · {age} anos"));
            }
            buf.set_string(inner.x, y, truncate(&line, width), Style::default());
        }
    }
}
