//! UI rendering for the intranet dashboard.

use crate::app::App;
use intranet_widgets::{
    AnnouncementCard, BirthdayCard, DepartmentSelector, HeroBanner, NewsFeed, QuickAccessCard,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the application.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Banner
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    f.render_widget(HeroBanner::new(), chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_status(f, chunks[2]);

    if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let news = app.visible_news();
    let feed = NewsFeed::new(&news)
        .max_items(app.config.feed.max_items)
        .show_stats(app.config.feed.show_stats)
        .variant(app.feed_variant());
    f.render_widget(feed, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Department
            Constraint::Length(7),  // Announcement
            Constraint::Length(8),  // Birthdays
            Constraint::Min(6),     // Quick links
        ])
        .split(columns[1]);

    let selector = DepartmentSelector::new(&app.data.departments)
        .people(&app.data.people)
        .selected(app.selected_department_id());
    f.render_widget(selector, side[0]);

    f.render_widget(AnnouncementCard::new(&app.data.announcement), side[1]);
    f.render_widget(BirthdayCard::new(&app.data.birthdays), side[2]);
    f.render_widget(QuickAccessCard::new(&app.data.quick_links), side[3]);
}

fn draw_status(f: &mut Frame, area: Rect) {
    let text = "←/→: departamento · 1-5: departamento direto · ?: ajuda · q: sair";
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_help_popup(f: &mut Frame) {
    let area = centered_rect(40, 40, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from("  ←/h →/l    departamento anterior/próximo"),
        Line::from("  1-5        escolher departamento"),
        Line::from("  ?          esta ajuda"),
        Line::from("  q          sair"),
    ];
    let help = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Ajuda "))
        .alignment(Alignment::Left);
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
