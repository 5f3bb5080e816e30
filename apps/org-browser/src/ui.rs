//! UI rendering for the org browser.

use crate::app::App;
use intranet_widgets::OrgStructure;
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
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    let structure = OrgStructure::new()
        .title(&app.config.display.title)
        .description(&app.config.display.description)
        .people(&app.people);
    f.render_stateful_widget(structure, chunks[0], &mut app.state);

    draw_status(f, app, chunks[1]);

    if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.state.status {
        Some(message) => (message.clone(), Style::default().fg(Color::Red)),
        None => (
            "Tab: painel · Espaço: expandir · Enter: selecionar · ?: ajuda · q: sair".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from("Árvore"),
        Line::from("  ↑/k ↓/j    mover cursor"),
        Line::from("  Espaço     expandir/recolher área"),
        Line::from("  Enter      selecionar área"),
        Line::from("  Esc        limpar seleção"),
        Line::from(""),
        Line::from("Detalhe"),
        Line::from("  ] [        alternar abas"),
        Line::from("  Enter/l    abrir pasta"),
        Line::from("  Backspace  voltar uma pasta"),
        Line::from("  1-9        saltar na trilha"),
        Line::from("  /          buscar documentos"),
        Line::from("  v          lista/grade"),
        Line::from(""),
        Line::from("  Tab        alternar painel"),
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
