use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{render_controls, render_notice};
use crate::app::App;
use crate::models::Mode;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .split(area);

    let single = app
        .questions()
        .iter()
        .filter(|q| q.mode() == Mode::Single)
        .count();
    let multiple = app.total_questions() - single;

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ READY",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} Questions · {} single · {} multiple",
                app.total_questions(),
                single,
                multiple
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
    render_notice(frame, chunks[2], app.notice());
    render_controls(frame, chunks[4], "enter start  ·  r reset  ·  q quit");
}
