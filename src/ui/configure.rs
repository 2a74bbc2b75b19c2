use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{render_controls, render_notice};
use crate::app::App;
use crate::config::{MAX_QUESTIONS, MIN_QUESTIONS};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_topics(frame, chunks[1], app);
    render_count(frame, chunks[2], app);
    render_notice(frame, chunks[3], app.notice());
    render_controls(
        frame,
        chunks[4],
        "j/k move  ·  space toggle topic  ·  h/l count  ·  enter generate  ·  q quit",
    );
}

fn render_title(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TOPIC QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Test your knowledge across multiple topics!".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_topics(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = app
        .all_tags()
        .iter()
        .enumerate()
        .map(|(index, tag)| {
            let is_cursor = index == app.tag_cursor();
            let checkbox = if app.is_tag_selected(tag) { "[x]" } else { "[ ]" };
            let style = if is_cursor {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_cursor { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{} ", checkbox), style),
                Span::styled(tag.as_str(), style),
            ])
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from("No topics in the question bank".fg(Color::DarkGray)));
    }

    let title = if app.selected_tags().is_empty() {
        " Topics (none selected = all) ".to_string()
    } else {
        format!(" Topics ({} selected) ", app.selected_tags().len())
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_count(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("Questions: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("< {} >", app.question_count()),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::styled(
            format!(
                "   ({}-{}, {} available)",
                MIN_QUESTIONS,
                MAX_QUESTIONS,
                app.available_questions()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
