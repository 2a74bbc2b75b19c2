use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::{render_controls, render_notice};
use crate::app::App;
use crate::models::{Mode, OptionSet, Question};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_badges(frame, chunks[1], question);
    render_question_text(frame, chunks[2], question.text());

    let empty = OptionSet::new();
    render_options(
        frame,
        chunks[3],
        question,
        app.current_selection().unwrap_or(&empty),
        app.selected_option(),
    );

    render_notice(frame, chunks[4], app.notice());
    render_controls(
        frame,
        chunks[5],
        "j/k navigate  ·  space select  ·  n/p question  ·  s submit  ·  r reset  ·  q quit",
    );
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let answered = app.total_questions() - app.unanswered_questions().len();
    let progress = format!(
        "{}/{}  ·  {} answered",
        app.current_question_number(),
        app.total_questions(),
        answered
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_badges(frame: &mut Frame, area: Rect, question: &Question) {
    let mode_color = match question.mode() {
        Mode::Single => Color::Blue,
        Mode::Multiple => Color::Green,
    };

    let mut spans = vec![Span::styled(
        question.mode().label(),
        Style::default().fg(mode_color).bold(),
    )];
    for tag in question.tags() {
        spans.push(Span::styled(
            format!("  #{}", tag),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selection: &OptionSet,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options().len() * 2);

    for (index, option) in question.options().iter().enumerate() {
        let is_cursor = index == cursor;
        let is_picked = selection.contains(&index);
        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else if is_picked {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };
        let mark = match (question.mode(), is_picked) {
            (Mode::Single, true) => "(*)",
            (Mode::Single, false) => "( )",
            (Mode::Multiple, true) => "[x]",
            (Mode::Multiple, false) => "[ ]",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", mark), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let hint = match question.mode() {
        Mode::Single => " Select your answer ",
        Mode::Multiple => " Select all correct answers ",
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .title(hint)
            .title_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::top(1)),
    );
    frame.render_widget(widget, area);
}

/// `A`, `B`, ... for the first 26 options, then the one-based number.
pub(super) fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(b'A' + offset).to_string(),
        _ => (index + 1).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(0), "A");
        assert_eq!(option_label(3), "D");
        assert_eq!(option_label(25), "Z");
        assert_eq!(option_label(26), "27");
    }
}
