use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Padding, Paragraph},
};

use super::{grade_color, render_controls, score_color, truncate};
use crate::app::App;
use crate::models::{Mode, Question, QuestionResult, QuizResult};

const QUESTION_PREVIEW_LENGTH: usize = 55;
const LINES_PER_QUESTION: usize = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], result);

    let charts = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    render_distribution(frame, charts[0], result);
    render_score_per_question(frame, charts[1], result);

    render_overall_gauge(frame, chunks[2], result);
    render_question_breakdown(frame, chunks[3], app.questions(), result, app.result_scroll());
    render_controls(frame, chunks[4], "j/k scroll  ·  r new quiz  ·  q quit");
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let color = grade_color(result.percentage);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{:.2} / {}  ({:.1}%)",
                result.total_score, result.max_score, result.percentage
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "Correct answers: {} / {}",
                result.correct_count(),
                result.max_score
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            result.grade().message(),
            Style::default().fg(color),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan))
}

fn render_distribution(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let distribution = result.distribution();
    let bars = [
        ("Correct", distribution.correct, Color::Green),
        ("Partial", distribution.partial, Color::Yellow),
        ("Incorrect", distribution.incorrect, Color::Red),
    ]
    .into_iter()
    .map(|(label, count, color)| {
        Bar::default()
            .value(count as u64)
            .label(Line::from(label))
            .style(Style::default().fg(color))
    })
    .collect::<Vec<_>>();

    let widget = BarChart::default()
        .block(chart_block(" Answer Distribution "))
        .bar_width(9)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(widget, area);
}

fn render_score_per_question(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let bars = result
        .details
        .iter()
        .map(|detail| {
            Bar::default()
                .value((detail.score * 100.0).round() as u64)
                .text_value(format!("{:.1}", detail.score))
                .label(Line::from((detail.question_index + 1).to_string()))
                .style(Style::default().fg(score_color(detail.score)))
        })
        .collect::<Vec<_>>();

    let widget = BarChart::default()
        .block(chart_block(" Score per Question "))
        .bar_width(3)
        .bar_gap(1)
        .max(100)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(widget, area);
}

fn render_overall_gauge(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let ratio = (result.percentage / 100.0).clamp(0.0, 1.0);
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(grade_color(result.percentage)))
        .ratio(ratio)
        .label(format!("Overall {:.1}%", result.percentage));
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    questions: &[Question],
    result: &QuizResult,
    scroll: usize,
) {
    let lines: Vec<Line> = result
        .details
        .iter()
        .zip(questions.iter())
        .flat_map(|(detail, question)| question_lines(detail, question))
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Detailed Results ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll(((scroll * LINES_PER_QUESTION) as u16, 0));
    frame.render_widget(widget, area);
}

fn question_lines(detail: &QuestionResult, question: &Question) -> [Line<'static>; LINES_PER_QUESTION] {
    let (symbol, color) = if detail.is_correct {
        ("+", Color::Green)
    } else if detail.is_partial() {
        ("~", Color::Yellow)
    } else {
        ("-", Color::Red)
    };

    let selected = question.describe(&detail.selected_answers);
    let selected = if selected.is_empty() {
        "No answer".to_string()
    } else {
        selected.join(", ")
    };
    let partial_note = if detail.mode == Mode::Multiple && detail.is_partial() {
        format!("  (partial credit: {:.2})", detail.score)
    } else {
        String::new()
    };

    [
        Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", detail.question_index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate(&detail.question_text, QUESTION_PREVIEW_LENGTH),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("  {:.2}/1.00", detail.score),
                Style::default().fg(color),
            ),
        ]),
        Line::from(vec![
            Span::styled("      yours:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}{}", selected, partial_note), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("      correct: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                question.describe(&detail.correct_answers).join(", "),
                Style::default().fg(Color::Green),
            ),
        ]),
    ]
}
