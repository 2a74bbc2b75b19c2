mod configure;
mod generated;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block, widgets::Paragraph};

use crate::app::{App, Notice};
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Configuring => configure::render(frame, area, app),
        AppState::Generated => generated::render(frame, area, app),
        AppState::Answering => quiz::render(frame, area, app),
        AppState::Corrected => result::render(frame, area, app),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    let (text, color) = match notice {
        Notice::Info(text) => (text, Color::Green),
        Notice::Warning(text) => (text, Color::Yellow),
        Notice::Error(text) => (text, Color::Red),
    };

    let widget = Paragraph::new(text.as_str())
        .alignment(Alignment::Center)
        .fg(color);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, controls: &str) {
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn score_color(score: f64) -> Color {
    if score >= 1.0 {
        Color::Green
    } else if score > 0.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
