//! # topic-quiz
//!
//! A terminal quiz over a JSON question bank: pick topics, answer single- or
//! multiple-choice questions, and get a score with partial credit.
//!
//! The scoring and sampling core is usable on its own:
//!
//! ```rust,no_run
//! use topic_quiz::{correct_quiz, Answers, QuestionBank, QuizSampler};
//!
//! fn main() -> Result<(), topic_quiz::QuizError> {
//!     let bank = QuestionBank::load("questions.json")?;
//!     let sample = QuizSampler::seeded(7).generate_quiz(&bank, &["oop"], 10)?;
//!
//!     let mut answers = Answers::new();
//!     answers.insert(0, [1].into());
//!
//!     let result = correct_quiz(sample.questions(), &answers);
//!     println!("{:.1}%", result.percentage);
//!     Ok(())
//! }
//! ```
//!
//! Or run the whole quiz in the terminal:
//!
//! ```rust,no_run
//! use topic_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("questions.json", QuizConfig::default())?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod data;
mod error;
mod models;
mod quiz;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Notice};
pub use config::{DEFAULT_QUESTION_COUNT, MAX_QUESTIONS, MIN_QUESTIONS, QUESTION_STEP, QuizConfig};
pub use data::{DEFAULT_QUESTIONS_PATH, QuestionBank, load_questions_from_json, parse_questions};
pub use error::{DatasetError, QuestionError, QuizError, SampleError};
pub use models::{
    Answers, AppState, Distribution, Grade, Mode, OptionId, OptionSet, Question, QuestionResult,
    QuestionScore, QuizResult,
};
pub use quiz::scoring::{score_multiple, score_single};
pub use quiz::{QuizSampler, Sample, correct_quiz, score_question};

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        Self {
            app: App::new(bank, config),
        }
    }

    /// Load the question bank from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let bank = QuestionBank::load(path)?;
        Ok(Self::new(bank, config))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal_mut(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    app.clear_notice();
    match app.state {
        AppState::Configuring => handle_configuring_input(app, key),
        AppState::Generated => handle_generated_input(app, key),
        AppState::Answering => handle_answering_input(app, key),
        AppState::Corrected => handle_corrected_input(app, key),
    }
    false
}

fn handle_configuring_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_tag(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_tag(),
        KeyCode::Char(' ') => app.toggle_tag(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.decrease_count(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.increase_count(),
        KeyCode::Enter | KeyCode::Char('g') => app.generate(),
        _ => {}
    }
}

fn handle_generated_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.begin(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        _ => {}
    }
}

fn handle_answering_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_option(),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('n') => app.next_question(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('p') => app.previous_question(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        _ => {}
    }
}

fn handle_corrected_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        _ => {}
    }
}
