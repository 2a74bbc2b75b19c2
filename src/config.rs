//! Quiz configuration shared by the CLI and the configuration screen.

use tracing::warn;

pub const MIN_QUESTIONS: usize = 5;
pub const MAX_QUESTIONS: usize = 50;
pub const QUESTION_STEP: usize = 5;
pub const DEFAULT_QUESTION_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    question_count: usize,
    /// Topics selected when the session starts.
    pub tags: Vec<String>,
    /// Fixed seed for reproducible quizzes.
    pub seed: Option<u64>,
}

impl QuizConfig {
    pub fn new(question_count: usize) -> Self {
        Self {
            question_count: clamp_count(question_count),
            tags: Vec::new(),
            seed: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn increase_count(&mut self) {
        self.question_count = (self.question_count + QUESTION_STEP).min(MAX_QUESTIONS);
    }

    pub fn decrease_count(&mut self) {
        self.question_count = self
            .question_count
            .saturating_sub(QUESTION_STEP)
            .max(MIN_QUESTIONS);
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTION_COUNT)
    }
}

fn clamp_count(count: usize) -> usize {
    let clamped = count.clamp(MIN_QUESTIONS, MAX_QUESTIONS);
    if clamped != count {
        warn!(requested = count, used = clamped, "question count out of range");
    }
    clamped
}
