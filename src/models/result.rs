use std::collections::HashMap;

use serde::Serialize;

use super::question::{Mode, OptionSet};

/// Selected options per quiz position. A missing entry means "no answer".
pub type Answers = HashMap<usize, OptionSet>;

/// Score for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestionScore {
    /// Partial credit in `[0, 1]`.
    pub score: f64,
    /// Set equality between the selection and the correct answers.
    pub is_correct: bool,
}

/// Per-question entry of a corrected quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionResult {
    pub question_index: usize,
    pub question_text: String,
    pub mode: Mode,
    pub correct_answers: OptionSet,
    pub selected_answers: OptionSet,
    pub score: f64,
    pub is_correct: bool,
}

impl QuestionResult {
    /// Some credit was earned, but the answer is not fully correct.
    pub fn is_partial(&self) -> bool {
        !self.is_correct && self.score > 0.0
    }
}

/// Outcome of correcting a whole quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub details: Vec<QuestionResult>,
    pub total_score: f64,
    pub max_score: usize,
    pub percentage: f64,
}

impl QuizResult {
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn correct_count(&self) -> usize {
        self.details.iter().filter(|d| d.is_correct).count()
    }

    pub fn distribution(&self) -> Distribution {
        let mut distribution = Distribution::default();
        for detail in &self.details {
            if detail.is_correct {
                distribution.correct += 1;
            } else if detail.is_partial() {
                distribution.partial += 1;
            } else {
                distribution.incorrect += 1;
            }
        }
        distribution
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

/// How many questions fell into each outcome bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub correct: usize,
    pub partial: usize,
    pub incorrect: usize,
}

/// Overall performance band of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    NeedsPractice,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::Excellent
        } else if percentage >= 70.0 {
            Grade::Good
        } else if percentage >= 50.0 {
            Grade::Fair
        } else {
            Grade::NeedsPractice
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! Outstanding performance!",
            Grade::Good => "Good job! Well done!",
            Grade::Fair => "Not bad, but there's room for improvement!",
            Grade::NeedsPractice => "Keep practicing! You'll get better!",
        }
    }
}
