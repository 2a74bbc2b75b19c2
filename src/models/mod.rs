mod question;
mod result;

pub use question::{Mode, OptionId, OptionSet, Question};
pub use result::{Answers, Distribution, Grade, QuestionResult, QuestionScore, QuizResult};

/// Screen the quiz session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Picking topics and the number of questions.
    Configuring,
    /// A quiz was drawn and is waiting to be started.
    Generated,
    /// Answering questions.
    Answering,
    /// Answers were submitted and scored.
    Corrected,
}
