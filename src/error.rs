//! Error types for loading, sampling and running quizzes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A question record that violates the question invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("no correct answer given")]
    EmptyCorrect,

    #[error("single-choice question has {0} correct answers")]
    MultipleCorrect(usize),

    #[error("correct answer {0:?} is not one of the choices")]
    UnknownAnswer(String),

    #[error("correct answer index {0} is out of range")]
    OptionOutOfRange(usize),
}

/// Failure to build a question bank from a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

impl DatasetError {
    /// Index of the offending record, if the failure is tied to one.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            DatasetError::InvalidRecord { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Rejected sampling request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("question count must be a positive integer, got {0}")]
    InvalidSampleRequest(usize),
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Failed to generate quiz: {0}")]
    Sample(#[from] SampleError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
