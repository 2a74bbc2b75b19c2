use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DatasetError, QuestionError};
use crate::models::{Mode, OptionSet, Question};

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// A correct answer is named either by its choice text or by its position.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerRef {
    Index(usize),
    Text(String),
}

#[derive(Deserialize)]
struct RawQuestion {
    #[serde(alias = "text")]
    question: Option<String>,
    #[serde(alias = "options")]
    choices: Option<Vec<String>>,
    #[serde(alias = "correct_answers")]
    correct: Option<Vec<AnswerRef>>,
    mode: Option<Mode>,
    #[serde(default)]
    tags: Vec<String>,
}

impl RawQuestion {
    fn into_question(self) -> Result<Question, QuestionError> {
        let text = self.question.ok_or(QuestionError::MissingField("question"))?;
        let choices = self.choices.ok_or(QuestionError::MissingField("choices"))?;
        let correct = self.correct.ok_or(QuestionError::MissingField("correct"))?;
        let mode = self.mode.ok_or(QuestionError::MissingField("mode"))?;

        let correct = resolve_answers(&choices, correct)?;
        Question::new(text, choices, correct, mode, self.tags)
    }
}

fn resolve_answers(choices: &[String], answers: Vec<AnswerRef>) -> Result<OptionSet, QuestionError> {
    answers
        .into_iter()
        .map(|answer| match answer {
            AnswerRef::Index(id) if id < choices.len() => Ok(id),
            AnswerRef::Index(id) => Err(QuestionError::OptionOutOfRange(id)),
            AnswerRef::Text(text) => choices
                .iter()
                .position(|choice| *choice == text)
                .ok_or(QuestionError::UnknownAnswer(text)),
        })
        .collect()
}

/// Parse a JSON array of question records, validating each one.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, DatasetError> {
    let records: Vec<Value> = serde_json::from_str(json)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<RawQuestion>(record)
                .map_err(|err| QuestionError::Malformed(err.to_string()))
                .and_then(RawQuestion::into_question)
                .map_err(|source| DatasetError::InvalidRecord { index, source })
        })
        .collect()
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, DatasetError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions(&json_content)
}
