use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuestionError;

/// Zero-based position of an option within its question.
pub type OptionId = usize;

/// A set of option ids. Ordered so that results display deterministically.
pub type OptionSet = BTreeSet<OptionId>;

/// Whether a question accepts one or several selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Single,
    Multiple,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Single => "SINGLE CHOICE",
            Mode::Multiple => "MULTIPLE CHOICE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single => f.write_str("single"),
            Mode::Multiple => f.write_str("multiple"),
        }
    }
}

/// An immutable, validated quiz question.
///
/// The correct-answer set is never empty, only references existing options,
/// and holds exactly one element for [`Mode::Single`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct: OptionSet,
    mode: Mode,
    tags: BTreeSet<String>,
}

impl Question {
    pub fn new<T, S>(
        text: impl Into<String>,
        options: Vec<String>,
        correct: OptionSet,
        mode: Mode,
        tags: T,
    ) -> Result<Self, QuestionError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if correct.is_empty() {
            return Err(QuestionError::EmptyCorrect);
        }
        if let Some(&id) = correct.iter().find(|&&id| id >= options.len()) {
            return Err(QuestionError::OptionOutOfRange(id));
        }
        if mode == Mode::Single && correct.len() > 1 {
            return Err(QuestionError::MultipleCorrect(correct.len()));
        }

        Ok(Self {
            text: text.into(),
            options,
            correct,
            mode,
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct(&self) -> &OptionSet {
        &self.correct
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// True if at least one of `tags` is attached to this question.
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag.as_ref()))
    }

    pub fn option_text(&self, id: OptionId) -> Option<&str> {
        self.options.get(id).map(String::as_str)
    }

    /// Option texts for a selection, in option order. Ids that do not name an
    /// option are rendered as `#<id>`.
    pub fn describe(&self, selection: &OptionSet) -> Vec<String> {
        selection
            .iter()
            .map(|&id| match self.option_text(id) {
                Some(text) => text.to_string(),
                None => format!("#{}", id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        ["A", "B", "C"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rejects_empty_correct_set() {
        let err = Question::new("q", options(), OptionSet::new(), Mode::Multiple, ["oop"]);
        assert_eq!(err.unwrap_err(), QuestionError::EmptyCorrect);
    }

    #[test]
    fn test_rejects_several_answers_in_single_mode() {
        let err = Question::new("q", options(), [0, 1].into(), Mode::Single, ["oop"]);
        assert_eq!(err.unwrap_err(), QuestionError::MultipleCorrect(2));
    }

    #[test]
    fn test_rejects_answer_outside_options() {
        let err = Question::new("q", options(), [3].into(), Mode::Multiple, ["oop"]);
        assert_eq!(err.unwrap_err(), QuestionError::OptionOutOfRange(3));
    }

    #[test]
    fn test_tag_overlap() {
        let q = Question::new("q", options(), [0].into(), Mode::Single, ["oop", "rust"]).unwrap();
        assert!(q.has_any_tag(&["python", "rust"]));
        assert!(!q.has_any_tag(&["python"]));
        assert!(!q.has_any_tag::<&str>(&[]));
    }

    #[test]
    fn test_describe_marks_unknown_ids() {
        let q = Question::new("q", options(), [0].into(), Mode::Single, ["oop"]).unwrap();
        assert_eq!(q.describe(&[2, 0, 7].into()), vec!["A", "C", "#7"]);
    }
}
