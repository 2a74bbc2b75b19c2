use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use super::loader::{load_questions_from_json, parse_questions};
use crate::error::DatasetError;
use crate::models::Question;

/// Read-only collection of questions, loaded once and passed around
/// explicitly by whoever composes the application.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load and validate a bank from a JSON dataset file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let bank = Self::from_questions(load_questions_from_json(path)?);
        info!(
            path = %path.display(),
            questions = bank.len(),
            tags = bank.all_tags().len(),
            "loaded question bank"
        );
        Ok(bank)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(Self::from_questions(parse_questions(json)?))
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        if questions.is_empty() {
            warn!("question bank is empty");
        }
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Every tag used in the bank, sorted and de-duplicated.
    pub fn all_tags(&self) -> Vec<String> {
        self.questions
            .iter()
            .flat_map(|q| q.tags().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Questions carrying at least one of `tags`, in bank order.
    /// An empty tag list selects the whole bank.
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&Question> {
        if tags.is_empty() {
            return self.questions.iter().collect();
        }
        self.questions.iter().filter(|q| q.has_any_tag(tags)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {"question": "q0", "choices": ["a", "b"], "correct": ["a"], "mode": "single", "tags": ["python"]},
        {"question": "q1", "choices": ["a", "b"], "correct": ["a", "b"], "mode": "multiple", "tags": ["oop", "java"]},
        {"question": "q2", "choices": ["a", "b"], "correct": ["b"], "mode": "single", "tags": ["java"]},
        {"question": "q3", "choices": ["a", "b"], "correct": ["a"], "mode": "single", "tags": ["oop"]}
    ]"#;

    fn bank() -> QuestionBank {
        QuestionBank::from_json_str(DATASET).unwrap()
    }

    fn texts(questions: &[&Question]) -> Vec<String> {
        questions.iter().map(|q| q.text().to_string()).collect()
    }

    #[test]
    fn test_empty_filter_returns_whole_bank_in_order() {
        let bank = bank();
        assert_eq!(texts(&bank.filter_by_tags::<&str>(&[])), ["q0", "q1", "q2", "q3"]);
    }

    #[test]
    fn test_filter_uses_or_semantics_and_keeps_order() {
        let bank = bank();
        assert_eq!(texts(&bank.filter_by_tags(&["oop", "python"])), ["q0", "q1", "q3"]);
        assert_eq!(texts(&bank.filter_by_tags(&["java"])), ["q1", "q2"]);
    }

    #[test]
    fn test_filter_excludes_non_overlapping_questions() {
        let bank = bank();
        assert!(bank.filter_by_tags(&["golang"]).is_empty());
    }

    #[test]
    fn test_all_tags_sorted_and_unique() {
        assert_eq!(bank().all_tags(), ["java", "oop", "python"]);
    }

    #[test]
    fn test_empty_dataset_gives_empty_bank() {
        let bank = QuestionBank::from_json_str("[]").unwrap();
        assert!(bank.is_empty());
        assert!(bank.all_tags().is_empty());
    }
}
