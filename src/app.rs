use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::config::QuizConfig;
use crate::data::QuestionBank;
use crate::models::{Answers, AppState, Mode, OptionSet, Question, QuizResult};
use crate::quiz::{QuizSampler, correct_quiz};

/// One-line feedback shown under the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

/// Quiz session: configuration, the drawn quiz, the answers and the result.
pub struct App {
    pub state: AppState,
    bank: QuestionBank,
    sampler: QuizSampler,
    config: QuizConfig,
    all_tags: Vec<String>,
    selected_tags: BTreeSet<String>,
    tag_cursor: usize,
    questions: Vec<Question>,
    requested: usize,
    answers: Answers,
    current_question_index: usize,
    selected_option: usize,
    result: Option<QuizResult>,
    result_scroll: usize,
    notice: Option<Notice>,
}

impl App {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        let sampler = match config.seed {
            Some(seed) => QuizSampler::seeded(seed),
            None => QuizSampler::new(),
        };
        let all_tags = bank.all_tags();

        let mut selected_tags = BTreeSet::new();
        for tag in &config.tags {
            if all_tags.contains(tag) {
                selected_tags.insert(tag.clone());
            } else {
                warn!(tag = %tag, "ignoring unknown topic");
            }
        }

        Self {
            state: AppState::Configuring,
            bank,
            sampler,
            config,
            all_tags,
            selected_tags,
            tag_cursor: 0,
            questions: Vec::new(),
            requested: 0,
            answers: Answers::new(),
            current_question_index: 0,
            selected_option: 0,
            result: None,
            result_scroll: 0,
            notice: None,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // Configuration

    pub fn all_tags(&self) -> &[String] {
        &self.all_tags
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    pub fn selected_tags(&self) -> Vec<String> {
        self.selected_tags.iter().cloned().collect()
    }

    pub fn tag_cursor(&self) -> usize {
        self.tag_cursor
    }

    pub fn question_count(&self) -> usize {
        self.config.question_count()
    }

    /// Number of bank questions matching the current topic selection.
    pub fn available_questions(&self) -> usize {
        self.bank.filter_by_tags(&self.selected_tags()).len()
    }

    pub fn select_next_tag(&mut self) {
        if !self.all_tags.is_empty() {
            self.tag_cursor = (self.tag_cursor + 1) % self.all_tags.len();
        }
    }

    pub fn select_previous_tag(&mut self) {
        let len = self.all_tags.len();
        if len > 0 {
            self.tag_cursor = (self.tag_cursor + len - 1) % len;
        }
    }

    pub fn toggle_tag(&mut self) {
        let Some(tag) = self.all_tags.get(self.tag_cursor) else {
            return;
        };
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.clone());
        }
    }

    pub fn increase_count(&mut self) {
        self.config.increase_count();
    }

    pub fn decrease_count(&mut self) {
        self.config.decrease_count();
    }

    /// Draw a new quiz from the selected topics.
    pub fn generate(&mut self) {
        if self.state != AppState::Configuring {
            return;
        }

        let tags = self.selected_tags();
        let count = self.config.question_count();
        let sample = match self.sampler.generate_quiz(&self.bank, &tags, count) {
            Ok(sample) => sample,
            Err(err) => {
                self.notice = Some(Notice::Error(err.to_string()));
                return;
            }
        };

        if sample.is_empty() {
            info!(?tags, "no questions match the selected topics");
            self.notice = Some(Notice::Error(
                "No questions found for the selected topics!".to_string(),
            ));
            return;
        }

        self.notice = Some(if sample.is_degraded() {
            Notice::Warning(format!(
                "Only {} of {} requested questions available.",
                sample.len(),
                sample.requested()
            ))
        } else {
            Notice::Info(format!("Generated quiz with {} questions!", sample.len()))
        });
        info!(questions = sample.len(), requested = count, "generated quiz");

        self.requested = sample.requested();
        self.questions = sample.into_questions();
        self.answers.clear();
        self.current_question_index = 0;
        self.selected_option = 0;
        self.result = None;
        self.state = AppState::Generated;
    }

    pub fn requested_questions(&self) -> usize {
        self.requested
    }

    pub fn begin(&mut self) {
        if self.state == AppState::Generated {
            self.state = AppState::Answering;
        }
    }

    // Answering

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn current_selection(&self) -> Option<&OptionSet> {
        self.answers.get(&self.current_question_index)
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options().len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Pick the highlighted option. Single-choice questions replace the
    /// previous pick, multiple-choice questions toggle it.
    pub fn toggle_option(&mut self) {
        if self.state != AppState::Answering {
            return;
        }
        let Some(mode) = self.current_question().map(Question::mode) else {
            return;
        };

        let option = self.selected_option;
        let selection = self.answers.entry(self.current_question_index).or_default();
        match mode {
            Mode::Single => {
                selection.clear();
                selection.insert(option);
            }
            Mode::Multiple => {
                if !selection.remove(&option) {
                    selection.insert(option);
                }
            }
        }
        debug!(question = self.current_question_index, ?selection, "updated answer");
    }

    pub fn next_question(&mut self) {
        if self.current_question_index + 1 < self.questions.len() {
            self.current_question_index += 1;
            self.selected_option = 0;
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            self.selected_option = 0;
        }
    }

    /// One-based numbers of the questions with no option picked.
    pub fn unanswered_questions(&self) -> Vec<usize> {
        (0..self.questions.len())
            .filter(|index| self.answers.get(index).is_none_or(|s| s.is_empty()))
            .map(|index| index + 1)
            .collect()
    }

    /// Score the quiz, unless some questions are still unanswered.
    pub fn submit(&mut self) {
        if self.state != AppState::Answering {
            return;
        }

        let unanswered = self.unanswered_questions();
        if !unanswered.is_empty() {
            let numbers: Vec<String> = unanswered.iter().map(ToString::to_string).collect();
            self.notice = Some(Notice::Warning(format!(
                "Please answer all questions! Unanswered: {}",
                numbers.join(", ")
            )));
            return;
        }

        self.result = Some(correct_quiz(&self.questions, &self.answers));
        self.result_scroll = 0;
        self.state = AppState::Corrected;
    }

    // Results

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .result
            .as_ref()
            .map_or(0, |r| r.details.len().saturating_sub(1));
        if self.result_scroll < max_scroll {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Drop the quiz and go back to configuration. Topic and count choices
    /// are kept.
    pub fn reset(&mut self) {
        self.state = AppState::Configuring;
        self.questions.clear();
        self.requested = 0;
        self.answers.clear();
        self.current_question_index = 0;
        self.selected_option = 0;
        self.result = None;
        self.result_scroll = 0;
        self.notice = Some(Notice::Info("Quiz reset successfully!".to_string()));
        info!("quiz reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {"question": "q0", "choices": ["a", "b", "c"], "correct": ["a"], "mode": "single", "tags": ["python"]},
        {"question": "q1", "choices": ["a", "b", "c"], "correct": ["a", "b"], "mode": "multiple", "tags": ["oop"]},
        {"question": "q2", "choices": ["a", "b", "c"], "correct": ["c"], "mode": "single", "tags": ["oop"]}
    ]"#;

    fn app() -> App {
        let bank = QuestionBank::from_json_str(DATASET).unwrap();
        App::new(bank, QuizConfig::default().with_seed(Some(11)))
    }

    fn answer_all(app: &mut App) {
        for _ in 0..app.total_questions() {
            app.toggle_option();
            app.next_question();
        }
    }

    #[test]
    fn test_starts_configuring_with_known_tags_only() {
        let bank = QuestionBank::from_json_str(DATASET).unwrap();
        let config = QuizConfig::default().with_tags(vec!["oop".to_string(), "golang".to_string()]);
        let app = App::new(bank, config);

        assert_eq!(app.state, AppState::Configuring);
        assert_eq!(app.all_tags(), ["oop", "python"]);
        assert_eq!(app.selected_tags(), ["oop"]);
        assert_eq!(app.available_questions(), 2);
    }

    #[test]
    fn test_generate_flags_degraded_quiz() {
        let mut app = app();
        app.generate();

        assert_eq!(app.state, AppState::Generated);
        assert_eq!(app.total_questions(), 3);
        assert_eq!(app.requested_questions(), 10);
        assert!(matches!(app.notice(), Some(Notice::Warning(_))));
    }

    #[test]
    fn test_generate_respects_topic_selection() {
        let mut app = app();
        // cursor starts on "oop"
        app.toggle_tag();
        app.generate();

        assert_eq!(app.total_questions(), 2);
        assert!(app.questions().iter().all(|q| q.tags().contains("oop")));
    }

    #[test]
    fn test_generate_with_empty_bank_stays_configuring() {
        let mut app = App::new(QuestionBank::default(), QuizConfig::default());
        app.generate();

        assert_eq!(app.state, AppState::Configuring);
        assert!(matches!(app.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn test_single_choice_replaces_previous_pick() {
        let mut app = app();
        app.generate();
        app.begin();

        let index = app
            .questions()
            .iter()
            .position(|q| q.mode() == Mode::Single)
            .unwrap();
        for _ in 0..index {
            app.next_question();
        }

        app.toggle_option();
        app.select_next_option();
        app.toggle_option();
        assert_eq!(app.current_selection(), Some(&OptionSet::from([1])));
    }

    #[test]
    fn test_multiple_choice_toggles() {
        let mut app = app();
        app.generate();
        app.begin();

        let index = app
            .questions()
            .iter()
            .position(|q| q.mode() == Mode::Multiple)
            .unwrap();
        for _ in 0..index {
            app.next_question();
        }

        app.toggle_option();
        app.select_next_option();
        app.toggle_option();
        assert_eq!(app.current_selection(), Some(&OptionSet::from([0, 1])));

        app.toggle_option();
        assert_eq!(app.current_selection(), Some(&OptionSet::from([0])));
    }

    #[test]
    fn test_submit_refused_while_unanswered() {
        let mut app = app();
        app.generate();
        app.begin();
        app.toggle_option();
        app.submit();

        assert_eq!(app.state, AppState::Answering);
        assert_eq!(app.unanswered_questions(), [2, 3]);
        assert_eq!(
            app.notice(),
            Some(&Notice::Warning(
                "Please answer all questions! Unanswered: 2, 3".to_string()
            ))
        );
    }

    #[test]
    fn test_submit_scores_quiz() {
        let mut app = app();
        app.generate();
        app.begin();
        answer_all(&mut app);
        app.submit();

        assert_eq!(app.state, AppState::Corrected);
        let result = app.result().unwrap();
        assert_eq!(result.max_score, 3);
        assert_eq!(result.details.len(), 3);
        assert!(result.details.iter().all(|d| d.selected_answers == OptionSet::from([0])));
    }

    #[test]
    fn test_reset_clears_quiz_but_keeps_choices() {
        let mut app = app();
        app.toggle_tag();
        app.increase_count();
        app.generate();
        app.begin();
        answer_all(&mut app);
        app.submit();
        app.reset();

        assert_eq!(app.state, AppState::Configuring);
        assert!(app.questions().is_empty());
        assert!(app.answers().is_empty());
        assert!(app.result().is_none());
        assert_eq!(app.selected_tags(), ["oop"]);
        assert_eq!(app.question_count(), 15);
    }
}
