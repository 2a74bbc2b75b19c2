//! Scoring of single answers and whole quizzes.
//!
//! Multiple-choice questions give partial credit: each correct option
//! selected is worth `1 / |correct|`, each wrong option selected costs the
//! same amount, and the result is clamped at zero. A question only counts as
//! correct when the selection equals the correct set exactly.

use tracing::{debug, info};

use crate::models::{Answers, Mode, OptionSet, Question, QuestionResult, QuestionScore, QuizResult};

pub fn score_single(correct: &OptionSet, selected: &OptionSet) -> f64 {
    if selected == correct { 1.0 } else { 0.0 }
}

pub fn score_multiple(correct: &OptionSet, selected: &OptionSet) -> f64 {
    let total_correct = correct.len() as f64;
    if total_correct == 0.0 {
        return 0.0;
    }

    let correct_selected = selected.intersection(correct).count() as f64;
    let wrong_selected = selected.difference(correct).count() as f64;

    let raw = correct_selected / total_correct - wrong_selected / total_correct;
    raw.max(0.0)
}

pub fn score_question(question: &Question, selected: &OptionSet) -> QuestionScore {
    let correct = question.correct();
    let score = match question.mode() {
        Mode::Single => score_single(correct, selected),
        Mode::Multiple => score_multiple(correct, selected),
    };

    QuestionScore {
        score,
        is_correct: selected == correct,
    }
}

/// Score every question of `quiz` in order. Questions without an entry in
/// `answers` are scored as unanswered.
pub fn correct_quiz(quiz: &[Question], answers: &Answers) -> QuizResult {
    let empty = OptionSet::new();

    let details: Vec<QuestionResult> = quiz
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = answers.get(&index).unwrap_or(&empty);
            let QuestionScore { score, is_correct } = score_question(question, selected);
            debug!(question = index, score, is_correct, "scored question");

            QuestionResult {
                question_index: index,
                question_text: question.text().to_string(),
                mode: question.mode(),
                correct_answers: question.correct().clone(),
                selected_answers: selected.clone(),
                score,
                is_correct,
            }
        })
        .collect();

    let total_score: f64 = details.iter().map(|d| d.score).sum();
    let max_score = quiz.len();
    let percentage = if max_score > 0 {
        total_score / max_score as f64 * 100.0
    } else {
        0.0
    };
    info!(total_score, max_score, percentage, "corrected quiz");

    QuizResult {
        details,
        total_score,
        max_score,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: usize = 0;
    const B: usize = 1;
    const C: usize = 2;
    const D: usize = 3;
    const E: usize = 4;

    fn set(ids: &[usize]) -> OptionSet {
        ids.iter().copied().collect()
    }

    fn question(mode: Mode, correct: &[usize]) -> Question {
        let options = ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect();
        Question::new("q", options, set(correct), mode, ["test"]).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_full_match_is_correct() {
        let q = question(Mode::Multiple, &[A, B, C]);
        let result = score_question(&q, &set(&[A, B, C]));
        assert_close(result.score, 1.0);
        assert!(result.is_correct);
    }

    #[test]
    fn test_missing_one_gives_partial_credit() {
        let q = question(Mode::Multiple, &[A, B, C]);
        let result = score_question(&q, &set(&[A, B]));
        assert_close(result.score, 2.0 / 3.0);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_wrong_selection_is_penalised() {
        let q = question(Mode::Multiple, &[A, B, C]);
        let result = score_question(&q, &set(&[A, B, D]));
        assert_close(result.score, 1.0 / 3.0);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_negative_raw_score_clamps_to_zero() {
        let q = question(Mode::Multiple, &[A, B]);
        let result = score_question(&q, &set(&[C, D, E]));
        assert_close(result.score, 0.0);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_unanswered_single_scores_zero() {
        let q = question(Mode::Single, &[A]);
        let result = score_question(&q, &OptionSet::new());
        assert_close(result.score, 0.0);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_single_choice() {
        let q = question(Mode::Single, &[B]);
        assert_close(score_question(&q, &set(&[B])).score, 1.0);
        assert_close(score_question(&q, &set(&[C])).score, 0.0);
        assert_close(score_question(&q, &set(&[B, C])).score, 0.0);
    }

    #[test]
    fn test_unknown_option_ids_count_as_wrong() {
        let q = question(Mode::Multiple, &[A, B]);
        assert_close(score_question(&q, &set(&[A, B, 99])).score, 0.5);
    }

    #[test]
    fn test_score_ignores_construction_order() {
        let correct_forward = set(&[A, B, C]);
        let correct_reverse = set(&[C, B, A]);
        let selected_forward = set(&[A, D, C]);
        let selected_shuffled = set(&[D, C, A, D]);

        let expected = score_multiple(&correct_forward, &selected_forward);
        assert_close(score_multiple(&correct_reverse, &selected_shuffled), expected);
        assert_close(score_multiple(&correct_forward, &selected_shuffled), expected);
    }

    #[test]
    fn test_score_always_within_unit_interval() {
        // every non-empty correct set against every selection over five options
        for correct_mask in 1u32..32 {
            for selected_mask in 0u32..32 {
                let correct: OptionSet = (0..5).filter(|i| correct_mask & (1 << i) != 0).collect();
                let selected: OptionSet = (0..5).filter(|i| selected_mask & (1 << i) != 0).collect();
                let score = score_multiple(&correct, &selected);

                assert!((0.0..=1.0).contains(&score), "{correct:?} / {selected:?} -> {score}");
                if correct == selected {
                    assert_close(score, 1.0);
                }
            }
        }
    }

    #[test]
    fn test_correct_quiz_aggregates() {
        let quiz = vec![
            question(Mode::Single, &[A]),
            question(Mode::Multiple, &[A, B]),
            question(Mode::Multiple, &[C, D]),
        ];
        let answers = Answers::from([(0, set(&[A])), (1, set(&[A]))]);

        let result = correct_quiz(&quiz, &answers);

        assert_eq!(result.max_score, 3);
        assert_close(result.total_score, 1.5);
        assert_close(result.percentage, 50.0);
        assert_eq!(result.correct_count(), 1);
        assert_eq!(result.details[2].selected_answers, OptionSet::new());
        assert!(result.details[1].is_partial());
    }

    #[test]
    fn test_empty_quiz_has_zero_percentage() {
        let result = correct_quiz(&[], &Answers::new());
        assert!(result.is_empty());
        assert_eq!(result.max_score, 0);
        assert_close(result.percentage, 0.0);
    }
}
