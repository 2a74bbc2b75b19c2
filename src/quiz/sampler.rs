use std::borrow::Borrow;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::data::QuestionBank;
use crate::error::SampleError;
use crate::models::Question;

/// Questions drawn for one quiz, along with how many were asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    questions: Vec<Question>,
    requested: usize,
}

impl Sample {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    /// The pool was smaller than the requested count.
    pub fn is_degraded(&self) -> bool {
        self.questions.len() < self.requested
    }
}

/// Draws questions uniformly at random without replacement.
pub struct QuizSampler<R = StdRng> {
    rng: R,
}

impl QuizSampler<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A sampler that produces the same draws for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for QuizSampler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Select `min(count, pool.len())` questions from `pool`.
    pub fn sample<Q: Borrow<Question>>(
        &mut self,
        pool: &[Q],
        count: usize,
    ) -> Result<Sample, SampleError> {
        if count == 0 {
            return Err(SampleError::InvalidSampleRequest(count));
        }

        let amount = count.min(pool.len());
        if amount < count {
            warn!(requested = count, available = pool.len(), "not enough questions in pool");
        }

        let questions = if amount == 0 {
            Vec::new()
        } else {
            index::sample(&mut self.rng, pool.len(), amount)
                .into_iter()
                .map(|i| pool[i].borrow().clone())
                .collect()
        };
        debug!(selected = amount, "sampled quiz questions");

        Ok(Sample {
            questions,
            requested: count,
        })
    }

    /// Filter the bank by `tags` and sample from what remains.
    pub fn generate_quiz<S: AsRef<str>>(
        &mut self,
        bank: &QuestionBank,
        tags: &[S],
        count: usize,
    ) -> Result<Sample, SampleError> {
        let pool = bank.filter_by_tags(tags);
        debug!(pool = pool.len(), tags = tags.len(), "filtered question pool");
        self.sample(&pool, count)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::Mode;

    fn pool(size: usize) -> Vec<Question> {
        (0..size)
            .map(|i| {
                let tag = if i % 2 == 0 { "even" } else { "odd" };
                Question::new(
                    format!("question {}", i),
                    vec!["yes".to_string(), "no".to_string()],
                    [0].into(),
                    Mode::Single,
                    [tag],
                )
                .unwrap()
            })
            .collect()
    }

    fn texts(sample: &Sample) -> Vec<String> {
        sample.questions().iter().map(|q| q.text().to_string()).collect()
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let err = QuizSampler::seeded(1).sample(&pool(3), 0).unwrap_err();
        assert_eq!(err, SampleError::InvalidSampleRequest(0));
    }

    #[test]
    fn test_draws_requested_count_without_duplicates() {
        let sample = QuizSampler::seeded(7).sample(&pool(20), 5).unwrap();

        assert_eq!(sample.len(), 5);
        assert!(!sample.is_degraded());
        let unique: HashSet<_> = texts(&sample).into_iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_oversized_request_returns_whole_pool() {
        let pool = pool(4);
        let sample = QuizSampler::seeded(3).sample(&pool, 10).unwrap();

        assert_eq!(sample.len(), 4);
        assert_eq!(sample.requested(), 10);
        assert!(sample.is_degraded());

        let drawn: HashSet<_> = texts(&sample).into_iter().collect();
        let expected: HashSet<_> = pool.iter().map(|q| q.text().to_string()).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_same_seed_reproduces_draw() {
        let pool = pool(30);
        let first = QuizSampler::seeded(42).sample(&pool, 8).unwrap();
        let second = QuizSampler::seeded(42).sample(&pool, 8).unwrap();
        assert_eq!(texts(&first), texts(&second));
    }

    #[test]
    fn test_empty_pool_gives_empty_sample() {
        let empty: Vec<Question> = Vec::new();
        let sample = QuizSampler::seeded(1).sample(&empty, 5).unwrap();
        assert!(sample.is_empty());
        assert!(sample.is_degraded());
    }

    #[test]
    fn test_generate_quiz_only_draws_matching_tags() {
        let bank = QuestionBank::from_questions(pool(10));
        let sample = QuizSampler::seeded(9)
            .generate_quiz(&bank, &["odd"], 50)
            .unwrap();

        assert_eq!(sample.len(), 5);
        assert!(sample.questions().iter().all(|q| q.tags().contains("odd")));
    }
}
