mod sampler;
pub mod scoring;

pub use sampler::{QuizSampler, Sample};
pub use scoring::{correct_quiz, score_question};
