mod bank;
mod loader;

pub use bank::QuestionBank;
pub use loader::{load_questions_from_json, parse_questions, DEFAULT_QUESTIONS_PATH};
