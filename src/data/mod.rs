//! Importing question banks.

mod loader;

pub use loader::{
    load_questions_from_json, load_questions_with, parse_questions, LoadError,
    DEFAULT_QUESTIONS_PATH,
};
