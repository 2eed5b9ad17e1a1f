//! # quiz-bank
//!
//! Validated quiz questions with append-only answer choices.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_bank::{Question, ValidationError};
//!
//! fn main() -> Result<(), ValidationError> {
//!     let mut question = Question::with_points("Capital of France?", 2)?;
//!     question.add_choice("Paris", true)?;
//!     question.add_choice("London", false)?;
//!
//!     let correct: Vec<_> = question.correct_choices().collect();
//!     assert_eq!(correct[0].text(), "Paris");
//!
//!     Ok(())
//! }
//! ```
//!
//! Question banks can also be loaded from JSON:
//!
//! ```rust,no_run
//! use quiz_bank::QuestionBank;
//!
//! let bank = QuestionBank::from_json("questions.json").expect("Failed to load questions");
//! println!("{} questions", bank.len());
//! ```

mod data;
mod models;
pub mod report;

use std::io;
use std::path::Path;

use thiserror::Error;

pub use data::{
    load_questions_from_json, load_questions_with, parse_questions, LoadError,
    DEFAULT_QUESTIONS_PATH,
};
pub use models::validation;
pub use models::{
    Choice, ChoiceId, IdGenerator, Question, QuestionFactory, QuestionId, RandomIds,
    SequentialIds, ValidationError,
};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A question or choice failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// Error writing questions out.
    #[error("Failed to serialize questions: {0}")]
    Output(#[from] serde_json::Error),
    /// Error writing the summary.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// A loaded, validated set of questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Create a bank from already validated questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a bank from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Load a bank from a JSON file, taking ids from `factory`.
    pub fn from_json_with<P: AsRef<Path>, G: IdGenerator>(
        path: P,
        factory: &QuestionFactory<G>,
    ) -> Result<Self, QuizError> {
        let questions = load_questions_with(path, factory)?;
        Ok(Self::new(questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Sum of the points of every question.
    pub fn total_points(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.points())).sum()
    }

    /// Questions that have no choice marked correct.
    pub fn without_correct_choice(&self) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(|q| q.correct_choices().next().is_none())
    }
}
