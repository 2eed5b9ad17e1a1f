//! Domain model: questions, their choices, ids and validation rules.

mod choice;
mod id;
mod question;
pub mod validation;

pub use choice::Choice;
pub use id::{ChoiceId, IdGenerator, QuestionId, RandomIds, SequentialIds};
pub use question::{Question, QuestionFactory};
pub use validation::ValidationError;
