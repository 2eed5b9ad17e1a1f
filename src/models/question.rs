//! The question entity and the factory that mints its ids.

use serde::Serialize;
use tracing::{debug, trace};

use super::choice::Choice;
use super::id::{ChoiceId, IdGenerator, QuestionId, RandomIds};
use super::validation::{
    validate_choice_text, validate_points, validate_title, ValidationError, DEFAULT_POINTS,
};

/// A quiz question and its answer choices.
///
/// A `Question` can only be obtained through a validating constructor, so
/// its title and points always satisfy the bounds in
/// [`validation`](super::validation). After construction the only thing that
/// changes is the list of choices, which only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    choices: Vec<Choice>,
}

impl Question {
    /// Create a question worth [`DEFAULT_POINTS`] with a random id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quiz_bank::Question;
    ///
    /// let mut q = Question::new("Capital of France?").unwrap();
    /// q.add_choice("Paris", true).unwrap();
    /// assert_eq!(q.points(), 1);
    /// assert_eq!(q.choices().len(), 1);
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_points(title, DEFAULT_POINTS)
    }

    /// Create a question with a random id and the given points.
    pub fn with_points(title: impl Into<String>, points: u32) -> Result<Self, ValidationError> {
        Self::build(&RandomIds, title.into(), points)
    }

    fn build<G: IdGenerator + ?Sized>(
        ids: &G,
        title: String,
        points: u32,
    ) -> Result<Self, ValidationError> {
        validate_title(&title)?;
        validate_points(points)?;

        let id = QuestionId::from(ids.next_id());
        debug!(%id, points, "created question");

        Ok(Self {
            id,
            title,
            points,
            choices: Vec::new(),
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Choices in the order they were added.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Append a choice.
    ///
    /// The text is checked with the same rules as a title. On error the
    /// question is left unchanged. Duplicate texts and several correct
    /// choices are allowed.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<(), ValidationError> {
        let text = text.into();
        validate_choice_text(&text)?;

        let id = ChoiceId::after(self.choices.len()).ok_or(ValidationError::TooManyChoices {
            max: u32::MAX,
        })?;
        trace!(question = %self.id, choice = %id, is_correct, "added choice");
        self.choices.push(Choice::new(id, text, is_correct));

        Ok(())
    }

    /// Choices flagged as correct, in insertion order.
    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.is_correct())
    }

    /// Look up a choice by id.
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == id)
    }
}

/// Creates questions using an injected [`IdGenerator`].
#[derive(Debug, Default)]
pub struct QuestionFactory<G> {
    ids: G,
}

impl<G: IdGenerator> QuestionFactory<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    pub fn create(&self, title: impl Into<String>) -> Result<Question, ValidationError> {
        self.create_with_points(title, DEFAULT_POINTS)
    }

    pub fn create_with_points(
        &self,
        title: impl Into<String>,
        points: u32,
    ) -> Result<Question, ValidationError> {
        Question::build(&self.ids, title.into(), points)
    }
}
