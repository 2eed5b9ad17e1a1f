use serde::Serialize;

use super::id::ChoiceId;

/// An answer option belonging to a question.
///
/// Choices are only created through [`Question::add_choice`], so the text
/// has always been validated.
///
/// [`Question::add_choice`]: crate::Question::add_choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub(crate) fn new(id: ChoiceId, text: String, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
