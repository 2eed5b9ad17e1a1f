use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::IgnoredAny;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{IdGenerator, Question, QuestionFactory, RandomIds, ValidationError};

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Error loading a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question bank must contain at least one question")]
    Empty,

    #[error("question {index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// A question as written in a bank file, before validation.
///
/// An `id` key, as written by the JSON output, is accepted and ignored:
/// loaded questions always get fresh ids.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionRecord {
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    title: String,
    points: Option<u32>,
    #[serde(default)]
    choices: Vec<ChoiceRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChoiceRecord {
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    text: String,
    #[serde(default)]
    is_correct: bool,
}

impl QuestionRecord {
    fn into_question<G: IdGenerator>(
        self,
        factory: &QuestionFactory<G>,
    ) -> Result<Question, ValidationError> {
        let mut question = match self.points {
            Some(points) => factory.create_with_points(self.title, points)?,
            None => factory.create(self.title)?,
        };

        for choice in self.choices {
            question.add_choice(choice.text, choice.is_correct)?;
        }

        Ok(question)
    }
}

/// Load a question bank from a JSON file, minting random ids.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    load_questions_with(path, &QuestionFactory::new(RandomIds))
}

/// Load a question bank from a JSON file using the given factory.
pub fn load_questions_with<P, G>(
    path: P,
    factory: &QuestionFactory<G>,
) -> Result<Vec<Question>, LoadError>
where
    P: AsRef<Path>,
    G: IdGenerator,
{
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content, factory)?;
    info!(path = %path.display(), count = questions.len(), "loaded question bank");

    Ok(questions)
}

/// Parse a question bank, validating every record.
///
/// Fails on the first invalid record, reporting its 0-based index.
pub fn parse_questions<G: IdGenerator>(
    json: &str,
    factory: &QuestionFactory<G>,
) -> Result<Vec<Question>, LoadError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)?;

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut questions = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let question = record
            .into_question(factory)
            .map_err(|source| LoadError::Invalid { index, source })?;

        if question.correct_choices().next().is_none() {
            warn!(index, title = question.title(), "question has no correct choice");
        }

        questions.push(question);
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::SequentialIds;

    const BANK: &str = r#"[
        {
            "title": "Capital of France?",
            "points": 2,
            "choices": [
                { "text": "Paris", "is_correct": true },
                { "text": "London" },
                { "text": "Berlin", "is_correct": false }
            ]
        },
        { "title": "Open question" }
    ]"#;

    fn factory() -> QuestionFactory<SequentialIds> {
        QuestionFactory::new(SequentialIds::new())
    }

    #[test]
    fn test_parse_questions() {
        let questions = parse_questions(BANK, &factory()).unwrap();
        assert_eq!(questions.len(), 2);

        let first = &questions[0];
        assert_eq!(first.title(), "Capital of France?");
        assert_eq!(first.points(), 2);
        assert_eq!(first.choices().len(), 3);
        let correct: Vec<&str> = first.correct_choices().map(|c| c.text()).collect();
        assert_eq!(correct, ["Paris"]);

        let second = &questions[1];
        assert_eq!(second.points(), 1);
        assert!(second.choices().is_empty());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_parse_reports_invalid_record_index() {
        let json = r#"[{ "title": "ok" }, { "title": "" }]"#;
        let err = parse_questions(json, &factory()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                index: 1,
                source: ValidationError::Empty { field: "title" }
            }
        ));
        assert_eq!(err.to_string(), "question 1 is invalid: title must not be empty");
    }

    #[test]
    fn test_parse_rejects_invalid_choice_and_points() {
        let json = r#"[{ "title": "q", "choices": [{ "text": "" }] }]"#;
        assert!(matches!(
            parse_questions(json, &factory()),
            Err(LoadError::Invalid { index: 0, .. })
        ));

        let json = r#"[{ "title": "q", "points": 101 }]"#;
        assert!(matches!(
            parse_questions(json, &factory()),
            Err(LoadError::Invalid {
                source: ValidationError::PointsOutOfRange { points: 101, .. },
                ..
            })
        ));
    }

    #[test]
    fn test_parse_accepts_serialized_questions() {
        let original = parse_questions(BANK, &factory()).unwrap();
        let json = serde_json::to_string(&original).unwrap();

        let reloaded = parse_questions(&json, &factory()).unwrap();
        assert_eq!(reloaded.len(), original.len());
        for (a, b) in original.iter().zip(&reloaded) {
            assert_eq!(a.title(), b.title());
            assert_eq!(a.points(), b.points());
            assert_eq!(a.choices(), b.choices());
            assert_ne!(a.id(), b.id());
        }
    }

    #[test]
    fn test_parse_rejects_empty_bank() {
        assert!(matches!(
            parse_questions("[]", &factory()),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_questions("{ not json", &factory()),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            parse_questions(r#"[{ "title": "q", "answer": 2 }]"#, &factory()),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_load_questions_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BANK.as_bytes()).unwrap();

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_questions_from_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
