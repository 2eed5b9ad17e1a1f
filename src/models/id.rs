//! Identifiers for questions and choices.
//!
//! Question ids come from an [`IdGenerator`] so callers decide how they are
//! minted. [`RandomIds`] is stateless and is what [`Question::new`] uses;
//! [`SequentialIds`] hands out predictable ids from an atomic counter.
//!
//! [`Question::new`]: crate::Question::new

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use uuid::Uuid;

/// Unique identifier of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for QuestionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a choice, unique within its question.
///
/// Choices are numbered from 1 in the order they were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChoiceId(u32);

impl ChoiceId {
    pub(crate) fn new(n: u32) -> Self {
        Self(n)
    }

    /// Id for the choice that follows `count` existing ones, or `None` once
    /// the numbering is exhausted.
    pub(crate) fn after(count: usize) -> Option<Self> {
        u32::try_from(count).ok()?.checked_add(1).map(Self)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of question ids.
///
/// Implementations must never return the same id twice, including when
/// called from several threads at once, and separate instances must not
/// hand out overlapping ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Counter-backed ids.
///
/// Each generator picks a random namespace for the high 64 bits of its
/// UUIDs; the low 64 bits count 1, 2, 3, ... so ids from one generator sort
/// in creation order and ids from two generators never collide.
#[derive(Debug)]
pub struct SequentialIds {
    namespace: u64,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start counting from `first` instead of 1.
    pub fn starting_at(first: u64) -> Self {
        let (namespace, _) = Uuid::new_v4().as_u64_pair();
        Self {
            namespace,
            next: AtomicU64::new(first),
        }
    }

    /// High 64 bits shared by every id this generator returns.
    pub fn namespace(&self) -> u64 {
        self.namespace
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Uuid::from_u64_pair(self.namespace, n)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> Uuid {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<G> {
    fn next_id(&self) -> Uuid {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_random_ids_differ() {
        let ids = RandomIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let ids = SequentialIds::new();
        let ns = ids.namespace();
        assert_eq!(ids.next_id(), Uuid::from_u64_pair(ns, 1));
        assert_eq!(ids.next_id(), Uuid::from_u64_pair(ns, 2));

        let ids = SequentialIds::starting_at(41);
        assert_eq!(ids.next_id().as_u64_pair(), (ids.namespace(), 41));
    }

    #[test]
    fn test_separate_sequential_generators_do_not_overlap() {
        let a = SequentialIds::new();
        let b = SequentialIds::new();
        assert_ne!(a.namespace(), b.namespace());

        let from_a: HashSet<Uuid> = (0..100).map(|_| a.next_id()).collect();
        assert!((0..100).all(|_| !from_a.contains(&b.next_id())));
    }

    #[test]
    fn test_choice_id_after() {
        assert_eq!(ChoiceId::after(0), Some(ChoiceId::new(1)));
        assert_eq!(ChoiceId::after(2), Some(ChoiceId::new(3)));
        assert_eq!(ChoiceId::after(u32::MAX as usize), None);
    }

    #[test]
    fn test_sequential_ids_unique_across_threads() {
        let ids = Arc::new(SequentialIds::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 2000);
    }

    #[test]
    fn test_question_id_display_matches_uuid() {
        let uuid = Uuid::from_u128(7);
        let id = QuestionId::from(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(id.as_uuid(), &uuid);
    }
}
