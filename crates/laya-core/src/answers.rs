//! Typed record of choices collected along the onboarding flow.
//!
//! Keys are a fixed set, so they are an enum rather than open strings; a
//! stray key is a compile error instead of silent drift.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed set of answer slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKey {
    Identity,
    Relationship,
    Goals,
    Quiz1,
    Quiz2,
    Quiz3,
    Vulnerability,
    Plan,
}

impl AnswerKey {
    pub fn id(&self) -> &'static str {
        match self {
            AnswerKey::Identity => "identity",
            AnswerKey::Relationship => "relationship",
            AnswerKey::Goals => "goals",
            AnswerKey::Quiz1 => "quiz1",
            AnswerKey::Quiz2 => "quiz2",
            AnswerKey::Quiz3 => "quiz3",
            AnswerKey::Vulnerability => "vulnerability",
            AnswerKey::Plan => "plan",
        }
    }
}

/// A captured value: single choice or multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    pub fn single(value: impl Into<String>) -> Self {
        AnswerValue::Single(value.into())
    }

    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Multi(values.into_iter().map(Into::into).collect())
    }
}

/// Accumulated answers. Append-only during the forward flow; a key is only
/// overwritten by re-visiting its own screen. Last write wins per key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    slots: BTreeMap<AnswerKey, AnswerValue>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one answer. Total; always succeeds. Returns `true` when the
    /// stored value actually changed (repeating an identical write is a
    /// no-op).
    pub fn set(&mut self, key: AnswerKey, value: AnswerValue) -> bool {
        if self.slots.get(&key) == Some(&value) {
            return false;
        }
        self.slots.insert(key, value);
        true
    }

    pub fn get(&self, key: AnswerKey) -> Option<&AnswerValue> {
        self.slots.get(&key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnswerKey, &AnswerValue)> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut answers = Answers::new();
        assert!(answers.set(AnswerKey::Identity, AnswerValue::single("partner")));
        assert_eq!(
            answers.get(AnswerKey::Identity),
            Some(&AnswerValue::single("partner"))
        );
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn identical_rewrite_is_a_no_op() {
        let mut answers = Answers::new();
        let value = AnswerValue::multi(["heal", "spark"]);
        assert!(answers.set(AnswerKey::Goals, value.clone()));
        let snapshot = answers.clone();
        assert!(!answers.set(AnswerKey::Goals, value));
        assert_eq!(answers, snapshot);
    }

    #[test]
    fn last_write_wins() {
        let mut answers = Answers::new();
        answers.set(AnswerKey::Quiz1, AnswerValue::single("A few weeks"));
        answers.set(AnswerKey::Quiz1, AnswerValue::single("It feels like forever"));
        assert_eq!(
            answers.get(AnswerKey::Quiz1),
            Some(&AnswerValue::single("It feels like forever"))
        );
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn serializes_with_string_keys() {
        let mut answers = Answers::new();
        answers.set(AnswerKey::Plan, AnswerValue::single("annual"));
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["slots"]["plan"], "annual");
    }
}
