//! The session's accumulated evidence.
//!
//! Features are the answers gathered (or hypothesized) so far, kept in
//! insertion order. Lookahead relies on the stack discipline: push a
//! hypothetical answer, measure, pop, and the set is exactly as before.

use crate::answer::Answer;
use crate::knowledge::QuestionId;

/// A question paired with an observed or hypothetical answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub question: QuestionId,
    pub value: Answer,
}

/// Insertion-ordered stack of features.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    items: Vec<Feature>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question: QuestionId, value: Answer) {
        self.items.push(Feature { question, value });
    }

    /// Remove and return the most recent feature; `None` when empty.
    pub fn pop(&mut self) -> Option<Feature> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.items.iter()
    }

    pub fn contains_question(&self, question: QuestionId) -> bool {
        self.items.iter().any(|f| f.question == question)
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
