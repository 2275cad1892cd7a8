//! The durable knowledge base: classes, questions, and observations.
//!
//! Classes and questions are identified by their creation order, which is
//! also their line order in the persisted files; ids are never reused or
//! compacted. Observations live in a map keyed by (class, question), so a
//! pair can hold at most one value and re-recording overwrites.

use std::collections::BTreeMap;

use crate::answer::Answer;

/// Stable identity of a class: its creation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(pub usize);

/// Stable identity of a question: its creation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId(pub usize);

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A guessable object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: String,
}

/// A question the game can ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
}

/// Outcome of registering a name that may already be known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered<T> {
    /// The name was new and a fresh entry was created.
    Created(T),
    /// The exact name already existed; its identity is reused.
    Existing(T),
}

impl<T: Copy> Registered<T> {
    pub fn id(self) -> T {
        match self {
            Registered::Created(id) | Registered::Existing(id) => id,
        }
    }

    pub fn is_existing(self) -> bool {
        matches!(self, Registered::Existing(_))
    }
}

/// Everything the game has learned so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Knowledge {
    classes: Vec<Class>,
    questions: Vec<Question>,
    observations: BTreeMap<(ClassId, QuestionId), Answer>,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted parts, verbatim: list
    /// order defines identity, duplicate names are kept as-is. Triples
    /// whose ids fall outside the lists are dropped; duplicate pairs keep
    /// the last value.
    pub fn from_parts(
        classes: impl IntoIterator<Item = String>,
        questions: impl IntoIterator<Item = String>,
        observations: impl IntoIterator<Item = (usize, usize, Answer)>,
    ) -> Self {
        let mut knowledge = Knowledge {
            classes: classes.into_iter().map(|name| Class { name }).collect(),
            questions: questions.into_iter().map(|text| Question { text }).collect(),
            observations: BTreeMap::new(),
        };
        for (class, question, value) in observations {
            if class < knowledge.classes.len() && question < knowledge.questions.len() {
                knowledge
                    .observations
                    .insert((ClassId(class), QuestionId(question)), value);
            }
        }
        knowledge
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.questions.is_empty()
    }

    pub fn class(&self, id: ClassId) -> Option<&Class> {
        self.classes.get(id.0)
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.0)
    }

    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> {
        (0..self.classes.len()).map(ClassId)
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> {
        (0..self.questions.len()).map(QuestionId)
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &Class)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, class)| (ClassId(i), class))
    }

    pub fn questions(&self) -> impl Iterator<Item = (QuestionId, &Question)> + '_ {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, question)| (QuestionId(i), question))
    }

    pub fn observations(&self) -> impl Iterator<Item = (ClassId, QuestionId, Answer)> + '_ {
        self.observations.iter().map(|(&(c, q), &value)| (c, q, value))
    }

    /// Exact-text lookup.
    pub fn find_class(&self, name: &str) -> Option<ClassId> {
        self.classes
            .iter()
            .position(|class| class.name == name)
            .map(ClassId)
    }

    /// Exact-text lookup.
    pub fn find_question(&self, text: &str) -> Option<QuestionId> {
        self.questions
            .iter()
            .position(|question| question.text == text)
            .map(QuestionId)
    }

    /// Register a class by name. Blank names (after trimming) are refused
    /// with `None`; an exact existing name reuses its identity.
    pub fn register_class(&mut self, name: &str) -> Option<Registered<ClassId>> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if let Some(id) = self.find_class(name) {
            return Some(Registered::Existing(id));
        }
        self.classes.push(Class {
            name: name.to_string(),
        });
        Some(Registered::Created(ClassId(self.classes.len() - 1)))
    }

    /// Register a question by text, with the same blank/duplicate rules as
    /// [`Knowledge::register_class`].
    pub fn register_question(&mut self, text: &str) -> Option<Registered<QuestionId>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(id) = self.find_question(text) {
            return Some(Registered::Existing(id));
        }
        self.questions.push(Question {
            text: text.to_string(),
        });
        Some(Registered::Created(QuestionId(self.questions.len() - 1)))
    }

    /// Record an observation; a duplicate (class, question) pair
    /// overwrites. Returns the previous value when one existed.
    pub fn record_observation(
        &mut self,
        class: ClassId,
        question: QuestionId,
        value: Answer,
    ) -> Option<Answer> {
        debug_assert!(class.0 < self.classes.len());
        debug_assert!(question.0 < self.questions.len());
        self.observations.insert((class, question), value)
    }

    /// The stored value for a pair, if one was ever recorded.
    pub fn observation(&self, class: ClassId, question: QuestionId) -> Option<Answer> {
        self.observations.get(&(class, question)).copied()
    }

    /// The stored value for a pair, or `Unknown` when never observed.
    /// This is the view inference sees: an absent observation and an
    /// explicit "unknown" are indistinguishable to it.
    pub fn value_or_unknown(&self, class: ClassId, question: QuestionId) -> Answer {
        self.observation(class, question).unwrap_or(Answer::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_class_assigns_sequential_ids() {
        let mut k = Knowledge::new();
        assert_eq!(k.register_class("Dog"), Some(Registered::Created(ClassId(0))));
        assert_eq!(k.register_class("Cat"), Some(Registered::Created(ClassId(1))));
        assert_eq!(k.class_count(), 2);
        assert_eq!(k.class(ClassId(0)).map(|c| c.name.as_str()), Some("Dog"));
    }

    #[test]
    fn test_register_duplicate_reuses_identity() {
        let mut k = Knowledge::new();
        k.register_class("Dog");
        let second = k.register_class("Dog");
        assert_eq!(second, Some(Registered::Existing(ClassId(0))));
        assert_eq!(k.class_count(), 1);
    }

    #[test]
    fn test_register_blank_is_refused() {
        let mut k = Knowledge::new();
        assert_eq!(k.register_class(""), None);
        assert_eq!(k.register_class("   "), None);
        assert_eq!(k.register_question("\n"), None);
        assert!(k.is_empty());
    }

    #[test]
    fn test_register_trims_surrounding_whitespace() {
        let mut k = Knowledge::new();
        k.register_class("Dog");
        assert_eq!(k.register_class("  Dog "), Some(Registered::Existing(ClassId(0))));
    }

    #[test]
    fn test_observation_overwrites_and_reports_previous() {
        let mut k = Knowledge::new();
        k.register_class("Dog");
        k.register_question("Does it bark?");
        let (c, q) = (ClassId(0), QuestionId(0));

        assert_eq!(k.record_observation(c, q, Answer::Probably), None);
        assert_eq!(k.record_observation(c, q, Answer::Yes), Some(Answer::Probably));
        assert_eq!(k.observation(c, q), Some(Answer::Yes));
        assert_eq!(k.observation_count(), 1);
    }

    #[test]
    fn test_missing_observation_reads_as_unknown() {
        let mut k = Knowledge::new();
        k.register_class("Dog");
        k.register_question("Does it bark?");
        assert_eq!(k.observation(ClassId(0), QuestionId(0)), None);
        assert_eq!(
            k.value_or_unknown(ClassId(0), QuestionId(0)),
            Answer::Unknown
        );
    }

    #[test]
    fn test_from_parts_drops_out_of_range_triples() {
        let k = Knowledge::from_parts(
            vec!["Dog".to_string()],
            vec!["Does it bark?".to_string()],
            vec![
                (0, 0, Answer::Yes),
                (1, 0, Answer::No),  // class out of range
                (0, 9, Answer::No),  // question out of range
            ],
        );
        assert_eq!(k.observation_count(), 1);
        assert_eq!(k.observation(ClassId(0), QuestionId(0)), Some(Answer::Yes));
    }

    #[test]
    fn test_from_parts_keeps_duplicate_names_verbatim() {
        // Hand-edited files may repeat a line; identity is the line order.
        let k = Knowledge::from_parts(
            vec!["Dog".to_string(), "Dog".to_string()],
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(k.class_count(), 2);
        assert_eq!(k.find_class("Dog"), Some(ClassId(0)));
    }
}
