//! One play-through's working state around the knowledge base.
//!
//! `Session` owns the durable [`Knowledge`] plus everything transient: the
//! feature stack, per-question skip flags, the posterior scratch vector,
//! and the last selector verdict. `reset` starts the next play-through on
//! the same knowledge without reloading anything.

use crate::answer::Answer;
use crate::features::{Feature, FeatureSet};
use crate::knowledge::{ClassId, Knowledge, QuestionId, Registered};
use crate::posterior::Posteriors;
use crate::selector::{self, Selection};

pub struct Session {
    knowledge: Knowledge,
    features: FeatureSet,
    posteriors: Posteriors,
    skipped: Vec<bool>,
    last_selection: Option<Selection>,
}

impl Session {
    /// Wrap a knowledge base in a fresh session.
    pub fn new(knowledge: Knowledge) -> Self {
        let mut session = Session {
            knowledge,
            features: FeatureSet::new(),
            posteriors: Posteriors::new(),
            skipped: Vec::new(),
            last_selection: None,
        };
        session.reset();
        session
    }

    /// Start a fresh play-through: clear the feature stack and skip
    /// flags, restore the uniform posterior. Knowledge is untouched.
    pub fn reset(&mut self) {
        self.features.clear();
        self.skipped.clear();
        self.skipped.resize(self.knowledge.question_count(), false);
        self.last_selection = None;
        self.posteriors.recompute(&self.knowledge, &self.features);
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Shannon entropy of the posterior, freshly recomputed.
    pub fn entropy(&mut self) -> f64 {
        self.posteriors.entropy(&self.knowledge, &self.features)
    }

    /// Posterior of one class as of the most recent recompute.
    pub fn posterior(&self, class: ClassId) -> f64 {
        self.posteriors.probability(class)
    }

    /// The whole distribution as of the most recent recompute.
    pub fn probabilities(&self) -> &[f64] {
        self.posteriors.as_slice()
    }

    /// Most probable class on a freshly recomputed distribution. `None`
    /// only when the knowledge base has no classes.
    pub fn top_class(&mut self) -> Option<ClassId> {
        self.posteriors.recompute(&self.knowledge, &self.features);
        self.posteriors.top_class()
    }

    /// Minimax choice of the next question; `None` means no remaining
    /// question improves worst-case entropy and the caller should guess.
    pub fn select(&mut self) -> Option<Selection> {
        let selection = selector::select(
            &self.knowledge,
            &mut self.posteriors,
            &mut self.features,
            &self.skipped,
        );
        self.last_selection = selection;
        selection
    }

    /// The verdict of the most recent [`Session::select`] call.
    pub fn last_selection(&self) -> Option<Selection> {
        self.last_selection
    }

    /// Push a hypothetical feature without any skip bookkeeping.
    pub fn push_feature(&mut self, question: QuestionId, value: Answer) {
        self.features.push(question, value);
    }

    /// Retract the most recent feature; no-op when empty.
    pub fn pop_feature(&mut self) -> Option<Feature> {
        self.features.pop()
    }

    /// Record a real answer: the feature joins the stack and the question
    /// leaves the selectable pool for the rest of the session.
    pub fn commit_answer(&mut self, question: QuestionId, value: Answer) {
        self.features.push(question, value);
        self.mark_skipped(question);
    }

    pub fn mark_skipped(&mut self, question: QuestionId) {
        if let Some(flag) = self.skipped.get_mut(question.0) {
            *flag = true;
        }
    }

    pub fn is_skipped(&self, question: QuestionId) -> bool {
        self.skipped.get(question.0).copied().unwrap_or(false)
    }

    /// First question not yet asked this session, in id order. The
    /// fallback when the selector declines but confidence is still low.
    pub fn first_unasked(&self) -> Option<QuestionId> {
        self.knowledge.question_ids().find(|q| !self.is_skipped(*q))
    }

    /// Register a class on the underlying knowledge base.
    pub fn register_class(&mut self, name: &str) -> Option<Registered<ClassId>> {
        self.knowledge.register_class(name)
    }

    /// Register a question; a newly created question starts unskipped.
    pub fn register_question(&mut self, text: &str) -> Option<Registered<QuestionId>> {
        let registered = self.knowledge.register_question(text)?;
        self.skipped.resize(self.knowledge.question_count(), false);
        Some(registered)
    }

    /// Record or overwrite an observation on the knowledge base.
    pub fn record_observation(
        &mut self,
        class: ClassId,
        question: QuestionId,
        value: Answer,
    ) -> Option<Answer> {
        self.knowledge.record_observation(class, question, value)
    }

    /// Fold every committed feature into the store as observations for
    /// `class`: the learning step once a game is over.
    pub fn record_features_for(&mut self, class: ClassId) {
        let features: Vec<Feature> = self.features.iter().copied().collect();
        for feature in features {
            self.knowledge
                .record_observation(class, feature.question, feature.value);
        }
    }
}
