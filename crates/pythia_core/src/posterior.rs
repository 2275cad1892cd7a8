//! Naive Bayes posterior over the candidate classes.
//!
//! The distribution is never updated incrementally: every pass starts
//! from a uniform prior and folds in the whole feature set, so the
//! posterior is a pure function of (knowledge, features). Callers that
//! need a fresh value recompute; reads between recomputes see the last
//! pass.

use crate::features::FeatureSet;
use crate::knowledge::{ClassId, Knowledge};
use crate::likelihood::{conditional, marginal, EPS};

/// One probability per class, in class-id order.
#[derive(Debug, Clone, Default)]
pub struct Posteriors {
    p: Vec<f64>,
}

impl Posteriors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full Bayes pass: uniform prior times likelihood over evidence for
    /// every class, then renormalization.
    ///
    /// The independence assumption means a redundant feature set can push
    /// individual terms past 1 before normalization. That is expected and
    /// handled by [`normalize`](Self::normalize), not prevented.
    pub fn recompute(&mut self, knowledge: &Knowledge, features: &FeatureSet) {
        let classes = knowledge.class_count();
        self.p.resize(classes, 0.0);
        if classes == 0 {
            return;
        }

        let prior = 1.0 / classes as f64;

        let evidence: f64 = features
            .iter()
            .map(|f| marginal(knowledge, f.question, f.value))
            .product();

        for (index, slot) in self.p.iter_mut().enumerate() {
            let class = ClassId(index);
            let likelihood: f64 = features
                .iter()
                .map(|f| conditional(knowledge, f.question, f.value, class))
                .product();
            *slot = prior * likelihood / evidence;
        }

        self.normalize();
    }

    /// Scale the distribution to sum to 1, flooring every entry at EPS.
    ///
    /// When the whole distribution has collapsed (sum below EPS) there is
    /// nothing meaningful to scale; every entry becomes the flat floor
    /// instead of dividing by a vanishing sum. The floor is applied after
    /// scaling, so the sum may sit a hair above 1; readers tolerate that.
    fn normalize(&mut self) {
        let sum: f64 = self.p.iter().sum();
        for p in &mut self.p {
            let scaled = if sum < EPS { EPS } else { *p / sum };
            *p = scaled.max(EPS);
        }
    }

    /// Shannon entropy in nats, over a freshly recomputed distribution.
    pub fn entropy(&mut self, knowledge: &Knowledge, features: &FeatureSet) -> f64 {
        self.recompute(knowledge, features);
        self.p.iter().map(|&p| -p * p.ln()).sum()
    }

    /// Probability of one class as of the most recent pass; 0 for ids the
    /// pass never saw.
    pub fn probability(&self, class: ClassId) -> f64 {
        self.p.get(class.0).copied().unwrap_or(0.0)
    }

    /// The whole distribution as of the most recent pass.
    pub fn as_slice(&self) -> &[f64] {
        &self.p
    }

    /// Most probable class; ties keep the lowest id. `None` only when the
    /// last pass saw no classes at all.
    pub fn top_class(&self) -> Option<ClassId> {
        if self.p.is_empty() {
            return None;
        }
        let mut top = ClassId(0);
        let mut top_p = 0.0;
        for (index, &p) in self.p.iter().enumerate() {
            if p > top_p {
                top_p = p;
                top = ClassId(index);
            }
        }
        Some(top)
    }
}
