//! Minimax question selection.
//!
//! Every candidate question is scored by hypothesizing its two polar
//! answers and measuring the entropy each would leave behind. A question
//! is worth asking only if even its worse branch beats the best bound
//! found so far, the bound starting at the current entropy. When nothing
//! clears the bar the selector returns `None`: asking more questions
//! cannot shrink worst-case uncertainty, so the caller should commit to
//! a guess.

use tracing::debug;

use crate::answer::Answer;
use crate::features::FeatureSet;
use crate::knowledge::{Knowledge, QuestionId};
use crate::posterior::Posteriors;

/// Entropy bounds over the two polar branches of the chosen question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyBounds {
    /// Entropy after the more informative branch.
    pub min: f64,
    /// Entropy after the less informative branch; the minimax criterion.
    pub max: f64,
}

/// The selector's verdict for one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub question: QuestionId,
    pub bounds: EntropyBounds,
}

/// Pick the next question to ask, skipping questions whose flag is set.
///
/// Lookahead works by stack discipline on the live feature set: push the
/// hypothetical answer, measure, pop. Ties keep the first question found;
/// the comparison is strict.
pub fn select(
    knowledge: &Knowledge,
    posteriors: &mut Posteriors,
    features: &mut FeatureSet,
    skipped: &[bool],
) -> Option<Selection> {
    let mut best = posteriors.entropy(knowledge, features);
    let mut result = None;

    for question in knowledge.question_ids() {
        if skipped.get(question.0).copied().unwrap_or(false) {
            continue;
        }

        let mut branch_min = f64::INFINITY;
        let mut branch_max = f64::NEG_INFINITY;

        for answer in Answer::POLAR {
            features.push(question, answer);
            let entropy = posteriors.entropy(knowledge, features);
            features.pop();

            branch_min = branch_min.min(entropy);
            branch_max = branch_max.max(entropy);
        }

        debug!(
            "question {} worst-case entropy {:.6} (best so far {:.6})",
            question, branch_max, best
        );

        if best > branch_max {
            best = branch_max;
            result = Some(Selection {
                question,
                bounds: EntropyBounds {
                    min: branch_min,
                    max: branch_max,
                },
            });
        }
    }

    result
}
