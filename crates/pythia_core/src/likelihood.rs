//! Probability estimators feeding the Bayes update.
//!
//! Both estimators reduce a question plus a candidate answer to a single
//! agreement score via [`correlate`], then smooth it against a population
//! size so that impossible events never reach zero. Zero would be
//! absorbing under repeated multiplication; the floor keeps every class
//! recoverable by later evidence.

use crate::answer::Answer;
use crate::correlation::correlate;
use crate::knowledge::{ClassId, Knowledge, QuestionId};

/// Floor used wherever a probability could otherwise reach zero, and the
/// guard value for degenerate divisions.
pub const EPS: f64 = 1e-6;

/// Smoothed ratio: EPS when either side is non-positive, otherwise x / n.
pub fn smooth(x: f64, n: f64) -> f64 {
    if x <= 0.0 || n <= 0.0 {
        EPS
    } else {
        x / n
    }
}

/// Shared shape of both estimators: average the accumulated weight over
/// `count` contributors (zero contributors average to zero), correlate
/// with the candidate answer, smooth against `total`.
fn estimate(candidate: Answer, weight_sum: f64, count: usize, total: usize) -> f64 {
    let avg = if count > 0 { weight_sum / count as f64 } else { 0.0 };
    smooth(correlate(avg, candidate.weight()), total as f64)
}

/// Marginal feature probability p(F): how probable this answer to this
/// question is across the whole population of classes. The evidence term
/// of the Bayes update.
pub fn marginal(knowledge: &Knowledge, question: QuestionId, answer: Answer) -> f64 {
    let classes = knowledge.class_count();
    let weight_sum: f64 = knowledge
        .class_ids()
        .map(|class| knowledge.value_or_unknown(class, question).weight())
        .sum();
    estimate(answer, weight_sum, classes, classes)
}

/// Class-conditional feature probability p(F|C): how probable this answer
/// to this question is for one class alone. The likelihood term.
///
/// Note the smoothing divisor: the question count, not the class count.
/// With sparse data this discounts likelihood terms more sharply than
/// evidence terms, which keeps one confident observation from swamping
/// the posterior.
pub fn conditional(
    knowledge: &Knowledge,
    question: QuestionId,
    answer: Answer,
    class: ClassId,
) -> f64 {
    let weight = knowledge.value_or_unknown(class, question).weight();
    estimate(answer, weight, 1, knowledge.question_count())
}
