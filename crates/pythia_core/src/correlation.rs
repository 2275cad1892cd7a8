//! Agreement model between a class's typical answer and a candidate answer.
//!
//! `correlate` turns "how yes-leaning is this class on this question" plus
//! "which answer are we scoring" into an agreement score. An answer that
//! agrees with the observed lean scores high, one that contradicts it
//! scores low, and ambiguous answers are pulled toward the midpoint.

/// Threshold separating yes-leaning from no-leaning answer weights.
const THRESHOLD: f64 = 0.5;

/// Agreement between an average observed weight and a candidate answer
/// weight, both in [0, 1]. The result stays in [0, 1].
///
/// For a yes-leaning answer the average is scaled toward the midpoint by
/// how decisive the answer is; for a no-leaning answer the mirrored
/// average is used so that firm disagreement lands near 0. An answer with
/// weight exactly 0.5 always scores 0.5: it carries no direction.
pub fn correlate(avg: f64, weight: f64) -> f64 {
    let t = THRESHOLD;
    if weight > t {
        let k = (weight - t) / (1.0 - t);
        t + (avg - t) * k
    } else {
        let k = ((1.0 - weight) - t) / (1.0 - t);
        t + ((1.0 - avg) - t) * k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_full_agreement_scores_one() {
        assert!(approx_eq(correlate(1.0, 1.0), 1.0));
        assert!(approx_eq(correlate(0.0, 0.0), 1.0));
    }

    #[test]
    fn test_full_disagreement_scores_zero() {
        assert!(approx_eq(correlate(0.0, 1.0), 0.0));
        assert!(approx_eq(correlate(1.0, 0.0), 0.0));
    }

    #[test]
    fn test_neutral_answer_is_always_midpoint() {
        for avg in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx_eq(correlate(avg, 0.5), 0.5));
        }
    }

    #[test]
    fn test_neutral_average_is_always_midpoint() {
        for weight in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx_eq(correlate(0.5, weight), 0.5));
        }
    }

    #[test]
    fn test_mirror_symmetry() {
        // Flipping both the lean and the answer leaves the score unchanged.
        for avg in [0.0, 0.1, 0.3, 0.5, 0.8, 1.0] {
            for weight in [0.0, 0.25, 0.75, 1.0] {
                assert!(approx_eq(
                    correlate(avg, weight),
                    correlate(1.0 - avg, 1.0 - weight)
                ));
            }
        }
    }

    #[test]
    fn test_result_stays_in_unit_interval() {
        let grid = [0.0, 0.2, 0.4, 0.5, 0.6, 0.8, 1.0];
        for &avg in &grid {
            for &weight in &grid {
                let r = correlate(avg, weight);
                assert!((0.0..=1.0).contains(&r), "correlate({avg}, {weight}) = {r}");
            }
        }
    }

    #[test]
    fn test_soft_answers_score_softly() {
        // A "probably" against a firm yes lean scores lower than a "yes",
        // but still above the midpoint.
        let yes = correlate(1.0, 1.0);
        let probably = correlate(1.0, 0.75);
        assert!(probably < yes);
        assert!(probably > 0.5);
        assert!(approx_eq(probably, 0.75));
    }
}
