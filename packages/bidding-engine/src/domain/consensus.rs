//! Partnership consensus: grouping structurally-equal answers and scoring
//! agreement across questions.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// One player's response to one question. The engine never interprets its
/// fields; it is only a value subject to structural equality.
pub type AnswerRecord = Value;

/// Grouping is a linear scan comparing each record against one
/// representative per existing group, so it is quadratic in the number of
/// records. Answer sets are partnership-sized; this cap documents that
/// assumption. Reuse with larger groups should switch to
/// canonical-serialization + hash-map grouping instead of raising it.
pub const MAX_ANSWER_SET: usize = 16;

/// Consensus verdict for one question. Derived, never persisted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct AgreementResult {
    pub agreed: bool,
    pub answer_count: usize,
    pub unique_groups: usize,
}

/// Structural deep equality over answer records.
///
/// Primitives compare by value, sequences pairwise in order, and maps by
/// key set (order-insensitive) with equal values per key. Mixed kinds are
/// never equal.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(u, v)| deep_equal(u, v))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| deep_equal(v, w)))
        }
        _ => false,
    }
}

/// Partition `answers` into equivalence classes under [`deep_equal`] and
/// report whether everyone agreed.
///
/// `agreed` holds only when the records form a single group and the input is
/// non-empty. Whether every expected participant actually answered is the
/// caller's concern: agreement is computed strictly over the records given.
pub fn agreement(answers: &[AnswerRecord]) -> AgreementResult {
    debug_assert!(
        answers.len() <= MAX_ANSWER_SET,
        "answer sets are partnership-sized; got {}",
        answers.len()
    );

    // Only one representative per group is kept; each incoming record joins
    // the first group whose representative it equals.
    let mut representatives: Vec<&AnswerRecord> = Vec::new();
    for answer in answers {
        if !representatives.iter().any(|rep| deep_equal(rep, answer)) {
            representatives.push(answer);
        }
    }

    let result = AgreementResult {
        agreed: representatives.len() == 1 && !answers.is_empty(),
        answer_count: answers.len(),
        unique_groups: representatives.len(),
    };
    debug!(
        answer_count = result.answer_count,
        unique_groups = result.unique_groups,
        agreed = result.agreed,
        "answers grouped"
    );
    result
}

/// Percentage of questions on which the partnership agreed, rounded half-up.
/// Returns 0 for an empty result set.
pub fn overall_score(results: &[AgreementResult]) -> u32 {
    if results.is_empty() {
        return 0;
    }
    let agreed = results.iter().filter(|r| r.agreed).count() as u32;
    let total = results.len() as u32;
    // Integer round-half-up of 100 * agreed / total.
    (200 * agreed + total) / (2 * total)
}
