use uuid::Uuid;

use crate::models::Round;

/// Stage labels trusted unconditionally as the deciding round.
///
/// Exact match only: organizers name rounds inconsistently, and labels
/// like "Minor Final", "Semifinal" or a lowercase "final" must fall
/// through to the chronological rule instead of matching here.
pub const FINAL_STAGES: [&str; 2] = ["Final", "Grand Final"];

/// Whether `round_id` is the final round of its discipline, given the full
/// set of the discipline's rounds.
///
/// A lone round is always final. A round labelled exactly `"Final"` or
/// `"Grand Final"` is final regardless of chronology. Everything else is
/// final only if it is the chronologically last round, ordered by creation
/// time with round id as tie-breaker.
///
/// Several exact-labelled rounds (a data-entry mistake) all report final;
/// guarding against that is left to the caller.
pub fn is_final_round(round_id: Uuid, rounds: &[Round]) -> bool {
    let Some(round) = rounds.iter().find(|r| r.round_id == round_id) else {
        return false;
    };

    if rounds.len() == 1 {
        return true;
    }
    if FINAL_STAGES.contains(&round.stage.as_str()) {
        return true;
    }

    chronologically_last(rounds).is_some_and(|last| last.round_id == round_id)
}

/// The round the cumulative standings attach to: the chronologically last
/// of the rounds [`is_final_round`] accepts.
pub fn final_round(rounds: &[Round]) -> Option<&Round> {
    rounds
        .iter()
        .filter(|r| FINAL_STAGES.contains(&r.stage.as_str()))
        .max_by_key(|r| r.chronological_key())
        .or_else(|| chronologically_last(rounds))
}

fn chronologically_last(rounds: &[Round]) -> Option<&Round> {
    rounds.iter().max_by_key(|r| r.chronological_key())
}
