//! Display tones for the cross-validation matrix.
//!
//! Pure lookup from a cell position (relevancy row × claim column) to the
//! tone the dashboard paints it with. Stateless; the counts themselves come
//! from the service payload.

use serde::{Deserialize, Serialize};

use super::score::{CLAIM_NO_SCORE_INDEX, RELEVANCY_NO_SCORE_INDEX};

/// Visual tone of a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellTone {
    /// High claim validity and top relevancy: the diamond zone.
    Diamond,
    Strong,
    Moderate,
    Weak,
    /// Either axis lacked a score.
    NoScore,
}

/// Classify a matrix cell. Rows run 0..=6 (5/5 down to No Score), columns
/// 0..=5 (>4 down to No Score); lower indices mean better scores on both
/// axes.
pub fn cell_tone(relevancy_index: usize, claim_index: usize) -> CellTone {
    if relevancy_index >= RELEVANCY_NO_SCORE_INDEX || claim_index >= CLAIM_NO_SCORE_INDEX {
        return CellTone::NoScore;
    }
    // Diamond zone mirrors the diamond rule: relevancy at the ceiling,
    // claim bucket >= 4.
    if relevancy_index == 0 && claim_index <= 1 {
        return CellTone::Diamond;
    }
    if relevancy_index <= 1 && claim_index <= 2 {
        return CellTone::Strong;
    }
    if relevancy_index <= 3 && claim_index <= 3 {
        return CellTone::Moderate;
    }
    CellTone::Weak
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_zone_matches_diamond_rule() {
        assert_eq!(cell_tone(0, 0), CellTone::Diamond);
        assert_eq!(cell_tone(0, 1), CellTone::Diamond);
        // One row down is no longer a diamond.
        assert_eq!(cell_tone(1, 0), CellTone::Strong);
        assert_eq!(cell_tone(0, 2), CellTone::Strong);
    }

    #[test]
    fn no_score_wins_on_either_axis() {
        assert_eq!(cell_tone(6, 0), CellTone::NoScore);
        assert_eq!(cell_tone(0, 5), CellTone::NoScore);
        assert_eq!(cell_tone(6, 5), CellTone::NoScore);
    }

    #[test]
    fn low_corners_are_weak() {
        assert_eq!(cell_tone(5, 4), CellTone::Weak);
        assert_eq!(cell_tone(4, 0), CellTone::Weak);
        assert_eq!(cell_tone(2, 2), CellTone::Moderate);
    }

    #[test]
    fn every_cell_has_a_tone() {
        for row in 0..7 {
            for col in 0..6 {
                let _ = cell_tone(row, col);
            }
        }
    }
}
