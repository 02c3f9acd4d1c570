//! Score classification.
//!
//! Pure lookups mapping raw screening scores onto the buckets, distribution
//! bins and matrix ranges the dashboard renders. Claim-validity scores come
//! from per-answer grading (0-5, with legacy rows on a 0-100 scale);
//! relevancy comes from resume/JD matching (1-5, with `fit_score` as the
//! legacy fallback field).

use crate::analytics::model::{ClaimAxisEntry, RelevancyAxisEntry};

/// Column index of the claim-validity "No Score" bucket.
pub const CLAIM_NO_SCORE_INDEX: usize = 5;
/// Row index of the relevancy "No Score" bucket.
pub const RELEVANCY_NO_SCORE_INDEX: usize = 6;

/// Weight of claim validity in the combined score.
pub const CLAIM_WEIGHT: f64 = 0.55;
/// Weight of relevancy in the combined score.
pub const RELEVANCY_WEIGHT: f64 = 0.45;

/// Mean of the non-null answer scores, normalized onto the 0-5 scale.
/// Legacy 0-100 grades are detected by a mean above 5 and divided by 20.
pub fn claim_validity_average(answer_scores: &[Option<f64>]) -> Option<f64> {
    let values: Vec<f64> = answer_scores.iter().flatten().copied().collect();
    if values.is_empty() {
        return None;
    }
    let mut avg = values.iter().sum::<f64>() / values.len() as f64;
    if avg > 5.0 {
        avg /= 20.0;
    }
    Some(avg)
}

/// Claim-validity bucket 1..=5, or `None` when no answers were scored.
pub fn claim_validity_bucket(answer_scores: &[Option<f64>]) -> Option<u8> {
    let avg = claim_validity_average(answer_scores)?;
    Some((avg.round() as i64).clamp(1, 5) as u8)
}

/// Raw relevancy score, preferring the explicit field over the legacy
/// `fit_score` fallback.
pub fn relevancy_score(relevancy: Option<f64>, fit_score: Option<f64>) -> Option<f64> {
    relevancy.or(fit_score)
}

/// Relevancy bucket 1..=5, or `None` when neither field is present.
pub fn relevancy_bucket(relevancy: Option<f64>, fit_score: Option<f64>) -> Option<u8> {
    let score = relevancy_score(relevancy, fit_score)?;
    Some((score.round() as i64).clamp(1, 5) as u8)
}

/// A diamond is a candidate whose claims check out and whose profile fits:
/// claim bucket >= 4 and relevancy bucket at the ceiling.
pub fn is_diamond(claim_bucket: Option<u8>, relevancy_bucket: Option<u8>) -> bool {
    matches!((claim_bucket, relevancy_bucket), (Some(c), Some(r)) if c >= 4 && r >= 5)
}

/// Distribution bin index 0..=6 for a continuous 0-5 score.
/// Bins: [No Score, >=0, >=1, >=2, >=3, >=4, =5].
pub fn distribution_bin(score: Option<f64>) -> usize {
    let Some(score) = score else {
        return 0;
    };
    if score >= 5.0 {
        6
    } else if score >= 4.0 {
        5
    } else if score >= 3.0 {
        4
    } else if score >= 2.0 {
        3
    } else if score >= 1.0 {
        2
    } else if score >= 0.0 {
        1
    } else {
        0
    }
}

/// Claim-validity column index 0..=5 in the cross-validation matrix.
/// Columns: [>4, >3, >2, >1, >0, No Score].
pub fn claim_matrix_index(score: Option<f64>) -> usize {
    let Some(score) = score else {
        return 5;
    };
    if score > 4.0 {
        0
    } else if score > 3.0 {
        1
    } else if score > 2.0 {
        2
    } else if score > 1.0 {
        3
    } else if score > 0.0 {
        4
    } else {
        5
    }
}

/// Relevancy row index 0..=6 in the cross-validation matrix.
/// Rows: [5/5, 4/5, 3/5, 2/5, 1/5, 0/5, No Score].
pub fn relevancy_matrix_index(score: Option<f64>) -> usize {
    let Some(score) = score else {
        return 6;
    };
    if score >= 5.0 {
        0
    } else if score >= 4.0 {
        1
    } else if score >= 3.0 {
        2
    } else if score >= 2.0 {
        3
    } else if score >= 1.0 {
        4
    } else if score >= 0.0 {
        5
    } else {
        6
    }
}

/// Weighted combination of the two scores; missing values count as 0.
pub fn combined_score(claim: Option<f64>, relevancy: Option<f64>) -> f64 {
    claim.unwrap_or(0.0) * CLAIM_WEIGHT + relevancy.unwrap_or(0.0) * RELEVANCY_WEIGHT
}

/// Display initials for a candidate name: first letters of first and last
/// word, or the first two letters of a single word, `"--"` when blank.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "--".to_string(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => {
            let mut out = String::new();
            out.extend(first.chars().next());
            out.extend(last.chars().next());
            out.to_uppercase()
        }
    }
}

/// Row metadata for the cross-validation matrix.
pub fn relevancy_axis() -> Vec<RelevancyAxisEntry> {
    let labels = ["5/5", "4/5", "3/5", "2/5", "1/5", "0/5"];
    let mut axis: Vec<RelevancyAxisEntry> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| RelevancyAxisEntry {
            index,
            label: label.to_string(),
            value: Some((5 - index) as u8),
            is_no_score: false,
        })
        .collect();
    axis.push(RelevancyAxisEntry {
        index: 6,
        label: "No Score".to_string(),
        value: None,
        is_no_score: true,
    });
    axis
}

/// Column metadata for the cross-validation matrix.
pub fn claim_validity_axis() -> Vec<ClaimAxisEntry> {
    let labels = [">4", ">3", ">2", ">1", ">0"];
    let mut axis: Vec<ClaimAxisEntry> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| ClaimAxisEntry {
            index,
            label: label.to_string(),
            bucket: (5 - index) as u8,
            is_no_score: false,
        })
        .collect();
    axis.push(ClaimAxisEntry {
        index: 5,
        label: "No Score".to_string(),
        bucket: 0,
        is_no_score: true,
    });
    axis
}
