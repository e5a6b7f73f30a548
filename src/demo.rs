//! Bundled evaluation data from a part-of-speech tagging experiment
//!
//! Three taggers were run over the same 1,000-plus word test set: SCALAR,
//! Flair, and an ensemble of the two. Their confusion matrices are bundled
//! here so the CLI has something real to evaluate without any file I/O.
//! Row and column order is fixed and matches [`POS_LABELS`].

use crate::error::Result;
use crate::matrix::ConfusionMatrix;

/// Part-of-speech class labels, in matrix order
pub const POS_LABELS: [&str; 10] = [
    "N (Noun)",
    "V (Verb)",
    "NM (Noun Modifier)",
    "D (Determiner)",
    "P (Preposition)",
    "VM (Verb Modifier)",
    "PRE (Prefix)",
    "DT (Determiner Type)",
    "NPL (Noun Plural)",
    "CJ (Conjunction)",
];

/// Confusion matrix for the SCALAR tagger
pub fn scalar_tagger() -> Result<ConfusionMatrix> {
    ConfusionMatrix::from_rows(vec![
        vec![262, 12, 23, 0, 4, 3, 0, 2, 0, 0],
        vec![3, 77, 6, 0, 0, 0, 1, 0, 0, 0],
        vec![58, 10, 286, 2, 2, 0, 12, 2, 1, 1],
        vec![0, 0, 0, 43, 0, 0, 0, 0, 0, 0],
        vec![2, 0, 2, 0, 71, 1, 0, 0, 0, 0],
        vec![1, 0, 0, 0, 0, 6, 0, 0, 0, 1],
        vec![8, 1, 11, 1, 0, 0, 36, 0, 0, 0],
        vec![3, 0, 0, 0, 0, 2, 0, 45, 0, 0],
        vec![4, 1, 4, 0, 0, 0, 0, 0, 55, 0],
        vec![1, 0, 3, 0, 0, 0, 0, 0, 0, 7],
    ])
}

/// Confusion matrix for the Flair tagger
///
/// The PRE class has no ground-truth instances in this run: its row is
/// all zeros even though PRE was predicted 47 times.
pub fn flair_tagger() -> Result<ConfusionMatrix> {
    ConfusionMatrix::from_rows(vec![
        vec![295, 22, 219, 1, 2, 2, 39, 2, 0, 0],
        vec![11, 61, 12, 0, 0, 0, 0, 0, 1, 0],
        vec![9, 17, 74, 0, 0, 1, 1, 21, 0, 0],
        vec![3, 0, 3, 45, 1, 0, 1, 0, 0, 0],
        vec![7, 0, 12, 0, 71, 1, 1, 0, 0, 3],
        vec![6, 0, 4, 0, 3, 8, 0, 3, 0, 1],
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![2, 0, 1, 0, 0, 0, 2, 23, 0, 0],
        vec![5, 1, 7, 0, 0, 0, 3, 0, 55, 0],
        vec![1, 0, 2, 0, 0, 0, 0, 0, 0, 5],
    ])
}

/// Confusion matrix for the SCALAR + Flair ensemble
pub fn ensemble_tagger() -> Result<ConfusionMatrix> {
    ConfusionMatrix::from_rows(vec![
        vec![242, 7, 22, 0, 4, 6, 10, 0, 0, 1],
        vec![8, 60, 4, 0, 1, 0, 7, 1, 0, 0],
        vec![72, 29, 297, 2, 10, 3, 17, 25, 4, 1],
        vec![0, 0, 0, 40, 1, 0, 0, 0, 0, 0],
        vec![6, 0, 3, 4, 58, 0, 0, 3, 0, 2],
        vec![1, 4, 0, 0, 0, 3, 2, 0, 0, 0],
        vec![2, 1, 5, 0, 0, 0, 8, 0, 0, 0],
        vec![4, 0, 1, 0, 0, 0, 3, 20, 0, 0],
        vec![5, 0, 2, 0, 0, 0, 2, 0, 52, 0],
        vec![2, 0, 1, 0, 3, 0, 0, 0, 0, 5],
    ])
}

/// All three taggers, paired with their display names
pub fn all_taggers() -> Result<Vec<(&'static str, ConfusionMatrix)>> {
    Ok(vec![
        ("SCALAR", scalar_tagger()?),
        ("Flair", flair_tagger()?),
        ("Ensemble", ensemble_tagger()?),
    ])
}
