//! Run re-segmentation
//!
//! Redistributes the words of a paraphrased paragraph across the original
//! formatting runs, using each original run's word count as its weight.
//! This is a best-effort heuristic, not a text-reflow algorithm: run
//! boundaries drift whenever the paraphrase changes the word count.

use super::models::FormattedRun;

/// Split `paraphrased` into words and deal them out over `original_runs`.
///
/// Each run consumes as many words as its original text held, keeping its
/// formatting tuple verbatim, and is padded with one trailing space. The
/// word-count mismatch policy is explicit:
///
/// * shortfall — when the word stream runs dry, iteration stops and later
///   runs are not emitted;
/// * overflow — words left over after the last run's quota are merged into
///   that final run, so nothing the model produced is dropped.
///
/// With an unchanged paraphrase this reproduces the original per-run
/// boundaries exactly (modulo whitespace normalization).
pub fn resegment_runs(paraphrased: &str, original_runs: &[FormattedRun]) -> Vec<FormattedRun> {
    let words: Vec<&str> = paraphrased.split_whitespace().collect();

    let mut produced = Vec::with_capacity(original_runs.len());
    let mut cursor = 0;

    for (index, run) in original_runs.iter().enumerate() {
        if cursor >= words.len() {
            break;
        }

        let last = index + 1 == original_runs.len();
        let end = if last {
            words.len()
        } else {
            (cursor + run.word_count()).min(words.len())
        };

        let mut text = words[cursor..end].join(" ");
        text.push(' ');
        cursor = end;

        produced.push(FormattedRun {
            text,
            formatting: run.formatting.clone(),
        });
    }

    produced
}
