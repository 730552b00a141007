/// Number of entries kept in the best-scores list.
pub const MAX_BEST_SCORES: usize = 10;

/// Merge `score` into `best`, returning the top entries in descending order.
///
/// The current score is always merged in, so calling this repeatedly with an
/// unchanged score adds it again each time.
pub fn merge_best_scores(best: &[u32], score: u32) -> Vec<u32> {
    let mut merged: Vec<u32> = best.iter().copied().chain(std::iter::once(score)).collect();
    merged.sort_unstable_by(|a, b| b.cmp(a));
    merged.truncate(MAX_BEST_SCORES);
    merged
}
