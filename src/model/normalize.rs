use std::collections::HashSet;

/// Removes polling flicker from a rating trajectory.
///
/// Whenever `ratings[i] == ratings[i + 2]`, the snapshot at `i + 1` is treated
/// as a duplicate poll that bounced back rather than two real games, and is
/// dropped. Only triples present in the input are considered; the result is
/// not rescanned. The first and last snapshots are never removed.
pub fn normalize(ratings: &[i32]) -> Vec<i32> {
    if ratings.len() < 3 {
        return ratings.to_vec();
    }

    let flicker: HashSet<usize> = ratings
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[0] == w[2])
        .map(|(i, _)| i + 1)
        .collect();

    ratings
        .iter()
        .enumerate()
        .filter(|(i, _)| !flicker.contains(i))
        .map(|(_, rating)| *rating)
        .collect()
}

/// Games played over a normalized trajectory: one per transition.
pub fn game_count(normalized: &[i32]) -> usize {
    normalized.len().saturating_sub(1)
}
