//! Splitting a task list between two processors.

/// Minimum finishing time when tasks `0..i` go to one processor and tasks
/// `i..` to the other, over every split point `i` (including giving all
/// tasks to one side).
///
/// Each processor's time is the sum of its task durations and the
/// finishing time is the larger of the two. An empty list finishes at 0.
/// Sums are kept in `u128`, which cannot overflow for any slice of `u64`
/// durations.
pub fn min_split_time(tasks: &[u64]) -> u128 {
    best_split(tasks).1
}

/// Like [`min_split_time`] but also returns the split index achieving it.
///
/// Ties go to the smallest index.
pub fn best_split(tasks: &[u64]) -> (usize, u128) {
    let total: u128 = tasks.iter().map(|&t| u128::from(t)).sum();
    let mut prefix = 0u128;
    let mut best = (0, total);
    for (i, &t) in tasks.iter().enumerate() {
        prefix += u128::from(t);
        let time = prefix.max(total - prefix);
        if time < best.1 {
            best = (i + 1, time);
        }
    }
    best
}
