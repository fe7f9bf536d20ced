//! Longest run of one repeated character.

/// Length of the longest block of identical consecutive characters.
///
/// Characters are Unicode scalar values. An empty string has no runs and
/// yields 0.
pub fn longest_run(s: &str) -> usize {
    let mut tracker = RunTracker::default();
    s.chars().for_each(|ch| tracker.push(ch));
    tracker.longest()
}

/// Incremental [`longest_run`] for a string that only grows at the end.
///
/// Each [`push`](Self::push) is O(1), so answering after every append costs
/// linear time overall instead of rescanning the whole string each time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTracker {
    last: Option<char>,
    current: usize,
    longest: usize,
}

impl RunTracker {
    /// Start from an initial string.
    pub fn new(initial: &str) -> Self {
        let mut t = Self::default();
        t.extend(initial.chars());
        t
    }

    /// Append one character.
    pub fn push(&mut self, ch: char) {
        if self.last == Some(ch) {
            self.current += 1;
        } else {
            self.last = Some(ch);
            self.current = 1;
        }
        self.longest = self.longest.max(self.current);
    }

    /// Longest run seen so far.
    #[inline]
    pub fn longest(&self) -> usize {
        self.longest
    }

    /// Length of the run ending at the last character.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }
}

impl Extend<char> for RunTracker {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.push(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_runs() {
        assert_eq!(longest_run(""), 0);
        assert_eq!(longest_run("a"), 1);
        assert_eq!(longest_run("abc"), 1);
        assert_eq!(longest_run("aabbbc"), 3);
        assert_eq!(longest_run("abbbbcc"), 4);
        assert_eq!(longest_run("cccab"), 3);
        assert_eq!(longest_run("abccc"), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(longest_run("ééé"), 3);
        assert_eq!(longest_run("日日本"), 2);
    }

    #[test]
    fn tracker_after_each_append() {
        let mut t = RunTracker::new("aab");
        assert_eq!(t.longest(), 2);
        let mut answers = Vec::new();
        for ch in "bbac".chars() {
            t.push(ch);
            answers.push(t.longest());
        }
        assert_eq!(answers, vec![2, 3, 3, 3]);
        assert_eq!(t.current(), 1);
    }

    #[test]
    fn tracker_matches_rescan() {
        let s = "xxyyyzzzzyx";
        let mut t = RunTracker::default();
        for (i, ch) in s.char_indices() {
            t.push(ch);
            assert_eq!(t.longest(), longest_run(&s[..i + ch.len_utf8()]));
        }
    }
}
