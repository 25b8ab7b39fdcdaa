//! Cumulative per-key verdicts for the on-screen keyboard

use super::Verdict;

const ALPHABET_LEN: usize = 26;

/// Verdict for each of the 26 keys A–Z
///
/// Every update goes through [`Verdict::merge`], so a key's colour only ever
/// gets stronger over the course of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyVerdicts {
    keys: [Verdict; ALPHABET_LEN],
}

impl KeyVerdicts {
    /// All keys unscored
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verdict for a letter (either case); non-letters are always `None`
    #[must_use]
    pub fn get(&self, letter: u8) -> Verdict {
        Self::slot(letter).map_or(Verdict::None, |i| self.keys[i])
    }

    /// Fold a verdict into a key
    pub fn record(&mut self, letter: u8, verdict: Verdict) {
        if let Some(i) = Self::slot(letter) {
            self.keys[i] = self.keys[i].merge(verdict);
        }
    }

    /// Fold every key of `other` into this map
    pub fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.keys.iter_mut().zip(other.keys) {
            *mine = mine.merge(theirs);
        }
    }

    /// Scored keys in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        (b'A'..=b'Z')
            .zip(self.keys.iter().copied())
            .filter(|(_, v)| v.is_scored())
            .map(|(letter, v)| (letter as char, v))
    }

    /// True if no key has been scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.iter().all(|v| !v.is_scored())
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_start_unscored() {
        let keys = KeyVerdicts::new();
        assert!(keys.is_empty());
        assert_eq!(keys.get(b'A'), Verdict::None);
        assert_eq!(keys.iter().count(), 0);
    }

    #[test]
    fn record_keeps_strongest() {
        let mut keys = KeyVerdicts::new();
        keys.record(b'P', Verdict::Present);
        keys.record(b'P', Verdict::Absent);
        assert_eq!(keys.get(b'P'), Verdict::Present);

        keys.record(b'P', Verdict::Correct);
        keys.record(b'P', Verdict::Present);
        assert_eq!(keys.get(b'P'), Verdict::Correct);
    }

    #[test]
    fn get_is_case_insensitive_and_ignores_non_letters() {
        let mut keys = KeyVerdicts::new();
        keys.record(b'e', Verdict::Present);
        keys.record(b'1', Verdict::Correct);
        assert_eq!(keys.get(b'E'), Verdict::Present);
        assert_eq!(keys.get(b'e'), Verdict::Present);
        assert_eq!(keys.get(b'1'), Verdict::None);
        assert_eq!(keys.iter().count(), 1);
    }

    #[test]
    fn merge_folds_other_map() {
        let mut earlier = KeyVerdicts::new();
        earlier.record(b'A', Verdict::Correct);
        earlier.record(b'B', Verdict::Present);

        let mut later = KeyVerdicts::new();
        later.record(b'A', Verdict::Absent);
        later.record(b'B', Verdict::Absent);
        later.record(b'C', Verdict::Absent);

        earlier.merge(&later);
        let scored: Vec<_> = earlier.iter().collect();
        assert_eq!(
            scored,
            vec![
                ('A', Verdict::Correct),
                ('B', Verdict::Present),
                ('C', Verdict::Absent),
            ]
        );
    }
}
