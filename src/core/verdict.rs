//! Letter feedback
//!
//! A verdict is attached to every submitted grid cell and to every keyboard
//! key that has appeared in a submitted guess.

use std::fmt;

/// Feedback for one letter cell or one keyboard key
///
/// Variants are ordered by strength: `None < Absent < Present < Correct`.
/// Combining two verdicts for the same key keeps the stronger one, so a key
/// never loses information it has already gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verdict {
    /// Not scored yet
    #[default]
    None,
    /// Letter not in the secret (after accounting for duplicates already matched)
    Absent,
    /// Letter in the secret, wrong position
    Present,
    /// Letter in the right position
    Correct,
}

impl Verdict {
    /// Fold a newer verdict into this one
    ///
    /// `Correct` is sticky, `Present` never falls back to `Absent`, and
    /// `Absent` only fills an unscored slot.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::Verdict;
    ///
    /// assert_eq!(Verdict::Correct.merge(Verdict::Absent), Verdict::Correct);
    /// assert_eq!(Verdict::Present.merge(Verdict::Absent), Verdict::Present);
    /// assert_eq!(Verdict::Absent.merge(Verdict::Present), Verdict::Present);
    /// assert_eq!(Verdict::None.merge(Verdict::Absent), Verdict::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, newer: Self) -> Self {
        self.max(newer)
    }

    /// Whether this verdict came from a submitted guess
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Emoji tile used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::None => '▫',
        }
    }

    /// Single ASCII symbol: `G` correct, `Y` present, `-` absent, `.` unscored
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::None => '.',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Verdict; 4] = [
        Verdict::None,
        Verdict::Absent,
        Verdict::Present,
        Verdict::Correct,
    ];

    #[test]
    fn verdict_default_is_none() {
        assert_eq!(Verdict::default(), Verdict::None);
        assert!(!Verdict::default().is_scored());
    }

    #[test]
    fn verdict_correct_is_sticky() {
        for newer in ALL {
            assert_eq!(Verdict::Correct.merge(newer), Verdict::Correct);
        }
    }

    #[test]
    fn verdict_present_never_downgrades_to_absent() {
        assert_eq!(Verdict::Present.merge(Verdict::Absent), Verdict::Present);
        assert_eq!(Verdict::Present.merge(Verdict::None), Verdict::Present);
        assert_eq!(Verdict::Present.merge(Verdict::Correct), Verdict::Correct);
    }

    #[test]
    fn verdict_absent_only_fills_unset() {
        assert_eq!(Verdict::None.merge(Verdict::Absent), Verdict::Absent);
        assert_eq!(Verdict::Absent.merge(Verdict::Present), Verdict::Present);
        assert_eq!(Verdict::Absent.merge(Verdict::Correct), Verdict::Correct);
    }

    #[test]
    fn verdict_merge_never_weakens() {
        for old in ALL {
            for newer in ALL {
                assert!(old.merge(newer) >= old);
            }
        }
    }

    #[test]
    fn verdict_symbols() {
        let symbols: String = ALL.iter().map(|v| v.symbol()).collect();
        assert_eq!(symbols, ".-YG");
        assert_eq!(Verdict::Correct.emoji(), '🟩');
    }
}
