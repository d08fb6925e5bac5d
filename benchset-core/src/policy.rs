//! Generation policies for benchmark sequences.

use std::fmt;

/// Strategy used to arrange the values of a [`crate::Sequence`].
///
/// The variant set is closed and fixed at construction; generation dispatches
/// on it with a single branch, so no dynamic polymorphism is involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Independent uniform draws left in draw order.
    Random,
    /// Uniform draws sorted ascending (non-decreasing; duplicates allowed).
    Sorted,
    /// Uniform draws sorted descending (non-increasing).
    ReverseSorted,
    /// Sorted ascending, then perturbed by a small number of random swaps.
    NearlySorted,
    /// At most `floor(sqrt(N))` distinct values scattered over all positions.
    FewUnique,
}

impl Policy {
    /// Returns the stable label used in logs and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::ReverseSorted => "reverse-sorted",
            Self::NearlySorted => "nearly-sorted",
            Self::FewUnique => "few-unique",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Policy;

    #[test]
    fn labels_are_stable() {
        assert_eq!(Policy::Random.as_str(), "random");
        assert_eq!(Policy::ReverseSorted.as_str(), "reverse-sorted");
        assert_eq!(Policy::FewUnique.to_string(), "few-unique");
    }
}
