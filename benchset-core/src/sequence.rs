//! The bounded random sequence container and its builder.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::{
    bounds::Bounds,
    element::Element,
    error::{Result, SequenceError},
    generation,
    policy::Policy,
};

/// A fixed-length sequence of integral values generated under a [`Policy`].
///
/// The length and policy are fixed at construction. The contents can change
/// only through [`Sequence::regenerate`], which overwrites every element, or
/// through direct indexed writes. Each sequence owns its buffer exclusively
/// and carries its own RNG stream, so instances are independent.
///
/// # Examples
/// ```
/// use benchset_core::{Policy, Sequence};
///
/// let sequence = Sequence::<i32>::builder(8)
///     .with_policy(Policy::Sorted)
///     .with_seed(42)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(sequence.len(), 8);
/// assert!(sequence.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
/// ```
#[derive(Clone, Debug)]
pub struct Sequence<T: Element> {
    values: Box<[T]>,
    policy: Policy,
    bounds: Bounds<T>,
    rng: SmallRng,
}

/// Configures and constructs [`Sequence`] instances.
///
/// Defaults: policy [`Policy::Random`], bounds `0..=1000` (clamped to the
/// element type's maximum), seed drawn from entropy.
///
/// # Examples
/// ```
/// use benchset_core::{Bounds, Policy, Sequence};
///
/// let builder = Sequence::<u16>::builder(32).with_policy(Policy::FewUnique);
/// assert_eq!(builder.length(), 32);
/// assert_eq!(builder.policy(), Policy::FewUnique);
/// assert_eq!(builder.bounds(), Bounds::default());
/// ```
#[derive(Clone, Debug)]
pub struct SequenceBuilder<T: Element> {
    length: usize,
    policy: Policy,
    bounds: Bounds<T>,
    seed: Option<u64>,
}

impl<T: Element> SequenceBuilder<T> {
    /// Creates a builder for a sequence of `length` elements.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            policy: Policy::Random,
            bounds: Bounds::default(),
            seed: None,
        }
    }

    /// Overrides the generation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Overrides the generation bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds<T>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Seeds the sequence's RNG stream for reproducible output.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured length.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the configured policy.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the configured bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds<T> {
        self.bounds
    }

    /// Validates the configuration, allocates the buffer, and fills it.
    ///
    /// Generation is all-or-nothing: on error no buffer is observable.
    ///
    /// # Errors
    /// Returns [`SequenceError::ZeroLength`] when the length is zero. Bounds
    /// are validated when the [`Bounds`] value is constructed.
    pub fn build(self) -> Result<Sequence<T>> {
        if self.length == 0 {
            return Err(SequenceError::ZeroLength);
        }
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut values = vec![T::ZERO; self.length].into_boxed_slice();
        generation::fill(&mut values, self.policy, self.bounds, &mut rng);
        debug!(
            policy = %self.policy,
            length = self.length,
            bounds = %self.bounds,
            "sequence generated"
        );
        Ok(Sequence {
            values,
            policy: self.policy,
            bounds: self.bounds,
            rng,
        })
    }
}

impl<T: Element> Sequence<T> {
    /// Starts building a sequence of `length` elements.
    #[must_use]
    pub fn builder(length: usize) -> SequenceBuilder<T> {
        SequenceBuilder::new(length)
    }

    /// Returns the fixed number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Reports whether the sequence holds no elements.
    ///
    /// Always `false` for a constructed sequence, since zero-length
    /// configurations are rejected at build time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the generation policy fixed at construction.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the bounds used by the most recent (re)generation.
    #[must_use]
    pub fn bounds(&self) -> Bounds<T> {
        self.bounds
    }

    /// Reads the element at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Writes `value` at `index`.
    ///
    /// # Errors
    /// Returns [`SequenceError::IndexOutOfBounds`] when `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let length = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(SequenceError::IndexOutOfBounds { index, length })?;
        *slot = value;
        Ok(())
    }

    /// Borrows the contiguous buffer.
    ///
    /// The borrow ends before any regeneration; values read through a slice
    /// taken earlier do not survive a later [`Sequence::regenerate`].
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Mutably borrows the contiguous buffer for direct indexed writes.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Iterates over the elements from first to last.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Refills every element using the same policy over a new range.
    ///
    /// The range is validated before any element is written, so a failed
    /// regeneration leaves the contents and bounds untouched. Draws continue
    /// the sequence's RNG stream.
    ///
    /// # Errors
    /// Returns [`SequenceError::InvalidBounds`] when `upper < lower`.
    ///
    /// # Examples
    /// ```
    /// use benchset_core::{Policy, Sequence};
    ///
    /// let mut sequence = Sequence::<i64>::builder(20).with_seed(7).build()?;
    /// sequence.regenerate(0, 1)?;
    /// assert!(sequence.iter().all(|&value| value == 0 || value == 1));
    /// # Ok::<(), benchset_core::SequenceError>(())
    /// ```
    pub fn regenerate(&mut self, lower: T, upper: T) -> Result<()> {
        let bounds = Bounds::new(lower, upper)?;
        self.bounds = bounds;
        generation::fill(&mut self.values, self.policy, bounds, &mut self.rng);
        debug!(
            policy = %self.policy,
            length = self.values.len(),
            bounds = %bounds,
            "sequence regenerated"
        );
        Ok(())
    }
}

impl<T: Element> Index<usize> for Sequence<T> {
    type Output = T;

    /// # Panics
    /// Panics when `index >= len()`; use [`Sequence::get`] for a checked read.
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T: Element> IndexMut<usize> for Sequence<T> {
    /// # Panics
    /// Panics when `index >= len()`; use [`Sequence::set`] for a checked write.
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<'a, T: Element> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}

impl<T: Element> fmt::Display for Sequence<T> {
    /// Renders the elements in order, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in &self.values {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
