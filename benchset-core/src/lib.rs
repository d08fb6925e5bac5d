//! Benchset core library.
//!
//! Generates fixed-length sequences of integral values for algorithm
//! benchmarking. A [`Sequence`] is built once with a length, a generation
//! [`Policy`], and inclusive [`Bounds`], and can be refilled in place via
//! [`Sequence::regenerate`]. Five policies are supported: uniformly random,
//! ascending-sorted, descending-sorted, nearly-sorted, and few-unique.

mod bounds;
mod element;
mod error;
mod generation;
mod policy;
mod sequence;

pub use crate::{
    bounds::Bounds,
    element::Element,
    error::{Result, SequenceError, SequenceErrorCode},
    policy::Policy,
    sequence::{Sequence, SequenceBuilder},
};
