//! Integral element contract for generated sequences.
//!
//! Sequences may only hold primitive signed or unsigned integers. Character
//! types are integral at the representation level but are deliberately
//! excluded, so the contract is expressed as a sealed trait implemented for
//! exactly the integer primitives.

use std::fmt;

use rand::distributions::uniform::SampleUniform;

mod private {
    pub trait Sealed {}
}

/// Contract satisfied by element types a [`crate::Sequence`] can hold.
///
/// Implemented for the primitive integer types only; the trait is sealed so
/// the set stays closed. The associated constants supply the default
/// generation range used when a caller does not provide explicit bounds.
pub trait Element:
    Copy + Ord + Eq + fmt::Debug + fmt::Display + SampleUniform + TryFrom<i128> + private::Sealed + 'static
{
    /// Name of the element type, for diagnostics.
    const NAME: &'static str;
    /// Additive identity; the default lower generation bound.
    const ZERO: Self;
    /// Default upper generation bound: `1000`, clamped to the type maximum
    /// for types too narrow to represent it.
    const DEFAULT_UPPER: Self;
}

macro_rules! impl_element {
    ($($ty:ty => $upper:expr),+ $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Element for $ty {
                const NAME: &'static str = stringify!($ty);
                const ZERO: Self = 0;
                const DEFAULT_UPPER: Self = $upper;
            }
        )+
    };
}

impl_element! {
    i8 => i8::MAX,
    i16 => 1000,
    i32 => 1000,
    i64 => 1000,
    i128 => 1000,
    isize => 1000,
    u8 => u8::MAX,
    u16 => 1000,
    u32 => 1000,
    u64 => 1000,
    u128 => 1000,
    usize => 1000,
}

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn default_upper_is_clamped_for_narrow_types() {
        assert_eq!(<i8 as Element>::DEFAULT_UPPER, 127);
        assert_eq!(<u8 as Element>::DEFAULT_UPPER, 255);
        assert_eq!(<i64 as Element>::DEFAULT_UPPER, 1000);
        assert_eq!(<u16 as Element>::DEFAULT_UPPER, 1000);
    }

    #[test]
    fn names_match_the_primitive_types() {
        assert_eq!(<i32 as Element>::NAME, "i32");
        assert_eq!(<u64 as Element>::NAME, "u64");
    }
}
