use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// The content of a place, usually a number of tokens.
///
/// A token type can be mapped onto a Peano-like representation: a constant
/// [Token::zero], a [Token::successor] and a [Token::predecessor] function.
/// Unlike Peano numbers, zero is not required to be the lowest value, as the
/// subtraction of markings is not clamped.
///
/// Addition and subtraction must agree with the Peano view, i.e.,
/// `a + successor(zero) == successor(a)` and `a - successor(zero) ==
/// predecessor(a)`, and the order must be compatible with addition.
pub trait Token:
    Clone
    + Ord
    + Hash
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
    /// The zero value.
    fn zero() -> Self;

    /// The successor of an element.
    fn successor(&self) -> Self;

    /// The predecessor of an element.
    fn predecessor(&self) -> Self;

    /// The successor of zero, which is the default weight of an arc.
    fn one() -> Self
    {
        Self::zero().successor()
    }

    fn is_zero(&self) -> bool
    {
        *self == Self::zero()
    }
}

macro_rules! impl_token {
    ($($ty:ty),*) => {
        $(
            impl Token for $ty
            {
                fn zero() -> Self
                {
                    0
                }

                fn successor(&self) -> Self
                {
                    self + 1
                }

                fn predecessor(&self) -> Self
                {
                    self - 1
                }
            }
        )*
    };
}

impl_token!(i8, i16, i32, i64, i128, isize);
