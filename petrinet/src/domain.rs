use std::fmt::Debug;
use std::hash::Hash;

use crate::Token;

/// A type with finitely many values that can be enumerated in a stable order.
pub trait Finite: Copy + Eq + Hash + Debug + 'static
{
    /// All values of the type, each exactly once, in canonical order.
    fn all() -> &'static [Self];

    /// The position of this value in [Finite::all]. An implementation that
    /// overrides this must agree with that position, which is checked when a
    /// [crate::PetriNet] is created.
    ///
    /// # Panics
    ///
    /// When the value is not listed by [Finite::all].
    fn index(self) -> usize
    {
        match Self::all().iter().position(|value| *value == self) {
            Some(index) => index,
            None => panic!("{:?} is not listed by Finite::all", self),
        }
    }
}

/// The places of a net.
///
/// The canonical order of [Finite::all] must be strictly increasing with
/// respect to [Ord], this is checked when a [crate::PetriNet] is created.
/// The position of a place in this order is its variable in the decision
/// diagrams that encode sets of markings.
pub trait Place: Finite + Ord
{
    /// The type of the tokens stored in a place.
    type Content: Token;
}

/// The transitions of a net.
pub trait Transition: Finite {}
