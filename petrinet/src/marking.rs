use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

use thiserror::Error;

use crate::{Place, Token};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkingError
{
    #[error("place {0} has no value")]
    MissingPlace(String),
    #[error("place {0} is given more than once")]
    DuplicatePlace(String),
}

/// A marking of a Petri net, i.e., a total mapping that associates every
/// place with the tokens it contains.
///
/// An algebra is defined pointwise over markings: `+`, `-` and [Marking::zero]
/// act place by place. The comparison operators denote the pointwise partial
/// order: `m < n` holds iff every place of `m` holds at most as many tokens as
/// in `n` and at least one holds strictly fewer. This is not a total order,
/// [PartialOrd::partial_cmp] returns `None` for incomparable markings.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Marking<P: Place>
{
    values: Box<[P::Content]>, // Indexed by the position of the place in Finite::all.
}

impl<P: Place> Marking<P>
{
    /// Creates a marking from a function mapping places to the tokens they
    /// contain.
    pub fn new<F>(mut mapping: F) -> Self
        where F: FnMut(P) -> P::Content
    {
        Self {
            values: P::all().iter().map(|place| mapping(*place)).collect(),
        }
    }

    /// Creates a marking from pairs that give every place exactly once.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, MarkingError>
        where I: IntoIterator<Item = (P, P::Content)>
    {
        let mut values: Vec<Option<P::Content>> = vec![None; P::all().len()];
        for (place, tokens) in pairs
        {
            let slot = &mut values[place.index()];
            if slot.is_some()
            {
                return Err(MarkingError::DuplicatePlace(format!("{:?}", place)));
            }
            *slot = Some(tokens);
        }

        let mut result = Vec::with_capacity(values.len());
        for (place, value) in P::all().iter().zip(values)
        {
            match value {
                Some(tokens) => result.push(tokens),
                None => return Err(MarkingError::MissingPlace(format!("{:?}", place))),
            }
        }

        Ok(Self { values: result.into_boxed_slice() })
    }

    /// Creates a marking from pairs, associating zero with the places that
    /// are not given. A place that occurs more than once gets its last value.
    pub fn partial<I>(pairs: I) -> Self
        where I: IntoIterator<Item = (P, P::Content)>
    {
        let mut result = Self::zero();
        for (place, tokens) in pairs
        {
            result.values[place.index()] = tokens;
        }
        result
    }

    /// A marking in which all places are associated with zero.
    pub fn zero() -> Self
    {
        Self::new(|_| P::Content::zero())
    }

    /// Returns the tokens of every place, in canonical place order.
    pub fn iter(&self) -> impl Iterator<Item = (P, &P::Content)> + '_
    {
        P::all().iter().copied().zip(self.values.iter())
    }

    /// Returns the marking with the given place set to the given tokens.
    pub fn with(mut self, place: P, tokens: P::Content) -> Self
    {
        self.values[place.index()] = tokens;
        self
    }

    pub(crate) fn values(&self) -> &[P::Content]
    {
        &self.values
    }

    pub(crate) fn from_values(values: Vec<P::Content>) -> Self
    {
        debug_assert_eq!(values.len(), P::all().len());
        Self { values: values.into_boxed_slice() }
    }
}

impl<P: Place> Index<P> for Marking<P>
{
    type Output = P::Content;

    fn index(&self, place: P) -> &Self::Output
    {
        &self.values[place.index()]
    }
}

impl<P: Place> PartialOrd for Marking<P>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    {
        let mut smaller = false;
        let mut greater = false;
        for (a, b) in self.values.iter().zip(other.values.iter())
        {
            match a.cmp(b) {
                Ordering::Less => smaller = true,
                Ordering::Greater => greater = true,
                Ordering::Equal => {}
            }
        }

        match (smaller, greater) {
            (false, false) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (true, true) => None,
        }
    }
}

impl<P: Place> AddAssign<&Marking<P>> for Marking<P>
{
    fn add_assign(&mut self, rhs: &Marking<P>)
    {
        for (a, b) in self.values.iter_mut().zip(rhs.values.iter())
        {
            *a += b.clone();
        }
    }
}

impl<P: Place> SubAssign<&Marking<P>> for Marking<P>
{
    fn sub_assign(&mut self, rhs: &Marking<P>)
    {
        for (a, b) in self.values.iter_mut().zip(rhs.values.iter())
        {
            *a -= b.clone();
        }
    }
}

impl<P: Place> AddAssign for Marking<P>
{
    fn add_assign(&mut self, rhs: Marking<P>)
    {
        *self += &rhs;
    }
}

impl<P: Place> SubAssign for Marking<P>
{
    fn sub_assign(&mut self, rhs: Marking<P>)
    {
        *self -= &rhs;
    }
}

impl<P: Place> Add<&Marking<P>> for &Marking<P>
{
    type Output = Marking<P>;

    fn add(self, rhs: &Marking<P>) -> Marking<P>
    {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl<P: Place> Sub<&Marking<P>> for &Marking<P>
{
    type Output = Marking<P>;

    fn sub(self, rhs: &Marking<P>) -> Marking<P>
    {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

impl<P: Place> Add for Marking<P>
{
    type Output = Marking<P>;

    fn add(mut self, rhs: Marking<P>) -> Marking<P>
    {
        self += &rhs;
        self
    }
}

impl<P: Place> Sub for Marking<P>
{
    type Output = Marking<P>;

    fn sub(mut self, rhs: Marking<P>) -> Marking<P>
    {
        self -= &rhs;
        self
    }
}

impl<P: Place> fmt::Display for Marking<P>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "[")?;
        for (position, (place, tokens)) in self.iter().enumerate()
        {
            if position > 0
            {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {}", place, tokens)?;
        }
        write!(f, "]")
    }
}

impl<P: Place> fmt::Debug for Marking<P>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(self, f)
    }
}
