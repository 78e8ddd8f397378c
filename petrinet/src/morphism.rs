//! Structural rewritings of the markings stored in an MFDD.
//!
//! A morphism is given by a list of (place, value) entries sorted by place.
//! Applying it rewrites the take edges of every node whose key is the
//! variable of one of these places, the labels of all other nodes are kept.
//! Three kinds are provided:
//!
//!   - [FilterMarking] keeps the markings in which every listed place holds at
//!     least the given value;
//!   - [PreMarking] does the same and then subtracts the value;
//!   - [PostMarking] adds the value to every marking.
//!
//! Firing a transition for a whole set of markings is then `post(pre(dd))`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use mfdd::{Data, Mfdd, Storage};
use rustc_hash::FxHashMap;

use crate::{Place, Token};

/// Rewrites the label of a take edge given the value of the matching entry,
/// `None` removes the edge.
pub trait Rewrite
{
    fn rewrite<V: Token>(label: &V, value: &V) -> Option<V>;
}

/// Keeps labels that are at least the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Filter;

/// Keeps labels that are at least the value and subtracts the value from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subtract;

/// Adds the value to every label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Add;

impl Rewrite for Filter
{
    fn rewrite<V: Token>(label: &V, value: &V) -> Option<V>
    {
        if label >= value {
            Some(label.clone())
        } else {
            None
        }
    }
}

impl Rewrite for Subtract
{
    fn rewrite<V: Token>(label: &V, value: &V) -> Option<V>
    {
        if label >= value {
            Some(label.clone() - value.clone())
        } else {
            None
        }
    }
}

impl Rewrite for Add
{
    fn rewrite<V: Token>(label: &V, value: &V) -> Option<V>
    {
        Some(label.clone() + value.clone())
    }
}

pub type FilterMarking<P> = MarkingMorphism<P, Filter>;
pub type PreMarking<P> = MarkingMorphism<P, Subtract>;
pub type PostMarking<P> = MarkingMorphism<P, Add>;

/// A morphism over the markings of an MFDD, see the [module](self) documentation.
///
/// Two morphisms are equal iff they are of the same kind and have the same
/// entries.
pub struct MarkingMorphism<P: Place, R>
{
    entries: Vec<(P, P::Content)>, // Sorted by place.
    rewrite: PhantomData<fn() -> R>,
}

impl<P: Place, R: Rewrite> MarkingMorphism<P, R>
{
    /// Creates a morphism from entries that are sorted by place, with every
    /// place occurring at most once.
    pub fn new<I>(entries: I) -> Self
        where I: IntoIterator<Item = (P, P::Content)>
    {
        let entries: Vec<(P, P::Content)> = entries.into_iter().collect();
        debug_assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0), "entries must be strictly sorted by place");

        Self {
            entries,
            rewrite: PhantomData,
        }
    }

    pub fn entries(&self) -> &[(P, P::Content)]
    {
        &self.entries
    }

    /// The first place whose variable is rewritten, nodes above it only have
    /// their children rewritten. Returns `None` for the identity.
    pub fn lowest_relevant_place(&self) -> Option<P>
    {
        self.entries.first().map(|(place, _)| *place)
    }

    /// Applies the morphism to the given MFDD.
    ///
    /// Results are memoized for the duration of this call only. Nodes that are
    /// created here have an empty skip, so the input must only contain total
    /// markings.
    pub fn apply(&self, storage: &mut Storage<P::Content>, mfdd: Mfdd) -> Mfdd
    {
        if self.entries.is_empty()
        {
            return mfdd;
        }

        let mut cache = FxHashMap::default();
        self.apply_cached(storage, &mut cache, mfdd)
    }

    fn apply_cached(&self, storage: &mut Storage<P::Content>, cache: &mut FxHashMap<Mfdd, Mfdd>, mfdd: Mfdd) -> Mfdd
    {
        if storage.is_terminal(mfdd)
        {
            return mfdd;
        }

        if let Some(result) = cache.get(&mfdd)
        {
            return *result;
        }

        let Data(key, take, _) = storage.get(mfdd);
        let take = take.to_vec();
        let zero = storage.zero();

        let result = match self.entries.iter().position(|(place, _)| place.index() == key) {
            Some(position) => {
                let value = &self.entries[position].1;
                let rewritten: Vec<(P::Content, Mfdd)> = take
                    .into_iter()
                    .filter_map(|(label, child)| R::rewrite(&label, value).map(|label| (label, child)))
                    .collect();

                if position + 1 == self.entries.len()
                {
                    // The last entry has been applied, so the children are kept.
                    storage.node(key, rewritten, zero)
                }
                else
                {
                    let mut children = Vec::with_capacity(rewritten.len());
                    for (label, child) in rewritten
                    {
                        children.push((label, self.apply_cached(storage, cache, child)));
                    }
                    storage.node(key, children, zero)
                }
            },
            None => {
                let mut children = Vec::with_capacity(take.len());
                for (label, child) in take
                {
                    children.push((label, self.apply_cached(storage, cache, child)));
                }
                storage.node(key, children, zero)
            }
        };

        cache.insert(mfdd, result);
        result
    }
}

impl<P: Place, R> Clone for MarkingMorphism<P, R>
{
    fn clone(&self) -> Self
    {
        Self {
            entries: self.entries.clone(),
            rewrite: PhantomData,
        }
    }
}

impl<P: Place, R> PartialEq for MarkingMorphism<P, R>
{
    fn eq(&self, other: &Self) -> bool
    {
        self.entries == other.entries
    }
}

impl<P: Place, R> Eq for MarkingMorphism<P, R> {}

impl<P: Place, R> Hash for MarkingMorphism<P, R>
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        self.entries.hash(state);
    }
}

impl<P: Place, R> fmt::Debug for MarkingMorphism<P, R>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("MarkingMorphism")
            .field("kind", &std::any::type_name::<R>())
            .field("entries", &self.entries)
            .finish()
    }
}
