use std::collections::BTreeMap;

use log::trace;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{Finite, Marking, Place, Token, Transition};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetError
{
    #[error("places {previous} and {next} are listed in an order that disagrees with Ord")]
    UnorderedPlaces { previous: String, next: String },
    #[error("{value} is listed at position {position} by Finite::all but its index is {index}")]
    InconsistentIndex { value: String, position: usize, index: usize },
    #[error("transition {0} is listed more than once by Finite::all")]
    DuplicateTransitionDomain(String),
    #[error("transition {0} is declared more than once")]
    DuplicateTransition(String),
}

/// A weighted arc between a place and a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arc<P: Place>
{
    /// The transition consumes the given number of tokens from the place.
    Pre(P, P::Content),
    /// The transition produces the given number of tokens in the place.
    Post(P, P::Content),
}

impl<P: Place> Arc<P>
{
    /// An arc from the place to the transition with weight one.
    pub fn pre(place: P) -> Self
    {
        Arc::Pre(place, P::Content::one())
    }

    pub fn pre_weighted(place: P, weight: P::Content) -> Self
    {
        Arc::Pre(place, weight)
    }

    /// An arc from the transition to the place with weight one.
    pub fn post(place: P) -> Self
    {
        Arc::Post(place, P::Content::one())
    }

    pub fn post_weighted(place: P, weight: P::Content) -> Self
    {
        Arc::Post(place, weight)
    }
}

/// The outcome of firing a transition from a single marking.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Firing<P: Place>
{
    /// The transition was enabled and produced this marking.
    Fired(Marking<P>),
    /// The transition is not enabled, so there is no successor.
    Disabled,
}

impl<P: Place> Firing<P>
{
    pub fn is_fired(&self) -> bool
    {
        matches!(self, Firing::Fired(_))
    }

    pub fn marking(&self) -> Option<&Marking<P>>
    {
        match self {
            Firing::Fired(marking) => Some(marking),
            Firing::Disabled => None,
        }
    }

    pub fn into_marking(self) -> Option<Marking<P>>
    {
        match self {
            Firing::Fired(marking) => Some(marking),
            Firing::Disabled => None,
        }
    }
}

// The arcs of one transition.
#[derive(Debug, Clone)]
struct TransitionArcs<P: Place, T>
{
    transition: T,
    pre: Vec<(P, P::Content)>, // Sorted by place, one entry per place.
    post: Vec<(P, P::Content)>, // Sorted by place, one entry per place.
    consumed: Marking<P>,
    produced: Marking<P>,
}

impl<P: Place, T: Transition> TransitionArcs<P, T>
{
    fn new(transition: T, arcs: Vec<Arc<P>>) -> Self
    {
        // Weights of repeated arcs on the same place are summed.
        let mut pre: BTreeMap<P, P::Content> = BTreeMap::new();
        let mut post: BTreeMap<P, P::Content> = BTreeMap::new();
        for arc in arcs
        {
            let (weights, place, weight) = match arc {
                Arc::Pre(place, weight) => (&mut pre, place, weight),
                Arc::Post(place, weight) => (&mut post, place, weight),
            };

            weights.entry(place)
                .and_modify(|total| *total += weight.clone())
                .or_insert(weight);
        }

        let pre: Vec<(P, P::Content)> = pre.into_iter().collect();
        let post: Vec<(P, P::Content)> = post.into_iter().collect();
        Self {
            transition,
            consumed: Marking::partial(pre.iter().cloned()),
            produced: Marking::partial(post.iter().cloned()),
            pre,
            post,
        }
    }
}

/// A place/transition net with weighted arcs.
///
/// The net stores for every declared transition its precondition and
/// postcondition arcs, sorted by place order and aggregated per place.
/// Transitions of the domain that are not declared have no arcs.
#[derive(Debug, Clone)]
pub struct PetriNet<P: Place, T: Transition>
{
    transitions: Vec<TransitionArcs<P, T>>,
}

impl<P: Place, T: Transition> PetriNet<P, T>
{
    /// Creates a net from the arcs of every transition.
    ///
    /// This is the only place where the order of the place domain is checked:
    /// [crate::Finite::all] must list the places in strictly increasing order.
    pub fn new<I>(transitions: I) -> Result<Self, NetError>
        where I: IntoIterator<Item = (T, Vec<Arc<P>>)>
    {
        check_domains::<P, T>()?;

        let mut declared: FxHashSet<T> = FxHashSet::default();
        let mut result = Vec::new();
        for (transition, arcs) in transitions
        {
            if !declared.insert(transition)
            {
                return Err(NetError::DuplicateTransition(format!("{:?}", transition)));
            }

            let arcs = TransitionArcs::new(transition, arcs);
            trace!("transition {:?}: pre {:?}, post {:?}", transition, arcs.pre, arcs.post);
            result.push(arcs);
        }

        Ok(Self { transitions: result })
    }

    /// Creates a net from a flat list of arcs, grouped by transition in
    /// order of first appearance.
    pub fn from_arcs<I>(arcs: I) -> Result<Self, NetError>
        where I: IntoIterator<Item = (T, Arc<P>)>
    {
        let mut grouped: Vec<(T, Vec<Arc<P>>)> = Vec::new();
        for (transition, arc) in arcs
        {
            match grouped.iter_mut().find(|(t, _)| *t == transition) {
                Some((_, group)) => group.push(arc),
                None => grouped.push((transition, vec![arc])),
            }
        }

        Self::new(grouped)
    }

    /// All transitions of the net in canonical order.
    pub fn transitions(&self) -> &'static [T]
    {
        T::all()
    }

    /// The precondition arcs of the given transition, sorted by place.
    pub fn pre(&self, transition: T) -> &[(P, P::Content)]
    {
        match self.arcs(transition) {
            Some(arcs) => &arcs.pre,
            None => &[],
        }
    }

    /// The postcondition arcs of the given transition, sorted by place.
    pub fn post(&self, transition: T) -> &[(P, P::Content)]
    {
        match self.arcs(transition) {
            Some(arcs) => &arcs.post,
            None => &[],
        }
    }

    /// Returns true iff every precondition of the transition is met by the marking.
    pub fn is_enabled(&self, transition: T, marking: &Marking<P>) -> bool
    {
        self.pre(transition)
            .iter()
            .all(|(place, weight)| marking[*place] >= *weight)
    }

    /// Returns the transitions that are enabled at the given marking, in canonical order.
    pub fn enabled(&self, marking: &Marking<P>) -> Vec<T>
    {
        T::all()
            .iter()
            .copied()
            .filter(|transition| self.is_enabled(*transition, marking))
            .collect()
    }

    /// Fires the transition from the given marking.
    ///
    /// The successor is `from - pre + post`; a place that occurs in both the
    /// preconditions and the postconditions is adjusted by both.
    pub fn fire(&self, transition: T, from: &Marking<P>) -> Firing<P>
    {
        if !self.is_enabled(transition, from)
        {
            return Firing::Disabled;
        }

        match self.arcs(transition) {
            Some(arcs) => {
                let mut result = from - &arcs.consumed;
                result += &arcs.produced;
                Firing::Fired(result)
            },
            None => Firing::Fired(from.clone()),
        }
    }

    // Finds the arcs of a transition by a linear scan.
    fn arcs(&self, transition: T) -> Option<&TransitionArcs<P, T>>
    {
        self.transitions.iter().find(|arcs| arcs.transition == transition)
    }
}

// Checks that the places are listed in increasing order, that the transitions are distinct and that both agree with their index.
fn check_domains<P: Place, T: Transition>() -> Result<(), NetError>
{
    check_indices::<P>()?;

    for pair in P::all().windows(2)
    {
        if pair[0] >= pair[1]
        {
            return Err(NetError::UnorderedPlaces {
                previous: format!("{:?}", pair[0]),
                next: format!("{:?}", pair[1]),
            });
        }
    }

    let mut seen: FxHashSet<T> = FxHashSet::default();
    for transition in T::all()
    {
        if !seen.insert(*transition)
        {
            return Err(NetError::DuplicateTransitionDomain(format!("{:?}", transition)));
        }
    }

    check_indices::<T>()
}

// The index of a value determines where markings store it, so it must be its position in Finite::all.
fn check_indices<F: Finite>() -> Result<(), NetError>
{
    for (position, value) in F::all().iter().enumerate()
    {
        let index = value.index();
        if index != position
        {
            return Err(NetError::InconsistentIndex {
                value: format!("{:?}", value),
                position,
                index,
            });
        }
    }

    Ok(())
}
