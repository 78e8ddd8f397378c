use crate::{Arc, Finite, Marking, PetriNet, Place, Transition};

use rand::Rng;

// These definitions are only relevant for testing purposes.

macro_rules! finite {
    ($name:ident { $($variant:ident),* $(,)? }) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub enum $name
        {
            $($variant),*
        }

        impl Finite for $name
        {
            fn all() -> &'static [Self]
            {
                &[$($name::$variant),*]
            }

            fn index(self) -> usize
            {
                self as usize
            }
        }
    };
}

finite!(P { P1, P2, P3, P4, P5 });
finite!(T { T1, T2, T3 });

impl Place for P
{
    type Content = i64;
}

impl Transition for T {}

/// The net with three transitions over five places that is used throughout the tests.
pub fn scenario_net() -> PetriNet<P, T>
{
    PetriNet::new([
        (T::T1, vec![Arc::pre(P::P1), Arc::pre(P::P3), Arc::post(P::P2), Arc::post(P::P4)]),
        (T::T2, vec![Arc::pre_weighted(P::P1, 2), Arc::post(P::P2)]),
        (T::T3, vec![Arc::pre(P::P1), Arc::pre(P::P2), Arc::pre(P::P4), Arc::post(P::P2), Arc::post(P::P3)]),
    ]).unwrap()
}

pub fn scenario_initial_marking() -> Marking<P>
{
    Marking::from_pairs([(P::P1, 2), (P::P2, 1), (P::P3, 1), (P::P4, 0), (P::P5, 1)]).unwrap()
}

/// The markings that are reachable from [scenario_initial_marking].
pub fn scenario_reachable_markings() -> Vec<Marking<P>>
{
    vec![
        scenario_initial_marking(),
        Marking::from_pairs([(P::P1, 1), (P::P2, 2), (P::P3, 0), (P::P4, 1), (P::P5, 1)]).unwrap(),
        Marking::from_pairs([(P::P1, 0), (P::P2, 2), (P::P3, 1), (P::P4, 0), (P::P5, 1)]).unwrap(),
    ]
}

finite!(Pair { P0, P1 });
finite!(Step { T0, T1 });

impl Place for Pair
{
    type Content = i64;
}

impl Transition for Step {}

/// A net in which T0 keeps its token in P0 and pumps tokens into P1.
pub fn pump_net() -> PetriNet<Pair, Step>
{
    PetriNet::new([
        (Step::T0, vec![Arc::pre(Pair::P0), Arc::post(Pair::P0), Arc::post(Pair::P1)]),
        (Step::T1, vec![Arc::pre(Pair::P1), Arc::post(Pair::P0)]),
    ]).unwrap()
}

/// A net in which a single token moves from P0 to P1 and back.
pub fn cycle_net() -> PetriNet<Pair, Step>
{
    PetriNet::new([
        (Step::T0, vec![Arc::pre(Pair::P0), Arc::post(Pair::P1)]),
        (Step::T1, vec![Arc::pre(Pair::P1), Arc::post(Pair::P0)]),
    ]).unwrap()
}

// Places that are listed in an order that disagrees with their Ord implementation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Unordered
{
    A,
    B,
}

impl Finite for Unordered
{
    fn all() -> &'static [Self]
    {
        &[Unordered::B, Unordered::A]
    }
}

impl Place for Unordered
{
    type Content = i64;
}

// Places that are listed in order but whose index disagrees with their position.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Swapped
{
    A,
    B,
}

impl Finite for Swapped
{
    fn all() -> &'static [Self]
    {
        &[Swapped::A, Swapped::B]
    }

    fn index(self) -> usize
    {
        match self {
            Swapped::A => 1,
            Swapped::B => 0,
        }
    }
}

impl Place for Swapped
{
    type Content = i64;
}

finite!(Smoker {
    // The state of the table.
    Tobacco,
    TobaccoEmpty,
    Paper,
    PaperEmpty,
    Match,
    MatchEmpty,
    FreeSpace,
    // The smoker who's got rolling paper.
    PaperWaitsForBoth,
    PaperWaitsForMatch,
    PaperWaitsForTobacco,
    // The smoker who's got tobacco.
    TobaccoWaitsForBoth,
    TobaccoWaitsForMatch,
    TobaccoWaitsForPaper,
    // The smoker who's got matches.
    MatchesWaitsForBoth,
    MatchesWaitsForPaper,
    MatchesWaitsForTobacco,
});

finite!(SmokerAction {
    PutTobacco,
    PutPaper,
    PutMatch,
    PaperTakesTobaccoFirst,
    PaperTakesTobaccoSecond,
    PaperTakesMatchFirst,
    PaperTakesMatchSecond,
    TobaccoTakesMatchFirst,
    TobaccoTakesMatchSecond,
    TobaccoTakesPaperFirst,
    TobaccoTakesPaperSecond,
    MatchesTakesTobaccoFirst,
    MatchesTakesTobaccoSecond,
    MatchesTakesPaperFirst,
    MatchesTakesPaperSecond,
});

impl Place for Smoker
{
    type Content = i64;
}

impl Transition for SmokerAction {}

/// The smokers' problem: a referee puts at most two ingredients on the table
/// and three smokers, each owning one ingredient, pick up the other two.
pub fn smokers_net() -> PetriNet<Smoker, SmokerAction>
{
    use Smoker::*;
    use SmokerAction::*;

    // A smoker takes an ingredient from the table and moves from one waiting state to the next.
    let take = |ingredient: Smoker, empty: Smoker, from: Smoker, to: Smoker| {
        vec![Arc::pre(ingredient), Arc::pre(from), Arc::post(FreeSpace), Arc::post(empty), Arc::post(to)]
    };

    PetriNet::new([
        (PutTobacco, vec![Arc::pre(FreeSpace), Arc::pre(TobaccoEmpty), Arc::post(Tobacco)]),
        (PutPaper, vec![Arc::pre(FreeSpace), Arc::pre(PaperEmpty), Arc::post(Paper)]),
        (PutMatch, vec![Arc::pre(FreeSpace), Arc::pre(MatchEmpty), Arc::post(Match)]),
        (PaperTakesTobaccoFirst, take(Tobacco, TobaccoEmpty, PaperWaitsForBoth, PaperWaitsForMatch)),
        (PaperTakesMatchFirst, take(Match, MatchEmpty, PaperWaitsForBoth, PaperWaitsForTobacco)),
        (PaperTakesTobaccoSecond, take(Tobacco, TobaccoEmpty, PaperWaitsForTobacco, PaperWaitsForBoth)),
        (PaperTakesMatchSecond, take(Match, MatchEmpty, PaperWaitsForMatch, PaperWaitsForBoth)),
        (TobaccoTakesMatchFirst, take(Match, MatchEmpty, TobaccoWaitsForBoth, TobaccoWaitsForPaper)),
        (TobaccoTakesPaperFirst, take(Paper, PaperEmpty, TobaccoWaitsForBoth, TobaccoWaitsForMatch)),
        (TobaccoTakesMatchSecond, take(Match, MatchEmpty, TobaccoWaitsForMatch, TobaccoWaitsForBoth)),
        (TobaccoTakesPaperSecond, take(Paper, PaperEmpty, TobaccoWaitsForPaper, TobaccoWaitsForBoth)),
        (MatchesTakesTobaccoFirst, take(Tobacco, TobaccoEmpty, MatchesWaitsForBoth, MatchesWaitsForPaper)),
        (MatchesTakesPaperFirst, take(Paper, PaperEmpty, MatchesWaitsForBoth, MatchesWaitsForTobacco)),
        (MatchesTakesTobaccoSecond, take(Tobacco, TobaccoEmpty, MatchesWaitsForTobacco, MatchesWaitsForBoth)),
        (MatchesTakesPaperSecond, take(Paper, PaperEmpty, MatchesWaitsForPaper, MatchesWaitsForBoth)),
    ]).unwrap()
}

pub fn smokers_initial_marking() -> Marking<Smoker>
{
    Marking::partial([
        (Smoker::FreeSpace, 2),
        (Smoker::TobaccoEmpty, 1),
        (Smoker::MatchEmpty, 1),
        (Smoker::PaperEmpty, 1),
        (Smoker::PaperWaitsForBoth, 1),
        (Smoker::TobaccoWaitsForBoth, 1),
        (Smoker::MatchesWaitsForBoth, 1),
    ])
}

/// Returns a marking with random tokens (from 0..=max_value) in every place.
pub fn random_marking<Q: Place<Content = i64>>(max_value: i64) -> Marking<Q>
{
    let mut rng = rand::thread_rng();
    Marking::new(|_| rng.gen_range(0..=max_value))
}

/// Initializes the logger once, the level is taken from RUST_LOG.
pub fn init_logger()
{
    let _ = env_logger::builder().is_test(true).try_init();
}
