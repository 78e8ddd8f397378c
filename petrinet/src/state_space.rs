use log::{debug, info};
use mfdd::{len, union, Mfdd, Storage};

use crate::morphism::{FilterMarking, PostMarking, PreMarking};
use crate::{PetriNet, Place, Transition};

impl<P: Place, T: Transition> PetriNet<P, T>
{
    /// The morphism that removes the preconditions of the transition from every marking that enables it.
    pub fn pre_morphism(&self, transition: T) -> PreMarking<P>
    {
        PreMarking::new(self.pre(transition).iter().cloned())
    }

    /// The morphism that adds the postconditions of the transition to every marking.
    pub fn post_morphism(&self, transition: T) -> PostMarking<P>
    {
        PostMarking::new(self.post(transition).iter().cloned())
    }

    /// The morphism that keeps the markings that enable the transition.
    pub fn filter_morphism(&self, transition: T) -> FilterMarking<P>
    {
        FilterMarking::new(self.pre(transition).iter().cloned())
    }

    /// Returns the markings of the MFDD that enable the transition.
    pub fn enabled_symbolic(&self, storage: &mut Storage<P::Content>, mfdd: Mfdd, transition: T) -> Mfdd
    {
        self.filter_morphism(transition).apply(storage, mfdd)
    }

    /// Fires the transition from every marking of the MFDD at once, the
    /// result contains the given markings and all their successors.
    pub fn fire_symbolic(&self, storage: &mut Storage<P::Content>, mfdd: Mfdd, transition: T) -> Mfdd
    {
        let consumed = self.pre_morphism(transition).apply(storage, mfdd);
        let fired = self.post_morphism(transition).apply(storage, consumed);
        union(storage, mfdd, fired)
    }

    /// Computes the MFDD of all markings that are reachable from any marking
    /// of the initial MFDD.
    ///
    /// Every pass fires all transitions in canonical order and the computation
    /// stops when a pass no longer changes the result. Unlike
    /// [crate::MarkingGraph::build] there is no check for unboundedness, so
    /// this does not terminate for a net with infinitely many reachable
    /// markings.
    pub fn compute_state_space(&self, storage: &mut Storage<P::Content>, initial: Mfdd) -> Mfdd
    {
        let mut result = initial;
        let mut pass = 0usize;

        loop
        {
            let previous = result;
            for transition in T::all()
            {
                result = self.fire_symbolic(storage, result, *transition);
            }

            pass += 1;
            debug!("pass {}: {} nodes in storage", pass, storage.node_count());

            if result == previous
            {
                break;
            }
        }

        info!("the state space has {} markings after {} passes", len(storage, result), pass);
        result
    }
}
