use std::collections::VecDeque;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};
use static_assertions::{assert_eq_size, assert_impl_all};

use crate::{Firing, Marking, PetriNet, Place, Transition};

/// The handle of a node in a [MarkingGraph].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId
{
    pub fn index(&self) -> usize
    {
        self.0
    }
}

assert_impl_all!(NodeId: Copy, Send, Sync);
assert_eq_size!(NodeId, usize);

/// A node of a marking graph: one reachable marking and the transitions
/// that leave it.
#[derive(Debug, Clone)]
pub struct Node<P: Place, T: Transition>
{
    id: NodeId,
    marking: Marking<P>,
    successors: Vec<(T, NodeId)>, // In the order in which the transitions were fired.
}

impl<P: Place, T: Transition> Node<P, T>
{
    pub fn id(&self) -> NodeId
    {
        self.id
    }

    pub fn marking(&self) -> &Marking<P>
    {
        &self.marking
    }

    /// The node reached by firing the given transition, if it is enabled.
    pub fn successor(&self, transition: T) -> Option<NodeId>
    {
        self.successors
            .iter()
            .find(|(t, _)| *t == transition)
            .map(|(_, id)| *id)
    }

    pub fn successors(&self) -> &[(T, NodeId)]
    {
        &self.successors
    }
}

/// The graph of all markings that are reachable from an initial marking.
///
/// All nodes are owned by the graph and referred to by [NodeId]. No two nodes
/// hold the same marking, so every reachable marking is represented exactly
/// once and edges may point back to earlier nodes.
#[derive(Debug, Clone)]
pub struct MarkingGraph<P: Place, T: Transition>
{
    nodes: Vec<Node<P, T>>,
    index: FxHashMap<Marking<P>, NodeId>,
}

impl<P: Place, T: Transition> MarkingGraph<P, T>
{
    /// Computes the marking graph of the net from the given initial marking.
    ///
    /// Returns `None` when a newly found marking is strictly greater than any
    /// marking found before, which is taken as evidence that the net is
    /// unbounded. The comparison is made against all nodes, not only the
    /// ancestors of the new marking, so this test can also reject some
    /// bounded nets.
    pub fn build(net: &PetriNet<P, T>, initial: Marking<P>) -> Option<Self>
    {
        let mut graph = Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
        };

        // The root of the graph is the initial marking.
        let root = graph.insert(initial);
        let mut unprocessed = vec![root];

        while let Some(id) = unprocessed.pop()
        {
            for transition in T::all().iter().copied()
            {
                // Compute the current marking's successors for all fireable transitions.
                let next = match net.fire(transition, &graph.nodes[id.0].marking) {
                    Firing::Fired(marking) => marking,
                    Firing::Disabled => continue,
                };

                // Check if this particular successor has already been created.
                if let Some(successor) = graph.find(&next)
                {
                    graph.nodes[id.0].successors.push((transition, successor));
                    continue;
                }

                // Check that the model is bounded.
                if let Some(dominated) = graph.nodes.iter().find(|node| next > node.marking)
                {
                    debug!("marking {} reached by {:?} dominates {}, the net is unbounded", next, transition, dominated.marking);
                    return None;
                }

                // The successor hasn't been created yet, so add it to the list of unprocessed nodes.
                let successor = graph.insert(next);
                unprocessed.push(successor);
                graph.nodes[id.0].successors.push((transition, successor));
            }
        }

        info!("the marking graph has {} markings", graph.nodes.len());
        Some(graph)
    }

    // Creates a node for a marking that is not yet in the graph.
    fn insert(&mut self, marking: Marking<P>) -> NodeId
    {
        let id = NodeId(self.nodes.len());
        self.index.insert(marking.clone(), id);
        self.nodes.push(Node {
            id,
            marking,
            successors: Vec::new(),
        });

        if self.nodes.len() % 10000 == 0
        {
            debug!("{} markings found", self.nodes.len());
        }
        id
    }

    /// The node of the initial marking.
    pub fn root(&self) -> NodeId
    {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node<P, T>
    {
        &self.nodes[id.0]
    }

    /// All nodes in order of creation.
    pub fn nodes(&self) -> &[Node<P, T>]
    {
        &self.nodes
    }

    /// The number of nodes, i.e., the number of distinct reachable markings.
    pub fn len(&self) -> usize
    {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.nodes.is_empty()
    }

    pub fn successors(&self, id: NodeId) -> &[(T, NodeId)]
    {
        self.nodes[id.0].successors()
    }

    /// Returns the node that holds the given marking.
    pub fn find(&self, marking: &Marking<P>) -> Option<NodeId>
    {
        self.index.get(marking).copied()
    }

    pub fn contains(&self, marking: &Marking<P>) -> bool
    {
        self.index.contains_key(marking)
    }

    pub fn markings(&self) -> impl Iterator<Item = &Marking<P>> + '_
    {
        self.nodes.iter().map(|node| &node.marking)
    }

    /// Returns a breadth-first traversal from the root that yields every
    /// reachable node once. Every call starts a new traversal.
    pub fn iter(&self) -> Iter<'_, P, T>
    {
        let mut unprocessed = VecDeque::new();
        unprocessed.push_back(self.root());
        let mut seen = FxHashSet::default();
        seen.insert(self.root());

        Iter {
            graph: self,
            unprocessed,
            seen,
        }
    }

    /// The number of nodes visited by [MarkingGraph::iter].
    pub fn count(&self) -> usize
    {
        self.iter().count()
    }
}

impl<P: Place, T: Transition> PetriNet<P, T>
{
    /// Computes the marking graph from the given marking, see [MarkingGraph::build].
    pub fn marking_graph(&self, initial: Marking<P>) -> Option<MarkingGraph<P, T>>
    {
        MarkingGraph::build(self, initial)
    }
}

pub struct Iter<'a, P: Place, T: Transition>
{
    graph: &'a MarkingGraph<P, T>,
    unprocessed: VecDeque<NodeId>,
    seen: FxHashSet<NodeId>, // Nodes that have been yielded or are unprocessed.
}

impl<'a, P: Place, T: Transition> Iterator for Iter<'a, P, T>
{
    type Item = &'a Node<P, T>;

    fn next(&mut self) -> Option<Self::Item>
    {
        let id = self.unprocessed.pop_front()?;
        let node = self.graph.node(id);

        for (_, successor) in node.successors()
        {
            if self.seen.insert(*successor)
            {
                self.unprocessed.push_back(*successor);
            }
        }

        Some(node)
    }
}

impl<'a, P: Place, T: Transition> IntoIterator for &'a MarkingGraph<P, T>
{
    type Item = &'a Node<P, T>;
    type IntoIter = Iter<'a, P, T>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

#[cfg(test)]
mod tests
{
    use crate::test_utility::*;

    use super::*;

    #[test]
    fn scenario_graph()
    {
        init_logger();

        let net = scenario_net();
        let graph = net.marking_graph(scenario_initial_marking()).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.count(), 3);
        for marking in scenario_reachable_markings()
        {
            assert!(graph.contains(&marking));
        }

        let root = graph.node(graph.root());
        assert_eq!(root.marking(), &scenario_initial_marking());
        assert_eq!(root.successor(T::T3), None);
    }

    #[test]
    fn converging_paths_share_a_node()
    {
        let net = scenario_net();
        let graph = net.marking_graph(scenario_initial_marking()).unwrap();

        // t2 from the initial marking and t1 followed by t3 reach the same marking.
        let root = graph.node(graph.root());
        let via_t2 = root.successor(T::T2).unwrap();
        let via_t1 = root.successor(T::T1).unwrap();
        let via_t1_t3 = graph.node(via_t1).successor(T::T3).unwrap();

        assert_eq!(via_t2, via_t1_t3);
        assert_eq!(graph.nodes().iter().filter(|node| node.marking() == graph.node(via_t2).marking()).count(), 1);
    }

    #[test]
    fn markings_are_distinct()
    {
        let net = smokers_net();
        let graph = net.marking_graph(smokers_initial_marking()).unwrap();

        let distinct: FxHashSet<&Marking<Smoker>> = graph.markings().collect();
        assert_eq!(distinct.len(), graph.len());
        assert_eq!(graph.count(), graph.len());
    }

    #[test]
    fn iteration_is_restartable()
    {
        let net = cycle_net();
        let graph = net.marking_graph(Marking::partial([(Pair::P0, 1)])).unwrap();

        let first: Vec<NodeId> = graph.iter().map(|node| node.id()).collect();
        let second: Vec<NodeId> = (&graph).into_iter().map(|node| node.id()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);

        // The cycle leads back to the root.
        let other = graph.node(graph.root()).successor(Step::T0).unwrap();
        assert_eq!(graph.node(other).successor(Step::T1), Some(graph.root()));
    }

    #[test]
    fn unbounded_net_has_no_graph()
    {
        init_logger();

        let net = pump_net();
        assert!(net.marking_graph(Marking::partial([(Pair::P0, 1)])).is_none());
    }

    #[test]
    fn dead_marking_is_a_single_node()
    {
        let net = cycle_net();
        let graph = net.marking_graph(Marking::zero()).unwrap();

        assert_eq!(graph.len(), 1);
        assert!(!graph.is_empty());
        assert!(graph.successors(graph.root()).is_empty());
    }
}
