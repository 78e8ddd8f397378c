//! # Petri net reachability
//!
//! Computes the markings that are reachable from an initial marking of a
//! place/transition net. Two algorithms are provided:
//!
//!   - an explicit one, [MarkingGraph], that builds the graph of all reachable
//!     markings one firing at a time and gives up as soon as it detects that
//!     the net might be unbounded;
//!   - a symbolic one, [PetriNet::compute_state_space], that stores sets of
//!     markings as map family decision diagrams (see the `mfdd` crate) and
//!     fires a transition for the whole set at once using the morphisms of
//!     the [morphism] module, until a fixpoint is reached.
//!
//! Places and transitions are user defined types, typically field-less
//! enumerations, that implement [Place] and [Transition]. The order in which
//! [Finite::all] lists the places is the order of the variables in the
//! decision diagrams and must agree with their [Ord] implementation.

mod domain;
mod encoding;
mod graph;
mod marking;
mod net;
mod state_space;
mod token;

pub mod morphism;

#[cfg(test)]
mod test_utility;


pub use domain::*;
pub use encoding::*;
pub use graph::*;
pub use marking::*;
pub use net::*;
pub use token::*;
