//! # MFDD
//!
//! A library to create and manipulate so called map family decision diagrams,
//! abbreviated as MFDDs. Map family decision diagrams are data structures that
//! can efficiently represent sets of records, where a record is a finite map
//! from keys (natural numbers) to values of some ordered type.

//! # Representation
//!
//! An MFDD is inductively defined as follows. First of all, constants 'zero'
//! and 'one' are two distinct MFDDs. Given a key k, a table take of pairs
//! (value, MFDD) and an MFDD skip, then node(k, take, skip) is an MFDD. As
//! such, node(0, \[(5, one)\], node(1, \[(4, one)\], zero)) is an MFDD and in
//! general we obtain a directed acyclic graph in which the keys strictly
//! increase along every path.
//!
//! Given an MFDD n then \[n\] is inductively defined as:
//!   - \[zero\] = empty set
//!   - \[one\] = { {} }
//!   - \[node(k, take, skip)\] = { {k: v} ∪ r | (v, x) in take, r in \[x\] }
//!     union \[skip\]
//!
//! In words, the take table is followed by records that assign a value to k
//! and the skip MFDD is followed by records that do not mention k at all.
//!
//! # Maximal sharing
//!
//! All nodes live in a [Storage] that never contains two nodes with the same
//! key, take table and skip. Furthermore, take tables never point to 'zero'
//! and a node with an empty take table is never created (it is replaced by
//! its skip). As a consequence two MFDDs represent the same set iff their
//! handles are equal, which can be tested in constant time.

mod storage;
mod operations;
mod format;
mod iterators;

#[cfg(test)]
mod test_utility;


pub use storage::*;
pub use operations::*;
pub use format::*;
pub use iterators::*;
