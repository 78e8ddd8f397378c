use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;

mod cache;
mod mfdd;

pub use self::cache::*;
pub use self::mfdd::Mfdd;

/// The values that label the take edges of a node.
pub trait Value: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Value for T {}

/// The key of both terminals. It is larger than any key of a node so that
/// comparisons treat terminals as the end of every path.
pub const TERMINAL_KEY: usize = usize::MAX;

// This is the MFDD node(key, take, skip)
#[derive(Clone, PartialEq, Eq, Hash)]
struct Node<V>
{
    key: usize,
    take: Box<[(V, Mfdd)]>,
    skip: Mfdd,
}

/// The content of a node: its key, its take table (sorted by value) and its
/// skip MFDD.
pub struct Data<'a, V>(pub usize, pub &'a [(V, Mfdd)], pub Mfdd);

// The storage that implements the maximal sharing behaviour. Meaning that identical nodes (same key, take and skip) have a unique index in the node table. Therefore Mfdds n and m are identical iff their indices match.
pub struct Storage<V>
{
    index: AHashMap<Node<V>, usize>,
    table: Vec<Node<V>>,
    cache: OperationCache,
}

impl<V: Value> Storage<V>
{
    pub fn new() -> Self
    {
        Self::with_capacity(0)
    }

    /// Creates a storage with room for the given number of nodes before the
    /// node table has to grow.
    pub fn with_capacity(capacity: usize) -> Self
    {
        let mut table = Vec::with_capacity(capacity + 2);

        // Add two nodes representing 'zero' and 'one' respectively; these cannot be created using node.
        for _ in 0..2
        {
            table.push(Node {
                key: TERMINAL_KEY,
                take: Box::new([]),
                skip: Mfdd::new(0),
            });
        }

        Self {
            index: AHashMap::with_capacity(capacity),
            table,
            cache: OperationCache::new(),
        }
    }

    /// Create a new node(key, take, skip) in canonical form.
    ///
    /// Entries of take that point to 'zero' are removed and the remaining
    /// entries are sorted by value. If no entries remain the result is skip
    /// itself, since such a node would represent exactly the set [skip].
    pub fn node<I>(&mut self, key: usize, take: I, skip: Mfdd) -> Mfdd
        where I: IntoIterator<Item = (V, Mfdd)>
    {
        let zero = self.zero();
        let mut take: Vec<(V, Mfdd)> = take.into_iter().filter(|(_, child)| *child != zero).collect();
        if take.is_empty()
        {
            return skip;
        }
        take.sort_by(|a, b| a.0.cmp(&b.0));

        // Check the validity of the take table and the skip node.
        assert_ne!(key, TERMINAL_KEY);
        assert!(take.windows(2).all(|pair| pair[0].0 != pair[1].0), "the values of a take table must be distinct");
        for (_, child) in take.iter()
        {
            assert!(child.index() < self.table.len());
            assert!(key < self.key(*child), "keys must strictly increase along every path");
        }
        assert!(skip.index() < self.table.len());
        assert!(key < self.key(skip), "keys must strictly increase along every path");

        let new_node = Node { key, take: take.into_boxed_slice(), skip };
        let table = &mut self.table;
        let index = *self.index.entry(new_node.clone()).or_insert_with(
            ||
            {
                table.push(new_node);
                table.len() - 1
            }
        );

        Mfdd::new(index)
    }

    /// The 'zero' MFDD, the empty family.
    pub fn zero(&self) -> Mfdd
    {
        Mfdd::new(0)
    }

    /// The 'one' MFDD, the family that only contains the empty record.
    pub fn one(&self) -> Mfdd
    {
        Mfdd::new(1)
    }

    pub fn is_terminal(&self, mfdd: Mfdd) -> bool
    {
        mfdd == self.zero() || mfdd == self.one()
    }

    /// Returns the key of the given node, or [TERMINAL_KEY] for terminals.
    pub fn key(&self, mfdd: Mfdd) -> usize
    {
        self.table[mfdd.index()].key
    }

    pub fn get(&self, mfdd: Mfdd) -> Data<'_, V>
    {
        debug_assert!(!self.is_terminal(mfdd), "terminals have no content");
        let node = &self.table[mfdd.index()];
        Data(node.key, &node.take, node.skip)
    }

    /// Returns the number of nodes in the table, including both terminals.
    pub fn node_count(&self) -> usize
    {
        self.table.len()
    }

    pub(crate) fn operation_cache(&mut self) -> &mut OperationCache
    {
        &mut self.cache
    }
}

impl<V: Value> Default for Storage<V>
{
    fn default() -> Self
    {
        Self::new()
    }
}
