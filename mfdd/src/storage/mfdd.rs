use std::fmt::{self, Debug, Formatter};

use static_assertions::{assert_eq_size, assert_impl_all};

/// Every MFDD points to its root node in the storage table.
///
/// Since nodes are never removed from a [crate::Storage] a handle stays valid
/// for as long as the storage that created it. Handles of different storages
/// must not be mixed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mfdd
{
    index: usize, // Index in the node table.
}

assert_impl_all!(Mfdd: Copy, Send, Sync);
assert_eq_size!(Mfdd, usize);

impl Mfdd
{
    pub(crate) fn new(index: usize) -> Mfdd
    {
        Mfdd { index }
    }

    pub fn index(&self) -> usize
    {
        self.index
    }
}

impl Debug for Mfdd
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result
    {
        write!(f, "index: {}", self.index)
    }
}
