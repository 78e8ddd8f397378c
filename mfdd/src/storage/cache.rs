use rustc_hash::FxHashMap;

use crate::{Mfdd, Storage, Value};

/// The operation cache can significantly speed up operations by caching
/// intermediate results. This is necessary since the maximal sharing means that
/// the same inputs can be encountered many times while evaluating the
/// operations.
///
/// For all operations defined in `operations.rs` where caching helps we
/// introduce a cache. The cache that belongs to one operation is identified by
/// the value of [UnaryFunction] or [BinaryOperator]. Nodes are never removed
/// from the storage, so cached results remain valid for its whole lifetime.
pub struct OperationCache
{
    caches1: Vec<FxHashMap<usize, usize>>,
    caches2: Vec<FxHashMap<(usize, usize), usize>>,
}

/// Any function from MFDD -> usize.
pub enum UnaryFunction
{
    Len,
}

/// Any operator from MFDD x MFDD -> MFDD.
pub enum BinaryOperator
{
    Union,
}

impl OperationCache
{
    pub fn new() -> OperationCache
    {
        OperationCache {
            caches1: vec![FxHashMap::default()],
            caches2: vec![FxHashMap::default()],
        }
    }

    fn get_cache1(&mut self, operator: &UnaryFunction) -> &mut FxHashMap<usize, usize>
    {
        match operator {
            UnaryFunction::Len => &mut self.caches1[0],
        }
    }

    fn get_cache2(&mut self, operator: &BinaryOperator) -> &mut FxHashMap<(usize, usize), usize>
    {
        match operator {
            BinaryOperator::Union => &mut self.caches2[0],
        }
    }
}

impl Default for OperationCache
{
    fn default() -> Self
    {
        Self::new()
    }
}

/// Implements an operation cache for a unary MFDD function.
pub fn cache_unary_function<V, F>(storage: &mut Storage<V>, operator: UnaryFunction, a: Mfdd, f: F) -> usize
    where V: Value,
          F: Fn(&mut Storage<V>, Mfdd) -> usize
{
    let key = a.index();
    if let Some(result) = storage.operation_cache().get_cache1(&operator).get(&key)
    {
        *result
    }
    else
    {
        let result = f(storage, a);
        storage.operation_cache().get_cache1(&operator).insert(key, result);
        result
    }
}

/// Implements an operation cache for a binary MFDD operator.
pub fn cache_binary_op<V, F>(storage: &mut Storage<V>, operator: BinaryOperator, a: Mfdd, b: Mfdd, f: F) -> Mfdd
    where V: Value,
          F: Fn(&mut Storage<V>, Mfdd, Mfdd) -> Mfdd
{
    let key = (a.index(), b.index());
    if let Some(result) = storage.operation_cache().get_cache2(&operator).get(&key)
    {
        Mfdd::new(*result)
    }
    else
    {
        let result = f(storage, a, b);
        storage.operation_cache().get_cache2(&operator).insert(key, result.index());
        result
    }
}

/// Implements an operation cache for a commutative binary MFDD operator, i.e.,
/// an operator f such that f(a,b) = f(b,a) for all MFDD a and b.
pub fn cache_comm_binary_op<V, F>(storage: &mut Storage<V>, operator: BinaryOperator, a: Mfdd, b: Mfdd, f: F) -> Mfdd
    where V: Value,
          F: Fn(&mut Storage<V>, Mfdd, Mfdd) -> Mfdd
{
    // Reorder the inputs to improve caching behaviour (can potentially half the cache size)
    if a.index() < b.index() {
        cache_binary_op(storage, operator, a, b, f)
    } else {
        cache_binary_op(storage, operator, b, a, f)
    }
}
