use crate::{Mfdd, Storage, Data, Value, BinaryOperator, UnaryFunction, cache_comm_binary_op, cache_unary_function};

use std::cmp::Ordering;

// Returns an MFDD containing only the given record, i.e., { record }. The keys of the record must be strictly increasing.
pub fn singleton<V: Value>(storage: &mut Storage<V>, record: &[(usize, V)]) -> Mfdd
{
    let mut root = storage.one();
    let zero = storage.zero();
    for (key, value) in record.iter().rev()
    {
        root = storage.node(*key, [(value.clone(), root)], zero);
    }

    root
}

/// Returns an MFDD containing exactly the records of the given family.
pub fn encode<V, I, R>(storage: &mut Storage<V>, family: I) -> Mfdd
    where V: Value,
          I: IntoIterator<Item = R>,
          R: AsRef<[(usize, V)]>
{
    let mut result = storage.zero();

    for record in family
    {
        let single = singleton(storage, record.as_ref());
        result = union(storage, result, single);
    }

    result
}

// Returns the union of the given MFDDs.
pub fn union<V: Value>(storage: &mut Storage<V>, a: Mfdd, b: Mfdd) -> Mfdd
{
    if a == b {
        a
    } else if a == storage.zero() {
        b
    } else if b == storage.zero() {
        a
    } else {
        cache_comm_binary_op(storage, BinaryOperator::Union, a, b, union_nodes)
    }
}

// The union of two distinct MFDDs that are not 'zero', so at most one of them is 'one'.
fn union_nodes<V: Value>(storage: &mut Storage<V>, a: Mfdd, b: Mfdd) -> Mfdd
{
    // Terminals have the largest key, so records that end here are pushed along the skip of the other node.
    match storage.key(a).cmp(&storage.key(b)) {
        Ordering::Less => {
            let Data(key, take, skip) = storage.get(a);
            let take = take.to_vec();
            let result = union(storage, skip, b);
            storage.node(key, take, result)
        },
        Ordering::Equal => {
            let Data(key, a_take, a_skip) = storage.get(a);
            let a_take = a_take.to_vec();
            let Data(_, b_take, b_skip) = storage.get(b);
            let b_take = b_take.to_vec();

            let take = merge_take(storage, a_take, b_take);
            let skip = union(storage, a_skip, b_skip);
            storage.node(key, take, skip)
        },
        Ordering::Greater => {
            let Data(key, take, skip) = storage.get(b);
            let take = take.to_vec();
            let result = union(storage, a, skip);
            storage.node(key, take, result)
        }
    }
}

// Merges two sorted take tables, the children of values present in both are combined by union.
fn merge_take<V: Value>(storage: &mut Storage<V>, a: Vec<(V, Mfdd)>, b: Vec<(V, Mfdd)>) -> Vec<(V, Mfdd)>
{
    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop
    {
        let order = match (a.peek(), b.peek()) {
            (Some((a_value, _)), Some((b_value, _))) => a_value.cmp(b_value),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };

        match order {
            Ordering::Less => result.extend(a.next()),
            Ordering::Greater => result.extend(b.next()),
            Ordering::Equal => {
                if let (Some((value, a_down)), Some((_, b_down))) = (a.next(), b.next()) {
                    let down = union(storage, a_down, b_down);
                    result.push((value, down));
                }
            }
        }
    }

    result
}

// Returns true iff the given record is included in the MFDD. The keys of the record must be strictly increasing.
pub fn element_of<V: Value>(storage: &Storage<V>, record: &[(usize, V)], mfdd: Mfdd) -> bool
{
    if mfdd == storage.zero()
    {
        false
    }
    else if mfdd == storage.one()
    {
        record.is_empty()
    }
    else
    {
        let Data(key, take, skip) = storage.get(mfdd);
        match record.first() {
            Some((first_key, value)) if *first_key == key => {
                match take.binary_search_by(|(label, _)| label.cmp(value)) {
                    Ok(position) => element_of(storage, &record[1..], take[position].1),
                    Err(_) => false,
                }
            },
            Some((first_key, _)) if *first_key < key => {
                // Keys increase along every path, so the first key cannot occur below this node.
                false
            },
            _ => element_of(storage, record, skip),
        }
    }
}

/// Returns the number of records in the given MFDD.
pub fn len<V: Value>(storage: &mut Storage<V>, mfdd: Mfdd) -> usize
{
    if mfdd == storage.zero()
    {
        0
    }
    else if mfdd == storage.one()
    {
        1
    }
    else
    {
        cache_unary_function(storage, UnaryFunction::Len, mfdd, |storage, mfdd| {
            let Data(_, take, skip) = storage.get(mfdd);
            let children: Vec<Mfdd> = take.iter().map(|(_, child)| *child).collect();

            let mut result = len(storage, skip);
            for child in children
            {
                result += len(storage, child);
            }
            result
        })
    }
}
