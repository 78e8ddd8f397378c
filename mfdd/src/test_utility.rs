use std::collections::HashSet;

use rand::Rng;

// These functions are only relevant for testing purposes.

/// Returns a record that assigns a random value (from 0..max_value) to every key in 0..length.
pub fn random_record(length: usize, max_value: u64) -> Vec<(usize, u64)>
{
    let mut rng = rand::thread_rng();
    let mut record: Vec<(usize, u64)> = Vec::new();
    for key in 0..length
    {
        record.push((key, rng.gen_range(0..max_value)));
    }

    record
}

/// Returns a record over a random subset of the keys in 0..length, with random values (from 0..max_value).
pub fn random_partial_record(length: usize, max_value: u64) -> Vec<(usize, u64)>
{
    let mut rng = rand::thread_rng();
    random_record(length, max_value)
        .into_iter()
        .filter(|_| rng.gen_bool(0.5))
        .collect()
}

/// Returns a set of at most 'amount' records where every record assigns all keys in 0..length.
pub fn random_record_set(amount: usize, length: usize, max_value: u64) -> HashSet<Vec<(usize, u64)>>
{
    let mut result: HashSet<Vec<(usize, u64)>> = HashSet::new();

    // Insert 'amount' number of records into the result.
    for _ in 0..amount
    {
        result.insert(random_record(length, max_value));
    }

    result
}

/// Returns a set of at most 'amount' records over random subsets of the keys in 0..length.
pub fn random_partial_record_set(amount: usize, length: usize, max_value: u64) -> HashSet<Vec<(usize, u64)>>
{
    let mut result: HashSet<Vec<(usize, u64)>> = HashSet::new();

    for _ in 0..amount
    {
        result.insert(random_partial_record(length, max_value));
    }

    result
}
