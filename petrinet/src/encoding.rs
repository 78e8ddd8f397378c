use mfdd::{iter, len, singleton, union, Mfdd, Storage};
use thiserror::Error;

use crate::{Marking, Place, Token};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError
{
    #[error("key {0} is not the variable of any place")]
    UnknownKey(usize),
    #[error("the record does not assign place {0}")]
    MissingPlace(String),
}

impl<P: Place> Marking<P>
{
    /// The record of this marking: the variable of every place, i.e., its
    /// position in [crate::Finite::all], together with its tokens.
    pub fn to_record(&self) -> Vec<(usize, P::Content)>
    {
        self.values().iter().cloned().enumerate().collect()
    }

    /// The inverse of [Marking::to_record], fails when the record does not
    /// assign every place.
    pub fn from_record(record: &[(usize, P::Content)]) -> Result<Self, DecodeError>
    {
        let places = P::all();
        let mut values = Vec::with_capacity(places.len());

        for (expected, (key, tokens)) in record.iter().enumerate()
        {
            if *key >= places.len()
            {
                return Err(DecodeError::UnknownKey(*key));
            }

            if *key != expected
            {
                // The keys of a record are increasing, so the place at the expected position was skipped.
                return Err(DecodeError::MissingPlace(format!("{:?}", places[expected])));
            }

            values.push(tokens.clone());
        }

        if let Some(place) = places.get(values.len())
        {
            return Err(DecodeError::MissingPlace(format!("{:?}", place)));
        }

        Ok(Marking::from_values(values))
    }

    /// Returns the MFDD that contains only this marking.
    pub fn encode(&self, storage: &mut Storage<P::Content>) -> Mfdd
    {
        singleton(storage, &self.to_record())
    }
}

/// Returns the MFDD that contains exactly the given markings.
pub fn encode_family<'a, P, I>(storage: &mut Storage<P::Content>, markings: I) -> Mfdd
    where P: Place + 'a,
          I: IntoIterator<Item = &'a Marking<P>>
{
    let mut result = storage.zero();
    for marking in markings
    {
        let single = marking.encode(storage);
        result = union(storage, result, single);
    }

    result
}

/// Returns the markings stored in the given MFDD.
pub fn decode<P: Place>(storage: &Storage<P::Content>, mfdd: Mfdd) -> Result<Vec<Marking<P>>, DecodeError>
{
    iter(storage, mfdd)
        .map(|record| Marking::from_record(&record))
        .collect()
}

/// Returns the number of markings stored in the given MFDD.
pub fn count<C: Token>(storage: &mut Storage<C>, mfdd: Mfdd) -> usize
{
    len(storage, mfdd)
}
