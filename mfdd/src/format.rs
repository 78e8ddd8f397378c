use crate::{Mfdd, Storage, Value, iterators::*};

use std::fmt;

// Return a formatter for the given Mfdd.
pub fn fmt_node<V: Value>(storage: &Storage<V>, mfdd: Mfdd) -> Display<'_, V>
{
    Display {
        storage,
        mfdd,
    }
}

// Print the records represented by the given Mfdd.
pub struct Display<'a, V>
{
    storage: &'a Storage<V>,
    mfdd: Mfdd,
}

fn print<V: Value + fmt::Display>(storage: &Storage<V>, mfdd: Mfdd, f: &mut fmt::Formatter<'_>) -> fmt::Result
{
    for record in iter(storage, mfdd)
    {
        // Here, we have found another record in the MFDD.
        write!(f, "<")?;
        for (key, value) in record
        {
            write!(f, "{}: {} ", key, value)?;
        }
        writeln!(f, ">")?;
    }

    Ok(())
}

impl<V: Value + fmt::Display> fmt::Display for Display<'_, V>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        writeln!(f, "{{ ")?;
        print(self.storage, self.mfdd, f)?;
        write!(f, "}}")
    }
}
