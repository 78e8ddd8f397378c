use crate::{Mfdd, Storage, Data, Value};

// Returns an iterator over all records contained in the MFDD.
pub fn iter<V: Value>(storage: &Storage<V>, mfdd: Mfdd) -> Iter<'_, V>
{
    if mfdd == storage.zero() {
        Iter {
            storage,
            record: Vec::new(),
            stack: Vec::new(),
        }
    } else {
        Iter {
            storage,
            record: Vec::new(),
            stack: vec![Frame { mfdd, next: 0, depth: 0 }],
        }
    }
}

// One node on the path of the depth-first search.
struct Frame
{
    mfdd: Mfdd,
    next: usize, // The next edge to follow, the take edges come first and the skip edge last.
    depth: usize, // The length of the record when this node was reached.
}

pub struct Iter<'a, V>
{
    storage: &'a Storage<V>,
    record: Vec<(usize, V)>, // Stores the entries of the returned record.
    stack: Vec<Frame>, // Stores the stack for the depth-first search (never 'zero')
}

impl<V: Value> Iterator for Iter<'_, V>
{
    type Item = Vec<(usize, V)>;

    fn next(&mut self) -> Option<Self::Item>
    {
        let storage = self.storage;

        loop
        {
            let frame = self.stack.last_mut()?;

            if frame.mfdd == storage.one()
            {
                // Here, we have found another record in the MFDD.
                self.stack.pop();
                return Some(self.record.clone());
            }

            let Data(key, take, skip) = storage.get(frame.mfdd);
            let depth = frame.depth;
            self.record.truncate(depth);

            if frame.next < take.len()
            {
                let (value, down) = &take[frame.next];
                frame.next += 1;

                self.record.push((key, value.clone()));
                self.stack.push(Frame { mfdd: *down, next: 0, depth: depth + 1 });
            }
            else if frame.next == take.len()
            {
                frame.next += 1;

                if skip != storage.zero()
                {
                    self.stack.push(Frame { mfdd: skip, next: 0, depth });
                }
            }
            else
            {
                self.stack.pop();
            }
        }
    }
}
