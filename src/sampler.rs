use log::{debug, info, warn};

use crate::randomizer::{Mt19937, UniformDraw};

/// Fixed-capacity slot array filled by Algorithm R.
///
/// Holds `min(capacity, seen)` items. Once full, slots are overwritten in
/// place, so the order of the items is not the order they were offered in.
#[derive(Debug)]
pub struct Reservoir<T>{
    capacity: usize,
    items: Vec<T>,
    seen: u64,
}

impl<T> Reservoir<T>{
    pub fn new(capacity: usize) -> Self{
        assert!(capacity >= 1, "reservoir capacity must be at least 1");
        Reservoir{capacity, items: Vec::new(), seen: 0}
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> u64{
        self.seen
    }

    pub fn len(&self) -> usize{
        self.items.len()
    }

    pub fn is_empty(&self) -> bool{
        self.items.is_empty()
    }

    /// One step of Algorithm R for the `seen`-th item (0-indexed).
    pub fn offer<D: UniformDraw>(&mut self, item: T, draw: &mut D){
        let i = self.seen;
        self.seen += 1;
        if self.items.len() < self.capacity{
            self.items.push(item);
            return;
        }
        let j = draw.draw_inclusive(i);
        if j < self.capacity as u64{
            self.items[j as usize] = item;
        }
    }

    pub fn into_vec(self) -> Vec<T>{
        self.items
    }
}

/// Draws `k` items uniformly without replacement from `source` in a single pass.
pub fn reservoir_sample<T, I, D>(draw: &mut D, source: I, k: usize) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    D: UniformDraw,
{
    let mut reservoir = Reservoir::new(k);
    for item in source{
        reservoir.offer(item, draw);
    }
    reservoir.into_vec()
}

/// Samples up to `sample_size` records from a fallible record stream.
///
/// A fresh random-number source is created for every call: seeded from
/// `seed` when given, from entropy otherwise. The first error from the stream
/// ends the pass and is returned; no partial sample is handed back.
pub fn sample<T, E, I>(records: I, sample_size: usize, seed: Option<f64>) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut rng = match seed{
        Some(seed) => Mt19937::from_seed(seed),
        None => Mt19937::from_entropy(),
    };
    let mut reservoir = Reservoir::new(sample_size);
    debug!("Sampling {} records", sample_size);

    for record in records{
        reservoir.offer(record?, &mut rng);
    }

    if reservoir.is_empty(){
        warn!("Input has no records");
    } else if reservoir.seen() < sample_size as u64{
        warn!("Input has only {} records, fewer than the requested sample size {}", reservoir.seen(), sample_size);
    }
    info!("Kept {} of {} records", reservoir.len(), reservoir.seen());
    Ok(reservoir.into_vec())
}
