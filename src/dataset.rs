use std::{
    collections::{HashMap, HashSet},
    hash::{Hash, Hasher},
};

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Target used when the dataset is empty. Never produced by the
/// generator, whose values fall within `[0, 1)`.
pub const MISSING_TARGET: f64 = -1.0;

/// Float wrapper hashed and compared by numeric value, so that `0.0`
/// and `-0.0` land on the same entry.
#[derive(Clone, Copy, Debug)]
pub struct Value(pub f64);

impl Value {
    fn bits(&self) -> u64 {
        if self.0 == 0.0 {
            0
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state)
    }
}

/// Key under which a value is stored in the string-keyed views.
#[inline]
pub fn key_of(value: f64) -> String {
    value.to_string()
}

/// Fold `entries` into a string-keyed dictionary, a later entry replaces
/// an earlier one under the same key.
pub(crate) fn fold_last_wins<I>(entries: I) -> HashMap<String, f64>
where
    I: Iterator<Item = (String, f64)>,
{
    entries.fold(HashMap::new(), |mut acc, (key, value)| {
        acc.insert(key, value);
        acc
    })
}

/// Dataset holds one immutable sequence of floats and the four views
/// derived from it. Views differ in structure, not in content.
pub struct Dataset {
    array: Vec<f64>,
    set: HashSet<Value>,
    map: HashMap<String, f64>,
    record: HashMap<String, f64>,
}

impl Dataset {
    /// Generate `items` uniformly distributed values in `[0, 1)` using a
    /// generator seeded with `seed`.
    pub fn generate(items: usize, seed: u128) -> Dataset {
        let mut rng = SmallRng::from_seed(seed.to_le_bytes());
        let values: Vec<f64> = (0..items).map(|_| rng.gen::<f64>()).collect();
        Dataset::from_values(values)
    }

    /// Build the views from an explicit sequence.
    pub fn from_values(array: Vec<f64>) -> Dataset {
        let set: HashSet<Value> = array.iter().map(|v| Value(*v)).collect();
        // collect() overwrites earlier entries, last write wins.
        let map: HashMap<String, f64> = array.iter().map(|v| (key_of(*v), *v)).collect();
        let record = fold_last_wins(array.iter().map(|v| (key_of(*v), *v)));
        Dataset {
            array,
            set,
            map,
            record,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Value every probe searches for: the last element of the
    /// sequence, or [`MISSING_TARGET`] when empty.
    pub fn target(&self) -> f64 {
        self.array.last().cloned().unwrap_or(MISSING_TARGET)
    }

    pub fn as_array(&self) -> &[f64] {
        &self.array
    }

    pub fn as_set(&self) -> &HashSet<Value> {
        &self.set
    }

    pub fn as_map(&self) -> &HashMap<String, f64> {
        &self.map
    }

    pub fn as_record(&self) -> &HashMap<String, f64> {
        &self.record
    }
}
