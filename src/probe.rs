use std::fmt;

use crate::dataset::{key_of, Dataset, Value};

/// Container enumerates the four views of a [`Dataset`], in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    /// Sequential list, linear scan.
    Array,
    /// Hash-set keyed by numeric value.
    Set,
    /// Hash-map keyed by the value's string representation.
    Map,
    /// Dictionary keyed by the value's string representation, built by
    /// folding over the sequence.
    Record,
}

impl Container {
    pub const ALL: [Container; 4] = [
        Container::Array,
        Container::Set,
        Container::Map,
        Container::Record,
    ];

    /// Name used in the report.
    pub fn name(&self) -> &'static str {
        match self {
            Container::Array => "Array",
            Container::Set => "Set",
            Container::Map => "Map",
            Container::Record => "Record",
        }
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        match self {
            Container::Array => 0,
            Container::Set => 1,
            Container::Map => 2,
            Container::Record => 3,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Membership probes, none of them mutate the dataset.
impl Dataset {
    /// Check whether `target` is present in the view for `container`.
    pub fn contains(&self, container: Container, target: f64) -> bool {
        match container {
            Container::Array => self.as_array().contains(&target),
            Container::Set => self.as_set().contains(&Value(target)),
            Container::Map => self.as_map().contains_key(&key_of(target)),
            Container::Record => self.as_record().contains_key(&key_of(target)),
        }
    }
}
