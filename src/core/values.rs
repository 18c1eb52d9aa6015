use super::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// A captured reordering: position `i` of a view reads `source[order[i]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    order: Arc<[usize]>,
}

impl Permutation {
    pub fn new(order: impl Into<Arc<[usize]>>) -> Self {
        Self { order: order.into() }
    }

    /// Order that sorts `values` ascending. Nulls and non-numbers go last,
    /// ties keep their original order.
    pub fn sorting(values: &Values) -> Self {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| {
            match (values.get(a).as_f64(), values.get(b).as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
        Self::new(order)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Lays this permutation over `source` as a sorted view. The source
    /// storage is shared, not copied.
    pub fn apply(&self, source: &Values) -> Values {
        Values {
            data: source.materialized_storage(),
            order: Some(self.clone()),
        }
    }
}

/// Immutable value sequence of a field.
///
/// Either plain storage or a sorted view (storage plus a [`Permutation`]
/// applied at read time). Cloning is cheap; writes copy on demand.
#[derive(Debug, Clone, Default)]
pub struct Values {
    data: Arc<Vec<Value>>,
    order: Option<Permutation>,
}

impl Values {
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            data: Arc::new(values),
            order: None,
        }
    }

    /// Sorted view over `source` using `order`.
    pub fn sorted(source: Vec<Value>, order: Permutation) -> Self {
        Self {
            data: Arc::new(source),
            order: Some(order),
        }
    }

    pub fn len(&self) -> usize {
        match &self.order {
            Some(order) => order.len(),
            None => self.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`, null when out of range.
    pub fn get(&self, index: usize) -> &Value {
        const NULL: &Value = &Value::Null;
        let source_index = match &self.order {
            Some(order) => match order.as_slice().get(index) {
                Some(i) => *i,
                None => return NULL,
            },
            None => index,
        };
        self.data.get(source_index).unwrap_or(NULL)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// Freshly allocated copy in read order.
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// The permutation this sequence is viewed through, if it is a sorted view.
    pub fn order(&self) -> Option<&Permutation> {
        self.order.as_ref()
    }

    /// Fresh sequence with `f` applied to every value in read order.
    pub fn map(&self, f: impl FnMut(&Value) -> Value) -> Values {
        Values::new(self.iter().map(f).collect())
    }

    /// Overwrite one cell. A sorted view is materialized first; storage
    /// shared with other holders is copied before the write.
    pub fn set(&mut self, index: usize, value: Value) {
        if self.order.is_some() {
            *self = Values::new(self.to_vec());
        }
        if let Some(slot) = Arc::make_mut(&mut self.data).get_mut(index) {
            *slot = value;
        }
    }

    /// True when both sequences read from the same allocation.
    pub fn shares_storage(&self, other: &Values) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    fn materialized_storage(&self) -> Arc<Vec<Value>> {
        match &self.order {
            Some(_) => Arc::new(self.to_vec()),
            None => Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Values {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl From<Vec<Value>> for Values {
    fn from(values: Vec<Value>) -> Self {
        Values::new(values)
    }
}

impl FromIterator<Value> for Values {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Values::new(iter.into_iter().collect())
    }
}

impl Serialize for Values {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Values {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Value>::deserialize(deserializer).map(Values::new)
    }
}
