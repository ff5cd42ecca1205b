use super::error::KnapsackError;
use crate::ga::GaProblem;
use std::fmt::Write;

/// One item that may be packed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u64, value: u64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// A 0/1 knapsack instance: items plus a weight capacity.
///
/// Gene `i` of a bit string decides whether `items()[i]` is packed.
///
/// ```
/// use knapsack_ga::ga::GaProblem;
/// use knapsack_ga::knapsack::KnapsackProblem;
///
/// let problem =
///     KnapsackProblem::from_weights_values(&[2, 3, 4, 5, 9], &[3, 4, 5, 8, 10], 10).unwrap();
/// assert_eq!(problem.evaluate(&[true, true, false, true, false]), Ok(15.0));
/// // Overweight packings score zero
/// assert_eq!(problem.evaluate(&[false, false, false, true, true]), Ok(0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: u64,
}

impl KnapsackProblem {
    /// Creates a problem from items and a capacity.
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, KnapsackError> {
        if items.is_empty() {
            return Err(KnapsackError::NoItems);
        }
        Ok(Self::from_parts(items, capacity))
    }

    /// Creates a problem from parallel weight and value columns.
    ///
    /// Items are named `item 0`, `item 1`, ...
    pub fn from_weights_values(
        weights: &[u64],
        values: &[u64],
        capacity: u64,
    ) -> Result<Self, KnapsackError> {
        if weights.len() != values.len() {
            return Err(KnapsackError::MismatchedColumns {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let items = weights
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (&w, &v))| Item::new(format!("item {i}"), w, v))
            .collect();
        Self::new(items, capacity)
    }

    pub(super) fn from_parts(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Items packed by `genes`, in item order.
    ///
    /// Genes beyond the item count are ignored.
    pub fn selected_items<'a>(&'a self, genes: &'a [bool]) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .zip(genes)
            .filter_map(|(item, &packed)| packed.then_some(item))
    }

    /// Total weight of the packed items, saturating at `u64::MAX`.
    pub fn total_weight(&self, genes: &[bool]) -> u64 {
        self.selected_items(genes).fold(0, |acc, i| acc.saturating_add(i.weight))
    }

    /// Total value of the packed items, ignoring capacity. Saturates at
    /// `u64::MAX`.
    pub fn total_value(&self, genes: &[bool]) -> u64 {
        self.selected_items(genes).fold(0, |acc, i| acc.saturating_add(i.value))
    }

    /// Whether the packed items fit within capacity.
    pub fn is_feasible(&self, genes: &[bool]) -> bool {
        self.total_weight(genes) <= self.capacity
    }
}

impl GaProblem for KnapsackProblem {
    type Error = KnapsackError;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total value if within capacity, otherwise zero.
    fn evaluate(&self, genes: &[bool]) -> Result<f64, KnapsackError> {
        if genes.len() != self.items.len() {
            return Err(KnapsackError::LengthMismatch {
                expected: self.items.len(),
                actual: genes.len(),
            });
        }
        if self.is_feasible(genes) {
            Ok(self.total_value(genes) as f64)
        } else {
            Ok(0.0)
        }
    }

    /// One line per packed item with running totals, then a summary line.
    fn describe(&self, genes: &[bool]) -> String {
        let mut out = String::new();
        let (mut weight, mut value) = (0u64, 0u64);
        for item in self.selected_items(genes) {
            weight = weight.saturating_add(item.weight);
            value = value.saturating_add(item.value);
            let _ = writeln!(
                out,
                "- Adding {}: weight = {}, value = {}, accumulated weight = {}, accumulated value = {}",
                item.name, item.weight, item.value, weight, value
            );
        }
        let _ = write!(out, "- Total weight = {weight}, Total value = {value}");
        if weight > self.capacity {
            let _ = write!(out, " (over capacity {})", self.capacity);
        }
        out
    }
}
