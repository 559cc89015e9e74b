use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::collections::HashSet;

/// Tolerance used when comparing a solution's reported total value against
/// the value recomputed from its items.
pub const VALUE_TOLERANCE: f64 = 1e-4;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Difficulty {
    pub num_items: usize,
}

/// An item has a name, a value, and a size. Values and sizes are expected to
/// be non-negative; negative inputs are outside the contract and are not
/// validated here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Item {
    pub name: String,
    pub value: f64,
    pub size: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: f64, size: f64) -> Self {
        Self {
            name: name.into(),
            value,
            size,
        }
    }
}

// Identity is the name alone; value and size do not participate. Hashing
// must agree with equality, so it is by name as well.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Solution {
    pub items: Vec<Item>,
    pub total_value: f64,
}

impl Solution {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_value: 0.0,
        }
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub items: Vec<Item>,
    pub capacity: f64,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        let mut rng = SmallRng::from_seed(seed.clone());

        // Values and sizes are drawn from the same range so no item is
        // trivially dominant
        let items: Vec<Item> = (0..difficulty.num_items)
            .map(|i| Item {
                name: format!("item{}", i),
                value: rng.gen_range(1.0..2.0),
                size: rng.gen_range(1.0..2.0),
            })
            .collect();

        // Capacity admits roughly half of the items
        let capacity = items.iter().map(|item| item.size).sum::<f64>() / 2.0;

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            items,
            capacity,
        })
    }

    /// Check a solution against this instance: no duplicate items, every
    /// selected item drawn from the instance in its original relative order,
    /// total size within capacity, and the reported total value consistent
    /// with the selected items. Returns the recomputed total value.
    pub fn verify_solution(&self, solution: &Solution) -> Result<f64> {
        let selected: HashSet<&str> = solution
            .items
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        if selected.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        // The selection must be a subsequence of the instance's items.
        let mut remaining = self.items.iter();
        for item in &solution.items {
            if !remaining.any(|candidate| candidate == item) {
                return Err(anyhow!(
                    "Item ({}) is not part of the instance, or is out of order",
                    item.name
                ));
            }
        }

        let total_size = solution.items.iter().map(|item| item.size).sum::<f64>();
        if total_size > self.capacity {
            return Err(anyhow!(
                "Total size ({}) exceeded capacity ({})",
                total_size,
                self.capacity
            ));
        }

        let total_value = solution.items.iter().map(|item| item.value).sum::<f64>();
        if (total_value - solution.total_value).abs() > VALUE_TOLERANCE {
            return Err(anyhow!(
                "Reported total value ({}) does not match the selected items ({})",
                solution.total_value,
                total_value
            ));
        }

        Ok(total_value)
    }
}
