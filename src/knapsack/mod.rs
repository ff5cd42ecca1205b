//! 0/1 knapsack problem definition.
//!
//! [`KnapsackProblem`] plugs into the GA engine through
//! [`GaProblem`](crate::ga::GaProblem): each gene says whether the item at
//! that position is packed. A packing within capacity scores the sum of its
//! values; an overweight packing scores zero.
//!
//! # Key Types
//!
//! - [`Item`]: name, weight, and value of one item
//! - [`KnapsackProblem`]: item list plus weight capacity
//! - [`KnapsackError`]: construction and evaluation failures
//!
//! # Instances
//!
//! - [`KnapsackProblem::hiking_trip`]: the classic 22-item, capacity-400
//!   instance (optimum value 1030)

mod error;
mod instances;
mod problem;

pub use error::KnapsackError;
pub use problem::{Item, KnapsackProblem};
