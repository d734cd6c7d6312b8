//! In-memory object graph backing the fake.
//!
//! ## Components
//!
//! - [`GitHubState`]: the store; owns every entity plus the id and number counters
//! - [`NodeRef`]: an entity of either kind, as found by a `Node` id lookup
//! - [`IdAllocator`] / [`NumberAllocator`]: deterministic id and pull request number sequences

mod sequence;
mod state;

pub use sequence::{IdAllocator, NumberAllocator};
pub use state::{GitHubState, NodeRef};
