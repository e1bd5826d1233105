//! Interaction plumbing: deferred tasks and suggestion dropdowns

mod autocomplete;
mod scheduler;

pub use autocomplete::{Dropdown, DropdownKey, KeyOutcome, parse_suggestions};
pub use scheduler::TaskQueue;
