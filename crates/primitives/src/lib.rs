//! Core types for structural equation editing: arena handles, sibling sites,
//! cursor addresses and edit outcomes.

/// Cursor address into an expression tree.
pub mod address;
/// Arena handle types for nodes and slots.
pub mod ids;
/// Result of applying one edit event.
pub mod outcome;
/// Points on a sequence of siblings, in gap/item form.
pub mod site;

pub use address::Address;
pub use ids::{NodeId, SlotId};
pub use outcome::EditOutcome;
pub use site::{Site, SiteIdx};
