//! Index Module
//!
//! Dual-keyed in-memory storage for inventory records.
//!
//! ## Responsibilities
//! - Enforce ID uniqueness on insert
//! - Point lookups and removals by ID
//! - Ordered listing by description
//! - Keep both key structures in step on every mutation
//!
//! ## Data Structure Choice
//! - `HashMap<String, Record>` owns the records, keyed by ID
//! - `BTreeMap<String, BTreeSet<String>>` maps description → IDs
//!   - Ordered keys give the listing order for free
//!   - Set-valued so records sharing a description never collide

mod description;
mod listing;
mod table;

pub use description::DescriptionIndex;
pub use listing::Listing;
pub use table::Index;
