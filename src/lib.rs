//! # Stockroom
//!
//! An in-memory inventory index with:
//! - Unique item IDs enforced on insert
//! - Point lookup and removal by ID
//! - Listing ordered by description
//! - Recoverable errors that never leave the index half-updated
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Caller / Command script                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Index                               │
//! │            add / find_by_id / remove / list                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌───────────────┐
//!   │   by_id     │◄─────────│ by_description│
//!   │  (HashMap)  │   IDs    │  (BTreeMap)   │
//!   └─────────────┘          └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use stockroom::{Index, Record, StockError};
//!
//! let mut index = Index::new();
//! index.add(Record::new("ITEM001", "LED Light", "Aisle 3, Shelf 1")).unwrap();
//! index.add(Record::new("ITEM002", "Fan Motor", "Aisle 2, Shelf 5")).unwrap();
//!
//! let err = index.add(Record::new("ITEM001", "LED Light", "Aisle 3, Shelf 1"));
//! assert_eq!(err, Err(StockError::DuplicateKey("ITEM001".into())));
//!
//! let names: Vec<_> = index
//!     .list_by_description()
//!     .map(|r| r.description().to_string())
//!     .collect();
//! assert_eq!(names, ["Fan Motor", "LED Light"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod index;
pub mod command;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Lookup, StockError, Result};
pub use config::Config;
pub use record::{ParseRecordError, Record};
pub use index::{Index, Listing};
pub use command::{Command, CommandType, Outcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stockroom
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
