//! Notice2Do Domain Layer
//!
//! This crate holds the data model shared by every other Notice2Do crate:
//! the structured record a generation backend returns for one notice, and
//! the trait seam through which that backend is called.
//!
//! ## Key Concepts
//!
//! - **NoticeRecord**: title, summary bullets, tasks and open questions for one notice
//! - **TaskItem**: one actionable item with an optional local due date
//! - **Priority**: closed three-level enumeration (`high`, `mid`, `low`)
//! - **Credential**: the backend secret, never printable
//! - **StructuredGenerator**: schema-constrained generation capability
//!
//! ## Architecture
//!
//! - No I/O, no network, no clock
//! - Infrastructure implementations live in other crates
//! - Records are built fresh per submission and never persisted

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod credential;
pub mod priority;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use credential::Credential;
pub use priority::Priority;
pub use record::{NoticeRecord, TaskItem};
pub use traits::{StructuredGenerator, StructuredRequest};
