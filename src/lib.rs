//! # Catalog Engine
//!
//! A validated CRUD engine for a product catalog.
//!
//! This crate provides the state-management core of a catalog editor: an
//! ordered sequence of product records held in memory, mirrored to an opaque
//! key-value store on every mutation, with pure per-field validation, an
//! HTML row renderer, and a non-mutating search filter.
//!
//! ## Design Principles
//!
//! - **No IO**: persistence goes through the [`StorageBackend`] trait; the
//!   engine knows nothing about a real browser, network, or filesystem
//! - **Pure validation**: field classifiers return a tri-state
//!   [`FieldStatus`]; the presentation annotation is derived from it, never
//!   performed by it
//! - **Explicit confirmation**: update and delete are two-phase — a
//!   `request_*` call returns a pending handle, and nothing mutates until
//!   the handle is resolved with the user's answer
//! - **Stable identity**: records carry a synthetic [`ProductId`] assigned
//!   at creation, so edit and delete never act on a display position that a
//!   filtered view could have shifted
//!
//! ## Core Concepts
//!
//! ### Catalog
//!
//! The [`Catalog`] owns the record sequence and the edit cursor. Insertion
//! order is display order, and after every mutation the serialized catalog
//! is written to the backend in a single call, so the persisted form never
//! drifts from memory. Loading tolerates absent or malformed persisted data
//! by starting empty.
//!
//! ### Validation
//!
//! Each field classifies as `Empty`, `Invalid`, or `Valid`
//! ([`validate::validate_draft`]). Empty is not Invalid: a blank field hides
//! its error message without being marked good. All four fields must be
//! `Valid` for a create or update to proceed.
//!
//! ### Rendering and search
//!
//! [`render_rows`] projects any record sequence into escaped table-body
//! markup. [`search::filter`] derives a filtered view without touching the
//! catalog; filtered rows render with disabled controls.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_engine::{Catalog, MemoryBackend, ProductDraft, RowControls};
//!
//! let mut backend = MemoryBackend::new();
//! let mut catalog = Catalog::load(&backend);
//!
//! let draft = ProductDraft {
//!     name: "Phone".into(),
//!     price: "15000".into(),
//!     kind: "mobile".into(),
//!     description: "Flagship handset".into(),
//!     image: None,
//! };
//! let added = catalog.add(&draft, &mut backend).unwrap();
//! assert_eq!(added.position, 1);
//!
//! // Deleting asks for confirmation first; declining is a no-op.
//! let pending = catalog.request_delete(added.id).unwrap();
//! pending.resolve(&mut catalog, &mut backend, false).unwrap();
//! assert_eq!(catalog.len(), 1);
//!
//! let rows = catalog_engine::render_rows(catalog.products(), RowControls::Interactive);
//! assert!(rows.contains("<td>Phone</td>"));
//! ```

pub mod catalog;
pub mod error;
pub mod product;
pub mod render;
pub mod search;
pub mod storage;
pub mod validate;

// Re-export main types at crate root
pub use catalog::{
    AddOutcome, Catalog, DeleteOutcome, PendingDelete, PendingUpdate, UpdateOutcome,
};
pub use error::Error;
pub use product::{Product, ProductDraft, ProductKind};
pub use render::{render_rows, RowControls};
pub use storage::{MemoryBackend, StorageBackend, CATALOG_KEY};
pub use validate::{validate_draft, FieldStatus, ValidationReport};

/// Stable synthetic identifier assigned to each record at creation time.
pub type ProductId = u64;
