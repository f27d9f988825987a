//! Catalog - the in-memory record store.
//!
//! The catalog owns the ordered product sequence and the edit cursor. Every
//! mutation is mirrored to the storage backend before it reports success, so
//! the persisted form and the in-memory sequence never drift apart.
//!
//! Update and delete are two-phase: `request_*` validates and returns a
//! pending handle, and nothing mutates until the handle is resolved with the
//! user's confirmation. Declining resolves to a no-op.

use crate::{
    error::Result,
    product::{Product, ProductDraft},
    storage::{StorageBackend, CATALOG_KEY},
    validate, Error, ProductId,
};

/// The ordered product catalog, mirrored to storage on every mutation.
#[derive(Debug)]
pub struct Catalog {
    /// Insertion order is display order
    products: Vec<Product>,
    /// Record currently under edit, if any; never persisted
    edit_cursor: Option<ProductId>,
    /// Next id to allocate; ids are never reused within a catalog lifetime
    next_id: ProductId,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            edit_cursor: None,
            next_id: 1,
        }
    }

    /// Load the catalog from the backend.
    ///
    /// An absent, empty, or malformed value loads as an empty catalog. The
    /// persisted form is a mirror of in-memory state, not something the user
    /// repairs by hand, so a parse failure is logged and swallowed rather
    /// than surfaced.
    pub fn load(backend: &impl StorageBackend) -> Self {
        let Some(raw) = backend.get(CATALOG_KEY) else {
            return Self::new();
        };

        let products: Vec<Product> = match serde_json::from_str(&raw) {
            Ok(products) => products,
            Err(err) => {
                tracing::debug!(%err, "discarding malformed persisted catalog");
                return Self::new();
            }
        };

        // Resume id allocation past anything already persisted.
        let next_id = products.iter().map(|p| p.id + 1).max().unwrap_or(1);

        Self {
            products,
            edit_cursor: None,
            next_id,
        }
    }

    /// Serialize the full catalog and write it to the backend in one call.
    pub fn persist(&self, backend: &mut impl StorageBackend) -> Result<()> {
        let json =
            serde_json::to_string(&self.products).map_err(|e| Error::Serialize(e.to_string()))?;
        backend.set(CATALOG_KEY, json);
        Ok(())
    }

    /// Validate a draft and append it as a new record.
    ///
    /// Returns [`Error::InvalidDraft`] without mutating anything when any
    /// field fails; on success the new catalog state is persisted before the
    /// outcome is reported.
    pub fn add(
        &mut self,
        draft: &ProductDraft,
        backend: &mut impl StorageBackend,
    ) -> Result<AddOutcome> {
        self.check_draft(draft)?;

        let id = self.allocate_id();
        let product = Product::from_draft(id, draft)?;
        self.products.push(product);
        self.persist(backend)?;

        Ok(AddOutcome {
            id,
            position: self.products.len(),
        })
    }

    /// Mark a record as under edit and return a draft prefilled from it.
    ///
    /// The image field is not prefilled: the host's file input cannot be
    /// populated programmatically, and an empty one means "keep the current
    /// image" on update.
    pub fn begin_edit(&mut self, id: ProductId) -> Result<ProductDraft> {
        let product = self.get(id).ok_or(Error::RecordNotFound(id))?;

        let draft = ProductDraft {
            name: product.name.clone(),
            price: product.price.clone(),
            kind: product.kind.to_string(),
            description: product.description.clone(),
            image: None,
        };

        self.edit_cursor = Some(id);
        Ok(draft)
    }

    /// Leave edit mode without changing anything.
    pub fn cancel_edit(&mut self) {
        self.edit_cursor = None;
    }

    /// Validate an update candidate and return a handle awaiting
    /// confirmation.
    ///
    /// Requires an edit cursor. Invalid drafts never reach the confirmation
    /// step; the catalog stays untouched either way until the handle is
    /// resolved.
    pub fn request_update(&self, draft: ProductDraft) -> Result<PendingUpdate> {
        let id = self.edit_cursor.ok_or(Error::NoEditCursor)?;
        self.check_draft(&draft)?;
        Ok(PendingUpdate { id, draft })
    }

    /// Return a handle for deleting `id`, awaiting confirmation.
    pub fn request_delete(&self, id: ProductId) -> Result<PendingDelete> {
        if self.get(id).is_none() {
            return Err(Error::RecordNotFound(id));
        }
        Ok(PendingDelete { id })
    }

    /// Get a record by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 1-based display position of a record.
    pub fn position_of(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id).map(|i| i + 1)
    }

    /// All records, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Count of records.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Id of the record under edit, if any.
    pub fn edit_cursor(&self) -> Option<ProductId> {
        self.edit_cursor
    }

    fn allocate_id(&mut self) -> ProductId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn check_draft(&self, draft: &ProductDraft) -> Result<()> {
        let report = validate::validate_draft(draft);
        if report.all_valid() {
            Ok(())
        } else {
            Err(Error::InvalidDraft(report))
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Id assigned to the new record
    pub id: ProductId,
    /// 1-based display position (always the end of the catalog)
    pub position: usize,
}

/// A validated update waiting on user confirmation.
///
/// Holds the target id and the accepted draft; the catalog is not borrowed,
/// so the host can keep the handle across its async confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    id: ProductId,
    draft: ProductDraft,
}

impl PendingUpdate {
    /// Id of the record this update targets.
    pub fn record_id(&self) -> ProductId {
        self.id
    }

    /// Apply or discard the update once the user has answered.
    ///
    /// Declined: nothing changes and the edit cursor stays set, so the user
    /// can keep editing. Accepted: all text fields are overwritten, the
    /// image only if the draft supplied one, the new state is persisted, and
    /// the cursor is cleared.
    pub fn resolve(
        self,
        catalog: &mut Catalog,
        backend: &mut impl StorageBackend,
        accepted: bool,
    ) -> Result<UpdateOutcome> {
        if !accepted {
            return Ok(UpdateOutcome::Declined);
        }

        let Some(index) = catalog.products.iter().position(|p| p.id == self.id) else {
            // Unreachable through a single-owner UI; tolerate the stale
            // handle instead of failing the session.
            tracing::warn!(id = self.id, "update resolved against a missing record");
            return Ok(UpdateOutcome::Stale);
        };

        let kind = self.draft.kind.parse()?;
        let product = &mut catalog.products[index];
        product.name = self.draft.name.trim().to_string();
        product.price = self.draft.price.trim().to_string();
        product.kind = kind;
        product.description = self.draft.description.trim().to_string();
        if let Some(image) = self.draft.image {
            product.image = Some(image);
        }

        catalog.persist(backend)?;
        catalog.edit_cursor = None;

        Ok(UpdateOutcome::Applied {
            id: self.id,
            position: index + 1,
        })
    }
}

/// Result of resolving a pending update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Confirmed and applied at the given 1-based position.
    Applied { id: ProductId, position: usize },
    /// User declined; nothing changed and the edit cursor is still set.
    Declined,
    /// The record disappeared between request and resolve; nothing changed.
    Stale,
}

/// A delete waiting on user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    id: ProductId,
}

impl PendingDelete {
    /// Id of the record this delete targets.
    pub fn record_id(&self) -> ProductId {
        self.id
    }

    /// Remove the record or do nothing, once the user has answered.
    ///
    /// A confirmed delete shifts later records down by one position; any
    /// host holding positions must re-render from the catalog. Deleting the
    /// record under edit also clears the edit cursor.
    pub fn resolve(
        self,
        catalog: &mut Catalog,
        backend: &mut impl StorageBackend,
        accepted: bool,
    ) -> Result<DeleteOutcome> {
        if !accepted {
            return Ok(DeleteOutcome::Declined);
        }

        let Some(index) = catalog.products.iter().position(|p| p.id == self.id) else {
            tracing::warn!(id = self.id, "delete resolved against a missing record");
            return Ok(DeleteOutcome::Stale);
        };

        catalog.products.remove(index);
        if catalog.edit_cursor == Some(self.id) {
            catalog.edit_cursor = None;
        }
        catalog.persist(backend)?;

        Ok(DeleteOutcome::Deleted {
            id: self.id,
            position: index + 1,
        })
    }
}

/// Result of resolving a pending delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmed; the record previously at the given 1-based position is gone.
    Deleted { id: ProductId, position: usize },
    /// User declined; nothing changed.
    Declined,
    /// The record was already gone; nothing changed.
    Stale,
}
