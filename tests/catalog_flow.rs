//! End-to-end flows for catalog-engine
//!
//! These tests drive the public API the way a host UI would: load, add,
//! edit with confirmation, delete with confirmation, search, render.

use catalog_engine::{
    render_rows, search, Catalog, DeleteOutcome, Error, MemoryBackend, ProductDraft, RowControls,
    StorageBackend, UpdateOutcome, CATALOG_KEY,
};

fn draft(name: &str, price: &str, kind: &str, description: &str) -> ProductDraft {
    ProductDraft {
        name: name.into(),
        price: price.into(),
        kind: kind.into(),
        description: description.into(),
        image: None,
    }
}

// ============================================================================
// Full editor session
// ============================================================================

#[test]
fn editor_session_from_empty_to_empty() {
    let mut backend = MemoryBackend::new();
    let mut catalog = Catalog::load(&backend);
    assert!(catalog.is_empty());

    // Add a product.
    let added = catalog
        .add(&draft("Phone", "15000", "mobile", "Good"), &mut backend)
        .unwrap();
    assert_eq!(catalog.len(), 1);

    // Start editing it, try an out-of-range price: the update is blocked
    // before any confirmation dialog would appear.
    catalog.begin_edit(added.id).unwrap();
    let blocked = catalog.request_update(draft("Phone", "500", "mobile", "Good"));
    assert!(matches!(blocked, Err(Error::InvalidDraft(_))));
    assert_eq!(catalog.get(added.id).unwrap().price, "15000");

    // A valid price goes through once confirmed.
    let pending = catalog
        .request_update(draft("Phone", "9999", "mobile", "Good"))
        .unwrap();
    let outcome = pending.resolve(&mut catalog, &mut backend, true).unwrap();
    assert!(matches!(outcome, UpdateOutcome::Applied { .. }));
    assert_eq!(catalog.get(added.id).unwrap().price, "9999");

    // Declined delete leaves the catalog alone.
    let pending = catalog.request_delete(added.id).unwrap();
    let outcome = pending.resolve(&mut catalog, &mut backend, false).unwrap();
    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(catalog.len(), 1);

    // Confirmed delete empties the catalog and the mirror.
    let pending = catalog.request_delete(added.id).unwrap();
    pending.resolve(&mut catalog, &mut backend, true).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(backend.get(CATALOG_KEY).as_deref(), Some("[]"));
}

// ============================================================================
// Persistence across sessions
// ============================================================================

#[test]
fn catalog_survives_a_reload() {
    let mut backend = MemoryBackend::new();

    let mut catalog = Catalog::load(&backend);
    catalog
        .add(&draft("Phone", "15000", "mobile", "First"), &mut backend)
        .unwrap();
    catalog
        .add(&draft("Watch", "2000", "watch", "Second"), &mut backend)
        .unwrap();
    let snapshot = catalog.products().to_vec();

    // A fresh session sees exactly what the previous one left.
    let reloaded = Catalog::load(&backend);
    assert_eq!(reloaded.products(), snapshot.as_slice());
}

#[test]
fn malformed_persisted_data_loads_as_empty() {
    let mut backend = MemoryBackend::new();
    backend.set(CATALOG_KEY, "not json".into());

    let catalog = Catalog::load(&backend);
    assert!(catalog.is_empty());
}

#[test]
fn ids_stay_unique_across_reload_and_delete() {
    let mut backend = MemoryBackend::new();
    let mut catalog = Catalog::load(&backend);

    let a = catalog
        .add(&draft("Phone", "15000", "mobile", "First"), &mut backend)
        .unwrap()
        .id;
    let b = catalog
        .add(&draft("Watch", "2000", "watch", "Second"), &mut backend)
        .unwrap()
        .id;

    // Delete the newest record, reload, add another: the freed id must not
    // come back, or a stale edit/delete handle could hit the wrong record.
    let pending = catalog.request_delete(b).unwrap();
    pending.resolve(&mut catalog, &mut backend, true).unwrap();

    let mut reloaded = Catalog::load(&backend);
    let c = reloaded
        .add(&draft("Tablet", "9000", "tablet", "Third"), &mut backend)
        .unwrap()
        .id;

    assert_ne!(c, a);
    assert!(c > a);
}

// ============================================================================
// Search and rendering together
// ============================================================================

#[test]
fn filtered_view_renders_read_only_rows() {
    let mut backend = MemoryBackend::new();
    let mut catalog = Catalog::new();
    catalog
        .add(&draft("Phone", "15000", "mobile", "Flagship"), &mut backend)
        .unwrap();
    catalog
        .add(&draft("Watch", "2000", "watch", "Small"), &mut backend)
        .unwrap();

    let hits = search::filter(catalog.products(), "watch");
    assert_eq!(hits.len(), 1);

    let html = render_rows(hits, RowControls::Disabled);
    assert!(html.contains("<td>1</td><td>Watch</td>"));
    assert!(html.contains("disabled"));
    assert!(!html.contains("data-id"));

    // Clearing the term restores the full, interactive view.
    let all = search::filter(catalog.products(), "  ");
    let html = render_rows(all, RowControls::Interactive);
    assert!(html.contains("<td>1</td><td>Phone</td>"));
    assert!(html.contains("<td>2</td><td>Watch</td>"));
    assert!(html.contains("data-id"));
}

#[test]
fn hostile_input_never_reaches_markup_unescaped() {
    let mut backend = MemoryBackend::new();
    let mut catalog = Catalog::new();
    catalog
        .add(
            &draft("Svgx", "1000", "screen", "<script>alert('x')</script>"),
            &mut backend,
        )
        .unwrap();

    let html = render_rows(catalog.products(), RowControls::Interactive);
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

// ============================================================================
// Unicode and boundary content
// ============================================================================

#[test]
fn unicode_descriptions_roundtrip() {
    let mut backend = MemoryBackend::new();
    let mut catalog = Catalog::new();

    let descriptions = [
        "\u{65e5}\u{672c}\u{8a9e}",
        "emoji \u{1f389}\u{1f680}",
        "line one\nline two\ttabbed",
    ];
    for (i, description) in descriptions.iter().enumerate() {
        let name = format!("Item{}", (b'a' + i as u8) as char);
        catalog
            .add(&draft(&name, "1000", "mobile", description), &mut backend)
            .unwrap();
    }

    let reloaded = Catalog::load(&backend);
    for (product, description) in reloaded.products().iter().zip(descriptions) {
        assert_eq!(product.description, description);
    }
}

#[test]
fn description_length_limit_counts_characters() {
    let mut backend = MemoryBackend::new();
    let mut catalog = Catalog::new();

    // 500 multi-byte characters are fine even though they exceed 500 bytes.
    let five_hundred = "\u{00e9}".repeat(500);
    assert!(catalog
        .add(&draft("Phone", "1000", "mobile", &five_hundred), &mut backend)
        .is_ok());

    let too_long = "x".repeat(501);
    let result = catalog.add(&draft("Watch", "1000", "watch", &too_long), &mut backend);
    assert!(matches!(result, Err(Error::InvalidDraft(_))));
}
