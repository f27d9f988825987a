//! HTML row projection.
//!
//! A pure projection from a record sequence to table-body markup: one `<tr>`
//! per record with a 1-based position number. The host replaces its table
//! body wholesale with the returned string; there is no incremental diffing.

use crate::product::Product;
use html_escape::{encode_double_quoted_attribute, encode_safe};
use std::fmt::Write;

/// Whether row action buttons are live or disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControls {
    /// Edit and delete buttons carrying the record id in `data-id`.
    Interactive,
    /// Disabled buttons with an explanatory tooltip. Filtered views render
    /// this way: their rows are a read-only projection.
    Disabled,
}

/// Render one `<tr>` per record, in order.
///
/// All text fields are escaped (`&`, `<`, `>`, `"`, `'`); the image cell
/// shows `-` when the record has no image.
pub fn render_rows<'a, I>(products: I, controls: RowControls) -> String
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut out = String::new();
    for (index, product) in products.into_iter().enumerate() {
        render_row(&mut out, index + 1, product, controls);
    }
    out
}

fn render_row(out: &mut String, position: usize, product: &Product, controls: RowControls) {
    let _ = write!(
        out,
        "<tr>\
         <td>{position}</td>\
         <td>{name}</td>\
         <td>{price} $</td>\
         <td>{kind}</td>\
         <td>{description}</td>\
         <td>{image}</td>\
         <td>{actions}</td>\
         </tr>",
        name = encode_safe(&product.name),
        price = encode_safe(&product.price),
        kind = product.kind,
        description = encode_safe(&product.description),
        image = image_cell(product),
        actions = action_cell(product, controls),
    );
}

fn image_cell(product: &Product) -> String {
    match &product.image {
        Some(uri) => format!(
            r#"<img src="{}" alt="product" class="product-img">"#,
            encode_double_quoted_attribute(uri)
        ),
        None => "-".to_string(),
    }
}

fn action_cell(product: &Product, controls: RowControls) -> String {
    match controls {
        RowControls::Interactive => format!(
            "<button class=\"edit-btn\" data-id=\"{id}\">Edit</button>\
             <button class=\"delete-btn\" data-id=\"{id}\">Delete</button>",
            id = product.id
        ),
        RowControls::Disabled => concat!(
            "<button class=\"edit-btn\" disabled title=\"Editing is disabled while filtering\">Edit</button>",
            "<button class=\"delete-btn\" disabled title=\"Deleting is disabled while filtering\">Delete</button>"
        )
        .to_string(),
    }
}
