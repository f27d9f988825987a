//! Non-mutating catalog search.

use crate::product::Product;

/// Case-insensitive substring filter over name, price, type, and
/// description.
///
/// Returns references into the given slice; the catalog itself is never
/// touched. A blank or whitespace-only term means "no filter": every record
/// is returned, and the host should render the result with interactive
/// controls again.
pub fn filter<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return products.iter().collect();
    }
    products.iter().filter(|p| matches_term(p, &term)).collect()
}

/// `term` must already be lowercased.
fn matches_term(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(term)
        || product.price.to_lowercase().contains(term)
        || product.kind.as_str().contains(term)
        || product.description.to_lowercase().contains(term)
}
