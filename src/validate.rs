//! Pure field validation.
//!
//! Each field has a classifier from raw text to a tri-state [`FieldStatus`].
//! The classifiers never touch presentation; the annotation the host applies
//! (mark the input, show or hide the inline message) is derived from the
//! status afterwards. "Empty" is deliberately distinct from "Invalid": a
//! blank field hides its error message without being marked good.

use crate::product::{ProductDraft, ProductKind};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Leading uppercase letter followed by 2 to 7 letters.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z]{2,7}$").unwrap());

/// Plain decimal numeral in [1000, 20000], no sign, no leading zeros.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(1000|[1-9]\d{3}|1\d{4}|20000)$").unwrap());

/// Maximum description length in characters.
const DESCRIPTION_MAX: usize = 500;

/// Tri-state classification of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Blank input: no mark, error message hidden.
    Empty,
    /// Non-blank input that fails the field's rule.
    Invalid,
    Valid,
}

impl FieldStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    /// CSS class the host applies to the input element, if any.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            FieldStatus::Empty => None,
            FieldStatus::Invalid => Some("is-invalid"),
            FieldStatus::Valid => Some("is-valid"),
        }
    }

    /// Whether the inline error message stays hidden for this status.
    pub fn hides_message(self) -> bool {
        !matches!(self, FieldStatus::Invalid)
    }
}

/// Classify a product name: 3 to 8 letters, leading uppercase.
pub fn name_status(text: &str) -> FieldStatus {
    let text = text.trim();
    if text.is_empty() {
        FieldStatus::Empty
    } else if NAME_RE.is_match(text) {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    }
}

/// Classify a price: an integer numeral in [1000, 20000].
pub fn price_status(text: &str) -> FieldStatus {
    let text = text.trim();
    if text.is_empty() {
        FieldStatus::Empty
    } else if PRICE_RE.is_match(text) {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    }
}

/// Classify a product type: case-insensitive member of the fixed set.
pub fn kind_status(text: &str) -> FieldStatus {
    let text = text.trim();
    if text.is_empty() {
        FieldStatus::Empty
    } else if text.parse::<ProductKind>().is_ok() {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    }
}

/// Classify a description: 1 to 500 characters, newlines allowed.
///
/// The length check runs on the raw text (matching what the user typed);
/// only the emptiness check trims.
pub fn description_status(text: &str) -> FieldStatus {
    if text.trim().is_empty() {
        return FieldStatus::Empty;
    }
    if text.chars().count() <= DESCRIPTION_MAX {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    }
}

/// Per-field classification of a whole draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub name: FieldStatus,
    pub price: FieldStatus,
    pub kind: FieldStatus,
    pub description: FieldStatus,
}

impl ValidationReport {
    /// True when every field passed. Gates every create and update.
    pub fn all_valid(&self) -> bool {
        self.name.is_valid()
            && self.price.is_valid()
            && self.kind.is_valid()
            && self.description.is_valid()
    }

    /// Names of the fields that did not pass, in form order.
    pub fn failing_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !self.name.is_valid() {
            fields.push("name");
        }
        if !self.price.is_valid() {
            fields.push("price");
        }
        if !self.kind.is_valid() {
            fields.push("type");
        }
        if !self.description.is_valid() {
            fields.push("description");
        }
        fields
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.failing_fields().join(", "))
    }
}

/// Run all four field classifiers over a draft.
pub fn validate_draft(draft: &ProductDraft) -> ValidationReport {
    ValidationReport {
        name: name_status(&draft.name),
        price: price_status(&draft.price),
        kind: kind_status(&draft.kind),
        description: description_status(&draft.description),
    }
}
