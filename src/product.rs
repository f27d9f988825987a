//! Product record types.

use crate::{error::Result, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Mobile,
    Screen,
    Tablet,
    Watch,
}

impl ProductKind {
    /// All categories, in display order.
    pub const ALL: [ProductKind; 4] = [
        ProductKind::Mobile,
        ProductKind::Screen,
        ProductKind::Tablet,
        ProductKind::Watch,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Mobile => "mobile",
            ProductKind::Screen => "screen",
            ProductKind::Tablet => "tablet",
            ProductKind::Watch => "watch",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = crate::Error;

    /// Case-insensitive parse; leading and trailing whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(ProductKind::Mobile),
            "screen" => Ok(ProductKind::Screen),
            "tablet" => Ok(ProductKind::Tablet),
            "watch" => Ok(ProductKind::Watch),
            other => Err(crate::Error::UnknownKind(other.to_string())),
        }
    }
}

/// A catalog record.
///
/// Records carry a stable synthetic [`ProductId`] assigned at creation time;
/// display position is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, unique within a catalog lifetime
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Price as entered, a plain decimal numeral
    pub price: String,
    /// Category
    #[serde(rename = "type")]
    pub kind: ProductKind,
    /// Free-text description
    pub description: String,
    /// Displayable image URI. Persisted verbatim; a session-scoped object
    /// URL stored here will not resolve after a reload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Build a record from an accepted draft, trimming the text fields.
    ///
    /// Callers run the draft through [`crate::validate::validate_draft`]
    /// first; an unparsable kind still surfaces as an error rather than
    /// panicking.
    pub fn from_draft(id: ProductId, draft: &ProductDraft) -> Result<Self> {
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            price: draft.price.trim().to_string(),
            kind: draft.kind.parse()?,
            description: draft.description.trim().to_string(),
            image: draft.image.clone(),
        })
    }
}

/// Raw form input, before validation.
///
/// Every field is the text the user typed; `kind` is parsed and the rest are
/// trimmed only once the draft is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub kind: String,
    pub description: String,
    /// Displayable URI produced by the host's file conversion, if a file
    /// was supplied.
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("mobile".parse::<ProductKind>().unwrap(), ProductKind::Mobile);
        assert_eq!("WATCH".parse::<ProductKind>().unwrap(), ProductKind::Watch);
        assert_eq!("Tablet".parse::<ProductKind>().unwrap(), ProductKind::Tablet);
        assert_eq!(" screen ".parse::<ProductKind>().unwrap(), ProductKind::Screen);
    }

    #[test]
    fn kind_rejects_unknown() {
        let result = "tv".parse::<ProductKind>();
        assert!(matches!(result, Err(Error::UnknownKind(k)) if k == "tv"));
    }

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(ProductKind::Mobile.to_string(), "mobile");
        assert_eq!(ProductKind::Watch.to_string(), "watch");
    }

    #[test]
    fn from_draft_trims_text_fields() {
        let draft = ProductDraft {
            name: " Phone ".into(),
            price: " 15000 ".into(),
            kind: "MOBILE".into(),
            description: " Good \n".into(),
            image: None,
        };

        let product = Product::from_draft(1, &draft).unwrap();
        assert_eq!(product.name, "Phone");
        assert_eq!(product.price, "15000");
        assert_eq!(product.kind, ProductKind::Mobile);
        assert_eq!(product.description, "Good");
        assert_eq!(product.image, None);
    }

    #[test]
    fn serialization_uses_original_field_names() {
        let product = Product {
            id: 3,
            name: "Phone".into(),
            price: "15000".into(),
            kind: ProductKind::Mobile,
            description: "Good".into(),
            image: None,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "mobile");
        assert_eq!(json["name"], "Phone");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn serialization_roundtrip() {
        let product = Product {
            id: 9,
            name: "Watch".into(),
            price: "2000".into(),
            kind: ProductKind::Watch,
            description: "Water resistant".into(),
            image: Some("blob:session/abc".into()),
        };

        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, parsed);
    }

    #[test]
    fn missing_image_deserializes_as_none() {
        let json = r#"{"id":1,"name":"Phone","price":"15000","type":"mobile","description":"Good"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image, None);
    }
}
