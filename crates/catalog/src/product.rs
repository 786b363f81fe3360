use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Input for building a [`ProductRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub category: String,
    pub image_url: String,
    pub in_stock: bool,
    pub description: String,
}

/// A catalog entry.
///
/// Immutable once built: there are no setters, and the engine hands out
/// shared references only. Only [`ProductRecord::new`] builds one, so the
/// type is serialize-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    price: Money,
    category: String,
    image_url: String,
    #[serde(rename = "isInStock")]
    in_stock: bool,
    description: String,
}

impl ProductRecord {
    /// Validate and build a record.
    pub fn new(input: NewProduct) -> DomainResult<Self> {
        if input.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                input.id
            )));
        }

        if input.category.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: category cannot be empty",
                input.id
            )));
        }

        Ok(Self {
            id: input.id,
            name: input.name,
            price: input.price,
            category: input.category,
            image_url: input.image_url,
            in_stock: input.in_stock,
            description: input.description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive exact category match.
    pub fn in_category(&self, category: &str) -> bool {
        eq_ignore_case(&self.category, category)
    }

    /// Whether the name or description contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}
