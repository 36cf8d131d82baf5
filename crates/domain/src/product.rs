//! Product: an inventory item sold at the counter.

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::error::{CarwashError, ValidationError};
use crate::id::ProductId;

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub description: String,
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Overwrite every field except the id.
    pub fn replace_with(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.description = draft.description;
        self.stock = draft.stock;
    }
}

impl Record for Product {
    type Id = ProductId;
    const COLLECTION: Collection = Collection::Products;
    const LABEL: &'static str = "Producto";

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Product fields as submitted on create and full replace.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: u32,
}

impl ProductDraft {
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] when the name is blank or the
    /// price is negative or not finite.
    pub fn validate(&self) -> Result<(), CarwashError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidAmount("price").into());
        }
        Ok(())
    }

    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            stock: self.stock,
        }
    }
}
