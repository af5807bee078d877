use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::stable_hash;

/// Fixed product taxonomy.
///
/// Assignment is a pure function of the product id: the id is stable-hashed
/// onto one of the six variants, so the same id lands in the same category
/// on every call without any catalog lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Sports,
    Books,
    Toys,
}

impl Category {
    /// Every category, in assignment-table order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Sports,
        Category::Books,
        Category::Toys,
    ];

    /// Picks the category for a product id.
    pub fn for_product(product_id: &str) -> Category {
        let index = (stable_hash(product_id) % Self::ALL.len() as u64) as usize;
        Self::ALL[index]
    }

    /// Stable display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Toys => "Toys",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
