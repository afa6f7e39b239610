use super::{Category, User};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
}

/// A product with its category and the category's owner resolved and
/// embedded by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    pub fn new(product: &Product, category: &Category, user: &User) -> Self {
        EnrichedProduct {
            id: product.id,
            name: product.name.clone(),
            category: category.clone(),
            user: user.clone(),
        }
    }
}
