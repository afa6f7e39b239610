use super::{Category, EnrichedProduct, Product, SeedData, User};
use std::collections::HashSet;
use thiserror::Error;

/// A data-integrity violation found while joining the seed collections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Problem {
    #[error("Duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: u32 },

    #[error("Product {product_id} references missing category {category_id}")]
    MissingCategory { product_id: u32, category_id: u32 },

    #[error("Category {category_id} references missing owner {owner_id}")]
    MissingOwner { category_id: u32, owner_id: u32 },
}

impl Problem {
    /// Missing references make the join impossible, duplicates only make
    /// lookups resolve to the first record with that id.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Problem::DuplicateId { .. })
    }
}

#[derive(Debug)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
}

#[derive(Debug)]
pub struct CatalogBuildResult {
    pub catalog: Option<Catalog>,
    pub problems: Vec<Problem>,
}

pub fn find_category(categories: &[Category], id: u32) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

pub fn find_user(users: &[User], id: u32) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

#[cfg(not(feature = "no_checks"))]
fn duplicate_ids<I>(entity: &'static str, ids: I) -> Vec<Problem>
where
    I: Iterator<Item = u32>,
{
    let mut seen = HashSet::new();
    ids.filter(|id| !seen.insert(*id))
        .map(|id| Problem::DuplicateId { entity, id })
        .collect()
}

/// Resolves the category and owner of every product, keeping the products
/// order. Every dangling reference is reported, not only the first one.
pub fn join(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Result<Vec<EnrichedProduct>, Vec<Problem>> {
    let mut problems = vec![];
    let mut out = Vec::with_capacity(products.len());

    for product in products {
        let Some(category) = find_category(categories, product.category_id) else {
            problems.push(Problem::MissingCategory {
                product_id: product.id,
                category_id: product.category_id,
            });
            continue;
        };
        // dangling owners are reported once per category below
        let Some(user) = find_user(users, category.owner_id) else {
            continue;
        };
        out.push(EnrichedProduct::new(product, category, user));
    }

    for category in categories {
        if find_user(users, category.owner_id).is_none() {
            problems.push(Problem::MissingOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            });
        }
    }

    if problems.is_empty() {
        Ok(out)
    } else {
        Err(problems)
    }
}

impl Catalog {
    pub fn build(seed: SeedData) -> CatalogBuildResult {
        let mut problems: Vec<Problem> = vec![];

        #[cfg(not(feature = "no_checks"))]
        {
            problems.append(&mut duplicate_ids("user", seed.users.iter().map(|u| u.id)));
            problems.append(&mut duplicate_ids(
                "category",
                seed.categories.iter().map(|c| c.id),
            ));
            problems.append(&mut duplicate_ids(
                "product",
                seed.products.iter().map(|p| p.id),
            ));
        }

        match join(&seed.users, &seed.categories, &seed.products) {
            Ok(products) => CatalogBuildResult {
                catalog: Some(Catalog {
                    users: seed.users,
                    categories: seed.categories,
                    products,
                }),
                problems,
            },
            Err(mut join_problems) => {
                problems.append(&mut join_problems);
                CatalogBuildResult {
                    catalog: None,
                    problems,
                }
            }
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    pub fn get_user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    pub fn get_category_by_title(&self, title: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.title == title)
    }

    pub fn get_users_count(&self) -> usize {
        self.users.len()
    }

    pub fn get_categories_count(&self) -> usize {
        self.categories.len()
    }

    pub fn get_products_count(&self) -> usize {
        self.products.len()
    }
}
