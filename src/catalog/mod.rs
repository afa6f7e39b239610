mod catalog;
mod category;
mod load;
mod product;
mod seed;
mod user;

pub use catalog::{
    find_category, find_user, join, Catalog, CatalogBuildResult, Problem as LoadCatalogProblem,
};
pub use category::Category;
pub use load::{load_catalog, CatalogError};
pub use product::{EnrichedProduct, Product};
pub use seed::{SeedData, SeedError, SeedSource};
pub use user::{Sex, User};
