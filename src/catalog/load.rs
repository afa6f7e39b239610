use super::{Catalog, LoadCatalogProblem, SeedData, SeedError, SeedSource};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// Only the problems that made the join impossible.
    #[error("Could not build the catalog, found {} problems", .0.len())]
    Integrity(Vec<LoadCatalogProblem>),
}

/// Reads the seed, joins it and logs whatever went wrong along the way.
pub fn load_catalog(source: &SeedSource) -> Result<Catalog, CatalogError> {
    match source {
        SeedSource::Builtin => info!("Loading built-in catalog..."),
        SeedSource::Dir(dir) => info!("Loading catalog at {}...", dir.display()),
    }
    let seed = SeedData::read(source)?;
    let catalog_result = Catalog::build(seed);
    let problems = catalog_result.problems;
    let catalog = catalog_result.catalog;

    if !problems.is_empty() {
        warn!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            if problem.is_fatal() {
                warn!("- {}", problem);
            } else {
                warn!("- {} (ignored)", problem);
            }
        }
    }

    match (&catalog, problems.is_empty()) {
        (Some(_), true) => info!("Catalog checked, no issues found."),
        (Some(_), false) => warn!(
            "Catalog was built, but check the {} non-fatal issues above.",
            problems.len()
        ),
        (None, _) => warn!(
            "Check the {} problems above, the catalog could not be initialized.",
            problems.len()
        ),
    }

    match catalog {
        Some(catalog) => {
            info!(
                "Catalog has: {} users, {} categories, {} products",
                catalog.get_users_count(),
                catalog.get_categories_count(),
                catalog.get_products_count()
            );
            Ok(catalog)
        }
        None => Err(CatalogError::Integrity(
            problems.into_iter().filter(|p| p.is_fatal()).collect(),
        )),
    }
}
