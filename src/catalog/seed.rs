//! Seed collections the catalog is joined from.

use super::{Category, Product, User};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const BUILTIN_USERS: &str = include_str!("../../seed/users.json");
const BUILTIN_CATEGORIES: &str = include_str!("../../seed/categories.json");
const BUILTIN_PRODUCTS: &str = include_str!("../../seed/products.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse {name}: {source}")]
    Json {
        name: String,
        source: serde_json::Error,
    },

    #[error("{0} is not a valid directory.")]
    NotADirectory(PathBuf),
}

/// Where the seed collections come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The seed compiled into the binary.
    Builtin,
    /// A directory holding `users.json`, `categories.json` and `products.json`.
    Dir(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

fn parse<T: DeserializeOwned>(name: &str, text: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(text).map_err(|source| SeedError::Json {
        name: name.to_owned(),
        source,
    })
}

fn read_file<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, SeedError> {
    let path = dir.join(name);
    let text = std::fs::read_to_string(&path).map_err(|source| SeedError::Io {
        path: path.clone(),
        source,
    })?;
    parse(&path.display().to_string(), &text)
}

impl SeedData {
    pub fn builtin() -> Result<SeedData, SeedError> {
        Ok(SeedData {
            users: parse(USERS_FILE, BUILTIN_USERS)?,
            categories: parse(CATEGORIES_FILE, BUILTIN_CATEGORIES)?,
            products: parse(PRODUCTS_FILE, BUILTIN_PRODUCTS)?,
        })
    }

    pub fn from_dir(dir: &Path) -> Result<SeedData, SeedError> {
        if !dir.is_dir() {
            return Err(SeedError::NotADirectory(dir.to_owned()));
        }
        Ok(SeedData {
            users: read_file(dir, USERS_FILE)?,
            categories: read_file(dir, CATEGORIES_FILE)?,
            products: read_file(dir, PRODUCTS_FILE)?,
        })
    }

    pub fn read(source: &SeedSource) -> Result<SeedData, SeedError> {
        match source {
            SeedSource::Builtin => SeedData::builtin(),
            SeedSource::Dir(dir) => SeedData::from_dir(dir),
        }
    }
}
