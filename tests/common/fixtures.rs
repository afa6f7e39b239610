use catalog_browser::catalog::{Catalog, Category, Product, SeedData, Sex, User};
use std::path::Path;

pub const ROMA: &str = "Roma";
pub const ANNA: &str = "Anna";
pub const FRUITS: &str = "Fruits";
pub const VEG: &str = "Veg";

pub fn user(id: u32, name: &str, sex: Sex) -> User {
    User {
        id,
        name: name.to_string(),
        sex,
    }
}

pub fn category(id: u32, title: &str, icon: &str, owner_id: u32) -> Category {
    Category {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id,
    }
}

pub fn product(id: u32, name: &str, category_id: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        category_id,
    }
}

/// One user, one category, "apple" and "Banana".
pub fn fruit_seed() -> SeedData {
    SeedData {
        users: vec![user(1, ROMA, Sex::M)],
        categories: vec![category(10, FRUITS, "🍎", 1)],
        products: vec![product(100, "apple", 10), product(101, "Banana", 10)],
    }
}

/// Two owners, a "Veg" category nobody sells in and a few products with
/// clashing names to exercise sort stability.
pub fn market_seed() -> SeedData {
    SeedData {
        users: vec![user(1, ROMA, Sex::M), user(2, ANNA, Sex::F)],
        categories: vec![
            category(10, FRUITS, "🍎", 1),
            category(11, VEG, "🥕", 2),
            category(12, "Drinks", "🍺", 2),
        ],
        products: vec![
            product(5, "Pear", 10),
            product(3, "cherry", 10),
            product(8, "Milk", 12),
            product(1, "pear", 10),
            product(2, "Apple juice", 12),
            product(7, "Cherry", 12),
        ],
    }
}

pub fn build(seed: SeedData) -> Catalog {
    Catalog::build(seed).catalog.expect("fixture catalog should build")
}

pub fn write_seed_dir(dir: &Path, seed: &SeedData) {
    std::fs::write(
        dir.join("users.json"),
        serde_json::to_string_pretty(&seed.users).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("categories.json"),
        serde_json::to_string_pretty(&seed.categories).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("products.json"),
        serde_json::to_string_pretty(&seed.products).unwrap(),
    )
    .unwrap();
}
