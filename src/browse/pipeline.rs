use super::collate::locale_cmp;
use super::filter::{FilterConfig, SortField, UserSelection};
use crate::catalog::EnrichedProduct;

fn compare(field: SortField, a: &EnrichedProduct, b: &EnrichedProduct) -> std::cmp::Ordering {
    match field {
        SortField::None => std::cmp::Ordering::Equal,
        SortField::Id => a.id.cmp(&b.id),
        SortField::Product => locale_cmp(&a.name, &b.name),
        SortField::Category => locale_cmp(&a.category.title, &b.category.title),
        SortField::User => locale_cmp(&a.user.name, &b.user.name),
    }
}

/// Narrows and orders `products` for display. Filters run in a fixed order
/// (owner, name, category) and each one is skipped at its neutral value; the
/// sort is stable, so equal keys keep their filtered order.
pub fn apply<'a>(
    products: &'a [EnrichedProduct],
    config: &FilterConfig,
) -> Vec<&'a EnrichedProduct> {
    let mut out: Vec<&EnrichedProduct> = products.iter().collect();

    if let UserSelection::Named(user_name) = &config.selected_user {
        out.retain(|p| &p.user.name == user_name);
    }

    if !config.query_name.is_empty() {
        let query = config.query_name.to_lowercase();
        out.retain(|p| p.name.to_lowercase().contains(&query));
    }

    if !config.selected_categories.is_empty() {
        out.retain(|p| config.selected_categories.contains(&p.category.title));
    }

    if config.sort_field != SortField::None {
        // slice::sort_by is stable
        out.sort_by(|a, b| compare(config.sort_field, a, b));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::FilterAction;
    use crate::catalog::{join, Category, Product, Sex, User};

    fn fixture() -> Vec<EnrichedProduct> {
        let users = vec![
            User {
                id: 1,
                name: "Roma".to_string(),
                sex: Sex::M,
            },
            User {
                id: 2,
                name: "Anna".to_string(),
                sex: Sex::F,
            },
        ];
        let categories = vec![
            Category {
                id: 10,
                title: "Fruits".to_string(),
                icon: "🍎".to_string(),
                owner_id: 1,
            },
            Category {
                id: 11,
                title: "Drinks".to_string(),
                icon: "🍺".to_string(),
                owner_id: 2,
            },
            Category {
                id: 12,
                title: "Veg".to_string(),
                icon: "🥕".to_string(),
                owner_id: 2,
            },
        ];
        let products = [
            (100, "apple", 10),
            (101, "Banana", 10),
            (102, "Milk", 11),
            (103, "banana juice", 11),
            (104, "Apple", 10),
        ]
        .into_iter()
        .map(|(id, name, category_id)| Product {
            id,
            name: name.to_string(),
            category_id,
        })
        .collect::<Vec<_>>();
        join(&users, &categories, &products).unwrap()
    }

    fn ids(products: &[&EnrichedProduct]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    fn config(actions: Vec<FilterAction>) -> FilterConfig {
        actions
            .into_iter()
            .fold(FilterConfig::default(), FilterConfig::update)
    }

    #[test]
    fn neutral_config_is_identity() {
        let products = fixture();
        let result = apply(&products, &FilterConfig::default());
        assert_eq!(ids(&result), vec![100, 101, 102, 103, 104]);
    }

    #[test]
    fn filters_by_user_name() {
        let products = fixture();
        let config = config(vec![FilterAction::SelectUser(UserSelection::from_name(
            "Anna",
        ))]);
        let result = apply(&products, &config);
        assert_eq!(ids(&result), vec![102, 103]);
        assert!(result.iter().all(|p| p.user.name == "Anna"));
    }

    #[test]
    fn unknown_user_matches_nothing() {
        let products = fixture();
        let config = config(vec![FilterAction::SelectUser(UserSelection::from_name(
            "Max",
        ))]);
        assert!(apply(&products, &config).is_empty());
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let products = fixture();
        let config = config(vec![FilterAction::SetQuery("AN".to_string())]);
        assert_eq!(ids(&apply(&products, &config)), vec![101, 103]);
    }

    #[test]
    fn keeps_only_selected_categories() {
        let products = fixture();
        let config = config(vec![
            FilterAction::ToggleCategory("Drinks".to_string()),
            FilterAction::ToggleCategory("Veg".to_string()),
        ]);
        assert_eq!(ids(&apply(&products, &config)), vec![102, 103]);
    }

    #[test]
    fn filters_compose() {
        let products = fixture();
        let config = config(vec![
            FilterAction::SelectUser(UserSelection::from_name("Roma")),
            FilterAction::SetQuery("a".to_string()),
            FilterAction::ToggleCategory("Fruits".to_string()),
            FilterAction::SortBy(SortField::Id),
        ]);
        assert_eq!(ids(&apply(&products, &config)), vec![100, 101, 104]);
    }

    #[test]
    fn sorts_by_id() {
        let mut products = fixture();
        products.reverse();
        let config = config(vec![FilterAction::SortBy(SortField::Id)]);
        assert_eq!(ids(&apply(&products, &config)), vec![100, 101, 102, 103, 104]);
    }

    #[test]
    fn sorts_by_name_with_locale_order() {
        let products = fixture();
        let config = config(vec![FilterAction::SortBy(SortField::Product)]);
        // "apple" before "Apple" since lowercase wins ties
        assert_eq!(ids(&apply(&products, &config)), vec![100, 104, 101, 103, 102]);
    }

    #[test]
    fn category_sort_is_stable() {
        let products = fixture();
        let config = config(vec![FilterAction::SortBy(SortField::Category)]);
        // Drinks: 102, 103 then Fruits: 100, 101, 104, each in input order
        assert_eq!(ids(&apply(&products, &config)), vec![102, 103, 100, 101, 104]);
    }

    #[test]
    fn user_sort_is_stable() {
        let products = fixture();
        let config = config(vec![FilterAction::SortBy(SortField::User)]);
        assert_eq!(ids(&apply(&products, &config)), vec![102, 103, 100, 101, 104]);
    }

    #[test]
    fn does_not_touch_input() {
        let products = fixture();
        let before = products.clone();
        let config = config(vec![
            FilterAction::SetQuery("a".to_string()),
            FilterAction::SortBy(SortField::Product),
        ]);
        let _ = apply(&products, &config);
        assert_eq!(products, before);
    }
}
