use super::filter::{FilterAction, FilterConfig, SortField, UserSelection, ALL_USERS};
use super::pipeline::apply;
use crate::catalog::{Catalog, Category, EnrichedProduct};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrowseError {
    #[error("No user named \"{0}\"")]
    UnknownUser(String),

    #[error("No category titled \"{0}\"")]
    UnknownCategory(String),
}

/// Holds the catalog and the one mutable filter configuration of a browsing
/// session. Every change recomputes the visible products.
#[derive(Debug)]
pub struct BrowserState {
    catalog: Catalog,
    config: FilterConfig,
}

impl BrowserState {
    pub fn new(catalog: Catalog) -> Self {
        BrowserState {
            catalog,
            config: FilterConfig::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Only users and categories the catalog knows about can be selected,
    /// like the tabs and buttons of the filter panel.
    fn check(&self, action: &FilterAction) -> Result<(), BrowseError> {
        match action {
            FilterAction::SelectUser(UserSelection::Named(name)) => {
                if self.catalog.get_user_by_name(name).is_none() {
                    return Err(BrowseError::UnknownUser(name.clone()));
                }
            }
            FilterAction::ToggleCategory(title) => {
                // a stale selection can always be switched off
                let selected = self.config.selected_categories.contains(title);
                if !selected && self.catalog.get_category_by_title(title).is_none() {
                    return Err(BrowseError::UnknownCategory(title.clone()));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Applies `action` and returns the products to display afterwards.
    pub fn dispatch(
        &mut self,
        action: FilterAction,
    ) -> Result<Vec<&EnrichedProduct>, BrowseError> {
        self.check(&action)?;
        debug!("Applying {:?}", action);
        self.config = std::mem::take(&mut self.config).update(action);
        Ok(self.visible())
    }

    pub fn select_user(&mut self, name: &str) -> Result<Vec<&EnrichedProduct>, BrowseError> {
        self.dispatch(FilterAction::SelectUser(UserSelection::from_name(name)))
    }

    pub fn set_query(&mut self, query: &str) -> Result<Vec<&EnrichedProduct>, BrowseError> {
        self.dispatch(FilterAction::SetQuery(query.to_owned()))
    }

    pub fn toggle_category(
        &mut self,
        title: &str,
    ) -> Result<Vec<&EnrichedProduct>, BrowseError> {
        self.dispatch(FilterAction::ToggleCategory(title.to_owned()))
    }

    pub fn sort_by(&mut self, field: SortField) -> Result<Vec<&EnrichedProduct>, BrowseError> {
        self.dispatch(FilterAction::SortBy(field))
    }

    pub fn reset_all(&mut self) -> Vec<&EnrichedProduct> {
        self.config = FilterConfig::default();
        self.visible()
    }

    /// Runs the pipeline over the whole catalog with the current config.
    pub fn visible(&self) -> Vec<&EnrichedProduct> {
        let products = apply(self.catalog.products(), &self.config);
        debug!(
            "Recomputed products: {} of {} visible",
            products.len(),
            self.catalog.get_products_count()
        );
        products
    }

    /// The owner tabs, "All" first, each paired with whether it is active.
    pub fn user_tabs(&self) -> Vec<(&str, bool)> {
        let mut tabs = vec![(ALL_USERS, self.config.selected_user == UserSelection::All)];
        tabs.extend(self.catalog.users().iter().map(|u| {
            let active =
                matches!(&self.config.selected_user, UserSelection::Named(name) if *name == u.name);
            (u.name.as_str(), active)
        }));
        tabs
    }

    /// The category buttons, each paired with whether it is selected.
    pub fn category_buttons(&self) -> Vec<(&Category, bool)> {
        self.catalog
            .categories()
            .iter()
            .map(|c| (c, self.config.selected_categories.contains(&c.title)))
            .collect()
    }
}
