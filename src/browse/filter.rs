use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The user tab that disables the owner filter.
pub const ALL_USERS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserSelection {
    #[default]
    All,
    Named(String),
}

impl UserSelection {
    pub fn from_name(name: &str) -> UserSelection {
        if name == ALL_USERS {
            UserSelection::All
        } else {
            UserSelection::Named(name.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserSelection::All => ALL_USERS,
            UserSelection::Named(name) => name,
        }
    }
}

/// The table column the products are sorted by. `None` keeps the filtered
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    None,
    Id,
    Product,
    Category,
    User,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown sort column \"{0}\", expected one of ID, Product, Category, User")]
pub struct UnknownSortField(pub String);

impl SortField {
    /// The sortable columns, in table order.
    pub const COLUMNS: [SortField; 4] = [
        SortField::Id,
        SortField::Product,
        SortField::Category,
        SortField::User,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            SortField::None => "",
            SortField::Id => "ID",
            SortField::Product => "Product",
            SortField::Category => "Category",
            SortField::User => "User",
        }
    }

    /// Like `from_str`, but an unrecognized column means no sorting at all.
    pub fn from_column_lossy(s: &str) -> SortField {
        s.parse().unwrap_or(SortField::None)
    }
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(SortField::None);
        }
        SortField::COLUMNS
            .into_iter()
            .find(|f| f.column_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSortField(s.to_owned()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Everything the table is currently narrowed and ordered by. The default
/// value is neutral: it neither filters nor sorts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterConfig {
    pub selected_user: UserSelection,
    /// Case-insensitive substring of the product name, empty for no filter.
    pub query_name: String,
    /// Category titles to keep, empty for no restriction.
    pub selected_categories: BTreeSet<String>,
    pub sort_field: SortField,
}

/// A single user interaction with the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SelectUser(UserSelection),
    SetQuery(String),
    ClearQuery,
    ToggleCategory(String),
    ClearCategories,
    SortBy(SortField),
    ResetAll,
}

impl FilterConfig {
    pub fn is_neutral(&self) -> bool {
        *self == FilterConfig::default()
    }

    /// Returns the configuration after `action`.
    pub fn update(mut self, action: FilterAction) -> FilterConfig {
        match action {
            FilterAction::SelectUser(selection) => self.selected_user = selection,
            FilterAction::SetQuery(query) => self.query_name = query,
            FilterAction::ClearQuery => self.query_name.clear(),
            FilterAction::ToggleCategory(title) => {
                if !self.selected_categories.remove(&title) {
                    self.selected_categories.insert(title);
                }
            }
            FilterAction::ClearCategories => self.selected_categories.clear(),
            FilterAction::SortBy(field) => self.sort_field = field,
            FilterAction::ResetAll => return FilterConfig::default(),
        }
        self
    }
}
