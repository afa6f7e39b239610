mod collate;
mod filter;
mod pipeline;
mod state;

pub use collate::locale_cmp;
pub use filter::{
    FilterAction, FilterConfig, SortField, UnknownSortField, UserSelection, ALL_USERS,
};
pub use pipeline::apply;
pub use state::{BrowseError, BrowserState};
