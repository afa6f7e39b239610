//! Locale-aware string ordering for the sortable text columns.
//!
//! Strings compare with the ICU root collation at its default strength, the
//! same ordering a browser's `localeCompare` gives for the `en` locale:
//! punctuation and symbols before digits before letters, case and accents
//! only break ties, ligatures and `ß` expand to their letters. Strings the
//! collator considers equal fall back to code point order so the order is
//! total.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use tracing::warn;

thread_local! {
    static COLLATOR: Option<Collator> = new_collator();
}

fn new_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!("Could not create the collator, sorting by code point: {}", err);
            None
        }
    }
}

/// Compares two strings the way a user reading a sorted table expects.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}
