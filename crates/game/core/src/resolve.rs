//! Player input → item resolution.
//!
//! Accepts `keyword` or `N.keyword` (the N-th match, 1-based). A keyword
//! matches an item when it prefixes one of the item's keywords, ignoring case,
//! or equals its entity reference exactly.

use crate::state::{Item, ItemId};

/// Finds the item `input` refers to among `items`, in iteration order.
pub fn resolve<'i, I>(input: &str, items: I) -> Option<ItemId>
where
    I: IntoIterator<Item = &'i Item>,
{
    let (nth, search) = parse_dot(input)?;

    items
        .into_iter()
        .filter(|item| item.entity_ref == search || item.matches_keyword(search))
        .nth(nth - 1)
        .map(|item| item.id)
}

/// Splits `2.potion` into `(2, "potion")`; plain input selects the first match.
fn parse_dot(input: &str) -> Option<(usize, &str)> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let Some((prefix, rest)) = input.split_once('.') else {
        return Some((1, input));
    };

    match prefix.parse::<usize>() {
        Ok(nth) if nth > 0 && !rest.trim().is_empty() => Some((nth, rest.trim())),
        Ok(_) => None,
        Err(_) => Some((1, input)),
    }
}
