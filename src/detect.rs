//! Decides which freshly extracted listings are worth a notification.

use crate::types::Listing;

/// Selects the noteworthy subset of `current` relative to the previously
/// stored catalog. A listing qualifies when its id was never seen before, or
/// when every stored entry under the same id carries a strictly higher price
/// (a price drop). Equal or increased prices under a known id are "already
/// seen" and stay quiet.
///
/// `threshold` is a price CEILING despite the original flag having been named
/// like a floor: when non-zero, only listings priced strictly below it are
/// kept. Zero means no ceiling.
///
/// Order of `current` is preserved; entries are not deduplicated against each
/// other.
pub fn select_noteworthy(current: &[Listing], previous: &[Listing], threshold: i64) -> Vec<Listing> {
    current
        .iter()
        .filter(|item| is_new_item(item, previous))
        .filter(|item| threshold == 0 || item.price < threshold)
        .cloned()
        .collect()
}

fn is_new_item(item: &Listing, previous: &[Listing]) -> bool {
    !previous
        .iter()
        .any(|old| old.id == item.id && item.price >= old.price)
}
