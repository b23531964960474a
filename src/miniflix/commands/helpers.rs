use super::{CmdMessage, CmdResult, DisplayItem};
use crate::error::{MiniflixError, Result};
use crate::model::MediaItem;
use crate::session::Session;
use crate::store::MediaStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform selection of up to `n` distinct items, without replacement.
/// Fewer than `n` items means all of them; either way the order is
/// randomized.
pub fn sample_items<R: Rng>(items: &[MediaItem], n: usize, rng: &mut R) -> Vec<MediaItem> {
    let mut picked: Vec<MediaItem> = items.choose_multiple(rng, n).cloned().collect();
    picked.shuffle(rng);
    picked
}

/// Number items 1-based and mark watchlist membership for rendering.
pub fn annotate(items: Vec<MediaItem>, session: &Session) -> Vec<DisplayItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let in_watchlist = session.watchlist.contains(&item.id);
            DisplayItem::new(i + 1, item, in_watchlist)
        })
        .collect()
}

/// Scan the store, degrading to `None` with a warning on the result when
/// the storage location cannot be read. Views render the degraded state
/// instead of failing.
pub fn scan_degraded<S: MediaStore>(
    store: &S,
    result: &mut CmdResult,
) -> Result<Option<Vec<MediaItem>>> {
    match store.scan() {
        Ok(items) => Ok(Some(items)),
        Err(MiniflixError::StorageUnavailable(err)) => {
            result.add_message(CmdMessage::warning(format!("Storage unavailable: {}", err)));
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn items(names: &[&str]) -> Vec<MediaItem> {
        names
            .iter()
            .map(|&n| MediaItem::from_file_name(n, PathBuf::from(n)))
            .collect()
    }

    #[test]
    fn sample_returns_min_of_n_and_catalog_size() {
        let catalog = items(&["a.png", "b.png", "c.png"]);
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(sample_items(&catalog, 2, &mut rng).len(), 2);
        assert_eq!(sample_items(&catalog, 8, &mut rng).len(), 3);
    }

    #[test]
    fn sample_is_distinct_and_drawn_from_the_catalog() {
        let catalog = items(&["a.png", "b.png", "c.png", "d.png", "e.png"]);
        let mut rng = StdRng::seed_from_u64(7);

        let picked = sample_items(&catalog, 4, &mut rng);
        let ids: HashSet<&str> = picked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        for item in &picked {
            assert!(catalog.contains(item));
        }
    }

    #[test]
    fn sample_with_fixed_seed_is_reproducible() {
        let catalog = items(&["a.png", "b.png", "c.png", "d.png", "e.png"]);

        let first = sample_items(&catalog, 3, &mut StdRng::seed_from_u64(42));
        let second = sample_items(&catalog, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn annotate_numbers_from_one_and_marks_watchlist() {
        let mut session = Session::new();
        session.watchlist.add("b.png");

        let listed = annotate(items(&["a.png", "b.png"]), &session);
        assert_eq!(listed[0].index, 1);
        assert!(!listed[0].in_watchlist);
        assert_eq!(listed[1].index, 2);
        assert!(listed[1].in_watchlist);
    }
}
