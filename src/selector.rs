//! Random selection over search results

use crate::models::{Joke, SearchResult};
use rand::seq::SliceRandom;
use rand::Rng;

/// Outcome of picking a joke from a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick<'a> {
    Found(&'a Joke),
    /// Nothing matched the term. Not an error.
    NotFound,
}

/// Number of jokes a pick may land on: the smaller of the reported total
/// and the number actually returned.
///
/// `total_jokes` counts every match while `results` only carries the first
/// page, so the list length caps the range.
pub fn selectable_len(result: &SearchResult) -> usize {
    if result.is_empty() {
        return 0;
    }

    let available = result.jokes.len();
    usize::try_from(result.total_count).map_or(available, |total| total.min(available))
}

/// Uniform pick over the selectable jokes. Every returned joke, including
/// the last, can be chosen.
pub fn pick_random_joke<'a, R: Rng + ?Sized>(result: &'a SearchResult, rng: &mut R) -> Pick<'a> {
    let n = selectable_len(result);

    match result.jokes[..n].choose(rng) {
        Some(joke) => Pick::Found(joke),
        None => Pick::NotFound,
    }
}
