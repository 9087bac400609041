use std::iter::FusedIterator;
use std::ops::Range;

/// Lazily yields the maximal runs of a slice as half-open index ranges.
///
/// The comparator is only ever applied to index-adjacent pairs, so a run is
/// not checked for transitivity across its whole length. Comparators used in
/// practice (style sets, entity keys) are structural equalities and behave.
///
/// Yielded ranges are disjoint, ascending and together cover `0..items.len()`.
#[derive(Debug, Clone)]
pub struct Runs<'a, T, E> {
    items: &'a [T],
    are_equal: E,
    pos: usize,
}

impl<'a, T, E> Runs<'a, T, E>
where
    E: FnMut(&T, &T) -> bool,
{
    pub fn new(items: &'a [T], are_equal: E) -> Self {
        Self {
            items,
            are_equal,
            pos: 0,
        }
    }
}

impl<T, E> Iterator for Runs<'_, T, E>
where
    E: FnMut(&T, &T) -> bool,
{
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        let start = self.pos;
        if start >= items.len() {
            return None;
        }

        let mut end = start + 1;
        while end < items.len() && (self.are_equal)(&items[end - 1], &items[end]) {
            end += 1;
        }

        self.pos = end;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(self.pos);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<T, E> FusedIterator for Runs<'_, T, E> where E: FnMut(&T, &T) -> bool {}

/// Reports every run of `items` whose first element passes `filter`.
///
/// `found` receives `(start, end)` with `end` exclusive. The filter only sees
/// the run's representative (its first element). An empty slice produces no
/// calls.
///
/// ```
/// use richblock_engine::ranges::find_ranges;
///
/// let styles = ["b", "b", "b", "i", "i"];
/// let mut ranges = Vec::new();
/// find_ranges(&styles, |a, b| a == b, |s| *s == "b", |start, end| {
///     ranges.push((start, end));
/// });
/// assert_eq!(ranges, vec![(0, 3)]);
/// ```
pub fn find_ranges<T, E, F, C>(items: &[T], are_equal: E, mut filter: F, mut found: C)
where
    E: FnMut(&T, &T) -> bool,
    F: FnMut(&T) -> bool,
    C: FnMut(usize, usize),
{
    for run in Runs::new(items, are_equal) {
        if filter(&items[run.start]) {
            found(run.start, run.end);
        }
    }
}
