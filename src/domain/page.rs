//! Page selection over an ordered result set.
//!
//! Pages are 1-based and hold at most [`QUESTIONS_PER_PAGE`] items. Slicing
//! happens in process, after the full ordered selection has been loaded.

/// Fixed page size for every paginated question listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page index.
///
/// Indices below 1 are kept as-is and select nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(number: i64) -> Self {
        Self(number)
    }

    /// Parses a raw `page` query value, falling back to the first page when
    /// the value is absent or not an integer.
    #[must_use]
    pub fn parse_or_first(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map_or(Self::FIRST, Self)
    }

    #[must_use]
    pub const fn number(self) -> i64 {
        self.0
    }

    /// Returns the `[start, end)` bounds of this page, or `None` for indices
    /// below 1 and offsets that do not fit in `usize`.
    #[must_use]
    pub fn bounds(self) -> Option<(usize, usize)> {
        let index = usize::try_from(self.0.checked_sub(1)?).ok()?;
        let start = index.checked_mul(QUESTIONS_PER_PAGE)?;
        Some((start, start.saturating_add(QUESTIONS_PER_PAGE)))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Returns the items on `page`, cloned out of the full ordered selection.
///
/// A page past the end of `items` is empty.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    let Some((start, end)) = page.bounds() else {
        return Vec::new();
    };

    if start >= items.len() {
        return Vec::new();
    }

    items[start..end.min(items.len())].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 1)]
    #[case(Some("3"), 3)]
    #[case(Some(" 2 "), 2)]
    #[case(Some("abc"), 1)]
    #[case(Some(""), 1)]
    #[case(Some("0"), 0)]
    #[case(Some("-4"), -4)]
    fn test_parse_or_first(#[case] raw: Option<&str>, #[case] expected: i64) {
        assert_eq!(Page::parse_or_first(raw).number(), expected);
    }

    #[rstest]
    #[case(1, Some((0, 10)))]
    #[case(2, Some((10, 20)))]
    #[case(0, None)]
    #[case(-1, None)]
    fn test_bounds(#[case] number: i64, #[case] expected: Option<(usize, usize)>) {
        assert_eq!(Page::new(number).bounds(), expected);
    }

    #[rstest]
    fn test_paginate_first_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, Page::FIRST), (1..=10).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_paginate_partial_last_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(
            paginate(&items, Page::new(3)),
            (21..=25).collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[case(4)]
    #[case(10_000)]
    #[case(0)]
    #[case(-2)]
    #[case(i64::MAX)]
    fn test_paginate_out_of_range_is_empty(#[case] number: i64) {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(&items, Page::new(number)).is_empty());
    }

    #[rstest]
    fn test_paginate_empty_selection() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, Page::FIRST).is_empty());
    }
}
