// SPDX-License-Identifier: MPL-2.0
//! Carousel navigation: the record list and the current-slide index.
//!
//! This is the single source of truth for where the user is in the loaded
//! page. The index stays inside `[0, len - 1]`; moves past either end are
//! no-ops, there is no wrap-around, and no move ever triggers a re-fetch.

use crate::feed::ImageRecord;

/// Manages navigation through the loaded list of image records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Carousel {
    records: Vec<ImageRecord>,
    current: usize,
}

impl Carousel {
    /// Creates a new empty carousel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the record list and resets the index to the first slide.
    pub fn load(&mut self, records: Vec<ImageRecord>) {
        self.records = records;
        self.current = 0;
    }

    /// Returns the record at the current index, if the list is non-empty.
    #[must_use]
    pub fn current(&self) -> Option<&ImageRecord> {
        self.records.get(self.current)
    }

    /// Returns the current index. Stays 0 while the list is empty.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the loaded records in server order.
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Returns the total number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if no records are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks if the current slide is the first. Also true when empty,
    /// since no backward move is possible.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current == 0
    }

    /// Checks if the current slide is the last. Also true when empty,
    /// since no forward move is possible.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.records.len() <= self.current + 1
    }

    /// Advances to the next slide. No-op at the last slide.
    ///
    /// Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if self.is_at_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Steps back to the previous slide. No-op at the first slide.
    ///
    /// Returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        if self.is_at_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jumps directly to the given index. Out-of-range input is ignored.
    ///
    /// Returns whether the index changed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.records.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records(count: usize) -> Vec<ImageRecord> {
        (0..count)
            .map(|i| ImageRecord {
                id: i.to_string(),
                download_url: format!("https://example.com/{i}.jpg"),
                author: None,
            })
            .collect()
    }

    fn loaded_carousel(count: usize) -> Carousel {
        let mut carousel = Carousel::new();
        carousel.load(sample_records(count));
        carousel
    }

    #[test]
    fn new_carousel_is_empty() {
        let carousel = Carousel::new();
        assert!(carousel.is_empty());
        assert_eq!(carousel.len(), 0);
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn load_resets_index_to_first_slide() {
        let mut carousel = loaded_carousel(5);
        carousel.jump_to(3);

        carousel.load(sample_records(2));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.len(), 2);
    }

    #[test]
    fn next_advances_and_previous_returns() {
        let mut carousel = loaded_carousel(5);

        assert!(carousel.next());
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.previous());
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn previous_then_next_restores_interior_index() {
        let mut carousel = loaded_carousel(5);
        carousel.jump_to(2);

        assert!(carousel.previous());
        assert!(carousel.next());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn next_at_last_slide_is_a_no_op() {
        let mut carousel = loaded_carousel(3);
        carousel.jump_to(2);

        assert!(!carousel.next());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn previous_at_first_slide_is_a_no_op() {
        let mut carousel = loaded_carousel(3);

        assert!(!carousel.previous());
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn jump_to_sets_index_regardless_of_prior_value() {
        let mut carousel = loaded_carousel(5);

        assert!(carousel.jump_to(4));
        assert_eq!(carousel.current_index(), 4);
        assert!(carousel.jump_to(1));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn jump_to_out_of_range_is_ignored() {
        let mut carousel = loaded_carousel(3);
        carousel.jump_to(1);

        assert!(!carousel.jump_to(3));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn boundaries_are_detected() {
        let mut carousel = loaded_carousel(3);
        assert!(carousel.is_at_first());
        assert!(!carousel.is_at_last());

        carousel.next();
        assert!(!carousel.is_at_first());
        assert!(!carousel.is_at_last());

        carousel.next();
        assert!(!carousel.is_at_first());
        assert!(carousel.is_at_last());
    }

    #[test]
    fn single_slide_is_both_first_and_last() {
        let carousel = loaded_carousel(1);
        assert!(carousel.is_at_first());
        assert!(carousel.is_at_last());
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut carousel = Carousel::new();
        assert!(!carousel.next());
        assert!(!carousel.previous());
        assert!(!carousel.jump_to(0));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_at_first());
        assert!(carousel.is_at_last());
    }

    #[test]
    fn current_follows_the_index() {
        let mut carousel = loaded_carousel(3);
        carousel.next();
        assert_eq!(carousel.current().map(|r| r.id.as_str()), Some("1"));
    }
}
