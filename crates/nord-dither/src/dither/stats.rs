//! Palette usage counters collected while dithering.

use crate::palette::{PaletteEntry, NORD};

/// How often each palette entry was chosen during one dithering pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DitherStats {
    counts: [usize; NORD.len()],
}

impl DitherStats {
    /// Empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record(&mut self, index: usize) {
        self.counts[index] += 1;
    }

    /// Number of pixels mapped to palette entry `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    pub fn count(&self, index: usize) -> usize {
        self.counts[index]
    }

    /// Total number of pixels processed.
    pub fn pixels(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Entries that were used at least once, with their counts, in palette order.
    pub fn used(&self) -> impl Iterator<Item = (&'static PaletteEntry, usize)> + '_ {
        let palette: &'static [PaletteEntry; 16] = &NORD;
        palette
            .iter()
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    /// Index of the most frequently chosen entry; the earlier entry wins ties.
    /// `None` if no pixel was processed.
    pub fn most_used(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (i, &count) in self.counts.iter().enumerate() {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((i, count));
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = DitherStats::new();
        assert_eq!(stats.pixels(), 0);
        assert_eq!(stats.most_used(), None);
        assert_eq!(stats.used().count(), 0);
    }

    #[test]
    fn test_record_and_query() {
        let mut stats = DitherStats::new();
        stats.record(3);
        stats.record(3);
        stats.record(10);
        assert_eq!(stats.count(3), 2);
        assert_eq!(stats.count(10), 1);
        assert_eq!(stats.pixels(), 3);
        assert_eq!(stats.most_used(), Some(3));

        let used: Vec<&str> = stats.used().map(|(entry, _)| entry.name).collect();
        assert_eq!(used, vec!["nord3", "nord10"]);
    }

    #[test]
    fn test_most_used_tie_prefers_earlier() {
        let mut stats = DitherStats::new();
        stats.record(9);
        stats.record(2);
        assert_eq!(stats.most_used(), Some(2));
    }
}
