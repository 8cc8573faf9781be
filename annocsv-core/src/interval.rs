//! Character-offset intervals and overlap lookup
//!
//! Annotation spans and text lines are both expressed as half-open
//! `[begin, end)` ranges of character offsets. Lines made only of their
//! terminator never produce zero-width intervals, but annotations may, so a
//! zero-width interval is treated as the single point it sits on.

use std::fmt;

/// A half-open interval `[begin, end)` of character offsets.
///
/// # Invariants
/// `begin <= end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    begin: usize,
    end: usize,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Panics
    ///
    /// Panics if `end < begin`.
    pub fn new(begin: usize, end: usize) -> Self {
        assert!(
            begin <= end,
            "Interval: end ({end}) must not precede begin ({begin})"
        );
        Self { begin, end }
    }

    /// Creates a new interval, or `None` when `end < begin`.
    pub fn try_new(begin: usize, end: usize) -> Option<Self> {
        (begin <= end).then_some(Self { begin, end })
    }

    /// A zero-width interval at `offset`.
    pub fn point(offset: usize) -> Self {
        Self {
            begin: offset,
            end: offset,
        }
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether `offset` lies in `[begin, end)`.
    pub fn contains(&self, offset: usize) -> bool {
        self.begin <= offset && offset < self.end
    }

    /// Overlap test.
    ///
    /// Two non-empty intervals overlap when their intersection is non-empty.
    /// A zero-width interval at `p` overlaps a non-empty interval containing
    /// `p`, and another zero-width interval only at the same `p`.
    pub fn overlaps(&self, other: &Interval) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (false, false) => self.begin < other.end && other.begin < self.end,
            (true, false) => other.contains(self.begin),
            (false, true) => self.contains(other.begin),
            (true, true) => self.begin == other.begin,
        }
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

/// Storage of intervals carrying a payload, queried by overlap.
pub trait OverlapIndex<T> {
    /// Add `interval` with its payload.
    fn insert(&mut self, interval: Interval, payload: T);

    /// Payloads of every stored interval overlapping `query`, in begin order.
    fn overlapping(&self, query: Interval) -> Vec<&T>;

    /// Number of stored intervals.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sorted-array overlap index.
///
/// Entries are kept ordered by interval so a query only scans entries whose
/// begin does not exceed the query end. Per-document interval counts are
/// small, which makes this cheaper than a tree in practice.
#[derive(Debug, Clone)]
pub struct SortedIntervalIndex<T> {
    entries: Vec<(Interval, T)>,
}

impl<T> Default for SortedIntervalIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortedIntervalIndex<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Iterate over all entries in interval order.
    pub fn iter(&self) -> impl Iterator<Item = (&Interval, &T)> {
        self.entries.iter().map(|(interval, payload)| (interval, payload))
    }
}

impl<T> OverlapIndex<T> for SortedIntervalIndex<T> {
    fn insert(&mut self, interval: Interval, payload: T) {
        let position = self.entries.partition_point(|(stored, _)| *stored <= interval);
        self.entries.insert(position, (interval, payload));
    }

    fn overlapping(&self, query: Interval) -> Vec<&T> {
        // nothing past the query end can overlap, whatever its width
        let candidates = self
            .entries
            .partition_point(|(stored, _)| stored.begin() <= query.end());

        self.entries[..candidates]
            .iter()
            .filter(|(stored, _)| stored.overlaps(&query))
            .map(|(_, payload)| payload)
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> FromIterator<(Interval, T)> for SortedIntervalIndex<T> {
    fn from_iter<I: IntoIterator<Item = (Interval, T)>>(iter: I) -> Self {
        let mut entries: Vec<(Interval, T)> = iter.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }
}
