//! Token intervals and interval sets.
//!
//! An `IntervalSet` is an ordered, coalesced list of closed integer
//! intervals over token types (or code points, for lexer charsets).
//! This is the set algebra under lookahead classification: disjointness
//! is a pairwise intersection test, and the "expecting" set in error
//! messages is a union.
//!
//! Storage is a `SmallVec` because most lookahead sets hold one or two
//! intervals; no allocation happens on that path.

use std::fmt;

use smallvec::SmallVec;


/// A closed interval `[a, b]` over token types or code points.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Interval {
    pub a: i32,
    pub b: i32,
}

impl Interval {
    /// Create the interval `[a, b]`.
    ///
    /// # Panics
    /// Panics in debug builds if `a > b`; reversed ranges are rejected
    /// by the charset parser before an `Interval` is ever built.
    #[inline]
    pub fn new(a: i32, b: i32) -> Self {
        debug_assert!(a <= b, "reversed interval [{a}, {b}]");
        Interval { a, b }
    }

    /// Interval holding a single value.
    #[inline]
    pub const fn single(v: i32) -> Self {
        Interval { a: v, b: v }
    }

    /// Number of values in the interval.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.b.abs_diff(self.a) + 1
    }

    /// Closed intervals are never empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Check whether `v` falls inside the interval.
    #[inline]
    pub const fn contains(&self, v: i32) -> bool {
        self.a <= v && v <= self.b
    }

    /// Check whether two intervals share at least one value.
    #[inline]
    pub const fn intersects(&self, other: &Interval) -> bool {
        self.a <= other.b && other.a <= self.b
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == self.b {
            write!(f, "{}", self.a)
        } else {
            write!(f, "{}..{}", self.a, self.b)
        }
    }
}

/// An ordered set of integers stored as sorted, coalesced closed
/// intervals.
///
/// Invariants (maintained by every mutating operation):
/// - intervals are sorted by lower bound
/// - no two stored intervals overlap or touch (they would have been
///   merged)
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct IntervalSet {
    intervals: SmallVec<[Interval; 2]>,
}

impl IntervalSet {
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        IntervalSet::default()
    }

    /// Create a set holding a single value.
    pub fn of(v: i32) -> Self {
        let mut set = IntervalSet::new();
        set.add(v);
        set
    }

    /// Create a set holding the closed range `[a, b]`.
    pub fn of_range(a: i32, b: i32) -> Self {
        let mut set = IntervalSet::new();
        set.add_range(a, b);
        set
    }

    /// Add a single value.
    #[inline]
    pub fn add(&mut self, v: i32) {
        self.add_range(v, v);
    }

    /// Add the closed range `[a, b]`, merging with any intervals it
    /// overlaps or touches.
    ///
    /// # Panics
    /// Panics in debug builds if `a > b`.
    pub fn add_range(&mut self, a: i32, b: i32) {
        let mut merged = Interval::new(a, b);
        let old = std::mem::take(&mut self.intervals);
        let mut placed = false;
        for iv in old {
            if placed || iv.b.saturating_add(1) < merged.a {
                // entirely before the new interval, or already placed
                self.intervals.push(iv);
            } else if merged.b.saturating_add(1) < iv.a {
                // first interval entirely after: emit the merged one
                self.intervals.push(merged);
                self.intervals.push(iv);
                placed = true;
            } else {
                merged.a = merged.a.min(iv.a);
                merged.b = merged.b.max(iv.b);
            }
        }
        if !placed {
            self.intervals.push(merged);
        }
    }

    /// Union `other` into this set.
    pub fn union_with(&mut self, other: &IntervalSet) {
        for iv in &other.intervals {
            self.add_range(iv.a, iv.b);
        }
    }

    /// Union of two sets.
    #[must_use]
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        let mut out = self.clone();
        out.union_with(other);
        out
    }

    /// Check whether the two sets share at least one value.
    ///
    /// Linear two-pointer walk over both sorted interval lists.
    pub fn intersects(&self, other: &IntervalSet) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < self.intervals.len() && j < other.intervals.len() {
            let (x, y) = (&self.intervals[i], &other.intervals[j]);
            if x.intersects(y) {
                return true;
            }
            if x.b < y.b {
                i += 1;
            } else {
                j += 1;
            }
        }
        false
    }

    /// Intersection of two sets.
    #[must_use]
    pub fn intersection(&self, other: &IntervalSet) -> IntervalSet {
        let mut out = IntervalSet::new();
        let (mut i, mut j) = (0, 0);
        while i < self.intervals.len() && j < other.intervals.len() {
            let (x, y) = (&self.intervals[i], &other.intervals[j]);
            if x.intersects(y) {
                out.add_range(x.a.max(y.a), x.b.min(y.b));
            }
            if x.b < y.b {
                i += 1;
            } else {
                j += 1;
            }
        }
        out
    }

    /// Complement of this set within `[min, max]`.
    ///
    /// Used for negated lexer sets (`~(...)`), where the universe is
    /// the full code point range.
    #[must_use]
    pub fn complement(&self, min: i32, max: i32) -> IntervalSet {
        let mut out = IntervalSet::new();
        let mut next = min;
        for iv in &self.intervals {
            if iv.b < min {
                continue;
            }
            if iv.a > max {
                break;
            }
            if iv.a > next {
                out.add_range(next, iv.a - 1);
            }
            next = match iv.b.checked_add(1) {
                Some(n) => n,
                None => return out,
            };
        }
        if next <= max {
            out.add_range(next, max);
        }
        out
    }

    /// Check whether `v` is in the set.
    pub fn contains(&self, v: i32) -> bool {
        self.intervals
            .binary_search_by(|iv| {
                if v < iv.a {
                    std::cmp::Ordering::Greater
                } else if v > iv.b {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Check whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of values in the set.
    pub fn len(&self) -> u64 {
        self.intervals.iter().map(|iv| u64::from(iv.len())).sum()
    }

    /// The stored intervals, sorted and coalesced.
    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterate over every value in the set, ascending.
    ///
    /// Only suitable for token-type sets; code point sets can span
    /// millions of values.
    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.intervals.iter().flat_map(|iv| iv.a..=iv.b)
    }
}

impl fmt::Display for IntervalSet {
    /// Prints as `{}` for the empty set, `{65..90, 97}` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{iv}")?;
        }
        write!(f, "}}")
    }
}
