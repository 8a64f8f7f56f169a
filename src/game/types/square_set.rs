//! 64-bit membership set over board squares.

use std::ops::{BitAnd, BitOr, Not};

use super::square::Square;

/// A set of squares backed by a 64-bit mask; bit `i` set means square `i`
/// is a member. A plain value type: every operation returns a new set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Create a set containing a single square
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1 << (sq.0 * 8 + sq.1))
    }

    /// Returns true if the set has no members
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of member squares
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is a member
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1 << (sq.0 * 8 + sq.1))) != 0
    }

    /// Returns the set with the square added
    #[inline]
    #[must_use]
    pub const fn with(self, sq: Square) -> Self {
        SquareSet(self.0 | (1 << (sq.0 * 8 + sq.1)))
    }

    /// Returns the set with the square removed
    #[inline]
    #[must_use]
    pub const fn without(self, sq: Square) -> Self {
        SquareSet(self.0 & !(1 << (sq.0 * 8 + sq.1)))
    }

    /// Set union
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        SquareSet(self.0 | other.0)
    }

    /// Set intersection
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        SquareSet(self.0 & other.0)
    }

    /// Members of `self` that are not members of `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        SquareSet(self.0 & !other.0)
    }

    /// The lowest-index member square.
    ///
    /// Precondition: the set is non-empty. Callers must check `is_empty()`
    /// first; the returned value is meaningless for the empty set.
    #[inline]
    #[must_use]
    pub const fn lowest(self) -> Square {
        Square::from_index(self.0.trailing_zeros() as usize)
    }

    /// Iterate members in ascending square-index order
    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Not for SquareSet {
    type Output = SquareSet;

    fn not(self) -> Self {
        SquareSet(!self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SquareSet::EMPTY, |set, sq| set.with(sq))
    }
}

/// Iterator over member squares, lowest index first
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let sq = self.0.lowest();
            self.0 .0 &= self.0 .0 - 1;
            Some(sq)
        }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
