use crate::{Coord, CoordNum};

/// An axis-aligned envelope, stored as its lower-left and upper-right
/// corner [`Coord`]s.
///
/// This is a result type for bounding-box queries, not a drawable shape:
/// the corners may coincide in one or both dimensions, as happens for the
/// envelope of a single point or of an axis-parallel segment, and no
/// minimum extent is required.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T: CoordNum> {
    min: Coord<T>,
    max: Coord<T>,
}

impl<T: CoordNum> Rect<T> {
    /// Create a new rectangle from two corner coordinates, in any order.
    pub fn new<C: Into<Coord<T>>>(c1: C, c2: C) -> Self {
        let (c1, c2) = (c1.into(), c2.into());
        let (min_x, max_x) = if c1.x < c2.x { (c1.x, c2.x) } else { (c2.x, c1.x) };
        let (min_y, max_y) = if c1.y < c2.y { (c1.y, c2.y) } else { (c2.y, c1.y) };
        Rect {
            min: Coord { x: min_x, y: min_y },
            max: Coord { x: max_x, y: max_y },
        }
    }

    #[inline]
    pub fn min(&self) -> Coord<T> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Coord<T> {
        self.max
    }

    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    /// Grow the rectangle to contain `coord`.
    pub fn expand_to_include(&mut self, coord: Coord<T>) {
        if coord.x < self.min.x {
            self.min.x = coord.x;
        }
        if coord.x > self.max.x {
            self.max.x = coord.x;
        }
        if coord.y < self.min.y {
            self.min.y = coord.y;
        }
        if coord.y > self.max.y {
            self.max.y = coord.y;
        }
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = *self;
        out.expand_to_include(other.min);
        out.expand_to_include(other.max);
        out
    }
}
