use crate::{Coord, CoordDimensions, CoordNum, CoordSeq};
use std::ops::Index;

/// A path that runs straight from each coordinate to the next.
///
/// This is the all-chords counterpart of a
/// [`CircularString`](crate::CircularString): every consecutive pair of
/// entries in its [`CoordSeq`] is a segment, and it is what the
/// linearizer hands back when a curve is flattened.
///
/// # Semantics
///
/// Closedness means the path returns to where it started, i.e. the first
/// and last coordinates coincide; the empty path is taken to be closed so
/// that it can serve as a degenerate polygon ring. An open `LineString`
/// is bounded by its two end coordinates, a closed one by nothing.
///
/// # Validity
///
/// A meaningful path has zero or at least two coordinates, but nothing is
/// rejected here. Wherever a well-formed section matters, the consuming
/// constructor (e.g. [`CompoundCurve`](crate::CompoundCurve)) performs
/// the check and reports the violation.
///
/// # Examples
///
/// ```
/// use geo_curved_types::LineString;
///
/// let line_string: LineString<f64> = vec![(0., 0.), (10., 0.)].into();
/// assert_eq!(line_string.num_coords(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString<T: CoordNum>(pub CoordSeq<T>);

impl<T: CoordNum> LineString<T> {
    pub fn new(seq: CoordSeq<T>) -> Self {
        LineString(seq)
    }

    pub fn empty(dims: CoordDimensions) -> Self {
        LineString(CoordSeq::new(dims))
    }

    #[inline]
    pub fn coord_seq(&self) -> &CoordSeq<T> {
        &self.0
    }

    pub fn into_inner(self) -> CoordSeq<T> {
        self.0
    }

    /// Return an iterator yielding the coordinates of the path.
    pub fn coords(&self) -> impl DoubleEndedIterator<Item = Coord<T>> + '_ {
        self.0.iter()
    }

    /// Return the number of coordinates in the [`LineString`].
    #[inline]
    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn dims(&self) -> CoordDimensions {
        self.0.dims()
    }

    /// True when the path ends at its own start coordinate, or has no
    /// coordinates at all.
    ///
    /// Treating the empty path as closed keeps ring handling uniform:
    /// there is no separate ring type here, and an empty ring should not
    /// read as an open curve.
    pub fn is_closed(&self) -> bool {
        self.0.first() == self.0.last()
    }

    /// Close the [`LineString`]: if it is non-empty and its last coordinate
    /// does not equal its first, the first entry is appended.
    pub fn close(&mut self) {
        if !self.is_closed() {
            debug_assert!(!self.0.is_empty());
            self.0.push(self.0.at(0));
        }
    }

    pub fn start_point(&self) -> Option<Coord<T>> {
        self.0.first()
    }

    pub fn end_point(&self) -> Option<Coord<T>> {
        self.0.last()
    }

    /// A new [`LineString`] tracing the same path in the opposite direction.
    pub fn reverse(&self) -> Self {
        LineString(self.0.reversed())
    }

    /// Compare coordinate-by-coordinate, with every ordinate within `tol`.
    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        self.0.equals_exact(&other.0, tol)
    }
}

/// Turn a [`Vec`] of [`Coord`]-like objects into a [`LineString`].
impl<T: CoordNum, IC: Into<Coord<T>>> From<Vec<IC>> for LineString<T> {
    fn from(v: Vec<IC>) -> Self {
        LineString(CoordSeq::from_coords(v))
    }
}

impl<T: CoordNum> From<CoordSeq<T>> for LineString<T> {
    fn from(seq: CoordSeq<T>) -> Self {
        LineString(seq)
    }
}

/// Turn an iterator of [`Coord`]-like objects into a [`LineString`].
impl<T: CoordNum, IC: Into<Coord<T>>> FromIterator<IC> for LineString<T> {
    fn from_iter<I: IntoIterator<Item = IC>>(iter: I) -> Self {
        LineString(CoordSeq::from_coords(iter))
    }
}

impl<T: CoordNum> Index<usize> for LineString<T> {
    type Output = Coord<T>;

    fn index(&self, index: usize) -> &Coord<T> {
        self.0.index(index)
    }
}
