use crate::{Coord, CoordDimensions, CoordNum, CoordSeq, Error};
use std::ops::Index;

/// A sequence of contiguous circular arcs.
///
/// A [`CircularString`] with `k` arcs holds `2k + 1` coordinates; arc `i`
/// is defined by coordinates `2i`, `2i + 1`, and `2i + 2` ("start,
/// intermediate, end"). Consecutive arcs share an endpoint. The
/// intermediate coordinate of each arc must lie on the arc between its
/// endpoints; callers guarantee this.
///
/// # Validity
///
/// The coordinate count must be zero (the empty string) or odd and at
/// least 3. Construction with any other count fails with
/// [`Error::InvalidCoordinateCount`].
///
/// # Examples
///
/// ```
/// use geo_curved_types::CircularString;
///
/// // a single arc: the upper half of the unit circle
/// let cs = CircularString::try_from(vec![(-1.0, 0.0), (0.0, 1.0), (1.0, 0.0)]).unwrap();
/// assert_eq!(cs.num_arcs(), 1);
///
/// assert!(CircularString::try_from(vec![(0.0, 0.0), (1.0, 1.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularString<T: CoordNum>(CoordSeq<T>);

impl<T: CoordNum> CircularString<T> {
    /// Create a [`CircularString`] from a coordinate sequence holding zero
    /// or an odd number (at least 3) of coordinates.
    pub fn new(seq: CoordSeq<T>) -> Result<Self, Error> {
        let n = seq.len();
        if n != 0 && (n < 3 || n % 2 == 0) {
            return Err(Error::InvalidCoordinateCount {
                geometry: "CircularString",
                count: n,
            });
        }
        Ok(CircularString(seq))
    }

    pub fn empty(dims: CoordDimensions) -> Self {
        CircularString(CoordSeq::new(dims))
    }

    #[inline]
    pub fn coord_seq(&self) -> &CoordSeq<T> {
        &self.0
    }

    pub fn into_inner(self) -> CoordSeq<T> {
        self.0
    }

    #[inline]
    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    /// The number of arcs traced by this string.
    pub fn num_arcs(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            (self.0.len() - 1) / 2
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn dims(&self) -> CoordDimensions {
        self.0.dims()
    }

    /// True if the string is empty or ends where it begins.
    pub fn is_closed(&self) -> bool {
        self.0.first() == self.0.last()
    }

    pub fn start_point(&self) -> Option<Coord<T>> {
        self.0.first()
    }

    pub fn end_point(&self) -> Option<Coord<T>> {
        self.0.last()
    }

    /// A new [`CircularString`] tracing the same arcs in the opposite
    /// direction.
    pub fn reverse(&self) -> Self {
        CircularString(self.0.reversed())
    }

    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        self.0.equals_exact(&other.0, tol)
    }
}

impl<T: CoordNum> TryFrom<CoordSeq<T>> for CircularString<T> {
    type Error = Error;

    fn try_from(seq: CoordSeq<T>) -> Result<Self, Error> {
        CircularString::new(seq)
    }
}

impl<T: CoordNum, IC: Into<Coord<T>>> TryFrom<Vec<IC>> for CircularString<T> {
    type Error = Error;

    fn try_from(coords: Vec<IC>) -> Result<Self, Error> {
        CircularString::new(CoordSeq::from_coords(coords))
    }
}

impl<T: CoordNum> Index<usize> for CircularString<T> {
    type Output = Coord<T>;

    fn index(&self, index: usize) -> &Coord<T> {
        self.0.index(index)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vertex_count_validation() {
        let mut coords: Vec<(f64, f64)> = vec![];
        assert!(CircularString::try_from(coords.clone()).is_ok());

        coords.push((0.0, 0.0));
        assert!(CircularString::try_from(coords.clone()).is_err());

        coords.push((1.0, 1.0));
        assert!(CircularString::try_from(coords.clone()).is_err());

        coords.push((2.0, 0.0));
        assert!(CircularString::try_from(coords.clone()).is_ok());

        coords.push((3.0, -1.0));
        assert!(CircularString::try_from(coords.clone()).is_err());

        coords.push((4.0, 0.0));
        let cs = CircularString::try_from(coords).unwrap();
        assert_eq!(cs.num_arcs(), 2);
        assert_eq!(cs.num_coords(), 5);
    }

    #[test]
    fn empty() {
        let cs = CircularString::<f64>::empty(CoordDimensions::xy());
        assert!(cs.is_empty());
        assert_eq!(cs.num_arcs(), 0);
        assert_eq!(cs.num_coords(), 0);
        assert!(cs.start_point().is_none());
    }

    #[test]
    fn reverse() {
        let cs =
            CircularString::try_from(vec![(0., 0.), (1., 1.), (2., 0.), (3., -1.), (4., 0.)])
                .unwrap();
        let rev = cs.reverse();
        assert_eq!(rev[0], Coord { x: 4., y: 0. });
        assert_eq!(rev[4], Coord { x: 0., y: 0. });
        assert_eq!(rev.reverse(), cs);
    }
}
