use crate::{CoordNum, LineString};

/// Zero or more [`LineString`]s bundled into one geometry.
///
/// This is the linear shape a [`MultiCurve`](crate::MultiCurve)
/// linearizes to, with one member per input curve. The wrapped `Vec` is
/// public; build it directly, `collect` it from an iterator of line
/// strings, or convert a single one with `From`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineString<T: CoordNum>(pub Vec<LineString<T>>);

impl<T: CoordNum> MultiLineString<T> {
    pub fn new(value: Vec<LineString<T>>) -> Self {
        MultiLineString(value)
    }

    /// True when every member is closed (see [`LineString::is_closed`]);
    /// vacuously true for an empty collection.
    pub fn is_closed(&self) -> bool {
        self.0.iter().all(LineString::is_closed)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(LineString::is_empty)
    }

    pub fn num_coords(&self) -> usize {
        self.0.iter().map(LineString::num_coords).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineString<T>> {
        self.0.iter()
    }

    pub fn reverse(&self) -> Self {
        MultiLineString(self.0.iter().map(LineString::reverse).collect())
    }

    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| a.equals_exact(b, tol))
    }
}

impl<T: CoordNum, ILS: Into<LineString<T>>> From<ILS> for MultiLineString<T> {
    fn from(ls: ILS) -> Self {
        MultiLineString(vec![ls.into()])
    }
}

impl<T: CoordNum, ILS: Into<LineString<T>>> FromIterator<ILS> for MultiLineString<T> {
    fn from_iter<I: IntoIterator<Item = ILS>>(iter: I) -> Self {
        MultiLineString(iter.into_iter().map(|ls| ls.into()).collect())
    }
}

impl<T: CoordNum> IntoIterator for MultiLineString<T> {
    type Item = LineString<T>;
    type IntoIter = ::std::vec::IntoIter<LineString<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: CoordNum> IntoIterator for &'a MultiLineString<T> {
    type Item = &'a LineString<T>;
    type IntoIter = ::std::slice::Iter<'a, LineString<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
