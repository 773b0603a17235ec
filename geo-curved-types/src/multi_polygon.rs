use crate::{CoordNum, Polygon};

/// Zero or more [`Polygon`]s bundled into one geometry.
///
/// Produced when a [`MultiSurface`](crate::MultiSurface) is linearized,
/// one member per curve polygon. The wrapped `Vec` is public and can be
/// built directly or `collect`ed from an iterator of polygons.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon<T: CoordNum>(pub Vec<Polygon<T>>);

impl<T: CoordNum> MultiPolygon<T> {
    pub fn new(value: Vec<Polygon<T>>) -> Self {
        MultiPolygon(value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Polygon::is_empty)
    }

    pub fn num_coords(&self) -> usize {
        self.0.iter().map(Polygon::num_coords).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Polygon<T>> {
        self.0.iter()
    }

    pub fn reverse(&self) -> Self {
        MultiPolygon(self.0.iter().map(Polygon::reverse).collect())
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

impl<T: CoordNum, IP: Into<Polygon<T>>> FromIterator<IP> for MultiPolygon<T> {
    fn from_iter<I: IntoIterator<Item = IP>>(iter: I) -> Self {
        MultiPolygon(iter.into_iter().map(|p| p.into()).collect())
    }
}

impl<T: CoordNum> IntoIterator for MultiPolygon<T> {
    type Item = Polygon<T>;
    type IntoIter = ::std::vec::IntoIter<Polygon<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: CoordNum> IntoIterator for &'a MultiPolygon<T> {
    type Item = &'a Polygon<T>;
    type IntoIter = ::std::slice::Iter<'a, Polygon<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
