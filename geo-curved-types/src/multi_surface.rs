use crate::{CoordDimensions, CoordNum, CurvePolygon, Error};

/// A collection of [`CurvePolygon`]s.
///
/// All children must share a coordinate dimension profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiSurface<T: CoordNum> {
    polygons: Vec<CurvePolygon<T>>,
}

impl<T: CoordNum> MultiSurface<T> {
    pub fn new(polygons: Vec<CurvePolygon<T>>) -> Result<Self, Error> {
        if let Some(first) = polygons.first() {
            let dims = first.dims();
            for polygon in &polygons[1..] {
                if polygon.dims() != dims {
                    return Err(Error::MismatchedDimensions {
                        expected: dims,
                        found: polygon.dims(),
                    });
                }
            }
        }
        Ok(MultiSurface { polygons })
    }

    pub fn empty() -> Self {
        MultiSurface {
            polygons: Vec::new(),
        }
    }

    pub fn polygons(&self) -> &[CurvePolygon<T>] {
        &self.polygons
    }

    pub fn into_inner(self) -> Vec<CurvePolygon<T>> {
        self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn num_coords(&self) -> usize {
        self.polygons.iter().map(CurvePolygon::num_coords).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(CurvePolygon::is_empty)
    }

    pub fn dims(&self) -> CoordDimensions {
        self.polygons
            .first()
            .map_or_else(CoordDimensions::xy, CurvePolygon::dims)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurvePolygon<T>> {
        self.polygons.iter()
    }

    pub fn reverse(&self) -> Self {
        MultiSurface {
            polygons: self.polygons.iter().map(CurvePolygon::reverse).collect(),
        }
    }

    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        self.polygons.len() == other.polygons.len()
            && self
                .polygons
                .iter()
                .zip(&other.polygons)
                .all(|(a, b)| a.equals_exact(b, tol))
    }
}

impl<'a, T: CoordNum> IntoIterator for &'a MultiSurface<T> {
    type Item = &'a CurvePolygon<T>;
    type IntoIter = ::std::slice::Iter<'a, CurvePolygon<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
