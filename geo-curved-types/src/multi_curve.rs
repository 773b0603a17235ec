use crate::{CoordDimensions, CoordNum, Curve, Error};

/// A homogeneous collection of [`Curve`]s.
///
/// All children must share a coordinate dimension profile. Iterating over
/// this object yields the component `Curve`s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiCurve<T: CoordNum> {
    curves: Vec<Curve<T>>,
}

impl<T: CoordNum> MultiCurve<T> {
    pub fn new(curves: Vec<Curve<T>>) -> Result<Self, Error> {
        if let Some(first) = curves.first() {
            let dims = first.dims();
            for curve in &curves[1..] {
                if curve.dims() != dims {
                    return Err(Error::MismatchedDimensions {
                        expected: dims,
                        found: curve.dims(),
                    });
                }
            }
        }
        Ok(MultiCurve { curves })
    }

    pub fn empty() -> Self {
        MultiCurve { curves: Vec::new() }
    }

    pub fn curves(&self) -> &[Curve<T>] {
        &self.curves
    }

    pub fn into_inner(self) -> Vec<Curve<T>> {
        self.curves
    }

    pub fn num_curves(&self) -> usize {
        self.curves.len()
    }

    pub fn num_coords(&self) -> usize {
        self.curves.iter().map(Curve::num_coords).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.iter().all(Curve::is_empty)
    }

    pub fn dims(&self) -> CoordDimensions {
        self.curves
            .first()
            .map_or_else(CoordDimensions::xy, Curve::dims)
    }

    /// True iff every element is closed. An empty collection is closed.
    pub fn is_closed(&self) -> bool {
        self.curves.iter().all(Curve::is_closed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Curve<T>> {
        self.curves.iter()
    }

    pub fn reverse(&self) -> Self {
        MultiCurve {
            curves: self.curves.iter().map(Curve::reverse).collect(),
        }
    }

    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        self.curves.len() == other.curves.len()
            && self
                .curves
                .iter()
                .zip(&other.curves)
                .all(|(a, b)| a.equals_exact(b, tol))
    }
}

impl<'a, T: CoordNum> IntoIterator for &'a MultiCurve<T> {
    type Item = &'a Curve<T>;
    type IntoIter = ::std::slice::Iter<'a, Curve<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
