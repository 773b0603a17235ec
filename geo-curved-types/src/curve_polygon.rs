use crate::{CoordDimensions, CoordNum, Curve, Error};

/// A two-dimensional region enclosed by curves.
///
/// Like an ordinary polygon it has one exterior ring and any number of
/// hole rings, but each ring is a [`Curve`]: it may be a plain line
/// string, a run of circular arcs, or a compound path mixing the two, so
/// the region's edges can genuinely bow in and out.
///
/// # Validity
///
/// Every non-empty ring must be closed as a whole path (its first
/// coordinate equals its last in X and Y) and carry at least four
/// coordinates after closure, i.e. at least three distinct path points.
/// All rings must share a coordinate dimension profile. An empty exterior
/// ring constructs the empty polygon.
///
/// # Examples
///
/// ```
/// use geo_curved_types::{CircularString, CurvePolygon};
///
/// let ring =
///     CircularString::try_from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)])
///         .unwrap();
/// let polygon = CurvePolygon::new(ring.into(), vec![]).unwrap();
/// assert!(!polygon.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePolygon<T: CoordNum> {
    exterior: Curve<T>,
    interiors: Vec<Curve<T>>,
}

fn check_ring<T: CoordNum>(ring: &Curve<T>, dims: CoordDimensions) -> Result<(), Error> {
    if ring.is_empty() {
        return Ok(());
    }
    if !ring.is_closed() {
        return Err(Error::UnclosedRing {
            geometry: "CurvePolygon",
        });
    }
    if ring.num_coords() < 4 {
        return Err(Error::InvalidCoordinateCount {
            geometry: "CurvePolygon ring",
            count: ring.num_coords(),
        });
    }
    if ring.dims() != dims {
        return Err(Error::MismatchedDimensions {
            expected: dims,
            found: ring.dims(),
        });
    }
    Ok(())
}

impl<T: CoordNum> CurvePolygon<T> {
    pub fn new(exterior: Curve<T>, interiors: Vec<Curve<T>>) -> Result<Self, Error> {
        let dims = exterior.dims();
        check_ring(&exterior, dims)?;
        for ring in &interiors {
            check_ring(ring, dims)?;
        }
        Ok(CurvePolygon {
            exterior,
            interiors,
        })
    }

    pub fn empty(dims: CoordDimensions) -> Self {
        CurvePolygon {
            exterior: Curve::CircularString(crate::CircularString::empty(dims)),
            interiors: Vec::new(),
        }
    }

    pub fn exterior(&self) -> &Curve<T> {
        &self.exterior
    }

    pub fn interiors(&self) -> &[Curve<T>] {
        &self.interiors
    }

    pub fn into_inner(self) -> (Curve<T>, Vec<Curve<T>>) {
        (self.exterior, self.interiors)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    #[inline]
    pub fn dims(&self) -> CoordDimensions {
        self.exterior.dims()
    }

    pub fn num_interior_rings(&self) -> usize {
        self.interiors.len()
    }

    pub fn num_coords(&self) -> usize {
        self.exterior.num_coords()
            + self.interiors.iter().map(Curve::num_coords).sum::<usize>()
    }

    /// A new polygon with every ring traced in the opposite direction.
    pub fn reverse(&self) -> Self {
        CurvePolygon {
            exterior: self.exterior.reverse(),
            interiors: self.interiors.iter().map(Curve::reverse).collect(),
        }
    }

    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        self.exterior.equals_exact(&other.exterior, tol)
            && self.interiors.len() == other.interiors.len()
            && self
                .interiors
                .iter()
                .zip(&other.interiors)
                .all(|(a, b)| a.equals_exact(b, tol))
    }
}
