use crate::{CoordDimensions, CoordNum, LineString};

/// An area fenced in by straight-edged rings: one [`LineString`] for the
/// outline, and any number of further `LineString`s cutting holes out of
/// it.
///
/// This is what a [`CurvePolygon`](crate::CurvePolygon) becomes once its
/// arcs are flattened, so it exists mainly as linearizer output. The
/// constructor appends a closing coordinate to any ring that does not
/// already end where it begins; beyond that closedness guarantee nothing
/// is validated, including ring sizes and whether holes actually sit
/// inside the outline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<T: CoordNum> {
    exterior: LineString<T>,
    interiors: Vec<LineString<T>>,
}

impl<T: CoordNum> Polygon<T> {
    /// Create a new `Polygon` with the provided exterior and interior rings.
    /// Rings are closed on construction if they are not closed already.
    pub fn new(mut exterior: LineString<T>, mut interiors: Vec<LineString<T>>) -> Self {
        exterior.close();
        for interior in &mut interiors {
            interior.close();
        }
        Polygon {
            exterior,
            interiors,
        }
    }

    pub fn empty(dims: CoordDimensions) -> Self {
        Polygon {
            exterior: LineString::empty(dims),
            interiors: Vec::new(),
        }
    }

    pub fn exterior(&self) -> &LineString<T> {
        &self.exterior
    }

    pub fn interiors(&self) -> &[LineString<T>] {
        &self.interiors
    }

    /// Consume the `Polygon`, returning the exterior ring and a vector of
    /// the interior rings.
    pub fn into_inner(self) -> (LineString<T>, Vec<LineString<T>>) {
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

    pub fn num_coords(&self) -> usize {
        self.exterior.num_coords()
            + self
                .interiors
                .iter()
                .map(LineString::num_coords)
                .sum::<usize>()
    }

    /// A new `Polygon` with every ring traced in the opposite direction.
    pub fn reverse(&self) -> Self {
        Polygon {
            exterior: self.exterior.reverse(),
            interiors: self.interiors.iter().map(LineString::reverse).collect(),
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rings_are_closed_on_construction() {
        let polygon = Polygon::new(
            LineString::from(vec![(0., 0.), (1., 1.), (1., 0.)]),
            vec![],
        );
        assert!(polygon.exterior().is_closed());
        assert_eq!(polygon.exterior().num_coords(), 4);
    }
}
