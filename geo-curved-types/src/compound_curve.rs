use crate::{CircularString, Coord, CoordDimensions, CoordNum, CoordSeq, Error, LineString};

/// A section of a [`CompoundCurve`]: a straight path or a circular path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimpleCurve<T: CoordNum> {
    LineString(LineString<T>),
    CircularString(CircularString<T>),
}

impl<T: CoordNum> SimpleCurve<T> {
    pub fn coord_seq(&self) -> &CoordSeq<T> {
        match self {
            SimpleCurve::LineString(ls) => ls.coord_seq(),
            SimpleCurve::CircularString(cs) => cs.coord_seq(),
        }
    }

    pub fn num_coords(&self) -> usize {
        self.coord_seq().len()
    }

    pub fn is_empty(&self) -> bool {
        self.coord_seq().is_empty()
    }

    pub fn dims(&self) -> CoordDimensions {
        self.coord_seq().dims()
    }

    pub fn start_point(&self) -> Option<Coord<T>> {
        self.coord_seq().first()
    }

    pub fn end_point(&self) -> Option<Coord<T>> {
        self.coord_seq().last()
    }

    pub fn is_closed(&self) -> bool {
        self.start_point() == self.end_point()
    }

    pub fn reverse(&self) -> Self {
        match self {
            SimpleCurve::LineString(ls) => SimpleCurve::LineString(ls.reverse()),
            SimpleCurve::CircularString(cs) => SimpleCurve::CircularString(cs.reverse()),
        }
    }

    /// True when the sections are of the same kind and their coordinates
    /// match within `tol`.
    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        match (self, other) {
            (SimpleCurve::LineString(a), SimpleCurve::LineString(b)) => a.equals_exact(b, tol),
            (SimpleCurve::CircularString(a), SimpleCurve::CircularString(b)) => {
                a.equals_exact(b, tol)
            }
            _ => false,
        }
    }
}

impl<T: CoordNum> From<LineString<T>> for SimpleCurve<T> {
    fn from(ls: LineString<T>) -> Self {
        SimpleCurve::LineString(ls)
    }
}

impl<T: CoordNum> From<CircularString<T>> for SimpleCurve<T> {
    fn from(cs: CircularString<T>) -> Self {
        SimpleCurve::CircularString(cs)
    }
}

/// A continuous path formed by concatenating straight and circular
/// sections with shared endpoints.
///
/// # Validity
///
/// Every section must be valid in its own right and hold at least two
/// coordinates; the last coordinate of each section must equal the first
/// coordinate of the next in X and Y (Z and M are not required to match);
/// all sections must share a coordinate dimension profile. An empty
/// section list constructs the empty curve.
///
/// # Examples
///
/// ```
/// use geo_curved_types::{CircularString, CompoundCurve, LineString, SimpleCurve};
///
/// let arc = CircularString::try_from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
/// let tail = LineString::from(vec![(2.0, 0.0), (4.0, 0.0)]);
/// let curve = CompoundCurve::new(vec![arc.into(), tail.into()]).unwrap();
/// assert_eq!(curve.num_sections(), 2);
/// assert_eq!(curve.num_coords(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundCurve<T: CoordNum> {
    sections: Vec<SimpleCurve<T>>,
}

impl<T: CoordNum> CompoundCurve<T> {
    pub fn new(sections: Vec<SimpleCurve<T>>) -> Result<Self, Error> {
        for (i, section) in sections.iter().enumerate() {
            if section.num_coords() < 2 {
                return Err(Error::InvalidCoordinateCount {
                    geometry: "CompoundCurve section",
                    count: section.num_coords(),
                });
            }
            if i > 0 {
                if section.dims() != sections[0].dims() {
                    return Err(Error::MismatchedDimensions {
                        expected: sections[0].dims(),
                        found: section.dims(),
                    });
                }
                if sections[i - 1].end_point() != section.start_point() {
                    return Err(Error::DiscontinuousSections { index: i });
                }
            }
        }
        Ok(CompoundCurve { sections })
    }

    pub fn empty() -> Self {
        CompoundCurve {
            sections: Vec::new(),
        }
    }

    pub fn sections(&self) -> &[SimpleCurve<T>] {
        &self.sections
    }

    pub fn into_inner(self) -> Vec<SimpleCurve<T>> {
        self.sections
    }

    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn dims(&self) -> CoordDimensions {
        self.sections
            .first()
            .map_or_else(CoordDimensions::xy, SimpleCurve::dims)
    }

    /// The number of distinct path coordinates: shared section endpoints
    /// are counted once.
    pub fn num_coords(&self) -> usize {
        let total: usize = self.sections.iter().map(SimpleCurve::num_coords).sum();
        total - self.sections.len().saturating_sub(1)
    }

    pub fn start_point(&self) -> Option<Coord<T>> {
        self.sections.first().and_then(SimpleCurve::start_point)
    }

    pub fn end_point(&self) -> Option<Coord<T>> {
        self.sections.last().and_then(SimpleCurve::end_point)
    }

    /// True if the curve is empty or its path ends where it begins.
    pub fn is_closed(&self) -> bool {
        self.start_point() == self.end_point()
    }

    /// The path coordinates in order, without duplicating the endpoint
    /// shared between consecutive sections.
    pub fn coordinates(&self) -> CoordSeq<T> {
        let mut out = CoordSeq::with_capacity(self.dims(), self.num_coords());
        for (i, section) in self.sections.iter().enumerate() {
            out.extend_from(section.coord_seq(), i > 0);
        }
        out
    }

    /// A new curve tracing the same path in the opposite direction: each
    /// section reversed, sections in reverse order.
    pub fn reverse(&self) -> Self {
        CompoundCurve {
            sections: self.sections.iter().rev().map(SimpleCurve::reverse).collect(),
        }
    }

    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        self.sections.len() == other.sections.len()
            && self
                .sections
                .iter()
                .zip(&other.sections)
                .all(|(a, b)| a.equals_exact(b, tol))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    fn arc() -> CircularString<f64> {
        CircularString::try_from(vec![(0., 0.), (1., 1.), (2., 0.)]).unwrap()
    }

    #[test]
    fn continuity_is_required() {
        // section B starts away from where section A ends
        let a = CircularString::try_from(vec![(0., 0.), (2., 2.), (4., 3.)]).unwrap();
        let b = LineString::from(vec![(4., 4.), (6., 4.)]);
        let err = CompoundCurve::new(vec![a.into(), b.into()]).unwrap_err();
        assert_eq!(err, Error::DiscontinuousSections { index: 1 });
    }

    #[test]
    fn zm_not_required_to_match_at_joins() {
        let mut seq = CoordSeq::new(CoordDimensions::xyz());
        seq.push(crate::CoordZM::new(2.0, 0.0).with_z(5.0));
        seq.push(crate::CoordZM::new(3.0, 0.0).with_z(6.0));
        let line = LineString::new(seq);

        let mut arc_seq = CoordSeq::new(CoordDimensions::xyz());
        arc_seq.push(crate::CoordZM::new(0.0, 0.0).with_z(1.0));
        arc_seq.push(crate::CoordZM::new(1.0, 1.0).with_z(2.0));
        arc_seq.push(crate::CoordZM::new(2.0, 0.0).with_z(99.0));
        let arc = CircularString::new(arc_seq).unwrap();

        assert!(CompoundCurve::new(vec![arc.into(), line.into()]).is_ok());
    }

    #[test]
    fn single_linear_section_is_accepted() {
        let line = LineString::from(vec![(3., 4.), (2., 7.)]);
        let curve = CompoundCurve::new(vec![line.into()]).unwrap();
        assert_eq!(curve.num_sections(), 1);
        assert!(!curve.is_closed());
    }

    #[test]
    fn empty_curve() {
        let curve = CompoundCurve::<f64>::empty();
        assert!(curve.is_empty());
        assert_eq!(curve.num_coords(), 0);
        assert!(curve.is_closed());
        assert!(curve.coordinates().is_empty());
    }

    #[test]
    fn coordinates_deduplicate_shared_endpoints() {
        let tail = LineString::from(vec![(2., 0.), (4., 0.)]);
        let curve = CompoundCurve::new(vec![arc().into(), tail.into()]).unwrap();
        let coords = curve.coordinates();
        assert_eq!(coords.len(), 4);
        assert_eq!(coords[2], coord! { x: 2., y: 0. });
        assert_eq!(coords[3], coord! { x: 4., y: 0. });
    }

    #[test]
    fn reverse_reverses_section_order() {
        let tail = LineString::from(vec![(2., 0.), (4., 0.)]);
        let curve = CompoundCurve::new(vec![arc().into(), tail.into()]).unwrap();
        let rev = curve.reverse();
        assert_eq!(rev.start_point(), Some(coord! { x: 4., y: 0. }));
        assert!(matches!(rev.sections()[0], SimpleCurve::LineString(_)));
        assert_eq!(rev.reverse(), curve);
    }
}
