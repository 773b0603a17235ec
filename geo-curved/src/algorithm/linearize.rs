use num_traits::FloatConst;

use crate::algorithm::angles;
use crate::algorithm::arcs::Arcs;
use crate::algorithm::orientation::Orientation;
use crate::{
    CircularArc, CircularString, CompoundCurve, CoordFloat, CoordSeq, CoordZM, Curve,
    CurvePolygon, CurvedGeometry, Error, LineString, LinearGeometry, MultiCurve,
    MultiLineString, MultiPolygon, MultiSurface, Polygon, SimpleCurve,
};

/// Replace the arcs of a curved geometry with chords of bounded deviation,
/// producing the matching linear type.
///
/// The vertices of the result lie on the arcs. Z and M ordinates of
/// inserted vertices are interpolated linearly between the arc endpoints in
/// proportion to angular position; the intermediate control point's Z/M is
/// not consulted.
///
/// Linearization is direction-neutral: reversing a curve, linearizing, and
/// reversing the result yields the identical coordinate sequence, bit for
/// bit. Interior vertices are derived symmetrically from whichever endpoint
/// is angularly nearer, and the center vertex of an arc from the canonical
/// midpoint angle.
///
/// # Examples
///
/// ```
/// use geo_curved::{CircularString, Linearize};
/// use std::f64::consts::PI;
///
/// let cs = CircularString::try_from(vec![(-1.0, 0.0), (0.0, 1.0), (1.0, 0.0)]).unwrap();
///
/// let ls = cs.linearize(PI / 2.0).unwrap();
/// assert_eq!(ls.num_coords(), 3);
///
/// let ls = cs.linearize(PI / 4.0).unwrap();
/// assert_eq!(ls.num_coords(), 5);
/// ```
pub trait Linearize<T: CoordFloat + FloatConst> {
    type Output;

    /// Linearize with a maximum angular step between consecutive emitted
    /// vertices, in radians. This is the primary entry point.
    ///
    /// A zero, negative, or NaN step is rejected with
    /// [`Error::NonPositiveTolerance`]; an infinite step emits each arc's
    /// three control points unchanged.
    fn linearize(&self, max_angle_step: T) -> Result<Self::Output, Error>;

    /// Linearize with a maximum deviation (sagitta) between each chord and
    /// its arc. The angular step is derived per arc from its radius as
    /// `2 * acos(1 - deviation / radius)`; a deviation exceeding an arc's
    /// diameter keeps that arc's three control points unchanged.
    fn linearize_with_max_deviation(&self, max_deviation: T) -> Result<Self::Output, Error>;
}

#[derive(Clone, Copy)]
enum Tolerance<T> {
    AngleStep(T),
    MaxDeviation(T),
}

impl<T: CoordFloat> Tolerance<T> {
    fn validate(self) -> Result<Self, Error> {
        let (value, what) = match self {
            Tolerance::AngleStep(s) => (s, "angular step"),
            Tolerance::MaxDeviation(d) => (d, "maximum deviation"),
        };
        if value > T::zero() {
            Ok(self)
        } else {
            Err(Error::NonPositiveTolerance { what })
        }
    }
}

/// The angular step to use for one arc.
fn arc_step<T: CoordFloat + FloatConst>(arc: &CircularArc<'_, T>, tol: Tolerance<T>) -> T {
    match tol {
        Tolerance::AngleStep(step) => step,
        Tolerance::MaxDeviation(deviation) => {
            let x = T::one() - deviation / arc.radius();
            if x < -T::one() {
                // deviation exceeds the diameter; any chord is fine
                T::infinity()
            } else {
                let two = T::one() + T::one();
                two * x.acos()
            }
        }
    }
}

/// Append the linearization of one arc to `out`, optionally skipping the
/// shared start point.
fn linearize_arc<T: CoordFloat + FloatConst>(
    arc: &CircularArc<'_, T>,
    tol: Tolerance<T>,
    out: &mut CoordSeq<T>,
    skip_first: bool,
) {
    let p0 = arc.p0_zm();
    let p2 = arc.p2_zm();
    if !skip_first {
        out.push(p0);
    }

    // degenerate arcs contribute only their chord
    if arc.is_linear() {
        out.push(p2);
        return;
    }

    let step = arc_step(arc, tol);
    if step.is_infinite() {
        out.push(arc.p1_zm());
        out.push(p2);
        return;
    }

    let delta = arc.angle();
    let n = (delta / step).ceil().to_usize().unwrap().max(1);

    let center = arc.center();
    let radius = arc.radius();
    let theta0 = arc.theta0();
    let theta2 = arc.theta2();
    let sweep = arc.sweep();
    let sigma = match sweep {
        Orientation::Clockwise => -T::one(),
        _ => T::one(),
    };

    let interpolate = |a: Option<T>, b: Option<T>, frac: T| match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * frac),
        _ => None,
    };
    let two = T::one() + T::one();
    let n_t = T::from(n).unwrap();

    for i in 1..n {
        // derive each interior vertex from the nearer endpoint, and the
        // exact middle from the canonical midpoint angle, so forward and
        // reverse emission agree bit for bit
        let (theta, z, m) = if 2 * i < n {
            let frac = T::from(i).unwrap() / n_t;
            (
                theta0 + sigma * delta * frac,
                interpolate(p0.z, p2.z, frac),
                interpolate(p0.m, p2.m, frac),
            )
        } else if 2 * i > n {
            let frac = T::from(n - i).unwrap() / n_t;
            (
                theta2 - sigma * delta * frac,
                interpolate(p2.z, p0.z, frac),
                interpolate(p2.m, p0.m, frac),
            )
        } else {
            let mid = |a: Option<T>, b: Option<T>| match (a, b) {
                (Some(a), Some(b)) => Some((a + b) / two),
                _ => None,
            };
            (
                angles::mid_angle(theta0, theta2, sweep),
                mid(p0.z, p2.z),
                mid(p0.m, p2.m),
            )
        };
        let on_arc = angles::point_at_angle(center, radius, theta);
        out.push(CoordZM {
            x: on_arc.x,
            y: on_arc.y,
            z,
            m,
        });
    }

    out.push(p2);
}

fn linearize_circular_string<T: CoordFloat + FloatConst>(
    cs: &CircularString<T>,
    tol: Tolerance<T>,
) -> LineString<T> {
    let mut out = CoordSeq::new(cs.dims());
    for (i, arc) in cs.arcs().enumerate() {
        linearize_arc(&arc, tol, &mut out, i > 0);
    }
    LineString::new(out)
}

fn linearize_compound_curve<T: CoordFloat + FloatConst>(
    cc: &CompoundCurve<T>,
    tol: Tolerance<T>,
) -> LineString<T> {
    let mut out = CoordSeq::new(cc.dims());
    for (i, section) in cc.sections().iter().enumerate() {
        match section {
            // linear sections pass through unchanged
            SimpleCurve::LineString(ls) => {
                out.extend_from(ls.coord_seq(), i > 0);
            }
            SimpleCurve::CircularString(cs) => {
                for (j, arc) in cs.arcs().enumerate() {
                    linearize_arc(&arc, tol, &mut out, i > 0 || j > 0);
                }
            }
        }
    }
    LineString::new(out)
}

fn linearize_curve<T: CoordFloat + FloatConst>(
    curve: &Curve<T>,
    tol: Tolerance<T>,
) -> LineString<T> {
    match curve {
        Curve::LineString(ls) => ls.clone(),
        Curve::CircularString(cs) => linearize_circular_string(cs, tol),
        Curve::CompoundCurve(cc) => linearize_compound_curve(cc, tol),
    }
}

fn linearize_curve_polygon<T: CoordFloat + FloatConst>(
    polygon: &CurvePolygon<T>,
    tol: Tolerance<T>,
) -> Polygon<T> {
    Polygon::new(
        linearize_curve(polygon.exterior(), tol),
        polygon
            .interiors()
            .iter()
            .map(|ring| linearize_curve(ring, tol))
            .collect(),
    )
}

fn linearize_multi_curve<T: CoordFloat + FloatConst>(
    mc: &MultiCurve<T>,
    tol: Tolerance<T>,
) -> MultiLineString<T> {
    MultiLineString::new(mc.iter().map(|curve| linearize_curve(curve, tol)).collect())
}

fn linearize_multi_surface<T: CoordFloat + FloatConst>(
    ms: &MultiSurface<T>,
    tol: Tolerance<T>,
) -> MultiPolygon<T> {
    MultiPolygon(
        ms.iter()
            .map(|polygon| linearize_curve_polygon(polygon, tol))
            .collect(),
    )
}

fn linearize_curved_geometry<T: CoordFloat + FloatConst>(
    geometry: &CurvedGeometry<T>,
    tol: Tolerance<T>,
) -> LinearGeometry<T> {
    match geometry {
        CurvedGeometry::CircularString(g) => {
            LinearGeometry::LineString(linearize_circular_string(g, tol))
        }
        CurvedGeometry::CompoundCurve(g) => {
            LinearGeometry::LineString(linearize_compound_curve(g, tol))
        }
        CurvedGeometry::CurvePolygon(g) => {
            LinearGeometry::Polygon(linearize_curve_polygon(g, tol))
        }
        CurvedGeometry::MultiCurve(g) => {
            LinearGeometry::MultiLineString(linearize_multi_curve(g, tol))
        }
        CurvedGeometry::MultiSurface(g) => {
            LinearGeometry::MultiPolygon(linearize_multi_surface(g, tol))
        }
    }
}

macro_rules! impl_linearize {
    ($input:ident, $output:ident, $func:ident) => {
        impl<T: CoordFloat + FloatConst> Linearize<T> for $input<T> {
            type Output = $output<T>;

            fn linearize(&self, max_angle_step: T) -> Result<$output<T>, Error> {
                let tol = Tolerance::AngleStep(max_angle_step).validate()?;
                Ok($func(self, tol))
            }

            fn linearize_with_max_deviation(&self, max_deviation: T) -> Result<$output<T>, Error> {
                let tol = Tolerance::MaxDeviation(max_deviation).validate()?;
                Ok($func(self, tol))
            }
        }
    };
}

impl_linearize!(CircularString, LineString, linearize_circular_string);
impl_linearize!(CompoundCurve, LineString, linearize_compound_curve);
impl_linearize!(Curve, LineString, linearize_curve);
impl_linearize!(CurvePolygon, Polygon, linearize_curve_polygon);
impl_linearize!(MultiCurve, MultiLineString, linearize_multi_curve);
impl_linearize!(MultiSurface, MultiPolygon, linearize_multi_surface);
impl_linearize!(CurvedGeometry, LinearGeometry, linearize_curved_geometry);

/// A [`LineString`] is already linear; linearization returns it verbatim.
impl<T: CoordFloat + FloatConst> Linearize<T> for LineString<T> {
    type Output = LineString<T>;

    fn linearize(&self, max_angle_step: T) -> Result<LineString<T>, Error> {
        Tolerance::AngleStep(max_angle_step).validate()?;
        Ok(self.clone())
    }

    fn linearize_with_max_deviation(&self, max_deviation: T) -> Result<LineString<T>, Error> {
        Tolerance::MaxDeviation(max_deviation).validate()?;
        Ok(self.clone())
    }
}
