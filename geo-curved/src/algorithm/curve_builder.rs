use log::debug;
use num_traits::FloatConst;

use crate::algorithm::angles;
use crate::algorithm::distance::point_distance;
use crate::algorithm::orientation::{orientation_index, Orientation};
use crate::{
    CircularString, Coord, CoordFloat, CoordSeq, Curve, CurvePolygon, Error, LineString,
    MultiCurve, MultiLineString, MultiPolygon, MultiSurface, Polygon, SimpleCurve,
};

/// Recognize circular arcs in a linear geometry and return an equivalent
/// curved geometry.
///
/// Recognition is greedy and left-to-right: each run of vertices that lies
/// on a common circle, within `distance_tolerance` of its radius, becomes
/// one arc. Runs that cannot be extended remain straight segments. The
/// output is a [`CircularString`] (everything matched one run of arcs), a
/// [`CompoundCurve`] (a mix of straight and circular sections), or the
/// input itself when no arcs are recognized.
///
/// Recognition is direction-symmetric: building a curve from the reversed
/// input yields the reverse of the forward result, section for section.
///
/// # Examples
///
/// ```
/// use geo_curved::{Curve, LineString, ToCurve};
///
/// // a coarsely linearized semicircle
/// let ls = LineString::from(vec![
///     (0.0, 0.0),
///     (29.2893, 70.7107),
///     (100.0, 100.0),
///     (170.7107, 70.7107),
///     (200.0, 0.0),
/// ]);
/// let curve = ls.to_curve(2e-3).unwrap();
/// assert!(matches!(curve, Curve::CircularString(_)));
/// ```
pub trait ToCurve<T: CoordFloat + FloatConst + 'static> {
    type Output;

    /// Fit arcs to the geometry's vertices. Linearizing the result at a
    /// resolution derived from `distance_tolerance` reproduces the input
    /// within `distance_tolerance`.
    fn to_curve(&self, distance_tolerance: T) -> Result<Self::Output, Error>;
}

/// A run of input vertices `start..=end` recognized as lying on one arc.
struct ArcRun {
    start: usize,
    end: usize,
}

/// Steps subtending a quarter turn or more are never treated as part of an
/// arc; polylines that coarse (e.g. a square traversed corner to corner)
/// are kept straight even when their vertices happen to be concircular.
fn max_arc_step<T: CoordFloat + FloatConst>() -> T {
    T::FRAC_PI_2()
}

/// Detect the longest arc run starting at `i`, if any.
fn detect_arc_run<T: CoordFloat + FloatConst + 'static>(
    seq: &CoordSeq<T>,
    i: usize,
    tolerance: T,
) -> Option<ArcRun> {
    let a = seq.coord_at(i);
    let b = seq.coord_at(i + 1);
    let c = seq.coord_at(i + 2);

    let orientation = orientation_index(a, b, c);
    if orientation == Orientation::Collinear {
        return None;
    }

    // candidate circle from the first three vertices of the run
    let candidate = crate::CircularArc::create(a.into(), b.into(), c.into());
    let center = candidate.center();
    let radius = candidate.radius();

    let theta = |q: Coord<T>| angles::angle_of(q, center);
    let step_from = |from: T, to: T| angles::angular_diff(from, to, orientation).abs();

    let first_step = step_from(theta(a), theta(b));
    let second_step = step_from(theta(b), theta(c));
    let two = T::one() + T::one();
    let step_ok = |step: T| {
        step > T::zero()
            && step < max_arc_step()
            && step <= first_step * two
            && step + step >= first_step
    };
    if !(first_step > T::zero() && first_step < max_arc_step() && step_ok(second_step)) {
        debug!("arc candidate rejected: inconsistent angular steps");
        return None;
    }

    let tau = T::PI() + T::PI();
    let mut span = first_step + second_step;
    let mut prev_theta = theta(c);
    let mut end = i + 2;

    while end + 1 < seq.len() {
        let v = seq.coord_at(end + 1);
        if (point_distance(v, center) - radius).abs() > tolerance {
            break;
        }
        let step = step_from(prev_theta, theta(v));
        if !step_ok(step) {
            break;
        }
        // never wrap past the starting point
        if span + step > tau {
            break;
        }
        span = span + step;
        prev_theta = theta(v);
        end += 1;
    }

    Some(ArcRun { start: i, end })
}

/// Pick the middle vertex of a run. For runs with an even vertex count the
/// tie between the two central candidates is broken toward the
/// lexicographically smaller endpoint, so forward and reverse scans pick
/// the same vertex.
fn middle_vertex<T: CoordFloat>(seq: &CoordSeq<T>, run: &ArcRun) -> usize {
    let sum = run.start + run.end;
    if sum % 2 == 0 {
        return sum / 2;
    }
    let a = seq.coord_at(run.start);
    let b = seq.coord_at(run.end);
    if (a.x, a.y) < (b.x, b.y) {
        sum / 2
    } else {
        sum / 2 + 1
    }
}

enum Section {
    Straight { start: usize, end: usize },
    Arcs { vertices: Vec<usize> },
}

fn build_sections<T: CoordFloat + FloatConst + 'static>(
    seq: &CoordSeq<T>,
    tolerance: T,
) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut pending_straight = 0usize;
    let mut i = 0usize;

    let flush_straight = |sections: &mut Vec<Section>, from: usize, to: usize| {
        if to > from {
            sections.push(Section::Straight {
                start: from,
                end: to,
            });
        }
    };

    while i + 2 < seq.len() {
        match detect_arc_run(seq, i, tolerance) {
            Some(run) => {
                debug!(
                    "recognized arc run over vertices {}..={}",
                    run.start, run.end
                );
                flush_straight(&mut sections, pending_straight, run.start);
                let mid = middle_vertex(seq, &run);
                match sections.last_mut() {
                    // consecutive arc runs concatenate into one section
                    Some(Section::Arcs { vertices }) => {
                        vertices.push(mid);
                        vertices.push(run.end);
                    }
                    _ => {
                        sections.push(Section::Arcs {
                            vertices: vec![run.start, mid, run.end],
                        });
                    }
                }
                i = run.end;
                pending_straight = run.end;
            }
            None => {
                i += 1;
            }
        }
    }
    flush_straight(&mut sections, pending_straight, seq.len().saturating_sub(1));
    sections
}

fn build_curve<T: CoordFloat + FloatConst + 'static>(
    ls: &LineString<T>,
    tolerance: T,
) -> Result<Curve<T>, Error> {
    if !(tolerance > T::zero()) || !tolerance.is_finite() {
        return Err(Error::NonPositiveTolerance {
            what: "distance tolerance",
        });
    }

    let seq = ls.coord_seq();
    if seq.len() < 3 {
        return Ok(Curve::LineString(ls.clone()));
    }

    let sections = build_sections(seq, tolerance);

    // no arcs recognized: the input passes through unchanged
    if sections
        .iter()
        .all(|s| matches!(s, Section::Straight { .. }))
    {
        return Ok(Curve::LineString(ls.clone()));
    }

    let mut simple: Vec<SimpleCurve<T>> = Vec::with_capacity(sections.len());
    for section in &sections {
        match section {
            Section::Straight { start, end } => {
                let mut out = CoordSeq::with_capacity(seq.dims(), end - start + 1);
                for v in *start..=*end {
                    out.push(seq.at(v));
                }
                simple.push(SimpleCurve::LineString(LineString::new(out)));
            }
            Section::Arcs { vertices } => {
                let mut out = CoordSeq::with_capacity(seq.dims(), vertices.len());
                for v in vertices {
                    out.push(seq.at(*v));
                }
                simple.push(SimpleCurve::CircularString(CircularString::new(out)?));
            }
        }
    }

    if simple.len() == 1 {
        return Ok(match simple.pop().unwrap() {
            SimpleCurve::LineString(g) => Curve::LineString(g),
            SimpleCurve::CircularString(g) => Curve::CircularString(g),
        });
    }
    Ok(Curve::CompoundCurve(crate::CompoundCurve::new(simple)?))
}

impl<T: CoordFloat + FloatConst + 'static> ToCurve<T> for LineString<T> {
    type Output = Curve<T>;

    fn to_curve(&self, distance_tolerance: T) -> Result<Curve<T>, Error> {
        build_curve(self, distance_tolerance)
    }
}

impl<T: CoordFloat + FloatConst + 'static> ToCurve<T> for MultiLineString<T> {
    type Output = MultiCurve<T>;

    fn to_curve(&self, distance_tolerance: T) -> Result<MultiCurve<T>, Error> {
        MultiCurve::new(
            self.iter()
                .map(|ls| ls.to_curve(distance_tolerance))
                .collect::<Result<_, _>>()?,
        )
    }
}

impl<T: CoordFloat + FloatConst + 'static> ToCurve<T> for Polygon<T> {
    type Output = CurvePolygon<T>;

    fn to_curve(&self, distance_tolerance: T) -> Result<CurvePolygon<T>, Error> {
        CurvePolygon::new(
            self.exterior().to_curve(distance_tolerance)?,
            self.interiors()
                .iter()
                .map(|ring| ring.to_curve(distance_tolerance))
                .collect::<Result<_, _>>()?,
        )
    }
}

impl<T: CoordFloat + FloatConst + 'static> ToCurve<T> for MultiPolygon<T> {
    type Output = MultiSurface<T>;

    fn to_curve(&self, distance_tolerance: T) -> Result<MultiSurface<T>, Error> {
        MultiSurface::new(
            self.iter()
                .map(|polygon| polygon.to_curve(distance_tolerance))
                .collect::<Result<_, _>>()?,
        )
    }
}
