use std::borrow::Cow;
use std::cell::OnceCell;

use num_traits::FloatConst;

use crate::algorithm::angles;
use crate::algorithm::distance::{point_distance, point_segment_distance};
use crate::algorithm::orientation::{orientation_index, Orientation};
use crate::{Coord, CoordDimensions, CoordFloat, CoordSeq, CoordZM};

/// Relative tolerance used by [`CircularArc::contains_point`] when testing
/// whether a coordinate lies on the arc's circle.
const ON_CIRCLE_RTOL: f64 = 1e-8;

/// One circular arc, addressed as three consecutive control points
/// (start, a point along the way, end) in some [`CoordSeq`].
///
/// The circle those points determine is not stored up front. Center,
/// radius, and orientation are each computed on first use and memoized,
/// since many arcs are examined without ever being asked for them. The
/// derivation is canonical: the circumcenter arguments are ordered by
/// orientation, so an arc and its [`reverse`](CircularArc::reverse)
/// derive bit-for-bit equal centers and radii no matter which is
/// computed first.
///
/// An arc normally borrows the sequence it indexes into; every arc of a
/// [`CircularString`](crate::CircularString) is a view of the string's
/// own storage. The [`create`](CircularArc::create) constructors instead
/// allocate a private three-point sequence for arcs that stand alone.
///
/// The memo cells never change an arc's observable value, but they do
/// mutate through a shared reference, so a `CircularArc` must not be
/// handed to other threads without outside synchronization.
#[derive(Debug, Clone)]
pub struct CircularArc<'a, T: CoordFloat> {
    seq: Cow<'a, CoordSeq<T>>,
    pos: usize,
    center: OnceCell<Coord<T>>,
    radius: OnceCell<T>,
    orientation: OnceCell<Orientation>,
}

/// The circumcenter of the triangle `a b c`.
///
/// Degenerate (collinear) triangles divide by zero and yield non-finite
/// coordinates; callers check orientation first.
fn circumcenter<T: CoordFloat>(a: Coord<T>, b: Coord<T>, c: Coord<T>) -> Coord<T> {
    let two = T::one() + T::one();
    let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    Coord {
        x: (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        y: (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    }
}

impl<'a, T: CoordFloat + FloatConst> CircularArc<'a, T> {
    /// An arc over `seq[pos..=pos + 2]`. The sequence is borrowed, not
    /// owned; it must outlive the arc.
    ///
    /// # Panics
    ///
    /// If the sequence does not hold three coordinates at `pos`.
    pub fn new(seq: &'a CoordSeq<T>, pos: usize) -> Self {
        assert!(pos + 3 <= seq.len());
        CircularArc {
            seq: Cow::Borrowed(seq),
            pos,
            center: OnceCell::new(),
            radius: OnceCell::new(),
            orientation: OnceCell::new(),
        }
    }

    /// Like [`new`](CircularArc::new), but with the center, radius, and
    /// orientation supplied up front so they are never re-derived. They
    /// are not checked for consistency with the referenced coordinates.
    pub fn new_with(
        seq: &'a CoordSeq<T>,
        pos: usize,
        center: Coord<T>,
        radius: T,
        orientation: Orientation,
    ) -> Self {
        assert!(pos + 3 <= seq.len());
        CircularArc {
            seq: Cow::Borrowed(seq),
            pos,
            center: OnceCell::from(center),
            radius: OnceCell::from(radius),
            orientation: OnceCell::from(orientation),
        }
    }

    /// An arc over a freshly allocated three-point sequence. The sequence's
    /// dimension profile is taken from `p0`.
    pub fn create(p0: CoordZM<T>, p1: CoordZM<T>, p2: CoordZM<T>) -> CircularArc<'static, T> {
        let dims = CoordDimensions {
            has_z: p0.z.is_some(),
            has_m: p0.m.is_some(),
        };
        let mut seq = CoordSeq::with_capacity(dims, 3);
        seq.push(p0);
        seq.push(p1);
        seq.push(p2);
        CircularArc {
            seq: Cow::Owned(seq),
            pos: 0,
            center: OnceCell::new(),
            radius: OnceCell::new(),
            orientation: OnceCell::new(),
        }
    }

    /// An arc between `p0` and `p2` on the circle described by `center`,
    /// `radius`, and `orientation`. The intermediate point is synthesized
    /// halfway along the span; its Z and M are the means of the endpoint
    /// values.
    ///
    /// The supplied circle is cached as-is, so sub-arcs built from a parent
    /// arc's derived values carry them bit-identically.
    pub fn create_with(
        p0: CoordZM<T>,
        p2: CoordZM<T>,
        center: Coord<T>,
        radius: T,
        orientation: Orientation,
    ) -> CircularArc<'static, T> {
        let two = T::one() + T::one();
        let mid = |a: Option<T>, b: Option<T>| match (a, b) {
            (Some(a), Some(b)) => Some((a + b) / two),
            _ => None,
        };
        let p1 = if orientation == Orientation::Collinear || !radius.is_finite() {
            // degenerate arc: the "midpoint" is the chord midpoint
            CoordZM {
                x: (p0.x + p2.x) / two,
                y: (p0.y + p2.y) / two,
                z: mid(p0.z, p2.z),
                m: mid(p0.m, p2.m),
            }
        } else {
            let theta = angles::mid_angle(
                angles::angle_of(p0.coord(), center),
                angles::angle_of(p2.coord(), center),
                orientation,
            );
            let on_arc = angles::point_at_angle(center, radius, theta);
            CoordZM {
                x: on_arc.x,
                y: on_arc.y,
                z: mid(p0.z, p2.z),
                m: mid(p0.m, p2.m),
            }
        };
        let mut arc = CircularArc::create(p0, p1, p2);
        arc.center = OnceCell::from(center);
        arc.radius = OnceCell::from(radius);
        arc.orientation = OnceCell::from(orientation);
        arc
    }

    pub fn coord_seq(&self) -> &CoordSeq<T> {
        &self.seq
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn dims(&self) -> CoordDimensions {
        self.seq.dims()
    }

    /// The start point of the arc.
    #[inline]
    pub fn p0(&self) -> Coord<T> {
        self.seq.coord_at(self.pos)
    }

    /// The intermediate point of the arc.
    #[inline]
    pub fn p1(&self) -> Coord<T> {
        self.seq.coord_at(self.pos + 1)
    }

    /// The end point of the arc.
    #[inline]
    pub fn p2(&self) -> Coord<T> {
        self.seq.coord_at(self.pos + 2)
    }

    /// The start point with its Z/M ordinates.
    pub fn p0_zm(&self) -> CoordZM<T> {
        self.seq.at(self.pos)
    }

    /// The intermediate point with its Z/M ordinates.
    pub fn p1_zm(&self) -> CoordZM<T> {
        self.seq.at(self.pos + 1)
    }

    /// The end point with its Z/M ordinates.
    pub fn p2_zm(&self) -> CoordZM<T> {
        self.seq.at(self.pos + 2)
    }

    /// The orientation of the arc, derived from the sign of the signed
    /// area of the triangle `p0 p1 p2` in extended precision.
    ///
    /// `Collinear` means the arc degenerates to a straight segment, or,
    /// when `p0 == p2`, that it is a full circle.
    pub fn orientation(&self) -> Orientation {
        *self
            .orientation
            .get_or_init(|| orientation_index(self.p0(), self.p1(), self.p2()))
    }

    pub fn is_ccw(&self) -> bool {
        self.orientation() == Orientation::CounterClockwise
    }

    /// Whether this arc forms a complete circle.
    pub fn is_circle(&self) -> bool {
        self.p0() == self.p2()
    }

    /// Whether this arc forms a straight line (`p0`, `p1`, and `p2` are
    /// collinear).
    pub fn is_linear(&self) -> bool {
        !self.radius().is_finite()
    }

    /// The center of the circle associated with this arc.
    ///
    /// The circumcenter call order is chosen by orientation, so an arc and
    /// its reverse derive the bit-identical center. Degenerate (collinear)
    /// arcs have no center; infinite coordinates are returned.
    pub fn center(&self) -> Coord<T> {
        *self.center.get_or_init(|| {
            if self.is_circle() {
                // p1 is diametrically opposite p0
                let two = T::one() + T::one();
                Coord {
                    x: (self.p0().x + self.p1().x) / two,
                    y: (self.p0().y + self.p1().y) / two,
                }
            } else {
                match self.orientation() {
                    Orientation::CounterClockwise => {
                        circumcenter(self.p0(), self.p1(), self.p2())
                    }
                    Orientation::Clockwise => circumcenter(self.p2(), self.p1(), self.p0()),
                    Orientation::Collinear => Coord {
                        x: T::infinity(),
                        y: T::infinity(),
                    },
                }
            }
        })
    }

    /// The radius of the circle associated with this arc; positive
    /// infinity iff the arc is degenerate (collinear).
    pub fn radius(&self) -> T {
        *self.radius.get_or_init(|| {
            if !self.is_circle() && self.orientation() == Orientation::Collinear {
                return T::infinity();
            }
            // endpoint chosen by orientation, for bit-identity under
            // reversal
            if self.is_ccw() || self.is_circle() {
                point_distance(self.center(), self.p0())
            } else {
                point_distance(self.center(), self.p2())
            }
        })
    }

    /// The direction the arc is swept in when walking from `p0` to `p2`.
    /// Unlike [`orientation`](CircularArc::orientation), a full circle
    /// sweeps counter-clockwise rather than reporting `Collinear`.
    pub(crate) fn sweep(&self) -> Orientation {
        if self.is_circle() {
            Orientation::CounterClockwise
        } else {
            self.orientation()
        }
    }

    /// The angle of `p0`.
    pub fn theta0(&self) -> T {
        angles::angle_of(self.p0(), self.center())
    }

    /// The angle of `p1`.
    pub fn theta1(&self) -> T {
        angles::angle_of(self.p1(), self.center())
    }

    /// The angle of `p2`.
    pub fn theta2(&self) -> T {
        angles::angle_of(self.p2(), self.center())
    }

    /// The inner angle of the sector associated with this arc: the
    /// magnitude of the angular span from `p0` to `p2`. A full circle has
    /// angle `2*PI`; a degenerate arc has angle zero.
    pub fn angle(&self) -> T {
        if self.is_circle() {
            return T::PI() + T::PI();
        }
        if self.is_linear() {
            return T::zero();
        }
        angles::angular_diff(self.theta0(), self.theta2(), self.orientation()).abs()
    }

    /// The length of the arc; the chord length when the arc is degenerate.
    pub fn length(&self) -> T {
        if self.is_linear() {
            point_distance(self.p0(), self.p2())
        } else {
            self.angle() * self.radius()
        }
    }

    /// The signed area enclosed by the arc `p0 p1 p2` and the chord
    /// `p2 p0`: the circular segment between arc and chord, positive for
    /// counter-clockwise arcs. A full circle yields the full disc area.
    pub fn area(&self) -> T {
        if self.is_linear() {
            return T::zero();
        }
        let two = T::one() + T::one();
        let r = self.radius();
        let delta = self.angle();
        let segment = r * r * (delta - delta.sin()) / two;
        match self.sweep() {
            Orientation::Clockwise => -segment,
            _ => segment,
        }
    }

    /// The coordinate on the arc halfway by angle from `p0` to `p2`.
    ///
    /// Computed from the canonical midpoint angle, so an arc and its
    /// reverse produce the identical coordinate. On a full circle the
    /// midpoint lies diametrically opposite `p0`.
    pub fn midpoint(&self) -> Coord<T> {
        if self.is_linear() {
            let two = T::one() + T::one();
            return Coord {
                x: (self.p0().x + self.p2().x) / two,
                y: (self.p0().y + self.p2().y) / two,
            };
        }
        let theta = angles::mid_angle(self.theta0(), self.theta2(), self.sweep());
        angles::point_at_angle(self.center(), self.radius(), theta)
    }

    /// The distance from the chord `p0 p2` to the arc at its midpoint.
    pub fn sagitta(&self) -> T {
        point_segment_distance(self.midpoint(), self.p0(), self.p2())
    }

    /// Whether the angle `theta` lies on this arc, endpoints included.
    /// Every angle lies on a full circle.
    pub fn contains_angle(&self, theta: T) -> bool {
        if self.is_circle() {
            return true;
        }
        let orientation = self.orientation();
        let span = angles::angular_diff(self.theta0(), self.theta2(), orientation);
        let d = angles::angular_diff(self.theta0(), theta, orientation);
        d.abs() <= span.abs()
    }

    /// Whether `q` lies on the arc: on the circle, within a small relative
    /// tolerance, and within the arc's angular span.
    pub fn contains_point(&self, q: Coord<T>) -> bool {
        if self.is_linear() {
            return orientation_index(self.p0(), self.p2(), q) == Orientation::Collinear
                && point_segment_distance(q, self.p0(), self.p2()) == T::zero();
        }
        let r = self.radius();
        let dist = point_distance(q, self.center());
        if (dist - r).abs() > r * T::from(ON_CIRCLE_RTOL).unwrap() {
            return false;
        }
        self.contains_angle(angles::angle_of(q, self.center()))
    }

    /// Whether the arc's tangent points in the positive-y direction at
    /// `q`. The point is assumed to be on the arc.
    pub fn is_upward_at_point(&self, q: Coord<T>) -> bool {
        match self.sweep() {
            Orientation::CounterClockwise => q.x > self.center().x,
            Orientation::Clockwise => q.x < self.center().x,
            Orientation::Collinear => self.p2().y > self.p0().y,
        }
    }

    /// A new arc over the same three points in reverse order. The derived
    /// center and radius carry over bit-identically; the orientation
    /// flips.
    pub fn reverse(&self) -> CircularArc<'static, T> {
        let mut seq = CoordSeq::with_capacity(self.dims(), 3);
        seq.push(self.p2_zm());
        seq.push(self.p1_zm());
        seq.push(self.p0_zm());
        CircularArc {
            seq: Cow::Owned(seq),
            pos: 0,
            center: self.center.clone(),
            radius: self.radius.clone(),
            orientation: self
                .orientation
                .get()
                .map(|o| OnceCell::from(o.reversed()))
                .unwrap_or_default(),
        }
    }

    /// A copy of this arc backed by its own three-point sequence, with any
    /// derived caches carried over.
    pub fn to_owned_arc(&self) -> CircularArc<'static, T> {
        let mut seq = CoordSeq::with_capacity(self.dims(), 3);
        seq.push(self.p0_zm());
        seq.push(self.p1_zm());
        seq.push(self.p2_zm());
        CircularArc {
            seq: Cow::Owned(seq),
            pos: 0,
            center: self.center.clone(),
            radius: self.radius.clone(),
            orientation: self.orientation.clone(),
        }
    }

    /// Whether the two arcs trace the same point set in the same
    /// direction, within `tol` on the endpoints, center, and radius.
    pub fn equals(&self, other: &CircularArc<'_, T>, tol: T) -> bool {
        if self.orientation() != other.orientation() {
            return false;
        }
        let close = |a: Coord<T>, b: Coord<T>| (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol;
        if !close(self.p0(), other.p0()) || !close(self.p2(), other.p2()) {
            return false;
        }
        match (self.is_linear(), other.is_linear()) {
            (true, true) => true,
            (false, false) => {
                (self.radius() - other.radius()).abs() <= tol
                    && close(self.center(), other.center())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo_curved_types::coord;
    use std::f64::consts::PI;

    fn upper_half_unit_circle() -> CircularArc<'static, f64> {
        CircularArc::create(
            CoordZM::new(-1.0, 0.0),
            CoordZM::new(0.0, 1.0),
            CoordZM::new(1.0, 0.0),
        )
    }

    #[test]
    fn upper_half_unit_circle_properties() {
        let arc = upper_half_unit_circle();
        assert_eq!(arc.orientation(), Orientation::Clockwise);
        assert_relative_eq!(arc.center().x, 0.0);
        assert_relative_eq!(arc.center().y, 0.0);
        assert_relative_eq!(arc.radius(), 1.0);
        assert!(!arc.is_circle());
        assert!(!arc.is_linear());

        assert_relative_eq!(arc.angle(), PI);
        assert_relative_eq!(arc.length(), PI);
        assert_relative_eq!(arc.sagitta(), 1.0);

        let mid = arc.midpoint();
        assert_relative_eq!(mid.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(mid.y, 1.0);
        assert!(arc.contains_point(mid));
        assert_relative_eq!(point_distance(arc.center(), mid), arc.radius());
    }

    #[test]
    fn radius_invariant_holds_at_both_endpoints() {
        let arc = CircularArc::create(
            CoordZM::new(71.96, -65.64),
            CoordZM::new(22.2, -18.52),
            CoordZM::new(20.0, 50.0),
        );
        let r = arc.radius();
        assert_relative_eq!(point_distance(arc.center(), arc.p0()), r, max_relative = 1e-8);
        assert_relative_eq!(point_distance(arc.center(), arc.p2()), r, max_relative = 1e-8);
    }

    #[test]
    fn reversal_is_canonical() {
        let arc = CircularArc::create(
            CoordZM::new(71.96, -65.64),
            CoordZM::new(22.2, -18.52),
            CoordZM::new(20.0, 50.0),
        );
        let rev = arc.reverse();

        assert_eq!(rev.orientation(), arc.orientation().reversed());
        // bit-identical, not merely close
        assert_eq!(rev.center(), arc.center());
        assert_eq!(rev.radius(), arc.radius());

        let back = rev.reverse();
        assert_eq!(back.p0(), arc.p0());
        assert_eq!(back.p1(), arc.p1());
        assert_eq!(back.p2(), arc.p2());
        assert_eq!(back.center(), arc.center());
        assert_eq!(back.radius(), arc.radius());
        assert_eq!(back.orientation(), arc.orientation());
    }

    #[test]
    fn reversal_is_canonical_without_warm_caches() {
        // derive on the reversed arc first, then compare against the
        // forward arc's fresh derivation
        let fwd = CircularArc::create(
            CoordZM::new(3.1, 4.7),
            CoordZM::new(6.2, 8.9),
            CoordZM::new(10.3, 5.1),
        );
        let rev = CircularArc::create(
            CoordZM::new(10.3, 5.1),
            CoordZM::new(6.2, 8.9),
            CoordZM::new(3.1, 4.7),
        );
        assert_eq!(fwd.center(), rev.center());
        assert_eq!(fwd.radius(), rev.radius());
        assert_eq!(fwd.midpoint(), rev.midpoint());
    }

    #[test]
    fn collinear_arc_degenerates() {
        let arc: CircularArc<f64> = CircularArc::create(
            CoordZM::new(0.0, 0.0),
            CoordZM::new(2.0, 1.0),
            CoordZM::new(4.0, 2.0),
        );
        assert_eq!(arc.orientation(), Orientation::Collinear);
        assert!(arc.is_linear());
        assert!(arc.radius().is_infinite());
        assert_relative_eq!(arc.length(), 20.0f64.sqrt());
        assert_relative_eq!(arc.area(), 0.0);
        assert_relative_eq!(arc.sagitta(), 0.0);

        let mid = arc.midpoint();
        assert_relative_eq!(mid.x, 2.0);
        assert_relative_eq!(mid.y, 1.0);
    }

    #[test]
    fn full_circle() {
        let arc = CircularArc::create(
            CoordZM::new(0.0, 0.0),
            CoordZM::new(1.0, 0.0),
            CoordZM::new(0.0, 0.0),
        );
        assert!(arc.is_circle());
        assert!(!arc.is_linear());
        assert_relative_eq!(arc.center().x, 0.5);
        assert_relative_eq!(arc.center().y, 0.0);
        assert_relative_eq!(arc.radius(), 0.5);
        assert_relative_eq!(arc.angle(), 2.0 * PI);
        assert_relative_eq!(arc.length(), PI);
        assert_relative_eq!(arc.area(), PI * 0.25, max_relative = 1e-12);

        for theta in [-3.0, -1.5, 0.0, 0.7, 3.1] {
            assert!(arc.contains_angle(theta));
        }

        // diametrically opposite p0
        let mid = arc.midpoint();
        assert_relative_eq!(mid.x, 1.0);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn angle_containment() {
        // CCW quarter circle from east to north
        let arc = CircularArc::create(
            CoordZM::new(1.0, 0.0),
            CoordZM::new(2.0f64.sqrt() / 2.0, 2.0f64.sqrt() / 2.0),
            CoordZM::new(0.0, 1.0),
        );
        assert_eq!(arc.orientation(), Orientation::CounterClockwise);
        assert!(arc.contains_angle(0.0));
        assert!(arc.contains_angle(PI / 4.0));
        assert!(arc.contains_angle(PI / 2.0));
        assert!(!arc.contains_angle(-PI / 4.0));
        assert!(!arc.contains_angle(PI));

        assert!(arc.contains_point(coord! { x: 0.0, y: 1.0 }));
        assert!(!arc.contains_point(coord! { x: 0.0, y: -1.0 }));
        assert!(!arc.contains_point(coord! { x: 0.5, y: 0.5 }));
    }

    #[test]
    fn upward_at_point() {
        // CCW semicircle through the east pole
        let arc = CircularArc::create(
            CoordZM::new(0.0, -5.0),
            CoordZM::new(5.0, 0.0),
            CoordZM::new(0.0, 5.0),
        );
        assert!(arc.is_upward_at_point(coord! { x: 4.0, y: -3.0 }));
        assert!(arc.is_upward_at_point(coord! { x: 4.0, y: 3.0 }));

        let rev = arc.reverse();
        assert!(!rev.is_upward_at_point(coord! { x: 4.0, y: 3.0 }));
    }

    #[test]
    fn create_with_synthesizes_midpoint() {
        let arc = CircularArc::create_with(
            CoordZM::new(-5.0, 0.0),
            CoordZM::new(0.0, 5.0),
            coord! { x: 0.0, y: 0.0 },
            5.0,
            Orientation::Clockwise,
        );
        // walking CW from west to north crosses the northwest diagonal
        assert_relative_eq!(arc.p1().x, 5.0 * (3.0 * PI / 4.0).cos(), epsilon = 1e-12);
        assert_relative_eq!(arc.p1().y, 5.0 * (3.0 * PI / 4.0).sin(), epsilon = 1e-12);
        assert_eq!(arc.radius(), 5.0);
        assert_eq!(arc.orientation(), Orientation::Clockwise);
    }

    #[test]
    fn create_with_averages_z_and_m() {
        let arc = CircularArc::create_with(
            CoordZM::new(0.0, 5.0).with_z(6.0).with_m(2.0),
            CoordZM::new(5.0, 0.0).with_z(9.0).with_m(1.0),
            coord! { x: 0.0, y: 0.0 },
            5.0,
            Orientation::Clockwise,
        );
        assert_eq!(arc.p1_zm().z, Some(7.5));
        assert_eq!(arc.p1_zm().m, Some(1.5));
    }

    #[test]
    fn equals_within_tolerance() {
        let a = upper_half_unit_circle();
        let b = CircularArc::create(
            CoordZM::new(-1.0, 1e-9),
            CoordZM::new(0.0, 1.0),
            CoordZM::new(1.0, 0.0),
        );
        assert!(a.equals(&b, 1e-6));
        assert!(!a.equals(&b, 1e-12));
        assert!(!a.equals(&a.reverse(), 1e-6));
    }

    #[test]
    fn arc_views_share_a_sequence() {
        let seq: CoordSeq<f64> =
            vec![(0., 0.), (1., 1.), (2., 0.), (3., -1.), (4., 0.)].into();
        let first = CircularArc::new(&seq, 0);
        let second = CircularArc::new(&seq, 2);
        assert_eq!(first.p2(), second.p0());
        assert_relative_eq!(first.center().x, 1.0);
        assert_relative_eq!(first.center().y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(second.center().x, 3.0);
        assert_relative_eq!(second.center().y, 0.0, epsilon = 1e-15);
    }
}
