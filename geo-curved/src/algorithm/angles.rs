//! Angle arithmetic on circles.
//!
//! Angles are measured in radians from the circle's center with
//! `atan2(y - c.y, x - c.x)`, and normalized into `(-PI, PI]`. Angular
//! differences carry the sign of the traversal direction.
//!
//! The signed difference is computed through a single euclidean-remainder
//! expression in both directions, so the magnitude of the clockwise span
//! from `b` back to `a` is bit-identical to the counter-clockwise span
//! from `a` to `b`. The direction-neutrality guarantees of linearization
//! and noding rest on this.

use crate::algorithm::orientation::Orientation;
use crate::{Coord, CoordFloat};
use num_traits::FloatConst;

/// Normalize an angle into `(-PI, PI]`.
pub fn normalize<T: CoordFloat + FloatConst>(mut angle: T) -> T {
    let tau = T::PI() + T::PI();
    while angle > T::PI() {
        angle = angle - tau;
    }
    while angle <= -T::PI() {
        angle = angle + tau;
    }
    angle
}

/// The angle of `q` on the circle centered at `center`.
pub fn angle_of<T: CoordFloat>(q: Coord<T>, center: Coord<T>) -> T {
    (q.y - center.y).atan2(q.x - center.x)
}

/// The signed angular span from `from` to `to`, traversed in the given
/// direction: a value in `[0, 2*PI)` counter-clockwise, in `(-2*PI, 0]`
/// clockwise. Zero for collinear "arcs", which have no angular extent.
pub fn angular_diff<T: CoordFloat + FloatConst>(from: T, to: T, orientation: Orientation) -> T {
    let tau = T::PI() + T::PI();
    let rem = |value: T| {
        let r = value % tau;
        if r < T::zero() {
            r + tau
        } else {
            r
        }
    };
    match orientation {
        Orientation::CounterClockwise => rem(to - from),
        Orientation::Clockwise => -rem(from - to),
        Orientation::Collinear => T::zero(),
    }
}

/// The angle halfway along the span from `theta0` to `theta2` in the given
/// direction. A zero-length span is taken to be a full circle, so the
/// midpoint lands diametrically opposite.
///
/// The result is computed from a canonical (counter-clockwise) ordering of
/// the endpoints: reversing the span and the direction yields the
/// bit-identical angle.
pub fn mid_angle<T: CoordFloat + FloatConst>(theta0: T, theta2: T, orientation: Orientation) -> T {
    let tau = T::PI() + T::PI();
    let (start, end) = match orientation {
        Orientation::Clockwise => (theta2, theta0),
        _ => (theta0, theta2),
    };
    let mut span = (end - start) % tau;
    if span < T::zero() {
        span = span + tau;
    }
    if span == T::zero() {
        span = tau;
    }
    normalize(start + span / (T::one() + T::one()))
}

/// The point at `theta` on the circle with the given center and radius.
pub fn point_at_angle<T: CoordFloat>(center: Coord<T>, radius: T, theta: T) -> Coord<T> {
    Coord {
        x: center.x + radius * theta.cos(),
        y: center.y + radius * theta.sin(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn normalize_into_half_open_range() {
        assert_relative_eq!(normalize(3.0 * PI), PI);
        assert_relative_eq!(normalize(-2.5 * PI), -0.5 * PI);
        assert_eq!(normalize(PI), PI);
        assert_eq!(normalize(-PI), PI);
        assert_eq!(normalize(0.0), 0.0);
    }

    #[test]
    fn diff_sign_follows_orientation() {
        let d = angular_diff(0.5, 1.0, Orientation::CounterClockwise);
        assert_relative_eq!(d, 0.5);

        let d = angular_diff(0.5, 1.0, Orientation::Clockwise);
        assert_relative_eq!(d, 0.5 - 2.0 * PI);

        // crossing the branch cut
        let d = angular_diff(3.0, -3.0, Orientation::CounterClockwise);
        assert_relative_eq!(d, 2.0 * PI - 6.0);
    }

    #[test]
    fn reverse_traversal_magnitude_is_bit_identical() {
        let cases = [(0.3, 2.9), (-3.0, 3.0), (1.0, -2.5), (2.2, 2.2 + 1e-9)];
        for (a, b) in cases {
            let fwd = angular_diff(a, b, Orientation::CounterClockwise);
            let rev = angular_diff(b, a, Orientation::Clockwise);
            assert_eq!(fwd, -rev);
        }
    }

    #[test]
    fn mid_angle_is_reversal_stable() {
        let cases = [(0.0, PI), (2.8, -2.8), (-1.0, 1.5), (0.25, 0.75)];
        for (a, b) in cases {
            let fwd = mid_angle(a, b, Orientation::CounterClockwise);
            let rev = mid_angle(b, a, Orientation::Clockwise);
            assert_eq!(fwd, rev);
        }
    }

    #[test]
    fn mid_angle_of_full_circle_is_opposite() {
        let mid = mid_angle(PI / 2.0, PI / 2.0, Orientation::CounterClockwise);
        assert_relative_eq!(mid, -PI / 2.0);
    }
}
