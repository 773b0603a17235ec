use crate::{Coord, CoordFloat};

/// The euclidean distance between two coordinates.
pub fn point_distance<T: CoordFloat>(a: Coord<T>, b: Coord<T>) -> T {
    (a.x - b.x).hypot(a.y - b.y)
}

/// The shortest distance from `p` to the segment between `a` and `b`.
pub fn point_segment_distance<T: CoordFloat>(p: Coord<T>, a: Coord<T>, b: Coord<T>) -> T {
    if a == b {
        return point_distance(p, a);
    }
    let d2 = (b.x - a.x) * (b.x - a.x) + (b.y - a.y) * (b.y - a.y);
    let t = ((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / d2;
    let t = t.max(T::zero()).min(T::one());
    let nearest = Coord {
        x: a.x + t * (b.x - a.x),
        y: a.y + t * (b.y - a.y),
    };
    point_distance(p, nearest)
}
