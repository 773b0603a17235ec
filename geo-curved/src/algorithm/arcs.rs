use crate::{CircularArc, CircularString, CoordFloat};
use num_traits::FloatConst;

/// Iterate over the arcs of a curve.
pub trait Arcs<T: CoordFloat + FloatConst> {
    /// Return an iterator yielding one [`CircularArc`] view for each arc.
    /// Arc `i` spans coordinates `2i`, `2i + 1`, and `2i + 2`; consecutive
    /// arcs share an endpoint.
    fn arcs(&self) -> ArcsIter<'_, T>;
}

impl<T: CoordFloat + FloatConst> Arcs<T> for CircularString<T> {
    /// # Examples
    ///
    /// ```
    /// use geo_curved::{Arcs, CircularString};
    ///
    /// let cs = CircularString::try_from(vec![
    ///     (0.0, 0.0),
    ///     (1.0, 1.0),
    ///     (2.0, 0.0),
    ///     (3.0, -1.0),
    ///     (4.0, 0.0),
    /// ])
    /// .unwrap();
    ///
    /// let mut arcs = cs.arcs();
    /// assert_eq!(arcs.len(), 2);
    /// let first = arcs.next().unwrap();
    /// assert_eq!(first.p1(), geo_curved::coord! { x: 1.0, y: 1.0 });
    /// ```
    fn arcs(&self) -> ArcsIter<'_, T> {
        ArcsIter {
            string: self,
            arc: 0,
            num_arcs: self.num_arcs(),
        }
    }
}

/// A [`CircularArc`] iterator returned by the `arcs` method.
#[derive(Debug)]
pub struct ArcsIter<'a, T: CoordFloat> {
    string: &'a CircularString<T>,
    arc: usize,
    num_arcs: usize,
}

impl<'a, T: CoordFloat + FloatConst> Iterator for ArcsIter<'a, T> {
    type Item = CircularArc<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.arc >= self.num_arcs {
            return None;
        }
        let arc = CircularArc::new(self.string.coord_seq(), 2 * self.arc);
        self.arc += 1;
        Some(arc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_arcs - self.arc;
        (remaining, Some(remaining))
    }
}

impl<T: CoordFloat + FloatConst> ExactSizeIterator for ArcsIter<'_, T> {}
