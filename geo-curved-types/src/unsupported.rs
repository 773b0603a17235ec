//! Operations that are only meaningful on linear geometries.
//!
//! Topological predicates, overlay, buffering, and the other operations
//! below are not defined over circular arcs. Rather than silently
//! linearizing, every curved type rejects them with
//! [`Error::UnsupportedOperation`], naming the operation and the geometry
//! type. Callers that want these operations linearize first and operate on
//! the result.

use crate::{
    CircularString, CompoundCurve, Coord, CoordNum, Curve, CurvePolygon, CurvedGeometry, Error,
    MultiCurve, MultiSurface,
};

macro_rules! geometry_name {
    ($ty:ident, $name:literal) => {
        impl<T: CoordNum> $ty<T> {
            #[inline]
            fn geometry_name(&self) -> &'static str {
                $name
            }
        }
    };
}

geometry_name!(CircularString, "CircularString");
geometry_name!(CompoundCurve, "CompoundCurve");
geometry_name!(CurvePolygon, "CurvePolygon");
geometry_name!(MultiCurve, "MultiCurve");
geometry_name!(MultiSurface, "MultiSurface");

impl<T: CoordNum> Curve<T> {
    #[inline]
    fn geometry_name(&self) -> &'static str {
        self.type_name()
    }
}

impl<T: CoordNum> CurvedGeometry<T> {
    #[inline]
    fn geometry_name(&self) -> &'static str {
        self.type_name()
    }
}

macro_rules! impl_unsupported_operations {
    ($ty:ident) => {
        /// Operations meaningful only on linear geometries. Every method in
        /// this block fails with [`Error::UnsupportedOperation`]; linearize
        /// first to apply them.
        impl<T: CoordNum> $ty<T> {
            fn unsupported<R>(&self, operation: &'static str) -> Result<R, Error> {
                Err(Error::UnsupportedOperation {
                    operation,
                    geometry: self.geometry_name(),
                })
            }

            pub fn contains(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("contains")
            }

            pub fn covered_by(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("coveredBy")
            }

            pub fn covers(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("covers")
            }

            pub fn crosses(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("crosses")
            }

            pub fn disjoint(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("disjoint")
            }

            /// Point-set equality. Structural comparison remains available
            /// through `equals_exact` and `PartialEq`.
            pub fn equals_topo(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("equals")
            }

            pub fn intersects(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("intersects")
            }

            pub fn overlaps(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("overlaps")
            }

            pub fn relate(&self, _other: &CurvedGeometry<T>) -> Result<String, Error> {
                self.unsupported("relate")
            }

            pub fn touches(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("touches")
            }

            pub fn within(&self, _other: &CurvedGeometry<T>) -> Result<bool, Error> {
                self.unsupported("within")
            }

            pub fn union(&self, _other: &CurvedGeometry<T>) -> Result<CurvedGeometry<T>, Error> {
                self.unsupported("union")
            }

            pub fn difference(
                &self,
                _other: &CurvedGeometry<T>,
            ) -> Result<CurvedGeometry<T>, Error> {
                self.unsupported("difference")
            }

            pub fn intersection(
                &self,
                _other: &CurvedGeometry<T>,
            ) -> Result<CurvedGeometry<T>, Error> {
                self.unsupported("intersection")
            }

            pub fn sym_difference(
                &self,
                _other: &CurvedGeometry<T>,
            ) -> Result<CurvedGeometry<T>, Error> {
                self.unsupported("symDifference")
            }

            pub fn buffer(&self, _distance: T) -> Result<CurvedGeometry<T>, Error> {
                self.unsupported("buffer")
            }

            pub fn convex_hull(&self) -> Result<CurvedGeometry<T>, Error> {
                self.unsupported("convexHull")
            }

            pub fn distance(&self, _other: &CurvedGeometry<T>) -> Result<T, Error> {
                self.unsupported("distance")
            }

            pub fn is_within_distance(
                &self,
                _other: &CurvedGeometry<T>,
                _distance: T,
            ) -> Result<bool, Error> {
                self.unsupported("isWithinDistance")
            }

            pub fn is_simple(&self) -> Result<bool, Error> {
                self.unsupported("isSimple")
            }

            pub fn is_valid(&self) -> Result<bool, Error> {
                self.unsupported("isValid")
            }

            pub fn centroid(&self) -> Result<Coord<T>, Error> {
                self.unsupported("centroid")
            }

            pub fn boundary(&self) -> Result<CurvedGeometry<T>, Error> {
                self.unsupported("boundary")
            }

            pub fn normalize(&mut self) -> Result<(), Error> {
                self.unsupported("normalize")
            }
        }
    };
}

impl_unsupported_operations!(CircularString);
impl_unsupported_operations!(CompoundCurve);
impl_unsupported_operations!(CurvePolygon);
impl_unsupported_operations!(MultiCurve);
impl_unsupported_operations!(MultiSurface);
impl_unsupported_operations!(Curve);
impl_unsupported_operations!(CurvedGeometry);
