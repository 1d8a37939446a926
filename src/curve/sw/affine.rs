//! Affine points on a curve in short Weierstrass form.

use core::fmt::{Debug, Display, Formatter};

use num_bigint::BigUint;

/// Affine coordinates for a point on an elliptic curve in short Weierstrass
/// form, over the prime field of the curve it was constructed for.
///
/// A point is an immutable value: either the group identity (conventionally
/// the point at infinity) or a coordinate pair with both coordinates in
/// `[0, p)`. Group operations live on [`SwCurve`][super::SwCurve] and
/// produce new points.
#[derive(Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum Affine {
    /// The neutral element of the curve group.
    Infinity,
    /// A finite point satisfying the curve equation.
    Point {
        /// x-coordinate.
        x: BigUint,
        /// y-coordinate.
        y: BigUint,
    },
}

impl Affine {
    /// Constructs a point from x and y coordinates.
    ///
    /// # Warning
    ///
    /// Does *not* perform any checks to ensure the point is on the curve.
    /// Use [`SwCurve::point`][super::SwCurve::point] for the checked
    /// constructor.
    pub const fn new_unchecked(x: BigUint, y: BigUint) -> Self {
        Affine::Point { x, y }
    }

    /// Returns the x and y coordinates of this point, or `None` for the
    /// identity.
    pub fn xy(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Affine::Infinity => None,
            Affine::Point { x, y } => Some((x, y)),
        }
    }

    /// Is `self` the point at infinity?
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Affine::Infinity)
    }
}

impl Display for Affine {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Affine::Infinity => write!(f, "infinity"),
            Affine::Point { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

impl Debug for Affine {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Affine::Infinity => write!(f, "infinity"),
            Affine::Point { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

impl Default for Affine {
    /// The identity element.
    fn default() -> Self {
        Affine::Infinity
    }
}
