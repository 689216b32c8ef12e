//! 2D affine transforms for shader bases.

use tracing::warn;

use crate::error::{PaintError, Result};
use crate::geometry::Offset;

/// 2D affine transformation.
///
/// Elements `[a, b, c, d, tx, ty]` map a point as
/// `x' = a*x + c*y + tx`, `y' = b*x + d*y + ty`:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0   1 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub elements: [f32; 6],
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub const fn new(elements: [f32; 6]) -> Self {
        Self { elements }
    }

    pub const fn translation(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn transform_point(&self, point: Offset) -> Offset {
        let [a, b, c, d, tx, ty] = self.elements;
        Offset::new(
            a * point.dx + c * point.dy + tx,
            b * point.dx + d * point.dy + ty,
        )
    }

    /// Concatenate this transform with another (`self * other`).
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &Affine) -> Affine {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;
        Affine {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d, ..] = self.elements;
        a * d - c * b
    }

    /// Closed-form inverse.
    ///
    /// Computed in f64 so a badly scaled basis does not lose the
    /// translation part to rounding. A near-zero determinant is an error,
    /// never NaN or infinity in the result.
    pub fn try_invert(&self) -> Result<Affine> {
        let [a, b, c, d, tx, ty] = self.elements.map(f64::from);
        let det = a * d - c * b;
        if det.abs() < 1e-6 {
            return Err(PaintError::SingularTransform { det: det as f32 });
        }
        let inv_det = 1.0 / det;
        Ok(Affine::new([
            (d * inv_det) as f32,
            (-b * inv_det) as f32,
            (-c * inv_det) as f32,
            (a * inv_det) as f32,
            ((c * ty - d * tx) * inv_det) as f32,
            ((b * tx - a * ty) * inv_det) as f32,
        ]))
    }

    /// Inverse for shader construction: a singular basis degrades to the
    /// identity instead of propagating NaN into the sampler.
    pub fn invert_or_identity(&self) -> Affine {
        match self.try_invert() {
            Ok(inverse) => inverse,
            Err(error) => {
                warn!("{error}, substituting identity");
                Affine::IDENTITY
            }
        }
    }
}
