//! 2-D affine transforms between coordinate spaces.
//!
//! An image palette is usually scaled and letterboxed into the view that
//! shows it. [`Affine<Pixel, View>`] describes that placement; its inverse
//! maps a touch back into bitmap pixels.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Result, SwatchError};
use crate::types::Point;

/// Determinants smaller than this are treated as zero.
const SINGULAR_EPSILON: f32 = 1e-9;

/// A 2×3 affine matrix mapping points from space `F` to space `T`.
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
pub struct Affine<F, T> {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
    spaces: PhantomData<fn(F) -> T>,
}

// Manual impls: derives would require the space markers to be `Clone` etc.
impl<F, T> Clone for Affine<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, T> Copy for Affine<F, T> {}

impl<F, T> PartialEq for Affine<F, T> {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients() == other.coefficients()
    }
}

impl<F, T> fmt::Debug for Affine<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Affine")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .field("d", &self.d)
            .field("tx", &self.tx)
            .field("ty", &self.ty)
            .finish()
    }
}

impl<F, T> Default for Affine<F, T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F, T> Affine<F, T> {
    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self {
            a,
            b,
            c,
            d,
            tx,
            ty,
            spaces: PhantomData,
        }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Counter-clockwise rotation (in a y-up frame) about the origin.
    pub fn rotate(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Place a `src_w × src_h` image centred inside `dst_w × dst_h`,
    /// scaled uniformly to fit (letterboxed).
    pub fn fit_center(src_w: f32, src_h: f32, dst_w: f32, dst_h: f32) -> Self {
        if src_w <= 0.0 || src_h <= 0.0 {
            return Self::scale(0.0, 0.0);
        }
        let scale = (dst_w / src_w).min(dst_h / src_h);
        let tx = (dst_w - src_w * scale) * 0.5;
        let ty = (dst_h - src_h * scale) * 0.5;
        Self::new(scale, 0.0, 0.0, scale, tx, ty)
    }

    /// Apply `self`, then `next`.
    pub fn then<U>(&self, next: &Affine<T, U>) -> Affine<F, U> {
        Affine::new(
            next.a * self.a + next.c * self.b,
            next.b * self.a + next.d * self.b,
            next.a * self.c + next.c * self.d,
            next.b * self.c + next.d * self.d,
            next.a * self.tx + next.c * self.ty + next.tx,
            next.b * self.tx + next.d * self.ty + next.ty,
        )
    }

    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// The inverse transform, mapping `T` back into `F`.
    pub fn invert(&self) -> Result<Affine<T, F>> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            tracing::debug!(determinant = det, "refusing to invert singular transform");
            return Err(SwatchError::NonInvertible { determinant: det });
        }

        let inv = 1.0 / det;
        Ok(Affine::new(
            self.d * inv,
            -self.b * inv,
            -self.c * inv,
            self.a * inv,
            (self.c * self.ty - self.d * self.tx) * inv,
            (self.b * self.tx - self.a * self.ty) * inv,
        ))
    }

    pub fn map_point(&self, p: Point<F>) -> Point<T> {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    fn coefficients(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pixel, View};

    fn assert_near(p: Point<Pixel>, x: f32, y: f32) {
        assert!(
            (p.x - x).abs() < 1e-4 && (p.y - y).abs() < 1e-4,
            "expected ({x}, {y}), got {p}"
        );
    }

    #[test]
    fn test_invert_scale_translate() {
        let placement: Affine<Pixel, View> =
            Affine::<Pixel, View>::scale(2.0, 4.0).then(&Affine::translate(10.0, 20.0));
        let inverse = placement.invert().unwrap();

        let view = placement.map_point(Point::new(3.0, 5.0));
        assert_eq!(view, Point::new(16.0, 40.0));
        assert_near(inverse.map_point(view), 3.0, 5.0);
    }

    #[test]
    fn test_invert_rotation() {
        let placement: Affine<Pixel, View> =
            Affine::<Pixel, View>::rotate(30.0).then(&Affine::translate(-4.0, 7.5));
        let inverse = placement.invert().unwrap();

        let original = Point::new(12.0, -3.0);
        assert_near(inverse.map_point(placement.map_point(original)), 12.0, -3.0);
    }

    #[test]
    fn test_invert_singular() {
        let flat: Affine<Pixel, View> = Affine::scale(0.0, 3.0);
        match flat.invert() {
            Err(SwatchError::NonInvertible { determinant }) => assert_eq!(determinant, 0.0),
            other => panic!("expected NonInvertible, got {:?}", other),
        }
    }

    #[test]
    fn test_invert_non_finite() {
        let broken: Affine<Pixel, View> = Affine::scale(f32::NAN, 1.0);
        assert!(broken.invert().is_err());
    }

    #[test]
    fn test_identity_round_trip() {
        let id: Affine<View, View> = Affine::identity();
        assert_eq!(id.invert().unwrap(), id);
        assert_eq!(Affine::<View, View>::default(), id);
    }

    #[test]
    fn test_fit_center_letterboxes() {
        // 100x50 image in a 200x200 view: scaled x2, centred vertically
        let fit: Affine<Pixel, View> = Affine::fit_center(100.0, 50.0, 200.0, 200.0);
        assert_eq!(fit.map_point(Point::new(0.0, 0.0)), Point::new(0.0, 50.0));
        assert_eq!(fit.map_point(Point::new(100.0, 50.0)), Point::new(200.0, 150.0));

        let inverse = fit.invert().unwrap();
        assert_near(inverse.map_point(Point::new(100.0, 100.0)), 50.0, 25.0);
    }

    #[test]
    fn test_fit_center_empty_source_is_singular() {
        let fit: Affine<Pixel, View> = Affine::fit_center(0.0, 10.0, 100.0, 100.0);
        assert!(fit.invert().is_err());
    }
}
