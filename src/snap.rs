//! Boundary snapping for raster palettes.
//!
//! A touch can land on a transparent part of a bitmap palette (or outside it
//! entirely). The snapper walks the segment between the touch and the
//! palette centre by bisection until it brackets the opaque/transparent
//! boundary to within a few view units.
//!
//! Precondition: along the segment from the candidate to the centre, the
//! boundary is crossed at most once, and the centre itself is opaque. When
//! that holds the returned point is always opaque. The loop is capped, so a
//! palette violating it still terminates.

use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::error::{Result, SwatchError};
use crate::geometry::PaletteGeometry;
use crate::types::{Pixel, Point, View};

/// Bisection settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundarySnapper {
    /// Stop once the bracket is this short (view units).
    pub threshold: f32,
    /// Hard cap on bisection steps.
    pub max_iterations: u32,
}

impl Default for BoundarySnapper {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            max_iterations: 20,
        }
    }
}

impl BoundarySnapper {
    pub fn new(threshold: f32, max_iterations: u32) -> Self {
        Self {
            threshold,
            max_iterations,
        }
    }

    /// Snap `candidate` to the nearest opaque point toward `center`.
    ///
    /// Raster palettes are sampled through their own bounds placement.
    pub fn snap(
        &self,
        palette: &PaletteGeometry,
        center: Point<View>,
        candidate: Point<View>,
    ) -> Result<Point<View>> {
        let to_pixel = palette.view_transform().invert().map_err(|_| {
            SwatchError::InvalidPalette {
                message: format!("{} has a degenerate placement", palette.kind()),
            }
        })?;
        self.snap_with(palette, &to_pixel, center, candidate)
    }

    /// Like [`snap`](Self::snap) with a caller-supplied view→pixel mapping.
    pub fn snap_with(
        &self,
        palette: &PaletteGeometry,
        to_pixel: &Affine<View, Pixel>,
        center: Point<View>,
        candidate: Point<View>,
    ) -> Result<Point<View>> {
        let raster = match palette {
            PaletteGeometry::HueWheel(wheel) => return Ok(wheel.clamp_to_disk(candidate)),
            PaletteGeometry::Raster(raster) => raster,
        };

        if !candidate.is_finite() || !center.is_finite() {
            return Err(SwatchError::InvalidPalette {
                message: format!("cannot snap non-finite point {} toward {}", candidate, center),
            });
        }

        let (mut start, mut end) = (candidate, center);
        let mut iterations = 0;

        while start.distance(end) > self.threshold {
            if iterations >= self.max_iterations {
                tracing::warn!(
                    %candidate,
                    %center,
                    iterations,
                    "boundary snap hit the iteration cap"
                );
                break;
            }
            iterations += 1;

            let mid = start.midpoint(end);
            if raster.colour_at(to_pixel.map_point(mid)).is_transparent() {
                // Boundary lies between mid and the centre
                start = mid;
            } else {
                end = mid;
            }
        }

        tracing::trace!(%candidate, snapped = %end, iterations, "boundary snap");
        Ok(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{HueWheel, RasterImage};
    use crate::types::Colour;

    const RED: Colour = Colour::rgb(255, 0, 0);

    fn opaque_at(palette: &PaletteGeometry, p: Point<View>) -> bool {
        !palette
            .colour_at(p, &palette.view_transform().invert().unwrap())
            .is_transparent()
    }

    /// A `size`×`size` bitmap with an opaque disk of radius `r` in the middle.
    fn disk(size: u32, r: f32) -> PaletteGeometry {
        let c = size as f32 / 2.0;
        let pixels = (0..size * size)
            .map(|i| {
                let (x, y) = ((i % size) as f32 + 0.5, (i / size) as f32 + 0.5);
                if (x - c).hypot(y - c) <= r {
                    RED
                } else {
                    Colour::TRANSPARENT
                }
            })
            .collect();
        RasterImage::new(size, size, pixels).unwrap().into()
    }

    #[test]
    fn test_two_by_two_converges_near_opaque_pixel() {
        let palette: PaletteGeometry = RasterImage::new(
            2,
            2,
            vec![Colour::TRANSPARENT, Colour::TRANSPARENT, Colour::TRANSPARENT, RED],
        )
        .unwrap()
        .into();

        let center = Point::new(1.0, 1.0);
        let snapped = BoundarySnapper::default()
            .snap(&palette, center, Point::new(0.0, 0.0))
            .unwrap();

        assert!(snapped.distance(center) <= 3.0);
        assert!(opaque_at(&palette, snapped));
    }

    #[test]
    fn test_outside_point_snaps_onto_disk() {
        let palette = disk(100, 30.0);
        let center = Point::new(50.0, 50.0);
        let snapper = BoundarySnapper::default();

        for candidate in [
            Point::new(0.0, 0.0),
            Point::new(99.0, 50.0),
            Point::new(50.0, -200.0),
            Point::new(400.0, 310.0),
        ] {
            let snapped = snapper.snap(&palette, center, candidate).unwrap();
            assert!(opaque_at(&palette, snapped), "{} snapped to {}", candidate, snapped);
            // Lands near the rim, not back at the centre
            assert!(snapped.distance(center) > 30.0 - 2.0 * snapper.threshold);
        }
    }

    #[test]
    fn test_inside_point_stays_close() {
        let palette = disk(100, 30.0);
        let candidate = Point::new(60.0, 55.0);
        let snapped = BoundarySnapper::default()
            .snap(&palette, Point::new(50.0, 50.0), candidate)
            .unwrap();
        assert!(opaque_at(&palette, snapped));
        assert!(snapped.distance(candidate) <= 3.0);
    }

    #[test]
    fn test_near_center_returns_center() {
        let palette = disk(100, 30.0);
        let center = Point::new(50.0, 50.0);
        let snapped = BoundarySnapper::default()
            .snap(&palette, center, Point::new(51.0, 52.0))
            .unwrap();
        assert_eq!(snapped, center);
    }

    #[test]
    fn test_iteration_cap_terminates() {
        let palette = disk(100, 30.0);
        let snapper = BoundarySnapper::new(0.0, 5);
        let snapped = snapper
            .snap(&palette, Point::new(50.0, 50.0), Point::new(1e9, 1e9))
            .unwrap();
        assert!(snapped.is_finite());
        assert!(opaque_at(&palette, snapped));
    }

    #[test]
    fn test_hue_wheel_bypasses_bisection() {
        let wheel = HueWheel::new(Point::new(50.0, 50.0), 50.0).unwrap();
        let palette = PaletteGeometry::from(wheel);
        let snapped = BoundarySnapper::new(0.0, 0)
            .snap(&palette, Point::new(50.0, 50.0), Point::new(50.0, 300.0))
            .unwrap();
        assert_eq!(snapped, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_non_finite_candidate_rejected() {
        let palette = disk(10, 3.0);
        let result = BoundarySnapper::default().snap(
            &palette,
            Point::new(5.0, 5.0),
            Point::new(f32::NAN, 0.0),
        );
        assert!(matches!(result, Err(SwatchError::InvalidPalette { .. })));
    }
}
