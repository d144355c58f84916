//! Benchmarks for the swatch sampling pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swatch::{
    argb_to_hsv, hsv_to_argb, BoundarySnapper, Colour, HueWheel, PaletteGeometry, Picker, Point,
    RasterImage, TouchPhase, View,
};

/// A square raster with an opaque disc in the middle.
fn disc_raster(size: u32) -> RasterImage {
    let r = size as f32 / 2.0;
    let pixels = (0..size * size)
        .map(|i| {
            let (x, y) = ((i % size) as f32 + 0.5, (i / size) as f32 + 0.5);
            if (x - r).hypot(y - r) <= r * 0.8 {
                Colour::rgb(200, 40, 90)
            } else {
                Colour::TRANSPARENT
            }
        })
        .collect();
    RasterImage::new(size, size, pixels).unwrap()
}

// -- Colour space benchmarks --

fn bench_space(c: &mut Criterion) {
    let mut group = c.benchmark_group("space");

    let colours: Vec<Colour> = (0..256u32)
        .map(|i| Colour::from_u32(0xFF00_0000 | (i.wrapping_mul(0x9E37_79B9) & 0x00FF_FFFF)))
        .collect();

    group.bench_function("hsv_round_trip_256", |b| {
        b.iter(|| {
            for &colour in &colours {
                let hsv = argb_to_hsv(black_box(colour));
                black_box(hsv_to_argb(hsv.hue, hsv.saturation, hsv.value, colour.a));
            }
        })
    });

    group.finish();
}

// -- Palette sampling benchmarks --

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    let wheel = HueWheel::fit(512.0, 512.0).unwrap();
    group.bench_function("wheel_colour_at", |b| {
        b.iter(|| wheel.colour_at(black_box(Point::<View>::new(400.0, 120.0))))
    });

    let colour = Colour::rgb(51, 153, 204);
    group.bench_function("wheel_point_at", |b| {
        b.iter(|| wheel.point_at(black_box(colour)))
    });

    group.finish();
}

// -- Boundary snapping benchmarks --

fn bench_snapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapping");

    let palette = PaletteGeometry::from(disc_raster(256));
    let snapper = BoundarySnapper::default();
    let center = palette.center();

    group.bench_function("snap_corner_256", |b| {
        b.iter(|| {
            snapper
                .snap(&palette, center, black_box(Point::new(0.0, 0.0)))
                .unwrap()
        })
    });

    let fine = BoundarySnapper::new(0.01, 64);
    group.bench_function("snap_corner_fine_256", |b| {
        b.iter(|| {
            fine.snap(&palette, center, black_box(Point::new(0.0, 0.0)))
                .unwrap()
        })
    });

    let mut picker = Picker::new(disc_raster(256), 512.0, 512.0).unwrap();
    group.bench_function("picker_drag_raster", |b| {
        b.iter(|| {
            picker.touch(TouchPhase::Down, Point::new(10.0, 10.0)).unwrap();
            picker.touch(TouchPhase::Move, Point::new(500.0, 20.0)).unwrap();
            picker.touch(TouchPhase::Up, Point::new(256.0, 500.0)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_space, bench_sampling, bench_snapping);
criterion_main!(benches);
