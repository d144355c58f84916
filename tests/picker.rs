//! End-to-end picker sessions over both palette kinds.

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use swatch::config::CONFIG_FILENAME;
use swatch::{
    Colour, Config, DragEvent, HueWheel, LinearSlider, PaletteSource, Picker, Point, Preferences,
    Size, SliderChannel, SwatchError, TouchPhase,
};

fn wheel_picker() -> Picker {
    Picker::new(HueWheel::fit(100.0, 100.0).unwrap(), 100.0, 100.0).unwrap()
}

/// 20x20 image, opaque red in the 10x10 middle square.
fn write_square_png(dir: &TempDir) -> std::path::PathBuf {
    let img = RgbaImage::from_fn(20, 20, |x, y| {
        if (5..15).contains(&x) && (5..15).contains(&y) {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let path = dir.path().join("square.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_wheel_drag_with_sliders() {
    let mut picker = wheel_picker();
    picker.attach_slider(LinearSlider::new(SliderChannel::Brightness, 100.0));
    picker.attach_slider(LinearSlider::new(SliderChannel::Alpha, 100.0));

    let events = picker.touch(TouchPhase::Down, Point::new(100.0, 50.0)).unwrap();
    assert_eq!(
        events,
        vec![
            DragEvent::StartedDragging,
            DragEvent::Changed {
                value: Colour::rgb(255, 0, 0),
                from_user: true
            },
        ]
    );

    // Dragging far outside the wheel stays on the rim
    picker.touch(TouchPhase::Move, Point::new(50.0, 500.0)).unwrap();
    let point = picker.selected_point();
    assert!((point.x - 50.0).abs() < 0.01);
    assert!((point.y - 100.0).abs() < 0.01);

    let events = picker.touch(TouchPhase::Up, Point::new(100.0, 50.0)).unwrap();
    assert_eq!(events.last(), Some(&DragEvent::StoppedDragging));

    picker
        .touch_slider(SliderChannel::Brightness, TouchPhase::Down, 50.0)
        .unwrap();
    let events = picker
        .touch_slider(SliderChannel::Alpha, TouchPhase::Up, 0.0)
        .unwrap();
    assert_eq!(
        events,
        vec![
            DragEvent::Changed {
                value: Colour::argb(0, 128, 0, 0),
                from_user: true
            },
            DragEvent::StoppedDragging,
        ]
    );
}

#[test]
fn test_raster_snaps_to_opaque_square() {
    let dir = TempDir::new().unwrap();
    let path = write_square_png(&dir);

    let config = Config {
        palette: PaletteSource::Image(path),
        size: Size::new(200, 200),
        ..Config::default()
    };
    let palette = config.palette.load(config.size).unwrap();
    let mut picker = Picker::new(palette, 200.0, 200.0)
        .unwrap()
        .with_snapper(config.snap);

    picker.touch(TouchPhase::Down, Point::new(0.0, 0.0)).unwrap();

    let point = picker.selected_point();
    assert_eq!(picker.colour(), Colour::rgb(255, 0, 0));
    assert!(point.x >= 50.0 && point.x <= 53.0, "x = {}", point.x);
    assert!(point.y >= 50.0 && point.y <= 53.0, "y = {}", point.y);

    let err = picker.select_by_colour(Colour::rgb(255, 0, 0)).unwrap_err();
    assert!(matches!(err, SwatchError::UnsupportedPalette { .. }));
}

#[test]
fn test_config_file_drives_picker() {
    let dir = TempDir::new().unwrap();
    write_square_png(&dir);
    std::fs::write(
        dir.path().join(CONFIG_FILENAME),
        "palette: square.png\nsize: {width: 40, height: 40}\nsnap: {threshold: 0.5}\n",
    )
    .unwrap();

    let config = Config::discover(dir.path()).unwrap();
    let palette = config.palette.load(config.size).unwrap();
    let mut picker = Picker::new(palette, 40.0, 40.0)
        .unwrap()
        .with_snapper(config.snap);

    assert_eq!(picker.colour(), Colour::rgb(255, 0, 0));
    picker.select_point(Point::new(39.0, 20.0)).unwrap();
    assert_eq!(picker.colour(), Colour::rgb(255, 0, 0));
    assert!(picker.selected_point().x < 30.0);
}

#[test]
fn test_preferences_survive_serialization() {
    let mut picker = wheel_picker();
    picker.attach_slider(LinearSlider::new(SliderChannel::Alpha, 100.0));
    picker.select_point(Point::new(50.0, 100.0)).unwrap();
    picker.set_slider_position(SliderChannel::Alpha, 0.5).unwrap();

    let mut prefs = Preferences::new();
    prefs.save_picker("accent", &picker);
    let json = serde_json::to_string(&prefs).unwrap();

    let loaded: Preferences = serde_json::from_str(&json).unwrap();
    let mut restored = wheel_picker();
    restored.attach_slider(LinearSlider::new(SliderChannel::Alpha, 100.0));
    loaded.restore_picker("accent", &mut restored).unwrap();

    assert_eq!(restored.state(), picker.state());
}

#[test]
fn test_state_json() {
    let mut picker = wheel_picker();
    picker.select_point(Point::new(100.0, 50.0)).unwrap();

    let json = serde_json::to_string(&picker.state()).unwrap();
    insta::assert_snapshot!(
        json,
        @r##"{"selected_point":{"x":100.0,"y":50.0},"pure_colour":"#FF0000","colour":"#FF0000"}"##
    );
}
