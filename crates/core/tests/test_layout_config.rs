use hexgrid::{Hex, Layout, LayoutConfig, OrientationKind, Point};
use validator::ValidationErrors;

#[test]
fn test_layout_config_validation() {
    let config = LayoutConfig {
        orientation: OrientationKind::Flat, // valid
        scale: Point::new(0.0, 10.0),       // invalid (zero)
        origin: Point::new(f64::NAN, 0.0),  // invalid (not finite)
        size: Point::new(-1.0, 100.0),      // invalid (negative)
    };

    // This is a bit of a lazy check but it works well enough
    let err = Layout::from_config(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["origin", "scale", "size"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_layout_config_infinite_scale() {
    let config = LayoutConfig {
        scale: Point::new(10.0, f64::INFINITY),
        ..Default::default()
    };
    let err = Layout::from_config(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    assert_eq!(
        validation_errors.errors().keys().copied().collect::<Vec<&str>>(),
        vec!["scale"]
    );
}

#[test]
fn test_layout_from_config() {
    let config = LayoutConfig {
        orientation: OrientationKind::Flat,
        scale: Point::new(10.0, 15.0),
        origin: Point::new(35.0, 71.0),
        size: Point::new(640.0, 480.0),
    };
    let layout = Layout::from_config(config).unwrap();
    assert_eq!(
        layout,
        Layout::new(
            OrientationKind::Flat,
            Point::new(10.0, 15.0),
            Point::new(35.0, 71.0),
        )
        .with_size(Point::new(640.0, 480.0))
    );
    assert_eq!(layout.size(), Point::new(640.0, 480.0));
    assert_eq!(layout.from_hex(Hex::ORIGIN), Point::new(35.0, 71.0));
}

#[cfg(feature = "json")]
#[test]
fn test_layout_from_json() {
    let config = LayoutConfig::from_json(
        r#"{"orientation": "flat", "scale": {"x": 0.0, "y": 1.0}}"#,
    )
    .unwrap();
    assert_eq!(config.orientation, OrientationKind::Flat);
    // Deserializing doesn't validate, building the layout does
    assert!(Layout::from_config(config).is_err());
}
