use hexgrid::{Hex, Layout, Orientation, OrientationKind, Point};
use strum::IntoEnumIterator;

fn layouts() -> impl Iterator<Item = Layout> {
    OrientationKind::iter().map(|kind| {
        Layout::new(kind, Point::new(10.0, 15.0), Point::new(35.0, 71.0))
    })
}

#[test]
fn test_layout_round_trip() {
    let h = Hex::new(3, 4, -7).unwrap();
    for layout in layouts() {
        assert_eq!(layout.to_hex(layout.from_hex(h)).round(), h, "{}", layout);
    }
}

#[test]
fn test_layout_round_trip_neighborhood() {
    for layout in layouts() {
        for x in -6..=6 {
            for y in -6..=6 {
                let h = Hex::new_xy(x, y);
                let pixel = layout.from_hex(h);
                assert_eq!(layout.to_hex(pixel).round(), h, "{}", layout);
            }
        }
    }
}

/// Every corner is shared by exactly 3 hexes: this one and two neighbors
#[test]
fn test_layout_corners_shared() {
    for layout in layouts() {
        let h = Hex::new(1, -2, 1).unwrap();
        for corner in layout.hex_corners(h, 1.0) {
            let touching = h
                .neighbors()
                .filter(|neighbor| {
                    layout.hex_corners(*neighbor, 1.0).iter().any(|other| {
                        (other.x - corner.x).abs() < 1e-9
                            && (other.y - corner.y).abs() < 1e-9
                    })
                })
                .count();
            assert_eq!(touching, 2, "{} corner {}", layout, corner);
        }
    }
}

#[test]
fn test_layout_custom_orientation() {
    // Identity-ish orientation that isn't one of the canonical ones
    let orientation = Orientation {
        f0: 1.0,
        f1: 0.0,
        f2: 0.0,
        f3: 1.0,
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        b3: 1.0,
        start_angle: 0.0,
    };
    let layout = Layout::new(orientation, Point::new(2.0, 2.0), Point::ORIGIN);
    assert_eq!(layout.orientation().kind(), None);
    assert_eq!(layout.from_hex(Hex::new_xy(3, 4)), Point::new(6.0, 8.0));
    assert!(layout.to_string().starts_with("Layout(Orientation {"));
}
