use hexgrid::{Hex, HexDirection, NeighborDirection};

/// A spread of endpoints in every sextant, including some far apart
fn endpoints() -> Vec<Hex> {
    let mut hexes = vec![Hex::ORIGIN];
    for dir in NeighborDirection::ALL {
        for distance in [1, 2, 5, 13] {
            let hex = dir.to_vector() * distance;
            hexes.push(hex);
            hexes.push(hex.rotate_left(1) + dir.to_vector() * 3);
        }
    }
    hexes
}

#[test]
fn test_linedraw_properties() {
    let hexes = endpoints();
    for &a in &hexes {
        for &b in &hexes {
            let line = Hex::linedraw(a, b);
            assert_eq!(line.len(), a.distance(b) + 1, "{} -> {}", a, b);
            assert_eq!(line.first(), Some(&a));
            assert_eq!(line.last(), Some(&b));
            for pair in line.windows(2) {
                assert_eq!(
                    pair[0].distance(pair[1]),
                    1,
                    "line {} -> {} has a gap: {:?}",
                    a,
                    b,
                    line
                );
            }
        }
    }
}

/// A line along a single axis is exactly the repeated neighbor step
#[test]
fn test_linedraw_straight() {
    let start = Hex::new(2, -3, 1).unwrap();
    for dir in NeighborDirection::ALL {
        let expected: Vec<Hex> =
            (0..=7).map(|i| start + dir.to_vector() * i).collect();
        let end = start + dir.to_vector() * 7;
        assert_eq!(Hex::linedraw(start, end), expected, "{:?}", dir);
    }
}
