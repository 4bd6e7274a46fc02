//! Tests for the eight orientations of a square and their composition order

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use std::collections::HashSet;
    use tilestitch::spatial::bitmap::{mirror, rotate_clockwise};
    use tilestitch::spatial::symmetry::Orientation;

    fn numbered(side: usize) -> Array2<usize> {
        Array2::from_shape_fn((side, side), |(row, col)| row * side + col)
    }

    // Tests every orientation produces a distinct matrix from an asymmetric input
    // Verified by ignoring the mirrored flag in apply
    #[test]
    fn test_all_orientations_distinct() {
        let pixels = numbered(3);
        let images: HashSet<Vec<usize>> = Orientation::ALL
            .iter()
            .map(|orientation| orientation.apply(&pixels).iter().copied().collect())
            .collect();
        assert_eq!(images.len(), 8);
    }

    // Tests search order starts unmirrored with zero turns
    // Verified by listing mirrored orientations first
    #[test]
    fn test_search_order() {
        assert_eq!(Orientation::ALL[0], Orientation::IDENTITY);
        assert!(Orientation::ALL[..4].iter().all(|o| !o.mirrored));
        assert!(Orientation::ALL[4..].iter().all(|o| o.mirrored));
        assert_eq!(Orientation::ALL[3].quarter_turns, 3);
    }

    // Tests mirroring is applied before rotation
    // Verified by rotating before mirroring in apply
    #[test]
    fn test_apply_mirrors_then_rotates() {
        let pixels = numbered(4);
        let oriented = Orientation::new(1, true).apply(&pixels);
        assert_eq!(oriented, rotate_clockwise(&mirror(&pixels)));
        assert_ne!(oriented, mirror(&rotate_clockwise(&pixels)));
    }

    // Tests quarter turns are reduced modulo four
    // Verified by storing the raw turn count
    #[test]
    fn test_new_reduces_turns() {
        assert_eq!(Orientation::new(5, false), Orientation::new(1, false));
        assert_eq!(Orientation::new(4, true).quarter_turns, 0);
        assert_eq!(Orientation::IDENTITY.apply(&numbered(3)), numbered(3));
    }

    // Tests human-readable orientation names
    // Verified by omitting the mirrored prefix
    #[test]
    fn test_display() {
        assert_eq!(Orientation::new(2, false).to_string(), "180° clockwise");
        assert_eq!(Orientation::new(1, true).to_string(), "mirrored, 90° clockwise");
    }
}
