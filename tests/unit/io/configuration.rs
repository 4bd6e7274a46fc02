//! Tests for format constants and their consistency

#[cfg(test)]
mod tests {
    use tilestitch::io::configuration::{
        BACKGROUND_COLOR, EMPTY_PIXEL, FILLED_PIXEL, MIN_TILE_SIDE, MONSTER_COLOR, SEA_MONSTER,
        STENCIL_MARKER, WATER_COLOR,
    };

    // Tests the built-in stencil rows form a rectangle of 15 required cells
    // Verified by trimming trailing spaces from the stencil rows
    #[test]
    fn test_sea_monster_rows() {
        assert!(SEA_MONSTER.iter().all(|row| row.len() == 20));
        let required: usize = SEA_MONSTER
            .iter()
            .map(|row| row.chars().filter(|&c| c == STENCIL_MARKER).count())
            .sum();
        assert_eq!(required, 15);
    }

    // Tests pixel characters are distinct and tiles keep an interior
    // Verified by setting the minimum tile side to 2
    #[test]
    fn test_format_constants() {
        assert_ne!(FILLED_PIXEL, EMPTY_PIXEL);
        assert!(MIN_TILE_SIDE >= 3);
    }

    // Tests export colors can be told apart
    // Verified by reusing the water color for matches
    #[test]
    fn test_palette_distinct() {
        assert_ne!(WATER_COLOR, MONSTER_COLOR);
        assert_ne!(WATER_COLOR, BACKGROUND_COLOR);
        assert_ne!(MONSTER_COLOR, BACKGROUND_COLOR);
    }
}
