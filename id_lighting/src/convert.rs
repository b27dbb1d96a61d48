use id_lump_format::Palette;

/// Samples a 24-bit RGB color to the closest color on an 8-bit palette, by
/// squared Euclidean distance in RGB space.
///
/// Ties go to the lowest palette index: candidates are scanned in ascending
/// order and only a strictly smaller distance replaces the current best.
/// Regenerating a lump from the same palette relies on this to be
/// byte-identical.
///
/// A luminosity-weighted metric would match slightly better perceptually, but
/// the classic colormaps were not built with one, so plain RGB distance it is.
pub fn closest_color(palette: &Palette, target: (u8, u8, u8)) -> u8 {
    let (tr, tg, tb) = (target.0 as i32, target.1 as i32, target.2 as i32);

    let mut best_index = 0u8;
    let mut best_dist = i32::MAX;

    for (i, &(r, g, b)) in palette.iter().enumerate() {
        let dr = tr - r as i32;
        let dg = tg - g as i32;
        let db = tb - b as i32;
        let dist = dr * dr + dg * dg + db * db;

        if dist < best_dist {
            best_index = i as u8;
            best_dist = dist;
        }
    }

    best_index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grayscale_palette() -> Palette {
        let mut palette = [(0, 0, 0); 256];
        for i in 0..256 {
            let v = i as u8;
            palette[i] = (v, v, v);
        }
        palette
    }

    #[test]
    fn exact_entries_match_themselves() {
        let palette = grayscale_palette();
        for i in [0usize, 1, 17, 128, 255] {
            assert_eq!(closest_color(&palette, palette[i]) as usize, i);
        }
    }

    #[test]
    fn duplicate_entries_resolve_to_the_lowest_index() {
        let mut palette = grayscale_palette();
        // Same color as palette[9].
        palette[40] = (9, 9, 9);
        assert_eq!(closest_color(&palette, (9, 9, 9)), 9);
    }

    #[test]
    fn equidistant_candidates_resolve_to_the_lowest_index() {
        let mut palette = [(200, 200, 200); 256];
        palette[0] = (10, 0, 0);
        palette[1] = (0, 10, 0);

        // Both candidates are a squared distance of 50 from the target.
        assert_eq!(closest_color(&palette, (5, 5, 0)), 0);
    }

    #[test]
    fn extreme_distances_do_not_overflow() {
        let mut palette = [(255, 255, 255); 256];
        palette[200] = (0, 0, 1);

        // Distance to every white entry is 3 * 255^2 = 195075, which must not
        // wrap and shadow the one near-black candidate.
        assert_eq!(closest_color(&palette, (0, 0, 0)), 200);
    }
}
