/// Built-in designs, laid out as bands of 5 rows. Each row of a band holds
/// the same row of several 5x5 designs side by side.
///
/// Reference layout of one design:
///
/// ```text
/// ┏━─┳┓   A h h' K B    corners, outer and inner horizontal, top junction
/// ┣/\╋┫   I O o  M J    header junctions, scroll-up indicator
/// ┃ )││   V Y y  | V    unselected bullet, verticals
/// │[]││   V X x  | V    selected bullet
/// ┗\/┻┛   C P p  L D    corners, scroll-down indicator, bottom junction
/// ```
const DESIGN_BANDS: &[[&str; 5]] = &[
    [
        r"┌──┬┐.--+.+--++",
        r"├/\┼┤+/\+++/\++",
        r"│ )││| )||| )||",
        r"│[]││|[]|||[]||",
        r"└\/┴┘'\/+'+\/++",
    ],
    [
        r"╒══╤╕╔══╦╗┏━━┳┓┌──┬┐┼──┼┼╋━━╋╋",
        r"╞/\╪╡╠/\╬╣┣/\╋┫┢/\╈┪┼/\┼┼╋/\╋╋",
        r"│ )││║ )║║┃ )┃┃│ )│││ )││┃ )┃┃",
        r"│[]││║[]║║┃[]┃┃│[]│││[]││┃[]┃┃",
        r"╘\/╧╛╚\/╩╝┗\/┻┛┗\/┻┛┼\/┼┼╋\/╋╋",
    ],
    [
        r"┌───┐┌  ┬┐┌   ┐     ",
        r"│/\ │├/\┼┤ /\   /\  ",
        r"│ ) │  )    )    )  ",
        r"│[] │ []   []   []  ",
        r"└\/─┘└\/┴┘└\/ ┘ \/  ",
    ],
    [
        r" ───  ─── ═════━━━━━",
        r" /\   /\─ ═/\══━/\━━",
        r"  )    )    )    )  ",
        r" []   []   []   []  ",
        r" \/─  \/─ ═\/══━\/━━",
    ],
    [
        r"               ",
        r"│/\││ /\┼ │/\  ",
        r"│ )││  )│ │ )  ",
        r"│[]││ []│ │[]  ",
        r" \/   \/   \/  ",
    ],
];

pub(super) const DESIGN_SIDE: usize = 5;

fn band_design_count(band: &[&str; 5]) -> usize {
    band[0].chars().count() / DESIGN_SIDE
}

/// Number of designs in the catalog.
pub fn design_count() -> usize {
    DESIGN_BANDS.iter().map(band_design_count).sum()
}

/// Glyphs of the design at zero-based `index`, row by row.
pub(super) fn design_glyphs(index: usize) -> Option<Vec<char>> {
    let mut rest = index;
    for band in DESIGN_BANDS {
        let count = band_design_count(band);
        if rest >= count {
            rest -= count;
            continue;
        }
        let column = rest * DESIGN_SIDE;
        let glyphs = band
            .iter()
            .flat_map(|row| row.chars().skip(column).take(DESIGN_SIDE))
            .collect();
        return Some(glyphs);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_band_row_has_the_same_width() {
        for band in DESIGN_BANDS {
            let width = band[0].chars().count();
            assert_eq!(width % DESIGN_SIDE, 0);
            for row in band {
                assert_eq!(row.chars().count(), width, "row {row:?}");
            }
        }
    }

    #[test]
    fn catalog_holds_twenty_designs() {
        assert_eq!(design_count(), 20);
        assert!(design_glyphs(19).is_some());
        assert!(design_glyphs(20).is_none());
    }

    #[test]
    fn designs_are_cut_across_bands() {
        let first_of_second_band = design_glyphs(3).expect("design 4");
        assert_eq!(first_of_second_band[0], '╒');
        assert_eq!(first_of_second_band[24], '╛');
    }
}
