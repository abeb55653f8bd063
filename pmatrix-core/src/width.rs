//! Display width heuristic used to align printed cells

/// Number of padding units a value occupies beyond a single digit
///
/// Values with magnitude below one count as 0, positive values count
/// `floor(log10(v))`, and negative values count one more for the sign.
/// Cells are padded with `max_width - display_width(v)` spaces, so this is
/// an alignment heuristic rather than a string length.
pub const fn display_width(value: i32) -> usize {
    if value == 0 {
        return 0;
    }

    let digits = value.unsigned_abs().ilog10() as usize;
    if value < 0 {
        digits + 1
    } else {
        digits
    }
}
