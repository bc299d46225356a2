//! The 13×13 poker hand matrix.
//!
//! A static lookup table, not an algorithm: pairs run down the diagonal,
//! suited hands fill the upper triangle, offsuit hands the lower one, with
//! the standard high-card-first naming (AKo, never KAo).

/// Card ranks from strongest to weakest, indexing both matrix axes.
pub const RANKS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

/// Number of rows/columns in the matrix.
pub const GRID_SIZE: usize = 13;

/// Total number of two-card combinations covered by the matrix.
pub const TOTAL_COMBINATIONS: u32 = 1326;

/// The hand at one matrix cell.
///
/// # Panics
///
/// Panics if `row` or `col` is outside the 13×13 grid.
pub fn hand_name(row: usize, col: usize) -> String {
    let rank1 = RANKS[row];
    let rank2 = RANKS[col];
    if row == col {
        format!("{rank1}{rank1}")
    } else if row < col {
        format!("{rank1}{rank2}s")
    } else {
        // High card first for offsuit hands, so the cell mirrors its suited
        // counterpart's name.
        format!("{rank2}{rank1}o")
    }
}

/// The full matrix in row-major order.
pub fn hand_grid() -> Vec<Vec<String>> {
    (0..GRID_SIZE)
        .map(|row| (0..GRID_SIZE).map(|col| hand_name(row, col)).collect())
        .collect()
}

/// Number of concrete card combinations for a hand label: 6 for pairs,
/// 4 for suited, 12 for offsuit, 0 for anything unrecognized.
pub fn combinations(hand: &str) -> u32 {
    let chars: Vec<char> = hand.chars().collect();
    match chars.as_slice() {
        [a, b] if a == b => 6,
        [_, _, 's'] => 4,
        [_, _, 'o'] => 12,
        _ => 0,
    }
}
