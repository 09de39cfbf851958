//! Core board vocabulary: colors, square indices, and the column/row
//! membership tables that the move generators use to reject edge wraparound.
//!
//! Squares are indexed rank-major from Black's back rank: 0 is a8, 63 is h1.
//! Raw offset arithmetic on that indexing cannot tell "stepped off the h-file"
//! from "arrived on the a-file one rank down", so every generator consults
//! these tables instead of trusting a 0..64 bounds check.

pub type Square = u8;

pub const NUM_TILES: usize = 64;
pub const TILES_PER_ROW: usize = 8;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Sign applied to move offsets: White walks toward index 0, Black away
    /// from it.
    #[inline]
    pub const fn direction(self) -> i16 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite_direction(self) -> i16 {
        -self.direction()
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    /// The opponent's back rank, where this color's pawns promote.
    #[inline]
    pub fn is_promotion_square(self, square: Square) -> bool {
        match self {
            Color::White => FIRST_ROW[square as usize],
            Color::Black => EIGHTH_ROW[square as usize],
        }
    }
}

const fn column(mut tile: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    while tile < NUM_TILES {
        table[tile] = true;
        tile += TILES_PER_ROW;
    }
    table
}

const fn row(start: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut tile = start;
    loop {
        table[tile] = true;
        tile += 1;
        if tile % TILES_PER_ROW == 0 {
            break;
        }
    }
    table
}

pub const FIRST_COLUMN: [bool; NUM_TILES] = column(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = column(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = column(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = column(7);

pub const FIRST_ROW: [bool; NUM_TILES] = row(0);
pub const SECOND_ROW: [bool; NUM_TILES] = row(8);
pub const SEVENTH_ROW: [bool; NUM_TILES] = row(48);
pub const EIGHTH_ROW: [bool; NUM_TILES] = row(56);

/// Algebraic name for every square index, a8 first.
pub const ALGEBRAIC_NOTATION: [&str; NUM_TILES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

#[inline]
pub fn is_valid_tile(coordinate: i16) -> bool {
    (0..NUM_TILES as i16).contains(&coordinate)
}

pub fn position_at_coordinate(square: Square) -> &'static str {
    ALGEBRAIC_NOTATION[square as usize]
}

pub fn coordinate_at_position(position: &str) -> Option<Square> {
    let mut chars = position.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    let file_idx = file as u8 - b'a';
    let rank_idx = rank as u8 - b'1';
    Some((7 - rank_idx) * TILES_PER_ROW as u8 + file_idx)
}
