/*
 * Sixarmies, an engine for the Chess 2 variant
 * Copyright (C) 2026 The Sixarmies Authors
 *
 * Sixarmies is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the
 * Free Software Foundation, either version 3 of the License, or (at your
 * option) any later version.
 *
 * Sixarmies is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with Sixarmies. If not, see <https://www.gnu.org/licenses/>.
 */

//! Per-piece move direction tables, reproduced verbatim from the
//! `directions` dict in `original_source/sunfish/sunfish.py`.
//!
//! Most pieces are described by a set of step directions, walked as a ray
//! by [`crate::movegen::gen_moves`]. The Reaper and Reaper Ghost are
//! described instead by a fixed list of absolute destination squares (see
//! [`MoveDirs::Absolute`]).

use crate::defs::{Direction, Sq, E, H, N, S, W};
use crate::pieces::PieceKind;

const NE: Direction = Direction(-9);
const SE: Direction = Direction(11);
const SW: Direction = Direction(9);
const NW: Direction = Direction(-11);

const DIAGONALS: [Direction; 4] = [NE, SE, SW, NW];
const ORTHOGONALS: [Direction; 4] = [N, E, S, W];

const KNIGHT: [Direction; 8] = [
    Direction(-19), // 2N+E
    Direction(-8),  // N+2E
    Direction(12),  // S+2E
    Direction(21),  // 2S+E
    Direction(19),  // 2S+W
    Direction(8),   // S+2W
    Direction(-12), // N+2W
    Direction(-21), // 2N+W
];

const TIGER_LEAPS: [Direction; 4] = [
    Direction(-18), // (N+E)*2
    Direction(22),  // (S+E)*2
    Direction(18),  // (S+W)*2
    Direction(-22), // (N+W)*2
];

/// A piece's move description: either a set of ray directions, or (for the
/// Reaper and Ghost) a fixed list of absolute destination squares.
pub enum MoveDirs {
    Relative(&'static [Direction]),
    Absolute(&'static [Sq]),
}

/// The eight knight-jump deltas, exposed for the Empowered family and Jungle
/// Queen which enable/disable them dynamically.
#[must_use]
pub const fn knight_deltas() -> [Direction; 8] {
    KNIGHT
}

/// The four diagonal (bishop) deltas.
#[must_use]
pub const fn diagonal_deltas() -> [Direction; 4] {
    DIAGONALS
}

/// The four orthogonal (rook) deltas.
#[must_use]
pub const fn orthogonal_deltas() -> [Direction; 4] {
    ORTHOGONALS
}

/// The Tiger's four leap-2 diagonal deltas.
#[must_use]
pub const fn tiger_leap_deltas() -> [Direction; 4] {
    TIGER_LEAPS
}

macro_rules! empowered_sixteen {
    () => {
        &[
            N, E, S, W, NE, SE, SW, NW, Direction(-19), Direction(-8), Direction(12),
            Direction(21), Direction(19), Direction(8), Direction(-12), Direction(-21),
        ]
    };
}

/// The move description for a given piece kind.
#[must_use]
pub fn directions(kind: PieceKind) -> MoveDirs {
    use PieceKind::{
        Bishop, Elephant, EmpoweredBishop, EmpoweredKnight, EmpoweredQueen, EmpoweredRook,
        GenericKing, Ghost, JungleQueen, King, Knight, NemesisPawn, NemesisQueen, Pawn, Queen,
        Reaper, Rook, Tiger, WarriorKing, WarriorQueen, WildHorse,
    };
    match kind {
        Pawn => MoveDirs::Relative(&[N, Direction(-20), NW, NE]),
        NemesisPawn => MoveDirs::Relative(&[N, E, S, W, NE, SE, SW, NW]),
        Bishop => MoveDirs::Relative(&[NE, SE, SW, NW]),
        EmpoweredBishop => MoveDirs::Relative(empowered_sixteen!()),
        Tiger => MoveDirs::Relative(&[NE, SE, SW, NW, Direction(-18), Direction(22), Direction(18), Direction(-22)]),
        Knight => MoveDirs::Relative(&KNIGHT),
        EmpoweredKnight => MoveDirs::Relative(empowered_sixteen!()),
        WildHorse => MoveDirs::Relative(&KNIGHT),
        Rook => MoveDirs::Relative(&ORTHOGONALS),
        EmpoweredRook => MoveDirs::Relative(empowered_sixteen!()),
        Ghost => MoveDirs::Absolute(&GHOST_SQUARES),
        Elephant => MoveDirs::Relative(&ORTHOGONALS),
        Queen | NemesisQueen | EmpoweredQueen => {
            MoveDirs::Relative(&[N, E, S, W, NE, SE, SW, NW])
        }
        Reaper => MoveDirs::Absolute(&REAPER_SQUARES),
        WarriorQueen | WarriorKing => MoveDirs::Relative(&[N, E, S, W, H, NE, SE, SW, NW]),
        JungleQueen => MoveDirs::Relative(&[
            N, E, S, W, Direction(-19), Direction(-8), Direction(12), Direction(21),
            Direction(19), Direction(8), Direction(-12), Direction(-21),
        ]),
        King | GenericKing => MoveDirs::Relative(&[N, E, S, W, NE, SE, SW, NW]),
    }
}

/// The Reaper Ghost's 56 fixed destination squares: every square on ranks
/// 2 through 8 (it can never reach the mover's own back rank).
static GHOST_SQUARES: [Sq; 56] = build_range(2, 8);

/// The Reaper's 48 fixed destination squares: ranks 3 through 8.
static REAPER_SQUARES: [Sq; 48] = build_range(3, 8);

const fn build_range<const N_SQ: usize>(first_rank: u8, last_rank: u8) -> [Sq; N_SQ] {
    let mut out = [Sq(0); N_SQ];
    let mut idx = 0;
    let mut rank = first_rank;
    while rank <= last_rank {
        let mut file = 1u8;
        while file <= 8 {
            out[idx] = Sq(rank * 10 + file);
            idx += 1;
            file += 1;
        }
        rank += 1;
    }
    out
}
