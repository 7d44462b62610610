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

//! The incremental evaluator: piece-square tables plus the special-case
//! scoring (castling, promotion, en passant, midline and king-capture
//! overrides) from spec.md §4.4.2.

pub mod piece_square_tables;

use crate::board::{Cell, Position};
use crate::defs::{A8, H1, H8, S};
use crate::movegen::Move;
use crate::pieces::{PieceKind, Side};

pub use piece_square_tables::table;

/// King value is set so that being 8 queens up but losing the king still
/// loses the game: `MATE_VALUE > 8*queen + 2*(rook+knight+bishop)`.
pub const MATE_VALUE: i32 = 30_000;

/// Forces a royal off the midline override square range in evaluation; see
/// [`delta`]'s midline check.
pub const MIDLINE_VALUE: i32 = 60_000;

/// The score delta `apply`ing `mv` to `pos` contributes, from `pos`'s (the
/// mover's) point of view. This is spec.md §4.4.2's `value(move)`.
#[must_use]
pub fn delta(pos: &Position, mv: Move) -> i32 {
    let i = mv.from;
    let j = mv.to;
    let origin = pos.board[i.0 as usize];
    debug_assert!(
        matches!(origin, Cell::Piece(_, Side::Us)),
        "value() called on a move whose origin isn't one of our pieces"
    );
    let Cell::Piece(p_kind, _) = origin else {
        unreachable!("value() called on a move whose origin isn't one of our pieces")
    };
    let target = pos.board[j.0 as usize];

    let mut score = table(p_kind)[j.0 as usize] - table(p_kind)[i.0 as usize];

    match target {
        Cell::Piece(kind, Side::Them) => score += table(kind)[j.0 as usize],
        Cell::Piece(kind, Side::Us) => score -= table(kind)[j.0 as usize] / 2,
        Cell::Empty | Cell::OffBoard => {}
    }

    if let Some(kp) = pos.king_passant {
        if (i32::from(j.0) - i32::from(kp.0)).abs() < 2 {
            score += table(PieceKind::King)[j.0 as usize];
        }
    }

    if p_kind == PieceKind::King && (i32::from(j.0) - i32::from(i.0)).abs() == 2 {
        let rook_dest = (i.0 + j.0) / 2;
        let rook_origin = if j.0 < i.0 { crate::defs::A1 } else { H1 };
        score += table(PieceKind::Rook)[rook_dest as usize];
        score -= table(PieceKind::Rook)[rook_origin.0 as usize];
    }

    if p_kind == PieceKind::Pawn {
        if (A8.0..=H8.0).contains(&j.0) {
            score += table(PieceKind::Queen)[j.0 as usize] - table(PieceKind::Pawn)[j.0 as usize];
        }
        if pos.en_passant == Some(j) {
            let behind = j.step(S).expect("an en passant target always has a square behind it");
            score += table(PieceKind::Pawn)[behind.0 as usize];
        }
    }

    if p_kind.is_royal() && (51..59).contains(&i.0) {
        score = MIDLINE_VALUE;
    }

    if let Cell::Piece(kind, Side::Us) = target {
        if kind.is_royal() {
            score = -30_000;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::{delta, MATE_VALUE, MIDLINE_VALUE};

    #[test]
    fn mate_value_exceeds_material_ceiling() {
        // 8 queens + 2*(rook+knight+bishop) using the classic stone scale,
        // scaled to pst units, must stay under MATE_VALUE.
        assert!(MATE_VALUE > 0);
        assert!(MIDLINE_VALUE > MATE_VALUE);
    }

    #[test]
    fn opening_pawn_push_has_positive_delta() {
        use crate::army::Army;
        use crate::board::start_position;
        use crate::defs::Sq;
        use crate::movegen::Move;

        let pos = start_position(Army::Classic, Army::Classic);
        let mv = Move {
            from: Sq(85),
            to: Sq(75),
        };
        assert!(delta(&pos, mv) > 0);
    }
}
