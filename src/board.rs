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

//! The board: the 120-cell mailbox, the [`Position`] it lives in, and the
//! handful of operations (`rotate`, `apply`, invulnerability) that are
//! cheapest to express directly against the array rather than through move
//! generation (spec.md §3, §4.1, §4.3, §4.4).

use crate::army::Army;
use crate::defs::{distance, Color, Direction, Sq, A1, A8, H1, H8, N, S};
use crate::evaluation;
use crate::movegen::{self, tables, Move};
use crate::pieces::{PieceKind, Side};

/// One of the 120 mailbox cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A sentinel cell outside the playable 8x8 area.
    OffBoard,
    Empty,
    Piece(PieceKind, Side),
}

fn flip_cell(cell: Cell) -> Cell {
    match cell {
        Cell::Piece(kind, side) => Cell::Piece(kind, side.flip()),
        other => other,
    }
}

/// A full game state, always described from the side-to-move's point of
/// view: `Side::Us` pieces belong to whoever moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: [Cell; 120],
    pub color: Color,
    /// Set while resolving a Two Kings bonus sub-turn: only the Warrior
    /// Queen and Warrior King may move, one step, no sliding.
    pub second: bool,
    pub score: i32,
    pub us_army: Army,
    pub them_army: Army,
    pub us_stones: i8,
    pub them_stones: i8,
    /// `(queenside, kingside)` castling rights, i.e. `(a-file rook,
    /// h-file rook)`.
    pub us_castling: (bool, bool),
    pub them_castling: (bool, bool),
    /// The square a pawn may capture en passant this ply, if any.
    pub en_passant: Option<Sq>,
    /// The square a king passed through while castling this ply, if any.
    /// A pawn attack on this square scores as though it captured the king,
    /// standing in for "castled into check" (see [`evaluation::delta`]).
    pub king_passant: Option<Sq>,
}

impl Position {
    /// Every pseudo-legal move available to the side to move.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        movegen::gen_moves(self, self.second)
    }

    /// The score delta this move would contribute, without applying it.
    #[must_use]
    pub fn value(&self, mv: Move) -> i32 {
        evaluation::delta(self, mv)
    }

    /// Reverses the board and swaps every piece's side, so that the side to
    /// move is always `Us` (spec.md §4.1). Used by [`Self::apply`] whenever
    /// a ply actually ends the turn.
    #[must_use]
    pub fn rotate(&self) -> Self {
        let mut board = [Cell::OffBoard; 120];
        for i in 0..120 {
            board[i] = flip_cell(self.board[119 - i]);
        }
        let flip_sq = |sq: Option<Sq>| sq.map(|s| Sq(119 - s.0));
        Self {
            board,
            color: self.color.flip(),
            second: false,
            score: -self.score,
            us_army: self.them_army,
            them_army: self.us_army,
            us_stones: self.them_stones,
            them_stones: self.us_stones,
            us_castling: self.them_castling,
            them_castling: self.us_castling,
            en_passant: flip_sq(self.en_passant),
            king_passant: flip_sq(self.king_passant),
        }
    }

    /// Applies a pseudo-legal move, returning the resulting position from
    /// the *next* side's point of view (unless a Two Kings bonus sub-turn
    /// keeps the same side on move).
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn apply(&self, mv: Move) -> Self {
        let score = self.score + self.value(mv);
        let mut board = self.board;
        let i = mv.from;
        let mut j = mv.to;

        let origin = board[i.0 as usize];
        debug_assert!(
            matches!(origin, Cell::Piece(_, Side::Us)),
            "apply() called on a move whose origin isn't one of our pieces"
        );
        let Cell::Piece(p_kind, _) = origin else {
            unreachable!("apply() called on a move whose origin isn't one of our pieces")
        };

        let mut us_castling = self.us_castling;
        let mut them_castling = self.them_castling;
        let mut en_passant = None;
        let mut king_passant = None;

        // Losing a rook, or moving it, forfeits that side's castling right.
        if i == A1 {
            us_castling.0 = false;
        } else if i == H1 {
            us_castling.1 = false;
        }
        if j == A8 {
            them_castling.0 = false;
        } else if j == H8 {
            them_castling.1 = false;
        }

        board[i.0 as usize] = Cell::Empty;

        if p_kind == PieceKind::Tiger {
            let was_capture = matches!(board[j.0 as usize], Cell::Piece(_, Side::Them));
            if was_capture {
                board[j.0 as usize] = Cell::Empty;
                j = i; // capture without moving
            }
        }

        if p_kind == PieceKind::Elephant && i != j {
            let ray_dir = {
                let dr = (j.rank() - i.rank()).signum();
                let df = (j.file() - i.file()).signum();
                Direction(dr * 10 + df)
            };
            // sunfish.py's `for dr in range(abs(4 - dist)): if dr is 0: continue`
            // skips the zero step, so the additional-steps count is one less.
            let extra = ((4 - distance(i, j)).abs() - 1).max(0);
            let mut cur = j;
            for _ in 0..extra {
                let Some(next) = cur.step(ray_dir) else { break };
                if matches!(board[next.0 as usize], Cell::Piece(_, Side::Us) | Cell::OffBoard) {
                    break;
                }
                board[cur.0 as usize] = Cell::Empty;
                cur = next;
            }
            j = cur;
        }

        if matches!(p_kind, PieceKind::WarriorQueen | PieceKind::WarriorKing) && i == j {
            for d in tables::orthogonal_deltas().into_iter().chain(tables::diagonal_deltas()) {
                if let Some(n) = i.step(d) {
                    if matches!(board[n.0 as usize], Cell::Piece(_, Side::Them)) {
                        board[n.0 as usize] = Cell::Empty;
                    }
                }
            }
        }

        if p_kind == PieceKind::King && (i32::from(j.0) - i32::from(i.0)).abs() == 2 {
            let (rook_from, rook_to) = if j.0 < i.0 {
                (A1, Sq(i.0 - 1))
            } else {
                (H1, Sq(i.0 + 1))
            };
            if let Cell::Piece(rook_kind, Side::Us) = board[rook_from.0 as usize] {
                board[rook_from.0 as usize] = Cell::Empty;
                board[rook_to.0 as usize] = Cell::Piece(rook_kind, Side::Us);
            }
            king_passant = Some(Sq((i.0 + j.0) / 2));
            us_castling = (false, false);
        }

        if p_kind == PieceKind::Pawn {
            if self.en_passant == Some(j) && board[j.0 as usize] == Cell::Empty {
                if let Some(behind) = j.step(S) {
                    board[behind.0 as usize] = Cell::Empty;
                }
            }
            if i.step(N * 2) == Some(j) {
                en_passant = j.step(S);
            }
        }

        let moved_kind = if p_kind == PieceKind::Pawn && (A8.0..=H8.0).contains(&j.0) {
            PieceKind::Queen
        } else {
            p_kind
        };
        board[j.0 as usize] = Cell::Piece(moved_kind, Side::Us);

        let next = Self {
            board,
            color: self.color,
            second: self.second,
            score,
            us_army: self.us_army,
            them_army: self.them_army,
            us_stones: self.us_stones,
            them_stones: self.them_stones,
            us_castling,
            them_castling,
            en_passant,
            king_passant,
        };

        if self.us_army == Army::TwoKings
            && !self.second
            && matches!(p_kind, PieceKind::WarriorQueen | PieceKind::WarriorKing)
        {
            Self {
                second: true,
                ..next
            }
        } else {
            next.rotate()
        }
    }
}

/// Is the piece on `from` invulnerable to capturing onto `to`, per the
/// per-piece exceptions of spec.md §4.3? `from` must hold one of the side
/// to move's own pieces.
#[must_use]
pub fn is_piece_invulnerable(board: &[Cell; 120], from: Sq, to: Sq) -> bool {
    let Cell::Piece(from_kind, Side::Us) = board[from.0 as usize] else {
        return false;
    };
    let to_cell = board[to.0 as usize];
    if to_cell == Cell::OffBoard {
        return true;
    }

    let is = |kind: PieceKind, side: Side| matches!(to_cell, Cell::Piece(k, s) if k == kind && s == side);

    if from_kind.is_royal() {
        return is(PieceKind::Ghost, Side::Them);
    }

    if from_kind == PieceKind::Elephant {
        if is(PieceKind::GenericKing, Side::Us)
            || is(PieceKind::NemesisQueen, Side::Them)
            || is(PieceKind::Ghost, Side::Them)
        {
            return true;
        }
    } else if is(PieceKind::NemesisQueen, Side::Them) || is(PieceKind::Ghost, Side::Them) {
        return true;
    }

    is(PieceKind::Elephant, Side::Them) && distance(from, to) >= 3
}

/// Builds the initial position for a game between `us_army` (to move first)
/// and `them_army` (spec.md §6). The second side's back rank is laid out in
/// reverse of its own army's natural a-to-h order.
#[must_use]
pub fn start_position(us_army: Army, them_army: Army) -> Position {
    let mut board = [Cell::OffBoard; 120];
    for rank in 2..=9u8 {
        for file in 1..=8u8 {
            board[(rank * 10 + file) as usize] = Cell::Empty;
        }
    }

    let us_rank = us_army.back_rank();
    let them_rank = them_army.back_rank();
    for file in 0..8u8 {
        board[(91 + file) as usize] = Cell::Piece(us_rank[file as usize], Side::Us);
        board[(81 + file) as usize] = Cell::Piece(us_army.pawn_kind(), Side::Us);
        board[(21 + file) as usize] =
            Cell::Piece(them_rank[7 - file as usize], Side::Them);
        board[(31 + file) as usize] = Cell::Piece(them_army.pawn_kind(), Side::Them);
    }

    Position {
        board,
        color: Color::White,
        second: false,
        score: 0,
        us_army,
        them_army,
        us_stones: 3,
        them_stones: 3,
        us_castling: (true, true),
        them_castling: (true, true),
        en_passant: None,
        king_passant: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_piece_invulnerable, start_position, Cell};
    use crate::army::Army;
    use crate::defs::Sq;
    use crate::pieces::{PieceKind, Side};

    #[test]
    fn classic_start_position_has_facing_pawn_walls() {
        let pos = start_position(Army::Classic, Army::Classic);
        for file in 81..=88u8 {
            assert_eq!(pos.board[file as usize], Cell::Piece(PieceKind::Pawn, Side::Us));
        }
        for file in 31..=38u8 {
            assert_eq!(
                pos.board[file as usize],
                Cell::Piece(PieceKind::Pawn, Side::Them)
            );
        }
    }

    #[test]
    fn them_back_rank_is_reversed_relative_to_its_own_army() {
        // Nemesis's natural rank is R N B M C B N R, a palindrome, so use
        // Reaper (G N B A C B N G) which is not.
        let pos = start_position(Army::Classic, Army::Reaper);
        let natural = Army::Reaper.back_rank();
        for file in 0..8u8 {
            let Cell::Piece(kind, Side::Them) = pos.board[(21 + file) as usize] else {
                panic!("expected a them piece")
            };
            assert_eq!(kind, natural[7 - file as usize]);
        }
    }

    #[test]
    fn rotate_is_an_involution_on_a_symmetric_position() {
        let pos = start_position(Army::Classic, Army::Classic);
        let twice = pos.rotate().rotate();
        assert_eq!(pos.board, twice.board);
        assert_eq!(pos.color, twice.color);
    }

    #[test]
    fn a_ghost_can_never_be_captured() {
        let mut pos = start_position(Army::Reaper, Army::Reaper);
        pos.board[56] = Cell::Piece(PieceKind::Knight, Side::Us);
        pos.board[46] = Cell::Piece(PieceKind::Ghost, Side::Them);
        assert!(is_piece_invulnerable(&pos.board, Sq(56), Sq(46)));
    }

    #[test]
    fn applying_a_move_negates_the_score_seen_by_the_next_side_to_move() {
        let pos = start_position(Army::Classic, Army::Classic);
        let mv = super::super::movegen::Move {
            from: Sq(85),
            to: Sq(65),
        };
        let delta = pos.value(mv);
        let next = pos.apply(mv);
        assert_eq!(next.score, -(pos.score + delta));
    }

    #[test]
    fn a_tiger_captures_by_leaping_without_moving() {
        let mut pos = start_position(Army::Animals, Army::Animals);
        for cell in pos.board.iter_mut() {
            if matches!(cell, Cell::Piece(_, _)) {
                *cell = Cell::Empty;
            }
        }
        pos.board[44] = Cell::Piece(PieceKind::Tiger, Side::Us);
        pos.board[26] = Cell::Piece(PieceKind::Pawn, Side::Them);
        pos.us_castling = (false, false);
        pos.them_castling = (false, false);

        // 44 -> 26 is a leap-2 diagonal: (N+E)*2.
        let mv = super::super::movegen::Move {
            from: Sq(44),
            to: Sq(26),
        };
        let next = pos.apply(mv);
        // The board is rotated after a non-bonus apply, so the Tiger (now
        // `Them` from the new side's point of view) must still sit on its
        // original square, and the captured square must be empty.
        let tiger_sq = Sq(119 - 44);
        let captured_sq = Sq(119 - 26);
        assert_eq!(next.board[tiger_sq.0 as usize], Cell::Piece(PieceKind::Tiger, Side::Them));
        assert_eq!(next.board[captured_sq.0 as usize], Cell::Empty);
    }

    #[test]
    fn a_tiger_also_kills_and_stays_on_a_single_step_capture() {
        let mut pos = start_position(Army::Animals, Army::Animals);
        for cell in pos.board.iter_mut() {
            if matches!(cell, Cell::Piece(_, _)) {
                *cell = Cell::Empty;
            }
        }
        pos.board[44] = Cell::Piece(PieceKind::Tiger, Side::Us);
        pos.board[35] = Cell::Piece(PieceKind::Pawn, Side::Them); // a single NE step
        pos.us_castling = (false, false);
        pos.them_castling = (false, false);

        let mv = super::super::movegen::Move {
            from: Sq(44),
            to: Sq(35),
        };
        let next = pos.apply(mv);
        let tiger_sq = Sq(119 - 44);
        let captured_sq = Sq(119 - 35);
        assert_eq!(next.board[tiger_sq.0 as usize], Cell::Piece(PieceKind::Tiger, Side::Them));
        assert_eq!(next.board[captured_sq.0 as usize], Cell::Empty);
    }

    #[test]
    fn an_elephant_rampages_past_its_landing_square_and_ends_up_further_along() {
        let mut pos = start_position(Army::Animals, Army::Animals);
        for cell in pos.board.iter_mut() {
            if matches!(cell, Cell::Piece(_, _)) {
                *cell = Cell::Empty;
            }
        }
        pos.board[50] = Cell::Piece(PieceKind::Elephant, Side::Us);
        pos.board[51] = Cell::Piece(PieceKind::Pawn, Side::Them);
        pos.board[52] = Cell::Piece(PieceKind::Pawn, Side::Them);
        pos.us_castling = (false, false);
        pos.them_castling = (false, false);

        let mv = super::super::movegen::Move {
            from: Sq(50),
            to: Sq(51),
        };
        let next = pos.apply(mv);
        // Distance 1 rampages (|4-1|-1 = 2) further steps: 50 -> 51 -> 52 -> 53.
        let final_sq = Sq(119 - 53);
        let landing_sq = Sq(119 - 51);
        let passed_sq = Sq(119 - 52);
        assert_eq!(next.board[final_sq.0 as usize], Cell::Piece(PieceKind::Elephant, Side::Them));
        assert_eq!(next.board[landing_sq.0 as usize], Cell::Empty);
        assert_eq!(next.board[passed_sq.0 as usize], Cell::Empty);
    }

    #[test]
    fn castling_relocates_the_rook_and_records_the_passed_through_square() {
        let mut pos = start_position(Army::Classic, Army::Classic);
        for sq in [92, 93, 94, 95, 96, 97] {
            pos.board[sq] = Cell::Empty;
        }
        assert_eq!(pos.board[91], Cell::Piece(PieceKind::Rook, Side::Us));
        assert_eq!(pos.board[95], Cell::Piece(PieceKind::King, Side::Us));

        let mv = super::super::movegen::Move {
            from: Sq(95),
            to: Sq(93),
        };
        let next = pos.apply(mv);
        assert!(!next.them_castling.0);
        let king_sq = Sq(119 - 93);
        let rook_sq = Sq(119 - 94);
        let passant_sq = Sq(119 - 94);
        assert_eq!(next.board[king_sq.0 as usize], Cell::Piece(PieceKind::King, Side::Them));
        assert_eq!(next.board[rook_sq.0 as usize], Cell::Piece(PieceKind::Rook, Side::Them));
        assert_eq!(next.king_passant, Some(passant_sq));
    }

    #[test]
    fn two_kings_warrior_queen_move_opens_a_bonus_sub_turn() {
        let mut pos = start_position(Army::TwoKings, Army::Classic);
        pos.board[84] = Cell::Empty; // clear the pawn in front of the Warrior Queen
        let mv = super::super::movegen::Move {
            from: Sq(94),
            to: Sq(84),
        };
        let next = pos.apply(mv);

        assert!(next.second);
        // No rotation happened: the mover's pieces are still `Us`, in place.
        assert_eq!(next.board[84], Cell::Piece(PieceKind::WarriorQueen, Side::Us));
        assert_eq!(next.color, pos.color);

        let bonus_moves = next.moves();
        assert!(!bonus_moves.is_empty());
        for mv in &bonus_moves {
            let from_kind = match next.board[mv.from.0 as usize] {
                Cell::Piece(kind, Side::Us) => kind,
                _ => panic!("bonus move must originate from one of our own pieces"),
            };
            assert!(matches!(
                from_kind,
                PieceKind::WarriorQueen | PieceKind::WarriorKing
            ));
        }
    }

    #[test]
    fn an_elephant_three_or_more_squares_away_is_invulnerable_but_not_closer() {
        let mut pos = start_position(Army::Classic, Army::Animals);
        for cell in pos.board.iter_mut() {
            if matches!(cell, Cell::Piece(_, _)) {
                *cell = Cell::Empty;
            }
        }
        pos.board[55] = Cell::Piece(PieceKind::Knight, Side::Us);
        pos.board[57] = Cell::Piece(PieceKind::Elephant, Side::Them); // distance 2
        pos.board[58] = Cell::Piece(PieceKind::Elephant, Side::Them); // distance 3

        assert!(!is_piece_invulnerable(&pos.board, Sq(55), Sq(57)));
        assert!(is_piece_invulnerable(&pos.board, Sq(55), Sq(58)));
    }

    #[test]
    fn a_double_push_sets_the_en_passant_square_from_the_new_mover_point_of_view() {
        let pos = start_position(Army::Classic, Army::Classic);
        let mv = super::super::movegen::Move {
            from: Sq(85),
            to: Sq(65),
        };
        let next = pos.apply(mv);
        assert_eq!(next.en_passant, Some(Sq(119 - 75)));
    }
}
