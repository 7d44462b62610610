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

//! Pseudo-legal move generation for the side to move (spec.md §4.2).
//!
//! `gen_moves` is pseudo-legal only: it never filters moves that would
//! leave one's own royal capturable. Legality (in the sense of not
//! blundering a royal) is enforced by [`crate::search`] via the king-capture
//! scoring override in [`crate::evaluation::delta`].

pub mod tables;

use crate::board::{is_piece_invulnerable, Cell, Position};
use crate::defs::{distance, Direction, Sq, A1, E, H, H1, N, S, W};
use crate::pieces::{PieceKind, Side};
use tables::MoveDirs;

/// A pseudo-legal move: the origin and destination squares. Castling is
/// represented as a move of the king (`from` = king square, `to` = the
/// square two files over); the applier performs the rook's part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Sq,
    pub to: Sq,
}

const COMPASS_8: [Direction; 8] = [
    N,
    E,
    S,
    W,
    Direction(-9),  // N+E
    Direction(11),  // S+E
    Direction(9),   // S+W
    Direction(-11), // N+W
];

fn cell_after_step(pos: &Position, sq: Sq, d: Direction) -> Cell {
    sq.step(d).map_or(Cell::OffBoard, |s| pos.board[s.0 as usize])
}

/// Generates every pseudo-legal move for the side to move.
///
/// `second` selects the Two-Kings bonus sub-turn: only the Warrior Queen
/// and Warrior King may act, and only a single step (no sliding).
#[must_use]
pub fn gen_moves(pos: &Position, second: bool) -> Vec<Move> {
    let mut moves = Vec::new();
    let royal_squares: Vec<Sq> = (0u8..120)
        .map(Sq)
        .filter(|&s| matches!(pos.board[s.0 as usize], Cell::Piece(k, Side::Them) if k.is_royal()))
        .collect();

    for idx in 0u8..120 {
        let i = Sq(idx);
        let kind = match pos.board[idx as usize] {
            Cell::Piece(k, Side::Us) => k,
            _ => continue,
        };

        if second {
            gen_second_turn_moves(pos, i, kind, &mut moves);
            continue;
        }

        match tables::directions(kind) {
            MoveDirs::Absolute(dests) => gen_reaper_family_moves(pos, i, kind, dests, &mut moves),
            MoveDirs::Relative(dirs) => {
                gen_ray_moves(pos, i, kind, dirs, &royal_squares, &mut moves);
            }
        }
    }
    moves
}

fn is_warrior(cell: Cell) -> bool {
    matches!(
        cell,
        Cell::Piece(PieceKind::WarriorQueen | PieceKind::WarriorKing, Side::Us)
    )
}

fn whirlwind_blocked(pos: &Position, i: Sq) -> bool {
    COMPASS_8
        .iter()
        .any(|&dr| is_warrior(cell_after_step(pos, i, dr)))
}

fn gen_second_turn_moves(pos: &Position, i: Sq, kind: PieceKind, moves: &mut Vec<Move>) {
    if !matches!(kind, PieceKind::WarriorQueen | PieceKind::WarriorKing) {
        return;
    }
    let MoveDirs::Relative(dirs) = tables::directions(kind) else {
        return;
    };
    for &d in dirs {
        if d == H {
            if !whirlwind_blocked(pos, i) {
                moves.push(Move { from: i, to: i });
            }
            continue;
        }
        let Some(j) = i.step(d) else { continue };
        match pos.board[j.0 as usize] {
            Cell::OffBoard | Cell::Piece(_, Side::Us) => {}
            Cell::Empty | Cell::Piece(_, Side::Them) => moves.push(Move { from: i, to: j }),
        }
    }
}

fn gen_reaper_family_moves(
    pos: &Position,
    i: Sq,
    kind: PieceKind,
    dests: &[Sq],
    moves: &mut Vec<Move>,
) {
    for &d in dests {
        let target = pos.board[d.0 as usize];
        if kind == PieceKind::Ghost {
            if target == Cell::Empty {
                moves.push(Move { from: i, to: d });
            }
        } else if !is_piece_invulnerable(&pos.board, i, d) {
            if matches!(target, Cell::Piece(_, Side::Us)) {
                break;
            }
            moves.push(Move { from: i, to: d });
        }
    }
}

/// The static crawler set from spec.md §4.2, independent of the dynamic
/// Empowered-family exception handled inline in [`gen_ray_moves`].
fn is_base_crawler(kind: PieceKind) -> bool {
    kind.is_crawler()
}

fn is_knight_jump(d: Direction) -> bool {
    tables::knight_deltas().contains(&d)
}

fn is_leap(d: Direction) -> bool {
    tables::tiger_leap_deltas().contains(&d)
}

#[allow(clippy::too_many_lines)]
fn gen_ray_moves(
    pos: &Position,
    i: Sq,
    kind: PieceKind,
    dirs: &[Direction],
    royal_squares: &[Sq],
    moves: &mut Vec<Move>,
) {
    for &d in dirs {
        let mut elephant_ridden = false;
        let mut cur = i;
        loop {
            let Some(j) = cur.step(d) else { break };
            let target = pos.board[j.0 as usize];
            if target == Cell::OffBoard {
                break;
            }

            // Castling: whichever piece's ray passes through a corner and
            // reaches the King emits the castling move, from the King's
            // square. In practice this is only ever the Rook's own ray.
            if i == A1
                && matches!(target, Cell::Piece(PieceKind::King, Side::Us))
                && pos.us_castling.0
            {
                moves.push(Move {
                    from: j,
                    to: Sq(j.0 - 2),
                });
            }
            if i == H1
                && matches!(target, Cell::Piece(PieceKind::King, Side::Us))
                && pos.us_castling.1
            {
                moves.push(Move {
                    from: j,
                    to: Sq(j.0 + 2),
                });
            }

            // No friendly captures, except Wild Horse (which may still land
            // on the friendly square) and Elephant (a one-time ride-through
            // "capture" of a friendly non-Elephant piece).
            if let Cell::Piece(target_kind, Side::Us) = target {
                if target_kind == kind {
                    // Standing on a same-kind friendly: pass through freely.
                } else if kind == PieceKind::Elephant {
                    if !elephant_ridden && !is_piece_invulnerable(&pos.board, i, j) {
                        elephant_ridden = true;
                        moves.push(Move { from: i, to: j });
                    }
                } else if kind != PieceKind::WildHorse {
                    break;
                }
            }

            // Classic pawn stuff.
            if kind == PieceKind::Pawn {
                let is_diagonal = d == N + W || d == N + E;
                if is_diagonal
                    && target == Cell::Empty
                    && pos.en_passant != Some(j)
                    && pos.king_passant != Some(j)
                {
                    break;
                }
                let is_forward = d == N || d == N * 2;
                if is_forward && target != Cell::Empty {
                    break;
                }
                if d == N * 2 {
                    let not_home_rank = i.0 < 81;
                    let blocked = match i.step(N) {
                        Some(s) => pos.board[s.0 as usize] != Cell::Empty,
                        None => true,
                    };
                    if not_home_rank || blocked {
                        break;
                    }
                }
            }

            if is_piece_invulnerable(&pos.board, i, j) {
                break;
            }

            let mut extra_crawler = false;
            match kind {
                PieceKind::NemesisPawn => {
                    gen_nemesis_pawn_yield(i, j, d, royal_squares, moves);
                }
                PieceKind::EmpoweredBishop
                | PieceKind::EmpoweredKnight
                | PieceKind::EmpoweredRook => {
                    extra_crawler = gen_empowered_yield(pos, i, j, kind, d, moves);
                }
                PieceKind::WarriorQueen | PieceKind::WarriorKing => {
                    if d == H {
                        if !whirlwind_blocked(pos, i) {
                            moves.push(Move { from: i, to: i });
                        }
                    } else {
                        moves.push(Move { from: i, to: j });
                    }
                }
                PieceKind::Tiger if is_leap(d) => {
                    let blocked = match i.step(Direction(d.0 / 2)) {
                        Some(mid) => matches!(pos.board[mid.0 as usize], Cell::Piece(_, Side::Us)),
                        None => false,
                    };
                    if blocked {
                        break;
                    }
                    moves.push(Move { from: i, to: j });
                }
                PieceKind::NemesisQueen => {
                    let allowed = target == Cell::Empty
                        || matches!(target, Cell::Piece(k, Side::Them) if k.is_royal());
                    if !allowed {
                        break;
                    }
                    moves.push(Move { from: i, to: j });
                }
                _ => moves.push(Move { from: i, to: j }),
            }

            // Terminator rules.
            if kind == PieceKind::Elephant {
                if distance(i, j) > 4 {
                    break;
                }
                if let Some(prev) = j.step(Direction(-d.0)) {
                    if matches!(pos.board[prev.0 as usize], Cell::Piece(_, Side::Us)) {
                        break;
                    }
                }
            }
            if kind == PieceKind::JungleQueen && is_knight_jump(d) {
                break;
            }
            if is_base_crawler(kind) || extra_crawler {
                break;
            }
            if matches!(target, Cell::Piece(_, Side::Them)) {
                break;
            }

            cur = j;
        }
    }
}

/// Does `i`'s direction `d` point toward one of `royal_squares`, per the
/// Nemesis Pawn's eight-octant targeting table (spec.md §4.2)?
fn gen_nemesis_pawn_yield(i: Sq, j: Sq, d: Direction, royal_squares: &[Sq], moves: &mut Vec<Move>) {
    let targets_a_royal = royal_squares.iter().any(|&k| {
        let row = i.rank() - k.rank();
        let column = i.file() - k.file();
        match row.cmp(&0) {
            std::cmp::Ordering::Greater => {
                (column > 0 && (d == N || d == W || d == N + W))
                    || (column == 0 && d == N)
                    || (column < 0 && (d == N || d == E || d == N + E))
            }
            std::cmp::Ordering::Equal => (column > 0 && d == W) || (column < 0 && d == E),
            std::cmp::Ordering::Less => {
                (column > 0 && (d == S || d == W || d == S + W))
                    || (column == 0 && d == S)
                    || (column < 0 && (d == S || d == E || d == S + E))
            }
        }
    });
    if targets_a_royal {
        moves.push(Move { from: i, to: j });
    }
}

/// Yields the Empowered-family move for this step, if any direction granted
/// by the piece's own base movement or by an adjacent empowering partner
/// matches. Returns whether this step used a knight jump granted by a
/// partner — such steps don't slide further (spec.md §4.2).
fn gen_empowered_yield(
    pos: &Position,
    i: Sq,
    j: Sq,
    kind: PieceKind,
    d: Direction,
    moves: &mut Vec<Move>,
) -> bool {
    let diag = tables::diagonal_deltas().contains(&d);
    let ortho = tables::orthogonal_deltas().contains(&d);
    let jump = is_knight_jump(d);

    let has_neighbor = |wanted: PieceKind| {
        [N, E, S, W]
            .into_iter()
            .any(|dr| matches!(cell_after_step(pos, i, dr), Cell::Piece(k, Side::Us) if k == wanted))
    };

    let (base_ok, via_x, via_y, via_z) = match kind {
        PieceKind::EmpoweredBishop => (
            diag,
            false,
            jump && has_neighbor(PieceKind::EmpoweredKnight),
            ortho && has_neighbor(PieceKind::EmpoweredRook),
        ),
        PieceKind::EmpoweredKnight => (
            jump,
            diag && has_neighbor(PieceKind::EmpoweredBishop),
            false,
            ortho && has_neighbor(PieceKind::EmpoweredRook),
        ),
        PieceKind::EmpoweredRook => (
            ortho,
            diag && has_neighbor(PieceKind::EmpoweredBishop),
            jump && has_neighbor(PieceKind::EmpoweredKnight),
            false,
        ),
        _ => unreachable!("gen_empowered_yield called on a non-Empowered piece"),
    };

    if base_ok || via_x || via_z {
        moves.push(Move { from: i, to: j });
        false
    } else if via_y {
        moves.push(Move { from: i, to: j });
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{gen_moves, is_knight_jump, Move};
    use crate::army::Army;
    use crate::board::{start_position, Cell};
    use crate::defs::{Direction, Sq};
    use crate::pieces::{PieceKind, Side};

    #[test]
    fn classic_opening_pawn_moves_include_single_and_double_push() {
        let pos = start_position(Army::Classic, Army::Classic);
        let moves = gen_moves(&pos, false);
        assert!(moves.contains(&Move {
            from: Sq(85),
            to: Sq(75)
        }));
        assert!(moves.contains(&Move {
            from: Sq(85),
            to: Sq(65)
        }));
    }

    #[test]
    fn no_move_ever_targets_an_off_board_cell_or_leaves_a_non_us_origin() {
        let pos = start_position(Army::Animals, Army::Reaper);
        for mv in gen_moves(&pos, false) {
            assert_ne!(pos.board[mv.to.0 as usize], Cell::OffBoard);
            assert!(matches!(
                pos.board[mv.from.0 as usize],
                Cell::Piece(_, Side::Us)
            ));
        }
    }

    #[test]
    fn empowered_bishop_gains_knight_jumps_only_when_adjacent_to_knight() {
        let mut pos = start_position(Army::Empowered, Army::Empowered);
        pos.board[54] = Cell::Piece(PieceKind::EmpoweredBishop, Side::Us);
        pos.board[53] = Cell::Piece(PieceKind::EmpoweredKnight, Side::Us);
        for sq in [64, 44, 63, 65, 45, 43] {
            pos.board[sq] = Cell::Empty;
        }
        let moves = gen_moves(&pos, false);
        let has_knight_jump = moves.iter().any(|m| {
            m.from == Sq(54) && is_knight_jump(Direction(i16::from(m.to.0) - 54))
        });
        assert!(has_knight_jump);

        // Without the adjacent Knight, no knight jumps should appear.
        pos.board[53] = Cell::Empty;
        let moves = gen_moves(&pos, false);
        let has_knight_jump = moves.iter().any(|m| {
            m.from == Sq(54) && is_knight_jump(Direction(i16::from(m.to.0) - 54))
        });
        assert!(!has_knight_jump);
    }
}
