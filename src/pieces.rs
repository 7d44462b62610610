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

//! The 21 piece kinds used across the six armies, and the relative
//! (`us`/`them`) ownership model the board works in.

/// Who owns a piece, relative to the side currently to move.
///
/// The mailbox is always described from the mover's point of view: `Us`
/// pieces are uppercase in the source material, `Them` pieces lowercase.
/// [`crate::board::Position::rotate`] swaps every cell's side and flips
/// [`crate::defs::Color`] to keep this true after every ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Us,
    Them,
}

impl Side {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Us => Self::Them,
            Self::Them => Self::Us,
        }
    }
}

/// One of the 21 distinct pieces that can appear on the board, across all
/// six armies.
///
/// This is a closed tagged variant rather than a dynamic-dispatch hierarchy:
/// every piece-specific rule in [`crate::movegen`] and
/// [`crate::board::Position::apply`] is a match on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// `P` — classic pawn.
    Pawn,
    /// `L` — Nemesis pawn: advances toward the nearest enemy royal.
    NemesisPawn,
    /// `B` — classic bishop.
    Bishop,
    /// `X` — Empowered bishop: gains knight/rook moves from an adjacent
    /// Empowered Knight/Rook.
    EmpoweredBishop,
    /// `T` — Animals tiger: a bishop that stays in place on capture and
    /// cannot leap over a blocked diagonal.
    Tiger,
    /// `N` — classic knight.
    Knight,
    /// `Y` — Empowered knight.
    EmpoweredKnight,
    /// `H` — Animals wild horse: a knight that can also capture through a
    /// friendly-occupied square.
    WildHorse,
    /// `R` — classic rook.
    Rook,
    /// `Z` — Empowered rook.
    EmpoweredRook,
    /// `G` — Reaper ghost: moves to fixed central squares, never captures.
    Ghost,
    /// `E` — Animals elephant: a rook that rampages through several
    /// squares on capture.
    Elephant,
    /// `Q` — classic queen.
    Queen,
    /// `M` — Nemesis queen: can only move onto empty squares or enemy
    /// royals.
    NemesisQueen,
    /// `O` — Empowered queen.
    EmpoweredQueen,
    /// `A` — Reaper: moves to fixed central squares, capturing what it
    /// finds there unless invulnerable.
    Reaper,
    /// `U` — Two Kings Warrior Queen: a royal king-mover with whirlwind.
    WarriorQueen,
    /// `J` — Animals jungle queen: a queen whose knight jumps don't slide.
    JungleQueen,
    /// `K` — classic king.
    King,
    /// `W` — Two Kings Warrior King: the other royal, takes the bonus
    /// second sub-turn.
    WarriorKing,
    /// `C` — generic king used by armies with only one royal king piece.
    GenericKing,
}

impl PieceKind {
    /// All 21 piece kinds, in the order their letters appear in spec.md §3.
    pub const ALL: [Self; 21] = [
        Self::Pawn,
        Self::NemesisPawn,
        Self::Bishop,
        Self::EmpoweredBishop,
        Self::Tiger,
        Self::Knight,
        Self::EmpoweredKnight,
        Self::WildHorse,
        Self::Rook,
        Self::EmpoweredRook,
        Self::Ghost,
        Self::Elephant,
        Self::Queen,
        Self::NemesisQueen,
        Self::EmpoweredQueen,
        Self::Reaper,
        Self::WarriorQueen,
        Self::JungleQueen,
        Self::King,
        Self::WarriorKing,
        Self::GenericKing,
    ];

    /// The piece's canonical letter (uppercase).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::NemesisPawn => 'L',
            Self::Bishop => 'B',
            Self::EmpoweredBishop => 'X',
            Self::Tiger => 'T',
            Self::Knight => 'N',
            Self::EmpoweredKnight => 'Y',
            Self::WildHorse => 'H',
            Self::Rook => 'R',
            Self::EmpoweredRook => 'Z',
            Self::Ghost => 'G',
            Self::Elephant => 'E',
            Self::Queen => 'Q',
            Self::NemesisQueen => 'M',
            Self::EmpoweredQueen => 'O',
            Self::Reaper => 'A',
            Self::WarriorQueen => 'U',
            Self::JungleQueen => 'J',
            Self::King => 'K',
            Self::WarriorKing => 'W',
            Self::GenericKing => 'C',
        }
    }

    /// Looks up a piece kind by its uppercase letter.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.letter() == c)
    }

    /// This piece's letter, cased for the given side (`Us` is uppercase,
    /// `Them` is lowercase), as stored on the board.
    #[must_use]
    pub fn cell_char(self, side: Side) -> char {
        match side {
            Side::Us => self.letter(),
            Side::Them => self.letter().to_ascii_lowercase(),
        }
    }

    /// Is this one of the royal pieces (`K`, `W`, `U`, `C`)? Royals cannot
    /// capture Ghosts (spec.md §4.3) and king-capture scoring treats all
    /// four as equally fatal to lose (spec.md §4.4.2).
    #[must_use]
    pub const fn is_royal(self) -> bool {
        matches!(
            self,
            Self::King | Self::WarriorKing | Self::WarriorQueen | Self::GenericKing
        )
    }

    /// Is this piece a crawler: its ray in any direction is at most one
    /// square? The static set from spec.md §4.2, `{P,L,T,N,H,O,U,K,W,C}`.
    /// `X`/`Y`/`Z` join this set dynamically when moving via an
    /// empowering neighbor; see [`crate::movegen::gen_moves`].
    #[must_use]
    pub const fn is_crawler(self) -> bool {
        matches!(
            self,
            Self::Pawn
                | Self::NemesisPawn
                | Self::Tiger
                | Self::Knight
                | Self::WildHorse
                | Self::EmpoweredQueen
                | Self::WarriorQueen
                | Self::King
                | Self::WarriorKing
                | Self::GenericKing
        )
    }
}

/// Advisory per-piece "stone" values (the Python source's `pvt`), kept for
/// parity with the stone-count fields on [`crate::board::Position`] (`ws`,
/// `bs` in spec.md, reserved per spec.md §9.5). Nothing in move generation,
/// evaluation or search reads this table; it exists only as queryable data.
#[must_use]
pub const fn stone_value(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::NemesisPawn => 2,
        PieceKind::Bishop => 3,
        PieceKind::EmpoweredBishop => 4,
        PieceKind::Tiger | PieceKind::Knight | PieceKind::WildHorse => 3,
        PieceKind::EmpoweredKnight => 4,
        PieceKind::Rook => 5,
        PieceKind::EmpoweredRook => 6,
        PieceKind::Elephant => 5,
        PieceKind::Queen => 9,
        PieceKind::EmpoweredQueen => 3,
        PieceKind::Reaper => 7,
        PieceKind::JungleQueen => 8,
        PieceKind::Ghost
        | PieceKind::NemesisQueen
        | PieceKind::WarriorQueen
        | PieceKind::King
        | PieceKind::WarriorKing
        | PieceKind::GenericKing => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{PieceKind, Side};

    #[test]
    fn letter_round_trips() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_letter(kind.letter()), Some(kind));
        }
    }

    #[test]
    fn cell_char_cases_by_side() {
        assert_eq!(PieceKind::Rook.cell_char(Side::Us), 'R');
        assert_eq!(PieceKind::Rook.cell_char(Side::Them), 'r');
    }

    #[test]
    fn royal_set_matches_spec() {
        for kind in PieceKind::ALL {
            let expected = matches!(
                kind,
                PieceKind::King
                    | PieceKind::WarriorKing
                    | PieceKind::WarriorQueen
                    | PieceKind::GenericKing
            );
            assert_eq!(kind.is_royal(), expected, "{kind:?}");
        }
    }
}
