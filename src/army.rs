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

//! The six selectable armies and their starting rosters (spec.md §6).

use crate::error::ParseError;
use crate::pieces::PieceKind;

/// One of the six armies a side can choose before play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Army {
    Classic = 1,
    Nemesis = 2,
    Empowered = 3,
    Reaper = 4,
    TwoKings = 5,
    Animals = 6,
}

impl Army {
    /// All six armies, in id order.
    pub const ALL: [Self; 6] = [
        Self::Classic,
        Self::Nemesis,
        Self::Empowered,
        Self::Reaper,
        Self::TwoKings,
        Self::Animals,
    ];

    /// Looks up an army by its `1..=6` id.
    pub fn from_id(id: u8) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|a| *a as u8 == id)
            .ok_or(ParseError::InvalidArmy)
    }

    /// This army's back rank, from the a-file to the h-file, White's side
    /// up.
    #[must_use]
    pub const fn back_rank(self) -> [PieceKind; 8] {
        use PieceKind::{
            Bishop, Elephant, EmpoweredBishop, EmpoweredKnight, EmpoweredRook, GenericKing, Ghost,
            Reaper as ReaperKind, JungleQueen, King, Knight, NemesisQueen, Rook, Tiger,
            WarriorKing, WarriorQueen, WildHorse,
        };
        match self {
            Self::Classic => [Rook, Knight, Bishop, PieceKind::Queen, King, Bishop, Knight, Rook],
            Self::Nemesis => [
                Rook,
                Knight,
                Bishop,
                NemesisQueen,
                GenericKing,
                Bishop,
                Knight,
                Rook,
            ],
            Self::Empowered => [
                EmpoweredRook,
                EmpoweredKnight,
                EmpoweredBishop,
                PieceKind::EmpoweredQueen,
                GenericKing,
                EmpoweredBishop,
                EmpoweredKnight,
                EmpoweredRook,
            ],
            Self::Reaper => [
                Ghost,
                Knight,
                Bishop,
                ReaperKind,
                GenericKing,
                Bishop,
                Knight,
                Ghost,
            ],
            Self::TwoKings => [
                Rook,
                Knight,
                Bishop,
                WarriorQueen,
                WarriorKing,
                Bishop,
                Knight,
                Rook,
            ],
            Self::Animals => [
                Elephant,
                WildHorse,
                Tiger,
                JungleQueen,
                GenericKing,
                Tiger,
                WildHorse,
                Elephant,
            ],
        }
    }

    /// This army's pawn kind (all eight pawns are the same kind).
    #[must_use]
    pub const fn pawn_kind(self) -> PieceKind {
        match self {
            Self::Nemesis => PieceKind::NemesisPawn,
            _ => PieceKind::Pawn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Army;

    #[test]
    fn from_id_round_trips() {
        for army in Army::ALL {
            assert_eq!(Army::from_id(army as u8), Ok(army));
        }
        assert!(Army::from_id(0).is_err());
        assert!(Army::from_id(7).is_err());
    }

    #[test]
    fn back_ranks_have_a_royal_center_and_mirror_wings() {
        for army in Army::ALL {
            let rank = army.back_rank();
            assert!(rank[4].is_royal(), "{army:?} has no royal on e-file");
            assert_eq!(rank[2], rank[5]);
            assert_eq!(rank[1], rank[6]);
            assert_eq!(rank[0], rank[7]);
        }
    }
}
