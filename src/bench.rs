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

//! A small fixed set of starting positions, one per army, for tests and
//! benchmarking. Built once behind `lazy_static!` since [`start_position`]
//! isn't `const fn`.

use lazy_static::lazy_static;

use crate::army::Army;
use crate::board::{start_position, Position};

lazy_static! {
    /// Every army mirrored against itself, in `Army::ALL` order.
    pub static ref MIRROR_MATCHES: Vec<Position> = Army::ALL
        .into_iter()
        .map(|army| start_position(army, army))
        .collect();

    /// The classic opening, used by the default CLI and most tests.
    pub static ref CLASSIC_OPENING: Position = start_position(Army::Classic, Army::Classic);
}

#[cfg(test)]
mod tests {
    use super::{CLASSIC_OPENING, MIRROR_MATCHES};

    #[test]
    fn mirror_matches_cover_every_army() {
        assert_eq!(MIRROR_MATCHES.len(), 6);
    }

    #[test]
    fn classic_opening_has_zero_score() {
        assert_eq!(CLASSIC_OPENING.score, 0);
    }
}
