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

//! Ties a [`Position`] to its own search context, the way `engine.rs` ties
//! a board to a transposition table and node counter for the CLI.

use crate::army::Army;
use crate::board::{start_position, Position};
use crate::movegen::Move;
use crate::search::{search, SearchContext, SearchLimits};

/// A long-lived game: the current position plus the search state built up
/// across moves.
#[derive(Debug, Default)]
pub struct Engine {
    pos: Option<Position>,
    ctx: SearchContext,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game with the given armies.
    pub fn set_position(&mut self, us_army: Army, them_army: Army) {
        self.pos = Some(start_position(us_army, them_army));
        self.ctx = SearchContext::new();
    }

    #[must_use]
    pub fn position(&self) -> Option<&Position> {
        self.pos.as_ref()
    }

    /// Applies a move the caller has already validated via
    /// [`crate::notation::parse_move`].
    pub fn apply(&mut self, mv: Move) {
        if let Some(pos) = &self.pos {
            self.pos = Some(pos.apply(mv));
        }
    }

    /// Searches the current position and reports the best move found,
    /// printing per-depth progress the way the source's `search()` does.
    ///
    /// # Panics
    ///
    /// Panics if no position has been set via [`Self::set_position`].
    pub fn go(&mut self, limits: SearchLimits) -> (Option<Move>, i32) {
        let pos = self.pos.expect("go() called before set_position()");
        let (mv, score) = search(&mut self.ctx, &pos, limits);
        if let Some(mv) = mv {
            println!("bestmove {}", crate::notation::render_move(mv));
        }
        (mv, score)
    }

    /// Drops the search context, keeping the current position.
    pub fn reset(&mut self) {
        self.ctx = SearchContext::new();
    }
}

#[cfg(test)]
mod tests {
    use super::Engine;
    use crate::army::Army;
    use crate::evaluation::MATE_VALUE;
    use crate::search::SearchLimits;

    #[test]
    fn go_returns_a_move_from_the_opening_position() {
        let mut engine = Engine::new();
        engine.set_position(Army::Classic, Army::Classic);
        let (mv, score) = engine.go(SearchLimits { max_nodes: 2_000 });
        assert!(mv.is_some());
        assert!(score.abs() < MATE_VALUE);
    }
}
