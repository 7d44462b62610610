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

use std::fmt::{self, Display, Formatter};

/// An error produced while parsing user-facing input: a square, an army
/// number, or a move string.
///
/// None of these are fatal: the CLI re-prompts on any of them. See spec.md
/// §7 for the error taxonomy this follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A square string wasn't two characters of the form `[a-h][1-8]`.
    InvalidSquare,
    /// An army number wasn't in `1..=6`.
    InvalidArmy,
    /// A move string didn't name a move `gen_moves` actually produces.
    InvalidMove,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSquare => write!(f, "expected a square like \"e4\""),
            Self::InvalidArmy => write!(f, "expected an army number from 1 to 6"),
            Self::InvalidMove => write!(f, "that move isn't legal in this position"),
        }
    }
}

impl std::error::Error for ParseError {}
