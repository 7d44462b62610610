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

//! Algebraic square and move notation: the coordinate I/O of spec.md §6.

use crate::board::Position;
use crate::defs::{Sq, A1};
use crate::error::ParseError;
use crate::movegen::Move;

/// Parses a square like `"e2"` into its mailbox index.
///
/// # Errors
///
/// Returns [`ParseError::InvalidSquare`] if `s` isn't two characters of the
/// form `[a-h][1-8]`.
pub fn parse_square(s: &str) -> Result<Sq, ParseError> {
    let mut chars = s.chars();
    let (Some(file_c), Some(rank_c), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ParseError::InvalidSquare);
    };
    if !('a'..='h').contains(&file_c) || !('1'..='8').contains(&rank_c) {
        return Err(ParseError::InvalidSquare);
    }
    let file = i16::from(file_c as u8 - b'a');
    let rank = i16::from(rank_c as u8 - b'1');
    let idx = i16::from(A1.0) + file - 10 * rank;
    Ok(Sq(idx as u8))
}

/// Renders a mailbox index as an algebraic square like `"e2"`.
#[must_use]
pub fn render_square(sq: Sq) -> String {
    let offset = i16::from(sq.0) - i16::from(A1.0);
    let rank = offset.div_euclid(10);
    let file = offset.rem_euclid(10);
    let file_c = (b'a' + file as u8) as char;
    let digit = 1 - rank;
    let rank_c = (b'0' as i16 + digit) as u8 as char;
    format!("{file_c}{rank_c}")
}

/// Parses a four-character move string like `"e2e4"` and checks that it
/// names a move `pos` actually produces.
///
/// # Errors
///
/// Returns [`ParseError::InvalidSquare`] if either half doesn't parse, or
/// [`ParseError::InvalidMove`] if it parses but isn't pseudo-legal here.
pub fn parse_move(pos: &Position, s: &str) -> Result<Move, ParseError> {
    if s.len() != 4 {
        return Err(ParseError::InvalidSquare);
    }
    let from = parse_square(&s[0..2])?;
    let to = parse_square(&s[2..4])?;
    let mv = Move { from, to };
    if pos.moves().contains(&mv) {
        Ok(mv)
    } else {
        Err(ParseError::InvalidMove)
    }
}

/// Renders a move as a four-character string like `"e2e4"`.
#[must_use]
pub fn render_move(mv: Move) -> String {
    format!("{}{}", render_square(mv.from), render_square(mv.to))
}

#[cfg(test)]
mod tests {
    use super::{parse_square, render_square};
    use crate::defs::{Sq, A1, A8, H1, H8};

    #[test]
    fn corners_round_trip() {
        for sq in [A1, H1, A8, H8] {
            let rendered = render_square(sq);
            assert_eq!(parse_square(&rendered), Ok(sq));
        }
    }

    #[test]
    fn e2_parses_to_the_expected_square() {
        assert_eq!(parse_square("e2"), Ok(Sq(85)));
        assert_eq!(render_square(Sq(85)), "e2");
    }

    #[test]
    fn rejects_malformed_squares() {
        assert!(parse_square("i9").is_err());
        assert!(parse_square("e").is_err());
        assert!(parse_square("e10").is_err());
    }
}
