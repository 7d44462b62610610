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

//! Sixarmies: an engine for Chess 2, a variant where each side picks one of
//! six armies before play. See `SPEC_FULL.md` for the full design.

pub mod army;
pub mod bench;
pub mod board;
pub mod defs;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod movegen;
pub mod notation;
pub mod pieces;
pub mod search;
pub mod transposition_table;
