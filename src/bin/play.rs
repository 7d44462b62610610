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

//! The terminal driver: army selection, a move loop, board printing. An
//! external collaborator around the engine crate (spec.md §1), not part of
//! the core it tests.

use std::io::{self, Write};

use sixarmies::army::Army;
use sixarmies::board::Cell;
use sixarmies::engine::Engine;
use sixarmies::evaluation::MATE_VALUE;
use sixarmies::notation::{parse_move, render_move};
use sixarmies::search::SearchLimits;

fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

fn prompt_army(label: &str) -> Army {
    loop {
        let line = prompt(label);
        if let Ok(id) = line.parse::<u8>() {
            if let Ok(army) = Army::from_id(id) {
                return army;
            }
        }
        println!("expected an army number from 1 to 6");
    }
}

fn print_board(board: &[Cell; 120]) {
    for rank in 2..=9u8 {
        let mut row = String::new();
        for file in 1..=8u8 {
            let cell = board[(rank * 10 + file) as usize];
            let c = match cell {
                Cell::Empty => '.',
                Cell::OffBoard => ' ',
                Cell::Piece(kind, side) => kind.cell_char(side),
            };
            row.push(c);
            row.push(' ');
        }
        println!("{row}");
    }
}

fn main() {
    println!("Sixarmies: armies are 1=Classic 2=Nemesis 3=Empowered 4=Reaper 5=TwoKings 6=Animals");
    let us_army = prompt_army("Your army: ");
    let them_army = prompt_army("Opponent's army: ");

    let mut engine = Engine::new();
    engine.set_position(us_army, them_army);

    loop {
        let pos = *engine.position().expect("position was just set");
        print_board(&pos.board);

        if pos.score.abs() >= MATE_VALUE {
            println!("Game over. Score: {}", pos.score);
            break;
        }

        let mv = loop {
            let line = prompt("Your move (e.g. e2e4): ");
            match parse_move(&pos, &line) {
                Ok(mv) => break mv,
                Err(e) => println!("{e}"),
            }
        };
        engine.apply(mv);

        let pos = *engine.position().expect("position was just set");
        if pos.score.abs() >= MATE_VALUE {
            print_board(&pos.board);
            println!("Game over. Score: {}", pos.score);
            break;
        }
        if pos.second {
            // A Two Kings bonus sub-turn: still the human's move, restricted
            // to the Warrior Queen/King, and no rotation has happened yet.
            continue;
        }

        let (reply, _score) = engine.go(SearchLimits::default());
        match reply {
            Some(reply) => {
                println!("Engine plays {}", render_move(reply));
                engine.apply(reply);
            }
            None => {
                println!("Engine has no move.");
                break;
            }
        }
    }
}
