use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::io::{stdin, stdout, BufRead, Write};
use std::time::{Duration, Instant};

use connect4_minimax::{board::*, minimax::Minimax, win::detect_win};

mod display;
use display::*;

fn main() -> Result<()> {
    init_tracing();

    let mut board = Board::new();
    let mut search = Minimax::default();
    let mut screen = Screen::new();
    let stdin = stdin();

    let mut turn = if rand::thread_rng().gen_bool(0.5) {
        Player::Human
    } else {
        Player::Ai
    };
    info!(?turn, "game started");

    let mut search_times: Vec<Duration> = Vec::new();
    let mut total_moves = 0;

    // game loop
    let result = loop {
        screen.draw(&board, Status::Turn(turn))?;

        match turn {
            Player::Human => {
                match read_move(&mut stdin.lock(), &board)? {
                    HumanInput::Column(column) => board.place_piece(Player::Human, column),
                    HumanInput::Quit => {
                        screen.clear()?;
                        println!("\nThank you for playing!");
                        return Ok(());
                    }
                    HumanInput::Invalid => {
                        println!("\nInvalid input, try again...");
                        stdout().flush()?;
                        std::thread::sleep(Duration::from_secs(1));
                        continue;
                    }
                }
            }
            Player::Ai => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}"));
                spinner.set_message("Computer is thinking...");
                spinner.enable_steady_tick(100);

                let start = Instant::now();
                let found = search.search(&board);
                let elapsed = start.elapsed();
                spinner.finish_and_clear();

                // the loop stops before the board can become terminal
                let column = found
                    .column
                    .ok_or_else(|| anyhow!("no move available for the computer"))?;
                info!(column, value = found.value, nodes = found.nodes, "computer moved");

                board.place_piece(Player::Ai, column);
                screen.record_ai_move(column, elapsed);
                search_times.push(elapsed);
            }
        }
        total_moves += 1;

        if detect_win(&board, turn) {
            break Status::Won(turn);
        }
        if board.is_full() {
            break Status::Draw;
        }
        turn = turn.opponent();
    };

    screen.draw(&board, result)?;
    info!(?result, total_moves, "game over");

    println!("                    Thank you for playing!");
    if !search_times.is_empty() {
        let average = search_times.iter().sum::<Duration>() / search_times.len() as u32;
        println!(
            "          Average minimax running time: {:.4} seconds",
            average.as_secs_f64()
        );
    }
    println!("                   Total number of moves: {}", total_moves);
    println!("              Total positions searched: {}", search.node_count);
    Ok(())
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum HumanInput {
    Column(usize),
    Quit,
    Invalid,
}

/// Reads one line of human input
///
/// `q` or the end of input quits; anything but a playable column is invalid.
fn read_move<R: BufRead>(input: &mut R, board: &Board) -> Result<HumanInput> {
    let mut input_str = String::new();
    if input.read_line(&mut input_str)? == 0 {
        return Ok(HumanInput::Quit);
    }
    let input = input_str.trim();

    if input.eq_ignore_ascii_case("q") {
        return Ok(HumanInput::Quit);
    }
    Ok(match input.parse::<usize>() {
        Ok(column) if board.is_valid_column(column) => HumanInput::Column(column),
        _ => HumanInput::Invalid,
    })
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
