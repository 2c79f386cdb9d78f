use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, Print, PrintStyledContent},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use std::io::{stdout, Write};
use std::time::Duration;

use connect4_minimax::{board::*, COLUMNS, ROWS};

const TITLE: [&str; 6] = [
    "  _____                            _     _  _   ",
    " / ____|                          | |   | || |  ",
    "| |     ___  _ __  _ __   ___  ___| |_  | || |_ ",
    "| |    / _ \\| '_ \\| '_ \\ / _ \\/ __| __| |__   _|",
    "| |___| (_) | | | | | | |  __/ (__| |_     | |  ",
    " \\_____\\___/|_| |_|_| |_|\\___|\\___|\\__|    |_|  ",
];

const MARGIN: &str = "                     ";

#[derive(Copy, Clone, Debug)]
pub enum Status {
    Turn(Player),
    Won(Player),
    Draw,
}

/// Full-screen rendering of the game
pub struct Screen {
    last_ai_move: Option<(usize, Duration)>,
}

impl Screen {
    pub fn new() -> Self {
        Self { last_ai_move: None }
    }

    pub fn record_ai_move(&mut self, column: usize, elapsed: Duration) {
        self.last_ai_move = Some((column, elapsed));
    }

    pub fn clear(&self) -> Result<()> {
        let mut stdout = stdout();
        stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        stdout.flush()?;
        Ok(())
    }

    pub fn draw(&self, board: &Board, status: Status) -> Result<()> {
        self.clear()?;
        let mut stdout = stdout();

        stdout.queue(Print("\n"))?;
        for line in TITLE.iter() {
            stdout.queue(PrintStyledContent(style(format!("{}\n", line)).with(Color::Cyan)))?;
        }
        stdout.queue(Print("\n"))?;

        let message = match status {
            Status::Turn(Player::Human) => "Your turn!",
            Status::Turn(Player::Ai) => "Computer's turn",
            Status::Won(Player::Human) => "You win!! :)",
            Status::Won(Player::Ai) => "Computer wins :(",
            Status::Draw => "Draw!",
        };
        stdout
            .queue(PrintStyledContent(
                style(format!("{}+{}+\n", MARGIN, "-".repeat(2 * COLUMNS + 3))).with(Color::Yellow),
            ))?
            .queue(PrintStyledContent(
                style(format!("{}  {:^width$}\n\n", MARGIN, message, width = 2 * COLUMNS))
                    .attribute(Attribute::Bold)
                    .with(Color::White),
            ))?;

        for row in 0..ROWS {
            stdout.queue(Print(format!("{}  ", MARGIN)))?;
            for column in 0..COLUMNS {
                let (symbol, color) = match board.cell(row, column) {
                    Cell::Human => ("O ", Color::Red),
                    Cell::Ai => ("X ", Color::Blue),
                    Cell::Empty => (". ", Color::DarkGrey),
                };
                stdout.queue(PrintStyledContent(style(symbol).with(color)))?;
            }
            stdout.queue(Print("\n"))?;
        }

        let numbers: Vec<String> = (1..=COLUMNS).map(|x| x.to_string()).collect();
        stdout
            .queue(PrintStyledContent(
                style(format!("{}  {}\n", MARGIN, numbers.join(" "))).with(Color::Yellow),
            ))?
            .queue(PrintStyledContent(
                style(format!("{}+{}+\n\n", MARGIN, "-".repeat(2 * COLUMNS + 3))).with(Color::Yellow),
            ))?;

        if let Some((column, elapsed)) = self.last_ai_move {
            stdout.queue(PrintStyledContent(
                style(format!(
                    "         Computer played column {}, minimax running time: {:.4} seconds\n",
                    column,
                    elapsed.as_secs_f64()
                ))
                .with(Color::Green),
            ))?;
        }

        if let Status::Turn(Player::Human) = status {
            stdout
                .queue(Print(format!(
                    "              Type column number (1-{}) or 'q' to quit\n",
                    COLUMNS
                )))?
                .queue(Print("Your move: "))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
