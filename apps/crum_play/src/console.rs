/// Line based prompts shared by every menu of the game
use std::io::{self, BufRead};

pub enum Command<T> {
    Value(T),
    Exit,
}

pub struct Console<B> {
    input: B,
    help: String,
}

impl<B: BufRead> Console<B> {
    pub fn new(input: B, help: String) -> Self {
        Self { input, help }
    }

    pub fn show_help(&self) {
        for line in self.help.lines() {
            tracing::info!("{}", line);
        }
    }

    /// Shows the options until one of them is picked. `X` exits and `?`
    /// prints the probability table; end of input counts as exit.
    pub fn ask<T>(
        &mut self,
        title: &str,
        options: &[String],
        accept: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Command<T>> {
        loop {
            tracing::info!("{}", title);
            for option in options {
                tracing::info!("{}", option);
            }
            tracing::info!("X - Exit");
            tracing::info!("? - Help");

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Command::Exit);
            }

            let answer = line.trim();
            if answer.eq_ignore_ascii_case("x") {
                return Ok(Command::Exit);
            }
            if answer == "?" {
                self.show_help();
                continue;
            }
            if let Some(value) = accept(answer) {
                return Ok(Command::Value(value));
            }

            tracing::info!("Invalid input. Please try again.");
        }
    }
}
