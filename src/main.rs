use std::io::{self, BufRead, Write};

use clap::Parser;

mod cli;
mod domain;
mod services;

use cli::Cli;
use services::output::print_one;
use services::speller::spell;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let raw = match cli.number {
        Some(number) => number,
        None => read_number_interactively()?,
    };

    let result = spell(&raw)?;
    print_one(cli.json, result, |r| {
        vec![
            format!("In words: {}", r.words),
            format!("In words and digits: {}", r.words_and_digits),
            format!("Number length: {} digits", r.digit_count),
        ]
    })?;

    Ok(())
}

fn read_number_interactively() -> anyhow::Result<String> {
    print!(">");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
