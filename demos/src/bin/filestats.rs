//! Count lines, words and characters of a text file.
//!
//! The path comes from the first command-line argument, or from standard
//! input when no argument is given.

use anyhow::Context;
use std::io::BufRead;

fn main() -> anyhow::Result<()> {
    let path = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("reading input")?;
            line.trim().to_string()
        }
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("could not read {}", path))?;

    let lines = text.lines().count();
    let words = text.split_whitespace().count();
    let chars = text.chars().count();

    println!("File: {}", path);
    println!("Lines: {}", lines);
    println!("Words: {}", words);
    println!("Characters: {}", chars);
    Ok(())
}
