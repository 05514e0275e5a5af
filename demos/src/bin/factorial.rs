//! Recursive factorial of a number read from standard input.
//!
//! Exit status 0 means the printed line is the result; any invalid input
//! exits non-zero without printing a result.

use anyhow::{Context, bail};
use std::io::BufRead;

fn factorial(n: u64) -> u64 {
    if n <= 1 { 1 } else { n * factorial(n - 1) }
}

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading input")?;

    let n: u64 = line.trim().parse().context("expected a non-negative integer")?;
    if n > 20 {
        bail!("input too large: {}! overflows u64", n);
    }

    println!("{}! = {}", n, factorial(n));
    Ok(())
}
