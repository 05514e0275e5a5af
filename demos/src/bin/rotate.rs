//! Rotate a list of integers left by k positions, without built-in helpers.
//!
//! Input: one line of whitespace-separated integers, then one line with k.

use anyhow::Context;
use std::io::BufRead;

fn rotate_left(values: &[i64], k: usize) -> Vec<i64> {
    if values.is_empty() {
        return Vec::new();
    }
    let k = k % values.len();
    let mut rotated = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        rotated.push(values[(i + k) % values.len()]);
    }
    rotated
}

fn main() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let list_line = lines
        .next()
        .context("expected a line of integers")?
        .context("reading input")?;
    let k_line = lines
        .next()
        .context("expected a rotation count")?
        .context("reading input")?;

    let values: Vec<i64> = list_line
        .split_whitespace()
        .map(|token| token.parse().context("expected an integer"))
        .collect::<anyhow::Result<_>>()?;
    let k: usize = k_line.trim().parse().context("expected a rotation count")?;

    let rotated: Vec<String> = rotate_left(&values, k)
        .iter()
        .map(|v| v.to_string())
        .collect();
    println!("rotated by {}: {}", k, rotated.join(" "));
    Ok(())
}
