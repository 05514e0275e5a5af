//! First N Fibonacci numbers, computed iteratively.

use anyhow::{Context, bail};
use std::io::BufRead;

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading input")?;

    let n: usize = line.trim().parse().context("expected a positive integer")?;
    if n == 0 || n > 90 {
        bail!("n must be between 1 and 90");
    }

    let mut sequence = Vec::with_capacity(n);
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        sequence.push(a.to_string());
        let next = a + b;
        a = b;
        b = next;
    }

    println!("fib(1..={}) = {}", n, sequence.join(" "));
    Ok(())
}
