use std::{
    fmt::Display,
    io::{self, Write},
};

use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::{Combinations, count::factorial};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Combinations(#[from] crate::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Writes `[a, b, c]`
fn write_list<T: Display>(out: &mut impl Write, list: &[T]) -> io::Result<()> {
    write!(out, "[")?;
    for (position, item) in list.iter().enumerate() {
        if position != 0 {
            write!(out, ", ")?;
        }
        write!(out, "{item}")?;
    }
    write!(out, "]")
}

/// Prints the total, then one `number: [items] {[indices]}` line per combination
/// # Errors
/// - If `k` isnt inside of `1..=items.len()`
/// - If writing to `out` fails
pub fn render_run<T: Display + Clone>(
    out: &mut impl Write,
    items: &[T],
    k: usize,
) -> Result<(), DemoError> {
    let mut combinations = Combinations::new(items, k)?;
    writeln!(out, "Total number={}", combinations.total_combination_count())?;

    while combinations.has_next() {
        let combination = combinations.try_next()?;
        coz::progress!();

        write!(out, "{}: ", combinations.current_combination_number())?;
        write_list(out, &combination)?;
        write!(out, " {{")?;
        write_list(out, combinations.last_indices().unwrap_or_default())?;
        writeln!(out, "}}")?;
    }
    Ok(())
}

/// The sample output: a couple of factorials, 3 out of `1..=5` and 4 out of `a..=h`
/// # Errors
/// - If writing to `out` fails
pub fn render_samples(out: &mut impl Write) -> Result<(), DemoError> {
    writeln!(out, "fact(5)={}", factorial(5))?;
    writeln!(out, "fact(3)={}", factorial(3))?;
    render_run(out, &["1", "2", "3", "4", "5"], 3)?;
    render_run(out, &["a", "b", "c", "d", "e", "f", "g", "h"], 4)
}

/// `count` random numbers below 100, reproducible if a `seed` is given
#[must_use]
pub fn random_items(count: usize, seed: Option<u64>) -> Vec<u8> {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    (0..count).map(|_| rng.gen_range(0..100)).collect()
}
