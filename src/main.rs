#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, BufWriter, Write};

use clap::{Parser, Subcommand};
use combinations::demo::{DemoError, random_items, render_run, render_samples};

#[derive(Parser)]
#[command(about = "Walks through every k-element combination of a list of items")]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone)]
enum Mode {
    /// Print the sample runs
    Samples,
    /// Pick `k` out of the given items
    Pick {
        #[arg(short)]
        k: usize,
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Pick `k` out of `n` random numbers
    Random {
        #[arg(short)]
        n: usize,
        #[arg(short)]
        k: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), DemoError> {
    env_logger::init();
    let args = Args::parse();

    let mut out = BufWriter::new(io::stdout().lock());
    match args.mode.unwrap_or(Mode::Samples) {
        Mode::Samples => render_samples(&mut out)?,
        Mode::Pick { k, items } => render_run(&mut out, &items, k)?,
        Mode::Random { n, k, seed } => render_run(&mut out, &random_items(n, seed), k)?,
    }
    out.flush()?;
    Ok(())
}
