//! Command-line runner for the tessel solvers.
//!
//! Run: cargo run --bin tessel -- path grid.json
//!      echo '[[0,1],[1,0]]' | cargo run --bin tessel -- path
//!      cargo run --bin tessel -- path --random 12 --seed 3 --route

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;
use tessel_demos::{
    parse_list, path_answer, random_grid, read_grid, render_distances, render_route,
};
use tessel_exercises::{
    RunTracker, int_to_roman, longest_run, median_sorted_arrays, min_split_time, roman_to_int,
};
use tessel_paths::{ClearPathSolver, Moves, SolverConfig};

#[derive(Parser)]
#[command(name = "tessel")]
#[command(about = "Shortest clear paths and small algorithm exercises", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest clear path from the top-left to the bottom-right cell
    Path {
        /// JSON (`[[0,1],[1,0]]`) or ASCII (`.#`) grid; stdin when omitted
        file: Option<PathBuf>,

        /// Solve a random N×N grid instead of reading one
        #[arg(long, value_name = "N", conflicts_with = "file")]
        random: Option<usize>,

        /// Fraction of blocked cells in a random grid
        #[arg(long, default_value_t = 0.3, requires = "random")]
        density: f64,

        /// Seed for the random grid
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Allow cardinal moves only
        #[arg(long)]
        four: bool,

        /// Give up on paths longer than this many cells
        #[arg(long)]
        max_len: Option<usize>,

        /// Also draw the path
        #[arg(long)]
        route: bool,

        /// Also print the path length from the source to every cell
        #[arg(long)]
        distances: bool,
    },
    /// Convert a roman numeral to an integer
    Roman { numeral: String },
    /// Convert an integer to a canonical roman numeral
    ToRoman { value: u32 },
    /// Median of two sorted, comma-separated integer lists
    Median {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        a: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        b: String,
    },
    /// Longest run of one character, then again after each appended character
    Runs {
        string: String,
        append: Vec<char>,
    },
    /// Best prefix/suffix split of task durations over two processors
    Split { tasks: Vec<u64> },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Path {
            file,
            random,
            density,
            seed,
            four,
            max_len,
            route,
            distances,
        } => {
            let grid = match (random, file) {
                (Some(n), _) => {
                    let seed = seed.unwrap_or_else(|| rand::rng().random());
                    info!("random grid seed {seed}");
                    let mut rng = StdRng::seed_from_u64(seed);
                    let grid = random_grid(n, density, &mut rng)?;
                    println!("{}", serde_json::to_string(&grid)?);
                    grid
                }
                (None, Some(path)) => read_grid(File::open(path)?)?,
                (None, None) => read_grid(io::stdin().lock())?,
            };

            let mut config = SolverConfig::default();
            if four {
                config = config.with_moves(Moves::Four);
            }
            if let Some(len) = max_len {
                config = config.with_max_len(len);
            }
            info!("solving {n}x{n} grid with {config:?}", n = grid.size());

            let mut solver = ClearPathSolver::new(config);
            let path = solver.route(&grid);
            println!("{}", path_answer(path.as_ref().map(Vec::len)));
            match &path {
                Some(path) if route => println!("{}", render_route(&grid, path)),
                _ => {}
            }
            if distances {
                println!("{}", render_distances(&grid, &solver.distances(&grid)));
            }
        }
        Commands::Roman { numeral } => println!("{}", roman_to_int(&numeral)?),
        Commands::ToRoman { value } => println!("{}", int_to_roman(value)?),
        Commands::Median { a, b } => {
            let median = median_sorted_arrays(&parse_list(&a)?, &parse_list(&b)?)?;
            println!("{median}");
        }
        Commands::Runs { string, append } => {
            let mut tracker = RunTracker::new(&string);
            let mut answers = vec![longest_run(&string)];
            for ch in append {
                tracker.push(ch);
                answers.push(tracker.longest());
            }
            let line: Vec<String> = answers.iter().map(usize::to_string).collect();
            println!("{}", line.join(" "));
        }
        Commands::Split { tasks } => println!("{}", min_split_time(&tasks)),
    }

    Ok(())
}
