use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use mn_queens::board::{Board, Solution};
use mn_queens::puzzle::{Dimensions, Puzzle};
use mn_queens::render::render;
use mn_queens::solve::{NoObserver, SearchObserver};

/// Enumerate non-attacking queen placements on a rectangular board.
#[derive(Parser, Debug)]
#[command(name = "queens")]
struct Args {
    /// Number of board rows
    #[arg(short = 'm', long)]
    rows: u16,

    /// Number of board columns
    #[arg(short = 'n', long)]
    cols: u16,

    /// Stop after the first solution
    #[arg(short, long)]
    first: bool,

    /// Render the board after every placement and removal (much slower!)
    #[arg(short, long)]
    trace: bool,

    /// Browse solutions by index interactively after the search
    #[arg(short, long)]
    browse: bool,
}

/// Re-renders the board after every search step.
struct StepTracer {
    found: usize,
}

impl StepTracer {
    fn show(&self, board: &Board) {
        clear_screen();
        println!("Solutions found: {}", self.found);
        print!("{}", render(board));
    }
}

impl SearchObserver for StepTracer {
    fn queen_placed(&mut self, board: &Board, _row: u16, _col: u16) {
        self.show(board);
    }

    fn queen_removed(&mut self, board: &Board, _row: u16, _col: u16) {
        self.show(board);
    }

    fn solution_found(&mut self, _solution: &Solution, total: usize) {
        self.found = total;
    }
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

fn print_solutions(solutions: &[Solution]) {
    if solutions.is_empty() {
        println!("SORRY. No solutions found. :(");
        return;
    }
    for (i, s) in solutions.iter().enumerate() {
        println!("Solution #{}", i + 1);
        print!("{}", render(s));
        println!();
    }
    println!("Solutions found: {}", solutions.len());
}

/// Interactive viewer: a 1-based index renders that solution, `q` quits.
fn browse(solutions: &[Solution]) -> Result<()> {
    let stdin = io::stdin();
    loop {
        if !solutions.is_empty() {
            println!("To display a specific solution enter its index number.");
        }
        print!("If you want to quit enter <Q>: ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if matches!(input.to_ascii_uppercase().as_str(), "Q" | "QUIT" | "EXIT") {
            return Ok(());
        }
        if let Ok(i) = input.parse::<usize>() {
            if (1..=solutions.len()).contains(&i) {
                println!("Solution #{i}");
                print!("{}", render(&solutions[i - 1]));
                println!();
            } else {
                println!("Invalid index! Choose from 1 to {}", solutions.len());
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dims = Dimensions::new(args.rows, args.cols)?;
    let puzzle = Puzzle::new(dims).with_first_only(args.first);

    let solutions = if args.trace {
        let mut tracer = StepTracer { found: 0 };
        let solutions = puzzle.solve(&mut tracer);
        clear_screen();
        solutions
    } else {
        puzzle.solve(&mut NoObserver)
    };

    print_solutions(&solutions);
    if args.browse {
        browse(&solutions)?;
    }
    Ok(())
}
