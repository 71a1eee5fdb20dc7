// Introductory task parallelism: recursive Fibonacci with a serial cutoff.
//
// Demonstrates fork/join tasking without declared dependencies: each call
// above the cutoff spawns its two subproblems as parallel tasks and waits
// for both. Fibonacci is chosen for its branching structure, not speed.
//
// Usage:
//   tasks_fib [n] [cutoff]
//   n      : Fibonacci index to compute (default: 40)
//   cutoff : tasks are spawned only for n > cutoff (default: 20)

use std::process;
use std::time::Instant;

use clap::Parser;

use task_pipeline_demos::fib::fib_tasks;

#[derive(Parser)]
#[command(name = "tasks_fib")]
struct Args {
    /// Fibonacci index to compute.
    #[arg(default_value_t = 40, value_parser = clap::value_parser!(u64).range(1..=1_000_000))]
    n: u64,

    /// Recursion depth control; at least 2 for meaningful granularity.
    #[arg(default_value_t = 20, value_parser = clap::value_parser!(u64).range(2..=1_000_000))]
    cutoff: u64,
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    }
}

fn main() {
    let args = parse_args();

    println!("Task parallelism introduction");
    println!("Compute Fibonacci(n) with fork/join tasks");
    println!("n = {}, cutoff = {}", args.n, args.cutoff);
    println!("Worker threads available: {}\n", rayon::current_num_threads());

    let start = Instant::now();
    let result = fib_tasks(args.n, args.cutoff);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Result: Fibonacci({}) = {}", args.n, result);
    println!("Elapsed time: {elapsed:.6} s\n");

    println!("Interpretation:");
    println!("  - Tasks express irregular, recursive parallelism that does not fit a");
    println!("    simple parallel-for loop.");
    println!("  - The cutoff controls task granularity: too small means many tiny tasks");
    println!("    and high overhead; too large means insufficient parallelism.");
    println!("  - The pool schedules spawned tasks across workers dynamically.");
}
