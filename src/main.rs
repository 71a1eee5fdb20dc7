// Demo runner: launches individual demos or the whole set.

use std::env;
use std::process::Command;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "pipeline" => run_pipeline_demos(),
        "tasks" => run_task_demos(),
        "all" => {
            run_task_demos();
            println!("\n\n");
            run_pipeline_demos();
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            println!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}

fn print_usage() {
    println!("Task-pipeline demo suite");
    println!();
    println!("Usage: cargo run --release --bin run_all_demos <command>");
    println!();
    println!("Commands:");
    println!("  pipeline - Run the dependency pipeline demos (depend, overlap, gantt)");
    println!("  tasks    - Run the fork/join task demo (fibonacci)");
    println!("  all      - Run every demo");
    println!("  help     - Show this help message");
    println!();
    println!("You can also run individual demos directly:");
    println!("  cargo run --release --bin pipeline_depend [items]");
    println!("  cargo run --release --bin pipeline_overlap [items] [verbosity]");
    println!("  cargo run --release --bin pipeline_gantt [items] [width] [print_events]");
    println!("  cargo run --release --bin pipeline_events_json [items]");
    println!("  cargo run --release --bin tasks_fib [n] [cutoff]");
}

fn run_pipeline_demos() {
    for bin in ["pipeline_depend", "pipeline_overlap", "pipeline_gantt"] {
        run_demo(bin);
        println!();
    }
}

fn run_task_demos() {
    run_demo("tasks_fib");
}

fn run_demo(bin: &str) {
    println!("Running {bin}...");
    println!("=====================================\n");

    let status = Command::new("cargo")
        .args(["run", "--release", "--bin", bin])
        .status();

    match status {
        Ok(status) if status.success() => {}
        Ok(_) => eprintln!("{bin} failed!"),
        Err(err) => eprintln!("Failed to launch {bin}: {err}"),
    }
}
