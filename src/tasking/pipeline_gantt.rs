// ASCII Gantt visualization of pipeline task overlap.
//
// Same pipeline as pipeline_overlap, rendered as one timeline row per
// worker thread. A qualitative visualization tool, not a benchmark:
// timeline granularity depends on width and total elapsed time.
//
// Usage:
//   pipeline_gantt [items] [width] [print_events]
//   items        : number of pipeline items (default: 8)
//   width        : timeline width in characters, >= 40 (default: 80)
//   print_events : 0 = only gantt, 1 = gantt + event list (default: 0)

use std::process;

use clap::Parser;

use task_pipeline_demos::gantt;
use task_pipeline_demos::pipeline::run_pipeline;
use task_pipeline_demos::report;

#[derive(Parser)]
#[command(name = "pipeline_gantt")]
struct Args {
    /// Number of independent pipeline items.
    #[arg(default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    items: u32,

    /// Timeline width in characters; at least 40 for readable output.
    #[arg(default_value_t = 80, value_parser = clap::value_parser!(u32).range(40..))]
    width: u32,

    /// 0 = only gantt, 1 = gantt + event list.
    #[arg(default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    print_events: u8,
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
    let width = args.width as usize;

    println!("Pipeline Gantt visualization (tasks + dependency tokens)");
    println!(
        "items = {}, width = {}, print_events = {}",
        args.items, args.width, args.print_events
    );
    println!("Worker threads available: {}\n", rayon::current_num_threads());

    let trace = match run_pipeline(args.items as usize) {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    println!("Total elapsed time: {:.6} s\n", trace.total);

    println!("Legend:");
    println!("  A = produce, B = transform, C = consume");
    println!("  Digits after a stage letter indicate the item id (best-effort)\n");

    println!("Gantt timeline (each row = one worker thread):");
    println!("{}", gantt::render_axis(width, trace.total));
    for (worker, row) in gantt::render_timeline(&trace, width).iter().enumerate() {
        println!("W{worker:02}: {row}");
    }

    println!();
    println!("Interpretation:");
    println!("  - Overlap is visible when multiple worker rows show activity at the same time.");
    println!("  - Within each item, A completes before B, and B before C (token constraints).");
    println!("  - The runtime may place the stages of one item on different workers, so they");
    println!("    can appear on different rows.");

    if args.print_events == 1 {
        println!("\nEvent list (sorted by start time):");
        for line in report::event_table(&trace.sorted_events()) {
            println!("{line}");
        }
        println!();
    }
}
