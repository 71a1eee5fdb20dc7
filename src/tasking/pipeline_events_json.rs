// Machine-readable trace export: runs the pipeline and prints the event log
// as JSON for external plotting or analysis tools.
//
// Usage:
//   pipeline_events_json [items]
//   items : number of independent pipeline items (default: 8)

use std::process;

use clap::Parser;

use task_pipeline_demos::pipeline::run_pipeline;

#[derive(Parser)]
#[command(name = "pipeline_events_json")]
struct Args {
    /// Number of independent pipeline items.
    #[arg(default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    items: u32,
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

    let trace = match run_pipeline(args.items as usize) {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&trace) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: failed to serialize trace: {err}");
            process::exit(1);
        }
    }
}
