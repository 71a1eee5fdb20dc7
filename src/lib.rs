// Dependency-driven task parallelism demos on a shared worker pool.
//
// The core is a three-stage pipeline (produce -> transform -> consume) whose
// per-item ordering is enforced purely by dependency tokens, plus an event
// recorder and text renderers that make the resulting overlap visible.
// The binaries under src/tasking/ wire these pieces to the command line.

pub mod event;
pub mod fib;
pub mod gantt;
pub mod pipeline;
pub mod report;
pub mod workload;
