// Dependency-tracked three-stage pipeline driver.
//
// Each item flows A (produce) -> B (transform) -> C (consume). Ordering
// within an item comes from per-item dependency tokens; stages of different
// items may interleave freely on the worker pool. There is no barrier
// between stages or between items.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use thiserror::Error;

use crate::event::{Event, Stage, Trace};
use crate::workload::{burn_work, stage_cost};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("items must be > 0")]
    NoItems,
    #[error("event log is missing item {item} stage {stage:?}")]
    MissingEvent { item: usize, stage: Stage },
}

/// Per-item readiness flags. A token is published exactly once, when the
/// stage producing it completes, and checked when admitting the next stage.
struct TokenTable {
    produced: Vec<AtomicBool>,
    transformed: Vec<AtomicBool>,
}

impl TokenTable {
    fn new(items: usize) -> Self {
        Self {
            produced: (0..items).map(|_| AtomicBool::new(false)).collect(),
            transformed: (0..items).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    fn publish(&self, stage: Stage, item: usize) {
        match stage {
            Stage::Produce => self.produced[item].store(true, Ordering::Release),
            Stage::Transform => self.transformed[item].store(true, Ordering::Release),
            Stage::Consume => {}
        }
    }

    /// True when the input dependency of `stage` for `item` is satisfied.
    fn ready(&self, stage: Stage, item: usize) -> bool {
        match stage {
            Stage::Produce => true,
            Stage::Transform => self.produced[item].load(Ordering::Acquire),
            Stage::Consume => self.transformed[item].load(Ordering::Acquire),
        }
    }
}

fn worker_id() -> usize {
    rayon::current_thread_index().unwrap_or(0)
}

/// Run the pipeline with the standard burn-loop workload.
pub fn run_pipeline(items: usize) -> Result<Trace, PipelineError> {
    run_pipeline_with(items, |_, stage| burn_work(stage_cost(stage)))
}

/// Run the pipeline with an injected per-stage workload.
///
/// `work` receives `(item, stage)` and may be called from any worker thread.
/// Every stage executes exactly once; a stage is submitted to the pool only
/// once the token it depends on has been published, so ineligible stages
/// never occupy a worker. The call returns after all `3 * items` stages
/// have completed.
pub fn run_pipeline_with<W>(items: usize, work: W) -> Result<Trace, PipelineError>
where
    W: Fn(usize, Stage) + Sync,
{
    if items == 0 {
        return Err(PipelineError::NoItems);
    }

    let tokens = TokenTable::new(items);
    // One write-once slot per (item, stage); writers never share a slot, so
    // recording needs no locks on the hot path.
    let slots: Vec<OnceLock<Event>> = (0..3 * items).map(|_| OnceLock::new()).collect();
    let t0 = Instant::now();

    {
        let tokens = &tokens;
        let slots = &slots;
        let work = &work;

        rayon::scope(|s| {
            for item in 0..items {
                s.spawn(move |s| {
                    run_stage(Stage::Produce, item, tokens, slots, work, t0);
                    s.spawn(move |s| {
                        run_stage(Stage::Transform, item, tokens, slots, work, t0);
                        s.spawn(move |_| {
                            run_stage(Stage::Consume, item, tokens, slots, work, t0);
                        });
                    });
                });
            }
        });
    }

    let total = t0.elapsed().as_secs_f64();

    let mut events = Vec::with_capacity(slots.len());
    for (idx, slot) in slots.into_iter().enumerate() {
        let event = slot.into_inner().ok_or(PipelineError::MissingEvent {
            item: idx / 3,
            stage: Stage::ALL[idx % 3],
        })?;
        events.push(event);
    }

    Ok(Trace {
        items,
        total,
        events,
    })
}

fn run_stage<W>(
    stage: Stage,
    item: usize,
    tokens: &TokenTable,
    slots: &[OnceLock<Event>],
    work: &W,
    t0: Instant,
) where
    W: Fn(usize, Stage) + Sync,
{
    debug_assert!(tokens.ready(stage, item));

    let worker = worker_id();
    let start = t0.elapsed().as_secs_f64();
    work(item, stage);
    tokens.publish(stage, item);
    let end = t0.elapsed().as_secs_f64();

    let _ = slots[3 * item + stage.index()].set(Event {
        item,
        stage,
        worker,
        start,
        end,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: usize, _: Stage) {}

    #[test]
    fn rejects_zero_items() {
        assert_eq!(run_pipeline_with(0, noop).unwrap_err(), PipelineError::NoItems);
    }

    #[test]
    fn records_three_events_per_item() {
        let items = 6;
        let trace = run_pipeline_with(items, noop).unwrap();

        assert_eq!(trace.events.len(), 3 * items);
        for stage in Stage::ALL {
            let count = trace.events.iter().filter(|e| e.stage == stage).count();
            assert_eq!(count, items, "stage {stage:?}");
        }
    }

    #[test]
    fn event_slots_are_indexed_by_item_and_stage() {
        let trace = run_pipeline_with(4, noop).unwrap();

        for (idx, event) in trace.events.iter().enumerate() {
            assert_eq!(event.item, idx / 3);
            assert_eq!(event.stage.index(), idx % 3);
        }
    }

    #[test]
    fn stages_of_one_item_are_causally_ordered() {
        let items = 8;
        let trace = run_pipeline_with(items, noop).unwrap();

        for item in 0..items {
            let a = trace.events[3 * item];
            let b = trace.events[3 * item + 1];
            let c = trace.events[3 * item + 2];
            assert!(a.end <= b.start, "item {item}: produce must finish first");
            assert!(b.end <= c.start, "item {item}: transform must finish second");
        }
    }

    #[test]
    fn durations_are_non_negative() {
        let trace = run_pipeline_with(5, noop).unwrap();

        for event in &trace.events {
            assert!(event.start >= 0.0);
            assert!(event.end >= event.start);
        }
    }

    #[test]
    fn end_to_end_with_burn_workload() {
        let items = 4;
        let trace = run_pipeline(items).unwrap();

        assert_eq!(trace.events.len(), 12);
        assert!(trace.total > 0.0);

        let max_threads = rayon::current_num_threads();
        for event in &trace.events {
            assert!(event.worker < max_threads);
        }
        for item in 0..items {
            let transform = trace.events[3 * item + 1];
            let consume = trace.events[3 * item + 2];
            assert!(consume.start >= transform.end);
        }
    }

    #[test]
    fn tokens_admit_stages_in_order() {
        let table = TokenTable::new(2);

        assert!(table.ready(Stage::Produce, 0));
        assert!(!table.ready(Stage::Transform, 0));
        assert!(!table.ready(Stage::Consume, 0));

        table.publish(Stage::Produce, 0);
        assert!(table.ready(Stage::Transform, 0));
        assert!(!table.ready(Stage::Transform, 1));

        table.publish(Stage::Transform, 0);
        assert!(table.ready(Stage::Consume, 0));
    }
}
