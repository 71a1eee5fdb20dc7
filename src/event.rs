// Execution-trace records shared by the pipeline demos.

use serde::Serialize;

/// One of the three ordered operations applied to a pipeline item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Stage {
    Produce,
    Transform,
    Consume,
}

impl Stage {
    /// Stages in pipeline order.
    pub const ALL: [Stage; 3] = [Stage::Produce, Stage::Transform, Stage::Consume];

    /// Slot offset within an item's event group: A = 0, B = 1, C = 2.
    pub fn index(self) -> usize {
        match self {
            Stage::Produce => 0,
            Stage::Transform => 1,
            Stage::Consume => 2,
        }
    }

    /// Single-character tag used in the timeline view.
    pub fn tag(self) -> char {
        match self {
            Stage::Produce => 'A',
            Stage::Transform => 'B',
            Stage::Consume => 'C',
        }
    }

    /// Label used in the event table.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Produce => "A (produce)",
            Stage::Transform => "B (transform)",
            Stage::Consume => "C (consume)",
        }
    }
}

/// A recorded stage execution: worker identity plus start/end offsets in
/// seconds since the shared pipeline start.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Event {
    pub item: usize,
    pub stage: Stage,
    pub worker: usize,
    pub start: f64,
    pub end: f64,
}

impl Event {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Completed event log for one pipeline run.
#[derive(Clone, Debug, Serialize)]
pub struct Trace {
    pub items: usize,
    /// Overall elapsed time in seconds.
    pub total: f64,
    /// One event per (item, stage), in slot order `3 * item + stage.index()`.
    pub events: Vec<Event>,
}

impl Trace {
    /// Events ordered by `(start, item, stage)`. Execution order is
    /// nondeterministic; this display order is not.
    pub fn sorted_events(&self) -> Vec<Event> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| {
            a.start
                .total_cmp(&b.start)
                .then_with(|| a.item.cmp(&b.item))
                .then_with(|| a.stage.index().cmp(&b.stage.index()))
        });
        events
    }

    /// Highest worker id observed in the trace.
    pub fn max_worker(&self) -> usize {
        self.events.iter().map(|e| e.worker).max().unwrap_or(0)
    }
}
