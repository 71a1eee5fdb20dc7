// Text tables for recorded traces.

use crate::event::{Event, Trace};

/// Fixed-width event table, one row per event, in the order given.
pub fn event_table(events: &[Event]) -> Vec<String> {
    let mut lines = vec![
        "Start    End      Dur      Worker Item  Stage".to_string(),
        "-------- -------- -------- ------ ----- ----------------".to_string(),
    ];

    for event in events {
        lines.push(format!(
            "{:8.4} {:8.4} {:8.4} {:6} {:5} {}",
            event.start,
            event.end,
            event.duration(),
            event.worker,
            event.item,
            event.stage.label(),
        ));
    }

    lines
}

/// Per-item completion summary: end offset of each stage.
pub fn item_summary(trace: &Trace) -> Vec<String> {
    let mut lines = vec![
        "Item | A_end    | B_end    | C_end".to_string(),
        "-----+----------+----------+----------".to_string(),
    ];

    let mut ends = vec![[0.0f64; 3]; trace.items];
    for event in &trace.events {
        if let Some(entry) = ends.get_mut(event.item) {
            entry[event.stage.index()] = event.end;
        }
    }

    for (item, entry) in ends.iter().enumerate() {
        lines.push(format!(
            "{:4} | {:8.4} | {:8.4} | {:8.4}",
            item, entry[0], entry[1], entry[2]
        ));
    }

    lines
}
