// Per-worker ASCII timeline rendering.
//
// Pure functions of a completed trace: rendering the same trace at the same
// width twice yields byte-identical rows. Bars that land on the same cells
// after column discretization overwrite each other; widening the timeline
// disambiguates them.

use crate::event::{Event, Trace};

/// Map a time offset in `[0, total]` to a column in `[0, width - 1]`.
/// A non-positive total collapses every column to 0.
pub fn time_to_col(t: f64, total: f64, width: usize) -> usize {
    if total <= 0.0 || width == 0 {
        return 0;
    }
    let x = (t / total).clamp(0.0, 1.0);
    let col = (x * (width - 1) as f64).round() as usize;
    col.min(width - 1)
}

/// Paint one event into a worker row: the stage tag over the event's column
/// span, plus the item id after the bar start when the bar is wide enough.
fn paint_event(row: &mut [u8], event: &Event, total: f64) {
    let width = row.len();
    if width == 0 {
        return;
    }

    let mut c0 = time_to_col(event.start, total, width);
    let mut c1 = time_to_col(event.end, total, width);
    if c1 < c0 {
        std::mem::swap(&mut c0, &mut c1);
    }

    let tag = event.stage.tag() as u8;
    if c0 == c1 {
        row[c0] = tag;
        return;
    }

    for cell in &mut row[c0..=c1] {
        *cell = tag;
    }

    // Best-effort item annotation; ids above 99 skip it rather than erroring.
    if c0 + 2 < width && event.item <= 99 {
        row[c0] = tag;
        if event.item >= 10 {
            row[c0 + 1] = b'0' + (event.item / 10) as u8;
            row[c0 + 2] = b'0' + (event.item % 10) as u8;
        } else {
            row[c0 + 1] = b'0' + event.item as u8;
        }
    }
}

/// One `width`-column row per worker id in `0..=max_observed`, painted in
/// the deterministic sorted event order.
pub fn render_timeline(trace: &Trace, width: usize) -> Vec<String> {
    let mut rows = vec![vec![b'.'; width]; trace.max_worker() + 1];

    for event in trace.sorted_events() {
        if let Some(row) = rows.get_mut(event.worker) {
            paint_event(row, &event, trace.total);
        }
    }

    rows.into_iter()
        .map(|row| row.into_iter().map(char::from).collect())
        .collect()
}

/// Time ruler printed above the worker rows.
pub fn render_axis(width: usize, total: f64) -> String {
    let mut line = String::from("Time: 0");
    if width > 10 {
        let span = width - 10;
        for i in 0..span {
            if i == (span - 1) / 2 || i == span.saturating_sub(2) {
                line.push('|');
            } else {
                line.push('-');
            }
        }
    }
    line.push_str(&format!("T={total:.3}s"));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Stage;

    fn trace(events: Vec<Event>, total: f64) -> Trace {
        Trace {
            items: events.len() / 3 + 1,
            total,
            events,
        }
    }

    fn event(item: usize, stage: Stage, worker: usize, start: f64, end: f64) -> Event {
        Event {
            item,
            stage,
            worker,
            start,
            end,
        }
    }

    #[test]
    fn zero_total_collapses_to_column_zero() {
        for width in [1, 2, 40, 80] {
            assert_eq!(time_to_col(0.0, 0.0, width), 0);
            assert_eq!(time_to_col(1.0, 0.0, width), 0);
            assert_eq!(time_to_col(0.5, -1.0, width), 0);
        }
    }

    #[test]
    fn columns_are_clamped_to_width() {
        assert_eq!(time_to_col(2.0, 1.0, 40), 39);
        assert_eq!(time_to_col(-1.0, 1.0, 40), 0);
        assert_eq!(time_to_col(1.0, 1.0, 1), 0);
    }

    #[test]
    fn rendering_is_idempotent() {
        let t = trace(
            vec![
                event(0, Stage::Produce, 0, 0.0, 0.4),
                event(0, Stage::Transform, 1, 0.4, 0.9),
                event(0, Stage::Consume, 0, 0.9, 1.0),
            ],
            1.0,
        );

        let first = render_timeline(&t, 60);
        let second = render_timeline(&t, 60);
        assert_eq!(first, second);
    }

    #[test]
    fn one_row_per_worker_up_to_max_observed() {
        let t = trace(
            vec![
                event(0, Stage::Produce, 0, 0.0, 0.5),
                event(1, Stage::Produce, 2, 0.0, 0.5),
            ],
            1.0,
        );

        let rows = render_timeline(&t, 40);
        assert_eq!(rows.len(), 3);
        assert!(rows[1].chars().all(|c| c == '.'));
        for row in &rows {
            assert_eq!(row.len(), 40);
        }
    }

    #[test]
    fn bars_carry_stage_tag_and_item_id() {
        let t = trace(vec![event(7, Stage::Transform, 0, 0.0, 1.0)], 1.0);

        let rows = render_timeline(&t, 40);
        assert!(rows[0].starts_with("B7BB"));
        assert!(rows[0].ends_with('B'));
    }

    #[test]
    fn items_above_two_digits_skip_annotation() {
        let t = trace(vec![event(100, Stage::Produce, 0, 0.0, 1.0)], 1.0);

        let rows = render_timeline(&t, 40);
        assert_eq!(rows[0], "A".repeat(40));
    }

    #[test]
    fn reversed_column_range_is_swapped_before_painting() {
        let t = trace(vec![event(3, Stage::Consume, 0, 1.0, 0.0)], 1.0);

        let rows = render_timeline(&t, 40);
        assert!(rows[0].starts_with("C3CC"));
    }

    #[test]
    fn zero_total_paints_only_the_first_column() {
        let t = trace(vec![event(0, Stage::Produce, 0, 0.0, 0.0)], 0.0);

        let rows = render_timeline(&t, 40);
        assert!(rows[0].starts_with('A'));
        assert_eq!(&rows[0][1..], &".".repeat(39));
    }

    #[test]
    fn axis_spans_requested_width() {
        let axis = render_axis(80, 1.234);
        assert!(axis.starts_with("Time: 0"));
        assert!(axis.ends_with("T=1.234s"));
        assert_eq!(axis.matches('|').count(), 2);
    }
}
