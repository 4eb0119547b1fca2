//! Human-readable report rendering for parsed schedules.

use std::fmt;

use crate::schedule::Schedule;

/// Renders the six-line field report for a schedule.
///
/// One line per field in fixed order, `<label>: <space-separated ascending
/// integers>`, with the command echoed verbatim on the last line. No trailing
/// newline.
pub fn render_report(schedule: &Schedule) -> String {
    let mut lines = Vec::with_capacity(6);

    for (label, values) in schedule.fields() {
        let rendered: Vec<String> = values.iter().map(|value| value.to_string()).collect();
        lines.push(format!("{}: {}", label, rendered.join(" ")));
    }
    lines.push(format!("command: {}", schedule.command));

    lines.join("\n")
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_report(self))
    }
}
