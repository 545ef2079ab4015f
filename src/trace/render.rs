use std::fmt::{self, Write as _};

use super::StepRecord;

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write_body(f, self, true)
    }
}

fn write_body<W: fmt::Write>(out: &mut W, step: &StepRecord, show_visualization: bool) -> fmt::Result {
    writeln!(out, "  {}", step.description)?;
    if let Some(formula) = &step.formula {
        writeln!(out, "  Formula : {formula}")?;
    }
    if !step.input_state.is_empty() {
        writeln!(out, "  In  → {}", step.input_state)?;
        writeln!(out, "  Out → {}", step.output_state)?;
    }
    if show_visualization {
        if let Some(vis) = step.visualization.as_deref().filter(|v| !v.is_empty()) {
            writeln!(out)?;
            writeln!(out, "{vis}")?;
        }
    }
    Ok(())
}

/// Renders a whole trace as numbered plain-text blocks.
pub fn render_steps(steps: &[StepRecord], show_visualization: bool) -> String {
    let mut out = String::new();
    for (n, step) in steps.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = writeln!(out, "─── Step {}: {} ───", n + 1, step.title);
        let _ = write_body(&mut out, step, show_visualization);
        out.push('\n');
    }
    out
}
