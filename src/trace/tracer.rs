use super::StepRecord;

/// Narration hook handed to a cipher's single transform routine.
///
/// A silent tracer drops every record without building it, so the plain
/// `encrypt`/`decrypt` path pays nothing for the explanations.
#[derive(Debug, Default)]
pub struct Tracer {
    steps: Option<Vec<StepRecord>>,
}

impl Tracer {
    pub fn silent() -> Self {
        Self { steps: None }
    }

    pub fn recording() -> Self {
        Self {
            steps: Some(Vec::new()),
        }
    }

    /// Appends the step built by `step`; the closure only runs when recording.
    pub fn record<F>(&mut self, step: F)
    where
        F: FnOnce() -> StepRecord,
    {
        if let Some(steps) = self.steps.as_mut() {
            steps.push(step());
        }
    }

    /// Closes the trace for a run that produced `result`.
    ///
    /// If the last step does not already show the full result (characters
    /// copied after the last transformed one, or nothing transformed at
    /// all) a closing step is appended so the trace ends on `result`.
    pub fn finish(self, input: &str, result: &str) -> Vec<StepRecord> {
        let mut steps = self.steps.unwrap_or_default();
        let complete = steps
            .last()
            .is_some_and(|last| last.output_state == result);
        if !complete {
            steps.push(
                StepRecord::new(
                    "Final Result",
                    "Carry over the characters that need no transformation and assemble the final output.",
                )
                .states(input, result),
            );
        }
        steps
    }
}
