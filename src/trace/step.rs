use serde::{Deserialize, Serialize};

/// One explained operation inside a cipher run.
///
/// `input_state` and `output_state` are cumulative snapshots (the text
/// processed so far and the output built so far), not just the character
/// touched by this step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    pub input_state: String,
    pub output_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<String>,
}

impl StepRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            formula: None,
            input_state: String::new(),
            output_state: String::new(),
            visualization: None,
        }
    }

    pub fn formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn states(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.input_state = input.into();
        self.output_state = output.into();
        self
    }

    pub fn visualization(mut self, grid: impl Into<String>) -> Self {
        self.visualization = Some(grid.into());
        self
    }
}
