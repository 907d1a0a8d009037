use crate::args::{OutputFormat, ViewModeArgs};
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
    /// Reference day for lease activity and dashboard figures
    pub today: NaiveDate,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: &ViewModeArgs, today: NaiveDate) -> Self {
        Self {
            format,
            view_mode: view_mode.resolve(),
            today,
        }
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.view_mode);
        renderer.render(view_model)
    }
}
