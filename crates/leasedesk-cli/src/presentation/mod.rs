//! # Presentation Layer
//!
//! Console output follows a strictly unidirectional flow:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/` hold raw data (numbers, dates, enums) and derive `Serialize`.
//!   `--format json` always dumps the complete view model.
//! * `presenters/` turn runtime/engine results into view models and decide
//!   which badge and suggestions accompany them.
//! * `views/` implement `fmt::Display`, applying the `ViewMode` density and
//!   calling `formatters/` for currency, dates and status colors.
//! * `renderers/` pick JSON or text output.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
