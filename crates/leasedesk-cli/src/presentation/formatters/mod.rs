pub mod number;
pub mod status;
pub mod text;
pub mod time;

pub use number::{format_currency, format_percent};
pub use status::{Tone, paint, status_tone};
pub use text::truncate;
pub use time::format_date;
