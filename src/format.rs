//! Output Formatter: columnar listings, status blocks, and state colors.

pub mod listing;
pub mod palette;
pub mod status;

pub use listing::{glob_match, render_listing};
pub use palette::{Palette, StateClass};
pub use status::{field_list, render_service_overview, render_status};
