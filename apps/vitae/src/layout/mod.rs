// Layout core: measurement, cursor/page state and style profiles.
// Everything here is synchronous and CPU-bound; one Cursor per document.

pub mod cursor;
pub mod font_metrics;
pub mod style_profile;
pub mod wrap;

pub use cursor::{Cursor, DrawOp, Page, PageGeometry, PagedLayout, Placed, TextStyle};
pub use font_metrics::{FontFamily, FontWeight};
pub use style_profile::{
    find_profile, profiles, resolve_profile, Align, ColorRole, StyleProfile, TextRole,
    DEFAULT_STYLE_ID,
};
pub use wrap::{text_width, wrap_text, FontSpec};
