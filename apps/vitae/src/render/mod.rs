// Output backends for a finalized PagedLayout. Only PDF today.

pub mod pdf;

pub use pdf::{encode_win_ansi, render_pdf, DocumentInfo};
