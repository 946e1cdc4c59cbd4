//! CV/résumé layout engine: turns a structured CV into a paginated,
//! print-ready PDF in one of several fixed visual styles.
//!
//! Synchronous and deterministic: the same CV and style identifier always
//! produce byte-identical output.

pub mod errors;
pub mod generation;
pub mod layout;
pub mod models;
pub mod render;
pub mod sections;

pub use errors::GenerateError;
pub use generation::{file_name, generate, generate_blob, save_to_dir, GeneratedDocument};
pub use layout::{profiles, resolve_profile, StyleProfile, DEFAULT_STYLE_ID};
pub use models::Cv;
