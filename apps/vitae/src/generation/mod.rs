// Document assembly: CV + style identifier -> paged layout -> PDF bytes.
// One synchronous pass per call; nothing is shared between calls except the
// read-only style profile table.

pub mod assembler;
pub mod output;

pub use assembler::{generate, generate_blob, layout_document, GeneratedDocument};
pub use output::{file_name, save_to_dir};
