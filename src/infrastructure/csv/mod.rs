// ============================================================
// CSV INFRASTRUCTURE
// ============================================================
// File loading, lenient parsing, and column type inference

pub mod loader;
pub mod table_parser;
pub mod type_inference;

pub use loader::{decode_text, load_dataset_text};
pub use table_parser::TableParser;
pub use type_inference::{infer_column_type, is_date_value, parse_numeric};
