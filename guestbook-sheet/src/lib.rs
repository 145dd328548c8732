//! Guest-list file parsing.
//!
//! Turns an uploaded `.xlsx`, `.xls`, or `.csv` file into candidate guests:
//! decode the file into a raw table, resolve which columns hold the name,
//! phone, and guest count, clean every row, and validate the result. Parse
//! failures come back as messages in a [`ParseOutcome`], never as panics or
//! errors past this crate's boundary.

pub mod columns;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod preview;
pub mod reader;
pub mod template;
pub mod validate;

pub use columns::{resolve_columns, score_header, synonyms};
pub use error::{SheetError, TemplateError};
pub use normalize::{GuestCount, clean_guest_count, clean_name, clean_phone, normalize_row};
pub use parser::{ParseOutcome, parse_guest_file, parse_guest_path, process_table};
pub use preview::{Preview, PreviewSummary, preview};
pub use reader::{FileFormat, detect_format, read_table};
pub use template::{TEMPLATE_HEADERS, csv_template, xlsx_template};
pub use validate::{has_valid_name, name_error, validate_candidate};
