pub mod loader;
pub mod record;

pub use loader::{load_records, load_records_from_path, parse_records};
pub use record::Record;
