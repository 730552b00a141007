pub mod formatter;

pub use formatter::{
    format_json, format_question_sheet, format_record_table, format_tsv, should_use_colors,
};
