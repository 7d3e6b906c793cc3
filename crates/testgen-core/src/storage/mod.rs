//! Saving generated scripts to disk.

mod writer;

pub use writer::{
    DEFAULT_EXTENSION, FILE_PREFIX, TIMESTAMP_FORMAT, output_file_name, output_path,
    write_script, write_script_at,
};
