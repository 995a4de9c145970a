pub mod source_loader;

pub use source_loader::{load_json_dir, load_json_dir_values, load_json_file, load_sources};
