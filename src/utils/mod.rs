pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{HISTORY_ENV, default_history_path, get_home_dir, resolve_history_path};
pub use paths::{shorten_home, validate_file_size};
pub use terminal::strip_ansi_codes;
