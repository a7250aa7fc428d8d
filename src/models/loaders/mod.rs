pub mod toml_loader;

pub use toml_loader::{load_session_file, parse_session};
