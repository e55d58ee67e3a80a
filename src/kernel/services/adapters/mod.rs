//! Service adapters: OS specific implementations (filesystem paths, settings IO).

pub mod settings;

pub use settings::{
    ensure_log_dir, get_log_dir, get_settings_path, load_settings, load_settings_from,
};
