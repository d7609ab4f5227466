pub mod config;
pub mod create;
pub mod language;
pub mod locales;

pub use self::config::show_config;
pub use self::create::create_project;
pub use self::language::{list_languages, set_language};
pub use self::locales::show_locales;
