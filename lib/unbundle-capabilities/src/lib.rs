mod config;
mod error;
mod extract;
mod instructions;
mod materialize;
mod os;
mod paths;
mod read_table;
mod structs;
mod workspace;

pub use config::{ConfigFile, Settings, read_env_file, retrieve_from_env, DEFAULT_CONFIG_FILE, DEFAULT_INPUT};
pub use error::{ExtractError, Result};
pub use extract::extract;
pub use instructions::Instructions;
pub use materialize::{materialize, materialize_all};
pub use os::{create_directory, ensure_parent_dir, write_file};
pub use paths::{check_destination, resolve};
pub use read_table::{parse_table, read_table, REQUIRED_COLUMNS};
pub use structs::{ExtractReport, PathPolicy, Record};
pub use workspace::init_workspace;
