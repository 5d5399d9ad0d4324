// Gateway module for app - follows the Train Station Pattern
// All external access must go through this gateway

mod config;

pub use config::{
    get_config_dir, init_config, load_config, load_config_file, save_config, Config,
    DirectoryConfig, GazetteerConfig, KeywordConfig,
};
