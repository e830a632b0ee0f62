pub mod config_helper;
pub mod id_generator;
pub mod prompt_generator;
