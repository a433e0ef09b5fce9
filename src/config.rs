//! Configuration file parsing and validation

pub mod doccheck_toml;

pub use doccheck_toml::{
    CONFIG_VERSION, ColorOption, Config, DocCheckMeta, OutputConfig, OutputFormat,
};
