mod filesystem;
mod loader;
mod model;
mod validation;

#[cfg(test)]
pub(crate) mod mock_fs;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    Config, DEFAULT_EXTENSIONS, DEFAULT_FORMATTER_COMMAND, DEFAULT_STYLE, FormatterConfig,
    ScannerConfig, WhitelistConfig,
};
pub use validation::validate_config_semantics;
