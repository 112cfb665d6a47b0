use crate::paths::SystemPaths;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use std::{
    io::{Read, Write},
    path::PathBuf,
    sync::LazyLock,
};

/// Config location
pub static ENVIRONMENT_LOCATION: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from("/userdata/system/ignition.ron"));

#[serde_inline_default]
#[derive(Serialize, Deserialize, Debug, Default)]
/// Settings the shell must obey regardless of which emulator is launched
pub struct Environment {
    #[serde(default)]
    /// Directory layout handed to generators
    pub paths: SystemPaths,
    #[serde_inline_default(PathBuf::from("/userdata/system/ignition.log"))]
    /// Location where logs will be written
    pub log_location: PathBuf,
}

impl Environment {
    pub fn save(&self, writer: impl Write) -> Result<(), ron::Error> {
        ron::Options::default().to_io_writer_pretty(
            writer,
            self,
            PrettyConfig::new().struct_names(false),
        )
    }

    pub fn load(reader: impl Read) -> Result<Self, ron::Error> {
        Ok(ron::de::from_reader(reader)?)
    }
}
