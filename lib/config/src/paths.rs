use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use std::path::PathBuf;

#[serde_inline_default]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Directory layout every generator writes inside of
///
/// Injected per generate call instead of living as module globals so tests
/// can root the whole tree somewhere disposable
pub struct SystemPaths {
    #[serde_inline_default(PathBuf::from("/userdata/system/configs"))]
    /// Emulator configuration files, one subdirectory per emulator
    pub configs: PathBuf,
    #[serde_inline_default(PathBuf::from("/userdata/saves"))]
    /// Save files and savestates
    pub saves: PathBuf,
    #[serde_inline_default(PathBuf::from("/userdata/bios"))]
    /// Firmware and bios images
    pub bios: PathBuf,
    #[serde_inline_default(PathBuf::from("/userdata/cheats"))]
    /// Cheat databases
    pub cheats: PathBuf,
    #[serde_inline_default(PathBuf::from("/userdata/roms"))]
    /// Rom store, one subdirectory per system
    pub roms: PathBuf,
    #[serde_inline_default(PathBuf::from("/userdata/screenshots"))]
    /// Where emulators are told to drop screenshots
    pub screenshots: PathBuf,
}

impl Default for SystemPaths {
    fn default() -> Self {
        Self {
            configs: PathBuf::from("/userdata/system/configs"),
            saves: PathBuf::from("/userdata/saves"),
            bios: PathBuf::from("/userdata/bios"),
            cheats: PathBuf::from("/userdata/cheats"),
            roms: PathBuf::from("/userdata/roms"),
            screenshots: PathBuf::from("/userdata/screenshots"),
        }
    }
}

impl SystemPaths {
    /// Root every directory under the given base, for tests and portable installs
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base = base.into();

        Self {
            configs: base.join("system/configs"),
            saves: base.join("saves"),
            bios: base.join("bios"),
            cheats: base.join("cheats"),
            roms: base.join("roms"),
            screenshots: base.join("screenshots"),
        }
    }
}
