pub mod environment;
pub mod paths;
pub mod resolution;
pub mod system;

pub use environment::Environment;
pub use paths::SystemPaths;
pub use resolution::Resolution;
pub use system::{SettingValue, SystemConfig};
