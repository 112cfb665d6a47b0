pub mod buildargs;
pub mod command;
pub mod generator;
pub mod ini;
pub mod registry;

pub use command::{Command, CommandArg};
pub use generator::{GenerationContext, Generator, GeneratorError};
pub use registry::{EmulatorId, GeneratorRegistry};
