use crate::command::CommandArg;
use std::path::Path;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Reasons an accumulated argument list cannot be handed to a process
pub enum BuildArgsError {
    #[error("argument contains control characters: {0:?}")]
    ControlCharacter(String),
    #[error("rom path is not valid utf-8: {0}")]
    NonUtf8Rom(String),
}

/// Validate accumulated launch arguments and append the rom as the final one
///
/// Empty literal tokens are dropped rather than passed to the child process,
/// generators push them when an optional flag is off
pub fn parse_args(args: &[CommandArg], rom: &Path) -> Result<Vec<CommandArg>, BuildArgsError> {
    let mut parsed = Vec::with_capacity(args.len() + 1);

    for arg in args {
        if let CommandArg::Literal(token) = arg
            && token.is_empty()
        {
            continue;
        }

        let rendered = arg.to_string();
        if rendered.chars().any(char::is_control) {
            return Err(BuildArgsError::ControlCharacter(rendered));
        }

        parsed.push(arg.clone());
    }

    if rom.to_str().is_none() {
        return Err(BuildArgsError::NonUtf8Rom(
            rom.to_string_lossy().into_owned(),
        ));
    }
    let rendered = rom.to_string_lossy();
    if rendered.chars().any(char::is_control) {
        return Err(BuildArgsError::ControlCharacter(rendered.into_owned()));
    }

    parsed.push(CommandArg::from(rom));
    Ok(parsed)
}
