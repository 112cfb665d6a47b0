use std::{
    borrow::Cow,
    collections::BTreeMap,
    fmt::Display,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One launch argument token
///
/// Paths stay typed until launch so generators can build them with path
/// operations, rendering is lossy only for non utf-8 filenames
pub enum CommandArg {
    Literal(Cow<'static, str>),
    Path(PathBuf),
}

impl Display for CommandArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandArg::Literal(token) => write!(f, "{token}"),
            CommandArg::Path(path) => write!(f, "{}", path.to_string_lossy()),
        }
    }
}

impl From<&'static str> for CommandArg {
    fn from(token: &'static str) -> Self {
        CommandArg::Literal(Cow::Borrowed(token))
    }
}

impl From<String> for CommandArg {
    fn from(token: String) -> Self {
        CommandArg::Literal(Cow::Owned(token))
    }
}

impl From<PathBuf> for CommandArg {
    fn from(path: PathBuf) -> Self {
        CommandArg::Path(path)
    }
}

impl From<&Path> for CommandArg {
    fn from(path: &Path) -> Self {
        CommandArg::Path(path.to_path_buf())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// What the process launcher gets back from a generator
///
/// Argument order is significant and emulator specific, env order is not
pub struct Command {
    pub args: Vec<CommandArg>,
    pub env: BTreeMap<String, String>,
}

impl Command {
    pub fn new(args: impl IntoIterator<Item = CommandArg>) -> Self {
        Self {
            args: args.into_iter().collect(),
            env: BTreeMap::new(),
        }
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Argument tokens rendered to plain strings for spawning or display
    pub fn rendered_args(&self) -> Vec<String> {
        self.args.iter().map(ToString::to_string).collect()
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered_args().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_render_to_their_string_form() {
        let command = Command::new([
            CommandArg::from("melonDS"),
            CommandArg::from(PathBuf::from("/userdata/roms/nds/game.nds")),
        ]);

        assert_eq!(
            command.rendered_args(),
            vec!["melonDS", "/userdata/roms/nds/game.nds"]
        );
    }

    #[test]
    fn env_is_a_plain_map() {
        let command = Command::new([]).with_env("QT_QPA_PLATFORM", "xcb");

        assert_eq!(command.env["QT_QPA_PLATFORM"], "xcb");
    }
}
