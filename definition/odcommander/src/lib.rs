use ignition_input::{HotkeysContext, generate_sdl_game_controller_config};
use ignition_runtime::{Command, CommandArg, GenerationContext, Generator, GeneratorError};

#[derive(Debug, Default)]
/// Adapter for the OpenDingux file commander, which needs no configuration
/// at all and marks the floor of the generator contract
pub struct Odcommander;

impl Generator for Odcommander {
    fn generate(&self, ctx: &GenerationContext) -> Result<Command, GeneratorError> {
        Ok(Command::new([CommandArg::from("od-commander")]).with_env(
            "SDL_GAMECONTROLLERCONFIG",
            generate_sdl_game_controller_config(ctx.controllers),
        ))
    }

    fn hotkeys_context(&self) -> HotkeysContext {
        HotkeysContext::with_exit_only("odcommander")
    }
}
