pub mod controller;
pub mod hotkey;
pub mod sdl;

pub use controller::{Controller, InputDescriptor, InputKind, InputName};
pub use hotkey::{HotkeyAction, HotkeysContext};
pub use sdl::generate_sdl_game_controller_config;
