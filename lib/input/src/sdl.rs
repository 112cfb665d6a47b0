use crate::controller::{Controller, InputDescriptor, InputKind, InputName};
use itertools::Itertools;

/// Translate one assigned controller roster into the single string SDL
/// expects in `SDL_GAMECONTROLLERCONFIG`, one mapping line per pad
pub fn generate_sdl_game_controller_config(controllers: &[Controller]) -> String {
    controllers.iter().map(controller_mapping_line).join("\n")
}

fn controller_mapping_line(controller: &Controller) -> String {
    let mut line = format!("{},{},", controller.guid, controller.name);

    for (name, descriptor) in &controller.inputs {
        let Some(field) = sdl_field(*name) else {
            continue;
        };
        let Some(binding) = sdl_binding(descriptor) else {
            continue;
        };

        line.push_str(field);
        line.push(':');
        line.push_str(&binding);
        line.push(',');
    }

    line.push_str("platform:Linux,");
    line
}

fn sdl_field(name: InputName) -> Option<&'static str> {
    Some(match name {
        InputName::A => "a",
        InputName::B => "b",
        InputName::X => "x",
        InputName::Y => "y",
        InputName::Select => "back",
        InputName::Start => "start",
        InputName::Hotkey => "guide",
        InputName::Up => "dpup",
        InputName::Down => "dpdown",
        InputName::Left => "dpleft",
        InputName::Right => "dpright",
        InputName::PageUp => "leftshoulder",
        InputName::PageDown => "rightshoulder",
        InputName::L2 => "lefttrigger",
        InputName::R2 => "righttrigger",
        InputName::L3 => "leftstick",
        InputName::R3 => "rightstick",
        InputName::Joystick1Left => "leftx",
        InputName::Joystick1Up => "lefty",
        InputName::Joystick2Left => "rightx",
        InputName::Joystick2Up => "righty",
    })
}

fn sdl_binding(descriptor: &InputDescriptor) -> Option<String> {
    match descriptor.kind {
        InputKind::Button => Some(format!("b{}", descriptor.id)),
        InputKind::Axis => Some(format!("a{}", descriptor.id)),
        InputKind::Hat => Some(format!("h{}.{}", descriptor.id, descriptor.value)),
        // Keyboard bindings have no place in a pad mapping
        InputKind::Key => None,
    }
}
