use ignition_input::{HotkeysContext, InputName};
use ignition_runtime::{
    Command, CommandArg, GenerationContext, Generator, GeneratorError, ini::UTF8_BOM,
};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
};

/// Logical input to melonDS key name, in the order the file lists them
const MELONDS_MAPPING: [(InputName, &str); 12] = [
    (InputName::A, "Joy_A"),
    (InputName::B, "Joy_B"),
    (InputName::Select, "Joy_Select"),
    (InputName::Start, "Joy_Start"),
    (InputName::Right, "Joy_Right"),
    (InputName::Left, "Joy_Left"),
    (InputName::Up, "Joy_Up"),
    (InputName::Down, "Joy_Down"),
    (InputName::PageDown, "Joy_R"),
    (InputName::PageUp, "Joy_L"),
    (InputName::X, "Joy_X"),
    (InputName::Y, "Joy_Y"),
];

/// Option name, ini key and the default written when the option is unset
const USER_OPTIONS: [(&str, &str, &str); 12] = [
    // melonDS only has OpenGL or Software, OpenGL when not selected
    ("melonds_renderer", "3DRenderer", "1"),
    ("melonds_framerate", "LimitFPS", "1"),
    ("melonds_resolution", "GL_ScaleFactor", "1"),
    ("melonds_polygons", "GL_BetterPolygons", "0"),
    ("melonds_rotation", "ScreenRotation", "0"),
    ("melonds_screenswap", "ScreenSwap", "0"),
    ("melonds_layout", "ScreenLayout", "0"),
    ("melonds_screensizing", "ScreenSizing", "0"),
    ("melonds_scaling", "IntegerScaling", "0"),
    ("melonds_cheats", "EnableCheats", "0"),
    ("melonds_osd", "ShowOSD", "1"),
    ("melonds_console", "ConsoleType", "0"),
];

#[derive(Debug, Default)]
/// Adapter for the standalone melonDS build
pub struct MelonDs;

impl Generator for MelonDs {
    fn generate(&self, ctx: &GenerationContext) -> Result<Command, GeneratorError> {
        let saves_dir = ctx.paths.saves.join("melonds");
        let cheats_dir = ctx.paths.cheats.join("melonDS");
        let config_dir = ctx.paths.configs.join("melonDS");

        fs::create_dir_all(&saves_dir)?;
        fs::create_dir_all(&cheats_dir)?;
        fs::create_dir_all(&config_dir)?;

        // The whole file is regenerated on every launch, nothing is merged
        let config_file = config_dir.join("melonDS.ini");
        let mut writer = BufWriter::new(File::create(&config_file)?);
        write!(writer, "{UTF8_BOM}")?;

        writeln!(writer, "WindowWidth={}", ctx.resolution.width)?;
        writeln!(writer, "WindowHeight={}", ctx.resolution.height)?;
        writeln!(writer, "WindowMax=1")?;
        // Hide the mouse after 5 seconds
        writeln!(writer, "MouseHide=1")?;
        writeln!(writer, "MouseHideSeconds=5")?;

        writeln!(writer, "ExternalBIOSEnable=1")?;
        let bios = &ctx.paths.bios;
        writeln!(writer, "BIOS9Path={}", bios.join("bios9.bin").display())?;
        writeln!(writer, "BIOS7Path={}", bios.join("bios7.bin").display())?;
        writeln!(writer, "FirmwarePath={}", bios.join("firmware.bin").display())?;
        writeln!(writer, "DSiBIOS9Path={}", bios.join("dsi_bios9.bin").display())?;
        writeln!(writer, "DSiBIOS7Path={}", bios.join("dsi_bios7.bin").display())?;
        writeln!(
            writer,
            "DSiFirmwarePath={}",
            bios.join("dsi_firmware.bin").display()
        )?;
        writeln!(writer, "DSiNANDPath={}", bios.join("dsi_nand.bin").display())?;

        writeln!(writer, "DLDIFolderPath={}", saves_dir.display())?;
        writeln!(writer, "DSiSDFolderPath={}", saves_dir.display())?;
        writeln!(writer, "MicWavPath={}", saves_dir.display())?;
        writeln!(writer, "SaveFilePath={}", saves_dir.display())?;
        writeln!(writer, "SavestatePath={}", saves_dir.display())?;
        writeln!(writer, "CheatFilePath={}", cheats_dir.display())?;
        writeln!(writer, "LastROMFolder={}", ctx.paths.roms.join("nds").display())?;

        writeln!(writer, "AudioInterp=1")?;
        writeln!(writer, "AudioBitrate=2")?;
        writeln!(writer, "AudioVolume=256")?;
        // For software rendering
        writeln!(writer, "Threaded3D=1")?;

        for (option, key, default) in USER_OPTIONS {
            match ctx.system.get_str(option) {
                Some(value) => writeln!(writer, "{key}={value}")?,
                None => writeln!(writer, "{key}={default}")?,
            }
        }

        let mut controllers: Vec<_> = ctx.controllers.iter().collect();
        controllers.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        for controller in controllers {
            // Only player 1 controls, the standalone build maps one pad
            if controller.player_slot != "1" {
                continue;
            }

            for (name, key) in MELONDS_MAPPING {
                let Some(descriptor) = controller.input(name) else {
                    continue;
                };

                // melonDS wants raw key codes for a d-pad mapped as hat 0,
                // not the joystick hat id itself
                let value = if descriptor.id == "0" {
                    match key {
                        "Joy_Up" => "257".to_string(),
                        "Joy_Down" => "260".to_string(),
                        "Joy_Left" => "264".to_string(),
                        "Joy_Right" => "258".to_string(),
                        _ => descriptor.id.clone(),
                    }
                } else {
                    descriptor.id.clone()
                };

                tracing::debug!("Name: {} - Var: {}", key, value);
                writeln!(writer, "{key}={value}")?;
            }
        }
        // Always the first joystick index
        writeln!(writer, "JoystickID=0")?;

        writer.flush()?;

        Ok(Command::new([
            CommandArg::from("/usr/bin/melonDS"),
            CommandArg::from("-f"),
            CommandArg::from(ctx.rom),
        ])
        .with_env(
            "XDG_CONFIG_HOME",
            ctx.paths.configs.to_string_lossy().into_owned(),
        )
        .with_env(
            "XDG_DATA_HOME",
            ctx.paths.saves.to_string_lossy().into_owned(),
        )
        .with_env("QT_QPA_PLATFORM", "xcb"))
    }

    fn hotkeys_context(&self) -> HotkeysContext {
        HotkeysContext::with_exit_only("melonds")
    }
}
