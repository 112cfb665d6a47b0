use ignition_input::{HotkeyAction, HotkeysContext, generate_sdl_game_controller_config};
use ignition_runtime::{
    Command, CommandArg, GenerationContext, Generator, GeneratorError, buildargs::parse_args,
    ini::MergeIni,
};
use std::{fs, path::Path};

#[derive(Debug, Default)]
/// Adapter for eduke32 and Ion Fury, which share a binary family
pub struct Eduke32;

impl Generator for Eduke32 {
    fn generate(&self, ctx: &GenerationContext) -> Result<Command, GeneratorError> {
        // Core is either eduke32 or fury
        let core = ctx
            .system
            .get_str("core")
            .unwrap_or_else(|| "eduke32".to_string());

        let config_dir = ctx.paths.configs.join(&core);
        let saves_dir = ctx.paths.saves.join(&core);
        let config_file = config_dir.join(format!("{core}.cfg"));
        // Console commands that run every time the game starts
        let script_file = config_dir.join("autoexec.cfg");

        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&saves_dir)?;

        if !config_file.exists() {
            fs::File::create(&config_file)?;
        }

        // In eduke32 configs, booleans must be integers
        let mut config = MergeIni::read_from(&config_file)?;
        config.set("Screen Setup", "ScreenWidth", ctx.resolution.width);
        config.set("Screen Setup", "ScreenHeight", ctx.resolution.height);
        // The game should always be fullscreen
        config.set("Screen Setup", "ScreenMode", 1);
        config.write_to(&config_file)?;

        // The script file is regenerated whole, never merged
        fs::write(
            &script_file,
            format!(
                "// This file is automatically generated by the eduke32 generator\n\
                 bind \"F12\" \"screenshot\"\n\
                 screenshot_dir \"{}\"\n\
                 r_showfps \"{}\"\n\
                 echo IGNITION\n",
                ctx.paths.screenshots.to_string_lossy(),
                if ctx.system.get_bool("showFPS") { 1 } else { 0 },
            ),
        )?;

        let mut launch_args = vec![
            CommandArg::from(core.clone()),
            CommandArg::from("-cfg"),
            CommandArg::from(config_file),
            CommandArg::from(if ctx.system.get_bool("nologo") {
                "-nologo"
            } else {
                ""
            }),
        ];

        if core == "fury" {
            // Fury loads a game group file, not a raw rom argument
            launch_args.extend([
                CommandArg::from("-gamegrp"),
                CommandArg::from(
                    ctx.rom
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                ),
                CommandArg::from("-j"),
                CommandArg::from(ctx.rom.parent().unwrap_or(Path::new("")).to_path_buf()),
            ]);
        } else {
            launch_args = parse_args(&launch_args, ctx.rom)
                .map_err(|error| GeneratorError::InvalidLaunchArgs(error.to_string()))?;
        }

        Ok(Command::new(launch_args).with_env(
            "SDL_GAMECONTROLLERCONFIG",
            generate_sdl_game_controller_config(ctx.controllers),
        ))
    }

    fn hotkeys_context(&self) -> HotkeysContext {
        HotkeysContext {
            name: "eduke32",
            keys: [
                (HotkeyAction::Exit, vec!["KEY_LEFTALT", "KEY_F4"]),
                (HotkeyAction::Menu, vec!["KEY_ESC"]),
                (HotkeyAction::Pause, vec!["KEY_ESC"]),
                (HotkeyAction::SaveState, vec!["KEY_F8"]),
                (HotkeyAction::RestoreState, vec!["KEY_F9"]),
            ]
            .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignition_config::{Resolution, SystemConfig, paths::SystemPaths};
    use std::collections::BTreeMap;

    struct Fixture {
        _dir: tempfile::TempDir,
        paths: SystemPaths,
        system: SystemConfig,
        rom: std::path::PathBuf,
        metadata: BTreeMap<String, String>,
    }

    impl Fixture {
        fn new(system: SystemConfig) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let paths = SystemPaths::rooted_at(dir.path());

            Self {
                paths,
                system,
                rom: dir.path().join("roms/eduke32/duke3d.zip"),
                metadata: BTreeMap::new(),
                _dir: dir,
            }
        }

        fn generate(&self, resolution: Resolution) -> Result<Command, GeneratorError> {
            Eduke32.generate(&GenerationContext {
                system: &self.system,
                rom: &self.rom,
                controllers: &[],
                metadata: &self.metadata,
                guns: &[],
                wheels: &[],
                resolution,
                paths: &self.paths,
            })
        }

        fn config_file(&self, core: &str) -> std::path::PathBuf {
            self.paths.configs.join(core).join(format!("{core}.cfg"))
        }
    }

    #[test]
    fn screen_setup_is_upserted_and_fullscreen_forced() {
        let fixture = Fixture::new(SystemConfig::default());
        fixture
            .generate(Resolution {
                width: 1920,
                height: 1080,
            })
            .unwrap();

        let config = fs::read_to_string(fixture.config_file("eduke32")).unwrap();
        assert!(config.contains("ScreenWidth=1920\n"));
        assert!(config.contains("ScreenHeight=1080\n"));
        assert!(config.contains("ScreenMode=1\n"));
    }

    #[test]
    fn unrelated_config_content_is_preserved() {
        let fixture = Fixture::new(SystemConfig::default());
        let config_file = fixture.config_file("eduke32");
        fs::create_dir_all(config_file.parent().unwrap()).unwrap();
        fs::write(
            &config_file,
            "; hand edited\n[Screen Setup]\nScreenMode=0\nPolymer=1\n\n[Sound Setup]\nMusicVolume=128\n",
        )
        .unwrap();

        fixture
            .generate(Resolution {
                width: 800,
                height: 600,
            })
            .unwrap();

        let config = fs::read_to_string(&config_file).unwrap();
        assert!(config.contains("; hand edited\n"));
        assert!(config.contains("Polymer=1\n"));
        assert!(config.contains("[Sound Setup]\nMusicVolume=128\n"));
        // Forced regardless of the prior value
        assert!(config.contains("ScreenMode=1\n"));
        assert!(!config.contains("ScreenMode=0"));
    }

    #[test]
    fn regenerating_overwrites_rather_than_accumulates() {
        let fixture = Fixture::new(SystemConfig::default());
        fixture
            .generate(Resolution {
                width: 640,
                height: 480,
            })
            .unwrap();
        fixture
            .generate(Resolution {
                width: 1920,
                height: 1080,
            })
            .unwrap();

        let config = fs::read_to_string(fixture.config_file("eduke32")).unwrap();
        assert_eq!(config.matches("ScreenWidth").count(), 1);
        assert!(config.contains("ScreenWidth=1920\n"));
        assert!(!config.contains("640"));
    }

    #[test]
    fn autoexec_is_fully_regenerated() {
        let fixture = Fixture::new(SystemConfig::from_iter([("showFPS", true)]));
        let script_file = fixture.paths.configs.join("eduke32/autoexec.cfg");
        fs::create_dir_all(script_file.parent().unwrap()).unwrap();
        fs::write(&script_file, "stale content\n").unwrap();

        fixture
            .generate(Resolution {
                width: 1280,
                height: 720,
            })
            .unwrap();

        let script = fs::read_to_string(&script_file).unwrap();
        assert!(!script.contains("stale content"));
        assert!(script.contains("bind \"F12\" \"screenshot\"\n"));
        assert!(script.contains(&format!(
            "screenshot_dir \"{}\"\n",
            fixture.paths.screenshots.to_string_lossy()
        )));
        assert!(script.contains("r_showfps \"1\"\n"));
        assert!(script.ends_with("echo IGNITION\n"));
    }

    #[test]
    fn default_core_appends_the_rom_and_drops_the_empty_token() {
        let fixture = Fixture::new(SystemConfig::default());
        let command = fixture
            .generate(Resolution {
                width: 1920,
                height: 1080,
            })
            .unwrap();

        let args = command.rendered_args();
        assert_eq!(args[0], "eduke32");
        assert_eq!(args[1], "-cfg");
        assert_eq!(args.last().unwrap(), fixture.rom.to_str().unwrap());
        assert!(!args.contains(&String::new()));
        assert!(!args.contains(&"-nologo".to_string()));
    }

    #[test]
    fn nologo_option_adds_the_flag() {
        let fixture = Fixture::new(SystemConfig::from_iter([("nologo", true)]));
        let command = fixture
            .generate(Resolution {
                width: 1920,
                height: 1080,
            })
            .unwrap();

        assert!(command.rendered_args().contains(&"-nologo".to_string()));
    }

    #[test]
    fn fury_gets_gamegrp_and_search_path_instead_of_the_rom() {
        let fixture = Fixture::new(SystemConfig::from_iter([("core", "fury")]));
        let command = fixture
            .generate(Resolution {
                width: 1920,
                height: 1080,
            })
            .unwrap();

        let args = command.rendered_args();
        assert_eq!(args[0], "fury");
        let gamegrp = args.iter().position(|a| a == "-gamegrp").unwrap();
        assert_eq!(args[gamegrp + 1], "duke3d.zip");
        let j = args.iter().position(|a| a == "-j").unwrap();
        assert_eq!(
            args[j + 1],
            fixture.rom.parent().unwrap().to_str().unwrap()
        );
        // The rom itself is never appended on the fury path
        assert_ne!(args.last().unwrap(), fixture.rom.to_str().unwrap());
    }

    #[test]
    fn control_characters_in_the_rom_path_fail_validation() {
        let mut fixture = Fixture::new(SystemConfig::default());
        fixture.rom = fixture._dir.path().join("bad\nrom.zip");

        let error = fixture
            .generate(Resolution {
                width: 1920,
                height: 1080,
            })
            .unwrap_err();

        assert!(matches!(error, GeneratorError::InvalidLaunchArgs(_)));
    }

    #[test]
    fn hotkeys_are_static() {
        assert_eq!(Eduke32.hotkeys_context(), Eduke32.hotkeys_context());
        assert_eq!(Eduke32.hotkeys_context().name, "eduke32");
        assert_eq!(
            Eduke32.hotkeys_context().keys[&HotkeyAction::SaveState],
            vec!["KEY_F8"]
        );
    }
}
