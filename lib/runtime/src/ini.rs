use std::{fs, io, path::Path};

/// Byte order mark for config formats that demand utf-8 with BOM
pub const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    /// The header line verbatim, so odd spacing survives a rewrite
    header: String,
    name: String,
    lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The merge-preserving config file strategy
///
/// Reads an existing INI-style file, upserts the keys a generator manages and
/// writes the whole thing back. Every unmanaged line, comments and unknown
/// sections included, survives byte for byte. Keys are case-sensitive and
/// values are never interpolated.
///
/// Full-regenerate formats do not go through this type, the two strategies
/// are intentionally distinct.
pub struct MergeIni {
    preamble: Vec<String>,
    sections: Vec<Section>,
}

impl MergeIni {
    pub fn parse(text: &str) -> Self {
        let mut file = Self::default();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
                file.sections.push(Section {
                    header: line.to_string(),
                    name: trimmed[1..trimmed.len() - 1].to_string(),
                    lines: Vec::new(),
                });
            } else if let Some(section) = file.sections.last_mut() {
                section.lines.push(line.to_string());
            } else {
                file.preamble.push(line.to_string());
            }
        }

        file
    }

    pub fn read_from(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }

    /// Replace the first `key=value` line for this key or append one,
    /// creating the section at the end of the file when absent
    pub fn set(&mut self, section: &str, key: &str, value: impl std::fmt::Display) {
        let replacement = format!("{key}={value}");

        let section = match self.sections.iter_mut().find(|s| s.name == section) {
            Some(section) => section,
            None => {
                self.sections.push(Section {
                    header: format!("[{section}]"),
                    name: section.to_string(),
                    lines: Vec::new(),
                });
                self.sections.last_mut().unwrap()
            }
        };

        for line in section.lines.iter_mut() {
            let trimmed = line.trim_start();
            if trimmed.starts_with(';') || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }
            if let Some((candidate, _)) = line.split_once('=')
                && candidate.trim() == key
            {
                *line = replacement;
                return;
            }
        }

        // Keep appended keys ahead of any trailing blank lines
        let position = section
            .lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map(|index| index + 1)
            .unwrap_or(0);
        section.lines.insert(position, replacement);
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .lines
            .iter()
            .find_map(|line| {
                let (candidate, value) = line.split_once('=')?;
                (candidate.trim() == key).then(|| value.trim())
            })
    }

    pub fn render(&self) -> String {
        let mut rendered = String::new();

        for line in &self.preamble {
            rendered.push_str(line);
            rendered.push('\n');
        }
        for section in &self.sections {
            rendered.push_str(&section.header);
            rendered.push('\n');
            for line in &section.lines {
                rendered.push_str(line);
                rendered.push('\n');
            }
        }

        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXISTING: &str = "\
; eduke32 config
[Screen Setup]
ScreenWidth=640
Polymer=0

[Sound Setup]
MusicVolume=128
";

    #[test]
    fn unmanaged_content_survives_byte_for_byte() {
        let mut file = MergeIni::parse(EXISTING);
        file.set("Screen Setup", "ScreenWidth", 1920);
        file.set("Screen Setup", "ScreenHeight", 1080);
        file.set("Screen Setup", "ScreenMode", 1);

        let rendered = file.render();

        assert!(rendered.starts_with("; eduke32 config\n"));
        assert!(rendered.contains("Polymer=0\n"));
        assert!(rendered.contains("[Sound Setup]\nMusicVolume=128\n"));
    }

    #[test]
    fn upsert_replaces_in_place_and_appends_missing_keys() {
        let mut file = MergeIni::parse(EXISTING);
        file.set("Screen Setup", "ScreenWidth", 1920);
        file.set("Screen Setup", "ScreenHeight", 1080);

        assert_eq!(file.get("Screen Setup", "ScreenWidth"), Some("1920"));
        assert_eq!(file.get("Screen Setup", "ScreenHeight"), Some("1080"));
        // Replaced, not duplicated
        assert_eq!(file.render().matches("ScreenWidth").count(), 1);
    }

    #[test]
    fn missing_section_is_created_at_the_end() {
        let mut file = MergeIni::parse("");
        file.set("Screen Setup", "ScreenMode", 1);

        assert_eq!(file.render(), "[Screen Setup]\nScreenMode=1\n");
    }

    #[test]
    fn spaced_keys_from_other_writers_still_match() {
        let mut file = MergeIni::parse("[Screen Setup]\nScreenWidth = 640\n");
        file.set("Screen Setup", "ScreenWidth", 1920);

        assert_eq!(file.get("Screen Setup", "ScreenWidth"), Some("1920"));
        assert_eq!(file.render().matches("ScreenWidth").count(), 1);
    }

    #[test]
    fn commented_out_keys_are_not_touched() {
        let mut file = MergeIni::parse("[Screen Setup]\n; ScreenMode=0\n");
        file.set("Screen Setup", "ScreenMode", 1);

        let rendered = file.render();
        assert!(rendered.contains("; ScreenMode=0\n"));
        assert!(rendered.contains("\nScreenMode=1\n"));
    }

    #[test]
    fn round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eduke32.cfg");
        std::fs::write(&path, EXISTING).unwrap();

        let mut file = MergeIni::read_from(&path).unwrap();
        file.set("Screen Setup", "ScreenMode", 1);
        file.write_to(&path).unwrap();

        let reread = MergeIni::read_from(&path).unwrap();
        assert_eq!(reread.get("Screen Setup", "ScreenMode"), Some("1"));
        assert_eq!(reread.get("Sound Setup", "MusicVolume"), Some("128"));
    }
}
