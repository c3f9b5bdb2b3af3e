//! Subcommand implementations

use crate::summary::{StorySummary, TopologySummary};
use anyhow::Context;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use storygen_parser::parse_story;
use storygen_render::{generate_test_package, RenderConfig};

const STDIN_PATH: &str = "-";

/// Read story text from a file, or stdin for `-`
///
/// # Errors
/// If the source cannot be read
pub fn read_story(path: &Path) -> anyhow::Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read story from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read story {}", path.display()))
}

/// Print the parsed story
///
/// # Errors
/// If the story does not parse or output fails
pub fn parse(text: &str, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let story = parse_story(text).context("failed to parse story")?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &story)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", StorySummary(&story))?;
    }
    Ok(())
}

/// Print the story's service topology
///
/// # Errors
/// If the story does not parse or output fails
pub fn topology(text: &str, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let story = parse_story(text).context("failed to parse story")?;
    let topology = story.topology();
    if json {
        serde_json::to_writer_pretty(&mut *out, &topology)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", TopologySummary(&topology))?;
    }
    Ok(())
}

/// Options for `generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Overrides the configured step package
    pub package: Option<String>,
    /// TOML render configuration
    pub config: Option<PathBuf>,
    /// Directory to write artifacts under
    pub out_dir: Option<PathBuf>,
}

impl GenerateOptions {
    fn render_config(&self) -> anyhow::Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RenderConfig::default(),
        };
        if let Some(package) = &self.package {
            config = config.with_package_name(package.as_str());
        }
        config.validate()?;
        Ok(config)
    }
}

/// Files written by `generate`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Written {
    /// Feature file, if written
    pub feature_file: Option<PathBuf>,
    /// Step class source, if written
    pub step_definitions: Option<PathBuf>,
}

impl Written {
    /// Every written path
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.feature_file.iter().chain(self.step_definitions.iter())
    }
}

/// Render both artifacts to stdout or under `out_dir`
///
/// On stdout each artifact is preceded by a `==> <path> <==` line.
///
/// # Errors
/// If the config or story is invalid, or writing fails
pub fn generate(
    text: &str,
    options: &GenerateOptions,
    out: &mut dyn Write,
) -> anyhow::Result<Written> {
    let config = options.render_config()?;
    let story = parse_story(text).context("failed to parse story")?;
    let package = generate_test_package(&story, &config);

    let feature_path = PathBuf::from(package.feature_file_name());
    let steps_path = package.step_file_path();

    let Some(dir) = &options.out_dir else {
        writeln!(out, "==> {} <==", feature_path.display())?;
        write!(out, "{}", package.feature_file())?;
        writeln!(out, "==> {} <==", steps_path.display())?;
        write!(out, "{}", package.step_definitions())?;
        return Ok(Written::default());
    };

    let feature_file = dir.join(feature_path);
    let step_definitions = dir.join(steps_path);
    write_file(&feature_file, package.feature_file())?;
    write_file(&step_definitions, package.step_definitions())?;

    Ok(Written {
        feature_file: Some(feature_file),
        step_definitions: Some(step_definitions),
    })
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
