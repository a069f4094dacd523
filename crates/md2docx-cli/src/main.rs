use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use md2docx_config::Config;
use md2docx_engine::{ConvertOptions, Platform, ProgressSink, convert_file};

#[derive(Parser)]
#[command(name = "md2docx", version, about = "Convert Markdown files to Word documents")]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// Output .docx path; defaults to the input path with a .docx extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip embedding images
    #[arg(long)]
    no_images: bool,

    /// Font profile; defaults to the host platform
    #[arg(long, value_enum)]
    platform: Option<PlatformArg>,

    /// Suppress the progress log
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlatformArg {
    Windows,
    Macos,
    Linux,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Macos => Platform::MacOs,
            PlatformArg::Linux => Platform::Linux,
        }
    }
}

/// Prints milestones and log lines to the terminal.
struct ConsoleSink {
    quiet: bool,
}

impl ProgressSink for ConsoleSink {
    fn on_progress(&mut self, percent: u8) {
        if !self.quiet {
            eprintln!("[{percent:>3}%]");
        }
    }

    fn on_status(&mut self, message: &str) {
        if !self.quiet {
            eprintln!("status: {message}");
        }
    }

    fn on_log(&mut self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("input file does not exist: {}", cli.input.display());
    }

    let config = Config::load()
        .context("failed to load config")?
        .unwrap_or_default();

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&cli.input, config.output_dir.as_deref()));

    let platform = cli
        .platform
        .map(Platform::from)
        .or_else(|| platform_from_config(&config))
        .unwrap_or_else(host_platform);

    let options = ConvertOptions {
        platform,
        process_images: !cli.no_images && config.process_images,
    };

    let mut sink = ConsoleSink { quiet: cli.quiet };
    convert_file(&cli.input, &output, &options, &mut sink)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    println!("{}", output.display());
    Ok(())
}

/// `foo.md` converts to `foo.docx` next to the source, or inside the
/// configured output directory when one is set.
fn derive_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let mut name = input.to_path_buf();
    name.set_extension("docx");
    match (output_dir, name.file_name()) {
        (Some(dir), Some(file)) => dir.join(file),
        _ => name,
    }
}

fn platform_from_config(config: &Config) -> Option<Platform> {
    match config.platform.as_deref() {
        Some("windows") => Some(Platform::Windows),
        Some("macos") => Some(Platform::MacOs),
        Some("linux") => Some(Platform::Linux),
        _ => None,
    }
}

fn host_platform() -> Platform {
    if cfg!(windows) {
        Platform::Windows
    } else if cfg!(target_os = "macos") {
        Platform::MacOs
    } else {
        Platform::Linux
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_swaps_extension() {
        let out = derive_output_path(Path::new("notes/report.md"), None);
        assert_eq!(out, PathBuf::from("notes/report.docx"));
    }

    #[test]
    fn output_dir_overrides_location() {
        let out = derive_output_path(Path::new("notes/report.md"), Some(Path::new("/tmp/out")));
        assert_eq!(out, PathBuf::from("/tmp/out/report.docx"));
    }

    #[test]
    fn platform_strings_map_to_profiles() {
        let config = Config {
            platform: Some("macos".to_string()),
            ..Config::default()
        };
        assert_eq!(platform_from_config(&config), Some(Platform::MacOs));

        let unknown = Config {
            platform: Some("beos".to_string()),
            ..Config::default()
        };
        assert_eq!(platform_from_config(&unknown), None);
    }
}
