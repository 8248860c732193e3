//! Command-line renderer: recolors one texture from an asset directory and
//! writes the result as PNG.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use duotone_renderer::{
    Catalog, Color, DirectoryLoader, Mode, RecolorEngine, RecolorState, now_millis,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Solid,
    Patterned,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Solid => Self::Solid,
            ModeArg::Patterned => Self::Patterned,
        }
    }
}

#[derive(Parser)]
#[command(name = "duotone")]
#[command(author, version, about = "Recolor grayscale textures between two colors")]
struct Cli {
    /// Root directory containing the asset category directories
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    assets: PathBuf,

    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Render mode (patterned when --pattern is given, solid otherwise)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Pattern file or display name
    #[arg(short, long)]
    pattern: Option<String>,

    /// First color as six hex digits (white maps here)
    #[arg(long, value_parser = parse_color)]
    color1: Option<Color>,

    /// Second color as six hex digits (black maps here, patterned mode)
    #[arg(long, value_parser = parse_color)]
    color2: Option<Color>,

    /// Composite the overlay (solid mode)
    #[arg(short = 'O', long)]
    overlay: bool,

    /// Output file; defaults to export_<millis>.png in the current directory
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the catalog's patterns and colors and exit
    #[arg(short, long)]
    list: bool,
}

fn parse_color(code: &str) -> Result<Color, String> {
    Color::from_hex(code).map_err(|e| e.to_string())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| format!("parsing catalog {}", path.display()))
}

fn print_catalog(catalog: &Catalog) {
    println!("patterns:");
    for pattern in &catalog.patterns {
        println!("  {:<24} {}", pattern.file, pattern.name);
    }
    println!("colors:");
    for color in &catalog.colors {
        println!("  {}", color.label());
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_ref())?;

    if cli.list {
        print_catalog(&catalog);
        return Ok(());
    }

    let mut state = RecolorState::new(&catalog);
    let mode = cli.mode.unwrap_or(if cli.pattern.is_some() {
        ModeArg::Patterned
    } else {
        ModeArg::Solid
    });
    state.set_mode(mode.into());
    if let Some(key) = &cli.pattern {
        let Some(entry) = catalog.find_pattern(key) else {
            bail!("unknown pattern '{key}' (use --list)");
        };
        state.set_pattern(entry.file.as_str());
    }
    if let Some(color) = cli.color1 {
        state.set_color1(color);
    }
    if let Some(color) = cli.color2 {
        state.set_color2(color);
    }
    state.set_overlay_enabled(cli.overlay);

    let loader = DirectoryLoader::new(&cli.assets, catalog.layout.clone());
    let mut engine = RecolorEngine::new(loader);
    engine.render(&state.request(&catalog))?;

    let export = engine.export(now_millis())?;
    let path = match &cli.output {
        Some(path) => {
            std::fs::write(path, &export.bytes)
                .with_context(|| format!("writing {}", path.display()))?;
            path.clone()
        }
        None => export.write_to(std::path::Path::new("."))?,
    };
    println!("{}", path.display());
    Ok(())
}
