/*!
shadescale Command Line Interface

Generates contrast-scaled palettes from a base color and converts between
shades and contrast ratios.

```bash
shadescale palette "#3366cc" --shades 10-50-100-150 --hue-start 250
shadescale contrast 75 100 125
shadescale shade coral
```
*/

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shadescale::config::ConfigOverrides;
use shadescale::generate::base_shade;
use shadescale::shade::{format_shades, is_shade_in_range, parse_shades};
use shadescale::{
    generate_palette, shade_to_contrast, ChannelAnchors, Color, ColorModel, PaletteConfig, Swatch,
    VERSION,
};

#[derive(Parser)]
#[command(name = "shadescale")]
#[command(about = "Contrast-scaled color palettes")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a palette from a base color
    Palette {
        /// Base color in any CSS format (hex, name, rgb(), hsl())
        color: String,

        /// Dash-separated shade list, e.g. 10-25-50-100
        #[arg(long)]
        shades: Option<String>,

        /// Hue in degrees at the dark end
        #[arg(long)]
        hue_start: Option<f64>,

        /// Hue in degrees at the light end
        #[arg(long)]
        hue_end: Option<f64>,

        /// Saturation (0-1) at the dark end
        #[arg(long)]
        saturation_start: Option<f64>,

        /// Saturation (0-1) at the light end
        #[arg(long)]
        saturation_end: Option<f64>,

        /// Accepted contrast error per shade
        #[arg(long)]
        tolerance: Option<f64>,

        /// Bisection steps per shade
        #[arg(long)]
        max_iterations: Option<usize>,

        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the target contrast ratio of each shade
    Contrast {
        /// Shade indices (0 = black, 200 = white)
        #[arg(required = true, allow_negative_numbers = true)]
        shades: Vec<f64>,
    },

    /// Print a color's own shade and contrast ratios
    Shade {
        /// Color in any CSS format
        color: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with palette output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shadescale=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Palette {
            color,
            shades,
            hue_start,
            hue_end,
            saturation_start,
            saturation_end,
            tolerance,
            max_iterations,
            config,
            format,
        } => {
            let base = Color::parse(&color)?;

            let file_config = match &config {
                Some(path) => PaletteConfig::from_file(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => PaletteConfig::default(),
            };
            let overrides = ConfigOverrides {
                shades: shades.as_deref().map(parse_shades).transpose()?,
                anchors: ChannelAnchors {
                    hue_start,
                    hue_end,
                    saturation_start,
                    saturation_end,
                },
                tolerance,
                max_iterations,
            };
            let palette_config = file_config.merge_cli(&overrides)?;

            let request = palette_config.to_request(base);
            if let Some(shade) = request.shades.iter().find(|s| !is_shade_in_range(**s)) {
                anyhow::bail!("Shade {} is outside the 0-200 scale", shade);
            }
            let swatches = generate_palette(&request).with_context(|| {
                format!(
                    "Failed to generate shades {} for {}",
                    format_shades(&request.shades),
                    base
                )
            })?;

            match format {
                OutputFormat::Text => print!("{}", render_text(&swatches)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&swatches)?),
            }
        }

        Commands::Contrast { shades } => {
            for shade in shades {
                println!("{:>7}  {:.2}:1", shade, shade_to_contrast(shade));
            }
        }

        Commands::Shade { color } => {
            let color = Color::parse(&color)?;
            println!("color     {}", color);
            println!("shade     {}", base_shade(&color));
            println!("on black  {:.2}:1", color.contrast_against_black());
            println!("on white  {:.2}:1", color.contrast_against_white());
        }
    }

    Ok(())
}

/// One line per swatch, the base color's shade starred
fn render_text(swatches: &[Swatch]) -> String {
    let mut out = String::from("  shade  hex      contrast\n");
    for swatch in swatches {
        let marker = if swatch.is_base { " ★" } else { "" };
        out.push_str(&format!(
            "  {:>5}  {}  {:>5.2}:1{}\n",
            swatch.shade, swatch.hex, swatch.contrast, marker
        ));
    }
    out
}
