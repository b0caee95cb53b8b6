// File: crates/scatter-cli/src/main.rs
// Summary: Loads the cyclist dataset, renders the doping scatter plot, and writes SVG (and PNG).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use scatter_core::config::DATA_URL;
use scatter_core::{load_records, svg, theme, ChartConfig, ChartRenderer, DataSource, InvalidRecordPolicy};
use scatter_render_skia::RasterOptions;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the doping-allegations scatter plot of cycling race times", long_about = None)]
struct Cli {
    /// Dataset URL, or a local .json/.csv file
    #[arg(short, long, default_value = DATA_URL, value_hint = ValueHint::Url)]
    source: String,

    /// Output SVG path
    #[arg(short, long, default_value = "target/out/scatter.svg", value_hint = ValueHint::FilePath)]
    out: PathBuf,

    /// Also rasterize to this PNG path (requires the `raster` feature)
    #[arg(long, value_hint = ValueHint::FilePath)]
    png: Option<PathBuf>,

    /// Device pixel ratio for the PNG output
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,

    /// Color theme (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Leave out malformed records instead of failing
    #[arg(long)]
    skip_invalid: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let source = DataSource::parse(&cli.source);
    let policy = if cli.skip_invalid { InvalidRecordPolicy::Skip } else { InvalidRecordPolicy::Abort };
    let records = load_records(&source, policy).with_context(|| format!("failed to load dataset from {source}"))?;
    log::info!("loaded {} records", records.len());

    let theme = theme::find(&cli.theme);
    if !theme.name.eq_ignore_ascii_case(&cli.theme) {
        log::warn!("unknown theme '{}', using '{}'", cli.theme, theme.name);
    }
    let renderer = ChartRenderer::new(ChartConfig::default().with_theme(theme));
    let view = renderer.render(&records).context("failed to render chart")?;
    let (lo, hi) = view.x_scale().domain_years();
    log::info!("plotted {} markers over {lo}..{hi}", view.markers().len());

    svg::write_svg(view.scene(), &cli.out).with_context(|| format!("failed to write {}", cli.out.display()))?;
    log::info!("wrote {}", cli.out.display());

    if let Some(png) = &cli.png {
        let opts = RasterOptions { dpr: cli.dpr };
        scatter_render_skia::render_png(view.scene(), &opts, png)
            .with_context(|| format!("failed to write {}", png.display()))?;
    }
    Ok(())
}
