use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hiveplot_svg::{render, RenderOptions, Source};

#[derive(Parser, Debug)]
#[command(
    name = "hiveplot-svg",
    about = "Render a hive plot JSON document to SVG",
    version
)]
struct Cli {
    /// Hive plot JSON document, or `-` for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Output file path (writes to stdout when omitted)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON file with render options; flags below override it
    #[arg(long = "options", value_name = "FILE")]
    options: Option<PathBuf>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// Do not draw axis labels
    #[arg(long = "no-labels", default_value_t = false)]
    no_labels: bool,

    /// Label distance from the axis start, as a multiple of axis length
    #[arg(long = "labels-buffer")]
    labels_buffer: Option<f64>,

    #[arg(long = "font-size")]
    font_size: Option<f64>,

    /// Selector recorded on the plot's root group
    #[arg(long)]
    container: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "svg")]
    emit: Emit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// SVG document
    Svg,
    /// Primitive list as JSON
    Json,
}

fn options_from(cli: &Cli) -> hiveplot_svg::Result<RenderOptions> {
    let mut options = match &cli.options {
        Some(path) => RenderOptions::from_json_file(path)?,
        None => RenderOptions::default(),
    };
    if let Some(width) = cli.width {
        options.width = width;
    }
    if let Some(height) = cli.height {
        options.height = height;
    }
    if cli.no_labels {
        options.show_labels = false;
    }
    if let Some(buffer) = cli.labels_buffer {
        options.labels_buffer = buffer;
    }
    if let Some(size) = cli.font_size {
        options.font_size = size;
    }
    if let Some(container) = &cli.container {
        options.container = container.clone();
    }
    Ok(options)
}

fn run(cli: &Cli) -> hiveplot_svg::Result<String> {
    let options = options_from(cli)?;
    let doc = Source::Location(cli.input.clone()).load()?;
    let surface = render(&doc, &options)?;
    match cli.emit {
        Emit::Svg => Ok(surface.to_svg()),
        Emit::Json => Ok(serde_json::to_string_pretty(&surface)?),
    }
}

fn main() {
    let cli = Cli::parse();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let output = match run(&cli) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, output) {
                eprintln!("Error: failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", output),
    }
}
