use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use metrochrome::{Color, ConversionTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod request;

use request::Request;

const SPACES_HELP: &str = "\
Color space flags:
  -rgb    RGB as three numbers 0-255, e.g. 0 128 255
  -rgbh   RGB in hexadecimal with an optional leading hash mark, e.g. #00FF30
  -cmyk   CMYK as four percentages 0-100, e.g. 0 100 95.5 82.7
  -cmykr  CMYK as four ratios 0-1, e.g. 0 1 0.955 0.827
  -hsv    hue 0-360, saturation and value 0-1
  -hsl    hue 0-360, saturation and lightness 0-1
  -xyz    CIE XYZ as three values 0-1
  -wl     dominant wavelength in nanometers, 380-780
  -temp   correlated color temperature in Kelvin

Options must come before the color.

Examples:
  metrochrome -rgb 0 0 0 -cmyk              # prints 0.0 0.0 0.0 100.0
  metrochrome -rgb 255 255 255 -rgbh        # prints #FFFFFF
  metrochrome -cmyk 0 100 95.5 82.7 -rgb    # prints 44 0 1
  metrochrome --tint 0.5 -rgbh '#D2691E' -rgbh";

#[derive(Parser)]
#[command(
    name = "metrochrome",
    about = "A command line tool for exploring color",
    version,
    after_help = SPACES_HELP
)]
struct Cli {
    /// Derive CIE XYZ and color temperature with physical formulas instead of
    /// placeholder values
    #[arg(long)]
    physical: bool,

    /// Mix the color with white by this amount (0 to 1) before converting
    #[arg(long, value_name = "AMOUNT", conflicts_with = "shade")]
    tint: Option<f64>,

    /// Mix the color with black by this amount (0 to 1) before converting
    #[arg(long, value_name = "AMOUNT")]
    shade: Option<f64>,

    /// Log each conversion step to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Input space flag, its values and the output space flag. Everything
    /// after the input space flag is part of the color
    #[arg(
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        value_name = "IN_FLAG VALUES... OUT_FLAG"
    )]
    color: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "metrochrome=debug"
    } else {
        "metrochrome=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => {
            if let Err(e) = Cli::command().print_long_help() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Unusable parameters...\nRun 'metrochrome --help' to display the help screen.");
            std::process::exit(1);
        }
    }
}

/// Convert the requested color and return its canonical rendering, or `None`
/// if help was requested.
fn run(cli: &Cli) -> Result<Option<String>> {
    let (from, values, to) = match request::parse(&cli.color)? {
        Request::Help => return Ok(None),
        Request::Convert { from, values, to } => (from, values, to),
    };

    let table = if cli.physical {
        ConversionTable::physical()
    } else {
        ConversionTable::compatible()
    };

    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    let color = Color::parse(from, &values).with_context(|| format!("invalid {from} color"))?;
    tracing::debug!(%color, space = %from, "parsed input");

    let color = match (cli.tint, cli.shade) {
        (Some(amount), _) => table.tint(&color, amount).context("cannot tint color")?,
        (_, Some(amount)) => table.shade(&color, amount).context("cannot shade color")?,
        _ => color,
    };

    let route = table
        .route(from, to)
        .with_context(|| format!("no conversion from {from} to {to}"))?;
    if table.uses_placeholder(&route) {
        tracing::warn!(%route, "conversion uses placeholder values that are not derived from the color");
    }

    let converted = table
        .convert(&color, to)
        .with_context(|| format!("cannot convert {color} from {from} to {to}"))?;

    Ok(Some(converted.to_string()))
}
