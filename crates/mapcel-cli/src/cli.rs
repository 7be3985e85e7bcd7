//! CLI argument definitions for mapcel.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mapcel",
    version,
    about = "Mapcel - Turn coordinate spreadsheets into shareable web maps",
    long_about = "Convert CSV files with latitude/longitude columns into GeoJSON.\n\n\
                  Detects coordinate columns by header name, validates every row and\n\
                  packages the result with MapLibre GL JS map code as a zip bundle."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include raw cell values in trace logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect and validate coordinate columns, then print a summary.
    Inspect(InspectArgs),

    /// Write one GeoJSON file per valid CSV file.
    Convert(ConvertArgs),

    /// Build a zip with GeoJSON files, MapLibre map code and a README.
    Export(ExportArgs),
}

/// CSV inputs shared by every subcommand.
#[derive(Args, Clone)]
pub struct InputArgs {
    /// CSV files with a header row.
    #[arg(value_name = "CSV", required = true)]
    pub files: Vec<PathBuf>,

    /// Field delimiter.
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = ',',
        value_parser = parse_delimiter
    )]
    pub delimiter: char,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory for the generated GeoJSON files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output zip path.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "FILE",
        default_value = mapcel_report::DEFAULT_EXPORT_FILE_NAME
    )]
    pub output: PathBuf,

    /// TOML file with map settings; flags below override its values.
    #[arg(long = "settings", value_name = "TOML")]
    pub settings: Option<PathBuf>,

    #[command(flatten)]
    pub map: MapArgs,

    #[command(flatten)]
    pub styling: StylingArgs,
}

/// Map setting overrides.
#[derive(Args, Default)]
pub struct MapArgs {
    /// Base map style URL.
    #[arg(long = "style-url", value_name = "URL")]
    pub style_url: Option<String>,

    #[arg(long = "min-zoom", value_name = "ZOOM")]
    pub min_zoom: Option<f64>,

    #[arg(long = "max-zoom", value_name = "ZOOM")]
    pub max_zoom: Option<f64>,

    #[arg(long = "initial-zoom", value_name = "ZOOM")]
    pub initial_zoom: Option<f64>,

    /// Initial map center as longitude,latitude.
    #[arg(
        long = "center",
        value_name = "LON,LAT",
        value_parser = parse_center,
        allow_hyphen_values = true
    )]
    pub center: Option<[f64; 2]>,

    /// Render a static map without navigation controls.
    #[arg(long = "no-controls")]
    pub no_controls: bool,
}

/// Styling applied to every dataset in the export.
#[derive(Args, Default)]
pub struct StylingArgs {
    /// Point color (any CSS color); random per dataset when omitted.
    #[arg(id = "point_color", long = "point-color", value_name = "CSS")]
    pub color: Option<String>,

    /// Point radius in pixels.
    #[arg(long = "radius", value_name = "PX", value_parser = parse_radius)]
    pub radius: Option<f64>,

    /// Point opacity between 0 and 1.
    #[arg(long = "opacity", value_name = "ALPHA", value_parser = parse_opacity)]
    pub opacity: Option<f64>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parses `LON,LAT`.
pub fn parse_center(value: &str) -> Result<[f64; 2], String> {
    let (lon, lat) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LON,LAT but got '{value}'"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    Ok([lon, lat])
}

fn parse_opacity(value: &str) -> Result<f64, String> {
    let opacity: f64 = value
        .parse()
        .map_err(|_| format!("invalid opacity '{value}'"))?;
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(format!("opacity must be between 0 and 1, got {opacity}"))
    }
}

fn parse_radius(value: &str) -> Result<f64, String> {
    let radius: f64 = value
        .parse()
        .map_err(|_| format!("invalid radius '{value}'"))?;
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(format!("radius must be a finite number of pixels, got {radius}"))
    }
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    let delimiter = match value {
        "\\t" | "tab" => '\t',
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(format!("delimiter must be a single character, got '{value}'")),
            }
        }
    };
    if delimiter.is_ascii() {
        Ok(delimiter)
    } else {
        Err(format!("delimiter must be an ASCII character, got '{delimiter}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_parses_lon_lat() {
        assert_eq!(parse_center("10.75,59.91"), Ok([10.75, 59.91]));
        assert_eq!(parse_center(" -3.5 , 40 "), Ok([-3.5, 40.0]));
        assert!(parse_center("10.75").is_err());
        assert!(parse_center("east,north").is_err());
    }

    #[test]
    fn opacity_is_bounded() {
        assert_eq!(parse_opacity("0.5"), Ok(0.5));
        assert!(parse_opacity("1.5").is_err());
    }

    #[test]
    fn radius_must_be_finite_and_non_negative() {
        assert_eq!(parse_radius("8"), Ok(8.0));
        assert_eq!(parse_radius("0"), Ok(0.0));
        assert!(parse_radius("-1").is_err());
        assert!(parse_radius("NaN").is_err());
        assert!(parse_radius("inf").is_err());
        assert!(parse_radius("wide").is_err());
    }

    #[test]
    fn delimiter_accepts_tab_alias() {
        assert_eq!(parse_delimiter("tab"), Ok('\t'));
        assert_eq!(parse_delimiter(";"), Ok(';'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn plain_export_parses_alongside_global_color() {
        let cli = Cli::try_parse_from(["mapcel", "--color", "never", "export", "a.csv"])
            .expect("valid arguments");
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.styling.color, None);
        assert_eq!(args.styling.radius, None);
    }

    #[test]
    fn radius_flag_rejects_nan() {
        let result = Cli::try_parse_from(["mapcel", "export", "a.csv", "--radius", "NaN"]);
        assert!(result.is_err());
    }

    #[test]
    fn export_flags_parse() {
        let cli = Cli::try_parse_from([
            "mapcel",
            "export",
            "a.csv",
            "b.csv",
            "--center",
            "-3.5,40",
            "--no-controls",
            "--radius",
            "8",
            "--point-color",
            "#336699",
        ])
        .expect("valid arguments");
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.input.files.len(), 2);
        assert_eq!(args.map.center, Some([-3.5, 40.0]));
        assert!(args.map.no_controls);
        assert_eq!(args.styling.radius, Some(8.0));
        assert_eq!(args.styling.color.as_deref(), Some("#336699"));
        assert_eq!(
            args.output,
            PathBuf::from(mapcel_report::DEFAULT_EXPORT_FILE_NAME)
        );
    }
}
