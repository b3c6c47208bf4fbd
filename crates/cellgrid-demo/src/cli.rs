#![forbid(unsafe_code)]

//! Command-line argument parsing for the grid demo.
//!
//! Parses args by hand and applies `CELLGRID_DEMO_*` environment overrides
//! first, so explicit flags always win.

use std::env;
use std::process;

use cellgrid_layout::{GridConfig, GridError, HorizontalAlign, Placement, VerticalAlign};

use crate::scene::example_config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
cellgrid demo: nine buttons in a 3x3 grid

USAGE:
    cellgrid-demo [OPTIONS]

OPTIONS:
    --config=PATH              Load grid settings from a JSON file
    --placement=MODE           'cell' or 'insertion-order' (default: from config)
    --align-horizontal=NAME    'left', 'center', or 'right'
    --align-vertical=NAME      'top', 'center', or 'bottom'
    --spacing=N                Gap between rows and between columns
    --json                     Print the placement as JSON instead of a table
    --help, -h                 Show this help message
    --version, -V              Show version

ENVIRONMENT VARIABLES:
    CELLGRID_DEMO_CONFIG             Same as --config
    CELLGRID_DEMO_PLACEMENT          Same as --placement
    CELLGRID_DEMO_ALIGN_HORIZONTAL   Same as --align-horizontal
    CELLGRID_DEMO_ALIGN_VERTICAL     Same as --align-vertical
    CELLGRID_DEMO_SPACING            Same as --spacing
    CELLGRID_DEMO_JSON               1/true to print JSON
    RUST_LOG                         Log filter (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Opts {
    /// JSON config file; the built-in example settings when absent.
    pub config_path: Option<String>,
    pub placement: Option<Placement>,
    pub align_horizontal: Option<HorizontalAlign>,
    pub align_vertical: Option<VerticalAlign>,
    /// Applied to both axes.
    pub spacing: Option<f64>,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("cellgrid-demo {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment first; invalid values are ignored.
        if let Some(val) = get_env("CELLGRID_DEMO_CONFIG")
            && !val.trim().is_empty()
        {
            opts.config_path = Some(val);
        }
        if let Some(val) = get_env("CELLGRID_DEMO_PLACEMENT")
            && let Ok(p) = val.parse()
        {
            opts.placement = Some(p);
        }
        if let Some(val) = get_env("CELLGRID_DEMO_ALIGN_HORIZONTAL")
            && let Ok(a) = val.parse()
        {
            opts.align_horizontal = Some(a);
        }
        if let Some(val) = get_env("CELLGRID_DEMO_ALIGN_VERTICAL")
            && let Ok(a) = val.parse()
        {
            opts.align_vertical = Some(a);
        }
        if let Some(val) = get_env("CELLGRID_DEMO_SPACING")
            && let Ok(n) = val.parse()
        {
            opts.spacing = Some(n);
        }
        if let Some(val) = get_env("CELLGRID_DEMO_JSON") {
            opts.json = val == "1" || val.eq_ignore_ascii_case("true");
        }

        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--json" => opts.json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--config=") {
                        if val.trim().is_empty() {
                            return Err(ParseError::InvalidValue {
                                flag: "--config",
                                value: val.to_string(),
                            });
                        }
                        opts.config_path = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--placement=") {
                        opts.placement = Some(parse_value("--placement", val)?);
                    } else if let Some(val) = other.strip_prefix("--align-horizontal=") {
                        opts.align_horizontal = Some(parse_value("--align-horizontal", val)?);
                    } else if let Some(val) = other.strip_prefix("--align-vertical=") {
                        opts.align_vertical = Some(parse_value("--align-vertical", val)?);
                    } else if let Some(val) = other.strip_prefix("--spacing=") {
                        opts.spacing = Some(parse_value("--spacing", val)?);
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        Ok(opts)
    }

    /// Resolve the grid settings: config file (or the example), then overrides.
    pub fn grid_config(&self) -> Result<GridConfig, GridError> {
        let mut config = match &self.config_path {
            Some(path) => GridConfig::from_json_file(path)?,
            None => example_config(),
        };
        if let Some(p) = self.placement {
            config.placement = p;
        }
        if let Some(a) = self.align_horizontal {
            config.align_horizontal = a;
        }
        if let Some(a) = self.align_vertical {
            config.align_vertical = a;
        }
        if let Some(s) = self.spacing {
            config.horizontal_spacing = s;
            config.vertical_spacing = s;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &'static str, val: &str) -> Result<T, ParseError> {
    val.parse().map_err(|_| ParseError::InvalidValue {
        flag,
        value: val.to_string(),
    })
}
