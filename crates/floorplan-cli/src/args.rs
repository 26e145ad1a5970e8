//! Command-line argument definitions for the floorplan CLI.
//!
//! Arguments control the input and output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Render a floor plan description to SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input floor plan file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["floorplan", "house.floorplan"]).unwrap();

        assert_eq!(args.input, "house.floorplan");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "floorplan",
            "house.floorplan",
            "-o",
            "house.svg",
            "-c",
            "style.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.output, "house.svg");
        assert_eq!(args.config.as_deref(), Some("style.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["floorplan"]).is_err());
    }
}
