use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// locflat - Flatten a GeoJSON feature collection into a list of locations
#[derive(Parser, Debug)]
#[command(name = "locflat")]
#[command(about = "Flatten a GeoJSON feature collection into location records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Show planned actions without executing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Configuration file (defaults to ./locflat.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // `convert` runs when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the input feature collection into a locations document
    Convert(ConvertArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug, Default)]
pub struct ConvertArgs {
    /// Input GeoJSON file (default: export.geojson)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output JSON file, overwritten if present (default: locations.json)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}
