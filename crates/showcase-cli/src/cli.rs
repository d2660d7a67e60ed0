//! CLI definition using clap

use clap::{Parser, Subcommand};
use showcase_types::{FuelType, OutputFormat, VehicleType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vehicle-showcase")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Browse, compare and get AI recommendations for vehicles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Catalog file (.toml or .csv) to use instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory for the comparison list
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog vehicles, optionally filtered
    List {
        /// Text matched against brand or model (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Vehicle type
        #[arg(long = "type", short = 't')]
        vehicle_type: Option<VehicleType>,

        /// Exact brand name
        #[arg(long, short = 'b')]
        brand: Option<String>,

        /// Fuel type
        #[arg(long)]
        fuel: Option<FuelType>,

        /// Upper price bound in rupees
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Show full details of one vehicle
    Show {
        /// Vehicle id
        id: String,
    },

    /// List vehicle categories
    Categories,

    /// Manage and view the comparison list
    Compare {
        #[command(subcommand)]
        action: CompareAction,
    },

    /// Ask the AI advisor to pick a vehicle
    Recommend {
        /// What you are looking for, in your own words
        #[arg(required = true, trailing_var_arg = true)]
        preferences: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set advisor command line (e.g. "gemini -p")
        #[arg(long)]
        set_advisor_command: Option<String>,

        /// Set model
        #[arg(long)]
        set_model: Option<String>,

        /// Set catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set storage directory
        #[arg(long)]
        set_storage_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set how long notices stay visible, in seconds
        #[arg(long)]
        set_toast_secs: Option<u64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CompareAction {
    /// Add a vehicle to the comparison list
    Add {
        /// Vehicle id
        id: String,
    },

    /// Remove a vehicle from the comparison list
    Remove {
        /// Vehicle id
        id: String,
    },

    /// Empty the comparison list
    Clear,

    /// Show the side-by-side comparison
    Show {
        /// Also write the comparison to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "vehicle-showcase",
            "list",
            "--type",
            "four-wheeler",
            "--fuel",
            "electric",
            "--max-price",
            "1500000",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::List {
                vehicle_type,
                fuel,
                max_price,
                ..
            } => {
                assert_eq!(vehicle_type, Some(VehicleType::FourWheeler));
                assert_eq!(fuel, Some(FuelType::Electric));
                assert_eq!(max_price, Some(1500000.0));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_recommend_joins_words() {
        let cli = Cli::try_parse_from(["vehicle-showcase", "recommend", "cheap", "family", "car"]).unwrap();
        match cli.command {
            Commands::Recommend { preferences } => assert_eq!(preferences.join(" "), "cheap family car"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_compare_show_export() {
        let cli = Cli::try_parse_from(["vehicle-showcase", "compare", "show", "--export", "out.xlsx", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Compare {
                action: CompareAction::Show { export: Some(_) }
            }
        ));
    }

    #[test]
    fn test_recommend_requires_preferences() {
        assert!(Cli::try_parse_from(["vehicle-showcase", "recommend"]).is_err());
    }
}
