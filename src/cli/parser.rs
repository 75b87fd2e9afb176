use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for shiftcal
/// CLI application to plan shift codes over a month and sum worked hours
#[derive(Parser)]
#[command(
    name = "shiftcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shift calendar calculator: assign shift codes to the days of a month and sum worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Month selection and per-day input shared by `month` and `export`.
#[derive(Args, Debug, Clone)]
pub struct MonthArgs {
    /// Year (default: current year, or the plan file's year)
    #[arg(long, short = 'y', value_parser = clap::value_parser!(i32).range(2000..=2100))]
    pub year: Option<i32>,

    /// Month 1-12 (default: current month, or the plan file's month)
    #[arg(long, short = 'm', value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Plan file with day assignments (YAML, or a CSV produced by `export`)
    #[arg(long, short = 'p', value_name = "FILE")]
    pub plan: Option<PathBuf>,

    /// Assign a code to a day, e.g. --set 2025-03-04=vv7.6 (repeatable)
    #[arg(long = "set", value_name = "DATE=CODE")]
    pub set: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the shift-code legend, or add/update a code
    Codes {
        /// Code to add or update (stored in the configuration file)
        #[arg(long = "add", value_name = "CODE")]
        add: Option<String>,

        /// Start time (HH:MM); leave out for codes without times
        #[arg(long = "start", requires = "add")]
        start: Option<String>,

        /// End time (HH:MM); leave out for codes without times
        #[arg(long = "end", requires = "add")]
        end: Option<String>,

        /// Break in minutes
        #[arg(long = "pause", default_value_t = 0, requires = "add",
              value_parser = clap::value_parser!(u32).range(0..=180))]
        pause: u32,

        /// Legend text (default: the code itself)
        #[arg(long = "label", requires = "add")]
        label: Option<String>,
    },

    /// Show the month overview: days, weeks and totals
    Month {
        #[command(flatten)]
        month: MonthArgs,

        /// Skip the per-week overview
        #[arg(long = "no-weeks")]
        no_weeks: bool,
    },

    /// Export the month overview
    Export {
        #[command(flatten)]
        month: MonthArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: shift_overzicht_<year>_<MM>.<ext> in export_dir)
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
