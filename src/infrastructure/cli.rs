use clap::{Parser, Subcommand};

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert a single value and print the result
    Convert {
        /// Value to convert (must not be negative)
        #[arg(value_parser = parse_non_negative)]
        value: f64,
        /// Category, e.g. Length, Weight or Temperature
        #[arg(short, long)]
        category: String,
        /// Source unit, e.g. Meters
        #[arg(long)]
        from: String,
        /// Target unit, e.g. Feet
        #[arg(long)]
        to: String,
        /// Decimals to print (defaults to the configured precision)
        #[arg(short, long)]
        precision: Option<usize>,
    },
    /// List every category, unit and supported target
    List {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_non_negative(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !value.is_finite() {
        return Err(format!("`{raw}` is not a finite number"));
    }
    if value < 0.0 {
        return Err(format!("`{raw}` is negative; values start at 0"));
    }
    Ok(value)
}
