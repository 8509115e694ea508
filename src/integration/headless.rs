//! One-shot commands that run without entering the terminal UI.

use std::io::Write;

use color_eyre::eyre::{eyre, Result};

use crate::{
    domain::{
        conversion::{ConversionKind, ConversionRequest, ConversionTable, TABLE},
        format::format_conversion,
    },
    infrastructure::{cli::Command, config::Config},
};

/// Runs a CLI subcommand against the built-in table, writing to `out`.
pub fn run_command(command: &Command, config: &Config, out: &mut impl Write) -> Result<()> {
    run_with_table(&TABLE, command, config, out)
}

pub fn run_with_table(
    table: &ConversionTable,
    command: &Command,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Convert {
            value,
            category,
            from,
            to,
            precision,
        } => {
            let request = ConversionRequest::new(category, from, to, *value);
            let result = table
                .apply(&request)
                .ok_or_else(|| eyre!("no conversion from {from} to {to} in {category}"))?;
            let precision = precision.unwrap_or(config.display.precision);
            log::info!("headless convert: {:?} -> {}", request, result);
            writeln!(out, "{}", format_conversion(&request, result, precision))?;
        }
        Command::List { json: true } => {
            writeln!(out, "{}", serde_json::to_string_pretty(&table.listing())?)?;
        }
        Command::List { json: false } => {
            for category in table.listing() {
                writeln!(out, "{}", category.name)?;
                for unit in category.units {
                    let targets = unit
                        .targets
                        .iter()
                        .map(|target| match (target.kind, target.factor) {
                            (ConversionKind::Scalar, Some(factor)) => {
                                format!("{} (x{})", target.unit, factor)
                            }
                            _ => format!("{} (formula)", target.unit),
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    writeln!(out, "  {} -> {}", unit.name, targets)?;
                }
            }
        }
    }
    Ok(())
}
