use clap::{Parser, Subcommand};

use crate::config::{Configuration, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

/// passgen - Random password generator.
///
/// Builds passwords from letters, optionally digits and symbols, and copies them to the clipboard.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))] // Require at least one subcommand
#[command(propagate_version = true)] // Display version in subcommand help
pub(crate) struct CliArgs {
    #[clap(subcommand)]
    pub(crate) command: Command,

    /// Print debug information
    #[clap(short, long, global = true)]
    pub(crate) debug: bool,

    /// Print every step, including generation traces
    #[clap(short, long, global = true)]
    pub(crate) verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Open the interactive password generator widget.
    ///
    /// The password is regenerated whenever the length or a character class changes.
    Widget(WidgetArgs),

    /// Print freshly generated passwords and exit.
    ///
    /// Uses the same rules as the widget, without any interaction.
    Generate(GenerateArgs),
}

/// Base arguments shared by both subcommands.
#[derive(Parser, Debug)]
pub(crate) struct BaseArgs {
    /// The length of the generated password
    #[clap(short, long, default_value_t = DEFAULT_LENGTH, value_parser = parse_length)]
    pub(crate) length: usize,

    /// Allow digits 0-9
    #[clap(short, long)]
    pub(crate) numbers: bool,

    /// Allow the symbols ~!@#$%^&*()_+ and the backtick
    #[clap(short, long)]
    pub(crate) symbols: bool,
}

impl BaseArgs {
    pub(crate) fn configuration(&self) -> Configuration {
        Configuration::new(self.length, self.numbers, self.symbols)
    }
}

/// Arguments specific to the `widget` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct WidgetArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,
}

/// Arguments specific to the `generate` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct GenerateArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,

    /// How many passwords to print
    #[clap(short, long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
    pub(crate) count: u16,

    /// Copy the last generated password to the clipboard
    #[clap(long)]
    pub(crate) copy: bool,

    /// Seconds to keep serving the copied password before exiting
    #[clap(long, default_value = "10")]
    pub(crate) hold: u64,
}

fn parse_length(value: &str) -> Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number"))?;

    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!("must be between {MIN_LENGTH} and {MAX_LENGTH}"))
    }
}
