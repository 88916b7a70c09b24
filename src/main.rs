// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use crate::cli::{CliArgs, Command};
use crate::clipboard::SystemClipboard;
use crate::widget::PasswordWidget;

mod cli;
mod clipboard;
mod config;
mod generate;
mod password;
mod ui;
mod widget;

fn main() -> ExitCode {
    let args: CliArgs = CliArgs::parse();

    init_logger(&args);

    let result = match args.command {
        Command::Widget(widget_args) => {
            let mut widget = PasswordWidget::new(widget_args.base.configuration());
            ui::run(&mut widget, &mut SystemClipboard::default()).map_err(|e| e.to_string())
        }
        Command::Generate(generate_args) => {
            let mut clipboard = SystemClipboard::default();
            generate::generate_passwords(&generate_args, &mut clipboard, &mut stdout())
                .map_err(|e| format!("failed to write passwords: {e}"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("🛑 {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(args: &CliArgs) {
    let level = if args.verbose {
        LevelFilter::Trace
    } else if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new().filter_level(level).init();
}
