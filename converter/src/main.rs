// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use clap::Parser;
use kilometer_converter::app;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The .slint file describing the window
    #[arg(long, value_name = "path", action)]
    layout: Option<std::path::PathBuf>,

    /// The style name ('native' or 'fluent')
    #[arg(long, value_name = "style name", action)]
    style: Option<String>,
}

impl From<Cli> for app::Config {
    fn from(cli: Cli) -> Self {
        let defaults = Self::default();
        Self { layout: cli.layout.unwrap_or(defaults.layout), style: cli.style }
    }
}

fn main() -> ExitCode {
    // stdout is reserved for the single diagnostic line of a missing layout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
    let args = Cli::parse();

    match app::run(&args.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
