// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Application bootstrap: turns the layout resource into a shown window.

use crate::handler::FormHandler;
use crate::layout::{self, ResourceProblem};
use slint_interpreter::{ComponentHandle, ComponentInstance, PlatformError, Value};
use std::io::Write;
use std::path::PathBuf;

pub const WINDOW_TITLE: &str = "Kilometer Converter";

/// Runtime settings of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the `.slint` layout.
    pub layout: PathBuf,
    /// Widget style. `None` uses the default of the interpreter.
    pub style: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { layout: layout::default_path(), style: None }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
#[non_exhaustive]
pub enum Error {
    /// The layout resource is missing, unreadable or unusable
    #[display("can't load {}: {reason}", path.display())]
    #[from(skip)]
    ResourceNotFound {
        path: PathBuf,
        #[error(source)]
        reason: ResourceProblem,
    },
    /// The windowing backend failed
    #[display("{_0}")]
    Platform(#[error(source)] PlatformError),
}

/// Builds the window from the layout and wires the form handler to it.
///
/// The window is not shown yet.
pub fn bootstrap(config: &Config) -> Result<ComponentInstance, Error> {
    let resource_error =
        |reason| Error::ResourceNotFound { path: config.layout.clone(), reason };

    let definition = layout::load(&config.layout, config.style.as_deref()).map_err(resource_error)?;
    let window = definition.create()?;
    window
        .set_property(layout::TITLE_PROPERTY, Value::String(WINDOW_TITLE.into()))
        .map_err(|_| resource_error(ResourceProblem::MissingBinding(layout::TITLE_PROPERTY)))?;
    FormHandler::new(&window)
        .install(&window)
        .map_err(|_| resource_error(ResourceProblem::MissingBinding(layout::CALCULATE)))?;

    tracing::info!(layout = %config.layout.display(), "window created");
    Ok(window)
}

/// Bootstraps the window, reporting a missing layout on `console`.
///
/// Returns `Ok(None)` when the layout could not be loaded: a diagnostic line
/// has been written and no window exists. Platform errors are returned.
pub fn start(config: &Config, console: &mut impl Write) -> Result<Option<ComponentInstance>, Error> {
    match bootstrap(config) {
        Ok(window) => Ok(Some(window)),
        Err(err @ Error::ResourceNotFound { .. }) => {
            tracing::error!("{err}");
            let _ = writeln!(console, "Can't find layout file! {err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Shows the converter and runs the event loop until the window is closed.
pub fn run(config: &Config) -> Result<(), Error> {
    let Some(window) = start(config, &mut std::io::stdout())? else {
        return Ok(());
    };
    window.run()?;
    tracing::info!("window closed");
    Ok(())
}
