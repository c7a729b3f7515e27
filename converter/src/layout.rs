// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Loading of the `.slint` document that describes the converter window.
//!
//! The document is compiled at runtime with the Slint interpreter. Besides
//! compiling, [`load`] checks that the exported component provides every
//! property and callback the form handler addresses, so that a mismatching
//! layout is rejected before a window is created.

use slint_interpreter::{Compiler, ComponentDefinition, DiagnosticLevel, ValueType};
use std::path::{Path, PathBuf};

/// Logical name of the layout resource inside the `ui` directory.
pub const LAYOUT_FILE: &str = "converter.slint";
/// Name of the exported window component.
pub const COMPONENT_NAME: &str = "KilometerConverter";

pub const KILOMETERS: &str = "kilometers";
pub const RESULT: &str = "result";
pub const INVALID: &str = "invalid";
/// Property holding the window title.
pub const TITLE_PROPERTY: &str = "window-title";
pub const CALCULATE: &str = "calculate";

const REQUIRED_PROPERTIES: [(&str, ValueType); 4] = [
    (KILOMETERS, ValueType::String),
    (RESULT, ValueType::String),
    (INVALID, ValueType::Bool),
    (TITLE_PROPERTY, ValueType::String),
];

/// Reason why the layout resource could not be turned into a component
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[non_exhaustive]
pub enum ResourceProblem {
    /// The file is missing or cannot be read
    #[display("{_0}")]
    Unreadable(#[error(source)] std::io::Error),
    /// The compiler reported errors
    #[display("{_0}")]
    Diagnostics(#[error(not(source))] String),
    /// The document compiles but does not export the window component
    #[display("no exported component named {_0}")]
    MissingComponent(#[error(not(source))] String),
    /// The component lacks a property or callback, or declares it with another type
    #[display("the component does not expose `{_0}`")]
    MissingBinding(#[error(not(source))] &'static str),
}

/// Path of the layout shipped with this crate.
pub fn default_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("ui").join(LAYOUT_FILE)
}

/// Reads and compiles the layout at `path` and returns the window component.
///
/// `style` selects the widget style, `None` keeps the interpreter's default.
pub fn load(path: &Path, style: Option<&str>) -> Result<ComponentDefinition, ResourceProblem> {
    let source = std::fs::read_to_string(path).map_err(ResourceProblem::Unreadable)?;
    tracing::debug!(path = %path.display(), "compiling layout");

    let mut compiler = Compiler::default();
    if let Some(style) = style {
        compiler.set_style(style.into());
    }
    let result = spin_on::spin_on(compiler.build_from_source(source, path.to_path_buf()));

    let diagnostics = result.diagnostics().collect::<Vec<_>>();
    if result.has_errors() {
        slint_interpreter::print_diagnostics(&diagnostics);
        let errors = diagnostics
            .iter()
            .filter(|d| d.level() == DiagnosticLevel::Error)
            .map(|d| d.to_string())
            .collect::<Vec<_>>();
        return Err(ResourceProblem::Diagnostics(errors.join("; ")));
    }
    for warning in &diagnostics {
        tracing::warn!("{warning}");
    }

    let definition = result
        .component(COMPONENT_NAME)
        .ok_or_else(|| ResourceProblem::MissingComponent(COMPONENT_NAME.into()))?;
    check_bindings(&definition)?;
    Ok(definition)
}

fn check_bindings(definition: &ComponentDefinition) -> Result<(), ResourceProblem> {
    let properties = definition.properties().collect::<Vec<_>>();
    for (name, ty) in REQUIRED_PROPERTIES {
        if !properties.iter().any(|(n, t)| n == name && *t == ty) {
            return Err(ResourceProblem::MissingBinding(name));
        }
    }
    if !definition.callbacks().any(|c| c == CALCULATE) {
        return Err(ResourceProblem::MissingBinding(CALCULATE));
    }
    Ok(())
}
