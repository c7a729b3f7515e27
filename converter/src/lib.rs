// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
# Kilometer Converter

A single window that converts a distance typed in kilometers into miles.

The window is described in `ui/converter.slint` and compiled when the
program starts, using the Slint interpreter. The Rust side only provides the
controller: [`handler::FormHandler`] reacts to the `calculate` callback of
the layout, and [`conversion`] holds the arithmetic and formatting.

```no_run
let config = kilometer_converter::app::Config::default();
kilometer_converter::app::run(&config).unwrap();
```
*/

pub mod app;
pub mod conversion;
pub mod handler;
pub mod layout;
