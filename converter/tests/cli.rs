// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::process::Command;

#[test]
fn missing_layout_prints_one_line_on_stdout() {
    let layout = std::env::temp_dir().join("kilometer-converter-cli-missing.slint");
    let output = Command::new(env!("CARGO_BIN_EXE_kilometer-converter"))
        .arg("--layout")
        .arg(&layout)
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "{stdout}");
    assert!(stdout.starts_with("Can't find layout file!"), "{stdout}");
    assert!(stdout.contains("kilometer-converter-cli-missing.slint"), "{stdout}");

    // the log record goes to stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("can't load"), "{stderr}");
}
