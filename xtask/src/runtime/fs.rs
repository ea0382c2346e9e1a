//! Shared filesystem helpers for xtask workflows.

use crate::runtime::error::{XtaskError, XtaskResult};
use std::fs;
use std::path::Path;

/// Write a generated file, creating missing parent directories first.
pub fn write_generated(path: &Path, contents: &str) -> XtaskResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            XtaskError::io(format!("failed to create {}: {err}", parent.display()))
                .with_operation("write generated file")
        })?;
    }
    fs::write(path, contents).map_err(|err| {
        XtaskError::io(format!("failed to write generated file: {err}"))
            .with_operation("write generated file")
            .with_path(path)
    })
}
