//! Event sinks that serialise the timeline.
//!
//! Both formats write the flat [`crate::core::event::TimelineRow`]
//! projection of each event.

pub mod csv_export;
pub mod json_export;

use std::path::Path;

use crate::util::error::{Result, TimelineSleuthError};

/// Pre-flight check for an output file path.
///
/// # Errors
/// Returns [`TimelineSleuthError::Export`] if the parent directory does not
/// exist or the path names a directory.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(TimelineSleuthError::Export(format!(
            "Output path is a directory: {}",
            path.display()
        )));
    }
    match path.parent() {
        // A bare file name resolves against the working directory.
        Some(parent) if parent.as_os_str().is_empty() => Ok(()),
        Some(parent) if parent.is_dir() => Ok(()),
        Some(parent) => Err(TimelineSleuthError::Export(format!(
            "Output directory does not exist: {}",
            parent.display()
        ))),
        None => Err(TimelineSleuthError::Export(format!(
            "Output path has no parent directory: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_output_path() {
        let temp = std::env::temp_dir();
        assert!(validate_output_path(&temp.join("timeline.csv")).is_ok());
        assert!(validate_output_path(&temp).is_err());
        assert!(validate_output_path(Path::new("timeline.jsonl")).is_ok());
        let err = validate_output_path(&temp.join("no_such_dir_5dc1").join("t.csv")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
