//! Best-effort `gofmt` pass over a written file.

use std::path::Path;
use std::process::Command;

const FORMATTER: &str = "gofmt";

/// Rewrite `path` in place with `gofmt -w`.
///
/// Returns whether the file was formatted. A missing binary or a failed run
/// is logged and leaves the file as written.
pub fn format_go_file(path: &Path) -> bool {
    let Ok(binary) = which::which(FORMATTER) else {
        tracing::warn!(path = %path.display(), "{FORMATTER} not found; output left unformatted");
        return false;
    };

    match Command::new(&binary).arg("-w").arg(path).output() {
        Ok(output) if output.status.success() => {
            tracing::debug!(path = %path.display(), "formatted");
            true
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(
                path = %path.display(),
                status = %output.status,
                stderr = stderr.trim(),
                "{FORMATTER} failed; output left unformatted"
            );
            false
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not run {FORMATTER}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.go");
        std::fs::write(&path, "this is not go\n").unwrap();

        assert!(!format_go_file(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "this is not go\n");
    }
}
