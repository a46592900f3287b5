use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::ChangelogError;

pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        eprintln!("Failed to write to standard output: {e}");
    }

    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }

    Ok(())
}

/// Writes the rendered changelog to `file`, or to standard output when absent.
///
/// The file is created (or truncated), written completely and closed before
/// returning. Standard output is mirrored into `writer` like `println`.
pub fn write_changelog(
    changelog: &str,
    file: Option<&Path>,
    writer: &mut Option<&mut dyn Write>,
) -> Result<(), ChangelogError> {
    let Some(path) = file else {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(changelog.as_bytes()).and_then(|()| stdout.flush()) {
            eprintln!("Failed to write to standard output: {e}");
        }
        if let Some(w) = writer {
            w.write_all(changelog.as_bytes())
                .map_err(|source| ChangelogError::OutputTarget {
                    path: "stdout".into(),
                    source,
                })?;
        }
        return Ok(());
    };

    let output_target = |source| ChangelogError::OutputTarget {
        path: path.to_path_buf(),
        source,
    };
    let mut out = File::create(path).map_err(output_target)?;
    out.write_all(changelog.as_bytes()).map_err(output_target)?;
    out.flush().map_err(output_target)?;
    Ok(())
}
