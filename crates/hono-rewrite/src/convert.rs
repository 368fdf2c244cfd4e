use std::{fs, path::Path};

use tracing::info;
use tracing_attributes::instrument;

use crate::{
    error::ConvertError,
    rewriter::{RewriteReport, rewrite_with_report},
};

/// Reads `input`, rewrites it and writes the result to `output`.
///
/// CRLF line endings are read as LF, so the output always uses LF. The output is
/// created or overwritten. Nothing is written if `input` can't be read.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn convert_file(input: &Path, output: &Path) -> Result<RewriteReport, ConvertError> {
    let content = fs::read_to_string(input)
        .map_err(|source| ConvertError::Read {
            path: input.to_path_buf(),
            source,
        })?
        .replace("\r\n", "\n");

    let (converted, report) = rewrite_with_report(&content);
    info!(replacements = report.total(), "rewrote test source");

    fs::write(output, converted).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(report)
}
