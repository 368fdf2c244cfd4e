use std::{io::Write, path::Path};

use hono_rewrite::{ConvertError, convert_file};

/// Converts `input_path` into `output_path`, then reports completion on `out`.
pub fn transform(
    input_path: &Path,
    output_path: &Path,
    out: &mut impl Write,
) -> Result<(), ConvertError> {
    convert_file(input_path, output_path)?;
    writeln!(out, "Conversion complete!").map_err(ConvertError::Console)
}
