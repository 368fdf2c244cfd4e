use std::path::PathBuf;

use clap::Parser;
use hono_rewrite::ConvertError;

/// Converts a supertest-based test file to Hono `app.request()` calls.
#[derive(Debug, Parser, Clone)]
#[clap(version, author)]
pub struct CLIOpts {
    /// Test file to read the supertest version from.
    #[clap(
        long,
        env = "HONO_REWRITE_INPUT",
        default_value = "tests/integration/api/graph.test.ts.backup"
    )]
    pub input: PathBuf,
    /// Where to write the converted test file. Overwritten if it exists.
    #[clap(
        long,
        env = "HONO_REWRITE_OUTPUT",
        default_value = "tests/integration/api/graph.test.ts"
    )]
    pub output: PathBuf,
}

mod logging;
mod transform;

fn main() -> Result<(), ConvertError> {
    let opts = CLIOpts::parse();
    logging::init();

    transform::transform(&opts.input, &opts.output, &mut std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_paths() {
        let opts = CLIOpts::parse_from(["convert-test", "--input", "a.ts", "--output", "b.ts"]);
        assert_eq!(opts.input, PathBuf::from("a.ts"));
        assert_eq!(opts.output, PathBuf::from("b.ts"));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        CLIOpts::command().debug_assert();
    }
}
