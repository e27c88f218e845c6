// src/cli.rs

use clap::Parser;

/// Reports GIF/JPEG statistics for a directory tree.
///
/// picstat recursively scans a directory, recognises GIF and JPEG files by
/// their header bytes, and prints an indented tree with the total size,
/// average pixel dimensions and average compression ratio of every
/// directory, plus the individual figures of every picture.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Root directory to scan (or, with --probe, any number of files/directories).
    #[arg(required = true, num_args = 1.., value_name = "PATH")]
    pub paths: Vec<String>,

    /// Print a flat per-path classification instead of the aggregated tree.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub probe: bool,

    /// Write output to the specified file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_path_is_usage_error() {
        let result = Cli::try_parse_from(["picstat"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
