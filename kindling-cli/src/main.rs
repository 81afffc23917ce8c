//! Command-line entry point for the kindling importer

use clap::Parser;
use kindling_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(
    name = "kindling",
    version,
    about = "Import and inspect e-reader clipping exports",
    long_about = "Reads `My Clippings.txt` style exports, decodes their metadata lines \
across ten device languages, and renders the result as text, JSON, or markdown."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_an_import_invocation() {
        let cli = Cli::try_parse_from(["kindling", "import", "-i", "clippings.txt", "--strict"])
            .unwrap();
        match cli.command {
            Commands::Import(args) => {
                assert_eq!(args.input, vec!["clippings.txt"]);
                assert!(args.strict);
            }
            other => panic!("expected import, got {other:?}"),
        }
    }

    #[test]
    fn cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["kindling"]).is_err());
    }
}
