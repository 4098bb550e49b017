use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const SCRIPT_AFTER_HELP: &str = "\
If no template PDB or trajectory is given on the command line or in the configuration
file, the program asks for them on standard input.

If a question mark (?) is given as the vector tag, all available vector tags are printed.";

#[derive(Parser, Debug)]
#[command(
    author = "Samuel Genheden",
    version,
    about = "iredgen - Create cpptraj input for iRED order-parameter analysis of MD trajectories.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output (errors are still reported on exit)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a cpptraj input script that runs an iRED analysis on the selected bond vectors.
    Script(ScriptArgs),
    /// List the available bond vector tags.
    List,
    /// Export the selected bond vectors of a PDB file as a CSV table.
    Export(ExportArgs),
}

/// Arguments for the `script` subcommand.
#[derive(Args, Debug)]
#[command(after_help = SCRIPT_AFTER_HELP)]
pub struct ScriptArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Template PDB file; vectors are read from it and it becomes the cpptraj topology.
    #[arg(short, long = "pdbfile", value_name = "PATH")]
    pub pdb: Option<PathBuf>,

    /// Trajectories to analyse, in order.
    #[arg(short = 't', long = "trajectory", value_name = "PATH", num_args = 1..)]
    pub trajectories: Vec<PathBuf>,

    /// The bond vectors to analyse (e.g., 'nh', 'me'). Use '?' to list the tags.
    #[arg(short = 'k', long, value_name = "TAG")]
    pub vectors: Option<String>,

    /// Prefix of the cpptraj output files (order parameters go to '<PREFIX>_s2').
    #[arg(short, long, value_name = "PREFIX")]
    pub output: Option<String>,

    /// Order of the Legendre polynomial used by the iRED analysis.
    #[arg(long, value_name = "INT")]
    pub order: Option<u32>,

    /// Write the script to this file instead of standard output.
    #[arg(long, value_name = "PATH")]
    pub out_file: Option<PathBuf>,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// PDB file to read the residues from.
    #[arg(short, long = "pdbfile", required = true, value_name = "PATH")]
    pub pdb: PathBuf,

    /// The bond vectors to export.
    #[arg(short = 'k', long, required = true, value_name = "TAG")]
    pub vectors: String,

    /// Write the table to this file instead of standard output.
    #[arg(long, value_name = "PATH")]
    pub out_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn script_accepts_multiple_trajectories() {
        let cli = Cli::parse_from([
            "iredgen", "script", "-p", "prot.pdb", "-t", "a.nc", "b.nc", "-k", "me",
        ]);
        let Commands::Script(args) = cli.command else {
            panic!("Expected 'script' subcommand");
        };
        assert_eq!(args.pdb, Some(PathBuf::from("prot.pdb")));
        assert_eq!(
            args.trajectories,
            [PathBuf::from("a.nc"), PathBuf::from("b.nc")]
        );
        assert_eq!(args.vectors.as_deref(), Some("me"));
        assert!(args.output.is_none());
    }

    #[test]
    fn script_arguments_are_all_optional() {
        let cli = Cli::parse_from(["iredgen", "script"]);
        let Commands::Script(args) = cli.command else {
            panic!("Expected 'script' subcommand");
        };
        assert!(args.pdb.is_none());
        assert!(args.trajectories.is_empty());
        assert!(args.vectors.is_none());
    }

    #[test]
    fn global_verbosity_is_counted_after_subcommand() {
        let cli = Cli::parse_from(["iredgen", "list", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["iredgen", "-q", "-v", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn export_requires_pdb_and_tag() {
        assert!(Cli::try_parse_from(["iredgen", "export", "-k", "nh"]).is_err());
        assert!(Cli::try_parse_from(["iredgen", "export", "-p", "x.pdb"]).is_err());
        assert!(Cli::try_parse_from(["iredgen", "export", "-p", "x.pdb", "-k", "nh"]).is_ok());
    }
}
