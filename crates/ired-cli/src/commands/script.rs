use crate::cli::ScriptArgs;
use crate::commands::list;
use crate::config::{PartialScriptConfig, ScriptSettings, defaults::LIST_TAG};
use crate::error::Result;
use crate::utils::prompt;
use iredgen::workflows::ired;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub fn run(args: ScriptArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(
        args,
        &mut stdin.lock(),
        &mut io::stderr(),
        &mut stdout.lock(),
    )
}

/// Runs the `script` command with explicit streams.
///
/// Questions for missing inputs go to `prompts`, answers are read from `answers`, and the
/// script (or the tag list) goes to `out` unless an output file was requested.
pub fn run_with(
    args: ScriptArgs,
    answers: &mut impl BufRead,
    prompts: &mut impl Write,
    out: &mut impl Write,
) -> Result<()> {
    let partial = match &args.config {
        Some(path) => PartialScriptConfig::from_file(path)?,
        None => PartialScriptConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let mut settings = partial.merge_with_cli(&args);
    debug!("Merged script settings: {:?}", &settings);

    if settings.vectors == LIST_TAG {
        list::write_tags(out)?;
        return Ok(());
    }

    ask_for_missing_inputs(&mut settings, answers, prompts)?;

    let tag = settings.vectors.clone();
    let config = settings.into_core_config()?;

    info!(
        "Selecting '{}' vectors from {:?}",
        tag, &config.topology_path
    );
    let input = ired::run(&config, &tag)?;
    info!("Selected {} bond vectors.", input.vectors.len());
    if input.vectors.is_empty() {
        warn!(
            "No '{}' bond vectors found in {}; the script will analyse nothing.",
            tag,
            config.topology_path.display()
        );
    }

    match &args.out_file {
        Some(path) => {
            info!("Writing cpptraj input to {:?}", path);
            input.write_to(&mut BufWriter::new(File::create(path)?))?;
        }
        None => input.write_to(out)?,
    }
    Ok(())
}

fn ask_for_missing_inputs(
    settings: &mut ScriptSettings,
    answers: &mut impl BufRead,
    prompts: &mut impl Write,
) -> Result<()> {
    if settings.topology.is_none() {
        let answer = prompt::ask("Enter the name of a template PDB file:", answers, prompts)?;
        settings.topology = Some(PathBuf::from(answer));
    }
    if settings.trajectories.is_empty() {
        let answer = prompt::ask(
            "Enter the name of trajectory file to analyse:",
            answers,
            prompts,
        )?;
        settings.trajectories.push(PathBuf::from(answer));
    }
    Ok(())
}
