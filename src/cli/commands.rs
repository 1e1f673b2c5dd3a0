//! Command dispatch: loads settings and the family, then answers one query.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::KinshipService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{FamilyTree, TreeNodeConvert};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };

    if let Commands::Completion { shell } = command {
        return _completion(*shell);
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let service = KinshipService::new(settings);

    if let Commands::Config { command } = command {
        return _config(&service, command);
    }

    let family = service.load_family(cli.file.as_deref())?;
    match command {
        Commands::Cousin { a, b } => _cousin(&service, &family, a, b),
        Commands::Parent { parent, child } => _parent(&family, parent, child),
        Commands::Child { child, parent } => _child(&family, child, parent),
        Commands::Descendant {
            descendant,
            ancestor,
        } => _descendant(&family, descendant, ancestor),
        Commands::Distance { name } => _distance(&family, name),
        Commands::Ancestor { a, b } => _ancestor(&family, a, b),
        Commands::Lineage { name } => _lineage(&family, name),
        Commands::Tree => _tree(&family),
        Commands::Leaves => _leaves(&family),
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

#[instrument(skip(service, family))]
fn _cousin(service: &KinshipService, family: &FamilyTree, a: &str, b: &str) -> CliResult<()> {
    let kinship = family.cousin_classification(a, b)?;
    output::action(
        &format!("'{}' is a {} from '{}'", a, service.describe(&kinship), b),
        &format!("({}, {})", kinship.cousin_type, kinship.degree_removed),
    );
    Ok(())
}

#[instrument(skip(family))]
fn _parent(family: &FamilyTree, parent: &str, child: &str) -> CliResult<()> {
    let yes = family.is_parent(parent, child)?;
    output::answer(yes, &format!("'{}' is parent of '{}'", parent, child));
    Ok(())
}

#[instrument(skip(family))]
fn _child(family: &FamilyTree, child: &str, parent: &str) -> CliResult<()> {
    let yes = family.is_child(child, parent)?;
    output::answer(yes, &format!("'{}' is child of '{}'", child, parent));
    Ok(())
}

#[instrument(skip(family))]
fn _descendant(family: &FamilyTree, descendant: &str, ancestor: &str) -> CliResult<()> {
    let yes = family.is_descendant(descendant, ancestor)?;
    output::answer(
        yes,
        &format!("'{}' descends from '{}'", descendant, ancestor),
    );
    Ok(())
}

#[instrument(skip(family))]
fn _distance(family: &FamilyTree, name: &str) -> CliResult<()> {
    output::info(&family.distance_to_root(name)?);
    Ok(())
}

#[instrument(skip(family))]
fn _ancestor(family: &FamilyTree, a: &str, b: &str) -> CliResult<()> {
    output::info(family.common_ancestor(a, b)?);
    Ok(())
}

#[instrument(skip(family))]
fn _lineage(family: &FamilyTree, name: &str) -> CliResult<()> {
    output::info(&family.lineage(name)?.join(" <- "));
    Ok(())
}

#[instrument(skip(family))]
fn _tree(family: &FamilyTree) -> CliResult<()> {
    output::header(&format!(
        "{} members, {} generations:",
        family.len(),
        family.depth()
    ));
    output::info(&family.to_tree_string());
    Ok(())
}

#[instrument(skip(family))]
fn _leaves(family: &FamilyTree) -> CliResult<()> {
    for leaf in family.leaf_names() {
        output::info(leaf);
    }
    Ok(())
}

#[instrument(skip(service))]
fn _config(service: &KinshipService, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&service.settings().to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                let state = if path.exists() { "exists" } else { "not found" };
                output::action(state, &path.display());
            }
            None => output::detail("no config directory available"),
        },
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
