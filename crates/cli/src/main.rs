// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Parser;
use confd_cli::{generation_status, list_entities, show_actions, Cli, Command};
use confd_core::{Entity, Generation};
use confd_wire::ScratchLayout;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let layout = ScratchLayout::new(cli.scratch_root);

    match cli.command {
        Command::Status => print_status(&layout),
        Command::List { generation } => print_list(&layout, resolve_generation(&layout, generation)?),
        Command::Show { entity, generation } => {
            let entity = Entity::from_node_name(&entity);
            print_show(&layout, resolve_generation(&layout, generation)?, &entity)
        }
    }
}

/// The generation to query defaults to whichever is currently live;
/// `--generation` overrides it for inspecting one still being built.
fn resolve_generation(layout: &ScratchLayout, explicit: Option<u64>) -> Result<Generation> {
    if let Some(value) = explicit {
        return Ok(Generation::from(value));
    }
    generation_status(layout).current.ok_or_else(|| anyhow::anyhow!("no generation has been activated yet"))
}

fn print_status(layout: &ScratchLayout) -> Result<()> {
    let status = generation_status(layout);
    match status.current {
        Some(generation) => println!("current generation: {generation}"),
        None => println!("current generation: (none activated yet)"),
    }
    match status.next {
        Some(generation) => println!("next generation:    {generation} (build in progress)"),
        None => println!("next generation:    (none)"),
    }
    Ok(())
}

fn print_list(layout: &ScratchLayout, generation: Generation) -> Result<()> {
    let entities = list_entities(layout, generation)?;
    if entities.is_empty() {
        println!("no entities staged in generation {generation}");
        return Ok(());
    }
    println!("entities staged in generation {generation}:");
    for entity in &entities {
        println!("  {}", entity.node_name());
    }
    Ok(())
}

fn print_show(layout: &ScratchLayout, generation: Generation, entity: &Entity) -> Result<()> {
    let files = show_actions(layout, generation, entity)?;
    if files.is_empty() {
        println!("no staged actions for {} in generation {generation}", entity.node_name());
        return Ok(());
    }
    for (phase, path) in &files {
        println!("[{phase}] {}", path.display());
    }
    Ok(())
}
