// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only queries over a [`ScratchLayout`]. None of this writes
//! anything — a running `confd-daemon` and an operator running
//! `confdc` alongside it never contend on the same files.

use confd_core::{ActionPhase, Entity, Generation};
use confd_wire::ScratchLayout;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStatus {
    pub current: Option<Generation>,
    pub next: Option<Generation>,
}

fn read_generation(path: &std::path::Path) -> Option<Generation> {
    let text = std::fs::read_to_string(path).ok()?;
    text.trim().parse::<u64>().ok().map(Generation::from)
}

pub fn generation_status(layout: &ScratchLayout) -> GenerationStatus {
    GenerationStatus { current: read_generation(&layout.current_file()), next: read_generation(&layout.next_file()) }
}

/// Every entity that has a node directory under `<generation>/dag`,
/// i.e. every entity some translator staged in that generation.
pub fn list_entities(layout: &ScratchLayout, generation: Generation) -> std::io::Result<Vec<Entity>> {
    let dir = layout.dag_dir(generation);
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut entities: Vec<Entity> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| Entity::from_node_name(&entry.file_name().to_string_lossy()))
        .collect();
    entities.sort_by_key(|e| e.node_name());
    Ok(entities)
}

/// Every staged action file for `entity` in `generation`, across both
/// the `init` and `exit` phases.
pub fn show_actions(layout: &ScratchLayout, generation: Generation, entity: &Entity) -> std::io::Result<Vec<(ActionPhase, PathBuf)>> {
    let mut files = Vec::new();
    for phase in [ActionPhase::Init, ActionPhase::Exit] {
        let dir = layout.action_dir(generation, phase, entity);
        if !dir.exists() {
            continue;
        }
        let mut entries: Vec<PathBuf> = std::fs::read_dir(&dir)?.filter_map(|entry| entry.ok()).map(|entry| entry.path()).collect();
        entries.sort();
        files.extend(entries.into_iter().map(|path| (phase, path)));
    }
    Ok(files)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
