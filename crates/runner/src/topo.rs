// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Topological ordering over one generation's `dag/` directory.
//!
//! Edges are read straight off the filesystem: `dag/<entity>/<dependee>`
//! is a symlink recording that `entity` must run after `dependee` at
//! init (and before it at exit). Kahn's algorithm, seeded in
//! `read_dir` order so ties are resolved the same way on every run on
//! a given filesystem — cycles are not detected, a malformed DAG is a
//! translator bug, not a runtime condition to recover from.

use crate::error::RunnerError;
use confd_core::Entity;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Dependees before dependents — the order init actions run in.
    BottomUp,
    /// Dependents before dependees — the order exit actions run in.
    TopDown,
}

/// Read `dag_dir` and return every entity it names, in the order
/// `direction` demands.
pub fn topo_order(dag_dir: &Path, direction: Direction) -> Result<Vec<Entity>, RunnerError> {
    if !dag_dir.exists() {
        return Ok(Vec::new());
    }

    let mut order: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    // dependee -> dependents, in discovery order.
    let mut dependents: HashMap<String, Vec<String>> = HashMap::new();
    let mut indegree: HashMap<String, usize> = HashMap::new();

    let mut entity_dirs: Vec<_> = fs::read_dir(dag_dir)
        .map_err(|source| RunnerError::ReadDir { path: dag_dir.to_path_buf(), source })?
        .filter_map(|e| e.ok())
        .collect();
    entity_dirs.sort_by_key(|e| e.file_name());

    for entry in &entity_dirs {
        let name = entry.file_name().to_string_lossy().into_owned();
        if seen.insert(name.clone()) {
            order.push(name.clone());
        }
        indegree.entry(name.clone()).or_insert(0);

        let mut edges: Vec<_> = fs::read_dir(entry.path())
            .map_err(|source| RunnerError::ReadDir { path: entry.path(), source })?
            .filter_map(|e| e.ok())
            .collect();
        edges.sort_by_key(|e| e.file_name());

        for edge in edges {
            let dependee = edge.file_name().to_string_lossy().into_owned();
            if seen.insert(dependee.clone()) {
                order.push(dependee.clone());
            }
            dependents.entry(dependee).or_default().push(name.clone());
            *indegree.entry(name.clone()).or_insert(0) += 1;
        }
    }

    // Seed the queue with zero-indegree nodes in first-discovered order.
    let mut queue: VecDeque<String> = order.iter().filter(|n| indegree.get(*n).copied().unwrap_or(0) == 0).cloned().collect();
    let mut remaining = indegree.clone();
    let mut bottom_up = Vec::with_capacity(order.len());

    while let Some(name) = queue.pop_front() {
        bottom_up.push(name.clone());
        if let Some(next) = dependents.get(&name) {
            for dependent in next {
                if let Some(count) = remaining.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(dependent.clone());
                    }
                }
            }
        }
    }

    // Any node left unvisited (a cycle) is appended in discovery order
    // rather than dropped — cycle detection isn't attempted here, but
    // every entity's actions still need to run once.
    for name in &order {
        if !bottom_up.contains(name) {
            bottom_up.push(name.clone());
        }
    }

    let names = match direction {
        Direction::BottomUp => bottom_up,
        Direction::TopDown => {
            let mut reversed = bottom_up;
            reversed.reverse();
            reversed
        }
    };

    Ok(names.iter().map(|n| Entity::from_node_name(n)).collect())
}

#[cfg(test)]
#[path = "topo_tests.rs"]
mod tests;
