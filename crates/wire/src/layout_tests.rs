// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use confd_core::{Entity, EntityKind};

fn eth0() -> Entity {
    Entity::new(EntityKind::Interface, "eth0").unwrap()
}

#[test]
fn current_and_next_live_directly_under_root() {
    let layout = ScratchLayout::new("/scratch");
    assert_eq!(layout.current_file(), Path::new("/scratch/current"));
    assert_eq!(layout.next_file(), Path::new("/scratch/next"));
}

#[test]
fn action_dir_is_namespaced_by_generation_phase_and_entity() {
    let layout = ScratchLayout::new("/scratch");
    let dir = layout.action_dir(Generation::from(3), ActionPhase::Init, &eth0());
    assert_eq!(dir, Path::new("/scratch/3/action/init/eth0"));
}

#[test]
fn dag_edge_link_points_at_dependee_under_dependents_dir() {
    let layout = ScratchLayout::new("/scratch");
    let bridge = Entity::new(EntityKind::Interface, "br0").unwrap();
    let link = layout.dag_edge_link(Generation::from(1), &eth0(), &bridge);
    assert_eq!(link, Path::new("/scratch/1/dag/eth0/br0"));
}

#[test]
fn skip_flag_is_under_the_generations_skip_dir() {
    let layout = ScratchLayout::new("/scratch");
    let flag = layout.skip_flag(Generation::from(2), &eth0());
    assert_eq!(flag, Path::new("/scratch/2/skip/eth0"));
}

#[test]
fn rdeps_and_deps_are_distinct_files() {
    let layout = ScratchLayout::new("/scratch");
    let gen = Generation::from(7);
    assert_ne!(layout.deps_file(gen), layout.rdeps_file(gen));
}
