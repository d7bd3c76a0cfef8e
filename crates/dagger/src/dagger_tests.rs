// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use confd_core::EntityKind;
use proptest::prelude::*;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

fn layout_in(dir: &std::path::Path) -> ScratchLayout {
    ScratchLayout::new(dir.join("scratch"))
}

fn eth0() -> Entity {
    Entity::new(EntityKind::Interface, "eth0").unwrap()
}

#[test]
fn claim_creates_next_lock_and_init_dirs() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let dagger = Dagger::claim(layout.clone()).unwrap();

    assert!(layout.next_file().exists());
    assert_eq!(dagger.current(), None);
    assert_eq!(dagger.next(), Generation::FIRST);
    assert!(layout.generation_dir(Generation::FIRST).join("action/init/order").exists());
}

#[test]
fn second_claim_while_first_is_open_fails() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let _first = Dagger::claim(layout.clone()).unwrap();

    let err = Dagger::claim(layout).unwrap_err();
    assert!(matches!(err, DaggerError::TransactionInProgress { .. }));
}

#[test]
fn open_next_writes_shebang_once_and_appends_after() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let dagger = Dagger::claim(layout).unwrap();

    {
        let mut f = dagger.open_next(ActionPhase::Init, &eth0(), 10, "link.ip").unwrap();
        writeln!(f, "link set eth0 up").unwrap();
    }
    {
        let mut f = dagger.open_next(ActionPhase::Init, &eth0(), 10, "link.ip").unwrap();
        writeln!(f, "addr add 192.0.2.1/24 dev eth0").unwrap();
    }

    let path = dagger.layout().action_dir(Generation::FIRST, ActionPhase::Init, &eth0()).join("10-link.ip");
    let contents = fs::read_to_string(path).unwrap();
    assert_eq!(contents.matches("#!/sbin/ip -batch").count(), 1);
    assert!(contents.contains("link set eth0 up"));
    assert!(contents.contains("addr add 192.0.2.1/24 dev eth0"));
}

#[test]
fn created_action_files_are_mode_0774() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let dagger = Dagger::claim(layout).unwrap();
    drop(dagger.open_next(ActionPhase::Init, &eth0(), 10, "link.ip").unwrap());

    let path = dagger.layout().action_dir(Generation::FIRST, ActionPhase::Init, &eth0()).join("10-link.ip");
    let mode = fs::metadata(path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o774);
}

#[test]
fn open_current_without_a_current_generation_errors() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let dagger = Dagger::claim(layout).unwrap();
    let err = dagger.open_current(ActionPhase::Exit, &eth0(), 10, "link.ip").unwrap_err();
    assert!(matches!(err, DaggerError::NoCurrentGeneration));
}

#[yare::parameterized(
    just_over_max = { 100 },
    far_over_max = { 65535 },
)]
fn priority_over_99_is_rejected(priority: u16) {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let dagger = Dagger::claim(layout).unwrap();
    let err = dagger.open_next(ActionPhase::Init, &eth0(), priority, "link.ip").unwrap_err();
    assert!(matches!(err, DaggerError::InvalidAddressing(_)));
}

proptest! {
    #[test]
    fn action_files_sort_by_numeric_prefix_not_lexical(priorities in proptest::collection::vec(0u16..=99, 2..8)) {
        let dir = tempdir().unwrap();
        let layout = layout_in(dir.path());
        let dagger = Dagger::claim(layout).unwrap();

        for (i, priority) in priorities.iter().enumerate() {
            drop(dagger.open_next(ActionPhase::Init, &eth0(), *priority, &format!("step{i}.sh")).unwrap());
        }

        let action_dir = dagger.layout().action_dir(Generation::FIRST, ActionPhase::Init, &eth0());
        let mut names: Vec<String> = fs::read_dir(&action_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n != "order")
            .collect();
        names.sort();

        let mut expected_prefixes: Vec<u16> = priorities.clone();
        expected_prefixes.sort_unstable();
        let actual_prefixes: Vec<u16> = names
            .iter()
            .map(|n| n.split('-').next().unwrap().parse().unwrap())
            .collect();
        prop_assert_eq!(actual_prefixes, expected_prefixes);
    }
}

#[test]
fn add_dep_creates_a_relative_symlink() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let dagger = Dagger::claim(layout).unwrap();
    let br0 = Entity::new(EntityKind::Interface, "br0").unwrap();

    dagger.add_dep(&eth0(), &br0).unwrap();

    let link = dagger.layout().dag_edge_link(Generation::FIRST, &eth0(), &br0);
    let target = fs::read_link(link).unwrap();
    assert_eq!(target, std::path::Path::new("../br0"));
}

#[test]
fn skip_marks_an_entity_for_the_generation_being_built() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let dagger = Dagger::claim(layout).unwrap();

    assert!(!dagger.should_skip(&eth0()));
    dagger.skip(&eth0()).unwrap();
    assert!(dagger.should_skip(&eth0()));
}

#[test]
fn evolve_runs_the_activation_closure_and_promotes_current() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let mut dagger = Dagger::claim(layout.clone()).unwrap();

    let activated = std::cell::Cell::new(None);
    dagger
        .evolve(|_layout, gen| {
            activated.set(Some(gen));
            Ok(())
        })
        .unwrap();

    assert_eq!(activated.get(), Some(Generation::FIRST));
    assert_eq!(fs::read_to_string(layout.current_file()).unwrap().trim(), "1");
    assert!(!layout.next_file().exists());
}

#[test]
fn evolve_failure_leaves_the_generation_for_abandon() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());
    let mut dagger = Dagger::claim(layout.clone()).unwrap();

    let err = dagger
        .evolve(|_layout, _gen| Err("runner blew up".into()))
        .unwrap_err();
    assert!(matches!(err, DaggerError::Activation(_)));
    assert!(layout.generation_dir(Generation::FIRST).exists());

    dagger.abandon().unwrap();
    assert!(!layout.generation_dir(Generation::FIRST).exists());
    assert!(!layout.next_file().exists());
}

#[test]
fn abandon_leaves_current_untouched() {
    let dir = tempdir().unwrap();
    let layout = layout_in(dir.path());

    let mut first = Dagger::claim(layout.clone()).unwrap();
    first.evolve(|_, _| Ok(())).unwrap();

    let mut second = Dagger::claim(layout.clone()).unwrap();
    assert_eq!(second.current(), Some(Generation::FIRST));
    second.abandon().unwrap();

    assert_eq!(fs::read_to_string(layout.current_file()).unwrap().trim(), "1");
}
