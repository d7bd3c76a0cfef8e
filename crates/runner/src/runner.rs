// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execute one generation transition: deactivate the outgoing
//! generation, then activate the incoming one, streaming `.ip`/
//! `.bridge` action files into two long-lived batch pipes and
//! spawning `.sh`/`.sysctl` files directly.
//!
//! This is the `activate` callback `confd_dagger::Dagger::evolve`
//! invokes — it never touches `<root>/current` or `<root>/next`
//! itself, that's the dagger's job once this returns `Ok`.

use crate::batch_pipe::BatchPipe;
use crate::error::RunnerError;
use crate::topo::{topo_order, Direction};
use confd_core::{ActionPhase, Entity, Generation, ScriptExt};
use confd_shell::SpawnError;
use confd_wire::{interpreter_for, ScratchLayout};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub actions_run: usize,
    pub actions_failed: usize,
}

const IP_ARGV: &[&str] = &["/sbin/ip", "-force", "-batch", "-"];
const BRIDGE_ARGV: &[&str] = &["/sbin/bridge", "-force", "-batch", "-"];

/// Run the full phase sequence for the transition into `new_gen`,
/// logging individual action failures rather than stopping the run.
/// Only a failure to open either batch pipe, or the two pipes
/// themselves failing to be waited on, is fatal.
pub fn run(layout: &ScratchLayout, new_gen: Generation) -> Result<RunSummary, RunnerError> {
    run_with_pipes(layout, new_gen, IP_ARGV, BRIDGE_ARGV)
}

/// Same as [`run`], but with the batch-pipe commands overridable —
/// lets tests substitute `cat`/`true` for `/sbin/ip`/`/sbin/bridge`
/// without touching the real network stack.
pub(crate) fn run_with_pipes(layout: &ScratchLayout, new_gen: Generation, ip_argv: &[&str], bridge_argv: &[&str]) -> Result<RunSummary, RunnerError> {
    let previous_gen = read_current(layout);
    let mut summary = RunSummary::default();

    let exit_order = match previous_gen {
        Some(previous) => exit_order_for(layout, previous)?,
        None => Vec::new(),
    };
    let init_order = topo_order(&layout.dag_dir(new_gen), Direction::BottomUp)?;

    let (mut ip_pipe, mut bridge_pipe) = match open_pipes(ip_argv, bridge_argv) {
        Ok(pipes) => pipes,
        Err(err) => {
            if let Some(previous) = previous_gen {
                restore_previous(layout, previous, ip_argv, bridge_argv);
            }
            return Err(RunnerError::Fatal(Box::new(RunnerError::Spawn(err))));
        }
    };

    if let Some(previous) = previous_gen {
        run_pipe_phase(layout, previous, ActionPhase::Exit, &exit_order, &[ScriptExt::Bridge], &mut bridge_pipe, &mut summary)?;
        run_pipe_phase(layout, previous, ActionPhase::Exit, &exit_order, &[ScriptExt::Ip], &mut ip_pipe, &mut summary)?;
        run_spawn_phase(layout, previous, ActionPhase::Exit, &exit_order, &mut summary);
    }

    run_spawn_phase(layout, new_gen, ActionPhase::Init, &init_order, &mut summary);
    run_pipe_phase(layout, new_gen, ActionPhase::Init, &init_order, &[ScriptExt::Ip], &mut ip_pipe, &mut summary)?;
    run_pipe_phase(layout, new_gen, ActionPhase::Init, &init_order, &[ScriptExt::Bridge], &mut bridge_pipe, &mut summary)?;

    let ip_result = ip_pipe.finish();
    let bridge_result = bridge_pipe.finish();
    let (ip_code, bridge_code) = match (ip_result, bridge_result) {
        (Ok(ip_code), Ok(bridge_code)) => (ip_code, bridge_code),
        (ip_res, bridge_res) => {
            if let Some(previous) = previous_gen {
                restore_previous(layout, previous, ip_argv, bridge_argv);
            }
            let spawn_err = ip_res.err().or(bridge_res.err()).unwrap_or_else(|| SpawnError::Wait {
                program: "batch-pipe".to_string(),
                source: io::Error::new(io::ErrorKind::Other, "unknown batch pipe failure"),
            });
            return Err(RunnerError::Fatal(Box::new(RunnerError::Spawn(spawn_err))));
        }
    };
    if ip_code != 0 {
        summary.actions_failed += 1;
        warn!(exit_code = ip_code, "ip batch pipe exited non-zero");
    }
    if bridge_code != 0 {
        summary.actions_failed += 1;
        warn!(exit_code = bridge_code, "bridge batch pipe exited non-zero");
    }

    let rdeps_order = topo_order(&layout.dag_dir(new_gen), Direction::TopDown)?;
    write_rdeps(layout, new_gen, &rdeps_order)?;

    Ok(summary)
}

fn open_pipes(ip_argv: &[&str], bridge_argv: &[&str]) -> Result<(BatchPipe, BatchPipe), SpawnError> {
    let ip = open_one(ip_argv)?;
    let bridge = open_one(bridge_argv)?;
    Ok((ip, bridge))
}

fn open_one(argv: &[&str]) -> Result<BatchPipe, SpawnError> {
    let Some((&program, args)) = argv.split_first() else {
        return Err(SpawnError::Spawn {
            program: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty batch pipe argv"),
        });
    };
    BatchPipe::open(program, args)
}

/// Best-effort attempt to bring the system back to the previous
/// generation's state after a fatal failure. Every error here is
/// logged and swallowed — this function exists to leave the box less
/// broken than it would be otherwise, not to report more failures.
fn restore_previous(layout: &ScratchLayout, previous: Generation, ip_argv: &[&str], bridge_argv: &[&str]) {
    warn!(generation = %previous, "attempting to restore service by re-running the previous generation's init actions");
    let order = match topo_order(&layout.dag_dir(previous), Direction::BottomUp) {
        Ok(order) => order,
        Err(err) => {
            warn!(error = %err, "failed to compute restore order");
            return;
        }
    };
    let mut summary = RunSummary::default();
    run_spawn_phase(layout, previous, ActionPhase::Init, &order, &mut summary);
    if let Ok((mut ip_pipe, mut bridge_pipe)) = open_pipes(ip_argv, bridge_argv) {
        if let Err(err) = run_pipe_phase(layout, previous, ActionPhase::Init, &order, &[ScriptExt::Ip], &mut ip_pipe, &mut summary) {
            warn!(error = %err, "restore: failed feeding ip batch pipe");
        }
        if let Err(err) = run_pipe_phase(layout, previous, ActionPhase::Init, &order, &[ScriptExt::Bridge], &mut bridge_pipe, &mut summary) {
            warn!(error = %err, "restore: failed feeding bridge batch pipe");
        }
        let _ = ip_pipe.finish();
        let _ = bridge_pipe.finish();
    }
}

fn exit_order_for(layout: &ScratchLayout, previous: Generation) -> Result<Vec<Entity>, RunnerError> {
    match fs::read_to_string(layout.rdeps_file(previous)) {
        Ok(text) => Ok(text.lines().filter(|line| !line.is_empty()).map(Entity::from_node_name).collect()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => topo_order(&layout.dag_dir(previous), Direction::TopDown),
        Err(err) => Err(err.into()),
    }
}

fn write_rdeps(layout: &ScratchLayout, generation: Generation, order: &[Entity]) -> Result<(), RunnerError> {
    let text = order.iter().map(Entity::node_name).collect::<Vec<_>>().join("\n");
    Ok(fs::write(layout.rdeps_file(generation), text)?)
}

fn run_pipe_phase(
    layout: &ScratchLayout,
    generation: Generation,
    phase: ActionPhase,
    order: &[Entity],
    exts: &[ScriptExt],
    pipe: &mut BatchPipe,
    summary: &mut RunSummary,
) -> Result<(), RunnerError> {
    for entity in order {
        if layout.skip_flag(generation, entity).exists() {
            continue;
        }
        let dir = layout.action_dir(generation, phase, entity);
        for (path, _ext) in collect_bucket(&dir, exts)? {
            let contents = fs::read(&path)?;
            pipe.feed(&contents)?;
            summary.actions_run += 1;
        }
    }
    Ok(())
}

fn run_spawn_phase(layout: &ScratchLayout, generation: Generation, phase: ActionPhase, order: &[Entity], summary: &mut RunSummary) {
    for entity in order {
        if layout.skip_flag(generation, entity).exists() {
            continue;
        }
        let dir = layout.action_dir(generation, phase, entity);
        let files = match collect_bucket(&dir, &[ScriptExt::Sh, ScriptExt::Sysctl]) {
            Ok(files) => files,
            Err(err) => {
                warn!(error = %err, path = %dir.display(), "failed to read action directory");
                continue;
            }
        };
        for (path, ext) in files {
            run_one_spawn(&path, ext, summary);
        }
    }
}

fn run_one_spawn(path: &Path, ext: ScriptExt, summary: &mut RunSummary) {
    let Some((&program, fixed_args)) = interpreter_for(ext).split_first() else {
        warn!(path = %path.display(), "interpreter has no program name, skipping");
        return;
    };
    let mut args: Vec<&OsStr> = fixed_args.iter().map(OsStr::new).collect();
    args.push(path.as_os_str());

    match confd_shell::run(program, &args) {
        Ok(outcome) => {
            summary.actions_run += 1;
            if !outcome.success() {
                summary.actions_failed += 1;
                warn!(path = %path.display(), exit_code = outcome.exit_code, stderr = %outcome.stderr, "action exited non-zero");
            }
        }
        Err(err) => {
            summary.actions_failed += 1;
            warn!(path = %path.display(), error = %err, "failed to spawn action");
        }
    }
}

fn priority_prefix(file_name: &str) -> Option<u8> {
    let (prefix, _) = file_name.split_once('-')?;
    prefix.parse().ok()
}

fn collect_bucket(dir: &Path, exts: &[ScriptExt]) -> Result<Vec<(PathBuf, ScriptExt)>, RunnerError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut files: Vec<(PathBuf, ScriptExt, u8)> = fs::read_dir(dir)
        .map_err(|source| RunnerError::ReadDir { path: dir.to_path_buf(), source })?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let ext = ScriptExt::from_script_name(&name)?;
            if !exts.contains(&ext) {
                return None;
            }
            let priority = priority_prefix(&name).unwrap_or(u8::MAX);
            Some((entry.path(), ext, priority))
        })
        .collect();
    files.sort_by_key(|(_, _, priority)| *priority);
    Ok(files.into_iter().map(|(path, ext, _)| (path, ext)).collect())
}

fn read_current(layout: &ScratchLayout) -> Option<Generation> {
    let text = fs::read_to_string(layout.current_file()).ok()?;
    let n: u64 = text.trim().parse().ok()?;
    Some(Generation::from(n))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
