// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Low-level scratch-area operations. `Dagger` owns the exclusive lock
//! on the `next` generation for as long as it's alive; callers
//! normally go through [`crate::Transaction`] instead of using this
//! directly, so an unfinished transaction is never silently leaked.

use crate::error::DaggerError;
use confd_core::{ActionPhase, Entity, Generation, Priority, ScriptExt};
use confd_wire::ScratchLayout;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::os::unix::fs::symlink;
use std::os::unix::fs::OpenOptionsExt;

pub struct Dagger {
    layout: ScratchLayout,
    next_fp: File,
    current: Option<Generation>,
    next: Generation,
}

impl Dagger {
    /// Claim the next generation under `layout.root()`. Fails with
    /// [`DaggerError::TransactionInProgress`] if another claim is
    /// already open (the `next` lock file already exists).
    pub fn claim(layout: ScratchLayout) -> Result<Self, DaggerError> {
        fs::create_dir_all(layout.root())?;

        let next_fp = match OpenOptions::new().write(true).create_new(true).open(layout.next_file()) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(DaggerError::TransactionInProgress { path: layout.root().to_path_buf() })
            }
            Err(err) => return Err(err.into()),
        };

        let current = read_current(&layout)?;
        let next = current.map(Generation::next).unwrap_or(Generation::FIRST);

        if let Some(current_gen) = current {
            let exit_dir = layout.generation_dir(current_gen).join("action").join("exit");
            fs::create_dir_all(&exit_dir)?;
            link_order_file(&exit_dir.join("order"), "../../top-down-order")?;
        }

        let init_dir = layout.generation_dir(next).join("action").join("init");
        fs::create_dir_all(&init_dir)?;
        link_order_file(&init_dir.join("order"), "../../bottom-up-order")?;
        fs::create_dir_all(layout.skip_dir(next))?;

        Ok(Self { layout, next_fp, current, next })
    }

    pub fn layout(&self) -> &ScratchLayout {
        &self.layout
    }

    pub fn current(&self) -> Option<Generation> {
        self.current
    }

    pub fn next(&self) -> Generation {
        self.next
    }

    /// Open (creating if necessary) an action file in the generation
    /// being built. `script` is the bare file name including
    /// extension, e.g. `"link.ip"`.
    pub fn open_next(&self, phase: ActionPhase, entity: &Entity, priority: u16, script: &str) -> Result<File, DaggerError> {
        self.open(self.next, phase, entity, priority, script)
    }

    /// Open an action file in the currently-active generation — used
    /// to stage teardown steps (`exit`) against what's live today.
    pub fn open_current(&self, phase: ActionPhase, entity: &Entity, priority: u16, script: &str) -> Result<File, DaggerError> {
        let current = self.current.ok_or(DaggerError::NoCurrentGeneration)?;
        self.open(current, phase, entity, priority, script)
    }

    fn open(&self, generation: Generation, phase: ActionPhase, entity: &Entity, priority: u16, script: &str) -> Result<File, DaggerError> {
        let priority = Priority::new(priority)?;
        let dir = self.layout.action_dir(generation, phase, entity);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}-{}", priority.file_prefix(), script));

        if path.exists() {
            return Ok(OpenOptions::new().append(true).open(path)?);
        }

        let mut file = OpenOptions::new().write(true).create(true).truncate(true).mode(0o774).open(path)?;
        if let Some(ext) = ScriptExt::from_script_name(script) {
            file.write_all(ext.shebang().as_bytes())?;
        }
        Ok(file)
    }

    /// Record that `dependent` must run after `dependee` within the
    /// generation being built.
    pub fn add_dep(&self, dependent: &Entity, dependee: &Entity) -> Result<(), DaggerError> {
        fs::create_dir_all(self.layout.dag_entity_dir(self.next, dependent))?;
        let link = self.layout.dag_edge_link(self.next, dependent, dependee);
        if link.exists() {
            return Ok(());
        }
        symlink(format!("../{}", dependee.node_name()), link)?;
        Ok(())
    }

    /// Register `entity` in the dependency graph even if it has no
    /// edges of its own, so the runner's topological walk still visits it.
    pub fn add_node(&self, entity: &Entity) -> Result<(), DaggerError> {
        fs::create_dir_all(self.layout.dag_entity_dir(self.next, entity))?;
        Ok(())
    }

    /// Mark `entity` to be skipped by the runner in the generation
    /// being built (e.g. the non-primary end of a veth pair).
    pub fn skip(&self, entity: &Entity) -> Result<(), DaggerError> {
        let flag = self.layout.skip_flag(self.next, entity);
        if let Some(parent) = flag.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(flag)?;
        Ok(())
    }

    pub fn should_skip(&self, entity: &Entity) -> bool {
        self.layout.skip_flag(self.next, entity).exists()
    }

    pub fn should_skip_current(&self, entity: &Entity) -> bool {
        match self.current {
            Some(current) => self.layout.skip_flag(current, entity).exists(),
            None => false,
        }
    }

    /// Activate the generation being built: write the lock file's
    /// final contents, run `activate` (the generation runner) against
    /// it, then promote it to `current` and release the lock. On
    /// failure, the generation directory and lock are left behind for
    /// [`Dagger::abandon`] to clean up — `evolve` does not roll back
    /// on its own.
    pub fn evolve(
        &mut self,
        activate: impl FnOnce(&ScratchLayout, Generation) -> Result<(), Box<dyn std::error::Error + Send + Sync>>,
    ) -> Result<(), DaggerError> {
        self.write_next_marker()?;
        activate(&self.layout, self.next).map_err(DaggerError::Activation)?;
        self.promote_current()?;
        self.remove_next_lock()?;
        Ok(())
    }

    /// Discard the generation being built. `current` is left exactly
    /// as it was.
    pub fn abandon(&mut self) -> Result<(), DaggerError> {
        let _ = self.remove_next_lock();
        match fs::remove_dir_all(self.layout.generation_dir(self.next)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Try to evolve; on any failure, abandon instead, returning the
    /// original error.
    pub fn evolve_or_abandon(
        &mut self,
        activate: impl FnOnce(&ScratchLayout, Generation) -> Result<(), Box<dyn std::error::Error + Send + Sync>>,
    ) -> Result<(), DaggerError> {
        match self.evolve(activate) {
            Ok(()) => Ok(()),
            Err(err) => {
                let _ = self.abandon();
                Err(err)
            }
        }
    }

    fn write_next_marker(&mut self) -> Result<(), DaggerError> {
        self.next_fp.seek(SeekFrom::Start(0))?;
        self.next_fp.set_len(0)?;
        writeln!(self.next_fp, "{}", self.next.0)?;
        self.next_fp.sync_all()?;
        Ok(())
    }

    fn promote_current(&self) -> Result<(), DaggerError> {
        let staging = self.layout.current_file().with_extension("next");
        fs::write(&staging, format!("{}\n", self.next.0))?;
        fs::rename(&staging, self.layout.current_file())?;
        Ok(())
    }

    fn remove_next_lock(&self) -> Result<(), DaggerError> {
        match fs::remove_file(self.layout.next_file()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn link_order_file(link: &std::path::Path, target: &str) -> Result<(), DaggerError> {
    if link.exists() {
        return Ok(());
    }
    symlink(target, link)?;
    Ok(())
}

fn read_current(layout: &ScratchLayout) -> Result<Option<Generation>, DaggerError> {
    match fs::read_to_string(layout.current_file()) {
        Ok(text) => {
            let n: u64 = text.trim().parse().map_err(|_| {
                DaggerError::Io(io::Error::new(io::ErrorKind::InvalidData, "corrupt current-generation marker"))
            })?;
            Ok(Some(Generation::from(n)))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[path = "dagger_tests.rs"]
mod tests;
