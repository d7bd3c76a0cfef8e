// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure path arithmetic over the generational scratch area:
//!
//! ```text
//! <root>/current                         -> which generation is live
//! <root>/next                            -> exclusive lock for the generation being built
//! <root>/<gen>/action/<phase>/<entity>/<NN>-<script>.<ext>
//! <root>/<gen>/dag/<entity>/<dependee>   -> symlink
//! <root>/<gen>/skip/<entity>             -> flag file
//! <root>/<gen>/rdeps                     -> reverse-dependency order, written once activated
//! <root>/<gen>/bottom-up-order, top-down-order
//! ```
//!
//! Nothing here touches the filesystem; `confd-dagger` and
//! `confd-runner` do the I/O, this crate only computes paths.

use confd_core::{ActionPhase, Entity, Generation};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchLayout {
    root: PathBuf,
}

impl ScratchLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current_file(&self) -> PathBuf {
        self.root.join("current")
    }

    pub fn next_file(&self) -> PathBuf {
        self.root.join("next")
    }

    pub fn generation_dir(&self, generation: Generation) -> PathBuf {
        self.root.join(generation.to_string())
    }

    pub fn action_dir(&self, generation: Generation, phase: ActionPhase, entity: &Entity) -> PathBuf {
        self.generation_dir(generation).join("action").join(phase.to_string()).join(entity.node_name())
    }

    pub fn action_order_file(&self, generation: Generation, phase: ActionPhase) -> PathBuf {
        self.generation_dir(generation).join("action").join(phase.to_string()).join("order")
    }

    pub fn bottom_up_order_file(&self, generation: Generation) -> PathBuf {
        self.generation_dir(generation).join("bottom-up-order")
    }

    pub fn top_down_order_file(&self, generation: Generation) -> PathBuf {
        self.generation_dir(generation).join("top-down-order")
    }

    pub fn dag_dir(&self, generation: Generation) -> PathBuf {
        self.generation_dir(generation).join("dag")
    }

    pub fn dag_entity_dir(&self, generation: Generation, entity: &Entity) -> PathBuf {
        self.dag_dir(generation).join(entity.node_name())
    }

    pub fn dag_edge_link(&self, generation: Generation, dependent: &Entity, dependee: &Entity) -> PathBuf {
        self.dag_entity_dir(generation, dependent).join(dependee.node_name())
    }

    pub fn skip_dir(&self, generation: Generation) -> PathBuf {
        self.generation_dir(generation).join("skip")
    }

    pub fn skip_flag(&self, generation: Generation, entity: &Entity) -> PathBuf {
        self.skip_dir(generation).join(entity.node_name())
    }

    pub fn deps_file(&self, generation: Generation) -> PathBuf {
        self.generation_dir(generation).join("deps")
    }

    pub fn rdeps_file(&self, generation: Generation) -> PathBuf {
        self.generation_dir(generation).join("rdeps")
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
