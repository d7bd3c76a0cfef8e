// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container lifecycle jobs are hard enough to act on synchronously
//! (pulling an image can take minutes) that the translator just drops
//! a job descriptor into a queue directory; some other process (a
//! container supervisor, out of scope here) is expected to drain it.

use confd_translate::{ContainerJob, JobQueue};
use confd_dispatch::TranslateError;
use std::path::PathBuf;

pub struct FileJobQueue {
    queue_dir: PathBuf,
    sequence: u64,
}

impl FileJobQueue {
    pub fn new(queue_dir: impl Into<PathBuf>) -> Self {
        Self { queue_dir: queue_dir.into(), sequence: 0 }
    }

    fn job_name(job: ContainerJob) -> &'static str {
        match job {
            ContainerJob::Start => "start",
            ContainerJob::Stop => "stop",
            ContainerJob::Restart => "restart",
        }
    }
}

impl JobQueue for FileJobQueue {
    fn enqueue(&mut self, container: &str, job: ContainerJob) -> Result<(), TranslateError> {
        std::fs::create_dir_all(&self.queue_dir)?;
        self.sequence += 1;
        let path = self.queue_dir.join(format!("{:020}-{container}.json", self.sequence));
        let body = serde_json::json!({ "container": container, "job": Self::job_name(job) });
        std::fs::write(&path, serde_json::to_vec_pretty(&body).map_err(|err| TranslateError::Staging(err.to_string()))?)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "job_queue_tests.rs"]
mod tests;
