// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use confd_core::test_support::{changed_entry, container};
use confd_core::{DiffOp, TreeNode, Value};
use confd_dagger::Dagger;
use confd_wire::ScratchLayout;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

struct RecordingQueue(Arc<Mutex<Vec<(String, ContainerJob)>>>);

impl JobQueue for RecordingQueue {
    fn enqueue(&mut self, container: &str, job: ContainerJob) -> Result<(), TranslateError> {
        self.0.lock().unwrap().push((container.to_string(), job));
        Ok(())
    }
}

#[test]
fn new_container_enqueues_a_start_job() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let dagger = Dagger::claim(layout).unwrap();
    let handle = TxnHandle::for_testing(dagger.next(), &dagger);

    let tree = ConfigTree::new(container([(
        "containers",
        container([("container", container([("web", TreeNode::leaf_with_op(Value::from("running"), DiffOp::Create))]))]),
    )]));
    let diff = vec![changed_entry("/containers/container/web", None, Some(Value::from("running")), DiffOp::Create)];

    let jobs = Arc::new(Mutex::new(Vec::new()));
    let mut t = ContainersTranslator::new(Box::new(RecordingQueue(jobs.clone())));
    t.on_change(&handle, &tree, DiffIter::new(&diff)).unwrap();

    assert_eq!(*jobs.lock().unwrap(), vec![("web".to_string(), ContainerJob::Start)]);
}
