// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn enqueuing_writes_one_file_per_job() {
    let dir = tempdir().unwrap();
    let mut queue = FileJobQueue::new(dir.path());
    queue.enqueue("web", ContainerJob::Start).unwrap();
    queue.enqueue("web", ContainerJob::Stop).unwrap();

    let mut names: Vec<_> = std::fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
    names.sort();
    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("-web.json"));
}

#[test]
fn job_descriptors_are_sequenced_in_enqueue_order() {
    let dir = tempdir().unwrap();
    let mut queue = FileJobQueue::new(dir.path());
    queue.enqueue("a", ContainerJob::Start).unwrap();
    queue.enqueue("b", ContainerJob::Start).unwrap();

    let mut names: Vec<_> = std::fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
    names.sort();
    assert!(names[0] < names[1]);
}
