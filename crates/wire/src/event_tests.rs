// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn change_notification_carries_all_six_fields() {
    let n = ChangeNotification::new(1, 2, "ietf-interfaces", "/ietf-interfaces:interfaces", DatastoreEvent::Change, 9);
    assert_eq!(n.session, 1);
    assert_eq!(n.subscription_id, 2);
    assert_eq!(n.module_name.as_str(), "ietf-interfaces");
    assert_eq!(n.event, DatastoreEvent::Change);
    assert_eq!(n.request_id, 9);
}

#[test]
fn datastore_event_roundtrips_through_json() {
    for event in [DatastoreEvent::Update, DatastoreEvent::Change, DatastoreEvent::Done, DatastoreEvent::Abort] {
        let encoded = serde_json::to_string(&event).unwrap();
        let decoded: DatastoreEvent = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, event);
    }
}
