/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use hvs_model::{
    EventLog, EventLogCriteria, EventLogEntry, PcrBank, PcrEvents, PcrIndex, VerifierError,
};
use std::collections::HashMap;

/// Test fixtures for event log subtraction tests
pub mod fixtures {
    use super::*;

    pub fn info(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    pub fn event(label: &str, pairs: &[(&str, &str)]) -> EventLog {
        EventLog {
            label: label.to_string(),
            info: info(pairs),
            measurement: "00".repeat(32),
        }
    }

    pub fn criteria(type_name: &str, measurement: &str, tags: &[&str]) -> EventLogCriteria {
        EventLogCriteria {
            type_name: type_name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            measurement: measurement.to_string(),
        }
    }

    pub fn entry(events: Vec<EventLog>) -> EventLogEntry {
        EventLogEntry::new(
            PcrIndex::new(17).unwrap(),
            PcrBank::Sha256,
            PcrEvents::EventLogs(events),
        )
    }

    pub fn criteria_entry(events: Vec<EventLogCriteria>) -> EventLogEntry {
        EventLogEntry::new(
            PcrIndex::new(17).unwrap(),
            PcrBank::Sha256,
            PcrEvents::Criteria(events),
        )
    }
}

mod subtraction_tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_identical_logs_subtract_to_empty_both_ways() {
        let a = entry(vec![event("a", &[("ComponentName", "x")]), event("b", &[])]);
        let e = entry(vec![event("a", &[("ComponentName", "x")]), event("b", &[])]);

        let forward = a.subtract(&e).unwrap();
        let backward = e.subtract(&a).unwrap();

        assert!(forward.remainder.events.is_empty());
        assert!(forward.field_drift.events.is_empty());
        assert!(backward.remainder.events.is_empty());
        assert!(backward.field_drift.events.is_empty());
    }

    #[test]
    fn test_equality_is_order_independent() {
        let a = entry(vec![event("b", &[]), event("a", &[("k", "v")])]);
        let e = entry(vec![event("a", &[("k", "v")]), event("b", &[])]);

        let diff = a.subtract(&e).unwrap();
        assert!(diff.remainder.events.is_empty());
        assert!(diff.field_drift.events.is_empty());
    }

    #[test]
    fn test_unexpected_event_lands_in_remainder() {
        let a = entry(vec![event("a", &[]), event("extra", &[("ComponentName", "y")])]);
        let e = entry(vec![event("a", &[])]);

        let diff = a.subtract(&e).unwrap();
        match diff.remainder.events {
            PcrEvents::EventLogs(events) => {
                assert_eq!(events.len(), 1);
                assert_eq!(events[0].label, "extra");
            }
            _ => panic!("expected legacy events"),
        }
        assert!(diff.field_drift.events.is_empty());
    }

    #[test]
    fn test_duplicates_match_one_for_one() {
        let a = entry(vec![event("dup", &[]), event("dup", &[])]);
        let e = entry(vec![event("dup", &[])]);

        // Two identical actual events against one expected copy: exactly
        // one survives subtraction.
        let diff = a.subtract(&e).unwrap();
        assert_eq!(diff.remainder.events.len() + diff.field_drift.events.len(), 1);

        let reverse = e.subtract(&a).unwrap();
        assert!(reverse.remainder.events.is_empty());
        assert!(reverse.field_drift.events.is_empty());
    }

    #[test]
    fn test_same_label_differing_info_is_field_drift_not_miss() {
        let a = entry(vec![event("x", &[("k", "v1")])]);
        let e = entry(vec![event("x", &[("k", "v2")])]);

        let diff = a.subtract(&e).unwrap();
        assert!(diff.remainder.events.is_empty());
        match diff.field_drift.events {
            PcrEvents::EventLogs(events) => {
                assert_eq!(events.len(), 1);
                assert_eq!(events[0].info.get("k").unwrap(), "v1");
            }
            _ => panic!("expected legacy events"),
        }
    }

    #[test]
    fn test_info_keys_are_case_sensitive() {
        let a = entry(vec![event("x", &[("componentname", "v")])]);
        let e = entry(vec![event("x", &[("ComponentName", "v")])]);

        // Same label, different keys: drift, not equality.
        let diff = a.subtract(&e).unwrap();
        assert!(diff.remainder.events.is_empty());
        assert_eq!(diff.field_drift.events.len(), 1);
    }

    #[test]
    fn test_bank_mismatch_is_an_error() {
        let a = entry(vec![event("a", &[])]);
        let mut e = entry(vec![event("a", &[])]);
        e.pcr_bank = PcrBank::Sha1;

        match a.subtract(&e) {
            Err(VerifierError::PcrEntryMismatch { .. }) => {}
            other => panic!("expected PcrEntryMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_index_mismatch_is_an_error() {
        let a = entry(vec![event("a", &[])]);
        let mut e = entry(vec![event("a", &[])]);
        e.pcr_index = PcrIndex::new(18).unwrap();

        assert!(matches!(a.subtract(&e), Err(VerifierError::PcrEntryMismatch { .. })));
    }

    #[test]
    fn test_representation_mismatch_is_an_error() {
        let a = entry(vec![event("a", &[])]);
        let e = criteria_entry(vec![criteria("a", "00", &[])]);

        assert!(matches!(a.subtract(&e), Err(VerifierError::EventKindMismatch { .. })));
    }
}

mod criteria_subtraction_tests {
    use super::fixtures::*;

    #[test]
    fn test_tags_do_not_participate_in_equality() {
        let a = criteria_entry(vec![criteria("shim", "ab", &["uefi"])]);
        let e = criteria_entry(vec![criteria("shim", "ab", &[])]);

        let diff = a.subtract(&e).unwrap();
        assert!(diff.remainder.events.is_empty());
        assert!(diff.field_drift.events.is_empty());
    }

    #[test]
    fn test_same_type_differing_measurement_is_field_drift() {
        let a = criteria_entry(vec![criteria("shim", "ab", &[])]);
        let e = criteria_entry(vec![criteria("shim", "cd", &[])]);

        let diff = a.subtract(&e).unwrap();
        assert!(diff.remainder.events.is_empty());
        assert_eq!(diff.field_drift.events.len(), 1);
    }

    #[test]
    fn test_unknown_type_is_a_full_miss() {
        let a = criteria_entry(vec![criteria("rogue", "ab", &[])]);
        let e = criteria_entry(vec![criteria("shim", "ab", &[])]);

        let diff = a.subtract(&e).unwrap();
        assert_eq!(diff.remainder.events.len(), 1);
        assert!(diff.field_drift.events.is_empty());
    }
}
