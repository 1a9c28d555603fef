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
    EventLog, EventLogCriteria, EventLogEntry, FlavorPart, HostManifest, Pcr, PcrBank,
    PcrEventLogMap, PcrEvents, PcrIndex, PcrManifest,
};
use hvs_rules::fault::Fault;
use hvs_rules::rules::pcr_eventlog_equals::{PcrEventLogEquals, PcrEventLogEqualsExcluding};
use std::collections::HashMap;
use uuid::Uuid;

/// Test fixtures for event log equality rule tests
pub mod fixtures {
    use super::*;

    pub const PCR: u32 = 17;

    pub fn event(label: &str, pairs: &[(&str, &str)]) -> EventLog {
        EventLog {
            label: label.to_string(),
            info: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>(),
            measurement: "33".repeat(32),
        }
    }

    pub fn entry(events: Vec<EventLog>) -> EventLogEntry {
        EventLogEntry::new(
            PcrIndex::new(PCR).unwrap(),
            PcrBank::Sha256,
            PcrEvents::EventLogs(events),
        )
    }

    pub fn criteria_entry(events: Vec<EventLogCriteria>) -> EventLogEntry {
        EventLogEntry::new(
            PcrIndex::new(PCR).unwrap(),
            PcrBank::Sha256,
            PcrEvents::Criteria(events),
        )
    }

    pub fn criteria(type_name: &str, measurement: &str, tags: &[&str]) -> EventLogCriteria {
        EventLogCriteria {
            type_name: type_name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            measurement: measurement.to_string(),
        }
    }

    pub fn manifest_with_log(actual: EventLogEntry) -> HostManifest {
        HostManifest {
            pcr_manifest: PcrManifest {
                pcrs: vec![Pcr::new(actual.pcr_index, actual.pcr_bank, "aa".repeat(32))],
                event_log_map: PcrEventLogMap { entries: vec![actual] },
            },
            ..HostManifest::default()
        }
    }

    pub fn excluding_rule(expected: EventLogEntry) -> PcrEventLogEqualsExcluding {
        PcrEventLogEqualsExcluding::new(expected, &[], Uuid::new_v4(), FlavorPart::Platform)
    }
}

mod missing_data_tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_empty_manifest_raises_exactly_one_fault() {
        let rule = excluding_rule(entry(vec![event("a", &[])]));
        let result = rule.apply(&HostManifest::default()).unwrap();

        assert_eq!(result.faults, vec![Fault::PcrManifestMissing]);
        assert!(!result.trusted);
        assert!(result.mismatch_fields.is_empty());
    }

    #[test]
    fn test_missing_event_log_for_target_pcr_only() {
        // Manifest has PCR data for another index, just not the target.
        let other = EventLogEntry::new(
            PcrIndex::new(18).unwrap(),
            PcrBank::Sha256,
            PcrEvents::EventLogs(vec![event("other", &[])]),
        );
        let manifest = manifest_with_log(other);

        let rule = excluding_rule(entry(vec![event("a", &[])]));
        let result = rule.apply(&manifest).unwrap();

        assert_eq!(
            result.faults,
            vec![Fault::PcrEventLogMissing {
                bank: PcrBank::Sha256,
                index: PcrIndex::new(PCR).unwrap(),
            }]
        );
    }
}

mod default_exclusion_tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_command_line_noise_is_filtered_before_comparison() {
        let actual = entry(vec![
            event("a", &[("ComponentName", "x")]),
            event("b", &[("ComponentName", "commandLine.")]),
        ]);
        let expected = entry(vec![event("a", &[("ComponentName", "x")])]);

        let rule = excluding_rule(expected);
        let result = rule.apply(&manifest_with_log(actual)).unwrap();

        assert!(result.trusted);
        assert!(result.faults.is_empty());
        assert!(result.mismatch_fields.is_empty());
    }

    #[test]
    fn test_strict_form_applies_no_exclusions() {
        let actual = entry(vec![
            event("a", &[("ComponentName", "x")]),
            event("b", &[("ComponentName", "commandLine.")]),
        ]);
        let expected = entry(vec![event("a", &[("ComponentName", "x")])]);

        let rule = PcrEventLogEquals::new(expected, Uuid::new_v4(), FlavorPart::Platform);
        let result = rule.apply(&manifest_with_log(actual)).unwrap();

        assert!(!result.trusted);
        assert!(matches!(
            result.faults.as_slice(),
            [Fault::PcrEventLogContainsUnexpectedEntries { .. }]
        ));
    }
}

mod comparison_tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_unexpected_fault_precedes_missing_fault() {
        let actual = entry(vec![event("only_actual", &[])]);
        let expected = entry(vec![event("only_expected", &[])]);

        let rule = excluding_rule(expected);
        let result = rule.apply(&manifest_with_log(actual)).unwrap();

        assert_eq!(result.faults.len(), 2);
        assert!(matches!(result.faults[0], Fault::PcrEventLogContainsUnexpectedEntries { .. }));
        assert!(matches!(result.faults[1], Fault::PcrEventLogMissingExpectedEntries { .. }));
        assert!(!result.trusted);
    }

    #[test]
    fn test_field_drift_is_a_mismatch_not_a_fault() {
        let actual = entry(vec![event("x", &[("k", "v1")])]);
        let expected = entry(vec![event("x", &[("k", "v2")])]);

        let rule = excluding_rule(expected);
        let result = rule.apply(&manifest_with_log(actual)).unwrap();

        assert!(result.faults.is_empty());
        assert!(result.trusted);
        // Drift is reported from both subtraction directions.
        assert_eq!(result.mismatch_fields.len(), 2);
        assert_eq!(result.mismatch_fields[0].name, "PcrEventLogUnexpectedFields");
        assert_eq!(result.mismatch_fields[1].name, "PcrEventLogMissingFields");
        assert!(result.mismatch_fields[0].unexpected_entries.is_some());
        assert!(result.mismatch_fields[1].missing_entries.is_some());
    }

    #[test]
    fn test_trusted_iff_no_faults() {
        let actual = entry(vec![event("x", &[("k", "v1")]), event("rogue", &[])]);
        let expected = entry(vec![event("x", &[("k", "v2")])]);

        let rule = excluding_rule(expected);
        let result = rule.apply(&manifest_with_log(actual)).unwrap();

        // One hard fault (rogue) and field drift side by side: trusted
        // follows the faults alone.
        assert_eq!(result.trusted, result.faults.is_empty());
        assert!(!result.trusted);
        assert!(!result.mismatch_fields.is_empty());
    }
}

mod tag_exclusion_path_tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_criteria_expected_log_uses_tag_exclusion() {
        let actual = criteria_entry(vec![
            criteria("shim", "ab", &[]),
            criteria("boot_param", "cd", &["ephemeral"]),
        ]);
        let expected = criteria_entry(vec![criteria("shim", "ab", &[])]);

        let rule = PcrEventLogEqualsExcluding::new(
            expected,
            &["ephemeral".to_string()],
            Uuid::new_v4(),
            FlavorPart::Platform,
        );
        let result = rule.apply(&manifest_with_log(actual)).unwrap();

        assert!(result.trusted);
        assert!(result.faults.is_empty());
    }

    #[test]
    fn test_untagged_unexpected_criteria_event_still_faults() {
        let actual = criteria_entry(vec![
            criteria("shim", "ab", &[]),
            criteria("rogue", "ef", &[]),
        ]);
        let expected = criteria_entry(vec![criteria("shim", "ab", &[])]);

        let rule = PcrEventLogEqualsExcluding::new(
            expected,
            &["ephemeral".to_string()],
            Uuid::new_v4(),
            FlavorPart::Platform,
        );
        let result = rule.apply(&manifest_with_log(actual)).unwrap();

        assert!(!result.trusted);
        assert!(matches!(
            result.faults.as_slice(),
            [Fault::PcrEventLogContainsUnexpectedEntries { .. }]
        ));
    }
}
