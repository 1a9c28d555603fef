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

//! Subset check: every expected event must appear in the actual log, but
//! events beyond the expected set are allowed. Used for host-unique
//! flavors whose events are interleaved with other flavors' events in the
//! same PCR.

use crate::fault::Fault;
use crate::result::{MismatchField, RuleInfo, RuleName, RuleResult};
use crate::rules::pcr_eventlog_equals::PCR_EVENT_LOG_MISSING_FIELDS;
use hvs_model::{EventLogEntry, FlavorPart, HostManifest, VerifierError};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PcrEventLogIncludes {
    expected: EventLogEntry,
    flavor_id: Uuid,
    marker: FlavorPart,
}

impl PcrEventLogIncludes {
    pub fn new(expected: EventLogEntry, flavor_id: Uuid, marker: FlavorPart) -> Self {
        Self { expected, flavor_id, marker }
    }

    pub fn apply(&self, host_manifest: &HostManifest) -> Result<RuleResult, VerifierError> {
        let mut result = RuleResult::new(RuleInfo {
            name: Some(RuleName::PcrEventLogIncludes),
            markers: vec![self.marker],
            flavor_id: Some(self.flavor_id),
            expected_event_log: Some(self.expected.clone()),
            ..RuleInfo::default()
        });

        if host_manifest.pcr_manifest.is_empty() {
            result.add_fault(Fault::PcrManifestMissing);
            return Ok(result);
        }

        let actual = match host_manifest
            .pcr_manifest
            .find_event_log(self.expected.pcr_bank, self.expected.pcr_index)
        {
            Some(actual) => actual,
            None => {
                result.add_fault(Fault::PcrEventLogMissing {
                    bank: self.expected.pcr_bank,
                    index: self.expected.pcr_index,
                });
                return Ok(result);
            }
        };

        // Only expected - actual matters here; extra host events are fine.
        let missing = self.expected.subtract(actual)?;
        if !missing.remainder.events.is_empty() {
            result.add_fault(Fault::PcrEventLogMissingExpectedEntries {
                entries: missing.remainder,
            });
        }
        if !missing.field_drift.events.is_empty() {
            let drift = missing.field_drift;
            result.add_mismatch(MismatchField {
                name: PCR_EVENT_LOG_MISSING_FIELDS.to_string(),
                description: format!(
                    "Module manifest for PCR {} of {} value missing {} expected entries",
                    drift.pcr_index,
                    drift.pcr_bank,
                    drift.events.len()
                ),
                pcr_index: Some(drift.pcr_index),
                pcr_bank: Some(drift.pcr_bank),
                unexpected_entries: None,
                missing_entries: Some(drift.events),
            });
        }

        Ok(result)
    }
}
