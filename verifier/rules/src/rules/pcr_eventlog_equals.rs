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

//! Exact equality between a PCR's expected and actual event log.
//!
//! Evaluation shape shared by both forms:
//! - no PCR measurement data in the manifest at all raises
//!   `PcrManifestMissing` and nothing else;
//! - no event log for the rule's bank/index raises `PcrEventLogMissing`;
//! - otherwise the actual log is filtered by the rule's exclusions,
//!   `actual - expected` raises `PcrEventLogContainsUnexpectedEntries` and
//!   `expected - actual` raises `PcrEventLogMissingExpectedEntries`;
//!   field-level drift from either direction is recorded as a
//!   `MismatchField`, which never affects `trusted`.

use crate::exclusion::{ComponentExclusion, LabelExclusion, TagExclusion};
use crate::fault::Fault;
use crate::result::{MismatchField, RuleInfo, RuleName, RuleResult};
use hvs_model::{EventLogEntry, FlavorPart, HostManifest, PcrEvents, VerifierError};
use uuid::Uuid;

pub const PCR_EVENT_LOG_UNEXPECTED_FIELDS: &str = "PcrEventLogUnexpectedFields";
pub const PCR_EVENT_LOG_MISSING_FIELDS: &str = "PcrEventLogMissingFields";

/// Strict form: every event of the actual log must appear in the expected
/// log and vice versa, with no exclusions applied.
#[derive(Debug, Clone)]
pub struct PcrEventLogEquals {
    expected: EventLogEntry,
    flavor_id: Uuid,
    marker: FlavorPart,
}

impl PcrEventLogEquals {
    pub fn new(expected: EventLogEntry, flavor_id: Uuid, marker: FlavorPart) -> Self {
        Self { expected, flavor_id, marker }
    }

    pub fn apply(&self, host_manifest: &HostManifest) -> Result<RuleResult, VerifierError> {
        let mut result = RuleResult::new(RuleInfo {
            name: Some(RuleName::PcrEventLogEquals),
            markers: vec![self.marker],
            flavor_id: Some(self.flavor_id),
            expected_event_log: Some(self.expected.clone()),
            ..RuleInfo::default()
        });

        evaluate(&self.expected, None, host_manifest, &mut result)?;
        Ok(result)
    }
}

/// The exclusion configuration of the excluding form, fixed at rule
/// construction: criteria based expected logs are filtered by tag, legacy
/// logs by component name and then by label.
#[derive(Debug, Clone)]
pub enum Exclusions {
    Tags(TagExclusion),
    ComponentsAndLabels {
        components: ComponentExclusion,
        labels: LabelExclusion,
    },
}

impl Exclusions {
    fn filter(&self, entry: &EventLogEntry) -> EventLogEntry {
        match self {
            Exclusions::Tags(tags) => tags.filter(entry),
            // Components first, then labels.
            Exclusions::ComponentsAndLabels { components, labels } => {
                labels.filter(&components.filter(entry))
            }
        }
    }
}

/// Equality with known-benign noise stripped from the actual log first.
#[derive(Debug, Clone)]
pub struct PcrEventLogEqualsExcluding {
    expected: EventLogEntry,
    exclusions: Exclusions,
    flavor_id: Uuid,
    marker: FlavorPart,
}

impl PcrEventLogEqualsExcluding {
    /// Selects the exclusion path from the expected log's representation:
    /// criteria entries use the flavor's exclude tags, legacy entries use
    /// the default component and label deny lists. The choice happens
    /// here, once, not per `apply` call.
    pub fn new(
        expected: EventLogEntry,
        exclude_tags: &[String],
        flavor_id: Uuid,
        marker: FlavorPart,
    ) -> Self {
        let exclusions = match &expected.events {
            PcrEvents::Criteria(_) => Exclusions::Tags(TagExclusion::new(exclude_tags.to_vec())),
            PcrEvents::EventLogs(_) => Exclusions::ComponentsAndLabels {
                components: ComponentExclusion::default_set(),
                labels: LabelExclusion::default_set(),
            },
        };

        Self { expected, exclusions, flavor_id, marker }
    }

    /// Same as [`new`](Self::new) but with caller-supplied component and
    /// label deny lists for legacy expected logs.
    pub fn with_exclusions(
        expected: EventLogEntry,
        components: ComponentExclusion,
        labels: LabelExclusion,
        flavor_id: Uuid,
        marker: FlavorPart,
    ) -> Self {
        Self {
            expected,
            exclusions: Exclusions::ComponentsAndLabels { components, labels },
            flavor_id,
            marker,
        }
    }

    pub fn apply(&self, host_manifest: &HostManifest) -> Result<RuleResult, VerifierError> {
        let mut result = RuleResult::new(RuleInfo {
            name: Some(RuleName::PcrEventLogEqualsExcluding),
            markers: vec![self.marker],
            flavor_id: Some(self.flavor_id),
            expected_event_log: Some(self.expected.clone()),
            ..RuleInfo::default()
        });

        evaluate(&self.expected, Some(&self.exclusions), host_manifest, &mut result)?;
        Ok(result)
    }
}

fn evaluate(
    expected: &EventLogEntry,
    exclusions: Option<&Exclusions>,
    host_manifest: &HostManifest,
    result: &mut RuleResult,
) -> Result<(), VerifierError> {
    if host_manifest.pcr_manifest.is_empty() {
        result.add_fault(Fault::PcrManifestMissing);
        return Ok(());
    }

    let actual = match host_manifest
        .pcr_manifest
        .find_event_log(expected.pcr_bank, expected.pcr_index)
    {
        Some(actual) => actual,
        None => {
            result.add_fault(Fault::PcrEventLogMissing {
                bank: expected.pcr_bank,
                index: expected.pcr_index,
            });
            return Ok(());
        }
    };

    let actual = match exclusions {
        Some(exclusions) => exclusions.filter(actual),
        None => actual.clone(),
    };

    // actual - expected: anything left over was not expected on this host.
    let unexpected = actual.subtract(expected)?;
    if !unexpected.remainder.events.is_empty() {
        result.add_fault(Fault::PcrEventLogContainsUnexpectedEntries {
            entries: unexpected.remainder,
        });
    }
    if !unexpected.field_drift.events.is_empty() {
        let drift = unexpected.field_drift;
        result.add_mismatch(MismatchField {
            name: PCR_EVENT_LOG_UNEXPECTED_FIELDS.to_string(),
            description: format!(
                "Module manifest for PCR {} of {} value contains {} unexpected entries",
                drift.pcr_index,
                drift.pcr_bank,
                drift.events.len()
            ),
            pcr_index: Some(drift.pcr_index),
            pcr_bank: Some(drift.pcr_bank),
            unexpected_entries: Some(drift.events),
            missing_entries: None,
        });
    }

    // expected - actual: anything left over is missing from this host.
    let missing = expected.subtract(&actual)?;
    if !missing.remainder.events.is_empty() {
        result.add_fault(Fault::PcrEventLogMissingExpectedEntries { entries: missing.remainder });
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

    Ok(())
}
