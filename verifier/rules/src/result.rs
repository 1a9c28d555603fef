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

//! The aggregate result of applying one rule: a self-describing rule
//! descriptor, zero or more trust faults, and zero or more field-level
//! mismatches. Mismatches are diagnostic only and never affect `trusted`.

use crate::fault::Fault;
use hvs_model::{EventLogEntry, FlavorPart, Measurement, Pcr, PcrBank, PcrEvents, PcrIndex};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of rule kinds, used to name a rule in its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleName {
    PcrMatches,
    PcrEventLogEquals,
    PcrEventLogEqualsExcluding,
    PcrEventLogIncludes,
    PcrEventLogIntegrity,
    AssetTagMatches,
    XmlMeasurementLogEquals,
}

/// Descriptor of the rule that produced a result: its kind, which flavor
/// parts it stems from, and the expected data it carried. Everything a
/// report consumer needs to explain the verdict without the flavor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub name: Option<RuleName>,
    #[serde(default)]
    pub markers: Vec<FlavorPart>,
    #[serde(default)]
    pub flavor_id: Option<Uuid>,
    #[serde(default)]
    pub expected_pcr: Option<Pcr>,
    #[serde(default)]
    pub expected_event_log: Option<EventLogEntry>,
    #[serde(default)]
    pub expected_tag: Option<String>,
    #[serde(default)]
    pub expected_measurements: Vec<Measurement>,
}

/// A non-fatal, field-level difference between an expected and actual
/// event, reported for diagnostics without failing trust by itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchField {
    pub name: String,
    pub description: String,
    pub pcr_index: Option<PcrIndex>,
    pub pcr_bank: Option<PcrBank>,
    #[serde(default)]
    pub unexpected_entries: Option<PcrEvents>,
    #[serde(default)]
    pub missing_entries: Option<PcrEvents>,
}

/// Terminal record of one rule application.
///
/// `trusted` is true iff `faults` is empty; `mismatch_fields` never flip
/// it. Results are data, not errors: a rule that found policy violations
/// still applied successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: RuleInfo,
    #[serde(default)]
    pub faults: Vec<Fault>,
    #[serde(default)]
    pub mismatch_fields: Vec<MismatchField>,
    pub trusted: bool,
}

impl RuleResult {
    pub fn new(rule: RuleInfo) -> Self {
        Self { rule, faults: Vec::new(), mismatch_fields: Vec::new(), trusted: true }
    }

    pub fn add_fault(&mut self, fault: Fault) {
        self.faults.push(fault);
        self.trusted = false;
    }

    pub fn add_mismatch(&mut self, mismatch: MismatchField) {
        self.mismatch_fields.push(mismatch);
    }
}
