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

//! The closed set of verification rules. Each variant is immutable once
//! constructed from flavor data and `apply` is a pure function of the rule
//! state and the supplied host manifest, so independent rules can be
//! applied concurrently without coordination.

use crate::result::RuleResult;
use crate::rules::asset_tag_matches::AssetTagMatches;
use crate::rules::pcr_eventlog_equals::{PcrEventLogEquals, PcrEventLogEqualsExcluding};
use crate::rules::pcr_eventlog_includes::PcrEventLogIncludes;
use crate::rules::pcr_eventlog_integrity::PcrEventLogIntegrity;
use crate::rules::pcr_matches::PcrMatches;
use crate::rules::xml_measurement_log_equals::XmlMeasurementLogEquals;
use hvs_model::{HostManifest, VerifierError};

/// One policy check over a host manifest. Dispatch is an exhaustive match,
/// so adding a rule kind without handling it fails to compile.
#[derive(Debug, Clone)]
pub enum Rule {
    PcrMatches(PcrMatches),
    PcrEventLogEquals(PcrEventLogEquals),
    PcrEventLogEqualsExcluding(PcrEventLogEqualsExcluding),
    PcrEventLogIncludes(PcrEventLogIncludes),
    PcrEventLogIntegrity(PcrEventLogIntegrity),
    AssetTagMatches(AssetTagMatches),
    XmlMeasurementLogEquals(XmlMeasurementLogEquals),
}

impl Rule {
    /// Apply the rule to a host manifest. Policy violations come back as
    /// faults or mismatch fields inside the result; an `Err` means the
    /// input was malformed and this rule's evaluation is inconclusive.
    pub fn apply(&self, host_manifest: &HostManifest) -> Result<RuleResult, VerifierError> {
        match self {
            Rule::PcrMatches(rule) => rule.apply(host_manifest),
            Rule::PcrEventLogEquals(rule) => rule.apply(host_manifest),
            Rule::PcrEventLogEqualsExcluding(rule) => rule.apply(host_manifest),
            Rule::PcrEventLogIncludes(rule) => rule.apply(host_manifest),
            Rule::PcrEventLogIntegrity(rule) => rule.apply(host_manifest),
            Rule::AssetTagMatches(rule) => rule.apply(host_manifest),
            Rule::XmlMeasurementLogEquals(rule) => rule.apply(host_manifest),
        }
    }
}
