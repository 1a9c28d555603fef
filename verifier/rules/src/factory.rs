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

//! Rule construction: turns a flavor into the ordered rule set that
//! verifies it. Selection is keyed on the flavor part; all expected data
//! is captured at construction so every rule is immutable afterwards.

use crate::rule::Rule;
use crate::rules::asset_tag_matches::AssetTagMatches;
use crate::rules::pcr_eventlog_equals::PcrEventLogEqualsExcluding;
use crate::rules::pcr_eventlog_includes::PcrEventLogIncludes;
use crate::rules::pcr_eventlog_integrity::PcrEventLogIntegrity;
use crate::rules::pcr_matches::PcrMatches;
use crate::rules::xml_measurement_log_equals::XmlMeasurementLogEquals;
use hvs_model::{Flavor, FlavorPart};

/// Build the rule set for one flavor.
///
/// - PLATFORM and OS flavors: per PCR a value match, and when the flavor
///   carries an event log for it, an equality-with-exclusions check plus a
///   log integrity check.
/// - HOST_UNIQUE flavors: per PCR with a log, a subset check plus
///   integrity; the PCR value is shared with other flavors, so no value
///   match.
/// - ASSET_TAG flavors: a single tag digest match.
/// - SOFTWARE flavors: a single measurement log equality check.
pub fn build_rules(flavor: &Flavor) -> Vec<Rule> {
    let mut rules = Vec::new();

    match flavor.part {
        FlavorPart::Platform | FlavorPart::Os => {
            for flavor_pcr in &flavor.pcrs {
                rules.push(Rule::PcrMatches(PcrMatches::new(
                    flavor_pcr.pcr.clone(),
                    flavor.id,
                    flavor.part,
                )));

                if let Some(event_log) = &flavor_pcr.event_log {
                    rules.push(Rule::PcrEventLogEqualsExcluding(PcrEventLogEqualsExcluding::new(
                        event_log.clone(),
                        &flavor.exclude_tags,
                        flavor.id,
                        flavor.part,
                    )));
                    rules.push(Rule::PcrEventLogIntegrity(PcrEventLogIntegrity::new(
                        flavor_pcr.pcr.clone(),
                        flavor.id,
                        flavor.part,
                    )));
                }
            }
        }
        FlavorPart::HostUnique => {
            for flavor_pcr in &flavor.pcrs {
                if let Some(event_log) = &flavor_pcr.event_log {
                    rules.push(Rule::PcrEventLogIncludes(PcrEventLogIncludes::new(
                        event_log.clone(),
                        flavor.id,
                        flavor.part,
                    )));
                    rules.push(Rule::PcrEventLogIntegrity(PcrEventLogIntegrity::new(
                        flavor_pcr.pcr.clone(),
                        flavor.id,
                        flavor.part,
                    )));
                }
            }
        }
        FlavorPart::AssetTag => {
            rules.push(Rule::AssetTagMatches(AssetTagMatches::new(
                flavor.asset_tag_digest.clone(),
                flavor.id,
            )));
        }
        FlavorPart::Software => {
            rules.push(Rule::XmlMeasurementLogEquals(XmlMeasurementLogEquals::new(
                flavor.measurements.clone(),
                flavor.id,
            )));
        }
    }

    rules
}
