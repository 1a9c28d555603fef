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

//! Software measurement log equality for SOFTWARE flavors. The log arrives
//! already decoded from its XML transport; entries are matched by measured
//! path. A path on both sides with differing values is a per-entry
//! mismatch fault, paths on one side only are unexpected/missing faults.

use crate::fault::Fault;
use crate::result::{RuleInfo, RuleName, RuleResult};
use hvs_model::{FlavorPart, HostManifest, Measurement, VerifierError};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct XmlMeasurementLogEquals {
    expected: Vec<Measurement>,
    flavor_id: Uuid,
}

impl XmlMeasurementLogEquals {
    pub fn new(expected: Vec<Measurement>, flavor_id: Uuid) -> Self {
        Self { expected, flavor_id }
    }

    pub fn apply(&self, host_manifest: &HostManifest) -> Result<RuleResult, VerifierError> {
        let mut result = RuleResult::new(RuleInfo {
            name: Some(RuleName::XmlMeasurementLogEquals),
            markers: vec![FlavorPart::Software],
            flavor_id: Some(self.flavor_id),
            expected_measurements: self.expected.clone(),
            ..RuleInfo::default()
        });

        let actual = &host_manifest.measurements;

        if actual.is_empty() && !self.expected.is_empty() {
            result.add_fault(Fault::XmlMeasurementLogMissing);
            return Ok(result);
        }

        let unexpected: Vec<Measurement> = actual
            .iter()
            .filter(|measurement| !self.expected.iter().any(|e| e.path == measurement.path))
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            result.add_fault(Fault::XmlMeasurementLogContainsUnexpectedEntries {
                entries: unexpected,
            });
        }

        let missing: Vec<Measurement> = self
            .expected
            .iter()
            .filter(|measurement| !actual.iter().any(|a| a.path == measurement.path))
            .cloned()
            .collect();
        if !missing.is_empty() {
            result.add_fault(Fault::XmlMeasurementLogMissingExpectedEntries { entries: missing });
        }

        for expected in &self.expected {
            if let Some(actual) = actual.iter().find(|a| a.path == expected.path) {
                if actual.value != expected.value {
                    result.add_fault(Fault::XmlMeasurementValueMismatch {
                        expected: expected.clone(),
                        actual: actual.clone(),
                    });
                }
            }
        }

        Ok(result)
    }
}
