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

//! PCR value equality, no event log involved.

use crate::fault::Fault;
use crate::result::{RuleInfo, RuleName, RuleResult};
use hvs_model::{FlavorPart, HostManifest, Pcr, VerifierError};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PcrMatches {
    expected: Pcr,
    flavor_id: Uuid,
    marker: FlavorPart,
}

impl PcrMatches {
    pub fn new(expected: Pcr, flavor_id: Uuid, marker: FlavorPart) -> Self {
        Self { expected, flavor_id, marker }
    }

    pub fn apply(&self, host_manifest: &HostManifest) -> Result<RuleResult, VerifierError> {
        let mut result = RuleResult::new(RuleInfo {
            name: Some(RuleName::PcrMatches),
            markers: vec![self.marker],
            flavor_id: Some(self.flavor_id),
            expected_pcr: Some(self.expected.clone()),
            ..RuleInfo::default()
        });

        if host_manifest.pcr_manifest.is_empty() {
            result.add_fault(Fault::PcrManifestMissing);
            return Ok(result);
        }

        match host_manifest.pcr_manifest.find_pcr(self.expected.bank, self.expected.index) {
            None => {
                result.add_fault(Fault::PcrValueMissing {
                    bank: self.expected.bank,
                    index: self.expected.index,
                });
            }
            Some(actual) => {
                if !actual.value.eq_ignore_ascii_case(&self.expected.value) {
                    result.add_fault(Fault::PcrValueMismatch {
                        bank: self.expected.bank,
                        index: self.expected.index,
                        expected_value: self.expected.value.clone(),
                        actual_value: actual.value.clone(),
                    });
                }
            }
        }

        Ok(result)
    }
}
