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

//! Asset tag check. A rule built without an expected digest asserts the
//! host reports no tag; with one, the reported digest must match exactly.

use crate::fault::Fault;
use crate::result::{RuleInfo, RuleName, RuleResult};
use hvs_model::{FlavorPart, HostManifest, VerifierError};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AssetTagMatches {
    expected_digest: Option<String>,
    flavor_id: Uuid,
}

impl AssetTagMatches {
    pub fn new(expected_digest: Option<String>, flavor_id: Uuid) -> Self {
        Self { expected_digest, flavor_id }
    }

    pub fn apply(&self, host_manifest: &HostManifest) -> Result<RuleResult, VerifierError> {
        let mut result = RuleResult::new(RuleInfo {
            name: Some(RuleName::AssetTagMatches),
            markers: vec![FlavorPart::AssetTag],
            flavor_id: Some(self.flavor_id),
            expected_tag: self.expected_digest.clone(),
            ..RuleInfo::default()
        });

        match (&self.expected_digest, &host_manifest.asset_tag_digest) {
            (Some(_), None) => {
                result.add_fault(Fault::AssetTagMissing);
            }
            (Some(expected), Some(actual)) => {
                if !actual.eq_ignore_ascii_case(expected) {
                    result.add_fault(Fault::AssetTagMismatch {
                        expected_digest: expected.clone(),
                        actual_digest: actual.clone(),
                    });
                }
            }
            (None, Some(actual)) => {
                result.add_fault(Fault::AssetTagNotProvisioned { actual_digest: actual.clone() });
            }
            (None, None) => {}
        }

        Ok(result)
    }
}
