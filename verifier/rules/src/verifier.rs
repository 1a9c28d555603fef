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

//! Verification orchestrator: builds the rule set for a flavor, applies
//! every rule to the host manifest, and folds the results into one trust
//! report. Rules are pure and independent, so callers that need more
//! throughput may apply them in parallel; this entry point keeps them in
//! factory order.

use crate::factory::build_rules;
use crate::result::RuleResult;
use hvs_model::{Flavor, FlavorPart, HostManifest, VerifierError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The aggregate verdict for one flavor against one host manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustReport {
    pub flavor_id: Uuid,
    pub part: FlavorPart,
    pub trusted: bool,
    pub results: Vec<RuleResult>,
}

#[derive(Debug, Clone, Default)]
pub struct Verifier;

impl Verifier {
    pub fn new() -> Self {
        Self
    }

    /// Apply every rule of the flavor to the manifest.
    ///
    /// An infrastructure error from any single rule aborts the whole
    /// report: that rule is inconclusive and guessing either way would
    /// corrupt the verdict.
    pub fn verify(
        &self,
        flavor: &Flavor,
        host_manifest: &HostManifest,
    ) -> Result<TrustReport, VerifierError> {
        let rules = build_rules(flavor);

        let mut results = Vec::with_capacity(rules.len());
        for rule in &rules {
            let result = rule.apply(host_manifest).map_err(|e| {
                log::error!("Rule evaluation failed for flavor {}: {}", flavor.id, e);
                e
            })?;
            results.push(result);
        }

        let trusted = results.iter().all(|result| result.trusted);

        Ok(TrustReport { flavor_id: flavor.id, part: flavor.part, trusted, results })
    }
}
