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

//! Event log integrity: replays the actual event log with TPM extend
//! semantics and checks the result against the actual PCR value. A log
//! that does not replay to the register content cannot be the log that was
//! extended, however well it matches the flavor.

use crate::fault::Fault;
use crate::result::{RuleInfo, RuleName, RuleResult};
use hvs_model::{FlavorPart, HostManifest, Pcr, PcrBank, PcrIndex, VerifierError};
use openssl::hash::{Hasher, MessageDigest};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PcrEventLogIntegrity {
    expected: Pcr,
    flavor_id: Uuid,
    marker: FlavorPart,
}

impl PcrEventLogIntegrity {
    pub fn new(expected: Pcr, flavor_id: Uuid, marker: FlavorPart) -> Self {
        Self { expected, flavor_id, marker }
    }

    pub fn apply(&self, host_manifest: &HostManifest) -> Result<RuleResult, VerifierError> {
        let mut result = RuleResult::new(RuleInfo {
            name: Some(RuleName::PcrEventLogIntegrity),
            markers: vec![self.marker],
            flavor_id: Some(self.flavor_id),
            expected_pcr: Some(self.expected.clone()),
            ..RuleInfo::default()
        });

        if host_manifest.pcr_manifest.is_empty() {
            result.add_fault(Fault::PcrManifestMissing);
            return Ok(result);
        }

        let bank = self.expected.bank;
        let index = self.expected.index;

        let actual_log = match host_manifest.pcr_manifest.find_event_log(bank, index) {
            Some(entry) => entry,
            None => {
                result.add_fault(Fault::PcrEventLogMissing { bank, index });
                return Ok(result);
            }
        };

        let actual_pcr = match host_manifest.pcr_manifest.find_pcr(bank, index) {
            Some(pcr) => pcr,
            None => {
                result.add_fault(Fault::PcrValueMissing { bank, index });
                return Ok(result);
            }
        };

        let replayed = replay(bank, index, &actual_log.events.measurements())?;
        if !replayed.eq_ignore_ascii_case(&actual_pcr.value) {
            result.add_fault(Fault::PcrEventLogInvalid { bank, index });
        }

        Ok(result)
    }
}

fn message_digest(bank: PcrBank) -> MessageDigest {
    match bank {
        PcrBank::Sha1 => MessageDigest::sha1(),
        PcrBank::Sha256 => MessageDigest::sha256(),
        PcrBank::Sha384 => MessageDigest::sha384(),
    }
}

/// Initial register content per TPM 2.0: PCR 17-22 reset to all ones,
/// everything else to all zeros.
pub fn initial_pcr_value(bank: PcrBank, index: PcrIndex) -> Vec<u8> {
    let fill = if (17..=22).contains(&index.value()) { 0xff } else { 0x00 };
    vec![fill; bank.digest_size()]
}

/// Replays `measurements` into the initial value of the given PCR with
/// extend semantics: value = H(value || digest), in log order.
///
/// # Arguments
/// * `bank` - Digest bank, selects the hash algorithm and initial value
/// * `index` - PCR index, selects the initial fill
/// * `measurements` - Hex encoded event digests, in log order
///
/// # Returns
/// * `Result<String, VerifierError>` - Hex encoded replayed value
pub fn replay(
    bank: PcrBank,
    index: PcrIndex,
    measurements: &[&str],
) -> Result<String, VerifierError> {
    let digest_alg = message_digest(bank);
    let mut current = initial_pcr_value(bank, index);

    for measurement in measurements {
        let digest = hex::decode(measurement)
            .map_err(|e| VerifierError::InvalidDigest(format!("{}: {}", measurement, e)))?;

        let mut hasher = Hasher::new(digest_alg)
            .map_err(|e| VerifierError::InternalError(format!("Failed to create hasher: {}", e)))?;
        hasher
            .update(&current)
            .map_err(|e| VerifierError::InternalError(format!("Failed to update hash: {}", e)))?;
        hasher
            .update(&digest)
            .map_err(|e| VerifierError::InternalError(format!("Failed to update hash: {}", e)))?;
        current = hasher
            .finish()
            .map_err(|e| VerifierError::InternalError(format!("Failed to finalize hash: {}", e)))?
            .to_vec();
    }

    Ok(hex::encode(current))
}
