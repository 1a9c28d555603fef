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

//! The vocabulary of trust faults. A fault is a first-class outcome of
//! policy evaluation: each variant carries exactly the data needed to
//! explain itself and renders a human readable description on demand.
//! Faults are never errors; see `VerifierError` for the infrastructure
//! error class.

use hvs_model::{EventLogEntry, Measurement, PcrBank, PcrIndex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fault_name")]
pub enum Fault {
    /// The host manifest carries no PCR measurement data at all.
    PcrManifestMissing,

    /// The manifest has PCR data, but no value for the requested PCR.
    PcrValueMissing { bank: PcrBank, index: PcrIndex },

    /// The actual PCR value differs from the flavor's expected value.
    PcrValueMismatch {
        bank: PcrBank,
        index: PcrIndex,
        expected_value: String,
        actual_value: String,
    },

    /// The manifest has PCR data, but no event log for the requested PCR.
    PcrEventLogMissing { bank: PcrBank, index: PcrIndex },

    /// Events present on the host that the flavor does not expect.
    PcrEventLogContainsUnexpectedEntries { entries: EventLogEntry },

    /// Events the flavor expects that the host did not report.
    PcrEventLogMissingExpectedEntries { entries: EventLogEntry },

    /// Replaying the actual event log does not reproduce the actual PCR
    /// value: the log cannot be the one that was extended.
    PcrEventLogInvalid { bank: PcrBank, index: PcrIndex },

    /// The flavor expects an asset tag but the host reports none.
    AssetTagMissing,

    /// The host's asset tag digest differs from the expected one.
    AssetTagMismatch {
        expected_digest: String,
        actual_digest: String,
    },

    /// The host reports an asset tag although none was provisioned for it.
    AssetTagNotProvisioned { actual_digest: String },

    /// The host reported no software measurement log.
    XmlMeasurementLogMissing,

    /// Software measurements present on the host but not in the flavor.
    XmlMeasurementLogContainsUnexpectedEntries { entries: Vec<Measurement> },

    /// Software measurements the flavor expects but the host lacks.
    XmlMeasurementLogMissingExpectedEntries { entries: Vec<Measurement> },

    /// A measured path exists on both sides with differing values.
    XmlMeasurementValueMismatch {
        expected: Measurement,
        actual: Measurement,
    },
}

impl Fault {
    /// Human readable account of the fault, suitable for reports.
    pub fn description(&self) -> String {
        match self {
            Fault::PcrManifestMissing => {
                "Host report does not include a PCR manifest".to_string()
            }
            Fault::PcrValueMissing { bank, index } => {
                format!("Host report does not include PCR {} value from bank {}", index, bank)
            }
            Fault::PcrValueMismatch { bank, index, expected_value, actual_value } => format!(
                "PCR {} of {} value mismatch: expected {}, actual {}",
                index, bank, expected_value, actual_value
            ),
            Fault::PcrEventLogMissing { bank, index } => {
                format!("Host report does not include an event log for PCR {} of {}", index, bank)
            }
            Fault::PcrEventLogContainsUnexpectedEntries { entries } => format!(
                "Module manifest for PCR {} of {} contains {} unexpected entries",
                entries.pcr_index,
                entries.pcr_bank,
                entries.events.len()
            ),
            Fault::PcrEventLogMissingExpectedEntries { entries } => format!(
                "Module manifest for PCR {} of {} missing {} expected entries",
                entries.pcr_index,
                entries.pcr_bank,
                entries.events.len()
            ),
            Fault::PcrEventLogInvalid { bank, index } => format!(
                "Event log replay for PCR {} of {} does not match the PCR value",
                index, bank
            ),
            Fault::AssetTagMissing => {
                "Host report does not include an asset tag digest".to_string()
            }
            Fault::AssetTagMismatch { expected_digest, actual_digest } => format!(
                "Asset tag mismatch: expected {}, actual {}",
                expected_digest, actual_digest
            ),
            Fault::AssetTagNotProvisioned { actual_digest } => format!(
                "Host reports asset tag {} but no asset tag has been provisioned",
                actual_digest
            ),
            Fault::XmlMeasurementLogMissing => {
                "Host report does not include a software measurement log".to_string()
            }
            Fault::XmlMeasurementLogContainsUnexpectedEntries { entries } => {
                format!("Software measurement log contains {} unexpected entries", entries.len())
            }
            Fault::XmlMeasurementLogMissingExpectedEntries { entries } => {
                format!("Software measurement log missing {} expected entries", entries.len())
            }
            Fault::XmlMeasurementValueMismatch { expected, actual } => format!(
                "Measurement value mismatch for {}: expected {}, actual {}",
                expected.path, expected.value, actual.value
            ),
        }
    }
}
