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

//! The collected state of a host submitted for verification. Produced by
//! the host collection collaborators (TPM quote retrieval, platform
//! introspection); read-only to the rule engine.

use crate::event_log::EventLogEntry;
use crate::pcr::{Pcr, PcrBank, PcrIndex};
use serde::{Deserialize, Serialize};

/// Event logs collected for every measured PCR, keyed by bank and index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcrEventLogMap {
    #[serde(default)]
    pub entries: Vec<EventLogEntry>,
}

impl PcrEventLogMap {
    /// Look up the event log for one PCR. `None` means the host reported no
    /// log for that bank/index, which is distinct from an empty log.
    pub fn find_event_log(&self, bank: PcrBank, index: PcrIndex) -> Option<&EventLogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.pcr_bank == bank && entry.pcr_index == index)
    }
}

/// PCR values and event logs collected from the host's TPM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcrManifest {
    #[serde(default)]
    pub pcrs: Vec<Pcr>,
    #[serde(default)]
    pub event_log_map: PcrEventLogMap,
}

impl PcrManifest {
    pub fn find_pcr(&self, bank: PcrBank, index: PcrIndex) -> Option<&Pcr> {
        self.pcrs.iter().find(|pcr| pcr.bank == bank && pcr.index == index)
    }

    pub fn find_event_log(&self, bank: PcrBank, index: PcrIndex) -> Option<&EventLogEntry> {
        self.event_log_map.find_event_log(bank, index)
    }

    /// True when the host reported no PCR measurement data at all.
    pub fn is_empty(&self) -> bool {
        self.pcrs.is_empty() && self.event_log_map.entries.is_empty()
    }
}

/// One decoded entry of a software flavor's measurement log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Measurement kind reported by the collector, e.g. "file" or "dir".
    pub type_name: String,
    pub path: String,
    pub value: String,
}

/// Live snapshot of a host's runtime state. The engine treats it as an
/// immutable snapshot for the duration of an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostManifest {
    #[serde(default)]
    pub pcr_manifest: PcrManifest,
    /// Hex encoded asset tag digest, absent when no tag is provisioned.
    #[serde(default)]
    pub asset_tag_digest: Option<String>,
    /// Decoded software measurement log entries reported by the host.
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}
