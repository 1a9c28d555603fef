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

//! The flavor: a signed description of a host's expected configuration,
//! used as the comparison baseline. Produced by the flavor store
//! collaborator; the engine only reads it during rule construction.

use crate::event_log::EventLogEntry;
use crate::host_manifest::Measurement;
use crate::pcr::Pcr;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which portion of the host's expected state a flavor describes. Rule
/// selection is keyed on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlavorPart {
    Platform,
    Os,
    HostUnique,
    AssetTag,
    Software,
}

impl fmt::Display for FlavorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlavorPart::Platform => write!(f, "PLATFORM"),
            FlavorPart::Os => write!(f, "OS"),
            FlavorPart::HostUnique => write!(f, "HOST_UNIQUE"),
            FlavorPart::AssetTag => write!(f, "ASSET_TAG"),
            FlavorPart::Software => write!(f, "SOFTWARE"),
        }
    }
}

/// Expected state of one PCR: its value and, optionally, the event log
/// that should have produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorPcr {
    pub pcr: Pcr,
    #[serde(default)]
    pub event_log: Option<EventLogEntry>,
}

/// A signed expected-state description of a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    pub id: Uuid,
    pub part: FlavorPart,
    #[serde(default)]
    pub pcrs: Vec<FlavorPcr>,
    /// Expected asset tag digest; only meaningful for ASSET_TAG flavors.
    #[serde(default)]
    pub asset_tag_digest: Option<String>,
    /// Expected software measurements; only meaningful for SOFTWARE flavors.
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    /// Event tags the flavor author wants excluded from event log
    /// comparison, consumed by the criteria based exclusion path.
    #[serde(default)]
    pub exclude_tags: Vec<String>,
}
