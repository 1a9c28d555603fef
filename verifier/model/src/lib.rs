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

//! Data model for the host verification rule engine: PCR banks, indices and
//! values, measurement event logs with their set algebra, the collected host
//! manifest, and the flavor (expected state) consumed by rule construction.

mod error;
mod pcr;
pub mod event_log;
pub mod flavor;
pub mod host_manifest;

pub use error::VerifierError;
pub use event_log::{EventLog, EventLogCriteria, EventLogEntry, EventLogSubtraction, PcrEvents};
pub use flavor::{Flavor, FlavorPart, FlavorPcr};
pub use host_manifest::{HostManifest, Measurement, PcrEventLogMap, PcrManifest};
pub use pcr::{Pcr, PcrBank, PcrIndex};
