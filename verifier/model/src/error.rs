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

use crate::pcr::{PcrBank, PcrIndex};
use thiserror::Error;

/// Infrastructure errors raised while evaluating a rule against a host
/// manifest. These are strictly disjoint from trust faults: a
/// `VerifierError` means the evaluation of that rule is inconclusive and
/// must be escalated, never converted into a pass or a compromise finding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    #[error("Invalid PCR index: {0}, valid range is 0-23")]
    InvalidPcrIndex(u32),

    #[error("Cannot subtract event log for PCR {other_index} of {other_bank} from event log for PCR {index} of {bank}")]
    PcrEntryMismatch {
        bank: PcrBank,
        index: PcrIndex,
        other_bank: PcrBank,
        other_index: PcrIndex,
    },

    #[error("Cannot compare event logs with different representations for PCR {index} of {bank}")]
    EventKindMismatch { bank: PcrBank, index: PcrIndex },

    #[error("Invalid digest value: {0}")]
    InvalidDigest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
