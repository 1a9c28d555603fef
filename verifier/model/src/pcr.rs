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

//! PCR bank, index and value types shared by flavors and host manifests.

use crate::error::VerifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Digest bank a PCR value was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PcrBank {
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA384")]
    Sha384,
}

impl PcrBank {
    /// Size in bytes of a digest in this bank.
    pub fn digest_size(&self) -> usize {
        match self {
            PcrBank::Sha1 => 20,
            PcrBank::Sha256 => 32,
            PcrBank::Sha384 => 48,
        }
    }
}

impl fmt::Display for PcrBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PcrBank::Sha1 => write!(f, "SHA1"),
            PcrBank::Sha256 => write!(f, "SHA256"),
            PcrBank::Sha384 => write!(f, "SHA384"),
        }
    }
}

impl FromStr for PcrBank {
    type Err = VerifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SHA1" => Ok(PcrBank::Sha1),
            "SHA256" => Ok(PcrBank::Sha256),
            "SHA384" => Ok(PcrBank::Sha384),
            _ => Err(VerifierError::InternalError(format!("Unsupported PCR bank: {}", s))),
        }
    }
}

/// A TPM PCR index. Construction is the only validation point, so any
/// `PcrIndex` in circulation is known to be in the range 0-23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PcrIndex(u8);

impl PcrIndex {
    pub const MAX: u32 = 23;

    pub fn new(index: u32) -> Result<Self, VerifierError> {
        if index > Self::MAX {
            return Err(VerifierError::InvalidPcrIndex(index));
        }
        Ok(PcrIndex(index as u8))
    }

    pub fn value(&self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u32> for PcrIndex {
    type Error = VerifierError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PcrIndex::new(value)
    }
}

impl From<PcrIndex> for u32 {
    fn from(index: PcrIndex) -> Self {
        index.value()
    }
}

impl fmt::Display for PcrIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One PCR value: bank, index and the hex encoded register content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcr {
    pub index: PcrIndex,
    pub bank: PcrBank,
    pub value: String,
}

impl Pcr {
    pub fn new(index: PcrIndex, bank: PcrBank, value: impl Into<String>) -> Self {
        Self { index, bank, value: value.into() }
    }
}
