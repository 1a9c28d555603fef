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

//! Measurement event logs and the multiset subtraction used to diff an
//! actual log against an expected one.
//!
//! A PCR's log comes in exactly one of two representations: the legacy
//! key/value form ([`EventLog`]) or the newer tag based criteria form
//! ([`EventLogCriteria`]). The two are modeled as one tagged union
//! ([`PcrEvents`]) so an entry can never carry both or neither.

use crate::error::VerifierError;
use crate::pcr::{PcrBank, PcrIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One measured event in the legacy key/value representation.
///
/// `info` keys are case sensitive. `PackageName`/`PackageVendor` present
/// but empty is a recognized "no package" marker, consulted by the
/// component exclusion filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub label: String,
    #[serde(default)]
    pub info: HashMap<String, String>,
    /// Hex encoded digest extended into the PCR for this event.
    pub measurement: String,
}

impl EventLog {
    /// Equality used by the set algebra: label plus the full info map,
    /// key order insensitive, values compared exactly.
    fn same_event(&self, other: &EventLog) -> bool {
        self.label == other.label && self.info == other.info
    }
}

/// One measured event in the newer criteria representation. `tags` are
/// informational: they never participate in equality, but the tag
/// exclusion filter consults them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogCriteria {
    pub type_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Hex encoded digest extended into the PCR for this event.
    pub measurement: String,
}

impl EventLogCriteria {
    fn same_event(&self, other: &EventLogCriteria) -> bool {
        self.type_name == other.type_name && self.measurement == other.measurement
    }
}

/// The events of one PCR's log, in exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcrEvents {
    #[serde(rename = "event_logs")]
    EventLogs(Vec<EventLog>),
    #[serde(rename = "criteria")]
    Criteria(Vec<EventLogCriteria>),
}

impl PcrEvents {
    pub fn len(&self) -> usize {
        match self {
            PcrEvents::EventLogs(events) => events.len(),
            PcrEvents::Criteria(events) => events.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hex encoded digests of every event, in log order. Both
    /// representations carry a measurement, so replay works over either.
    pub fn measurements(&self) -> Vec<&str> {
        match self {
            PcrEvents::EventLogs(events) => {
                events.iter().map(|event| event.measurement.as_str()).collect()
            }
            PcrEvents::Criteria(events) => {
                events.iter().map(|event| event.measurement.as_str()).collect()
            }
        }
    }
}

/// The full event log of one PCR in one bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub pcr_index: PcrIndex,
    pub pcr_bank: PcrBank,
    pub events: PcrEvents,
}

/// Result of subtracting one event log from another.
///
/// `remainder` holds the events of the left operand with no counterpart at
/// all in the right operand. `field_drift` holds the events that matched an
/// event of the right operand by label (or type name) but differed in some
/// field; these are diagnostic, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogSubtraction {
    pub remainder: EventLogEntry,
    pub field_drift: EventLogEntry,
}

impl EventLogEntry {
    pub fn new(pcr_index: PcrIndex, pcr_bank: PcrBank, events: PcrEvents) -> Self {
        Self { pcr_index, pcr_bank, events }
    }

    /// Subtract `other` from `self`, matching identical events one-for-one.
    ///
    /// Both entries must describe the same PCR of the same bank and carry
    /// the same log representation; anything else is an infrastructure
    /// error, never a trust verdict.
    ///
    /// Events of `self` without an exact match are split two ways: if a
    /// so-far unmatched event of `other` carries the same label (legacy
    /// form) or type name (criteria form), the pair is reported as field
    /// drift and both are consumed; otherwise the event lands in the
    /// remainder.
    ///
    /// # Arguments
    /// * `other` - The event log to subtract from `self`
    ///
    /// # Returns
    /// * `Result<EventLogSubtraction, VerifierError>` - Remainder and field
    ///   drift on success, error on malformed input
    pub fn subtract(&self, other: &EventLogEntry) -> Result<EventLogSubtraction, VerifierError> {
        if self.pcr_bank != other.pcr_bank || self.pcr_index != other.pcr_index {
            return Err(VerifierError::PcrEntryMismatch {
                bank: self.pcr_bank,
                index: self.pcr_index,
                other_bank: other.pcr_bank,
                other_index: other.pcr_index,
            });
        }

        let (remainder, field_drift) = match (&self.events, &other.events) {
            (PcrEvents::EventLogs(own), PcrEvents::EventLogs(others)) => {
                let (remainder, drift) = subtract_events(
                    own,
                    others,
                    EventLog::same_event,
                    |a, b| a.label == b.label,
                );
                (PcrEvents::EventLogs(remainder), PcrEvents::EventLogs(drift))
            }
            (PcrEvents::Criteria(own), PcrEvents::Criteria(others)) => {
                let (remainder, drift) = subtract_events(
                    own,
                    others,
                    EventLogCriteria::same_event,
                    |a, b| a.type_name == b.type_name,
                );
                (PcrEvents::Criteria(remainder), PcrEvents::Criteria(drift))
            }
            _ => {
                return Err(VerifierError::EventKindMismatch {
                    bank: self.pcr_bank,
                    index: self.pcr_index,
                });
            }
        };

        Ok(EventLogSubtraction {
            remainder: EventLogEntry::new(self.pcr_index, self.pcr_bank, remainder),
            field_drift: EventLogEntry::new(self.pcr_index, self.pcr_bank, field_drift),
        })
    }
}

/// Multiset subtraction over one concrete event type. `equal` decides full
/// equality; `paired` decides whether a leftover pair is field drift.
fn subtract_events<T: Clone>(
    own: &[T],
    others: &[T],
    equal: impl Fn(&T, &T) -> bool,
    paired: impl Fn(&T, &T) -> bool,
) -> (Vec<T>, Vec<T>) {
    let mut consumed = vec![false; others.len()];
    let mut leftover: Vec<&T> = Vec::new();

    // First pass: consume exact matches one-for-one.
    for event in own {
        let matched = others
            .iter()
            .enumerate()
            .find(|(i, candidate)| !consumed[*i] && equal(event, candidate));
        match matched {
            Some((i, _)) => consumed[i] = true,
            None => leftover.push(event),
        }
    }

    // Second pass: pair leftovers by label so a partial match surfaces as
    // field drift instead of a full miss.
    let mut remainder = Vec::new();
    let mut field_drift = Vec::new();
    for event in leftover {
        let pair = others
            .iter()
            .enumerate()
            .find(|(i, candidate)| !consumed[*i] && paired(event, candidate));
        match pair {
            Some((i, _)) => {
                consumed[i] = true;
                field_drift.push(event.clone());
            }
            None => remainder.push(event.clone()),
        }
    }

    (remainder, field_drift)
}
