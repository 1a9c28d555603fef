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

//! Exclusion filters that strip known-benign events from an actual event
//! log before it is compared against the expected one. Some boot-time
//! artifacts vary across otherwise identical hosts (kernel command lines,
//! ephemeral file names) and must not surface as deviations.
//!
//! Filters never mutate their input; each returns a new entry containing
//! only the retained events in their original relative order. Each filter
//! applies to one log representation and passes the other through
//! unchanged.

use hvs_model::{EventLogEntry, PcrEvents};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Component names stripped from legacy event logs when no caller-supplied
/// set overrides them. These are boot artifacts known to differ between
/// identically configured hosts.
pub static DEFAULT_COMPONENT_EXCLUSIONS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        "commandLine.",
        "LCP_CONTROL_HASH",
        "initrd",
        "vmlinuz",
        "componentName.imgdb.tgz",
        "componentName.onetime.tgz",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

/// Event labels stripped from legacy event logs by default.
pub static DEFAULT_LABEL_EXCLUSIONS: Lazy<HashSet<String>> =
    Lazy::new(|| ["0x4fe"].iter().map(|s| s.to_string()).collect());

/// Drops criteria events carrying any tag present in the exclude set.
#[derive(Debug, Clone)]
pub struct TagExclusion {
    tags: HashSet<String>,
}

impl TagExclusion {
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        Self { tags: tags.into_iter().collect() }
    }

    pub fn filter(&self, entry: &EventLogEntry) -> EventLogEntry {
        let events = match &entry.events {
            PcrEvents::Criteria(events) => {
                let retained = events
                    .iter()
                    .filter(|event| {
                        let excluded = event.tags.iter().any(|tag| self.tags.contains(tag));
                        if excluded {
                            log::debug!(
                                "Excluding the evaluation of event type '{}'",
                                event.type_name
                            );
                        }
                        !excluded
                    })
                    .cloned()
                    .collect();
                PcrEvents::Criteria(retained)
            }
            other => other.clone(),
        };

        EventLogEntry::new(entry.pcr_index, entry.pcr_bank, events)
    }
}

/// Drops legacy events whose `ComponentName` is in the exclude set, and
/// events carrying the present-but-empty `PackageName`/`PackageVendor`
/// "no package" marker.
#[derive(Debug, Clone)]
pub struct ComponentExclusion {
    components: HashSet<String>,
}

impl ComponentExclusion {
    pub fn new(components: impl IntoIterator<Item = String>) -> Self {
        Self { components: components.into_iter().collect() }
    }

    pub fn default_set() -> Self {
        Self { components: DEFAULT_COMPONENT_EXCLUSIONS.clone() }
    }

    pub fn filter(&self, entry: &EventLogEntry) -> EventLogEntry {
        let events = match &entry.events {
            PcrEvents::EventLogs(events) => {
                let retained = events
                    .iter()
                    .filter(|event| {
                        if let Some(component) = event.info.get("ComponentName") {
                            if self.components.contains(component) {
                                log::debug!(
                                    "Excluding the evaluation of event log '{}' with component name '{}'",
                                    event.label,
                                    component
                                );
                                return false;
                            }
                        }

                        let no_package = matches!(event.info.get("PackageName"), Some(name) if name.is_empty())
                            && matches!(event.info.get("PackageVendor"), Some(vendor) if vendor.is_empty());
                        if no_package {
                            log::debug!(
                                "Excluding the evaluation of event log '{}' with empty package name and vendor",
                                event.label
                            );
                            return false;
                        }

                        true
                    })
                    .cloned()
                    .collect();
                PcrEvents::EventLogs(retained)
            }
            other => other.clone(),
        };

        EventLogEntry::new(entry.pcr_index, entry.pcr_bank, events)
    }
}

/// Drops legacy events whose label is in the exclude set.
#[derive(Debug, Clone)]
pub struct LabelExclusion {
    labels: HashSet<String>,
}

impl LabelExclusion {
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self { labels: labels.into_iter().collect() }
    }

    pub fn default_set() -> Self {
        Self { labels: DEFAULT_LABEL_EXCLUSIONS.clone() }
    }

    pub fn filter(&self, entry: &EventLogEntry) -> EventLogEntry {
        let events = match &entry.events {
            PcrEvents::EventLogs(events) => {
                let retained = events
                    .iter()
                    .filter(|event| {
                        let excluded = self.labels.contains(&event.label);
                        if excluded {
                            log::debug!(
                                "Excluding the evaluation of event log with label '{}'",
                                event.label
                            );
                        }
                        !excluded
                    })
                    .cloned()
                    .collect();
                PcrEvents::EventLogs(retained)
            }
            other => other.clone(),
        };

        EventLogEntry::new(entry.pcr_index, entry.pcr_bank, events)
    }
}
