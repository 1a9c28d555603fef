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

//! Rule evaluation engine for host verification: builds a rule set from a
//! flavor, applies every rule to a collected host manifest, and reports
//! structured trust faults and field-level mismatches.
//!
//! Policy violations are always data (`Fault`, `MismatchField`) inside a
//! `RuleResult`; `VerifierError` is reserved for malformed input and makes
//! the affected rule inconclusive.

pub mod exclusion;
pub mod fault;
pub mod result;
pub mod rule;
pub mod rules;

mod factory;
mod verifier;

pub use factory::build_rules;
pub use fault::Fault;
pub use result::{MismatchField, RuleInfo, RuleName, RuleResult};
pub use rule::Rule;
pub use verifier::{TrustReport, Verifier};
