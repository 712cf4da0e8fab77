//! # Semantic Rules
//!
//! The fixed battery of consistency checks a JSON Schema cannot express.
//! Rules run in catalogue order and each one appends its findings to the
//! shared [`Diagnostics`] buffer in document order. No rule stops the run.
//!
//! ## Pair de-duplication
//!
//! Pairwise checks (duplicate ids, duplicate group membership) only report
//! a pair when the second position is after the first, so each duplicate
//! pair yields exactly one message.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use bosh_core::Descriptor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extended::EXTENDED_RULES;
use crate::report::{Diagnostics, ValidationReport};

/// Which rules a validator runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleProfile {
    /// The thirteen core rules.
    #[default]
    Classic,
    /// Core rules followed by the output, all-or-none and required-input
    /// checks.
    Extended,
}

impl RuleProfile {
    /// Rules of this profile, in execution order.
    pub fn rules(self) -> impl Iterator<Item = &'static Rule> {
        let extended: &'static [Rule] = match self {
            Self::Classic => &[],
            Self::Extended => EXTENDED_RULES,
        };
        CLASSIC_RULES.iter().chain(extended.iter())
    }
}

impl FromStr for RuleProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "extended" => Ok(Self::Extended),
            other => Err(format!(
                "unknown rule profile '{other}' (expected 'classic' or 'extended')"
            )),
        }
    }
}

impl fmt::Display for RuleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => f.write_str("classic"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

/// One entry of the rule catalogue.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short stable code (e.g. `"R03"`).
    pub code: &'static str,
    /// One-line description of what the rule enforces.
    pub summary: &'static str,
    pub(crate) check: fn(&Descriptor, &mut Diagnostics),
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("code", &self.code)
            .field("summary", &self.summary)
            .finish()
    }
}

impl Rule {
    /// Run this rule alone against a descriptor.
    pub fn apply(&self, descriptor: &Descriptor, diagnostics: &mut Diagnostics) {
        (self.check)(descriptor, diagnostics);
    }
}

/// The core rules, in execution order.
pub const CLASSIC_RULES: &[Rule] = &[
    Rule {
        code: "R01",
        summary: "every input command-line key appears in the command line",
        check: keys_in_command_line,
    },
    Rule {
        code: "R02",
        summary: "no input command-line key contains another input's key",
        check: keys_not_nested,
    },
    Rule {
        code: "R03",
        summary: "ids are unique across inputs, outputs and groups",
        check: ids_unique,
    },
    Rule {
        code: "R04",
        summary: "group members, requires-inputs and disables-inputs name existing inputs",
        check: references_exist,
    },
    Rule {
        code: "R05",
        summary: "no input both requires and disables the same input",
        check: requires_disables_disjoint,
    },
    Rule {
        code: "R06",
        summary: "an input belongs to at most one group, at most once",
        check: membership_unique,
    },
    Rule {
        code: "R07",
        summary: "mutually-exclusive groups have no required or inter-requiring members",
        check: mutex_groups,
    },
    Rule {
        code: "R08",
        summary: "one-is-required groups have no required members",
        check: one_is_required_groups,
    },
    Rule {
        code: "R09",
        summary: "Flag inputs have a command-line flag, are not lists and are not required",
        check: flag_inputs,
    },
    Rule {
        code: "R10",
        summary: "Number inputs have minimum <= maximum",
        check: number_bounds,
    },
    Rule {
        code: "R11",
        summary: "list inputs have 0 <= min-list-entries <= max-list-entries and max > 0",
        check: list_bounds,
    },
    Rule {
        code: "R12",
        summary: "Enum inputs have choices and a default among them",
        check: enum_inputs,
    },
    Rule {
        code: "R13",
        summary: "non-list inputs do not declare list entry bounds",
        check: non_list_bounds,
    },
];

/// Runs a rule profile over descriptors.
///
/// Holds no per-run state, so one validator can be shared across threads
/// and reused for any number of descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorValidator {
    profile: RuleProfile,
}

impl DescriptorValidator {
    pub fn new(profile: RuleProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> RuleProfile {
        self.profile
    }

    /// Append every semantic finding to `prior_errors` and close the report.
    pub fn validate(&self, descriptor: &Descriptor, prior_errors: Vec<String>) -> ValidationReport {
        let mut diagnostics = Diagnostics::from_prior(prior_errors);
        let prior = diagnostics.len();

        for rule in self.profile.rules() {
            rule.apply(descriptor, &mut diagnostics);
        }

        tracing::debug!(
            profile = %self.profile,
            prior,
            violations = diagnostics.len() - prior,
            "semantic validation finished"
        );

        diagnostics.into_report()
    }
}

/// Validate with the core rules and return the plain message list.
///
/// Returns exactly `["OK"]` when neither `prior_errors` nor the rules
/// produced anything.
pub fn validate(descriptor: &Descriptor, prior_errors: Vec<String>) -> Vec<String> {
    DescriptorValidator::default()
        .validate(descriptor, prior_errors)
        .into_messages()
}

/// Render a bound the way the diagnostics print it.
pub(crate) fn fmt_bound(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

fn keys_in_command_line(d: &Descriptor, out: &mut Diagnostics) {
    for key in d.inputs.iter().filter_map(|i| i.command_line_key.as_deref()) {
        if !d.command_line.contains(key) {
            out.push(format!("{key} not in cmd line"));
        }
    }
}

fn keys_not_nested(d: &Descriptor, out: &mut Diagnostics) {
    let keys: Vec<(usize, &str)> = d
        .inputs
        .iter()
        .enumerate()
        .filter_map(|(i, input)| input.command_line_key.as_deref().map(|k| (i, k)))
        .collect();

    for &(i, outer) in &keys {
        for &(j, inner) in &keys {
            if i != j && outer.contains(inner) {
                out.push(format!("{outer} contains {inner}"));
            }
        }
    }
}

fn ids_unique(d: &Descriptor, out: &mut Diagnostics) {
    let ids = d.all_ids();
    for (i, first) in ids.iter().enumerate() {
        for second in &ids[i + 1..] {
            if first == second {
                out.push(format!("Non-unique id {first}"));
            }
        }
    }
}

fn references_exist(d: &Descriptor, out: &mut Diagnostics) {
    let input_ids: HashSet<&str> = d.input_ids().into_iter().collect();

    for group in &d.groups {
        for member in &group.members {
            if !input_ids.contains(member.as_str()) {
                out.push(format!(
                    "Member id {member} from group {} is not present",
                    group.id
                ));
            }
        }
    }

    for input in &d.inputs {
        for required in &input.requires_inputs {
            if !input_ids.contains(required.as_str()) {
                out.push(format!("Required id {required} for {} was not found", input.id));
            }
        }
        for disabled in &input.disables_inputs {
            if !input_ids.contains(disabled.as_str()) {
                out.push(format!("Disabled id {disabled} for {} was not found", input.id));
            }
        }
    }
}

fn requires_disables_disjoint(d: &Descriptor, out: &mut Diagnostics) {
    for input in &d.inputs {
        for required in &input.requires_inputs {
            if input.disables_inputs.contains(required) {
                out.push(format!("Id {} requires and disables {required}", input.id));
            }
        }
    }
}

fn membership_unique(d: &Descriptor, out: &mut Diagnostics) {
    // (group id, member id) in (group, position) order.
    let memberships: Vec<(&str, &str)> = d
        .groups
        .iter()
        .flat_map(|g| g.members.iter().map(move |m| (g.id.as_str(), m.as_str())))
        .collect();

    for (a, &(first_group, member)) in memberships.iter().enumerate() {
        for &(second_group, other) in &memberships[a + 1..] {
            if member == other {
                out.push(format!(
                    "{member} cannot appear twice (in groups {first_group} & {second_group})"
                ));
            }
        }
    }
}

fn mutex_groups(d: &Descriptor, out: &mut Diagnostics) {
    for group in d.groups.iter().filter(|g| g.mutually_exclusive) {
        for member in &group.members {
            let Some(input) = d.input_by_id(member) else {
                continue;
            };
            if input.is_required() {
                out.push(format!(
                    "{member} in mutex group {} cannot be required",
                    group.id
                ));
            }
            for required in &input.requires_inputs {
                if group.members.contains(required) {
                    out.push(format!(
                        "{member} in mutex group {} cannot require fellow member {required}",
                        group.id
                    ));
                }
            }
        }
    }
}

fn one_is_required_groups(d: &Descriptor, out: &mut Diagnostics) {
    for group in d.groups.iter().filter(|g| g.one_is_required) {
        for member in &group.members {
            if d.input_by_id(member).is_some_and(|i| i.is_required()) {
                out.push(format!(
                    "{member} in one-is-required group {} should not be required",
                    group.id
                ));
            }
        }
    }
}

fn flag_inputs(d: &Descriptor, out: &mut Diagnostics) {
    for input in d.inputs.iter().filter(|i| i.is_flag()) {
        if input.command_line_flag.is_none() {
            out.push(format!("{} must have a command-line flag", input.id));
        }
        if input.list {
            out.push(format!("{} cannot be a list", input.id));
        }
        if input.is_required() {
            out.push(format!("{} should not be required", input.id));
        }
    }
}

fn number_bounds(d: &Descriptor, out: &mut Diagnostics) {
    for input in d.inputs.iter().filter(|i| i.is_number()) {
        let min = input.minimum.unwrap_or(f64::NEG_INFINITY);
        let max = input.maximum.unwrap_or(f64::INFINITY);
        if min > max {
            out.push(format!(
                "{} cannot have greater min ({}) than max ({})",
                input.id,
                fmt_bound(min),
                fmt_bound(max)
            ));
        }
    }
}

fn list_bounds(d: &Descriptor, out: &mut Diagnostics) {
    for input in d.inputs.iter().filter(|i| i.list) {
        let min = input.min_list_entries.unwrap_or(0.0);
        let max = input.max_list_entries.unwrap_or(f64::INFINITY);
        if min > max {
            out.push(format!(
                "{} min list entries ({}) greater than max list entries ({})",
                input.id,
                fmt_bound(min),
                fmt_bound(max)
            ));
        }
        if min < 0.0 {
            out.push(format!(
                "{} cannot have negative min list entries {}",
                input.id,
                fmt_bound(min)
            ));
        }
        if max <= 0.0 {
            out.push(format!(
                "{} cannot have non-positive max list entries {}",
                input.id,
                fmt_bound(max)
            ));
        }
    }
}

fn enum_inputs(d: &Descriptor, out: &mut Diagnostics) {
    for input in d.inputs.iter().filter(|i| i.is_enum()) {
        if input.enum_value_choices.is_empty() {
            out.push(format!("{} must have at least one value choice", input.id));
        }
        if let Some(default) = &input.default_value {
            if !input.enum_value_choices.iter().any(|c| same_choice(c, default)) {
                out.push(format!(
                    "{} cannot have a default value outside its choices",
                    input.id
                ));
            }
        }
    }
}

/// Choice equality: numbers compare by value (`1` matches `1.0`), anything
/// else structurally.
fn same_choice(choice: &Value, default: &Value) -> bool {
    match (choice.as_f64(), default.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => choice == default,
    }
}

fn non_list_bounds(d: &Descriptor, out: &mut Diagnostics) {
    for input in d.inputs.iter().filter(|i| !i.list) {
        if input.min_list_entries.is_some() {
            out.push(format!(
                "{} cannot specify min-list-entries as a non-list",
                input.id
            ));
        }
        if input.max_list_entries.is_some() {
            out.push(format!(
                "{} cannot specify max-list-entries as a non-list",
                input.id
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn descriptor(value: Value) -> Descriptor {
        Descriptor::from_value(&value).unwrap()
    }

    fn run(value: Value) -> Vec<String> {
        validate(&descriptor(value), Vec::new())
    }

    fn run_rule(check: fn(&Descriptor, &mut Diagnostics), value: Value) -> Vec<String> {
        let mut diagnostics = Diagnostics::default();
        check(&descriptor(value), &mut diagnostics);
        diagnostics.messages().to_vec()
    }

    #[test]
    fn clean_descriptor_is_ok() {
        let out = run(json!({
            "command-line": "tool [A] [B]",
            "inputs": [
                {"id": "a", "type": "String", "command-line-key": "[A]"},
                {"id": "b", "type": "Number", "command-line-key": "[B]", "optional": true}
            ]
        }));
        assert_eq!(out, ["OK"]);
    }

    #[test]
    fn key_present_passes_key_absent_fails() {
        let out = run_rule(
            keys_in_command_line,
            json!({
                "command-line": "tool -x VALUE",
                "inputs": [
                    {"id": "x", "type": "String", "command-line-key": "-x"},
                    {"id": "y", "type": "String", "command-line-key": "-xyz"}
                ]
            }),
        );
        assert_eq!(out, ["-xyz not in cmd line"]);
    }

    #[test]
    fn containment_is_case_sensitive() {
        let out = run_rule(
            keys_in_command_line,
            json!({
                "command-line": "tool [in]",
                "inputs": [{"id": "a", "type": "String", "command-line-key": "[IN]"}]
            }),
        );
        assert_eq!(out, ["[IN] not in cmd line"]);
    }

    #[test]
    fn nested_keys_reported_from_containing_side() {
        let out = run_rule(
            keys_not_nested,
            json!({
                "command-line": "tool [IN] [IN_EXTRA]",
                "inputs": [
                    {"id": "a", "type": "String", "command-line-key": "[IN"},
                    {"id": "b", "type": "String", "command-line-key": "[IN_EXTRA]"}
                ]
            }),
        );
        assert_eq!(out, ["[IN_EXTRA] contains [IN"]);
    }

    #[test]
    fn key_is_never_compared_with_itself() {
        let out = run_rule(
            keys_not_nested,
            json!({
                "command-line": "tool [A]",
                "inputs": [{"id": "a", "type": "String", "command-line-key": "[A]"}]
            }),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn inputs_without_keys_are_skipped() {
        let out = run(json!({
            "command-line": "tool",
            "inputs": [{"id": "a", "type": "String"}]
        }));
        assert_eq!(out, ["OK"]);
    }

    #[test]
    fn duplicate_id_reported_once() {
        let out = run_rule(
            ids_unique,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "x", "type": "String"},
                    {"id": "x", "type": "String"}
                ]
            }),
        );
        assert_eq!(out, ["Non-unique id x"]);
    }

    #[test]
    fn ids_unique_across_entity_kinds() {
        let out = run_rule(
            ids_unique,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "x", "type": "String"}],
                "output-files": [{"id": "x"}],
                "groups": [{"id": "x", "members": []}]
            }),
        );
        assert_eq!(out, ["Non-unique id x", "Non-unique id x", "Non-unique id x"]);
    }

    #[test]
    fn dangling_references_in_order() {
        let out = run_rule(
            references_exist,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "a", "type": "String", "requires-inputs": ["r"], "disables-inputs": ["d"]}
                ],
                "groups": [{"id": "g", "members": ["a", "ghost"]}]
            }),
        );
        assert_eq!(
            out,
            [
                "Member id ghost from group g is not present",
                "Required id r for a was not found",
                "Disabled id d for a was not found",
            ]
        );
    }

    #[test]
    fn requires_and_disables_same_input() {
        let out = run_rule(
            requires_disables_disjoint,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "a", "type": "String", "requires-inputs": ["b"], "disables-inputs": ["b"]},
                    {"id": "b", "type": "String"}
                ]
            }),
        );
        assert_eq!(out, ["Id a requires and disables b"]);
    }

    #[test]
    fn member_twice_within_and_across_groups() {
        let out = run_rule(
            membership_unique,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "a", "type": "String"}, {"id": "b", "type": "String"}],
                "groups": [
                    {"id": "g1", "members": ["a", "a"]},
                    {"id": "g2", "members": ["b"]},
                    {"id": "g3", "members": ["b"]}
                ]
            }),
        );
        assert_eq!(
            out,
            [
                "a cannot appear twice (in groups g1 & g1)",
                "b cannot appear twice (in groups g2 & g3)",
            ]
        );
    }

    #[test]
    fn mutex_required_member() {
        let out = run_rule(
            mutex_groups,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "a", "type": "String", "optional": false}],
                "groups": [{"id": "g", "members": ["a"], "mutually-exclusive": true}]
            }),
        );
        assert_eq!(out, ["a in mutex group g cannot be required"]);
    }

    #[test]
    fn mutex_member_requiring_fellow() {
        let out = run_rule(
            mutex_groups,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "a", "type": "String", "optional": true, "requires-inputs": ["b", "c"]},
                    {"id": "b", "type": "String", "optional": true},
                    {"id": "c", "type": "String", "optional": true}
                ],
                "groups": [{"id": "g", "members": ["a", "b"], "mutually-exclusive": true}]
            }),
        );
        assert_eq!(out, ["a in mutex group g cannot require fellow member b"]);
    }

    #[test]
    fn missing_optional_is_not_required() {
        let out = run_rule(
            mutex_groups,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "a", "type": "String"}],
                "groups": [{"id": "g", "members": ["a", "ghost"], "mutually-exclusive": true}]
            }),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn non_mutex_group_ignored_by_mutex_rule() {
        let out = run_rule(
            mutex_groups,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "a", "type": "String", "optional": false}],
                "groups": [{"id": "g", "members": ["a"]}]
            }),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn one_is_required_with_required_member() {
        let out = run_rule(
            one_is_required_groups,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "a", "type": "String", "optional": false},
                    {"id": "b", "type": "String", "optional": true}
                ],
                "groups": [{"id": "g", "members": ["a", "b"], "one-is-required": true}]
            }),
        );
        assert_eq!(out, ["a in one-is-required group g should not be required"]);
    }

    #[test]
    fn flag_yields_three_findings() {
        let out = run_rule(
            flag_inputs,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "f", "type": "Flag", "list": true, "optional": false}]
            }),
        );
        assert_eq!(
            out,
            [
                "f must have a command-line flag",
                "f cannot be a list",
                "f should not be required",
            ]
        );
    }

    #[test]
    fn well_formed_flag_passes() {
        let out = run_rule(
            flag_inputs,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "f", "type": "Flag", "command-line-flag": "-v", "optional": true}]
            }),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn inverted_number_bounds() {
        let out = run_rule(
            number_bounds,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "n", "type": "Number", "minimum": 10, "maximum": 2.5}]
            }),
        );
        assert_eq!(out, ["n cannot have greater min (10) than max (2.5)"]);
    }

    #[test]
    fn equal_or_single_number_bounds_pass() {
        let out = run_rule(
            number_bounds,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "eq", "type": "Number", "minimum": 3, "maximum": 3},
                    {"id": "lo", "type": "Number", "minimum": 1000},
                    {"id": "hi", "type": "Number", "maximum": -1000},
                    {"id": "s", "type": "String", "minimum": 5, "maximum": 1}
                ]
            }),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn list_min_greater_than_max() {
        let out = run_rule(
            list_bounds,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "l", "type": "String", "list": true,
                            "min-list-entries": 5, "max-list-entries": 2}]
            }),
        );
        assert_eq!(out, ["l min list entries (5) greater than max list entries (2)"]);
    }

    #[test]
    fn list_negative_and_non_positive_bounds() {
        let out = run_rule(
            list_bounds,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "neg", "type": "String", "list": true, "min-list-entries": -1},
                    {"id": "zero", "type": "String", "list": true, "max-list-entries": 0}
                ]
            }),
        );
        assert_eq!(
            out,
            [
                "neg cannot have negative min list entries -1",
                "zero cannot have non-positive max list entries 0",
            ]
        );
    }

    #[test]
    fn enum_without_choices_and_bad_default() {
        let out = run_rule(
            enum_inputs,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "e1", "type": "Enum"},
                    {"id": "e2", "type": "Enum", "enum-value-choices": ["a", "b"], "default-value": "c"},
                    {"id": "e3", "type": "Enum", "enum-value-choices": ["a"], "default-value": "a"}
                ]
            }),
        );
        assert_eq!(
            out,
            [
                "e1 must have at least one value choice",
                "e2 cannot have a default value outside its choices",
            ]
        );
    }

    #[test]
    fn enum_default_matches_numerically() {
        let out = run_rule(
            enum_inputs,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "e1", "type": "Enum", "enum-value-choices": [1.0, 2.0], "default-value": 1},
                    {"id": "e2", "type": "Enum", "enum-value-choices": [1, 2], "default-value": 2.0},
                    {"id": "e3", "type": "Enum", "enum-value-choices": [1, 2], "default-value": "1"},
                    {"id": "e4", "type": "Enum", "enum-value-choices": [1.5], "default-value": 1}
                ]
            }),
        );
        assert_eq!(
            out,
            [
                "e3 cannot have a default value outside its choices",
                "e4 cannot have a default value outside its choices",
            ]
        );
    }

    #[test]
    fn non_list_with_list_bounds() {
        let out = run_rule(
            non_list_bounds,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "s", "type": "String", "min-list-entries": 0, "max-list-entries": 4}]
            }),
        );
        assert_eq!(
            out,
            [
                "s cannot specify min-list-entries as a non-list",
                "s cannot specify max-list-entries as a non-list",
            ]
        );
    }

    #[test]
    fn findings_follow_rule_order() {
        let out = run(json!({
            "command-line": "tool",
            "inputs": [
                {"id": "s", "type": "String", "max-list-entries": 4},
                {"id": "f", "type": "Flag", "command-line-flag": "-f", "command-line-key": "[F]"},
                {"id": "f", "type": "String"}
            ]
        }));
        assert_eq!(
            out,
            [
                "[F] not in cmd line",
                "Non-unique id f",
                "s cannot specify max-list-entries as a non-list",
            ]
        );
    }

    #[test]
    fn prior_errors_come_first() {
        let d = descriptor(json!({
            "command-line": "tool",
            "inputs": [{"id": "a", "type": "String", "command-line-key": "[A]"}]
        }));
        let out = validate(&d, vec!["/inputs/0: schema says no".into()]);
        assert_eq!(out, ["/inputs/0: schema says no", "[A] not in cmd line"]);
    }

    #[test]
    fn profile_parses_case_insensitively() {
        assert_eq!("Extended".parse::<RuleProfile>(), Ok(RuleProfile::Extended));
        assert_eq!("classic".parse::<RuleProfile>(), Ok(RuleProfile::Classic));
        assert!("strict".parse::<RuleProfile>().is_err());
    }

    #[test]
    fn catalogue_codes_are_unique() {
        let codes: HashSet<&str> = RuleProfile::Extended.rules().map(|r| r.code).collect();
        assert_eq!(codes.len(), CLASSIC_RULES.len() + EXTENDED_RULES.len());
        assert_eq!(RuleProfile::Classic.rules().count(), 13);
    }

    #[test]
    fn bound_rendering() {
        assert_eq!(fmt_bound(5.0), "5");
        assert_eq!(fmt_bound(2.5), "2.5");
        assert_eq!(fmt_bound(f64::INFINITY), "Infinity");
        assert_eq!(fmt_bound(f64::NEG_INFINITY), "-Infinity");
    }
}
