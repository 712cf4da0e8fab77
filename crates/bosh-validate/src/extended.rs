//! # Extended Rules
//!
//! Checks enabled by [`RuleProfile::Extended`](crate::RuleProfile). They
//! cover output files, group policy and shared command-line keys, and always
//! run after the core rules so the core findings keep their order.

use bosh_core::Descriptor;

use crate::report::Diagnostics;
use crate::rules::Rule;

/// Extended rules, in execution order.
pub const EXTENDED_RULES: &[Rule] = &[
    Rule {
        code: "E01",
        summary: "output command-line keys appear in the command line or a path template",
        check: output_keys_placed,
    },
    Rule {
        code: "E02",
        summary: "output files have distinct path templates",
        check: output_paths_unique,
    },
    Rule {
        code: "E03",
        summary: "no input disables a required input",
        check: no_disabling_required,
    },
    Rule {
        code: "E04",
        summary: "required inputs neither require nor disable other inputs",
        check: required_inputs_unconditional,
    },
    Rule {
        code: "E05",
        summary: "all-or-none groups carry no other policy and no required members",
        check: all_or_none_groups,
    },
    Rule {
        code: "E06",
        summary: "a one-is-required group is not a subset of an all-or-none group",
        check: one_is_required_not_nested,
    },
    Rule {
        code: "E07",
        summary: "inputs sharing a command-line key are all in one mutually-exclusive group",
        check: shared_keys_mutually_exclusive,
    },
];

fn output_keys_placed(d: &Descriptor, out: &mut Diagnostics) {
    let templates: Vec<&str> = d
        .output_files
        .iter()
        .filter_map(|o| o.path_template.as_deref())
        .collect();

    for key in d.output_files.iter().filter_map(|o| o.command_line_key.as_deref()) {
        if !d.command_line.contains(key) && !templates.iter().any(|t| t.contains(key)) {
            out.push(format!("{key} not in cmd line or path templates"));
        }
    }
}

fn output_paths_unique(d: &Descriptor, out: &mut Diagnostics) {
    let paths: Vec<(&str, &str)> = d
        .output_files
        .iter()
        .filter_map(|o| o.path_template.as_deref().map(|p| (o.id.as_str(), p)))
        .collect();

    for (i, &(first, path)) in paths.iter().enumerate() {
        for &(second, other) in &paths[i + 1..] {
            if path == other {
                out.push(format!(
                    "Outputs {first} and {second} have the same path-template"
                ));
            }
        }
    }
}

fn no_disabling_required(d: &Descriptor, out: &mut Diagnostics) {
    for input in &d.inputs {
        for disabled in &input.disables_inputs {
            if d.input_by_id(disabled).is_some_and(|i| i.is_required()) {
                out.push(format!(
                    "Id {} disables required id {disabled}",
                    input.id
                ));
            }
        }
    }
}

fn required_inputs_unconditional(d: &Descriptor, out: &mut Diagnostics) {
    for input in d.inputs.iter().filter(|i| i.is_required()) {
        if !input.requires_inputs.is_empty() || !input.disables_inputs.is_empty() {
            out.push(format!(
                "Id {} is required and cannot require or disable other inputs",
                input.id
            ));
        }
    }
}

fn all_or_none_groups(d: &Descriptor, out: &mut Diagnostics) {
    for group in d.groups.iter().filter(|g| g.all_or_none) {
        if group.mutually_exclusive || group.one_is_required {
            out.push(format!(
                "All-or-none group {} cannot be mutually-exclusive or one-is-required",
                group.id
            ));
        }
        for member in &group.members {
            if d.input_by_id(member).is_some_and(|i| i.is_required()) {
                out.push(format!(
                    "{member} in all-or-none group {} should not be required",
                    group.id
                ));
            }
        }
    }
}

fn one_is_required_not_nested(d: &Descriptor, out: &mut Diagnostics) {
    for (i, group) in d.groups.iter().enumerate() {
        if !group.one_is_required {
            continue;
        }
        for (j, other) in d.groups.iter().enumerate() {
            if i == j || !other.all_or_none {
                continue;
            }
            if group.members.iter().all(|m| other.members.contains(m)) {
                out.push(format!(
                    "One-is-required group {} cannot be a subset of all-or-none group {}",
                    group.id, other.id
                ));
            }
        }
    }
}

fn shared_keys_mutually_exclusive(d: &Descriptor, out: &mut Diagnostics) {
    let keyed: Vec<(&str, &str)> = d
        .inputs
        .iter()
        .filter_map(|i| i.command_line_key.as_deref().map(|k| (k, i.id.as_str())))
        .collect();

    for (i, &(key, _)) in keyed.iter().enumerate() {
        // Report each shared key once, at its first occurrence.
        if keyed[..i].iter().any(|&(k, _)| k == key) {
            continue;
        }
        let sharing: Vec<&str> = keyed
            .iter()
            .filter(|&&(k, _)| k == key)
            .map(|&(_, id)| id)
            .collect();
        if sharing.len() < 2 {
            continue;
        }
        let exclusive = d.groups.iter().any(|g| {
            g.mutually_exclusive && sharing.iter().all(|id| g.members.iter().any(|m| m == id))
        });
        if !exclusive {
            out.push(format!("{key} belongs to 2+ non exclusive IDs"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DescriptorValidator, RuleProfile};
    use serde_json::{json, Value};

    fn run_rule(check: fn(&Descriptor, &mut Diagnostics), value: Value) -> Vec<String> {
        let d = Descriptor::from_value(&value).unwrap();
        let mut diagnostics = Diagnostics::default();
        check(&d, &mut diagnostics);
        diagnostics.messages().to_vec()
    }

    #[test]
    fn output_key_in_path_template_is_placed() {
        let out = run_rule(
            output_keys_placed,
            json!({
                "command-line": "tool [IN] [OUT]",
                "output-files": [
                    {"id": "o1", "command-line-key": "[OUT]", "path-template": "[STEM].nii"},
                    {"id": "o2", "command-line-key": "[STEM]"},
                    {"id": "o3", "command-line-key": "[LOG]"}
                ]
            }),
        );
        assert_eq!(out, ["[LOG] not in cmd line or path templates"]);
    }

    #[test]
    fn duplicate_path_templates() {
        let out = run_rule(
            output_paths_unique,
            json!({
                "command-line": "tool",
                "output-files": [
                    {"id": "a", "path-template": "out.txt"},
                    {"id": "b", "path-template": "out.txt"},
                    {"id": "c", "path-template": "other.txt"},
                    {"id": "d"}
                ]
            }),
        );
        assert_eq!(out, ["Outputs a and b have the same path-template"]);
    }

    #[test]
    fn disabling_a_required_input() {
        let out = run_rule(
            no_disabling_required,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "a", "type": "String", "optional": true, "disables-inputs": ["b", "c"]},
                    {"id": "b", "type": "String", "optional": false},
                    {"id": "c", "type": "String"}
                ]
            }),
        );
        assert_eq!(out, ["Id a disables required id b"]);
    }

    #[test]
    fn required_input_with_dependencies() {
        let out = run_rule(
            required_inputs_unconditional,
            json!({
                "command-line": "tool",
                "inputs": [
                    {"id": "a", "type": "String", "optional": false, "requires-inputs": ["b"]},
                    {"id": "b", "type": "String", "optional": true, "requires-inputs": ["a"]}
                ]
            }),
        );
        assert_eq!(out, ["Id a is required and cannot require or disable other inputs"]);
    }

    #[test]
    fn all_or_none_mixed_policy_and_required_member() {
        let out = run_rule(
            all_or_none_groups,
            json!({
                "command-line": "tool",
                "inputs": [{"id": "a", "type": "String", "optional": false}],
                "groups": [{"id": "g", "members": ["a"], "all-or-none": true, "mutually-exclusive": true}]
            }),
        );
        assert_eq!(
            out,
            [
                "All-or-none group g cannot be mutually-exclusive or one-is-required",
                "a in all-or-none group g should not be required",
            ]
        );
    }

    #[test]
    fn one_is_required_subset_of_all_or_none() {
        let out = run_rule(
            one_is_required_not_nested,
            json!({
                "command-line": "tool",
                "groups": [
                    {"id": "pick", "members": ["a"], "one-is-required": true},
                    {"id": "both", "members": ["a", "b"], "all-or-none": true},
                    {"id": "other", "members": ["c"], "all-or-none": true}
                ]
            }),
        );
        assert_eq!(
            out,
            ["One-is-required group pick cannot be a subset of all-or-none group both"]
        );
    }

    fn shared_mode_key(groups: Value) -> Value {
        json!({
            "command-line": "tool [MODE] [LEVEL]",
            "inputs": [
                {"id": "fast", "type": "Flag", "command-line-key": "[MODE]", "command-line-flag": "--fast"},
                {"id": "slow", "type": "Flag", "command-line-key": "[MODE]", "command-line-flag": "--slow"},
                {"id": "level", "type": "Number", "command-line-key": "[LEVEL]"}
            ],
            "groups": groups
        })
    }

    #[test]
    fn shared_key_in_mutex_group_passes() {
        let out = run_rule(
            shared_keys_mutually_exclusive,
            shared_mode_key(json!([
                {"id": "speed", "members": ["fast", "slow"], "mutually-exclusive": true}
            ])),
        );
        assert!(out.is_empty(), "{out:?}");
    }

    #[test]
    fn shared_key_outside_mutex_group_is_reported_once() {
        let non_mutex = run_rule(
            shared_keys_mutually_exclusive,
            shared_mode_key(json!([{"id": "speed", "members": ["fast", "slow"]}])),
        );
        assert_eq!(non_mutex, ["[MODE] belongs to 2+ non exclusive IDs"]);

        let ungrouped = run_rule(shared_keys_mutually_exclusive, shared_mode_key(json!([])));
        assert_eq!(ungrouped, ["[MODE] belongs to 2+ non exclusive IDs"]);
    }

    #[test]
    fn mutex_group_must_cover_every_sharer() {
        let out = run_rule(
            shared_keys_mutually_exclusive,
            shared_mode_key(json!([
                {"id": "a", "members": ["fast", "level"], "mutually-exclusive": true},
                {"id": "b", "members": ["slow"], "mutually-exclusive": true}
            ])),
        );
        assert_eq!(out, ["[MODE] belongs to 2+ non exclusive IDs"]);
    }

    #[test]
    fn extended_profile_separates_mutex_from_plain_sharing() {
        let validator = DescriptorValidator::new(RuleProfile::Extended);
        let nested = "[MODE] contains [MODE]";

        let mutex = Descriptor::from_value(&shared_mode_key(json!([
            {"id": "speed", "members": ["fast", "slow"], "mutually-exclusive": true}
        ])))
        .unwrap();
        assert_eq!(validator.validate(&mutex, Vec::new()).messages(), [nested, nested]);

        let plain = Descriptor::from_value(&shared_mode_key(json!([]))).unwrap();
        assert_eq!(
            validator.validate(&plain, Vec::new()).messages(),
            [nested, nested, "[MODE] belongs to 2+ non exclusive IDs"]
        );
    }
}
