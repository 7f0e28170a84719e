use serde_json::Value;

use crate::models::locale_file::LocaleTree;

/// Collects every key of `reference` that has no counterpart in `target`.
///
/// A key counts as present once it exists in `target` at the same path,
/// whatever its value. Only when both sides hold a mapping does the walk
/// descend; a leaf on either side satisfies the key, so diverging
/// translations are never reported.
pub fn diff(reference: &LocaleTree, target: &LocaleTree) -> LocaleTree {
    let mut missing = LocaleTree::new();

    for (key, ref_value) in reference {
        match (target.get(key), ref_value) {
            (None, _) => {
                missing.insert(key.clone(), ref_value.clone());
            }
            (Some(Value::Object(target_child)), Value::Object(ref_child)) => {
                let nested = diff(ref_child, target_child);
                if !nested.is_empty() {
                    missing.insert(key.clone(), Value::Object(nested));
                }
            }
            (Some(_), _) => {}
        }
    }

    missing
}

/// Deep merge of `updates` into `original`, with `updates` winning at every
/// leaf and at every leaf/mapping mismatch.
pub fn merge(original: &mut LocaleTree, updates: LocaleTree) {
    for (key, update) in updates {
        match (original.get_mut(&key), update) {
            (Some(Value::Object(existing)), Value::Object(nested)) => merge(existing, nested),
            (_, update) => {
                original.insert(key, update);
            }
        }
    }
}

/// Text sent to the translator for a leaf. Strings are used verbatim, other
/// leaves by their JSON rendering.
pub fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn count_leaves(tree: &LocaleTree) -> usize {
    tree.values()
        .map(|value| match value {
            Value::Object(child) => count_leaves(child),
            _ => 1,
        })
        .sum()
}
