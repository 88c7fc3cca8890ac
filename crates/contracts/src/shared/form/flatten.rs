use std::collections::BTreeMap;

/// Dotted form field name for a key of a nested map, e.g. `attributes.gui-order`
pub fn field_name(prefix: &str, key: &str) -> String {
    format!("{}.{}", prefix, key)
}

/// Inverse of [`field_name`]; only the first `prefix.` is stripped, so keys
/// that themselves contain dots come back intact. `prefix.` alone is the
/// empty key.
pub fn nested_key<'a>(prefix: &str, field: &'a str) -> Option<&'a str> {
    field
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('.'))
}

/// Expand a nested map into dotted field names
pub fn flatten(prefix: &str, map: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(key, value)| (field_name(prefix, key), value.clone()))
        .collect()
}

/// Collect every `prefix.*` field back into a nested map
pub fn unflatten<'a, I>(prefix: &str, fields: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (&'a String, String)>,
{
    fields
        .into_iter()
        .filter_map(|(field, value)| nested_key(prefix, field).map(|key| (key.to_string(), value)))
        .collect()
}
