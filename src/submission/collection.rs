use std::ops::Index;

use serde_json::{Map, Value};

/// The entries a student drew on one widget, together with that widget's
/// resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeableCollection {
    pub identifier: String,
    pub params: Map<String, Value>,
    entries: Vec<Value>,
}

impl GradeableCollection {
    pub fn new(identifier: &str, config: &Map<String, Value>, entries: Vec<Value>) -> Self {
        Self {
            identifier: identifier.to_string(),
            params: resolve_params(identifier, config),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Look up a resolved configuration key, e.g. `"xrange"` or `"label"`.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }
}

impl Index<usize> for GradeableCollection {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a GradeableCollection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Resolve the configuration that applies to `identifier`.
///
/// Walks the `plugins` tree depth-first. Each level starts from its own keys
/// (minus `plugins`), then every child's resolution is merged over it key by
/// key, so a matching descendant inherits its ancestors' keys and overrides the
/// ones it redefines. A level is kept only if its merged `id` equals
/// `identifier`; otherwise it resolves to an empty map.
pub fn resolve_params(identifier: &str, config: &Map<String, Value>) -> Map<String, Value> {
    let mut resolved = config.clone();
    let plugins = resolved.remove("plugins");

    if let Some(Value::Array(plugins)) = plugins {
        for plugin in &plugins {
            let Some(plugin) = plugin.as_object() else {
                continue;
            };
            for (key, value) in resolve_params(identifier, plugin) {
                resolved.insert(key, value);
            }
        }
    }

    match resolved.get("id").and_then(Value::as_str) {
        Some(id) if id == identifier => resolved,
        _ => Map::new(),
    }
}
