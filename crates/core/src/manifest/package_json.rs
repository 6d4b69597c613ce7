use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, ManifestSource, Result};

/// The parts of `package.json` that decide which test command runs.
/// Values stay untyped: npm allows `"//"` comment keys holding arrays.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(default)]
    pub scripts: BTreeMap<String, Value>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, Value>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, Value>,
}

impl PackageJson {
    pub fn load(path: &Path) -> Result<Self> {
        let manifest_error = |source: ManifestSource| Error::ManifestError {
            path: path.to_path_buf(),
            source,
        };

        let content = fs::read_to_string(path).map_err(|e| manifest_error(e.into()))?;
        Self::parse(&content).map_err(|e| manifest_error(e.into()))
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Regular and dev dependencies merged; dev entries win on collision
    pub fn all_dependencies(&self) -> BTreeMap<&str, &Value> {
        self.dependencies
            .iter()
            .chain(self.dev_dependencies.iter())
            .map(|(name, version)| (name.as_str(), version))
            .collect()
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    /// The script body, when it is a string
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).and_then(Value::as_str)
    }

    pub fn is_react(&self) -> bool {
        self.has_dependency("react")
    }

    /// A `test` script that does something other than the `npm init` stub
    pub fn has_real_test_script(&self) -> bool {
        match self.scripts.get("test") {
            Some(Value::String(script)) => !is_placeholder_test_script(script),
            Some(_) => true,
            None => false,
        }
    }
}

/// Matches `echo "Error: no test specified" && exit 1` and similar echo-then-fail stubs
pub fn is_placeholder_test_script(script: &str) -> bool {
    let mut parts = script.trim().split("&&");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(head), Some(tail), None) => {
            head.trim_start().starts_with("echo ") && tail.trim() == "exit 1"
        }
        _ => false,
    }
}
