// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML form data adapter.
//!
//! This module provides a parser and a file adapter that load value trees
//! from YAML documents, e.g. to seed a form with saved or fixture data.

use crate::domain::{FormError, Map, Result, Value};
use crate::ports::FormDataParser;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML form data files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "yaml-file";

/// YAML parser implementation.
///
/// Mappings become maps and sequences become maps keyed by index. Null
/// entries are left out, since a value tree represents absence by a missing
/// key. Boolean and numeric mapping keys are stringified.
///
/// # Examples
///
/// ```rust
/// use formbind::adapters::YamlParser;
/// use formbind::domain::Value;
/// use formbind::ports::FormDataParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "address:\n  city: Lund\n  floor: 3";
/// let tree = parser.parse(yaml_content).unwrap();
/// assert_eq!(tree.lookup("address.city"), Some(&Value::from("Lund")));
/// assert_eq!(tree.lookup("address.floor"), Some(&Value::from(3)));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML value, returning `None` for null.
    fn convert(value: &serde_yaml::Value) -> Option<Value> {
        match value {
            serde_yaml::Value::Null => None,
            serde_yaml::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_yaml::Value::Number(n) => n.as_f64().map(Value::Number),
            serde_yaml::Value::String(s) => Some(Value::String(s.clone())),
            serde_yaml::Value::Sequence(seq) => Some(
                seq.iter()
                    .enumerate()
                    .filter_map(|(i, item)| Self::convert(item).map(|v| (i.to_string(), v)))
                    .collect(),
            ),
            serde_yaml::Value::Mapping(mapping) => {
                let mut map = Map::new();
                for (key, item) in mapping {
                    let Some(key) = Self::key_string(key) else {
                        tracing::warn!("Skipping YAML entry with unsupported key type");
                        continue;
                    };
                    if let Some(v) = Self::convert(item) {
                        map.insert(key, v);
                    }
                }
                Some(Value::from(map))
            }
            serde_yaml::Value::Tagged(tagged) => Self::convert(&tagged.value),
        }
    }

    fn key_string(key: &serde_yaml::Value) -> Option<String> {
        match key {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDataParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Value> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| FormError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match Self::convert(&value) {
            None => Ok(Value::map()),
            Some(tree) if tree.is_map() => Ok(tree),
            Some(other) => Err(FormError::ParseError {
                message: format!("YAML document root must be a mapping, found '{}'", other),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Form data adapter for YAML files.
///
/// Reads a YAML file once on construction and keeps the resulting tree;
/// [`reload`](YamlFileAdapter::reload) re-reads it.
///
/// # Examples
///
/// ```rust,no_run
/// use formbind::adapters::YamlFileAdapter;
/// use formbind::service::Form;
///
/// let adapter = YamlFileAdapter::from_file("/path/to/customer.yaml").unwrap();
/// let form = Form::builder().value(adapter.tree().clone()).build();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed value tree
    tree: Value,
    /// YAML parser
    parser: YamlParser,
}

impl YamlFileAdapter {
    /// Creates a new YAML file adapter from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::SourceError`] if the file cannot be read or is
    /// larger than 10MB, and [`FormError::ParseError`] if it is not a YAML
    /// mapping.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();
        let canonical_path = file_path.canonicalize().map_err(|e| FormError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Invalid or inaccessible path: {}", display_name(file_path)),
            source: Some(Box::new(e)),
        })?;

        let parser = YamlParser::new();
        let tree = read_tree(&parser, &canonical_path)?;

        Ok(Self {
            file_path: canonical_path,
            tree,
            parser,
        })
    }

    /// Returns the path to the form data file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the loaded value tree.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    /// Consumes the adapter, returning the loaded value tree.
    pub fn into_tree(self) -> Value {
        self.tree
    }

    /// Re-reads the file, replacing the loaded tree.
    ///
    /// On error the previously loaded tree is kept.
    pub fn reload(&mut self) -> Result<()> {
        self.tree = read_tree(&self.parser, &self.file_path)?;
        Ok(())
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn read_tree(parser: &YamlParser, path: &Path) -> Result<Value> {
    // Check file size before reading
    let metadata = fs::metadata(path).map_err(|e| FormError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read file metadata: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(FormError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Form data file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| FormError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read form data file: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    let tree = parser.parse(&content)?;
    tracing::debug!("Loaded form data from {}", path.display());
    Ok(tree)
}
