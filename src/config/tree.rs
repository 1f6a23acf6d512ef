//! Order-preserving tree view of a parsed `.env.toml` document.
use std::path::Path;

use crate::error::ConfigError;

/// A leaf value in the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// TOML boolean.
    Bool(bool),
    /// TOML integer.
    Integer(i64),
    /// TOML float (including `inf` and `nan`).
    Float(f64),
    /// TOML string.
    String(String),
    /// TOML date, time or datetime, kept as written in RFC 3339 form.
    Datetime(String),
}

/// A node of the configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A variable value.
    Scalar(Scalar),
    /// A profile group.
    Table(Table),
    /// An array, which has no shell representation. Holds the dotted key;
    /// resolving a profile that selects it fails.
    Unsupported(String),
}

/// A mapping from key to [`Node`] that keeps document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    entries: Vec<(String, Node)>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Keys are not checked for uniqueness; TOML already
    /// rejects duplicate keys.
    pub fn push(&mut self, key: impl Into<String>, node: Node) {
        self.entries.push((key.into(), node));
    }

    /// Look up a direct child by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find_map(|(k, node)| (k == key).then_some(node))
    }

    /// Iterate over entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Number of direct children.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The parsed configuration file.
///
/// Built once per invocation from file content and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigTree {
    root: Table,
}

impl ConfigTree {
    /// Parse TOML `content`; `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let document = toml::from_str::<toml::Table>(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string().trim_end().to_string(),
        })?;
        Ok(Self {
            root: convert_table(&document, ""),
        })
    }

    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file does not exist,
    /// [`ConfigError::Io`] if it cannot be read, and any error from [`Self::parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::MissingFile {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse(&content, path)
    }

    /// The top-level table.
    #[must_use]
    pub const fn root(&self) -> &Table {
        &self.root
    }
}

fn convert_table(table: &toml::Table, prefix: &str) -> Table {
    let mut out = Table::new();
    for (key, value) in table {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let node = match value {
            toml::Value::String(s) => Node::Scalar(Scalar::String(s.clone())),
            toml::Value::Integer(i) => Node::Scalar(Scalar::Integer(*i)),
            toml::Value::Float(f) => Node::Scalar(Scalar::Float(*f)),
            toml::Value::Boolean(b) => Node::Scalar(Scalar::Bool(*b)),
            toml::Value::Datetime(dt) => Node::Scalar(Scalar::Datetime(dt.to_string())),
            toml::Value::Table(child) => Node::Table(convert_table(child, &dotted)),
            toml::Value::Array(_) => Node::Unsupported(dotted),
        };
        out.push(key.clone(), node);
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfigTree, ConfigError> {
        ConfigTree::parse(content, Path::new("test.toml"))
    }

    fn keys(table: &Table) -> Vec<&str> {
        table.iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn keeps_document_order() {
        let tree = parse("zeta = 1\nalpha = 2\nmid = 3\n").unwrap();
        assert_eq!(keys(tree.root()), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn converts_every_scalar_kind() {
        let tree = parse(
            "s = \"x\"\ni = 15\nf = 0.95\nb = false\nd = 1979-05-27T07:32:00Z\n",
        )
        .unwrap();
        let root = tree.root();
        assert_eq!(root.get("s"), Some(&Node::Scalar(Scalar::String("x".into()))));
        assert_eq!(root.get("i"), Some(&Node::Scalar(Scalar::Integer(15))));
        assert_eq!(root.get("f"), Some(&Node::Scalar(Scalar::Float(0.95))));
        assert_eq!(root.get("b"), Some(&Node::Scalar(Scalar::Bool(false))));
        assert_eq!(
            root.get("d"),
            Some(&Node::Scalar(Scalar::Datetime("1979-05-27T07:32:00Z".into())))
        );
    }

    #[test]
    fn nested_tables_become_groups() {
        let tree = parse("[group-b]\nx = 1\n\n[group-b.subgroup-1]\ny = 2\n").unwrap();
        let Some(Node::Table(group)) = tree.root().get("group-b") else {
            panic!("group-b should be a table");
        };
        assert_eq!(keys(group), vec!["x", "subgroup-1"]);
    }

    #[test]
    fn arrays_are_kept_with_dotted_key() {
        let tree = parse("[dev]\nhosts = [\"a\", \"b\"]\nport = 1\n").unwrap();
        let Some(Node::Table(dev)) = tree.root().get("dev") else {
            panic!("dev should be a table");
        };
        assert_eq!(dev.get("hosts"), Some(&Node::Unsupported("dev.hosts".into())));
        assert_eq!(keys(dev), vec!["hosts", "port"]);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse("key = \n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn empty_document_is_empty_tree() {
        let tree = parse("").unwrap();
        assert!(tree.root().is_empty());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.toml");
        let err = ConfigTree::load(&path).unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingFile { path: ref p } if *p == path),
            "got {err:?}"
        );
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.toml");
        std::fs::write(&path, "a = 1\n").unwrap();
        let tree = ConfigTree::load(&path).unwrap();
        assert_eq!(tree.root().len(), 1);
    }

    #[test]
    fn push_appends_in_order() {
        let mut table = Table::new();
        table.push("b", Node::Scalar(Scalar::Integer(2)));
        table.push("a", Node::Scalar(Scalar::Integer(1)));
        assert_eq!(keys(&table), vec!["b", "a"]);
        assert_eq!(table.len(), 2);
    }
}
