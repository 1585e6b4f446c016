use anyhow::{Context, Result, anyhow, bail};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "layouts"]
struct Layouts;

const DEFAULT_LAYOUT: &str = "default.toml";

/// One entry of a desired layout: a file with its initial contents, or a
/// directory with named children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File(String),
    Directory(Directory),
}

/// Children of a directory, kept in declaration order (`toml` is built with
/// `preserve_order`). Names are unique because they come from TOML table keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, TreeNode)>,
}

impl Directory {
    /// Parse a layout where strings are files and tables are directories.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(raw).context("parsing layout")?;
        directory_from_table(table, None)
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (&str, &TreeNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Total number of files and directories below this one.
    pub fn node_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                TreeNode::File(_) => 1,
                TreeNode::Directory(dir) => 1 + dir.node_count(),
            })
            .sum()
    }
}

/// Load the layout compiled into the binary.
pub fn default_layout() -> Result<Directory> {
    let file = Layouts::get(DEFAULT_LAYOUT)
        .ok_or_else(|| anyhow!("embedded layout `{}` missing", DEFAULT_LAYOUT))?;
    let raw = std::str::from_utf8(file.data.as_ref())
        .with_context(|| format!("decoding embedded layout `{}`", DEFAULT_LAYOUT))?;
    let layout = Directory::from_toml(raw)
        .with_context(|| format!("loading embedded layout `{}`", DEFAULT_LAYOUT))?;
    tracing::debug!(nodes = layout.node_count(), "loaded embedded layout");
    Ok(layout)
}

fn directory_from_table(table: toml::Table, parent: Option<&str>) -> Result<Directory> {
    let mut entries = Vec::with_capacity(table.len());
    for (name, value) in table {
        let key = match parent {
            Some(parent) => format!("{parent}.{name}"),
            None => name.clone(),
        };
        let node = match value {
            toml::Value::String(contents) => TreeNode::File(contents),
            toml::Value::Table(children) => {
                TreeNode::Directory(directory_from_table(children, Some(&key))?)
            }
            other => bail!(
                "layout entry `{key}` must be file contents (a string) or a directory (a table), found {}",
                other.type_str()
            ),
        };
        entries.push((name, node));
    }
    Ok(Directory { entries })
}
