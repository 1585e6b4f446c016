use std::fmt;
use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::layout::{Directory, TreeNode};

/// What happened to a single layout entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreatedFile(Utf8PathBuf),
    SkippedFile(Utf8PathBuf),
    CreatedDirectory(Utf8PathBuf),
    SkippedDirectory(Utf8PathBuf),
}

impl Action {
    pub fn path(&self) -> &Utf8Path {
        match self {
            Action::CreatedFile(path)
            | Action::SkippedFile(path)
            | Action::CreatedDirectory(path)
            | Action::SkippedDirectory(path) => path,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Action::SkippedFile(_) | Action::SkippedDirectory(_))
    }

    fn as_str(&self) -> &'static str {
        match self {
            Action::CreatedFile(_) => "created-file",
            Action::SkippedFile(_) => "skipped-file",
            Action::CreatedDirectory(_) => "created-directory",
            Action::SkippedDirectory(_) => "skipped-directory",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CreatedFile(path) => write!(f, "Created file: {path}"),
            Action::SkippedFile(path) => write!(f, "Skipped existing file: {path}"),
            Action::CreatedDirectory(path) => write!(f, "Created directory: {path}"),
            Action::SkippedDirectory(path) => write!(f, "Skipped existing directory: {path}"),
        }
    }
}

/// Create every entry of `root` that is missing under `base`.
pub fn materialize(base: &Utf8Path, root: &Directory) -> Result<Vec<Action>> {
    materialize_with(base, root, |_| {})
}

/// Same as [`materialize`], reporting each action to `on_action` as soon as
/// it is applied.
///
/// Entries are visited depth-first, parents before children, siblings in
/// declaration order. The first I/O error aborts the walk; whatever was
/// created before it stays on disk. `base` itself must already exist.
pub fn materialize_with<F>(
    base: &Utf8Path,
    root: &Directory,
    mut on_action: F,
) -> Result<Vec<Action>>
where
    F: FnMut(&Action),
{
    let mut actions = Vec::new();
    // Children are pushed in reverse so they pop in declaration order.
    let mut pending: Vec<(Utf8PathBuf, &TreeNode)> = root
        .entries()
        .rev()
        .map(|(name, node)| (base.join(name), node))
        .collect();

    while let Some((path, node)) = pending.pop() {
        let action = match node {
            TreeNode::File(contents) => ensure_file(&path, contents)?,
            TreeNode::Directory(dir) => {
                let action = ensure_dir(&path)?;
                pending.extend(
                    dir.entries()
                        .rev()
                        .map(|(name, child)| (path.join(name), child)),
                );
                action
            }
        };

        tracing::debug!(action = action.as_str(), path = %action.path(), "layout entry");
        on_action(&action);
        actions.push(action);
    }

    Ok(actions)
}

fn ensure_file(path: &Utf8Path, contents: &str) -> Result<Action> {
    if path.exists() {
        return Ok(Action::SkippedFile(path.to_owned()));
    }

    fs::write(path, contents).with_context(|| format!("writing {}", path))?;
    Ok(Action::CreatedFile(path.to_owned()))
}

fn ensure_dir(path: &Utf8Path) -> Result<Action> {
    if path.exists() {
        return Ok(Action::SkippedDirectory(path.to_owned()));
    }

    fs::create_dir(path).with_context(|| format!("creating directory {}", path))?;
    Ok(Action::CreatedDirectory(path.to_owned()))
}
