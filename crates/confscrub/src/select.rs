//! Candidate file selection.
//!
//! A [`Selector`] decides from include and exclude glob patterns which files
//! under a root directory are offered for redaction. Paths are always matched
//! relative to the root with `/` separators. `*` and `?` never match across a
//! `/`, `**` does.
//!
//! Include patterns starting with `**/` also match a file sitting directly in
//! the root against the rest of the pattern, so `**/*.yml` selects `app.yml`
//! as well as `config/app.yml` whatever the glob engine thinks of `**`
//! matching zero directories. Exclude patterns get no such fallback.

use std::borrow::Cow;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{Error, Result};

const RECURSIVE_PREFIX: &str = "**/";

/// A file offered for redaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path on disk (the root joined with the relative path).
    pub path: PathBuf,
    /// Path relative to the selection root, `/`-separated.
    pub relative: String,
}

#[derive(Debug, Clone)]
struct Include {
    matcher: GlobMatcher,
    root_fallback: Option<GlobMatcher>,
}

impl Include {
    fn new(pattern: &str) -> Result<Self> {
        let pattern = normalize_separators(pattern);
        let matcher = compile(&pattern)?;
        let root_fallback = pattern
            .strip_prefix(RECURSIVE_PREFIX)
            .map(compile)
            .transpose()?;
        Ok(Self {
            matcher,
            root_fallback,
        })
    }

    fn matches(&self, relative: &str) -> bool {
        if self.matcher.is_match(relative) {
            return true;
        }
        match &self.root_fallback {
            Some(fallback) if !relative.contains('/') => fallback.is_match(relative),
            _ => false,
        }
    }
}

/// Include/exclude glob matcher over relative paths.
#[derive(Debug, Clone)]
pub struct Selector {
    includes: Vec<Include>,
    excludes: GlobSet,
}

impl Selector {
    /// Compile include and exclude patterns.
    ///
    /// An empty include list selects nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for the first pattern that does not
    /// compile.
    pub fn new<I, E>(includes: I, excludes: E) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let includes = includes
            .into_iter()
            .map(|p| Include::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let mut builder = GlobSetBuilder::new();
        for pattern in excludes {
            let pattern = normalize_separators(pattern.as_ref());
            builder.add(glob(&pattern)?);
        }
        let excludes = builder.build().map_err(|source| Error::InvalidPattern {
            pattern: "<exclude set>".to_string(),
            source,
        })?;

        Ok(Self { includes, excludes })
    }

    /// Whether a root-relative, `/`-separated path is a candidate.
    #[must_use]
    pub fn is_selected(&self, relative: &str) -> bool {
        let included = self.includes.iter().any(|include| include.matches(relative));
        if !included {
            return false;
        }
        !self.excludes.is_match(relative)
    }

    /// Lazily walk `root` and yield every selected file.
    ///
    /// Every directory is descended into; only files are yielded. A symlink
    /// to a file is yielded under its own path, symlinked directories are not
    /// descended into. Entries are visited in file-name order within each
    /// directory.
    pub fn select<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = Result<Candidate>> + 'a {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => return Some(Err(Error::from(err))),
                };
                if !is_file(&entry) {
                    return None;
                }
                let relative = relative_path(root, entry.path())?;
                trace!(file = %relative, "checking file");
                if self.is_selected(&relative) {
                    Some(Ok(Candidate {
                        path: entry.into_path(),
                        relative,
                    }))
                } else {
                    debug!(file = %relative, "not selected");
                    None
                }
            })
    }
}

fn is_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// `path` relative to `root`, with `/` separators. `None` for the root itself.
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

fn normalize_separators(pattern: &str) -> Cow<'_, str> {
    if MAIN_SEPARATOR == '/' {
        Cow::Borrowed(pattern)
    } else {
        Cow::Owned(pattern.replace(MAIN_SEPARATOR, "/"))
    }
}

fn glob(pattern: &str) -> Result<globset::Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    glob(pattern).map(|g| g.compile_matcher())
}
