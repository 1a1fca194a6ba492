use crate::error::{FileContext, ModuleError};
use crate::options::SearchPattern;
use crate::util::read_report;

use glob::{MatchOptions, Pattern};
use std::cell::RefCell;
use std::fmt;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// One candidate report: its origin plus an open reader over its contents.
pub struct ReportFile {
    pub ctx: FileContext,
    pub reader: Box<dyn BufRead + Send>,
}

impl ReportFile {
    /// Wrap an arbitrary reader (stdin, an in-memory buffer, ...).
    pub fn from_reader<R: Read + Send + 'static>(filename: impl Into<String>, reader: R) -> Self {
        Self {
            ctx: FileContext {
                filename: filename.into(),
                root: PathBuf::new(),
            },
            reader: Box::new(BufReader::new(reader)),
        }
    }

    pub fn from_bytes(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_reader(filename, Cursor::new(bytes.into()))
    }

    pub fn filename(&self) -> &str {
        &self.ctx.filename
    }
}

impl fmt::Debug for ReportFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportFile").field("ctx", &self.ctx).finish()
    }
}

/// Finds the report files belonging to a module.
pub trait ReportLocator {
    fn find_log_files(&self, tag: &str) -> Result<Vec<ReportFile>, ModuleError>;
}

/// Recursive filesystem search below a set of roots.
///
/// Files are matched by name against `SearchPattern::fn_glob`, read whole
/// (gzip is decompressed on the fly) and, when a contents marker is set,
/// kept only if the marker occurs in them. Oversized and unreadable files
/// are skipped with a debug message. Results come out sorted per root.
#[derive(Debug, Clone)]
pub struct FsLocator {
    roots: Vec<PathBuf>,
    search: SearchPattern,
}

impl FsLocator {
    pub fn new<I, P>(roots: I, search: SearchPattern) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            roots: roots.into_iter().map(|p| p.as_ref().to_path_buf()).collect(),
            search,
        }
    }

    fn scan_root(
        &self,
        tag: &str,
        root: &Path,
        out: &mut Vec<ReportFile>,
    ) -> Result<(), ModuleError> {
        let name_pattern =
            Pattern::new(&self.search.fn_glob).map_err(|source| ModuleError::Pattern {
                pattern: self.search.fn_glob.clone(),
                source,
            })?;

        let walk = format!("{}/**/*", Pattern::escape(&root.to_string_lossy()));
        let entries = glob::glob_with(&walk, MatchOptions::new()).map_err(|source| {
            ModuleError::Pattern {
                pattern: walk.clone(),
                source,
            }
        })?;

        for entry in entries {
            let path = match entry {
                Ok(p) => p,
                Err(e) => {
                    log::debug!(target: tag, "skipping unreadable path: {e}");
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if !name_pattern.matches(filename) {
                continue;
            }

            let bytes = match read_report(&path, self.search.max_filesize) {
                Ok(Some(b)) => b,
                Ok(None) => {
                    log::debug!(
                        target: tag,
                        "skipping {}: larger than filesize limit",
                        path.display()
                    );
                    continue;
                }
                Err(e) => {
                    log::debug!(target: tag, "skipping {}: {e}", path.display());
                    continue;
                }
            };
            if let Some(marker) = &self.search.contents {
                if !contains(&bytes, marker.as_bytes()) {
                    continue;
                }
            }

            let rel_dir = path
                .parent()
                .map(|p| p.strip_prefix(root).unwrap_or(p).to_path_buf())
                .unwrap_or_default();
            out.push(ReportFile {
                ctx: FileContext {
                    filename: filename.to_string(),
                    root: rel_dir,
                },
                reader: Box::new(Cursor::new(bytes)),
            });
        }
        Ok(())
    }
}

impl ReportLocator for FsLocator {
    fn find_log_files(&self, tag: &str) -> Result<Vec<ReportFile>, ModuleError> {
        let mut out = Vec::new();
        for root in &self.roots {
            if !root.is_dir() {
                return Err(ModuleError::Locate {
                    root: root.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "search root is not a directory",
                    ),
                });
            }
            self.scan_root(tag, root, &mut out)?;
        }
        log::debug!(target: tag, "{} candidate file(s) found", out.len());
        Ok(out)
    }
}

/// In-memory locator, for hosts that already hold the reports.
/// Hands its files out once.
#[derive(Debug, Default)]
pub struct MemoryLocator {
    files: RefCell<Vec<ReportFile>>,
}

impl MemoryLocator {
    pub fn new(files: Vec<ReportFile>) -> Self {
        Self {
            files: RefCell::new(files),
        }
    }
}

impl ReportLocator for MemoryLocator {
    fn find_log_files(&self, _tag: &str) -> Result<Vec<ReportFile>, ModuleError> {
        Ok(std::mem::take(&mut *self.files.borrow_mut()))
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
