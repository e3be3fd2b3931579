//! File list and file access
//!
//! All disk effects of a scan go through `SourceFs`, so the searcher,
//! aggregator and report stay pure and the pipeline can run against
//! `MemoryFs` in tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Capability interface for reading inputs and creating the report.
pub trait SourceFs {
    /// Read a file as text. Invalid UTF-8 is replaced, not an error; only
    /// I/O failures are.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// True when `path` is an existing regular file
    fn exists(&self, path: &Path) -> bool;

    /// Create (or truncate) the output destination.
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>>;

    /// Read the file list: one path per line, blank lines dropped.
    fn read_list(&self, path: &Path) -> io::Result<Vec<String>> {
        Ok(parse_file_list(&self.read_to_string(path)?))
    }
}

/// Split list content into trimmed, non-empty entries.
pub fn parse_file_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Drop one leading `./` from a listed path.
pub fn strip_dot_prefix(listed: &str) -> &str {
    listed.strip_prefix("./").unwrap_or(listed)
}

pub fn resolve(base_dir: &Path, relative: &str) -> PathBuf {
    base_dir.join(relative)
}

/// Real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl SourceFs for LocalFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(File::create(path)?))
    }
}

/// What to do with one entry of the file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Recognised source file that exists on disk
    Source { label: String, path: PathBuf },
    /// Extension not in the recognised set; never read
    WrongExtension { label: String },
    /// Did not resolve to an existing file
    Missing { label: String, path: PathBuf },
}

/// Turns listed paths into candidates under a base directory.
#[derive(Debug, Clone)]
pub struct FileLister {
    base_dir: PathBuf,
    suffixes: Vec<String>,
}

impl FileLister {
    /// `extensions` are matched case-insensitively, with or without a
    /// leading dot (`"go"` and `".go"` are the same).
    pub fn new(base_dir: impl Into<PathBuf>, extensions: &[String]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext))
            .collect();
        Self {
            base_dir: base_dir.into(),
            suffixes,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn is_source_path(&self, relative: &str) -> bool {
        let lower = relative.to_lowercase();
        self.suffixes.iter().any(|suffix| lower.ends_with(suffix.as_str()))
    }

    /// Classify one listed path. The extension is checked first so that
    /// non-source entries are skipped without touching the filesystem.
    pub fn classify<F: SourceFs + ?Sized>(&self, fs: &F, listed: &str) -> Candidate {
        let label = strip_dot_prefix(listed).to_string();

        if !self.is_source_path(&label) {
            return Candidate::WrongExtension { label };
        }

        let path = resolve(&self.base_dir, &label);
        if fs.exists(&path) {
            Candidate::Source { label, path }
        } else {
            Candidate::Missing { label, path }
        }
    }
}

/// In-memory filesystem, keyed by the exact paths the pipeline resolves.
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    files: HashMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
    read_only: bool,
    reads: Rc<RefCell<Vec<PathBuf>>>,
    outputs: Rc<RefCell<HashMap<PathBuf, Rc<RefCell<Vec<u8>>>>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// File exists but every read fails
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.files.insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }

    /// Every `create` fails
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Paths passed to `read_to_string`, in call order
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.borrow().clone()
    }

    /// Bytes written to `path`, if it was created
    pub fn output(&self, path: &Path) -> Option<String> {
        self.outputs
            .borrow()
            .get(path)
            .map(|buf| String::from_utf8_lossy(&buf.borrow()).into_owned())
    }
}

impl SourceFs for MemoryFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.borrow_mut().push(path.to_path_buf());

        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            ));
        }
        let buf = Rc::new(RefCell::new(Vec::new()));
        self.outputs
            .borrow_mut()
            .insert(path.to_path_buf(), Rc::clone(&buf));
        Ok(Box::new(SharedBuffer(buf)))
    }
}

struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
