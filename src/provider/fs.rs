//! A provider that reads a zoneinfo directory on the file system.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use alloc::{string::String, vec, vec::Vec};

use super::ZoneIdProvider;
use crate::{parsers::is_valid_identifier, BridgeError, BridgeResult};

const UNIX_ZONEINFO_DIR: &str = "/usr/share/zoneinfo/";

/// Top level directories holding alternate copies of the database.
const SKIPPED_DIRECTORIES: [&str; 2] = ["posix", "right"];

/// A `ZoneIdProvider` that enumerates the TZif files below a zoneinfo
/// directory, `/usr/share/zoneinfo/` by default.
#[derive(Debug, Clone)]
pub struct FsZoneIdProvider {
    root: PathBuf,
}

impl FsZoneIdProvider {
    /// Creates a provider reading the zoneinfo directory at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory this provider reads.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FsZoneIdProvider {
    fn default() -> Self {
        Self::new(UNIX_ZONEINFO_DIR)
    }
}

impl ZoneIdProvider for FsZoneIdProvider {
    fn available_zone_ids(&self) -> BridgeResult<Vec<String>> {
        walk(&self.root)
    }
}

/// Recursively walks `start` and returns the names of all time zones found.
///
/// Either one or more names or an error is returned, never an empty list.
/// Unreadable entries are logged and skipped as long as at least one name
/// is found.
fn walk(start: &Path) -> BridgeResult<Vec<String>> {
    let mut failures = 0usize;
    let mut names = vec![];
    let mut stack = vec![start.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let readdir = match dir.read_dir() {
            Ok(readdir) => readdir,
            Err(_err) => {
                debug!("error when reading {} as a directory: {_err}", dir.display());
                failures += 1;
                continue;
            }
        };
        for result in readdir {
            let dent = match result {
                Ok(dent) => dent,
                Err(_err) => {
                    debug!("error when reading directory entry from {}: {_err}", dir.display());
                    failures += 1;
                    continue;
                }
            };
            let path = dent.path();
            let file_type = match dent.file_type() {
                Ok(file_type) => file_type,
                Err(_err) => {
                    debug!("error when reading file type from {}: {_err}", path.display());
                    failures += 1;
                    continue;
                }
            };
            if file_type.is_dir() {
                if dir == start
                    && SKIPPED_DIRECTORIES
                        .iter()
                        .any(|skipped| dent.file_name() == *skipped)
                {
                    continue;
                }
                stack.push(path);
                continue;
            }
            // Symlinks are treated as files.
            match is_tzif_file(&path) {
                Ok(true) => {}
                Ok(false) => {
                    trace!("skipping {}: not a TZif file", path.display());
                    continue;
                }
                Err(_err) => {
                    debug!("failed to read the header of {}: {_err}", path.display());
                    failures += 1;
                    continue;
                }
            }
            let Some(name) = zone_name(start, &path) else {
                trace!("skipping {}: not a valid zone identifier", path.display());
                continue;
            };
            names.push(name);
        }
    }
    if names.is_empty() {
        warn!(
            "no time zone identifiers found below {} ({failures} entries could not be read)",
            start.display()
        );
        return Err(BridgeError::enumeration_unavailable().with_message(alloc::format!(
            "no TZif files found below {} ({failures} unreadable entries).",
            start.display()
        )));
    }
    names.sort();
    Ok(names)
}

/// Checks the four byte TZif magic number at the start of a file.
fn is_tzif_file(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    let mut buf = [0; 4];
    match file.read_exact(&mut buf) {
        Ok(()) => Ok(&buf == b"TZif"),
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(err) => Err(err),
    }
}

/// Converts a file path below `start` into a `/` separated zone name.
fn zone_name(start: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(start).ok()?;
    let mut name = String::new();
    for component in relative.components() {
        if !name.is_empty() {
            name.push('/');
        }
        name.push_str(component.as_os_str().to_str()?);
    }
    is_valid_identifier(&name).then_some(name)
}
