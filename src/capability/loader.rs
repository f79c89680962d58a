//! Class loader compatibility jar management.
//!
//! Tomcat 5.0 through 7.0 need a loader jar in the instance `lib` directory
//! to serve modules straight from the workspace without publishing. This is
//! the only part of the crate that writes to disk. Each operation is
//! idempotent; callers serialize operations on the same base directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::resolver::has_legacy_class_loader;
use crate::layout::{ValidationError, ValidationResult};
use crate::version::runtime_id_for_path;

/// Catalina properties file, relative to the instance base directory.
pub const CATALINA_PROPERTIES: &str = "conf/catalina.properties";

/// Loader property the jar is wired into for test environments.
pub const COMMON_LOADER_KEY: &str = "common.loader";

/// Instance library directory, relative to the base directory.
pub const LIB_DIR: &str = "lib";

/// What a sync call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderSync {
    /// The runtime does not use the loader jar; nothing was touched.
    NotRequired,
    Installed,
    AlreadyInstalled,
    Removed,
    AlreadyAbsent,
}

/// Input of [`ClassLoaderSync::sync_class_loader`].
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Host runtime-type id of the Tomcat line, e.g.
    /// `org.eclipse.jst.server.tomcat.runtime.70`.
    pub tomcat_runtime_id: String,
    /// Instance base directory (`catalina.base`).
    pub base_dir: PathBuf,
    /// Serve modules without publishing.
    pub serve_without_publish: bool,
    /// Also wire the jar into `catalina.properties`.
    pub test_environment: bool,
}

impl SyncRequest {
    /// Request for the Tomcat install at `tomcat_location`, whatever tc
    /// Server runtime type sits on top of it.
    pub fn for_tomcat_location(
        tomcat_location: &Path,
        base_dir: impl Into<PathBuf>,
        serve_without_publish: bool,
    ) -> Self {
        Self {
            tomcat_runtime_id: runtime_id_for_path(tomcat_location),
            base_dir: base_dir.into(),
            serve_without_publish,
            test_environment: false,
        }
    }
}

/// Installs and removes loader jars from a directory of bundled jars.
#[derive(Debug, Clone)]
pub struct ClassLoaderSync {
    source_dir: PathBuf,
}

impl ClassLoaderSync {
    /// `source_dir` holds one `<runtime id>.loader.jar` per Tomcat line.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// File name of the loader jar for a runtime.
    pub fn jar_name(runtime_id: &str) -> String {
        format!("{}.loader.jar", runtime_id)
    }

    /// Install or remove the loader jar according to the request.
    pub fn sync_class_loader(&self, request: &SyncRequest) -> ValidationResult<LoaderSync> {
        if !has_legacy_class_loader(&request.tomcat_runtime_id) {
            debug!("{} needs no loader jar", request.tomcat_runtime_id);
            return Ok(LoaderSync::NotRequired);
        }

        let jar_name = Self::jar_name(&request.tomcat_runtime_id);
        let lib_dir = request.base_dir.join(LIB_DIR);

        if request.serve_without_publish {
            let outcome = self.install(&jar_name, &lib_dir)?;
            if request.test_environment {
                let entry = format!("${{catalina.base}}/{}/{}", LIB_DIR, jar_name);
                add_loader_entry(&request.base_dir.join(CATALINA_PROPERTIES), &entry)?;
            }
            Ok(outcome)
        } else {
            remove(&lib_dir.join(&jar_name))
        }
    }

    fn install(&self, jar_name: &str, lib_dir: &Path) -> ValidationResult<LoaderSync> {
        let source = self.source_dir.join(jar_name);
        let target = lib_dir.join(jar_name);

        let bytes =
            fs::read(&source).map_err(|e| ValidationError::side_effect("read", &source, e))?;

        if let Ok(existing) = fs::read(&target) {
            if existing == bytes {
                debug!("{} already installed", target.display());
                return Ok(LoaderSync::AlreadyInstalled);
            }
        }

        fs::create_dir_all(lib_dir)
            .map_err(|e| ValidationError::side_effect("create", lib_dir, e))?;
        write_atomic(&target, &bytes)
            .map_err(|e| ValidationError::side_effect("install", &target, e))?;

        info!("Installed loader jar {}", target.display());
        Ok(LoaderSync::Installed)
    }
}

fn remove(target: &Path) -> ValidationResult<LoaderSync> {
    match fs::remove_file(target) {
        Ok(()) => {
            info!("Removed loader jar {}", target.display());
            Ok(LoaderSync::Removed)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(LoaderSync::AlreadyAbsent),
        Err(e) => Err(ValidationError::side_effect("remove", target, e)),
    }
}

/// Make sure `entry` is listed on the common loader of a properties file.
///
/// The entry is prepended to an existing `common.loader` value, or the
/// property is appended when the file has none.
fn add_loader_entry(properties: &Path, entry: &str) -> ValidationResult {
    let content = fs::read_to_string(properties)
        .map_err(|e| ValidationError::side_effect("read", properties, e))?;

    let Some(updated) = with_loader_entry(&content, entry) else {
        debug!("{} already lists {}", properties.display(), entry);
        return Ok(());
    };

    write_atomic(properties, updated.as_bytes())
        .map_err(|e| ValidationError::side_effect("update", properties, e))?;
    info!("Added {} to {}", entry, properties.display());
    Ok(())
}

/// New file content with `entry` on the common loader, or `None` if it is
/// already there.
///
/// Reads `.properties` syntax: the key ends at `=`, `:` or whitespace, and a
/// line ending in an odd number of backslashes continues on the next one.
/// The file's line endings are kept.
fn with_loader_entry(content: &str, entry: &str) -> Option<String> {
    let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let mut found = false;

    let mut next = 0;
    while next < lines.len() {
        let start = next;
        let head = lines[start].trim_start_matches(is_blank);
        if head.is_empty() || head.starts_with(['#', '!']) {
            next += 1;
            continue;
        }

        let mut end = start;
        while continues(&lines[end]) && end + 1 < lines.len() {
            end += 1;
        }
        next = end + 1;

        let Some(value_at) = value_offset(&lines[start], COMMON_LOADER_KEY) else {
            continue;
        };
        let value = logical_value(&lines[start][value_at..], &lines[start + 1..=end]);
        if value
            .split(',')
            .any(|item| item.trim().trim_matches('"') == entry)
        {
            return None;
        }

        let inserted = if value.trim().is_empty() {
            entry.to_string()
        } else {
            format!("{},", entry)
        };
        lines[start].insert_str(value_at, &inserted);
        found = true;
        break;
    }

    if !found {
        lines.push(format!("{}={}", COMMON_LOADER_KEY, entry));
    }

    let mut updated = lines.join(newline);
    updated.push_str(newline);
    Some(updated)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Odd number of trailing backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Byte offset of the value in the first line of `key`'s property.
fn value_offset(line: &str, key: &str) -> Option<usize> {
    let key_at = line.len() - line.trim_start_matches(is_blank).len();

    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line[key_at..].char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = key_at + i;
            break;
        }
    }
    if &line[key_at..key_end] != key {
        return None;
    }

    let rest = line[key_end..].trim_start_matches(is_blank);
    let rest = rest
        .strip_prefix(['=', ':'])
        .map_or(rest, |after| after.trim_start_matches(is_blank));
    Some(line.len() - rest.len())
}

/// Value text with continuation lines joined.
fn logical_value(first: &str, continuation: &[String]) -> String {
    let mut value = String::new();
    let mut part = first;
    let mut rest = continuation.iter();

    while continues(part) {
        value.push_str(&part[..part.len() - 1]);
        match rest.next() {
            Some(line) => part = line.trim_start_matches(is_blank),
            None => return value,
        }
    }
    value.push_str(part);
    value
}

/// Write to a sibling temp file, then rename over the target.
///
/// The temp file is removed if the write fails, so the target is either
/// untouched or fully replaced.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let result = fs::write(&temp_path, bytes).and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
