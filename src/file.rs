// src/file.rs
//! Output side: datasets, the completion timestamp and the page cache.
//!
//! Datasets are written to a sibling temp file and renamed into place, so a
//! failed run leaves the previous file intact.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::config::consts::TIMESTAMP_FORMAT;
use crate::error::PipelineError;
use crate::record::{Category, Record};

/// Pretty JSON (2-space indent, UTF-8 unescaped) with a trailing newline.
pub fn to_json(category: Category, records: &[Record]) -> Result<Vec<u8>, PipelineError> {
    let mut buf = Vec::with_capacity(records.len() * 160);
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    records.serialize(&mut ser).map_err(|source| PipelineError::Encode { category, source })?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn write_dataset(path: &Path, category: Category, records: &[Record]) -> Result<(), PipelineError> {
    let bytes = to_json(category, records)?;
    write_atomic(path, &bytes).map_err(|source| PipelineError::Write { path: path.to_path_buf(), source })
}

pub fn write_timestamp(path: &Path, at: DateTime<Utc>) -> Result<(), PipelineError> {
    let stamp = at.format(TIMESTAMP_FORMAT).to_string();
    write_atomic(path, stamp.as_bytes()).map_err(|source| PipelineError::Write { path: path.to_path_buf(), source })
}

/// Write to a uniquely named temp file next to `path`, then rename over it.
/// Concurrent writers of the same path never share a temp file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_directory(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    // a failed persist drops the temp file
    tmp.persist(path).map(drop).map_err(|e| e.error)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn json_is_pretty_and_unescaped() {
        let recs = vec![Record::show("Shōwa Genroku", Some(33095), Some(1), 1)];
        let s = String::from_utf8(to_json(Category::Shows, &recs).unwrap()).unwrap();
        assert!(s.starts_with("[\n  {\n    \"title\": \"Shōwa Genroku\""));
        assert!(s.ends_with("]\n"));
    }

    #[test]
    fn atomic_write_replaces_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nested").join("tv.json");
        write_atomic(&p, b"one").unwrap();
        write_atomic(&p, b"two").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "two");
        let leftovers = fs::read_dir(p.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn concurrent_writes_to_one_path_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("updated.txt");
        for _ in 0..50 {
            std::thread::scope(|s| {
                let a = s.spawn(|| write_timestamp(&p, Utc::now()));
                let b = s.spawn(|| write_timestamp(&p, Utc::now()));
                assert!(a.join().unwrap().is_ok());
                assert!(b.join().unwrap().is_ok());
            });
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn timestamp_format() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("updated.txt");
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        write_timestamp(&p, at).unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "2024-03-09 07:05:01");
    }
}
