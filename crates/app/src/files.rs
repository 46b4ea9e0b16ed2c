//! File collaborator for the codec.
//!
//! The core never touches the file system; this module reads and writes the
//! three artifacts of a run:
//! - `.tree`: frequency table record
//! - `.code`: payload record (`ENCRYPTED`/`PLAIN` header + body)
//! - `.decode`: decoded text
//!
//! Every handle is scoped to the function that opens it and is closed on all
//! exit paths.

use crate::error::{AppError, AppResult};
use huffxor_core::frequency::join_lines;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub const TREE_EXTENSION: &str = "tree";
pub const CODE_EXTENSION: &str = "code";
pub const DECODE_EXTENSION: &str = "decode";

/// `path` with its extension replaced (or added if it has none).
pub fn with_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// Read source text line by line.
///
/// `"\n"`, `"\r\n"` and a lone `'\r'` all end a line. Lines are re-joined
/// with a single `'\n'` and the final line gets none, so `"a\r\nb\rc\n"`
/// reads as `"a\nb\nc"`.
pub fn read_source(path: &Path) -> AppResult<String> {
    let text = read_record(path)?;
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    Ok(join_lines(text.lines()))
}

/// Read a whole record file verbatim.
pub fn read_record(path: &Path) -> AppResult<String> {
    let mut text = String::new();
    open(path)?
        .read_to_string(&mut text)
        .map_err(|source| AppError::io(path, source))?;
    Ok(text)
}

/// Create or truncate `path` and write `content` to it.
pub fn write_text(path: &Path, content: &str) -> AppResult<()> {
    let file = File::create(path).map_err(|source| AppError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| AppError::io(path, source))?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn open(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|source| AppError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_extension() {
        assert_eq!(
            with_extension(Path::new("dir/story.souce"), TREE_EXTENSION),
            Path::new("dir/story.tree")
        );
        assert_eq!(
            with_extension(Path::new("story"), CODE_EXTENSION),
            Path::new("story.code")
        );
        assert_eq!(
            with_extension(Path::new("story.v1.code"), DECODE_EXTENSION),
            Path::new("story.v1.decode")
        );
    }

    #[test]
    fn test_read_source_normalizes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.txt");
        std::fs::write(&path, "first\r\nsecond\n\nlast\n").unwrap();

        assert_eq!(read_source(&path).unwrap(), "first\nsecond\n\nlast");
    }

    #[test]
    fn test_read_source_lone_carriage_return() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.txt");
        std::fs::write(&path, "a\rb").unwrap();
        assert_eq!(read_source(&path).unwrap(), "a\nb");

        std::fs::write(&path, "one\r\rtwo\r\nthree\r").unwrap();
        assert_eq!(read_source(&path).unwrap(), "one\n\ntwo\nthree");

        std::fs::write(&path, "x\r\r\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "x\n");
    }

    #[test]
    fn test_write_then_read_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.tree");
        write_text(&path, "NL:1\na:2\n").unwrap();

        assert_eq!(read_record(&path).unwrap(), "NL:1\na:2\n");
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.code");
        let err = read_record(&path).unwrap_err();
        assert!(err.to_string().contains("absent.code"));
    }
}
