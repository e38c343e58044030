//! File system access used by the converter.
//!
//! Everything the conversion touches on disk goes through [`FileAccessor`],
//! so the pipeline can run against an in-memory stand-in.

use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

/// Permission bits for the generated source file.
pub const FILE_MODE: u32 = 0o644;
/// Permission bits for directories created on the way to the output file.
pub const DIR_MODE: u32 = 0o755;

pub trait FileAccessor {
    /// Opens `path` for sequential reading. The reader is closed when dropped.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;

    /// Writes `contents` to `path`, replacing whatever was there.
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;

    /// Creates `path` and all missing parents. Existing directories are fine.
    fn mkdir_all(&self, path: &Path, mode: u32) -> io::Result<()>;
}

/// [`FileAccessor`] backed by the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileAccessor for OsFileSystem {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        let file = File::open(path)?;
        Ok(Box::new(file))
    }

    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.flush()
    }

    fn mkdir_all(&self, path: &Path, mode: u32) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        builder.create(path)
    }
}
