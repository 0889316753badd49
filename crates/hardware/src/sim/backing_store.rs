//! Backing Store.
//!
//! The simulated disk that pages are loaded from on a fault. It provides:
//! 1. **`BackingStore` trait:** Random-access, page-granular reads addressed by page number.
//! 2. **`DiskImage`:** An implementation over any seekable byte source (a file, or an
//!    in-memory cursor), reading with an absolute seek per page so faults may arrive in
//!    any order.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use crate::common::constants::{ADDRESS_SPACE_SIZE, PAGE_SIZE};
use crate::common::error::{Result, SimError};

/// A page-addressed byte source.
///
/// Implementations must fill the whole buffer or fail; a short read is an error.
pub trait BackingStore {
    /// Reads page `page` (bytes `page * 256 .. page * 256 + 256`) into `buf`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, `UnexpectedEof` for a short read.
    fn read_page(&mut self, page: u8, buf: &mut [u8; PAGE_SIZE]) -> io::Result<()>;
}

impl<T: BackingStore + ?Sized> BackingStore for &mut T {
    fn read_page(&mut self, page: u8, buf: &mut [u8; PAGE_SIZE]) -> io::Result<()> {
        (**self).read_page(page, buf)
    }
}

impl<T: BackingStore + ?Sized> BackingStore for Box<T> {
    fn read_page(&mut self, page: u8, buf: &mut [u8; PAGE_SIZE]) -> io::Result<()> {
        (**self).read_page(page, buf)
    }
}

/// Disk image backed by a seekable reader.
#[derive(Debug)]
pub struct DiskImage<R> {
    inner: R,
    size: u64,
}

impl DiskImage<File> {
    /// Opens a disk image file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or is smaller than the address space.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::new(file)
    }
}

impl DiskImage<Cursor<Vec<u8>>> {
    /// Wraps an in-memory image.
    ///
    /// # Errors
    ///
    /// Fails if `bytes` is smaller than the address space.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::new(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> DiskImage<R> {
    /// Wraps a seekable reader, checking that it covers the whole address space.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BackingStoreTooSmall`] for sources shorter than
    /// 65536 bytes, or the I/O error raised while measuring the source.
    pub fn new(mut inner: R) -> Result<Self> {
        let size = inner.seek(SeekFrom::End(0))?;
        let required = ADDRESS_SPACE_SIZE as u64;
        if size < required {
            return Err(SimError::BackingStoreTooSmall {
                len: size,
                required,
            });
        }
        Ok(Self { inner, size })
    }

    /// Size of the underlying source in bytes.
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Releases the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> BackingStore for DiskImage<R> {
    fn read_page(&mut self, page: u8, buf: &mut [u8; PAGE_SIZE]) -> io::Result<()> {
        let pos = page as u64 * PAGE_SIZE as u64;
        let _ = self.inner.seek(SeekFrom::Start(pos))?;
        self.inner.read_exact(buf)
    }
}
