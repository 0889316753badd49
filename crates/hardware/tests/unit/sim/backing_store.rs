//! # Backing Store Tests
//!
//! Verifies disk image sizing checks and page-positioned reads, both from
//! memory and from a real file.

use std::io::{Cursor, Write};

use tempfile::NamedTempFile;
use vmsim_core::common::constants::ADDRESS_SPACE_SIZE;
use vmsim_core::common::{PAGE_SIZE, SimError};
use vmsim_core::sim::{BackingStore, DiskImage};

use crate::common::harness::{image_byte, patterned_image};

/// Helper function to create a temporary backing store file.
fn create_temp_image(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_page_at_page_offset() {
    let mut disk = DiskImage::from_bytes(patterned_image()).unwrap();
    let mut buf = [0u8; PAGE_SIZE];

    disk.read_page(66, &mut buf).unwrap();
    for (i, byte) in buf.iter().enumerate() {
        assert_eq!(*byte, image_byte(66 * PAGE_SIZE + i));
    }
}

#[test]
fn reads_are_positioned_independently() {
    let mut disk = DiskImage::from_bytes(patterned_image()).unwrap();
    let mut buf = [0u8; PAGE_SIZE];

    for page in [255u8, 0, 128, 1, 255] {
        disk.read_page(page, &mut buf).unwrap();
        assert_eq!(buf[0], image_byte(page as usize * PAGE_SIZE));
        assert_eq!(buf[255], image_byte(page as usize * PAGE_SIZE + 255));
    }
}

#[test]
fn rejects_image_smaller_than_address_space() {
    let err = DiskImage::from_bytes(vec![0; ADDRESS_SPACE_SIZE - 1]).unwrap_err();
    assert!(matches!(
        err,
        SimError::BackingStoreTooSmall {
            len: 65535,
            required: 65536
        }
    ));
}

#[test]
fn accepts_larger_image() {
    let disk = DiskImage::new(Cursor::new(vec![0u8; ADDRESS_SPACE_SIZE + 100])).unwrap();
    assert_eq!(disk.size(), (ADDRESS_SPACE_SIZE + 100) as u64);
}

#[test]
fn opens_file_image() {
    let file = create_temp_image(&patterned_image());
    let mut disk = DiskImage::open(file.path()).unwrap();
    assert_eq!(disk.size(), ADDRESS_SPACE_SIZE as u64);

    let mut buf = [0u8; PAGE_SIZE];
    disk.read_page(200, &mut buf).unwrap();
    assert_eq!(buf[10], image_byte(200 * PAGE_SIZE + 10));
}

#[test]
fn truncated_file_is_rejected_at_open() {
    let file = create_temp_image(&[1, 2, 3]);
    let err = DiskImage::open(file.path()).unwrap_err();
    assert!(matches!(err, SimError::BackingStoreTooSmall { len: 3, .. }));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DiskImage::open(dir.path().join("BACKING_STORE.bin")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

/// Reads byte 0 of `page` through a store taken by value.
fn first_byte<S: BackingStore>(mut store: S, page: u8) -> u8 {
    let mut buf = [0u8; PAGE_SIZE];
    store.read_page(page, &mut buf).unwrap();
    buf[0]
}

#[test]
fn boxed_and_borrowed_stores_delegate() {
    let mut disk = DiskImage::from_bytes(patterned_image()).unwrap();
    assert_eq!(first_byte(&mut disk, 4), image_byte(4 * PAGE_SIZE));

    let boxed: Box<dyn BackingStore> = Box::new(disk);
    assert_eq!(first_byte(boxed, 3), image_byte(3 * PAGE_SIZE));
}

#[test]
fn into_inner_releases_reader_after_reads() {
    let mut disk = DiskImage::from_bytes(patterned_image()).unwrap();
    let mut buf = [0u8; PAGE_SIZE];
    disk.read_page(2, &mut buf).unwrap();

    let cursor = disk.into_inner();
    assert_eq!(cursor.position(), 3 * PAGE_SIZE as u64);
    assert_eq!(cursor.into_inner().len(), ADDRESS_SPACE_SIZE);
}
