#![cfg(test)]
//! This is meant to mirror as closely as possible, how users should use the crate


use crate::prelude::*;

/// The concrete one-record source: a `CCX\0` header followed by a single record with
/// `name: "a.txt"` and `path: "dir/a.txt"`, every opaque byte zeroed. Handcrafted byte
/// by byte so the wire layout is pinned down independently of the [`Builder`].
fn one_record_source() -> Vec<u8> {
	let mut bytes = vec![0x43, 0x43, 0x58, 0x00];
	bytes.extend_from_slice(&[0u8; 4]);
	bytes.extend_from_slice(&1u32.to_le_bytes());

	bytes.push(5); // name length
	bytes.extend_from_slice(&[0u8; 3]);
	bytes.extend_from_slice(b"a.txt");
	bytes.extend_from_slice(&[0u8; 8]);
	bytes.extend_from_slice(&[0u8; 4]); // original crc
	bytes.extend_from_slice(&[0u8; 4]); // exported crc
	bytes.push(0); // flag
	bytes.extend_from_slice(&[0u8; 3]);
	bytes.extend_from_slice(&[0u8; 12]);
	bytes.push(0); // source file number
	bytes.extend_from_slice(&[0u8; 7]);
	bytes.push(9); // path length
	bytes.extend_from_slice(&[0u8; 3]);
	bytes.extend_from_slice(b"dir/a.txt");

	bytes
}

#[test]
fn defaults() {
	let _header = Header::default();
	let _entry = IndexEntry::default();
	let _builder = Builder::new();
	let _builder_config = BuilderConfig::default();
}

#[test]
fn loader_one_record() -> anyhow::Result<()> {
	let bytes = one_record_source();
	let archive = Archive::from_handle(&bytes[..])?;

	assert_eq!(archive.header().magic, *b"CCX\0");
	assert_eq!(archive.header().record_count, 1);
	assert_eq!(archive.len(), 1);

	let entry = &archive.entries()[0];
	assert_eq!(entry.name, "a.txt");
	assert_eq!(entry.path, "dir/a.txt");
	println!("{}", entry);

	let hits = archive.find_by_path("dir");
	assert_eq!(hits.len(), 1);
	assert_eq!(&hits[0], entry);

	assert!(archive.find_by_path("zzz").is_empty());

	Ok(())
}

#[test]
fn loader_zero_records() -> anyhow::Result<()> {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(b"CCX\0");
	bytes.extend_from_slice(&[0u8; 4]);
	bytes.extend_from_slice(&0u32.to_le_bytes());

	let archive = Archive::from_handle(&bytes[..])?;
	assert!(archive.is_empty());
	assert_eq!(archive.header().record_count, 0);
	assert!(archive.find_by_path("").is_empty());

	Ok(())
}

#[test]
fn truncation_never_yields_partial_archives() {
	let bytes = one_record_source();

	for cut in 0..bytes.len() {
		let result = Archive::from_handle(&bytes[..cut]);

		match result {
			Err(InternalError::InvalidContext(_)) => assert!(cut < 12),
			Err(InternalError::Truncated { offset, needed }) => {
				assert!(cut >= 12);
				assert_eq!(offset, cut as u64);
				assert!(needed > 0);
			},
			other => panic!("cut at {} produced {:?}", cut, other.map(|a| a.len())),
		}
	}
}

#[test]
fn search_semantics() -> anyhow::Result<()> {
	let mut builder = Builder::new();
	builder.add("a.txt", "dir/a.txt");
	builder.add("b.txt", "dir/sub/b.txt");
	builder.add("c.dat", "other/c.dat");

	let mut buffer = Vec::new();
	builder.dump(&mut buffer, &BuilderConfig::default())?;

	let archive = Archive::from_handle(&buffer[..])?;

	// The empty needle is a substring of every path
	assert_eq!(archive.find_by_path("").len(), 3);

	// A full path matches exactly its own record
	let hits = archive.find_by_path("dir/a.txt");
	assert_eq!(hits.len(), 1);
	assert_eq!(hits[0].name, "a.txt");

	// Matches preserve original file order
	let hits = archive.find_by_path("dir/");
	assert_eq!(hits.len(), 2);
	assert_eq!(hits[0].name, "a.txt");
	assert_eq!(hits[1].name, "b.txt");

	// Case-sensitive, byte-wise
	assert!(archive.find_by_path("DIR").is_empty());

	Ok(())
}

#[test]
fn search_results_outlive_the_archive() -> anyhow::Result<()> {
	let bytes = one_record_source();
	let archive = Archive::from_handle(&bytes[..])?;

	let hits = archive.find_by_path("dir");
	drop(archive);

	// Owned copies, not borrows into the store
	assert_eq!(hits[0].path, "dir/a.txt");

	Ok(())
}

#[test]
fn double_decode_is_independent() -> anyhow::Result<()> {
	let bytes = one_record_source();

	let first = Archive::from_handle(&bytes[..])?;
	let second = Archive::from_handle(&bytes[..])?;

	assert_eq!(first.header(), second.header());
	assert_eq!(first.entries(), second.entries());

	drop(first);
	assert_eq!(second.entries()[0].name, "a.txt");

	Ok(())
}

#[test]
fn loader_from_file() -> anyhow::Result<()> {
	let directory = tempfile::tempdir()?;
	let target = directory.path().join("target.ccx");
	std::fs::write(&target, one_record_source())?;

	let archive = Archive::from_file(&target)?;
	assert_eq!(archive.len(), 1);
	assert_eq!(archive.entries()[0].path, "dir/a.txt");

	let missing = Archive::from_file(directory.path().join("missing.ccx"));
	assert!(matches!(missing, Err(InternalError::InvalidContext(_))));

	Ok(())
}

#[test]
fn invalid_utf8_rejects_the_source() {
	let mut bytes = one_record_source();

	// Stomp the name bytes with invalid UTF-8
	bytes[16..21].copy_from_slice(&[0xFF, 0xFE, 0xFF, 0xFE, 0xFF]);

	let result = Archive::from_handle(&bytes[..]);
	assert!(matches!(result, Err(InternalError::InvalidContext(_))));
}
