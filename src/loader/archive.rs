use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

use crate::global::{
	error::InternalError,
	header::Header,
	index_entry::IndexEntry,
	reader::ByteReader,
	result::InternalResult,
};

/// A fully decoded archive index: the header plus every record, in original file order.
/// Construction is all-or-nothing — a source that cannot be decoded in its entirety
/// yields an error, never a partial archive. Once constructed an [`Archive`] is
/// immutable, so sharing `&Archive` between threads needs no locking.
///
/// Record boundaries are determined by each record's declared string lengths, so a
/// single misparse cannot be resynchronized: the first failure invalidates the whole
/// source.
#[derive(Debug)]
pub struct Archive {
	header: Header,
	entries: Vec<IndexEntry>,
}

impl Archive {
	/// Opens the file at `path` and decodes it, the same as wrapping the opened file in a
	/// `BufReader` and calling [`Archive::from_handle`].
	/// ### Errors
	/// - `InvalidContext`, if the file cannot be opened
	/// - Whatever the internal call to `Archive::from_handle(-)` returns
	pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Archive> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|err| {
			InternalError::InvalidContext(format!("unable to open {}: {}", path.display(), err))
		})?;

		log::debug!("decoding archive index from {}", path.display());
		Archive::from_handle(BufReader::new(file))
	}

	/// Given a read handle, this will read and parse the data into an [`Archive`] struct.
	///
	/// The source is consumed strictly front to back: the header first, then exactly as
	/// many records as the header declares. Bytes trailing the last record are ignored.
	/// Does not buffer the underlying handle, so consider wrapping `handle` in a
	/// `BufReader`.
	/// ### Errors
	/// - `InvalidContext`, if the header cannot be fully read, or a string field holds invalid UTF-8
	/// - `AllocationFailure`, if storage for the declared record count cannot be reserved
	/// - `Truncated`, if the source ends inside a record
	pub fn from_handle<T: Read>(handle: T) -> InternalResult<Archive> {
		let mut handle = ByteReader::new(handle);

		let header = match Header::from_handle(&mut handle) {
			Ok(header) => header,
			Err(InternalError::Truncated { offset, .. }) => {
				return Err(InternalError::InvalidContext(format!(
					"source ended at offset {} before the header was complete",
					offset
				)))
			},
			Err(err) => return Err(err),
		};

		let count = header.record_count as usize;
		log::trace!("header declares {} record(s)", count);

		// Size the record storage up front, the declared count is exact
		let mut entries = Vec::new();
		entries
			.try_reserve_exact(count)
			.map_err(|_| InternalError::AllocationFailure(count))?;

		// Decode records in order, first failure discards everything
		for _ in 0..count {
			entries.push(IndexEntry::from_handle(&mut handle)?);
		}

		log::debug!("decoded {} record(s), {} byte(s) consumed", count, handle.offset());

		Ok(Archive { header, entries })
	}

	/// The header of the decoded source, preserved verbatim
	#[inline(always)]
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// A read-only view over every record, in original file order. No string payloads
	/// are copied, the returned slice borrows from the archive.
	#[inline(always)]
	pub fn entries(&self) -> &[IndexEntry] {
		&self.entries
	}

	/// The number of records held by this archive
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether this archive holds no records at all
	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Every record whose `path` contains `needle` as a contiguous substring, in original
	/// file order. The check is case-sensitive and byte-wise; an empty `needle` matches
	/// every record.
	///
	/// The returned entries are independent, fully-owned copies. They never alias the
	/// archive's own storage, so results stay valid after the archive is dropped.
	pub fn find_by_path(&self, needle: &str) -> Vec<IndexEntry> {
		self.entries
			.iter()
			.filter(|entry| entry.path.contains(needle))
			.cloned()
			.collect()
	}
}
