use std::io::Write;

mod config;

pub use config::BuilderConfig;

use crate::global::{
	error::InternalError,
	header::Header,
	index_entry::IndexEntry,
	result::InternalResult,
};

/// The archive index builder. Provides an interface with which one can configure and
/// serialize a record sequence into a well-formed `CCX` byte stream, the exact dual of
/// [`Archive`](crate::prelude::Archive) decoding.
#[derive(Debug, Default)]
pub struct Builder {
	pub(crate) entries: Vec<IndexEntry>,
}

impl Builder {
	/// Instantiates a new [`Builder`] with an empty processing queue.
	#[inline(always)]
	pub fn new() -> Builder {
		Builder::default()
	}

	/// Appends an entry holding the given `name` and `path`, with every opaque field
	/// zeroed. Use [`Builder::add_entry`] to control the opaque fields.
	pub fn add(&mut self, name: impl AsRef<str>, path: impl AsRef<str>) {
		let mut entry = IndexEntry::empty();
		entry.name = name.as_ref().to_string();
		entry.path = path.as_ref().to_string();

		self.add_entry(entry);
	}

	/// Appends a preconstructed [`IndexEntry`] into the processing queue. Entries are
	/// written out in insertion order.
	pub fn add_entry(&mut self, entry: IndexEntry) {
		self.entries.push(entry);
	}

	/// Removes all entries from the [`Builder`]. Use this to re-use [`Builder`]s instead
	/// of instantiating new ones
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Serializes the queued entries into `target`: the header first, then every record
	/// in insertion order. Returns the number of bytes written.
	/// ### Errors
	/// - `FieldOverflow`, if any entry's `name` or `path` is longer than 255 bytes
	/// - `RecordCountOverflow`, if more than `u32::MAX` entries are queued
	/// - `IOError`, if writing to `target` fails
	pub fn dump<W: Write>(&self, mut target: W, config: &BuilderConfig) -> InternalResult<usize> {
		let record_count = u32::try_from(self.entries.len())
			.map_err(|_| InternalError::RecordCountOverflow(self.entries.len()))?;

		let header = Header {
			magic: config.magic,
			reserved: config.reserved,
			record_count,
		};

		let mut written = 0;

		let bytes = header.bytes();
		target.write_all(&bytes)?;
		written += bytes.len();

		for entry in &self.entries {
			let bytes = entry.bytes()?;
			target.write_all(&bytes)?;
			written += bytes.len();
		}

		log::debug!("dumped {} record(s), {} byte(s) written", record_count, written);

		Ok(written)
	}
}
