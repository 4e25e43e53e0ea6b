use std::{fmt, io::Read};

use super::{
	error::InternalError,
	reader::ByteReader,
	result::InternalResult,
};

/// One file entry within an archive index. Carries the indexed file's name and path plus
/// a block of opaque metadata: two checksums, a boolean-like flag, a reference into an
/// external file table and six reserved byte ranges. The opaque fields are preserved
/// verbatim, their semantics are undocumented and nothing in the crate interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
	/// The indexed file's name, at most [`MAX_FIELD_LENGTH`](crate::MAX_FIELD_LENGTH) bytes
	pub name: String,
	/// Reserved bytes between the name's length prefix and the name itself
	pub reserved1: [u8; 3],
	/// Reserved bytes following the name
	pub reserved2: [u8; 8],
	/// Checksum of the file as originally stored. Opaque, never computed or verified
	pub original_crc: [u8; 4],
	/// Checksum of the file as exported. Opaque, never computed or verified
	pub exported_crc: [u8; 4],
	/// A boolean-like value of unknown meaning
	pub flag: u8,
	/// Reserved bytes following the flag
	pub reserved3: [u8; 3],
	/// Reserved bytes preceding the source file number
	pub reserved4: [u8; 12],
	/// Index into an external, unspecified file table
	pub source_file_number: u8,
	/// Reserved bytes following the source file number
	pub reserved5: [u8; 7],
	/// Reserved bytes between the path's length prefix and the path itself
	pub reserved6: [u8; 3],
	/// The indexed file's path, at most [`MAX_FIELD_LENGTH`](crate::MAX_FIELD_LENGTH) bytes
	pub path: String,
}

impl IndexEntry {
	// 1(name length) + 3 + 8 + 4(original crc) + 4(exported crc) + 1(flag) + 3 + 12 + 1(source file) + 7 + 1(path length) + 3 = 48, plus the two strings
	pub(crate) const FIXED_SIZE: usize = 48;

	#[inline(always)]
	pub(crate) fn empty() -> IndexEntry {
		IndexEntry {
			name: String::new(),
			reserved1: [0; 3],
			reserved2: [0; 8],
			original_crc: [0; 4],
			exported_crc: [0; 4],
			flag: 0,
			reserved3: [0; 3],
			reserved4: [0; 12],
			source_file_number: 0,
			reserved5: [0; 7],
			reserved6: [0; 3],
			path: String::new(),
		}
	}

	/// Given a read handle, will proceed to read and parse bytes into an [`IndexEntry`]
	/// struct. (de-serialization)
	///
	/// Fields are consumed in wire order. On success the cursor sits exactly one byte
	/// past the record's last byte; on failure the partially constructed entry is dropped
	/// and the error propagates unchanged.
	/// ### Errors
	/// - `Truncated`, if the source ends anywhere inside the record
	/// - `InvalidContext`, if the name or path bytes are not valid UTF-8
	pub(crate) fn from_handle<T: Read>(handle: &mut ByteReader<T>) -> InternalResult<IndexEntry> {
		let name_length = handle.read_u8()?;
		let reserved1 = handle.read_array()?;
		let name = handle.read_text(name_length as usize)?;

		let reserved2 = handle.read_array()?;
		let original_crc = handle.read_array()?;
		let exported_crc = handle.read_array()?;
		let flag = handle.read_u8()?;
		let reserved3 = handle.read_array()?;
		let reserved4 = handle.read_array()?;
		let source_file_number = handle.read_u8()?;
		let reserved5 = handle.read_array()?;

		let path_length = handle.read_u8()?;
		let reserved6 = handle.read_array()?;
		let path = handle.read_text(path_length as usize)?;

		Ok(IndexEntry {
			name,
			reserved1,
			reserved2,
			original_crc,
			exported_crc,
			flag,
			reserved3,
			reserved4,
			source_file_number,
			reserved5,
			reserved6,
			path,
		})
	}

	/// Serializes an [`IndexEntry`] struct into an array of bytes
	/// ### Errors
	/// - `FieldOverflow`, if `name` or `path` is longer than a one byte prefix can declare
	pub(crate) fn bytes(&self) -> InternalResult<Vec<u8>> {
		let name_length = Self::field_length("name", &self.name)?;
		let path_length = Self::field_length("path", &self.path)?;

		let mut buffer = Vec::with_capacity(IndexEntry::FIXED_SIZE + self.name.len() + self.path.len());
		buffer.push(name_length);
		buffer.extend_from_slice(&self.reserved1);
		buffer.extend_from_slice(self.name.as_bytes());
		buffer.extend_from_slice(&self.reserved2);
		buffer.extend_from_slice(&self.original_crc);
		buffer.extend_from_slice(&self.exported_crc);
		buffer.push(self.flag);
		buffer.extend_from_slice(&self.reserved3);
		buffer.extend_from_slice(&self.reserved4);
		buffer.push(self.source_file_number);
		buffer.extend_from_slice(&self.reserved5);
		buffer.push(path_length);
		buffer.extend_from_slice(&self.reserved6);
		buffer.extend_from_slice(self.path.as_bytes());

		Ok(buffer)
	}

	fn field_length(field: &'static str, value: &str) -> InternalResult<u8> {
		if value.len() > crate::MAX_FIELD_LENGTH {
			return Err(InternalError::FieldOverflow {
				field,
				length: value.len(),
			});
		};

		Ok(value.len() as u8)
	}
}

impl Default for IndexEntry {
	#[inline(always)]
	fn default() -> IndexEntry {
		IndexEntry::empty()
	}
}

impl fmt::Display for IndexEntry {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"[IndexEntry] name: {}, path: {}, source file: {}, flag: {}",
			self.name, self.path, self.source_file_number, self.flag
		)
	}
}
