use std::io::{self, Read};

use super::{error::InternalError, result::InternalResult};

/// A sequential cursor over a byte source. All decoding in the crate goes through this
/// struct: it tracks how far into the source the decode has progressed, so end-of-data
/// failures can name the exact offset at which the source ran dry.
///
/// The cursor only ever advances. A failed read is terminal for the decode in progress,
/// there is no rewinding or resynchronization.
pub(crate) struct ByteReader<T> {
	handle: T,
	offset: u64,
}

impl<T: Read> ByteReader<T> {
	pub fn new(handle: T) -> ByteReader<T> {
		ByteReader { handle, offset: 0 }
	}

	/// The number of bytes consumed from the source so far
	#[inline(always)]
	pub fn offset(&self) -> u64 {
		self.offset
	}

	/// Fills `buffer` exactly, advancing the cursor by the number of bytes consumed.
	/// ### Errors
	/// - `Truncated`, if the source ends before `buffer` is full
	/// - `IOError`, for any other `io` failure
	pub fn read_exact(&mut self, buffer: &mut [u8]) -> InternalResult {
		let mut filled = 0;

		while filled < buffer.len() {
			match self.handle.read(&mut buffer[filled..]) {
				Ok(0) => {
					return Err(InternalError::Truncated {
						offset: self.offset,
						needed: buffer.len() - filled,
					})
				},
				Ok(count) => {
					filled += count;
					self.offset += count as u64;
				},
				Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
				Err(err) => return Err(err.into()),
			}
		}

		Ok(())
	}

	/// `read_exact` into a fixed-width array
	pub fn read_array<const N: usize>(&mut self) -> InternalResult<[u8; N]> {
		let mut buffer = [0u8; N];
		self.read_exact(&mut buffer)?;
		Ok(buffer)
	}

	pub fn read_u8(&mut self) -> InternalResult<u8> {
		let buffer = self.read_array::<1>()?;
		Ok(buffer[0])
	}

	pub fn read_u32_le(&mut self) -> InternalResult<u32> {
		let buffer = self.read_array::<4>()?;
		Ok(u32::from_le_bytes(buffer))
	}

	/// Reads `length` bytes of text, the payload half of a length-prefixed field. On the
	/// wire the length byte and its payload are not adjacent (a reserved range sits in
	/// between), so the two halves are read separately. The text carries no terminator on
	/// the wire and none is stored: a `String` knows its own length.
	/// ### Errors
	/// - `Truncated`, under the same rule as `read_exact`
	/// - `InvalidContext`, if the bytes are not valid UTF-8
	pub fn read_text(&mut self, length: usize) -> InternalResult<String> {
		let start = self.offset;

		let mut buffer = vec![0u8; length];
		self.read_exact(&mut buffer)?;

		String::from_utf8(buffer).map_err(|_| {
			InternalError::InvalidContext(format!(
				"string field at offset {} is not valid UTF-8",
				start
			))
		})
	}
}
