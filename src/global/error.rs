use std::io;
use thiserror::Error;

/// All errors manifestable within `ccx` collected into one enum
#[derive(Debug, Error)]
pub enum InternalError {
	/// The source is unusable as a whole: it could not be opened, its header could not be
	/// fully read, or a string field within it holds invalid UTF-8
	#[error("[CcxError::InvalidContext] {0}")]
	InvalidContext(String),
	/// The source ended inside a record. `offset` is the position the cursor had reached,
	/// `needed` the number of bytes still owed by the current read
	#[error("[CcxError::Truncated] source ended at offset {offset}, {needed} more byte(s) were needed")]
	Truncated {
		/// Position of the cursor when the source ran dry
		offset: u64,
		/// Bytes missing from the read in progress
		needed: usize,
	},
	/// Reserving storage for the declared number of records failed
	#[error("[CcxError::AllocationFailure] unable to reserve storage for {0} record(s)")]
	AllocationFailure(usize),
	/// A `name` or `path` is too long for its one byte length prefix. Only produced when
	/// serializing entries, decoded entries can never overflow
	#[error("[CcxError::FieldOverflow] {field} is {length} bytes long, the maximum is {max}", max = crate::MAX_FIELD_LENGTH)]
	FieldOverflow {
		/// Which of the two string fields overflowed
		field: &'static str,
		/// The offending byte length
		length: usize,
	},
	/// More entries queued in a `Builder` than a `u32` record count can declare
	#[error("[CcxError::RecordCountOverflow] {0} entries will not fit the u32 record count")]
	RecordCountOverflow(usize),
	/// Underlying `io` errors, except end-of-data which maps to `Truncated`
	#[error("[CcxError::IOError] {0}")]
	IOError(#[from] io::Error),
}
