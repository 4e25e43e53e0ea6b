//! A reader (and writer) for `CCX` archive-index files.
//!
//! A `.ccx` source is a flat index over the contents of a companion archive: a 12 byte
//! header followed by a run of variable-size records, one per indexed file. Each record
//! carries a length-prefixed file name and file path, two opaque checksums and a handful
//! of reserved byte ranges whose meaning is undocumented. This crate decodes such a
//! source into an immutable [`Archive`](crate::prelude::Archive), which can then be
//! enumerated or searched by path substring.
//!
//! ```no_run
//! use ccx::prelude::*;
//!
//! # fn main() -> Result<(), InternalError> {
//! let archive = Archive::from_file("assets/index.ccx")?;
//!
//! for entry in archive.entries() {
//! 	println!("{}", entry);
//! }
//!
//! let hits = archive.find_by_path("textures/");
//! println!("{} indexed file(s) under textures/", hits.len());
//! # Ok(())
//! # }
//! ```

mod tests;

pub(crate) mod global;
pub(crate) mod loader;
pub(crate) mod writer;

// Global constants
/// The size in bytes of the magic sequence at the start of a source
pub const MAGIC_LENGTH: usize = 4;

/// The magic written by default into new sources. Existing sources are **not** validated
/// against this, the magic is an opaque discriminator and is preserved as read.
pub const DEFAULT_MAGIC: &[u8; MAGIC_LENGTH] = b"CCX\0";

/// The maximum byte length of an entry's `name` or `path`, the largest value a one byte
/// length prefix can declare
pub const MAX_FIELD_LENGTH: usize = 255;

pub mod prelude {
	//! All public crate structures and logic is stored within
	pub use crate::global::{
		error::InternalError,
		header::Header,
		index_entry::IndexEntry,
		result::InternalResult,
	};
	pub use crate::loader::archive::Archive;
	pub use crate::writer::{Builder, BuilderConfig};
}
