//! Embed binary files (typically images) into Go programs.
//!
//! A conversion reads the input file, renders its bytes as a `[]byte`
//! literal inside a Go source file, and writes that file out:
//!
//! ```no_run
//! bytefy::convert("assets/logo.png", "internal/assets/logo.go", "assets", "Logo")?;
//! # Ok::<(), bytefy::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod fs;
pub mod ident;
pub mod template;

pub use convert::{ConversionRequest, Converter, convert, default_output_path};
pub use error::{Error, ErrorKind, Result};
pub use ident::is_valid_identifier;
