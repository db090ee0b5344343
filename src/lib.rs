//! shellscribe: extract structured documentation from annotated shell scripts.
//!
//! ```no_run
//! use shellscribe::{parse_file, Config};
//! use std::path::Path;
//!
//! let blocks = parse_file(Path::new("lib/strings.sh"), &Config::default())?;
//! for block in blocks.iter().skip(1) {
//!     println!("{:?}", block.function_name);
//! }
//! # Ok::<(), shellscribe::ParseError>(())
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod model;
pub mod parser;
pub mod walk;

pub use config::Config;
pub use error::{ConfigError, ParseError, TagError};
pub use model::{should_skip, Docblock};
pub use parser::{parse_file, parse_str};
