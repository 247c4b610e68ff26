//!
//! # SVG path data
//!
//! Parses the `d` attribute of an SVG `<path>` element into a list of commands, and splits
//! those commands into their subpaths.
//!
//! ```
//! use flo_svg_path::*;
//!
//! let path = parse_path("M 10,20 30,40 Z").unwrap();
//!
//! assert!(path.commands[0] == PathCommand::new('M', vec![10.0, 20.0]));
//! assert!(path.commands[1] == PathCommand::new('L', vec![30.0, 40.0]));
//! assert!(path.subpaths().len() == 1);
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

mod error;
mod operator;
mod token;
mod command;
mod path;
mod encoding;

pub use self::error::*;
pub use self::operator::*;
pub use self::token::*;
pub use self::command::*;
pub use self::path::*;
pub use self::encoding::*;
