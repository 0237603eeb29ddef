#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod lexer;
pub mod parser;
pub mod positionals;
pub mod token;

#[cfg(all(feature = "std", unix))]
mod os_str;

pub use lexer::{Argument, DisplayArg};
pub use parser::{Error, ErrorKind, Options};
pub use positionals::{IntoPositionals, Positionals};
pub use token::{Arg, Opt};
