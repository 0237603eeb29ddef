//! Platform strings as raw arguments.
//!
//! Arguments handed over by the operating system are not guaranteed to be valid UTF-8. On unix
//! they are plain bytes, so option names and values are cut on ASCII boundaries and short options
//! are decoded one character at a time.

use core::fmt::{self, Display, Formatter};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use crate::lexer::Argument;

impl Argument for &OsStr {
    type ShortOpt = char;

    #[inline]
    fn is_terminator(&self) -> bool {
        self.as_bytes().is_terminator()
    }

    #[inline]
    fn parse_long(self) -> Option<(Self, Option<Self>)> {
        let (name, value) = self.as_bytes().parse_long()?;
        Some((OsStr::from_bytes(name), value.map(OsStr::from_bytes)))
    }

    #[inline]
    fn parse_short_cluster(self) -> Option<Self> {
        self.as_bytes().parse_short_cluster().map(OsStr::from_bytes)
    }

    /// An invalid UTF-8 sequence is read as a single [`char::REPLACEMENT_CHARACTER`].
    fn split_short(self) -> Option<(Self::ShortOpt, Option<Self>)> {
        let bytes = self.as_bytes();
        let chunk = bytes.utf8_chunks().next()?;

        let (short, len) = match chunk.valid().chars().next() {
            Some(c) => (c, c.len_utf8()),
            None => (char::REPLACEMENT_CHARACTER, chunk.invalid().len()),
        };

        let rest = &bytes[len..];
        Some((short, (!rest.is_empty()).then(|| OsStr::from_bytes(rest))))
    }

    #[inline]
    fn fmt_arg(self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_bytes().fmt_arg(f)
    }

    #[inline]
    fn fmt_short(short: Self::ShortOpt, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&short, f)
    }
}
