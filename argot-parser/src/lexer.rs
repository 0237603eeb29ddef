//! A lexer for splitting raw arguments into option names, values and short option clusters.

use core::fmt::{self, Debug, Display, Formatter};

/// Defines what a raw argument is, as far as the option parser is concerned.
///
/// The parser never looks inside an argument by itself. It only asks the argument whether it is
/// the `--` terminator, a long option or a short option cluster, and how to take one short option
/// off the front of a cluster. Long option names, option values and positional arguments are all
/// sub-slices of the original argument, so the parser never allocates.
///
/// Implemented for [`&str`][str] and [`&[u8]`][slice], and for `&OsStr` on unix targets when the
/// `std` feature is enabled.
pub trait Argument: Copy + Debug + Eq {
    /// One option of a short option cluster (e.g. [`char`]).
    type ShortOpt: Copy + Debug + Eq;

    /// Evaluate if the argument is exactly `--`.
    ///
    /// Checked before any other method: `--` must not be reported as a long option.
    fn is_terminator(&self) -> bool;

    /// Try to read the argument as a long option, with the leading `--` stripped.
    ///
    /// `--flag` gives `Some(("flag", None))`, `--flag=value` gives
    /// `Some(("flag", Some("value")))` and `--flag=` gives `Some(("flag", Some("")))`.
    fn parse_long(self) -> Option<(Self, Option<Self>)>;

    /// Try to read the argument as a short option cluster, with the leading `-` stripped.
    ///
    /// The returned cluster is never empty, so a lone `-` is not a cluster.
    fn parse_short_cluster(self) -> Option<Self>;

    /// Take one short option off the front of a cluster and return it with the rest of the
    /// cluster, if any is left. Returns `None` on an empty cluster.
    fn split_short(self) -> Option<(Self::ShortOpt, Option<Self>)>;

    /// Write the argument in a human readable form. Invalid UTF-8 is written as
    /// [`char::REPLACEMENT_CHARACTER`].
    fn fmt_arg(self, f: &mut Formatter<'_>) -> fmt::Result;

    /// Write one short option in a human readable form.
    fn fmt_short(short: Self::ShortOpt, f: &mut Formatter<'_>) -> fmt::Result;

    /// Evaluate if the argument is a long option or a short option cluster.
    #[inline(always)]
    fn is_option(self) -> bool {
        !self.is_terminator()
            && (self.parse_long().is_some() || self.parse_short_cluster().is_some())
    }

    /// Retrieve a value that implements [`Display`] for the argument.
    #[inline(always)]
    fn display_arg(self) -> DisplayArg<Self> {
        DisplayArg(self)
    }
}

/// Helper for printing any [`Argument`], created by [`Argument::display_arg`].
#[derive(Clone, Copy, Debug)]
pub struct DisplayArg<A: Argument>(A);

impl<A: Argument> Display for DisplayArg<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt_arg(f)
    }
}

impl Argument for &str {
    type ShortOpt = char;

    #[inline]
    fn is_terminator(&self) -> bool {
        *self == "--"
    }

    #[inline]
    fn parse_long(self) -> Option<(Self, Option<Self>)> {
        let name = self.strip_prefix("--").filter(|s| !s.is_empty())?;

        match name.split_once('=') {
            Some((name, value)) => Some((name, Some(value))),
            None => Some((name, None)),
        }
    }

    #[inline]
    fn parse_short_cluster(self) -> Option<Self> {
        self.strip_prefix('-').filter(|s| !s.is_empty())
    }

    #[inline]
    fn split_short(self) -> Option<(Self::ShortOpt, Option<Self>)> {
        let mut chars = self.chars();
        let short = chars.next()?;

        Some((short, Some(chars.as_str()).filter(|s| !s.is_empty())))
    }

    #[inline]
    fn fmt_arg(self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    #[inline]
    fn fmt_short(short: Self::ShortOpt, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&short, f)
    }
}

impl Argument for &[u8] {
    type ShortOpt = u8;

    #[inline]
    fn is_terminator(&self) -> bool {
        *self == b"--"
    }

    #[inline]
    fn parse_long(self) -> Option<(Self, Option<Self>)> {
        let name = self.strip_prefix(b"--").filter(|s| !s.is_empty())?;

        match name.iter().position(|&b| b == b'=') {
            Some(at) => Some((&name[..at], Some(&name[at + 1..]))),
            None => Some((name, None)),
        }
    }

    #[inline]
    fn parse_short_cluster(self) -> Option<Self> {
        self.strip_prefix(b"-").filter(|s| !s.is_empty())
    }

    #[inline]
    fn split_short(self) -> Option<(Self::ShortOpt, Option<Self>)> {
        let (&short, rest) = self.split_first()?;

        Some((short, Some(rest).filter(|s| !s.is_empty())))
    }

    fn fmt_arg(self, f: &mut Formatter<'_>) -> fmt::Result {
        for chunk in self.utf8_chunks() {
            f.write_str(chunk.valid())?;

            if !chunk.invalid().is_empty() {
                Display::fmt(&char::REPLACEMENT_CHARACTER, f)?;
            }
        }

        Ok(())
    }

    #[inline]
    fn fmt_short(short: Self::ShortOpt, f: &mut Formatter<'_>) -> fmt::Result {
        let short = if short.is_ascii() {
            char::from(short)
        } else {
            char::REPLACEMENT_CHARACTER
        };

        Display::fmt(&short, f)
    }
}
