//! Options and arguments as yielded by the parser.

use core::fmt::{self, Display, Formatter};

use crate::lexer::Argument;

/// Variant of an option. Only store the name, not the hyphens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opt<A: Argument> {
    /// A short option (e.g. -v).
    Short(A::ShortOpt),

    /// A long option (e.g. --verbose).
    Long(A),
}

impl<A: Argument> Opt<A> {
    /// Retrieve the short option name, if any.
    #[inline(always)]
    pub fn short(self) -> Option<A::ShortOpt> {
        match self {
            Opt::Short(short) => Some(short),
            Opt::Long(_) => None,
        }
    }

    /// Retrieve the long option name, if any.
    #[inline(always)]
    pub fn long(self) -> Option<A> {
        match self {
            Opt::Short(_) => None,
            Opt::Long(long) => Some(long),
        }
    }
}

impl<A: Argument> Display for Opt<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Opt::Short(short) => {
                f.write_str("-")?;
                A::fmt_short(short, f)
            }
            Opt::Long(long) => {
                f.write_str("--")?;
                long.fmt_arg(f)
            }
        }
    }
}

/// Defines an item that has been read from the command line, either an option or a positional
/// argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg<A: Argument> {
    /// Option, without its value.
    Option(Opt<A>),

    /// Positional argument (i.e. everything that is not an option nor an option value).
    Positional(A),
}

impl<A: Argument> Arg<A> {
    /// Retrieve the option, if any.
    #[inline(always)]
    pub fn opt(self) -> Option<Opt<A>> {
        match self {
            Arg::Option(opt) => Some(opt),
            Arg::Positional(_) => None,
        }
    }

    /// Retrieve the positional argument, if any.
    #[inline(always)]
    pub fn positional(self) -> Option<A> {
        match self {
            Arg::Option(_) => None,
            Arg::Positional(arg) => Some(arg),
        }
    }
}

impl<A: Argument> From<Opt<A>> for Arg<A> {
    fn from(opt: Opt<A>) -> Self {
        Arg::Option(opt)
    }
}

impl<A: Argument> TryFrom<Arg<A>> for Opt<A> {
    /// The positional argument is given back.
    type Error = A;

    fn try_from(arg: Arg<A>) -> Result<Self, Self::Error> {
        match arg {
            Arg::Option(opt) => Ok(opt),
            Arg::Positional(arg) => Err(arg),
        }
    }
}

impl<A: Argument> Display for Arg<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Arg::Option(opt) => Display::fmt(&opt, f),
            Arg::Positional(arg) => arg.fmt_arg(f),
        }
    }
}
