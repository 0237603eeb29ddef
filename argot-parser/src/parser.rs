//! A parser for pulling options, option values and positional arguments from a command line.

use crate::lexer::Argument;
use crate::positionals::{IntoPositionals, Positionals};
use crate::token::{Arg, Opt};

/// Defines the possible errors that may occur during parsing of arguments.
///
/// The parser does not know which options exist, nor which ones take a value: the caller tells it
/// by asking, or not asking, for a value after an option. The only errors are therefore
/// mismatches between what the caller asks for and what the command line holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error<A: Argument> {
    /// A value has been requested for the option but the command line ended.
    #[error("option requires a value: {0}")]
    MissingValue(Opt<A>),

    /// A value has been attached to the option (e.g. `--flag=value`) but the caller moved on
    /// without reading it.
    #[error("option does not take a value: {opt}")]
    UnexpectedValue {
        /// The option the value is attached to.
        opt: Opt<A>,

        /// The value that has been left unread.
        value: A,
    },
}

impl<A: Argument> Error<A> {
    /// Retrieve the option that caused the error.
    pub fn opt(&self) -> Opt<A> {
        match *self {
            Error::MissingValue(opt) | Error::UnexpectedValue { opt, .. } => opt,
        }
    }

    /// Retrieve the kind of error, without the arguments it refers to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingValue(_) => ErrorKind::MissingValue,
            Error::UnexpectedValue { .. } => ErrorKind::UnexpectedValue,
        }
    }
}

/// Variant of an [`Error`], without the arguments it refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`Error::MissingValue`].
    MissingValue,

    /// See [`Error::UnexpectedValue`].
    UnexpectedValue,
}

/// Position of the parser in the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State<A: Argument> {
    /// Between two arguments, options may follow.
    Idle,

    /// An option has just been read, with nothing attached to it.
    Option(Opt<A>),

    /// A short option has just been read and the rest of its cluster is still unread.
    InShortCluster(Opt<A>, A),

    /// A long option has just been read with a value attached to it by `=`.
    PendingLongValue(Opt<A>, A),

    /// Looking for an option stopped on this positional argument.
    Positional(A),

    /// Looking for a positional argument stopped on this option.
    Deferred(A),

    /// The `--` terminator has been read, only positional arguments are left.
    TerminatorSeen,

    /// The input has no more arguments.
    Exhausted { terminated: bool },
}

/// Defines a cursor over the command line that is responsible for classifying raw arguments into
/// options, option values and positional arguments.
///
/// The cursor acts like a forward iterator: every raw argument is read once, in order, and the
/// caller drives the parsing by picking the accessor to call next.
///
/// ```
/// use argot_parser::{Opt, Options};
///
/// let mut opts = Options::new(["-v", "--output=out.txt", "input.txt"]);
/// let mut output = None;
///
/// while let Some(opt) = opts.next_opt()? {
///     match opt {
///         Opt::Short('v') => {}
///         Opt::Long("output") => output = Some(opts.value()?),
///         _ => {}
///     }
/// }
///
/// assert_eq!(output, Some("out.txt"));
/// assert_eq!(opts.next_positional()?, Some("input.txt"));
/// # Ok::<(), argot_parser::Error<&str>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Options<A: Argument, I> {
    iter: I,
    state: State<A>,
}

impl<A, I> Options<A, I>
where
    A: Argument,
    I: Iterator<Item = A>,
{
    /// Create a new parser from the command line input, without the program name.
    pub fn new(args: impl IntoIterator<IntoIter = I>) -> Self {
        Options {
            iter: args.into_iter(),
            state: State::Idle,
        }
    }

    /// Read the next option.
    ///
    /// Returns `Ok(None)` when the next argument is not an option. A positional argument is kept
    /// for [`next_positional`][Self::next_positional] and the `--` terminator is consumed.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnexpectedValue`] if the previous long option had a value attached to
    /// it that has not been read. The value is dropped, so the next call carries on.
    pub fn next_opt(&mut self) -> Result<Option<Opt<A>>, Error<A>> {
        match self.state {
            State::Idle | State::Option(_) => {
                Ok(self.next_raw(false).and_then(|arg| self.classify(arg)))
            }

            State::Deferred(arg) => Ok(self.classify(arg)),

            State::InShortCluster(_, cluster) => {
                if let Some(opt) = self.next_short(cluster) {
                    return Ok(Some(opt));
                }

                self.state = State::Idle;
                self.next_opt()
            }

            State::PendingLongValue(opt, value) => {
                self.state = State::Idle;
                Err(Error::UnexpectedValue { opt, value })
            }

            State::Positional(_) | State::TerminatorSeen | State::Exhausted { .. } => Ok(None),
        }
    }

    /// Read the value of the option that has just been read.
    ///
    /// The value attached to the option is taken first, either the rest of a short option cluster
    /// (`-ovalue`) or what follows `=` in a long option (`--output=value`). Otherwise the next
    /// argument is the value, whatever it looks like.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingValue`] if the command line ends before the value.
    ///
    /// # Panics
    ///
    /// Panics if the last call to the parser did not return an option.
    pub fn value(&mut self) -> Result<A, Error<A>> {
        match self.state {
            State::Option(opt) => match self.next_raw(false) {
                Some(value) => {
                    self.state = State::Idle;
                    Ok(value)
                }
                None => Err(Error::MissingValue(opt)),
            },

            State::InShortCluster(_, value) | State::PendingLongValue(_, value) => {
                self.state = State::Idle;
                Ok(value)
            }

            state => panic!("no option to read a value for: {state:?}"),
        }
    }

    /// Read the value attached to the option that has just been read, if any.
    ///
    /// Unlike [`value`][Self::value], the next argument is never taken, which suits options with
    /// an optional value.
    pub fn value_opt(&mut self) -> Option<A> {
        match self.state {
            State::InShortCluster(_, value) | State::PendingLongValue(_, value) => {
                self.state = State::Idle;
                Some(value)
            }

            _ => None,
        }
    }

    /// Read the next positional argument.
    ///
    /// Before the `--` terminator, returns `Ok(None)` when the next argument is an option, which
    /// is then kept for [`next_opt`][Self::next_opt]. The terminator itself is consumed and
    /// skipped. After it, every argument is positional.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnexpectedValue`] if the previous option had a value attached to it
    /// that has not been read. The value is dropped, so the next call carries on.
    pub fn next_positional(&mut self) -> Result<Option<A>, Error<A>> {
        match self.state {
            State::Positional(arg) => {
                self.state = State::Idle;
                Ok(Some(arg))
            }

            State::Idle | State::Option(_) => {
                let Some(arg) = self.next_raw(false) else {
                    return Ok(None);
                };

                if arg.is_terminator() {
                    self.state = State::TerminatorSeen;
                    return self.next_positional();
                }

                if arg.is_option() {
                    self.state = State::Deferred(arg);
                    return Ok(None);
                }

                self.state = State::Idle;
                Ok(Some(arg))
            }

            State::TerminatorSeen => Ok(self.next_raw(true)),

            State::InShortCluster(opt, value) | State::PendingLongValue(opt, value) => {
                self.state = State::Idle;
                Err(Error::UnexpectedValue { opt, value })
            }

            State::Deferred(_) | State::Exhausted { .. } => Ok(None),
        }
    }

    /// Read the next option or positional argument, in command line order.
    ///
    /// # Errors
    ///
    /// See [`next_opt`][Self::next_opt].
    pub fn next_arg(&mut self) -> Result<Option<Arg<A>>, Error<A>> {
        if let Some(opt) = self.next_opt()? {
            return Ok(Some(Arg::Option(opt)));
        }

        Ok(self.next_positional()?.map(Arg::Positional))
    }

    /// Stop looking for options and retrieve an iterator over the remaining arguments, borrowing
    /// the parser.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnexpectedValue`] if the previous option had a value attached to it
    /// that has not been read.
    pub fn positionals(&mut self) -> Result<Positionals<'_, A, I>, Error<A>> {
        let first = self.end_opts()?;
        Ok(Positionals::new(first, self))
    }

    /// Stop looking for options and retrieve an iterator over the remaining arguments, consuming
    /// the parser.
    ///
    /// # Errors
    ///
    /// See [`positionals`][Self::positionals].
    pub fn into_positionals(mut self) -> Result<IntoPositionals<A, I>, Error<A>> {
        let first = self.end_opts()?;
        Ok(IntoPositionals::new(first, self))
    }

    /// Evaluate if options are over, after the `--` terminator or a call to
    /// [`positionals`][Self::positionals].
    #[inline(always)]
    pub fn opts_ended(&self) -> bool {
        matches!(
            self.state,
            State::TerminatorSeen | State::Exhausted { terminated: true }
        )
    }

    /// Evaluate if the input has no more arguments. Only known once the parser tried to read past
    /// the last one.
    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted { .. })
    }

    /// Read the next argument verbatim, after options are over.
    pub(crate) fn next_verbatim(&mut self) -> Option<A> {
        if self.is_exhausted() {
            return None;
        }

        self.next_raw(true)
    }

    /// Bounds on the number of arguments left in the input.
    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }

    fn next_raw(&mut self, terminated: bool) -> Option<A> {
        let arg = self.iter.next();

        if arg.is_none() {
            self.state = State::Exhausted { terminated };
        }

        arg
    }

    fn classify(&mut self, arg: A) -> Option<Opt<A>> {
        if arg.is_terminator() {
            self.state = State::TerminatorSeen;
            return None;
        }

        if let Some((name, value)) = arg.parse_long() {
            let opt = Opt::Long(name);

            self.state = match value {
                Some(value) => State::PendingLongValue(opt, value),
                None => State::Option(opt),
            };

            return Some(opt);
        }

        if let Some(opt) = arg.parse_short_cluster().and_then(|c| self.next_short(c)) {
            return Some(opt);
        }

        self.state = State::Positional(arg);
        None
    }

    fn next_short(&mut self, cluster: A) -> Option<Opt<A>> {
        let (short, rest) = cluster.split_short()?;
        let opt = Opt::Short(short);

        self.state = match rest {
            Some(rest) => State::InShortCluster(opt, rest),
            None => State::Option(opt),
        };

        Some(opt)
    }

    fn end_opts(&mut self) -> Result<Option<A>, Error<A>> {
        let first = match self.state {
            State::InShortCluster(opt, value) | State::PendingLongValue(opt, value) => {
                self.state = State::Idle;
                return Err(Error::UnexpectedValue { opt, value });
            }

            State::Exhausted { .. } => {
                self.state = State::Exhausted { terminated: true };
                return Ok(None);
            }

            State::Positional(arg) | State::Deferred(arg) => Some(arg),

            State::Idle | State::Option(_) | State::TerminatorSeen => None,
        };

        self.state = State::TerminatorSeen;
        Ok(first)
    }
}
