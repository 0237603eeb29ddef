//! argot, a `no_std` and allocation-free command line argument tokenizer.
//!
//! The tokenizer does not know which options exist. It splits the command line into short
//! options, long options, option values and positional arguments, and lets the caller decide what
//! they mean.
//!
//! ```
//! use argot::{Arg, Opt, Options};
//!
//! let mut opts = Options::new(["-vj4", "--out", "build", "src/main.c"]);
//! let mut verbose = false;
//! let mut jobs = None;
//! let mut out = None;
//! let mut input = None;
//!
//! while let Some(arg) = opts.next_arg()? {
//!     match arg {
//!         Arg::Option(Opt::Short('v')) => verbose = true,
//!         Arg::Option(Opt::Short('j')) => jobs = opts.value()?.parse::<u32>().ok(),
//!         Arg::Option(Opt::Long("out")) => out = Some(opts.value()?),
//!         Arg::Option(_) => {}
//!         Arg::Positional(arg) => input = Some(arg),
//!     }
//! }
//!
//! assert!(verbose);
//! assert_eq!(jobs, Some(4));
//! assert_eq!(out, Some("build"));
//! assert_eq!(input, Some("src/main.c"));
//! # Ok::<(), argot::Error<&str>>(())
//! ```
#![no_std]
#![deny(missing_docs)]

pub use argot_parser as parser;

pub use parser::{
    Arg, Argument, DisplayArg, Error, ErrorKind, IntoPositionals, Opt, Options, Positionals,
};

#[cfg(test)]
mod tests {
    use googletest::prelude::{assert_that, eq};

    use crate::{Arg, Error, Opt, Options};

    #[test]
    fn it_should_read_all_args_as_positionals() {
        let argv = ["first", "second", "third"];
        let mut opts = Options::new(argv);

        assert_that!(opts.next_opt(), eq(Ok(None)));

        let positionals = opts.into_positionals();
        assert_that!(positionals.is_ok(), eq(true));

        let mut count = 0;
        for (arg, expected) in positionals.unwrap().zip(argv) {
            assert_that!(arg, eq(expected));
            count += 1;
        }

        assert_that!(count, eq(3));
    }

    #[test]
    fn it_should_read_short_flags_then_positional() {
        let mut opts = Options::new(["-ab", "c"]);

        assert_that!(opts.next_opt(), eq(Ok(Some(Opt::Short('a')))));
        assert_that!(opts.next_opt(), eq(Ok(Some(Opt::Short('b')))));
        assert_that!(opts.next_opt(), eq(Ok(None)));
        assert_that!(opts.next_positional(), eq(Ok(Some("c"))));
        assert_that!(opts.next_positional(), eq(Ok(None)));
    }

    #[test]
    fn it_should_read_inline_value_without_consuming_next() {
        let mut opts = Options::new(["--name=val", "rest"]);

        assert_that!(opts.next_opt(), eq(Ok(Some(Opt::Long("name")))));
        assert_that!(opts.value(), eq(Ok("val")));
        assert_that!(opts.next_opt(), eq(Ok(None)));
        assert_that!(opts.next_positional(), eq(Ok(Some("rest"))));
        assert_that!(opts.next_positional(), eq(Ok(None)));
    }

    #[test]
    fn it_should_read_next_token_as_value() {
        let mut opts = Options::new(["--name", "val"]);

        assert_that!(opts.next_opt(), eq(Ok(Some(Opt::Long("name")))));
        assert_that!(opts.value(), eq(Ok("val")));
        assert_that!(opts.next_arg(), eq(Ok(None)));
    }

    #[test]
    fn it_should_reject_unread_inline_value() {
        let mut opts = Options::new(["--flag=x", "extra"]);

        assert_that!(opts.next_opt(), eq(Ok(Some(Opt::Long("flag")))));
        assert_that!(
            opts.next_arg(),
            eq(Err(Error::UnexpectedValue {
                opt: Opt::Long("flag"),
                value: "x"
            }))
        );
        assert_that!(opts.next_arg(), eq(Ok(Some(Arg::Positional("extra")))));
    }

    #[test]
    fn it_should_end_options_on_terminator() {
        let mut opts = Options::new(["a", "--", "-b"]);

        assert_that!(opts.next_positional(), eq(Ok(Some("a"))));
        assert_that!(opts.next_opt(), eq(Ok(None)));
        assert_that!(opts.opts_ended(), eq(true));
        assert_that!(opts.next_positional(), eq(Ok(Some("-b"))));
        assert_that!(opts.next_positional(), eq(Ok(None)));
    }

    #[test]
    fn it_should_classify_every_argument_once() {
        let argv = ["-xvf", "archive.tar", "--", "-", "--verbose"];
        let mut opts = Options::new(argv);

        let mut args = [None; 8];
        let mut len = 0;

        while let Some(arg) = opts.next_arg().unwrap() {
            args[len] = Some(arg);
            len += 1;

            if arg == Arg::Option(Opt::Short('f')) {
                args[len] = opts.value().ok().map(Arg::Positional);
                len += 1;
            }
        }

        assert_that!(len, eq(6));
        assert_that!(
            args,
            eq([
                Some(Arg::Option(Opt::Short('x'))),
                Some(Arg::Option(Opt::Short('v'))),
                Some(Arg::Option(Opt::Short('f'))),
                Some(Arg::Positional("archive.tar")),
                Some(Arg::Positional("-")),
                Some(Arg::Positional("--verbose")),
                None,
                None,
            ])
        );
    }
}
