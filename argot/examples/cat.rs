//! Concatenate files, reading the command line as platform strings.
//!
//! Run with `cargo run --example cat --features std -- -n a.txt b.txt`.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::{fs, process};

use argot::{Arg, Argument, Options};
use heapless::Vec;

const FILE_COUNT_MAX: usize = 8;

fn main() {
    let argv: std::vec::Vec<OsString> = std::env::args_os().skip(1).collect();
    let mut opts = Options::new(argv.iter().map(OsString::as_os_str));

    let mut number = false;
    let mut separator = OsStr::new("\n");
    let mut files: Vec<&OsStr, FILE_COUNT_MAX> = Vec::new();

    loop {
        let arg = match opts.next_arg() {
            Ok(Some(arg)) => arg,
            Ok(None) => break,
            Err(err) => fail(err),
        };

        match arg {
            Arg::Option(opt) => match (opt.short(), opt.long().and_then(OsStr::to_str)) {
                (Some('n'), _) | (_, Some("number")) => number = true,

                (Some('s'), _) | (_, Some("separator")) => {
                    separator = opts.value().unwrap_or_else(|err| fail(err));
                }

                _ => fail(format_args!("unknown option: {opt}")),
            },

            Arg::Positional(file) => {
                if files.push(file).is_err() {
                    fail(format_args!("too many files (max {FILE_COUNT_MAX})"));
                }
            }
        }
    }

    // A lone `-` stands for the standard input.
    if files.is_empty() {
        files.push(OsStr::new("-")).ok();
    }

    let mut out = io::stdout().lock();
    let mut line_no = 0;

    for file in &files {
        let content = if *file == "-" {
            io::read_to_string(io::stdin())
        } else {
            fs::read_to_string(file)
        };

        let content = content
            .unwrap_or_else(|err| fail(format_args!("{}: {err}", file.display_arg())));

        for line in content.lines() {
            let written = if number {
                line_no += 1;
                write!(out, "{line_no:>6}  {line}")
            } else {
                out.write_all(line.as_bytes())
            };

            written
                .and_then(|()| out.write_all(separator.as_bytes()))
                .unwrap_or_else(|err| fail(err));
        }
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("cat: {msg}");
    process::exit(2);
}
