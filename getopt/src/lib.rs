//! POSIX-style command-line option scanning.
//!
//! Two entry points share one caller-owned [`Cursor`]:
//! - [`Cursor::scan_short`] for `-a`, clusters like `-abc`, and values given
//!   as `-oVALUE` or `-o VALUE`
//! - [`Cursor::scan_long`] which additionally accepts `--name` and
//!   `--name=value` from a [`LongOpt`] table
//!
//! Each call yields one option, end of options (`Ok(None)`), or a
//! recoverable [`ScanError`]. [`Getopt`] wraps the same loop as an iterator.

mod cursor;
mod error;
mod long;
mod short;
mod spec;

use std::iter::FusedIterator;

pub use cursor::{Cursor, State};
pub use error::{Diagnostic, ScanError};
pub use spec::{ArgReq, HasArg, LongOpt, ShortSpec};

/// Outcome of one scan call. `Ok(None)` means end of options.
pub type ScanResult<'a> = std::result::Result<Option<Opt<'a>>, ScanError>;

// ============================================================================
// Opt: one recognized option
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opt<'a> {
    Short {
        opt: char,
        arg: Option<&'a str>,
    },
    Long {
        index: usize,
        val: i32,
        arg: Option<&'a str>,
    },
    /// A long option whose table entry has a flag cell; the cell was written.
    Flag { index: usize },
}

impl<'a> Opt<'a> {
    /// The classic getopt return code: the letter, the entry's `val`, or 0
    /// after a flag write.
    pub fn code(&self) -> i32 {
        match self {
            Opt::Short { opt, .. } => *opt as i32,
            Opt::Long { val, .. } => *val,
            Opt::Flag { .. } => 0,
        }
    }

    pub fn arg(&self) -> Option<&'a str> {
        match self {
            Opt::Short { arg, .. } | Opt::Long { arg, .. } => *arg,
            Opt::Flag { .. } => None,
        }
    }

    pub fn long_index(&self) -> Option<usize> {
        match self {
            Opt::Short { .. } => None,
            Opt::Long { index, .. } | Opt::Flag { index } => Some(*index),
        }
    }
}

// ============================================================================
// Getopt: iterator over one argument vector
// ============================================================================

/// Scans `args` until end of options, yielding each option or error.
///
/// ```
/// use getopt::{Getopt, Opt};
///
/// let args = ["prog", "-v", "-o", "out.txt", "input"];
/// let mut opts = Getopt::new(&args, "vo:");
/// let mut output = None;
/// for opt in &mut opts {
///     if let Ok(Opt::Short { opt: 'o', arg }) = opt {
///         output = arg;
///     }
/// }
/// assert_eq!(output, Some("out.txt"));
/// assert_eq!(opts.remaining(), &["input"]);
/// ```
#[derive(Debug)]
pub struct Getopt<'a, S> {
    args: &'a [S],
    spec: ShortSpec,
    longopts: Option<&'a [LongOpt<'a>]>,
    cursor: Cursor,
}

impl<'a, S: AsRef<str>> Getopt<'a, S> {
    pub fn new(args: &'a [S], spec: &str) -> Self {
        Getopt {
            args,
            spec: ShortSpec::new(spec),
            longopts: None,
            cursor: Cursor::new(),
        }
    }

    /// Also accept `--name` forms from `table`.
    pub fn long(mut self, table: &'a [LongOpt<'a>]) -> Self {
        self.longopts = Some(table);
        self
    }

    /// Use a preconfigured cursor (start index, diagnostics).
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The operands following the options that have been scanned so far.
    pub fn remaining(&self) -> &'a [S] {
        self.cursor.remaining(self.args)
    }

    pub fn into_cursor(self) -> Cursor {
        self.cursor
    }
}

impl<'a, S: AsRef<str>> Iterator for Getopt<'a, S> {
    type Item = std::result::Result<Opt<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let r = match self.longopts {
            Some(table) => self.cursor.scan_long(self.args, &self.spec, table),
            None => self.cursor.scan_short(self.args, &self.spec),
        };
        r.transpose()
    }
}

// End of options is sticky in the cursor.
impl<S: AsRef<str>> FusedIterator for Getopt<'_, S> {}
