use std::fmt;
use std::io::{self, Write};

use crate::error::ScanError;

// ============================================================================
// State
// ============================================================================

/// Where the cursor stands relative to the token at `optind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The token at `optind` has not been looked at yet.
    Fresh,
    /// Mid-way through a cluster like `-abc`. `offset` is the byte offset of
    /// the next unconsumed option letter and is always inside the token.
    Cluster { offset: usize },
    /// End of options was reported. Stays here until `reset()`.
    Done,
}

// ============================================================================
// Diagnostics channel
// ============================================================================

enum Sink {
    Stderr,
    Writer(Box<dyn Write + Send>),
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stderr => f.write_str("Stderr"),
            Sink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Parse position for one scanning session over one argument vector.
///
/// The cursor is owned by the caller; independent sessions use independent
/// cursors. To scan a new vector with the same cursor, call [`Cursor::reset`].
#[derive(Debug)]
pub struct Cursor {
    pub(crate) optind: usize,
    pub(crate) state: State,
    pub(crate) optarg: Option<String>,
    pub(crate) optopt: char,
    pub(crate) longindex: Option<usize>,
    start: usize,
    opterr: bool,
    program: Option<String>,
    sink: Sink,
}

impl Cursor {
    /// A cursor positioned after the program name at index 0.
    pub fn new() -> Self {
        Cursor::starting_at(1)
    }

    /// A cursor whose first token is `args[index]`.
    pub fn starting_at(index: usize) -> Self {
        Cursor {
            optind: index,
            state: State::Fresh,
            optarg: None,
            optopt: '?',
            longindex: None,
            start: index,
            opterr: true,
            program: None,
            sink: Sink::Stderr,
        }
    }

    /// Disable diagnostics. Errors are still returned.
    pub fn quiet(mut self) -> Self {
        self.opterr = false;
        self
    }

    /// Name used as the diagnostic prefix instead of `args[0]`.
    pub fn program_name(mut self, name: &str) -> Self {
        self.program = Some(name.to_string());
        self
    }

    /// Send diagnostics to `w` instead of standard error.
    pub fn diagnostics(mut self, w: Box<dyn Write + Send>) -> Self {
        self.sink = Sink::Writer(w);
        self
    }

    pub fn set_opterr(&mut self, enabled: bool) {
        self.opterr = enabled;
    }

    /// Rewind to the starting index for a new argument vector. Configuration
    /// (diagnostics, program name) is kept.
    pub fn reset(&mut self) {
        log::trace!("cursor reset to {}", self.start);
        self.optind = self.start;
        self.state = State::Fresh;
        self.optarg = None;
        self.optopt = '?';
        self.longindex = None;
    }

    /// Index of the next unconsumed token.
    pub fn optind(&self) -> usize {
        self.optind
    }

    /// Value attached to the most recently recognized option.
    pub fn optarg(&self) -> Option<&str> {
        self.optarg.as_deref()
    }

    /// The last short option character examined; `'?'` before any.
    pub fn optopt(&self) -> char {
        self.optopt
    }

    /// Table position of the last matched long option.
    pub fn long_index(&self) -> Option<usize> {
        self.longindex
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Tokens from `optind` on: the positional operands once scanning ended.
    pub fn remaining<'a, S>(&self, args: &'a [S]) -> &'a [S] {
        &args[self.optind.min(args.len())..]
    }

    pub(crate) fn finish(&mut self) {
        log::trace!("end of options at {}", self.optind);
        self.state = State::Done;
    }

    /// Classify the token at `optind` when no cluster is in progress.
    ///
    /// Returns the token if it starts an option, otherwise moves to `Done`
    /// (consuming a `--` terminator on the way).
    pub(crate) fn fresh_token<'a, S: AsRef<str>>(&mut self, args: &'a [S]) -> Option<&'a str> {
        let Some(token) = arg_at(args, self.optind) else {
            self.finish();
            return None;
        };
        if token == "--" {
            self.optind += 1;
            self.finish();
            return None;
        }
        if !token.starts_with('-') || token == "-" {
            self.finish();
            return None;
        }
        Some(token)
    }

    /// Write the diagnostic line for `err` unless diagnostics are off.
    /// Write failures are ignored.
    pub(crate) fn report<S: AsRef<str>>(&mut self, args: &[S], quiet: bool, err: &ScanError) {
        log::debug!("scan error at {}: {}", self.optind, err);
        if !self.opterr || quiet {
            return;
        }
        let program = match &self.program {
            Some(p) => p.as_str(),
            None => arg_at(args, 0).unwrap_or(""),
        };
        let line = err.diagnostic(program);
        let _ = match &mut self.sink {
            Sink::Stderr => writeln!(io::stderr().lock(), "{}", line),
            Sink::Writer(w) => writeln!(w, "{}", line),
        };
    }
}

pub(crate) fn arg_at<S: AsRef<str>>(args: &[S], index: usize) -> Option<&str> {
    args.get(index).map(AsRef::as_ref)
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
