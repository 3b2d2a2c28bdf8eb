use std::fmt;

/// A recognition failure reported by a scan call.
///
/// Every variant is recoverable: the cursor has already advanced far enough
/// that the next scan makes progress.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("illegal option -- {0}")]
    IllegalOption(char),

    #[error("option requires an argument -- {0}")]
    MissingArgument(char),

    /// Holds everything after the leading `--`, including any `=value`.
    #[error("unrecognized option '--{0}'")]
    UnrecognizedOption(String),

    #[error("option requires argument -- {0}")]
    MissingLongArgument(String),
}

impl ScanError {
    /// The offending option text: the letter for short options, the name
    /// (or raw token remainder) for long ones.
    pub fn option(&self) -> String {
        match self {
            ScanError::IllegalOption(c) | ScanError::MissingArgument(c) => c.to_string(),
            ScanError::UnrecognizedOption(s) | ScanError::MissingLongArgument(s) => s.clone(),
        }
    }

    pub fn is_missing_argument(&self) -> bool {
        matches!(
            self,
            ScanError::MissingArgument(_) | ScanError::MissingLongArgument(_)
        )
    }

    /// Attach a program name, producing the one-line diagnostic text.
    pub fn diagnostic<'e>(&'e self, program: &'e str) -> Diagnostic<'e> {
        Diagnostic {
            program,
            error: self,
        }
    }
}

/// `"<program>: <message>"`, the line written to the diagnostics channel.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'e> {
    pub program: &'e str,
    pub error: &'e ScanError,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.program, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_option_message() {
        let e = ScanError::IllegalOption('z');
        assert_eq!(e.diagnostic("prog").to_string(), "prog: illegal option -- z");
    }

    #[test]
    fn missing_argument_message() {
        let e = ScanError::MissingArgument('o');
        assert_eq!(
            e.diagnostic("prog").to_string(),
            "prog: option requires an argument -- o"
        );
    }

    #[test]
    fn unrecognized_long_message_keeps_suffix() {
        let e = ScanError::UnrecognizedOption("bogus=1".to_string());
        assert_eq!(
            e.diagnostic("prog").to_string(),
            "prog: unrecognized option '--bogus=1'"
        );
    }

    #[test]
    fn missing_long_argument_message() {
        let e = ScanError::MissingLongArgument("name".to_string());
        assert_eq!(
            e.diagnostic("prog").to_string(),
            "prog: option requires argument -- name"
        );
    }

    #[test]
    fn classification() {
        assert!(ScanError::MissingArgument('o').is_missing_argument());
        assert!(ScanError::MissingLongArgument("x".into()).is_missing_argument());
        assert!(!ScanError::IllegalOption('o').is_missing_argument());
        assert_eq!(ScanError::IllegalOption('x').option(), "x");
        assert_eq!(ScanError::UnrecognizedOption("bogus".into()).option(), "bogus");
    }
}
