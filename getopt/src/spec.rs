use std::cell::Cell;

// ============================================================================
// Short options
// ============================================================================

/// Whether a short option letter takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgReq {
    None,
    Required,
}

/// A parsed short-option specification such as `"ab:c"`.
///
/// A letter followed by `:` requires a value. A leading `:` selects quiet
/// mode: no diagnostics are written for scans using this spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortSpec {
    letters: String,
    quiet: bool,
}

impl ShortSpec {
    pub fn new(spec: &str) -> Self {
        match spec.strip_prefix(':') {
            Some(rest) => ShortSpec {
                letters: rest.to_string(),
                quiet: true,
            },
            None => ShortSpec {
                letters: spec.to_string(),
                quiet: false,
            },
        }
    }

    /// Look up an option letter. `:` is never a valid letter.
    pub fn lookup(&self, c: char) -> Option<ArgReq> {
        if c == ':' {
            return None;
        }
        let pos = self.letters.find(c)?;
        if self.letters[pos + c.len_utf8()..].starts_with(':') {
            Some(ArgReq::Required)
        } else {
            Some(ArgReq::None)
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }
}

// ============================================================================
// Long options
// ============================================================================

/// Argument requirement of a long option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasArg {
    No,
    Required,
    Optional,
}

impl HasArg {
    /// `no_argument`, `required_argument`, `optional_argument` numbering.
    pub fn as_raw(self) -> i32 {
        match self {
            HasArg::No => 0,
            HasArg::Required => 1,
            HasArg::Optional => 2,
        }
    }
}

impl TryFrom<i32> for HasArg {
    type Error = i32;

    fn try_from(v: i32) -> std::result::Result<Self, i32> {
        match v {
            0 => Ok(HasArg::No),
            1 => Ok(HasArg::Required),
            2 => Ok(HasArg::Optional),
            other => Err(other),
        }
    }
}

/// One entry of a long-option table.
///
/// When `flag` is set, a match stores `val` into the cell instead of
/// returning it.
#[derive(Debug, Clone, Copy)]
pub struct LongOpt<'a> {
    pub name: &'a str,
    pub has_arg: HasArg,
    pub flag: Option<&'a Cell<i32>>,
    pub val: i32,
}

impl<'a> LongOpt<'a> {
    pub fn new(name: &'a str, has_arg: HasArg, val: i32) -> Self {
        LongOpt {
            name,
            has_arg,
            flag: None,
            val,
        }
    }

    pub fn flag(mut self, cell: &'a Cell<i32>) -> Self {
        self.flag = Some(cell);
        self
    }
}

/// Find the entry whose name equals `name` exactly. No abbreviations.
pub(crate) fn find_long<'t, 'a>(
    table: &'t [LongOpt<'a>],
    name: &str,
) -> Option<(usize, &'t LongOpt<'a>)> {
    table.iter().enumerate().find(|(_, o)| o.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_plain_and_required() {
        let spec = ShortSpec::new("ab:c");
        assert_eq!(spec.lookup('a'), Some(ArgReq::None));
        assert_eq!(spec.lookup('b'), Some(ArgReq::Required));
        assert_eq!(spec.lookup('c'), Some(ArgReq::None));
        assert_eq!(spec.lookup('d'), None);
    }

    #[test]
    fn colon_is_never_an_option() {
        let spec = ShortSpec::new("a:");
        assert_eq!(spec.lookup(':'), None);
    }

    #[test]
    fn leading_colon_is_quiet() {
        let spec = ShortSpec::new(":ab:");
        assert!(spec.is_quiet());
        assert_eq!(spec.as_str(), "ab:");
        assert_eq!(spec.lookup('b'), Some(ArgReq::Required));
        assert!(!ShortSpec::new("ab").is_quiet());
    }

    #[test]
    fn double_colon_still_required() {
        let spec = ShortSpec::new("o::x");
        assert_eq!(spec.lookup('o'), Some(ArgReq::Required));
        assert_eq!(spec.lookup('x'), Some(ArgReq::None));
    }

    #[test]
    fn non_ascii_letters() {
        let spec = ShortSpec::new("é:ß");
        assert_eq!(spec.lookup('é'), Some(ArgReq::Required));
        assert_eq!(spec.lookup('ß'), Some(ArgReq::None));
    }

    #[test]
    fn has_arg_raw_numbering() {
        assert_eq!(HasArg::try_from(0), Ok(HasArg::No));
        assert_eq!(HasArg::try_from(1), Ok(HasArg::Required));
        assert_eq!(HasArg::try_from(2), Ok(HasArg::Optional));
        assert_eq!(HasArg::try_from(7), Err(7));
        assert_eq!(HasArg::Optional.as_raw(), 2);
    }

    #[test]
    fn find_long_is_exact() {
        let table = [
            LongOpt::new("verbose", HasArg::No, 'v' as i32),
            LongOpt::new("verbosity", HasArg::Required, 1),
        ];
        assert_eq!(find_long(&table, "verbose").map(|(i, _)| i), Some(0));
        assert_eq!(find_long(&table, "verbosity").map(|(i, _)| i), Some(1));
        assert!(find_long(&table, "verb").is_none());
        assert!(find_long(&table, "verbosely").is_none());
    }
}
