use crate::cursor::{arg_at, Cursor, State};
use crate::error::ScanError;
use crate::spec::{find_long, HasArg, LongOpt, ShortSpec};
use crate::{Opt, ScanResult};

impl Cursor {
    /// Scan the next option where `--name[=value]` and short forms mix.
    ///
    /// A fresh token shaped like `--name` is looked up in `longopts` by exact
    /// name; abbreviations are not accepted. Anything else goes through
    /// [`Cursor::scan_short`] with the same cursor. The matched table position
    /// is available from [`Cursor::long_index`] afterwards, including when the
    /// match failed for lack of a value.
    pub fn scan_long<'a, S: AsRef<str>>(
        &mut self,
        args: &'a [S],
        spec: &ShortSpec,
        longopts: &[LongOpt<'_>],
    ) -> ScanResult<'a> {
        if self.state == State::Fresh {
            let Some(token) = self.fresh_token(args) else {
                return Ok(None);
            };
            if let Some(body) = token.strip_prefix("--").filter(|b| !b.is_empty()) {
                return self.long_token(args, spec, longopts, body);
            }
        }
        self.scan_short(args, spec)
    }

    fn long_token<'a, S: AsRef<str>>(
        &mut self,
        args: &'a [S],
        spec: &ShortSpec,
        longopts: &[LongOpt<'_>],
        body: &'a str,
    ) -> ScanResult<'a> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let Some((index, entry)) = find_long(longopts, name) else {
            self.optind += 1;
            self.optarg = None;
            let err = ScanError::UnrecognizedOption(body.to_string());
            self.report(args, spec.is_quiet(), &err);
            return Err(err);
        };
        self.longindex = Some(index);

        // An inline value on a no-argument entry is dropped.
        let arg = match entry.has_arg {
            HasArg::No => None,
            HasArg::Optional => inline,
            HasArg::Required => match inline {
                Some(v) => Some(v),
                None => match arg_at(args, self.optind + 1) {
                    Some(v) => {
                        self.optind += 1;
                        Some(v)
                    }
                    None => {
                        self.optind += 1;
                        self.optarg = None;
                        let err = ScanError::MissingLongArgument(entry.name.to_string());
                        self.report(args, spec.is_quiet(), &err);
                        return Err(err);
                    }
                },
            },
        };
        self.optind += 1;
        self.optarg = arg.map(str::to_string);

        if let Some(cell) = entry.flag {
            log::trace!("long option --{} sets flag to {}", entry.name, entry.val);
            cell.set(entry.val);
            return Ok(Some(Opt::Flag { index }));
        }
        log::trace!("long option --{} value {:?}", entry.name, arg);
        Ok(Some(Opt::Long {
            index,
            val: entry.val,
            arg,
        }))
    }
}
