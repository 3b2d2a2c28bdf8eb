use crate::cursor::{arg_at, Cursor, State};
use crate::error::ScanError;
use crate::spec::{ArgReq, ShortSpec};
use crate::{Opt, ScanResult};

impl Cursor {
    /// Scan the next short option.
    ///
    /// Returns `Ok(None)` at end of options: past the end of `args`, at the
    /// first operand or lone `-`, or after consuming a `--` terminator.
    /// Clustered letters (`-abc`) come back one per call; a letter that takes
    /// a value ends the cluster, using the rest of the token (`-oVALUE`) or
    /// the following token (`-o VALUE`).
    pub fn scan_short<'a, S: AsRef<str>>(
        &mut self,
        args: &'a [S],
        spec: &ShortSpec,
    ) -> ScanResult<'a> {
        let offset = match self.state {
            State::Done => return Ok(None),
            State::Cluster { offset } => offset,
            State::Fresh => {
                if self.fresh_token(args).is_none() {
                    return Ok(None);
                }
                1
            }
        };

        let Some(token) = arg_at(args, self.optind) else {
            self.finish();
            return Ok(None);
        };
        let Some(c) = token.get(offset..).and_then(|rest| rest.chars().next()) else {
            // The caller swapped vectors without a reset.
            self.finish();
            return Ok(None);
        };
        let next = offset + c.len_utf8();
        let at_end = next >= token.len();
        self.optopt = c;

        match spec.lookup(c) {
            None => {
                self.optarg = None;
                self.step(next, at_end);
                let err = ScanError::IllegalOption(c);
                self.report(args, spec.is_quiet(), &err);
                Err(err)
            }
            Some(ArgReq::None) => {
                self.optarg = None;
                self.step(next, at_end);
                log::trace!("short option -{}", c);
                Ok(Some(Opt::Short { opt: c, arg: None }))
            }
            Some(ArgReq::Required) => {
                self.state = State::Fresh;
                self.optind += 1;
                let value = if !at_end {
                    &token[next..]
                } else if let Some(v) = arg_at(args, self.optind) {
                    self.optind += 1;
                    v
                } else {
                    self.optarg = None;
                    let err = ScanError::MissingArgument(c);
                    self.report(args, spec.is_quiet(), &err);
                    return Err(err);
                };
                log::trace!("short option -{} with value {:?}", c, value);
                self.optarg = Some(value.to_string());
                Ok(Some(Opt::Short {
                    opt: c,
                    arg: Some(value),
                }))
            }
        }
    }

    /// Move past one letter of the current cluster.
    fn step(&mut self, next: usize, at_end: bool) {
        if at_end {
            self.optind += 1;
            self.state = State::Fresh;
        } else {
            self.state = State::Cluster { offset: next };
        }
    }
}
