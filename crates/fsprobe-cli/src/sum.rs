//! Reading two integers from one input line and echoing their sum.

use std::io::{BufRead, Write};

use fsprobe_config::log_input_debug;

use crate::error::{ProbeError, Result};

/// The two integers taken from standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

impl Operands {
    pub fn sum(self) -> Result<i64> {
        self.a
            .checked_add(self.b)
            .ok_or(ProbeError::Overflow {
                a: self.a,
                b: self.b,
            })
    }
}

/// Read exactly one line and parse it as two whitespace-separated integers.
///
/// Anything after the first line is left unread.
pub fn read_operands(mut input: impl BufRead) -> Result<Operands> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(ProbeError::Stdin)?;
    if read == 0 {
        return Err(ProbeError::MissingInput);
    }
    log_input_debug!("Read input line", len = read);
    parse_operands(&line)
}

pub fn parse_operands(line: &str) -> Result<Operands> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [a, b] = tokens.as_slice() else {
        return Err(ProbeError::TokenCount {
            found: tokens.len(),
        });
    };
    Ok(Operands {
        a: parse_integer(a)?,
        b: parse_integer(b)?,
    })
}

fn parse_integer(token: &str) -> Result<i64> {
    token.parse().map_err(|source| ProbeError::InvalidInteger {
        token: token.to_string(),
        source,
    })
}

/// Print `sum` on two lines.
pub fn write_sum_twice(mut out: impl Write, sum: i64) -> std::io::Result<()> {
    writeln!(out, "{sum}")?;
    writeln!(out, "{sum}")?;
    out.flush()
}
