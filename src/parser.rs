use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("bits line has no '=' separator: {0:?}")]
    BitsMissingSeparator(String),
    #[error("result token has no '=' separator: {0:?}")]
    TokenMissingSeparator(String),
}

/// One classified input line. Only `bits`- and `RESULT`-prefixed lines carry
/// data; everything else (blank lines, noise from the benchmark harness) is
/// `Other` and has no effect on the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Value after the first `=` of a `bits`-prefixed line.
    Bits(&'a str),
    /// Right-hand sides of the `key=value` tokens of a `RESULT` line, in
    /// token order, the `RESULT` marker excluded.
    Result(Vec<&'a str>),
    Other,
}

pub fn classify(raw: &str) -> Result<Line<'_>, ParseError> {
    let line = raw.trim();
    if line.starts_with("bits") {
        let (_, value) = line
            .split_once('=')
            .ok_or_else(|| ParseError::BitsMissingSeparator(line.to_string()))?;
        return Ok(Line::Bits(value));
    }
    if line.starts_with("RESULT") {
        let mut values = Vec::new();
        // Split on single spaces: a doubled space yields an empty token,
        // which fails the `=` check below rather than being skipped.
        for token in line.split(' ').skip(1) {
            let (_, value) = token
                .split_once('=')
                .ok_or_else(|| ParseError::TokenMissingSeparator(token.to_string()))?;
            values.push(value);
        }
        return Ok(Line::Result(values));
    }
    Ok(Line::Other)
}
