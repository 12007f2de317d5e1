use std::str::FromStr;

use crate::Error;

pub trait InputStream {
    fn line(&mut self) -> &[u8];

    /// Parses the whole next line, minus surrounding whitespace, as one value.
    fn line_value<T>(&mut self) -> Result<T, Error>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        parse_trimmed(self.line())
    }
}

#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

fn trim(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| !is_whitespace(c)).unwrap_or(s.len());
    let end = s.iter().rposition(|&c| !is_whitespace(c)).map_or(start, |idx| idx + 1);
    &s[start..end]
}

pub fn parse_trimmed<T>(s: &[u8]) -> Result<T, Error>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let s = trim(s);
    if s.is_empty() {
        return Err(Error::MissingInput);
    }
    let token = String::from_utf8_lossy(s);
    token.parse::<T>().map_err(|source| Error::Parse {
        token: token.into_owned(),
        source,
    })
}

fn trim_newline(s: &[u8]) -> &[u8] {
    let mut s = s;
    while matches!(s.last(), Some(b'\n' | b'\r' | 0)) {
        s = &s[..s.len() - 1];
    }
    s
}

impl InputStream for &[u8] {
    fn line(&mut self) -> &[u8] {
        let idx = self
            .iter()
            .position(|&c| c == b'\n')
            .map(|idx| idx + 1)
            .unwrap_or(self.len());
        let (line, buf_new) = self.split_at(idx);
        *self = buf_new;
        trim_newline(line)
    }
}
