//! I define [`NxSource`],
//! which implements all the parsing logic common to N-Triples and N-Quads.

use lazy_static::lazy_static;
use rdfpp_api::term::{bnode_id, Term};
use rdfpp_api::triple::Triple;
use regex::Regex;
use std::io;

use super::_error::{AdjustCol, Error, ErrorKind, ResultExt};

/// Maximum length of a language tag, as recommended by RFC 5646 section 4.4.1.
const MAX_LANGUAGE_TAG_LEN: usize = 42;

lazy_static! {
    static ref LANG: Regex = Regex::new(r"(?x) ^ [a-zA-Z]+ (?: - [a-zA-Z0-9]+ )*").unwrap();
}

/// Common attributes for all triple/quad sources of the parsers in this crate.
#[derive(Clone, Debug, Default)]
pub(crate) struct Inner {
    /// Number of the current line, from 1 (0 before the first line is read)
    pub line: usize,
    /// Byte offset, in the current line, of the token being parsed
    pub col: usize,
    pub strict_bnode_labels: bool,
    pub terms: Vec<Term>,
    pub buffer: String,
}

impl Inner {
    pub fn new(strict_bnode_labels: bool) -> Self {
        Inner {
            strict_bnode_labels,
            terms: Vec::with_capacity(4),
            buffer: String::with_capacity(1024),
            ..Default::default()
        }
    }

    /// Take the terms of the statement last parsed,
    /// as a triple and an optional context.
    pub fn take_statement(&mut self) -> Option<(Triple, Option<Term>)> {
        let mut terms = self.terms.drain(..);
        let s = terms.next()?;
        let p = terms.next()?;
        let o = terms.next()?;
        Some((Triple::new(s, p, o), terms.next()))
    }
}

/// Common trait of `TripleSource`/`QuadSource` for N-type formats (N-Triples/N-Quads)
pub(crate) trait NxSource {
    /// How many terms a statement may hold at most.
    /// Statements always hold at least 3 terms.
    const MAX_TERMS: usize;

    /// Get the common inner attributes of the source
    fn inner(&self) -> &Inner;

    /// Get mutably the common inner attributes of the source
    fn inner_mut(&mut self) -> &mut Inner;

    /// Read the next line of input into `buf`, as [`BufRead::read_line`] does.
    ///
    /// [`BufRead::read_line`]: std::io::BufRead::read_line
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;

    /// Read and parse the next line of the input.
    ///
    /// Return `None` at the end of the input,
    /// `Some(true)` if a statement was parsed (its terms are then in `self.inner().terms`),
    /// `Some(false)` if the line was blank or a comment.
    fn next_line(&mut self) -> Result<Option<bool>, Error> {
        let mut line = std::mem::take(&mut self.inner_mut().buffer);
        line.clear();
        let read = self.read_line(&mut line);
        let ret = match read {
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                Err(Error::new(ErrorKind::InvalidUtf8, self.inner().line + 1, 0))
            }
            Err(err) => Err(Error::new(err, self.inner().line + 1, 0)),
            Ok(0) => Ok(None),
            Ok(_) => {
                self.inner_mut().line += 1;
                self.parse_line(&line).map(Some)
            }
        };
        self.inner_mut().buffer = line;
        ret
    }

    /// Parse a whole line, and return whether it contained a statement.
    fn parse_line(&mut self, line: &str) -> Result<bool, Error> {
        self.inner_mut().terms.clear();
        self.inner_mut().col = self.ws(line);
        if self.eol(&line[self.inner().col..]) {
            return Ok(false);
        }

        while self.inner().terms.len() < Self::MAX_TERMS {
            let txt = &line[self.inner().col..];
            let read = self.inner().terms.len();
            let consumed = match txt.as_bytes().first() {
                Some(b'<' | b'_' | b'"') => self.term(txt)?,
                Some(b' ' | b'\t') => 1,
                Some(b'.') if read >= 3 => break,
                Some(b'.') => return Err(ErrorKind::PrematureEndOfStatement).wrap_in(self),
                Some(b'#' | b'\n' | b'\r') | None if read >= 3 => {
                    return Err(ErrorKind::ExpectedEndOfStatement).wrap_in(self)
                }
                Some(b'#' | b'\n' | b'\r') | None => {
                    return Err(ErrorKind::PrematureEndOfStatement).wrap_in(self)
                }
                Some(_) => return Err(ErrorKind::InvalidInput).wrap_in(self),
            };
            self.inner_mut().col += consumed;
        }

        self.inner_mut().col += self.ws(&line[self.inner().col..]);
        if !line[self.inner().col..].starts_with('.') {
            return Err(ErrorKind::ExpectedEndOfStatement).wrap_in(self);
        }
        self.inner_mut().col += 1;

        self.inner_mut().col += self.ws(&line[self.inner().col..]);
        if !self.eol(&line[self.inner().col..]) {
            return Err(ErrorKind::ExpectedEndOfLine).wrap_in(self);
        }
        log::trace!(
            "line {}: statement of {} terms",
            self.inner().line,
            self.inner().terms.len()
        );
        Ok(true)
    }

    /// Parse one term, dispatching on its first character,
    /// and push it on the term stack.
    ///
    /// `txt` is the remaining of the line, starting at the current column.
    fn term(&mut self, txt: &str) -> Result<usize, Error> {
        let (term, len) = match txt.as_bytes()[0] {
            b'<' => {
                let (uri, len) = self.iriref(txt)?;
                (Term::UriReference { uri }, len)
            }
            b'_' => self.blank_node_label(txt)?,
            _ => self.literal(txt)?,
        };
        self.inner_mut().terms.push(term);
        Ok(len)
    }

    /// Handle the whole production https://www.w3.org/TR/n-quads/#grammar-production-IRIREF
    /// assuming the leading '<'.
    ///
    /// Only numeric escapes (`\uXXXX`, `\UXXXXXXXX`) are allowed;
    /// control characters, space and `<"{}|^\`` must be escaped.
    fn iriref(&self, txt: &str) -> Result<(String, usize), Error> {
        debug_assert!(txt.starts_with('<'));

        let mut buf = String::new();
        let mut chars = txt.char_indices().skip(1);
        while let Some((i, chr)) = chars.next() {
            match chr {
                '>' if buf.is_empty() => {
                    return Err(ErrorKind::EmptyUriReference).wrap_in(self);
                }
                '>' => return Ok((buf, i + 1)),
                '\\' => match txt.as_bytes().get(i + 1) {
                    Some(b'u' | b'U') => {
                        let (c, len) = unescape_numeric(&txt[i + 1..]).wrap_in_at(self, i)?;
                        buf.push(c);
                        // all the skipped characters are ASCII
                        chars.nth(len - 1);
                    }
                    _ => return Err(ErrorKind::InvalidEscape).wrap_in_at(self, i),
                },
                '\n' | '\r' => break,
                '\0'..=' ' | '<' | '"' | '{' | '}' | '|' | '^' | '`' => {
                    return Err(ErrorKind::InvalidIriChar(chr)).wrap_in_at(self, i);
                }
                _ => buf.push(chr),
            }
        }
        let end = txt.trim_end_matches(['\n', '\r']).len();
        Err(ErrorKind::Unterminated).wrap_in_at(self, end)
    }

    /// Handle the production https://www.w3.org/TR/n-quads/#grammar-production-BLANK_NODE_LABEL
    /// assuming the leading '_'.
    ///
    /// Unless `strict_bnode_labels` is set,
    /// the label is the whole run of non-whitespace characters,
    /// so `_:o.` is the label `o.`.
    /// In strict mode, trailing dots end the label, as the production requires.
    fn blank_node_label(&self, txt: &str) -> Result<(Term, usize), Error> {
        debug_assert!(txt.starts_with('_'));

        if !txt[1..].starts_with(':') {
            return Err(ErrorKind::ExpectedLeading("_:")).wrap_in(self);
        }
        let end = txt[2..]
            .find([' ', '\t', '\n', '\r', '\x0B', '\x0C'])
            .map(|i| i + 2)
            .unwrap_or(txt.len());
        let strict = self.inner().strict_bnode_labels;
        let label = if strict {
            txt[2..end].trim_end_matches('.')
        } else {
            &txt[2..end]
        };
        if label.is_empty() {
            return Err(ErrorKind::EmptyBnodeLabel).wrap_in_at(self, 2);
        }
        if strict && !bnode_id::is_valid_label(label) {
            return Err(ErrorKind::InvalidBnodeLabel(label.to_string())).wrap_in_at(self, 2);
        }
        Ok((Term::blank_node(label), 2 + label.len()))
    }

    /// Handle the production https://www.w3.org/TR/n-quads/#grammar-production-literal
    /// assuming the leading '"'.
    fn literal(&self, txt: &str) -> Result<(Term, usize), Error> {
        debug_assert!(txt.starts_with('"'));

        let (lexical_form, mut col) = self.string_literal_quote(txt)?;
        match txt.as_bytes().get(col) {
            Some(b'@') => {
                let tag = LANG
                    .find(&txt[col + 1..])
                    .ok_or(ErrorKind::InvalidLanguageTag)
                    .wrap_in_at(self, col + 1)?
                    .as_str();
                if tag.len() > MAX_LANGUAGE_TAG_LEN {
                    return Err(ErrorKind::OversizedLanguageTag).wrap_in_at(self, col + 1);
                }
                col += 1 + tag.len();
                let term = Term::PlainLiteral {
                    lexical_form,
                    language_tag: Some(tag.to_string()),
                };
                Ok((term, col))
            }
            Some(b'^') => {
                if !txt[col + 1..].starts_with('^') {
                    return Err(ErrorKind::InvalidDatatypeSpecifier).wrap_in_at(self, col);
                }
                col += 2;
                if !txt[col..].starts_with('<') {
                    return Err(ErrorKind::ExpectedLeading("<")).wrap_in_at(self, col);
                }
                let (datatype_uri, len) = self.iriref(&txt[col..]).adjust_col(col)?;
                col += len;
                let term = Term::TypedLiteral {
                    lexical_form,
                    datatype_uri,
                };
                Ok((term, col))
            }
            _ => {
                let term = Term::PlainLiteral {
                    lexical_form,
                    language_tag: None,
                };
                Ok((term, col))
            }
        }
    }

    /// Expect production https://www.w3.org/TR/n-quads/#grammar-production-STRING_LITERAL_QUOTE
    /// assuming the leading '"'.
    ///
    /// Return the unescaped lexical form, and the number of bytes consumed.
    fn string_literal_quote(&self, txt: &str) -> Result<(String, usize), Error> {
        debug_assert!(txt.starts_with('"'));

        let mut buf = String::new();
        let txtb = txt.as_bytes();
        let mut i = 1;
        loop {
            match txt[i..].find(['\n', '\r', '\\', '"']).map(|x| x + i) {
                Some(j) if txtb[j] == b'\\' => {
                    buf.push_str(&txt[i..j]);
                    let (chr, len) = unescape_literal(&txt[j + 1..]).wrap_in_at(self, j)?;
                    buf.push(chr);
                    i = j + 1 + len;
                }
                Some(j) if txtb[j] == b'"' => {
                    buf.push_str(&txt[i..j]);
                    return Ok((buf, j + 1));
                }
                opt => {
                    let j = opt.unwrap_or(txt.len());
                    return Err(ErrorKind::Unterminated).wrap_in_at(self, j);
                }
            }
        }
    }

    /// Consume horizontal whitespaces
    ///
    /// `txt` is (the remaining of) a line of text as read by [`BufRead::read_line`].
    ///
    /// [`BufRead::read_line`]: std::io::BufRead::read_line
    fn ws(&self, txt: &str) -> usize {
        txt.bytes()
            .take_while(|b| *b == b' ' || *b == b'\t')
            .count()
    }

    /// Indicate whether the end-of-line or a comment has been reached
    ///
    /// `txt` is (the remaining of) a line of text as read by [`BufRead::read_line`].
    ///
    /// [`BufRead::read_line`]: std::io::BufRead::read_line
    fn eol(&self, txt: &str) -> bool {
        txt.is_empty() || txt.starts_with(['\n', '\r', '#'])
    }
}

/// Decode the escape sequence of a string literal.
///
/// `txt` starts right after the backslash;
/// return the decoded character and the number of bytes of the sequence (without the backslash).
fn unescape_literal(txt: &str) -> Result<(char, usize), ErrorKind> {
    let chr = match txt.as_bytes().first() {
        Some(b'b') => '\x08',
        Some(b'f') => '\x0C',
        Some(b'n') => '\n',
        Some(b'r') => '\r',
        Some(b't') => '\t',
        Some(b'"') => '"',
        Some(b'\'') => '\'',
        Some(b'\\') => '\\',
        Some(b'u' | b'U') => return unescape_numeric(txt),
        _ => return Err(ErrorKind::InvalidEscape),
    };
    Ok((chr, 1))
}

/// Decode a `uXXXX` or `UXXXXXXXX` sequence (the backslash being already consumed).
///
/// NUL and code points that are not Unicode scalar values are rejected.
fn unescape_numeric(txt: &str) -> Result<(char, usize), ErrorKind> {
    const ERR: ErrorKind = ErrorKind::InvalidNumericEscape;
    let len = match txt.as_bytes().first() {
        Some(b'u') => 4,
        Some(b'U') => 8,
        _ => return Err(ErrorKind::InvalidEscape),
    };
    let digits = txt.as_bytes().get(1..=len).ok_or(ERR)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(ERR);
    }
    let code = u32::from_str_radix(&txt[1..=len], 16).map_err(|_| ERR)?;
    if code == 0 {
        return Err(ERR);
    }
    let chr = char::try_from(code).map_err(|_| ERR)?;
    Ok((chr, 1 + len))
}
