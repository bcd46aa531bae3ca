use memchr::memmem;

/// Finds tagged template literals (``gql`...` ``) in program source.
///
/// Interpolation holes (`${...}`) are deleted from each body rather than
/// replaced with a placeholder. This only produces a valid document when
/// holes are used for grammatically optional text (typically fragment
/// text appended after the operation); a hole standing in for a required
/// token leaves a body that later fails to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralLocator {
    tag: String,
}

impl LiteralLocator {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    /// Lazily yields the body of every literal tagged with this locator's
    /// tag, in source order, with interpolation holes removed.
    pub fn literals<'a>(&'a self, src: &'a str) -> TaggedLiterals<'a> {
        TaggedLiterals {
            done: false,
            matches: memmem::find_iter(src.as_bytes(), self.tag.as_bytes()),
            resume_at: 0,
            src,
            tag_len: self.tag.len(),
        }
    }
}

/// Iterator returned by [`LiteralLocator::literals`].
pub struct TaggedLiterals<'a> {
    done: bool,
    matches: memmem::FindIter<'a, 'a>,
    resume_at: usize,
    src: &'a str,
    tag_len: usize,
}

impl Iterator for TaggedLiterals<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let bytes = self.src.as_bytes();
        loop {
            let Some(tag_start) = self.matches.next() else {
                self.done = true;
                return None;
            };

            // Inside a literal we already consumed
            if tag_start < self.resume_at {
                continue;
            }

            // `xgql` is not `gql`
            if tag_start > 0 && is_ident_byte(bytes[tag_start - 1]) {
                continue;
            }

            let mut cursor = tag_start + self.tag_len;
            while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
                cursor += 1;
            }
            if bytes.get(cursor) != Some(&b'`') {
                continue;
            }

            match read_template_body(self.src, cursor + 1) {
                Some((body, end)) => {
                    self.resume_at = end;
                    return Some(body);
                },

                None => {
                    log::warn!(
                        "Unterminated `{}` template literal at byte offset \
                        {tag_start}; ignoring the rest of the source.",
                        &self.src[tag_start..tag_start + self.tag_len],
                    );
                    self.done = true;
                    return None;
                },
            }
        }
    }
}

impl std::iter::FusedIterator for TaggedLiterals<'_> {}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Reads a template body starting just after its opening backtick.
///
/// Returns the body text (holes deleted, `` \` ``, `\$` and `\\`
/// unescaped) and the byte offset just past the closing backtick.
///
/// Every delimiter matched here is ASCII, so each slice boundary falls on a
/// char boundary.
fn read_template_body(src: &str, start: usize) -> Option<(String, usize)> {
    let bytes = src.as_bytes();
    let mut body = String::new();
    let mut segment_start = start;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => match bytes.get(i + 1) {
                Some(b'`' | b'$' | b'\\') => {
                    body.push_str(&src[segment_start..i]);
                    segment_start = i + 1;
                    i += 2;
                },
                Some(_) => i += 1,
                None => return None,
            },

            b'`' => {
                body.push_str(&src[segment_start..i]);
                return Some((body, i + 1));
            },

            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                body.push_str(&src[segment_start..i]);
                i = skip_interpolation(bytes, i + 2)?;
                segment_start = i;
            },

            _ => i += 1,
        }
    }
    None
}

/// Skips an interpolation whose `${` ends just before `start`; returns the
/// offset just past its closing `}`.
fn skip_interpolation(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                depth += 1;
                i += 1;
            },

            b'}' => {
                if depth == 0 {
                    return Some(i + 1);
                }
                depth -= 1;
                i += 1;
            },

            b'`' => i = skip_template(bytes, i + 1)?,

            quote @ (b'\'' | b'"') => i = skip_string(bytes, i + 1, quote)?,

            _ => i += 1,
        }
    }
    None
}

/// Skips a template literal nested inside an interpolation.
fn skip_template(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return Some(i + 1),
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                i = skip_interpolation(bytes, i + 2)?;
            },
            _ => i += 1,
        }
    }
    None
}

fn skip_string(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
