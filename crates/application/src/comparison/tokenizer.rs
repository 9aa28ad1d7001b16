//! Splits a raw line into whitespace runs and tokens.

/// ASCII whitespace as classified by C's `isspace`.
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// A maximal run of non-whitespace bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token bytes
    pub text: &'a [u8],
    /// 1-based ordinal within the line
    pub index: usize,
    /// Whitespace following the token, up to the next token or line end
    pub trailing: &'a [u8],
}

/// A line decomposed into leading whitespace and tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine<'a> {
    /// Whitespace before the first token
    pub leading: &'a [u8],
    /// Tokens in order, each with its trailing whitespace
    pub tokens: Vec<Token<'a>>,
}

impl<'a> TokenizedLine<'a> {
    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the line holds only whitespace.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at a 0-based slot.
    pub fn get(&self, slot: usize) -> Option<&Token<'a>> {
        self.tokens.get(slot)
    }
}

/// Split a line into whitespace runs and tokens, preserving every byte.
pub fn tokenize(line: &[u8]) -> TokenizedLine<'_> {
    let mut pos = skip_while(line, 0, is_space);
    let leading = &line[..pos];
    let mut tokens = Vec::new();

    while pos < line.len() {
        let start = pos;
        let end = skip_while(line, start, |b| !is_space(b));
        pos = skip_while(line, end, is_space);
        tokens.push(Token {
            text: &line[start..end],
            index: tokens.len() + 1,
            trailing: &line[end..pos],
        });
    }

    TokenizedLine { leading, tokens }
}

fn skip_while(line: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    line[from..]
        .iter()
        .position(|&b| !pred(b))
        .map_or(line.len(), |offset| from + offset)
}
