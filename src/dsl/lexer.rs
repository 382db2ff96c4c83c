//! Lexer (tokenizer) for circuit files.
//!
//! Circuit files are line oriented: a token is any run of characters that
//! is not whitespace, and newlines are tokens of their own so the parser
//! can recover at the end of a bad line.

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in a circuit file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A whitespace-delimited word (keyword, id, coordinate, value)
    Word,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing circuit file input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;

        match self.chars.peek().copied() {
            None => Token {
                kind: TokenKind::Eof,
                text: String::new(),
                line: start_line,
                column: start_column,
            },
            Some('\n') => {
                self.advance();
                Token {
                    kind: TokenKind::Newline,
                    text: "\n".to_string(),
                    line: start_line,
                    column: start_column,
                }
            }
            Some(_) => Token {
                kind: TokenKind::Word,
                text: self.read_word(),
                line: start_line,
                column: start_column,
            },
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch != '\n' && ch.is_whitespace() {
                self.advance();
            } else if ch == '#' || ch == ';' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() || ch == '#' || ch == ';' {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_basic() {
        let mut lexer = Lexer::new("ELEMENT R 0 1 4.7k");

        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Word);
        assert_eq!(tok.text, "ELEMENT");
        assert_eq!(tok.column, 1);

        let tok = lexer.next_token();
        assert_eq!(tok.text, "R");
        assert_eq!(tok.column, 9);

        let words: Vec<String> = lexer.map(|t| t.text).collect();
        assert_eq!(words, vec!["0", "1", "4.7k"]);
    }

    #[test]
    fn test_lexer_lines_and_comments() {
        let input = "NODE 0 1 2 # ground\r\n\n  ; note\nNODE 1 3 4";
        let tokens: Vec<Token> = Lexer::new(input).collect();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
            ]
        );
        assert_eq!(tokens.last().unwrap().line, 4);
    }
}
