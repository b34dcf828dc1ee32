use crate::ast::Token;

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A token together with where it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

pub struct Lexer<'a> {
    source: &'a str,
    input: Vec<(usize, char)>,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            input: source.char_indices().collect(),
            position: 0,
        }
    }

    /// The text being tokenized.
    pub fn source(&self) -> &'a str {
        self.source
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).map(|&(_, ch)| ch)
    }

    /// Byte offset of the current character, or the source length at EOF.
    fn offset(&self) -> usize {
        self.input
            .get(self.position)
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_word_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Reads the next token along with its span. Never fails: any character
    /// that is not whitespace, a delimiter or an operator belongs to a word.
    pub fn next_spanned(&mut self) -> Spanned {
        self.skip_whitespace();
        let start = self.offset();

        let token = match self.current_char() {
            None => Token::Eof,
            Some('(') => self.single(Token::LParen),
            Some(')') => self.single(Token::RParen),
            Some(',') => self.single(Token::Comma),
            Some('+') => self.single(Token::Plus),
            Some('-') => self.single(Token::Minus),
            Some('*') => self.single(Token::Star),
            Some('/') => self.single(Token::Slash),
            Some(_) => {
                let word = self.read_word();

                match word.to_ascii_uppercase().as_str() {
                    "SELECT" => Token::Select,
                    "FROM" => Token::From,
                    "AS" => Token::As,
                    _ => Token::Word(word),
                }
            }
        };

        Spanned {
            token,
            span: Span {
                start,
                end: self.offset(),
            },
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.next_spanned().token
    }

    /// Consumes the lexer, returning every token up to and including `Eof`.
    pub fn tokenize(mut self) -> Vec<Spanned> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_spanned();
            let done = spanned.token == Token::Eof;
            tokens.push(spanned);
            if done {
                return tokens;
            }
        }
    }
}

fn is_word_char(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, '(' | ')' | ',' | '+' | '-' | '*' | '/')
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("SELECT from As selected");
    assert_eq!(lexer.next_token(), Token::Select);
    assert_eq!(lexer.next_token(), Token::From);
    assert_eq!(lexer.next_token(), Token::As);
    assert_eq!(lexer.next_token(), Token::Word("selected".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_unit() {
    let mut lexer = Lexer::new("MAX(entropy) + MIN(enchiladas)");
    assert_eq!(lexer.next_token(), Token::Word("MAX".to_string()));
    assert_eq!(lexer.next_token(), Token::LParen);
    assert_eq!(lexer.next_token(), Token::Word("entropy".to_string()));
    assert_eq!(lexer.next_token(), Token::RParen);
    assert_eq!(lexer.next_token(), Token::Plus);
    assert_eq!(lexer.next_token(), Token::Word("MIN".to_string()));
    assert_eq!(lexer.next_token(), Token::LParen);
    assert_eq!(lexer.next_token(), Token::Word("enchiladas".to_string()));
    assert_eq!(lexer.next_token(), Token::RParen);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_spans_are_byte_offsets() {
    let mut lexer = Lexer::new("  ünit(x)");
    let word = lexer.next_spanned();
    assert_eq!(word.token, Token::Word("ünit".to_string()));
    assert_eq!(word.span, Span { start: 2, end: 7 });
    assert_eq!(lexer.next_spanned().span, Span { start: 7, end: 8 });
}
