use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Keywords (matched case-insensitively)
    /// Opens the projection clause
    ///
    /// # Examples
    /// ```text
    /// SELECT
    /// select
    /// ```
    Select,

    /// Separates the field composite from the measurement
    ///
    /// # Examples
    /// ```text
    /// FROM
    /// From
    /// ```
    From,

    /// Introduces a branch alias
    ///
    /// # Examples
    /// ```text
    /// MAX(a) + MIN(b) AS spread
    /// ```
    As,

    /// Any other run of characters that is neither whitespace, a delimiter
    /// nor an operator character.
    ///
    /// Function names, column names, measurement fragments and aliases are all
    /// lexed as words; the parser decides what they mean from their position.
    ///
    /// # Examples
    /// ```text
    /// MEAN
    /// ensemble
    /// "cpu"."load"
    /// ```
    Word(String),

    // Operators
    /// Addition
    Plus,

    /// Subtraction
    Minus,

    /// Multiplication
    Star,

    /// Division
    Slash,

    // Delimiters
    /// Opens a column body
    LParen,

    /// Closes a column body
    RParen,

    /// Separates field branches
    Comma,

    /// End of input
    Eof,
}

impl Token {
    /// Returns true for the four arithmetic operator tokens.
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Star | Token::Slash)
    }

    /// Returns true for `SELECT`, `FROM` and `AS`.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Select | Token::From | Token::As)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Select => write!(f, "SELECT"),
            Token::From => write!(f, "FROM"),
            Token::As => write!(f, "AS"),
            Token::Word(w) => write!(f, "{}", w),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
