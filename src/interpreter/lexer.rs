use logos::{Lexer, Logos, Skip};
use tracing::{trace, warn};

use crate::{ast::LiteralValue, error::LexError};

/// Represents the category of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the language; the raw text
/// and literal value live on [`Token`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// Double-quoted string literal. Strings may span lines and have no
    /// escape sequences.
    #[token("\"", lex_string)]
    String,
    /// Numeric literal tokens, such as `3` or `3.14`. There is no exponent
    /// syntax and no sign; `-` is always a separate token.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `func`
    #[token("func")]
    Func,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `output`
    #[token("output")]
    Output,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `create`
    #[token("create")]
    Create,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.` run to the end of the line.
    #[token("//", skip_line_comment)]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    NewLine,
    /// End-of-input sentinel. Never matched from source; appended by [`scan`].
    Eof,
}

/// The failure categories the lexer itself can produce.
///
/// These are turned into [`LexError`] diagnostics (with character and line)
/// by [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// Input that does not start any token.
    #[default]
    UnexpectedCharacter,
    /// A string literal that reaches the end of input.
    UnterminatedString,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A single scanned token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token category.
    pub kind:    TokenKind,
    /// The exact source text of the token. Empty for [`TokenKind::Eof`].
    pub lexeme:  String,
    /// The literal value for numbers, strings, `true`, `false` and `nil`.
    pub literal: Option<LiteralValue>,
    /// The source line the token ends on.
    pub line:    usize,
}

impl Token {
    /// Builds a token from its kind and source text, deriving the literal.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(LiteralValue::Number),
            TokenKind::String => {
                Some(LiteralValue::Str(lexeme.trim_start_matches('"')
                                             .trim_end_matches('"')
                                             .to_string()))
            },
            TokenKind::True => Some(LiteralValue::Bool(true)),
            TokenKind::False => Some(LiteralValue::Bool(false)),
            TokenKind::Nil => Some(LiteralValue::Nil),
            _ => None,
        };

        Self { kind,
               lexeme: lexeme.to_string(),
               literal,
               line }
    }

    /// The end-of-input sentinel.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }

    /// Describes the token for diagnostics: `end` for end of input, otherwise
    /// the quoted lexeme.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            "end".to_string()
        } else {
            format!("'{}'", self.lexeme)
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4} {:?} {}", self.line, self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal:?}")?;
        }
        Ok(())
    }
}

/// The result of scanning: the token stream and any lexical diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    /// Every recognized token, always terminated by exactly one
    /// [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    /// Diagnostics for input that could not be tokenized.
    pub errors: Vec<LexError>,
}

/// Scans source text into tokens.
///
/// Scanning never fails: unexpected characters are reported and skipped, an
/// unterminated string is reported and the rest of the input is dropped.
/// Either way the returned stream ends with an end-of-input token.
///
/// # Example
/// ```
/// use cosmo::interpreter::lexer::{TokenKind, scan};
///
/// let scanned = scan("create x = 1;");
/// let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Create,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert!(scanned.errors.is_empty());
/// ```
#[must_use]
pub fn scan(source: &str) -> Scanned {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(LexErrorKind::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or('\u{FFFD}');
                let error = LexError::UnexpectedCharacter { character, line };
                warn!(%error, "skipping character");
                errors.push(error);
            },
            Err(LexErrorKind::UnterminatedString) => {
                let error = LexError::UnterminatedString { line };
                warn!(%error, "abandoning string literal");
                errors.push(error);
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    trace!(count = tokens.len(), "scanned tokens");

    Scanned { tokens, errors }
}

/// Consumes the body of a string literal after its opening quote.
///
/// On success the token slice covers both quotes. When no closing quote
/// exists the rest of the input is consumed and an error is produced.
fn lex_string(lex: &mut Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    let remainder = lex.remainder();

    if let Some(end) = remainder.find('"') {
        lex.extras.line += remainder[..end].matches('\n').count();
        lex.bump(end + 1);
        Ok(())
    } else {
        lex.extras.line += remainder.matches('\n').count();
        lex.bump(remainder.len());
        Err(LexErrorKind::UnterminatedString)
    }
}

/// Skips a `//` comment up to, but not including, the newline.
fn skip_line_comment(lex: &mut Lexer<TokenKind>) -> Skip {
    let remainder = lex.remainder();
    lex.bump(remainder.find('\n').unwrap_or(remainder.len()));
    Skip
}
