//! Read-only pass-through for ad hoc SELECT queries.
//!
//! [`validate_select`] tokenizes the submitted text (string-literal,
//! quoted-identifier and comment aware) and accepts it only as a single
//! SELECT statement: chaining is refused, parenthesized groups must either
//! open a SELECT subquery or contain no statement keyword at all, and
//! mutating or DDL keywords anywhere in the token stream are refused. The
//! accepted text is then executed verbatim by [`run_select`].
//!
//! The validator guards against accidental writes through the gateway; the
//! shared API key is the access control. Treat it as advisory, not as a
//! hardened security boundary.

use std::iter::Peekable;
use std::str::Chars;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, JsonValue, Statement};
use thiserror::Error;

/// Keywords refused anywhere in the statement. `replace` is absent on
/// purpose: REPLACE() is an ordinary string function in a SELECT, and the
/// statement form is caught positionally like every other statement keyword.
const DENIED_KEYWORDS: &[&str] = &[
    "insert", "update", "delete", "drop", "alter", "create", "truncate", "merge", "grant",
    "revoke", "call", "set", "use", "load", "lock", "unlock", "into", "do", "handler", "prepare",
    "execute", "deallocate", "begin", "commit", "rollback", "kill", "shutdown",
];

/// Keywords that can open a statement. A parenthesized group starting with
/// one of these (other than `select`) is a non-SELECT subquery.
const STATEMENT_KEYWORDS: &[&str] = &[
    "select", "insert", "update", "delete", "drop", "alter", "create", "truncate", "replace",
    "merge", "grant", "revoke", "call", "set", "use", "load", "lock", "unlock", "values", "with",
    "explain", "describe", "show", "begin", "commit", "rollback", "prepare", "execute", "do",
    "handler",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryRejected {
    #[error("query is empty")]
    Empty,
    #[error("query must begin with SELECT")]
    NotSelect,
    #[error("statement chaining is not allowed")]
    Chained,
    #[error("forbidden keyword `{0}`")]
    ForbiddenKeyword(String),
    #[error("parenthesized subquery must begin with SELECT, found `{0}`")]
    NonSelectSubquery(String),
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("unterminated string literal")]
    UnterminatedLiteral,
    #[error("unterminated quoted identifier")]
    UnterminatedIdentifier,
    #[error("unterminated block comment")]
    UnterminatedComment,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Rejected(#[from] QueryRejected),
    #[error(transparent)]
    Db(#[from] DbErr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// Bare word, lowercased. Keywords and identifiers are not told apart.
    Word(String),
    Number,
    Literal,
    QuotedIdent,
    LParen,
    RParen,
    Semicolon,
    Symbol(char),
}

/// Accept the text only as a single SELECT statement.
pub fn validate_select(sql: &str) -> Result<(), QueryRejected> {
    let mut tokens = tokenize(sql)?;

    // One trailing semicolon is tolerated; any other is chaining.
    if tokens.last() == Some(&Token::Semicolon) {
        tokens.pop();
    }
    if tokens.is_empty() {
        return Err(QueryRejected::Empty);
    }
    if tokens.contains(&Token::Semicolon) {
        return Err(QueryRejected::Chained);
    }

    match &tokens[0] {
        Token::Word(word) if word == "select" => {}
        _ => return Err(QueryRejected::NotSelect),
    }

    let mut depth: i32 = 0;
    let mut previous: Option<&Token> = None;
    for token in &tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth < 0 {
                    return Err(QueryRejected::UnbalancedParens);
                }
            }
            Token::Word(word) => {
                if previous == Some(&Token::LParen)
                    && word != "select"
                    && STATEMENT_KEYWORDS.contains(&word.as_str())
                {
                    return Err(QueryRejected::NonSelectSubquery(word.clone()));
                }
                if DENIED_KEYWORDS.contains(&word.as_str()) {
                    return Err(QueryRejected::ForbiddenKeyword(word.clone()));
                }
            }
            _ => {}
        }
        previous = Some(token);
    }
    if depth != 0 {
        return Err(QueryRejected::UnbalancedParens);
    }

    Ok(())
}

/// Validate and execute an ad hoc query, returning the raw rows as JSON.
pub async fn run_select(
    db: &DatabaseConnection,
    sql: &str,
) -> Result<Vec<JsonValue>, GatewayError> {
    validate_select(sql)?;
    tracing::debug!(query = sql, "Executing ad hoc SELECT");
    let statement = Statement::from_string(db.get_database_backend(), sql);
    let rows = JsonValue::find_by_statement(statement).all(db).await?;
    Ok(rows)
}

fn tokenize(sql: &str) -> Result<Vec<Token>, QueryRejected> {
    let mut tokens = Vec::new();
    let mut chars = sql.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '-' => {
                chars.next();
                if chars.peek() == Some(&'-') {
                    while let Some(n) = chars.next() {
                        if n == '\n' {
                            break;
                        }
                    }
                } else {
                    tokens.push(Token::Symbol('-'));
                }
            }
            '/' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    let mut closed = false;
                    while let Some(n) = chars.next() {
                        if n == '*' && chars.peek() == Some(&'/') {
                            chars.next();
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Err(QueryRejected::UnterminatedComment);
                    }
                } else {
                    tokens.push(Token::Symbol('/'));
                }
            }
            '\'' => {
                chars.next();
                if !scan_quoted(&mut chars, '\'', true) {
                    return Err(QueryRejected::UnterminatedLiteral);
                }
                tokens.push(Token::Literal);
            }
            '"' => {
                chars.next();
                if !scan_quoted(&mut chars, '"', false) {
                    return Err(QueryRejected::UnterminatedIdentifier);
                }
                tokens.push(Token::QuotedIdent);
            }
            '`' => {
                chars.next();
                if !scan_quoted(&mut chars, '`', false) {
                    return Err(QueryRejected::UnterminatedIdentifier);
                }
                tokens.push(Token::QuotedIdent);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            ';' => {
                chars.next();
                tokens.push(Token::Semicolon);
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut word = String::new();
                while let Some(&n) = chars.peek() {
                    if n.is_ascii_alphanumeric() || n == '_' || n == '$' {
                        word.push(n.to_ascii_lowercase());
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Word(word));
            }
            c if c.is_ascii_digit() => {
                while let Some(&n) = chars.peek() {
                    if n.is_ascii_alphanumeric() || n == '.' {
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Number);
            }
            other => {
                chars.next();
                tokens.push(Token::Symbol(other));
            }
        }
    }

    Ok(tokens)
}

/// Scan to the closing quote. Doubled quotes escape themselves; inside
/// single-quoted literals a backslash escapes the next character as well.
/// Returns false when the input ends before the quote closes.
fn scan_quoted(chars: &mut Peekable<Chars<'_>>, quote: char, backslash_escapes: bool) -> bool {
    while let Some(c) = chars.next() {
        if backslash_escapes && c == '\\' {
            chars.next();
            continue;
        }
        if c == quote {
            if chars.peek() == Some(&quote) {
                chars.next();
                continue;
            }
            return true;
        }
    }
    false
}
