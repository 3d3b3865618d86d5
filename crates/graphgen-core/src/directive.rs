//! Storage directive grammar.
//!
//! A field's `#[dgraph("...")]` attribute carries a small language:
//!
//! ```text
//! directives := directive*
//! directive  := "index" "=" index ("," index)*
//!             | "type" "=" IDENT
//!             | "predicate" "=" IDENT
//!             | "count" | "unique" | "upsert" | "reverse" | "lang"
//! index      := IDENT ( "(" param ("," param)* ")" )?
//! param      := IDENT ":" STRING
//! ```
//!
//! Directives are separated by whitespace. The [`Lexer`] turns the string
//! into tokens and [`DirectiveSet::parse`] builds the typed result.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use serde::{Deserialize, Serialize};

use crate::error::{DirectiveError, DirectiveResult};

// =============================================================================
// Typed directives
// =============================================================================

/// Distance metric of a similarity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VectorMetric {
    Cosine,
    Euclidean,
    DotProduct,
}

impl VectorMetric {
    pub fn name(&self) -> &'static str {
        match self {
            VectorMetric::Cosine => "cosine",
            VectorMetric::Euclidean => "euclidean",
            VectorMetric::DotProduct => "dotproduct",
        }
    }

    fn from_name(name: &str) -> DirectiveResult<Self> {
        match name {
            "cosine" => Ok(VectorMetric::Cosine),
            "euclidean" => Ok(VectorMetric::Euclidean),
            "dotproduct" => Ok(VectorMetric::DotProduct),
            _ => Err(DirectiveError::UnknownMetric {
                name: name.to_string(),
            }),
        }
    }
}

/// Parameters of an `hnsw` similarity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HnswParams {
    pub metric: VectorMetric,
    pub exponent: Option<u32>,
}

impl Default for HnswParams {
    fn default() -> Self {
        Self {
            metric: VectorMetric::Euclidean,
            exponent: None,
        }
    }
}

/// Index kinds understood by the storage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    Exact,
    Hash,
    Term,
    Fulltext,
    Trigram,
    Int,
    Float,
    Bool,
    Geo,
    Day,
    Month,
    Year,
    Hour,
    Hnsw(HnswParams),
}

impl IndexKind {
    /// Name of the index as written in a directive.
    pub fn name(&self) -> &'static str {
        match self {
            IndexKind::Exact => "exact",
            IndexKind::Hash => "hash",
            IndexKind::Term => "term",
            IndexKind::Fulltext => "fulltext",
            IndexKind::Trigram => "trigram",
            IndexKind::Int => "int",
            IndexKind::Float => "float",
            IndexKind::Bool => "bool",
            IndexKind::Geo => "geo",
            IndexKind::Day => "day",
            IndexKind::Month => "month",
            IndexKind::Year => "year",
            IndexKind::Hour => "hour",
            IndexKind::Hnsw(_) => "hnsw",
        }
    }

    /// The type hint an index of this kind only works with, if any.
    ///
    /// String-valued indexes return `None`: strings are the storage default.
    pub fn companion_type(&self) -> Option<TypeHint> {
        match self {
            IndexKind::Int => Some(TypeHint::Int),
            IndexKind::Float => Some(TypeHint::Float),
            IndexKind::Bool => Some(TypeHint::Bool),
            IndexKind::Geo => Some(TypeHint::Geo),
            IndexKind::Day | IndexKind::Month | IndexKind::Year | IndexKind::Hour => {
                Some(TypeHint::DateTime)
            }
            IndexKind::Hnsw(_) => Some(TypeHint::Float32Vector),
            IndexKind::Exact
            | IndexKind::Hash
            | IndexKind::Term
            | IndexKind::Fulltext
            | IndexKind::Trigram => None,
        }
    }

    /// Whether the index supports free-text search functions.
    pub fn is_text_search(&self) -> bool {
        matches!(self, IndexKind::Fulltext | IndexKind::Term)
    }

    /// Whether the index supports equality lookups.
    pub fn supports_eq(&self) -> bool {
        matches!(
            self,
            IndexKind::Exact
                | IndexKind::Hash
                | IndexKind::Int
                | IndexKind::Float
                | IndexKind::Bool
                | IndexKind::Day
                | IndexKind::Month
                | IndexKind::Year
                | IndexKind::Hour
        )
    }

    /// Whether the index supports ordered comparisons.
    pub fn supports_range(&self) -> bool {
        matches!(
            self,
            IndexKind::Exact
                | IndexKind::Int
                | IndexKind::Float
                | IndexKind::Day
                | IndexKind::Month
                | IndexKind::Year
                | IndexKind::Hour
        )
    }

    fn from_name(name: &str) -> DirectiveResult<Self> {
        let kind = match name {
            "exact" => IndexKind::Exact,
            "hash" => IndexKind::Hash,
            "term" => IndexKind::Term,
            "fulltext" => IndexKind::Fulltext,
            "trigram" => IndexKind::Trigram,
            "int" => IndexKind::Int,
            "float" => IndexKind::Float,
            "bool" => IndexKind::Bool,
            "geo" => IndexKind::Geo,
            "day" => IndexKind::Day,
            "month" => IndexKind::Month,
            "year" => IndexKind::Year,
            "hour" => IndexKind::Hour,
            "hnsw" => IndexKind::Hnsw(HnswParams::default()),
            _ => {
                return Err(DirectiveError::UnknownIndex {
                    name: name.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Hnsw(params) => {
                write!(f, "hnsw(metric:\"{}\"", params.metric.name())?;
                if let Some(exponent) = params.exponent {
                    write!(f, ",exponent:\"{exponent}\"")?;
                }
                f.write_str(")")
            }
            other => f.write_str(other.name()),
        }
    }
}

/// Storage type hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeHint {
    Geo,
    DateTime,
    Int,
    Float,
    Bool,
    String,
    Password,
    Float32Vector,
}

impl TypeHint {
    pub fn name(&self) -> &'static str {
        match self {
            TypeHint::Geo => "geo",
            TypeHint::DateTime => "datetime",
            TypeHint::Int => "int",
            TypeHint::Float => "float",
            TypeHint::Bool => "bool",
            TypeHint::String => "string",
            TypeHint::Password => "password",
            TypeHint::Float32Vector => "float32vector",
        }
    }

    fn from_name(name: &str) -> DirectiveResult<Self> {
        match name {
            "geo" => Ok(TypeHint::Geo),
            "datetime" => Ok(TypeHint::DateTime),
            "int" => Ok(TypeHint::Int),
            "float" => Ok(TypeHint::Float),
            "bool" => Ok(TypeHint::Bool),
            "string" => Ok(TypeHint::String),
            "password" => Ok(TypeHint::Password),
            "float32vector" => Ok(TypeHint::Float32Vector),
            _ => Err(DirectiveError::UnknownType {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed storage directives of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveSet {
    /// Index kinds in declaration order.
    pub index: Vec<IndexKind>,
    /// Declared or inferred type hint.
    pub type_hint: Option<TypeHint>,
    /// Set when `type_hint` was filled in by inference rather than declared.
    pub type_inferred: bool,
    /// Explicit storage predicate (`predicate=...`).
    pub predicate: Option<String>,
    pub count: bool,
    pub unique: bool,
    pub upsert: bool,
    pub reverse: bool,
    pub lang: bool,
}

impl DirectiveSet {
    /// Parse a directive string.
    pub fn parse(source: &str) -> DirectiveResult<Self> {
        let tokens = Lexer::new(source).tokenize()?;
        Parser::new(tokens).parse()
    }

    /// Whether any directive is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the field declares an index of the given name.
    pub fn has_index(&self, name: &str) -> bool {
        self.index.iter().any(|kind| kind.name() == name)
    }

    /// The directives as written in the source, without inferred hints.
    pub fn declared(&self) -> Self {
        let mut declared = self.clone();
        if declared.type_inferred {
            declared.type_hint = None;
            declared.type_inferred = false;
        }
        declared
    }

    /// First text-search capable index, in declaration order.
    pub fn text_search_index(&self) -> Option<&IndexKind> {
        self.index.iter().find(|kind| kind.is_text_search())
    }
}

impl fmt::Display for DirectiveSet {
    /// Canonical directive text, in a fixed key order. Inferred type hints
    /// are left out so the text parses back to [`DirectiveSet::declared`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(predicate) = &self.predicate {
            parts.push(format!("predicate={predicate}"));
        }
        if !self.index.is_empty() {
            let kinds: Vec<String> = self.index.iter().map(|k| k.to_string()).collect();
            parts.push(format!("index={}", kinds.join(",")));
        }
        if let Some(hint) = self.type_hint.filter(|_| !self.type_inferred) {
            parts.push(format!("type={hint}"));
        }
        for (set, flag) in [
            (self.count, "count"),
            (self.unique, "unique"),
            (self.upsert, "upsert"),
            (self.reverse, "reverse"),
            (self.lang, "lang"),
        ] {
            if set {
                parts.push(flag.to_string());
            }
        }
        f.write_str(&parts.join(" "))
    }
}

// =============================================================================
// Lexer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Str(String),
    Eq,
    Comma,
    Colon,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => f.write_str(s),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Eq => f.write_str("="),
            Token::Comma => f.write_str(","),
            Token::Colon => f.write_str(":"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    offset: usize,
}

struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    fn tokenize(mut self) -> DirectiveResult<Vec<Spanned>> {
        let mut tokens = Vec::new();
        while let Some(&(offset, ch)) = self.chars.peek() {
            let token = match ch {
                c if c.is_whitespace() => {
                    self.chars.next();
                    continue;
                }
                '=' => self.single(Token::Eq),
                ',' => self.single(Token::Comma),
                ':' => self.single(Token::Colon),
                '(' => self.single(Token::LParen),
                ')' => self.single(Token::RParen),
                '"' => self.string(offset)?,
                c if is_ident_char(c) => self.ident(offset),
                c => return Err(DirectiveError::UnexpectedChar { ch: c, offset }),
            };
            tokens.push(Spanned { token, offset });
        }
        Ok(tokens)
    }

    fn single(&mut self, token: Token) -> Token {
        self.chars.next();
        token
    }

    fn string(&mut self, start: usize) -> DirectiveResult<Token> {
        self.chars.next();
        let mut value = String::new();
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(Token::Str(value)),
                '\\' => match self.chars.next() {
                    Some((_, escaped)) => value.push(escaped),
                    None => break,
                },
                other => value.push(other),
            }
        }
        Err(DirectiveError::UnterminatedString { offset: start })
    }

    fn ident(&mut self, start: usize) -> Token {
        let mut end = start;
        while let Some(&(offset, ch)) = self.chars.peek() {
            if !is_ident_char(ch) {
                break;
            }
            end = offset + ch.len_utf8();
            self.chars.next();
        }
        Token::Ident(self.source[start..end].to_string())
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '.' | '~' | '-' | '@')
}

// =============================================================================
// Parser
// =============================================================================

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Spanned>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn next(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn unexpected(spanned: Spanned) -> DirectiveError {
        DirectiveError::UnexpectedToken {
            found: spanned.token.to_string(),
            offset: spanned.offset,
        }
    }

    fn parse(mut self) -> DirectiveResult<DirectiveSet> {
        let mut set = DirectiveSet::default();
        let mut seen: Vec<String> = Vec::new();

        while let Some(spanned) = self.next() {
            let key = match spanned.token {
                Token::Ident(key) => key,
                _ => return Err(Self::unexpected(spanned)),
            };
            if seen.contains(&key) {
                return Err(DirectiveError::DuplicateKey { key });
            }
            seen.push(key.clone());

            match key.as_str() {
                "index" => {
                    self.expect_eq(&key)?;
                    set.index = self.index_list()?;
                }
                "type" => {
                    self.expect_eq(&key)?;
                    let name = self.value(&key)?;
                    set.type_hint = Some(TypeHint::from_name(&name)?);
                }
                "predicate" => {
                    self.expect_eq(&key)?;
                    set.predicate = Some(self.value(&key)?);
                }
                "count" => set.count = true,
                "unique" => set.unique = true,
                "upsert" => set.upsert = true,
                "reverse" => set.reverse = true,
                "lang" => set.lang = true,
                _ => return Err(DirectiveError::UnknownKey { key }),
            }
        }

        Ok(set)
    }

    fn expect_eq(&mut self, key: &str) -> DirectiveResult<()> {
        match self.next() {
            Some(Spanned {
                token: Token::Eq, ..
            }) => Ok(()),
            Some(other) => Err(Self::unexpected(other)),
            None => Err(DirectiveError::MissingValue {
                key: key.to_string(),
            }),
        }
    }

    fn value(&mut self, key: &str) -> DirectiveResult<String> {
        match self.next() {
            Some(Spanned {
                token: Token::Ident(value),
                ..
            })
            | Some(Spanned {
                token: Token::Str(value),
                ..
            }) => Ok(value),
            Some(other) => Err(Self::unexpected(other)),
            None => Err(DirectiveError::MissingValue {
                key: key.to_string(),
            }),
        }
    }

    fn index_list(&mut self) -> DirectiveResult<Vec<IndexKind>> {
        let mut kinds: Vec<IndexKind> = Vec::new();
        loop {
            let name = self.value("index")?;
            let mut kind = IndexKind::from_name(&name)?;
            if self.peek() == Some(&Token::LParen) {
                self.next();
                kind = self.index_params(&name, kind)?;
            }
            if kinds.iter().any(|k| k.name() == kind.name()) {
                return Err(DirectiveError::DuplicateKey {
                    key: format!("index={name}"),
                });
            }
            kinds.push(kind);

            if self.peek() == Some(&Token::Comma) {
                self.next();
            } else {
                return Ok(kinds);
            }
        }
    }

    fn index_params(&mut self, index: &str, kind: IndexKind) -> DirectiveResult<IndexKind> {
        let IndexKind::Hnsw(mut params) = kind else {
            return Err(DirectiveError::UnknownParam {
                index: index.to_string(),
                name: "(".to_string(),
            });
        };
        let unterminated = || DirectiveError::UnterminatedParams {
            index: index.to_string(),
        };

        loop {
            let name = match self.next() {
                Some(Spanned {
                    token: Token::RParen,
                    ..
                }) => return Ok(IndexKind::Hnsw(params)),
                Some(Spanned {
                    token: Token::Ident(name),
                    ..
                }) => name,
                Some(other) => return Err(Self::unexpected(other)),
                None => return Err(unterminated()),
            };
            match self.next() {
                Some(Spanned {
                    token: Token::Colon,
                    ..
                }) => {}
                Some(other) => return Err(Self::unexpected(other)),
                None => return Err(unterminated()),
            }
            let value = self.value(&name).map_err(|err| match err {
                DirectiveError::MissingValue { .. } => unterminated(),
                other => other,
            })?;

            match name.as_str() {
                "metric" => params.metric = VectorMetric::from_name(&value)?,
                "exponent" => {
                    let parsed = value.parse::<u32>().map_err(|_| {
                        DirectiveError::InvalidParam {
                            name: name.clone(),
                            value: value.clone(),
                        }
                    })?;
                    params.exponent = Some(parsed);
                }
                _ => {
                    return Err(DirectiveError::UnknownParam {
                        index: index.to_string(),
                        name,
                    })
                }
            }

            match self.next() {
                Some(Spanned {
                    token: Token::Comma,
                    ..
                }) => {}
                Some(Spanned {
                    token: Token::RParen,
                    ..
                }) => return Ok(IndexKind::Hnsw(params)),
                Some(other) => return Err(Self::unexpected(other)),
                None => return Err(unterminated()),
            }
        }
    }
}
