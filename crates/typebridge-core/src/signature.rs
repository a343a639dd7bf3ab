//! Parser for host type signatures.
//!
//! Accepts the notation used by the model files:
//! `java.util.Map<K, java.util.List<V>>`, `int[][]`, `? extends T`, `T...`.
//! Names are binary names (`java.util.Map$Entry`). A bare name that matches
//! an in-scope type variable becomes [`TypeRef::Variable`].

use logos::Logos;

use crate::{Primitive, TypeName, TypeRef};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Tok {
    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(",")]
    Comma,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("?")]
    Question,

    #[token("...")]
    Ellipsis,

    #[token(".")]
    Dot,

    #[token("extends")]
    Extends,

    #[token("super")]
    Super,

    /// `$` is part of identifiers so member types lex as one segment.
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Name,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

/// A signature that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid type signature `{input}`: {message}")]
pub struct SignatureError {
    pub input: String,
    pub message: String,
}

/// Parse one type signature. `type_vars` lists the variables in scope.
pub fn parse_type_ref(input: &str, type_vars: &[String]) -> Result<TypeRef, SignatureError> {
    let tokens = lex(input)?;
    let mut parser = Parser {
        input,
        tokens,
        pos: 0,
        type_vars,
    };
    let ty = parser.parse_type()?;
    if let Some((_, text)) = parser.peek_full() {
        return Err(parser.error(format!("unexpected `{text}` after type")));
    }
    Ok(ty)
}

fn lex(input: &str) -> Result<Vec<(Tok, &str)>, SignatureError> {
    let mut tokens = Vec::new();
    let mut lexer = Tok::lexer(input);
    while let Some(result) = lexer.next() {
        match result {
            Ok(Tok::Whitespace) => {}
            Ok(tok) => tokens.push((tok, lexer.slice())),
            Err(()) => {
                return Err(SignatureError {
                    input: input.to_owned(),
                    message: format!("unexpected character at offset {}", lexer.span().start),
                });
            }
        }
    }
    Ok(tokens)
}

struct Parser<'s, 'v> {
    input: &'s str,
    tokens: Vec<(Tok, &'s str)>,
    pos: usize,
    type_vars: &'v [String],
}

impl<'s> Parser<'s, '_> {
    fn peek(&self) -> Option<Tok> {
        self.tokens.get(self.pos).map(|(tok, _)| *tok)
    }

    fn peek_full(&self) -> Option<(Tok, &'s str)> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<(Tok, &'s str)> {
        let tok = self.tokens.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: Tok, what: &str) -> Result<(), SignatureError> {
        match self.bump() {
            Some((tok, _)) if tok == expected => Ok(()),
            Some((_, text)) => Err(self.error(format!("expected {what}, found `{text}`"))),
            None => Err(self.error(format!("expected {what}, found end of input"))),
        }
    }

    fn error(&self, message: String) -> SignatureError {
        SignatureError {
            input: self.input.to_owned(),
            message,
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef, SignatureError> {
        let base = match self.bump() {
            Some((Tok::Question, _)) => {
                if matches!(self.peek(), Some(Tok::Extends | Tok::Super)) {
                    self.bump();
                    self.parse_type()?;
                }
                return Ok(TypeRef::Wildcard);
            }
            Some((Tok::Name, text)) => {
                let name = self.dotted_name(text)?;
                self.parse_named(&name)?
            }
            Some((_, text)) => return Err(self.error(format!("expected a type, found `{text}`"))),
            None => return Err(self.error("expected a type, found end of input".to_owned())),
        };
        self.parse_dimensions(base)
    }

    /// Join `a . b . C` into one name.
    fn dotted_name(&mut self, first: &str) -> Result<String, SignatureError> {
        let mut name = first.to_owned();
        while self.peek() == Some(Tok::Dot) {
            self.bump();
            match self.bump() {
                Some((Tok::Name, segment)) => {
                    name.push('.');
                    name.push_str(segment);
                }
                Some((_, text)) => {
                    return Err(self.error(format!("expected a name after `.`, found `{text}`")));
                }
                None => {
                    let message = "expected a name after `.`, found end of input";
                    return Err(self.error(message.to_owned()));
                }
            }
        }
        Ok(name)
    }

    fn parse_named(&mut self, text: &str) -> Result<TypeRef, SignatureError> {
        if let Some(primitive) = Primitive::from_keyword(text) {
            return Ok(TypeRef::Primitive(primitive));
        }

        if self.peek() == Some(Tok::Lt) {
            self.bump();
            let raw = self.type_name(text)?;
            let mut args = vec![self.parse_type()?];
            while self.peek() == Some(Tok::Comma) {
                self.bump();
                args.push(self.parse_type()?);
            }
            self.expect(Tok::Gt, "`>`")?;
            return Ok(TypeRef::Parameterized { raw, args });
        }

        if self.type_vars.iter().any(|v| v == text) {
            return Ok(TypeRef::Variable(text.to_owned()));
        }

        Ok(TypeRef::Class(self.type_name(text)?))
    }

    fn parse_dimensions(&mut self, mut ty: TypeRef) -> Result<TypeRef, SignatureError> {
        loop {
            match self.peek() {
                Some(Tok::BracketOpen) => {
                    self.bump();
                    self.expect(Tok::BracketClose, "`]`")?;
                    ty = TypeRef::array(ty);
                }
                Some(Tok::Ellipsis) => {
                    self.bump();
                    ty = TypeRef::array(ty);
                }
                _ => return Ok(ty),
            }
        }
    }

    fn type_name(&self, text: &str) -> Result<TypeName, SignatureError> {
        TypeName::parse(text).ok_or_else(|| self.error(format!("malformed type name `{text}`")))
    }
}
