// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::iter::Peekable;
use std::str::Chars;

use crate::ast::{Command, Expr, Query};
use crate::types::{BigInt, BigRat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Ident(String),
    /// Integer digits and optional digits after the decimal point.
    Decimal(String, Option<String>),
    LPar,
    RPar,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Eof,
    Error(String),
}

fn describe(token: &Token) -> String {
    match *token {
        Token::Ident(ref name) => format!("`{}`", name),
        Token::Decimal(..) => "number".to_owned(),
        Token::LPar => "`(`".to_owned(),
        Token::RPar => "`)`".to_owned(),
        Token::Plus => "`+`".to_owned(),
        Token::Minus => "`-`".to_owned(),
        Token::Asterisk => "`*`".to_owned(),
        Token::Slash => "`/`".to_owned(),
        Token::Eof => "eof".to_owned(),
        Token::Error(ref e) => format!("<{}>", e),
    }
}

#[derive(Clone)]
pub struct TokenIterator<'a>(Peekable<Chars<'a>>);

impl<'a> TokenIterator<'a> {
    pub fn new(input: &'a str) -> TokenIterator<'a> {
        TokenIterator(input.chars().peekable())
    }

    fn digits(&mut self) -> String {
        let mut buf = String::new();
        while let Some(&c) = self.0.peek() {
            match c {
                '0'..='9' => buf.push(c),
                // Digit group separators.
                '_' | '\u{2009}' => (),
                _ => break,
            }
            self.0.next();
        }
        buf
    }
}

impl<'a> Iterator for TokenIterator<'a> {
    type Item = Token;

    /// Never returns `None`; the end of input is an endless run of
    /// [`Token::Eof`].
    fn next(&mut self) -> Option<Token> {
        let c = match self.0.next() {
            Some(c) => c,
            None => return Some(Token::Eof),
        };
        let res = match c {
            ' ' | '\t' | '\n' | '\r' => return self.next(),
            '(' => Token::LPar,
            ')' => Token::RPar,
            '+' => Token::Plus,
            '-' | '\u{2212}' => Token::Minus,
            '*' | '\u{00d7}' => Token::Asterisk,
            '/' | '\u{00f7}' | '\u{2215}' => Token::Slash,
            '\u{221a}' => Token::Ident("sqrt".to_owned()),
            '0'..='9' | '.' => {
                let mut integer = String::new();
                if c != '.' {
                    integer.push(c);
                    integer.push_str(&self.digits());
                }
                let frac = if c == '.' || self.0.peek() == Some(&'.') {
                    if c != '.' {
                        self.0.next();
                    }
                    let frac = self.digits();
                    if integer.is_empty() && frac.is_empty() {
                        return Some(Token::Error("Expected digits after `.`".to_owned()));
                    }
                    Some(frac)
                } else {
                    None
                };
                if integer.is_empty() {
                    integer.push('0');
                }
                Token::Decimal(integer, frac)
            }
            x if x.is_alphabetic() || x == '_' => {
                let mut buf = x.to_string();
                while let Some(&c) = self.0.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        buf.push(c);
                        self.0.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(buf)
            }
            x => Token::Error(format!("Unknown character: '{}'", x)),
        };
        Some(res)
    }
}

pub type Iter<'a> = Peekable<TokenIterator<'a>>;

fn next_token(iter: &mut Iter) -> Token {
    iter.next().unwrap_or(Token::Eof)
}

fn peek_token(iter: &mut Iter) -> Token {
    iter.peek().cloned().unwrap_or(Token::Eof)
}

/// Converts the digits of a decimal literal into an exact rational.
pub fn decimal_to_rational(integer: &str, frac: Option<&str>) -> Result<BigRat, String> {
    let frac = frac.unwrap_or("");
    let digits = format!("{}{}", integer, frac);
    let numer = BigInt::from_str_radix(&digits, 10)
        .map_err(|_| format!("Malformed number literal `{}`", digits))?;
    let denom = BigInt::from(10i64).pow(frac.len() as u32);
    Ok(BigRat::ratio(&numer, &denom))
}

fn parse_atom(iter: &mut Iter) -> Expr {
    match next_token(iter) {
        Token::Decimal(integer, frac) => match decimal_to_rational(&integer, frac.as_deref()) {
            Ok(value) => Expr::Const(value),
            Err(msg) => Expr::Error(msg),
        },
        Token::Ident(ref name) if name == "sqrt" => match peek_token(iter) {
            Token::LPar => {
                iter.next();
                let arg = parse_expr(iter);
                match next_token(iter) {
                    Token::RPar => Expr::Sqrt(Box::new(arg)),
                    x => Expr::Error(format!("Expected `)`, got {}", describe(&x))),
                }
            }
            _ => Expr::Sqrt(Box::new(parse_atom(iter))),
        },
        Token::LPar => {
            let res = parse_expr(iter);
            match next_token(iter) {
                Token::RPar => res,
                x => Expr::Error(format!("Expected `)`, got {}", describe(&x))),
            }
        }
        Token::Error(msg) => Expr::Error(msg),
        x => Expr::Error(format!("Expected term, got {}", describe(&x))),
    }
}

fn parse_unary(iter: &mut Iter) -> Expr {
    match peek_token(iter) {
        Token::Minus => {
            iter.next();
            Expr::Neg(Box::new(parse_unary(iter)))
        }
        Token::Plus => {
            iter.next();
            Expr::Plus(Box::new(parse_unary(iter)))
        }
        _ => parse_atom(iter),
    }
}

fn parse_mul(iter: &mut Iter) -> Expr {
    let mut left = parse_unary(iter);
    loop {
        match peek_token(iter) {
            Token::Asterisk => {
                iter.next();
                let right = parse_unary(iter);
                left = Expr::Mul(Box::new(left), Box::new(right))
            }
            Token::Slash => {
                iter.next();
                let right = parse_unary(iter);
                left = Expr::Div(Box::new(left), Box::new(right))
            }
            _ => return left,
        }
    }
}

fn parse_add(iter: &mut Iter) -> Expr {
    let mut left = parse_mul(iter);
    loop {
        match peek_token(iter) {
            Token::Plus => {
                iter.next();
                let right = parse_mul(iter);
                left = Expr::Add(Box::new(left), Box::new(right))
            }
            Token::Minus => {
                iter.next();
                let right = parse_mul(iter);
                left = Expr::Sub(Box::new(left), Box::new(right))
            }
            _ => return left,
        }
    }
}

pub fn parse_expr(iter: &mut Iter) -> Expr {
    parse_add(iter)
}

fn parse_command(iter: &mut Iter) -> Result<Command, Expr> {
    let name = match peek_token(iter) {
        Token::Ident(name) => name,
        _ => return Ok(Command::Expand),
    };
    let command = match &name[..] {
        "expand" => Command::Expand,
        "convergents" => Command::Convergents,
        "terminates" => Command::Terminates,
        "period" => Command::Period,
        "bridge" => Command::Bridge,
        "approx" => {
            iter.next();
            return match next_token(iter) {
                Token::Decimal(integer, None) => match BigInt::from_str_radix(&integer, 10) {
                    Ok(limit) => Ok(Command::Approx(limit)),
                    Err(_) => Err(Expr::Error(format!("Malformed limit `{}`", integer))),
                },
                x => Err(Expr::Error(format!(
                    "Expected integer denominator limit after `approx`, got {}",
                    describe(&x)
                ))),
            };
        }
        _ => return Ok(Command::Expand),
    };
    iter.next();
    Ok(command)
}

pub fn parse_query(iter: &mut Iter) -> Query {
    let command = match parse_command(iter) {
        Ok(command) => command,
        Err(expr) => {
            return Query {
                command: Command::Expand,
                expr,
            }
        }
    };
    let expr = parse_expr(iter);
    let expr = match next_token(iter) {
        Token::Eof => expr,
        x => Expr::Error(format!("Expected end of input, got {}", describe(&x))),
    };
    Query { command, expr }
}

/// Tokenizes and parses a whole line.
pub fn parse_line(line: &str) -> Query {
    let mut iter = TokenIterator::new(line.trim()).peekable();
    parse_query(&mut iter)
}
