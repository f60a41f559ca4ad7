//! Formula tokenizer.
//!
//! Splits a formula body (text after `=`) into tokens, classifying each one
//! exactly once: numbers, single cell references, ranges, function names,
//! operators and punctuation. Later stages rewrite references at the token
//! level, so a number produced by substitution can never be mistaken for a
//! reference.

use std::iter::Peekable;
use std::str::CharIndices;

use super::cell_ref::CellRef;
use crate::error::{FormulaError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Cell(CellRef),
    /// `start:end`, corners as written.
    Range(CellRef, CellRef),
    /// A bare word such as a function name.
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Comma,
}

/// Tokenize a formula body.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer {
        input,
        chars: input.char_indices().peekable(),
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

/// A run of letters optionally followed by a run of digits.
enum Word<'a> {
    Name(&'a str),
    Cell(CellRef),
}

impl<'a> Lexer<'a> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        let Some(&(start, c)) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match c {
            '+' => self.single(Token::Plus),
            '-' => self.single(Token::Minus),
            '*' => self.single(Token::Star),
            '/' => self.single(Token::Slash),
            '(' => self.single(Token::LParen),
            ')' => self.single(Token::RParen),
            ',' => self.single(Token::Comma),
            '0'..='9' | '.' => self.number(start)?,
            c if c.is_ascii_alphabetic() => match self.word(start)? {
                Word::Name(name) => Token::Ident(name.to_string()),
                Word::Cell(cell) => self.cell_or_range(cell)?,
            },
            _ => return Err(FormulaError::Parse),
        };
        Ok(Some(token))
    }

    fn single(&mut self, token: Token) -> Token {
        self.chars.next();
        token
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(i, _)| i)
    }

    fn take_digits(&mut self) -> usize {
        let mut count = 0;
        while self.chars.next_if(|&(_, c)| c.is_ascii_digit()).is_some() {
            count += 1;
        }
        count
    }

    fn number(&mut self, start: usize) -> Result<Token> {
        let mut digits = self.take_digits();
        if self.chars.next_if(|&(_, c)| c == '.').is_some() {
            digits += self.take_digits();
        }
        if digits == 0 {
            return Err(FormulaError::Parse);
        }

        // Only treat `e` as an exponent when digits follow it.
        let mut lookahead = self.chars.clone();
        if lookahead.next_if(|&(_, c)| c == 'e' || c == 'E').is_some() {
            lookahead.next_if(|&(_, c)| c == '+' || c == '-');
            if lookahead.peek().is_some_and(|&(_, c)| c.is_ascii_digit()) {
                self.chars = lookahead;
                self.take_digits();
            }
        }

        let end = self.offset();
        self.input[start..end]
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| FormulaError::Parse)
    }

    fn word(&mut self, start: usize) -> Result<Word<'a>> {
        while self.chars.next_if(|&(_, c)| c.is_ascii_alphabetic()).is_some() {}
        let letters_end = self.offset();
        let digits = self.take_digits();
        let end = self.offset();

        if self
            .chars
            .peek()
            .is_some_and(|&(_, c)| c.is_alphanumeric() || c == '_')
        {
            return Err(FormulaError::Parse);
        }

        let input = self.input;
        let text = &input[start..end];
        if digits == 0 {
            return Ok(Word::Name(text));
        }
        if input[letters_end..].starts_with('0') {
            return Err(FormulaError::Parse);
        }
        // Well-formed but too large to address.
        CellRef::from_str(text)
            .map(Word::Cell)
            .ok_or(FormulaError::Reference)
    }

    fn cell_or_range(&mut self, start: CellRef) -> Result<Token> {
        let mut lookahead = self.chars.clone();
        while lookahead.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
        if lookahead.next_if(|&(_, c)| c == ':').is_none() {
            return Ok(Token::Cell(start));
        }

        self.chars = lookahead;
        self.skip_whitespace();
        let Some(&(end_start, c)) = self.chars.peek() else {
            return Err(FormulaError::Parse);
        };
        if !c.is_ascii_alphabetic() {
            return Err(FormulaError::Parse);
        }
        match self.word(end_start)? {
            Word::Cell(end) => Ok(Token::Range(start, end)),
            Word::Name(_) => Err(FormulaError::Parse),
        }
    }
}
