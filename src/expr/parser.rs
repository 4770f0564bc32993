use super::{Expr, ExprError, UnaryFn, Value};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

fn parse_error(position: usize, message: impl Into<String>) -> ExprError {
    ExprError::Parse {
        position,
        message: message.into(),
    }
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, ExprError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        let start = index;
        match c {
            ' ' | '\t' | '\n' | '\r' => index += 1,
            '+' => {
                tokens.push((start, Token::Plus));
                index += 1;
            }
            '-' => {
                tokens.push((start, Token::Minus));
                index += 1;
            }
            '*' => {
                // "**" is the python spelling of "^"
                if chars.get(index + 1) == Some(&'*') {
                    tokens.push((start, Token::Caret));
                    index += 2;
                } else {
                    tokens.push((start, Token::Star));
                    index += 1;
                }
            }
            '/' => {
                tokens.push((start, Token::Slash));
                index += 1;
            }
            '^' => {
                tokens.push((start, Token::Caret));
                index += 1;
            }
            '(' => {
                tokens.push((start, Token::LParen));
                index += 1;
            }
            ')' => {
                tokens.push((start, Token::RParen));
                index += 1;
            }
            ',' => {
                tokens.push((start, Token::Comma));
                index += 1;
            }
            '0'..='9' | '.' => {
                while index < chars.len() && chars[index].is_ascii_digit() {
                    index += 1;
                }
                if index < chars.len() && chars[index] == '.' {
                    index += 1;
                    while index < chars.len() && chars[index].is_ascii_digit() {
                        index += 1;
                    }
                }
                // exponent only when followed by digits (else "e" is Euler's number)
                if index < chars.len() && (chars[index] == 'e' || chars[index] == 'E') {
                    let mut lookahead = index + 1;
                    if lookahead < chars.len() && (chars[lookahead] == '+' || chars[lookahead] == '-')
                    {
                        lookahead += 1;
                    }
                    if lookahead < chars.len() && chars[lookahead].is_ascii_digit() {
                        index = lookahead;
                        while index < chars.len() && chars[index].is_ascii_digit() {
                            index += 1;
                        }
                    }
                }
                let literal: String = chars[start..index].iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| parse_error(start, format!("invalid number '{}'", literal)))?;
                tokens.push((start, Token::Number(value)));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                while index < chars.len()
                    && (chars[index].is_ascii_alphanumeric() || chars[index] == '_')
                {
                    index += 1;
                }
                tokens.push((start, Token::Ident(chars[start..index].iter().collect())));
            }
            c => return Err(parse_error(start, format!("unexpected character '{}'", c))),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    position: usize,
    input_length: usize,
}

pub fn parse(input: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        position: 0,
        input_length: input.chars().count(),
    };
    let expr = parser.expression()?;
    match parser.peek() {
        None => Ok(expr),
        Some((position, _)) => Err(parse_error(position, "unexpected trailing input")),
    }
}

impl Parser {
    fn peek(&self) -> Option<(usize, &Token)> {
        self.tokens
            .get(self.position)
            .map(|(offset, token)| (*offset, token))
    }

    fn advance(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token, description: &str) -> Result<(), ExprError> {
        match self.advance() {
            Some((_, token)) if token == expected => Ok(()),
            Some((position, _)) => Err(parse_error(position, format!("expected {}", description))),
            None => Err(parse_error(
                self.input_length,
                format!("expected {}", description),
            )),
        }
    }

    fn expression(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.term()?;
        loop {
            match self.peek() {
                Some((_, Token::Plus)) => {
                    self.advance();
                    expr = Expr::Add(Box::new(expr), Box::new(self.term()?));
                }
                Some((_, Token::Minus)) => {
                    self.advance();
                    expr = Expr::Sub(Box::new(expr), Box::new(self.term()?));
                }
                _ => return Ok(expr),
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.unary()?;
        loop {
            match self.peek() {
                Some((_, Token::Star)) => {
                    self.advance();
                    expr = Expr::Mul(Box::new(expr), Box::new(self.unary()?));
                }
                Some((_, Token::Slash)) => {
                    self.advance();
                    expr = Expr::Div(Box::new(expr), Box::new(self.unary()?));
                }
                _ => return Ok(expr),
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ExprError> {
        match self.peek() {
            Some((_, Token::Minus)) => {
                self.advance();
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some((_, Token::Plus)) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, ExprError> {
        let base = self.atom()?;
        if let Some((_, Token::Caret)) = self.peek() {
            self.advance();
            // right-associative, and the exponent may carry a sign
            let exponent = self.unary()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ExprError> {
        match self.advance() {
            Some((_, Token::Number(value))) => Ok(Expr::Const(Value::from(value))),
            Some((_, Token::Ident(name))) => {
                if let Some((_, Token::LParen)) = self.peek() {
                    self.advance();
                    let arguments = self.arguments()?;
                    return build_call(&name, arguments);
                }
                Ok(match name.as_str() {
                    "pi" => Expr::Const(Value::from(std::f64::consts::PI)),
                    "e" | "E" => Expr::Const(Value::from(std::f64::consts::E)),
                    "I" => Expr::Const(Value::i()),
                    _ => Expr::Var(name),
                })
            }
            Some((_, Token::LParen)) => {
                let expr = self.expression()?;
                self.expect(Token::RParen, "')'")?;
                Ok(expr)
            }
            Some((position, _)) => Err(parse_error(position, "expected expression")),
            None => Err(parse_error(self.input_length, "expected expression")),
        }
    }

    fn arguments(&mut self) -> Result<Vec<Expr>, ExprError> {
        let mut arguments = vec![self.expression()?];
        loop {
            match self.advance() {
                Some((_, Token::Comma)) => arguments.push(self.expression()?),
                Some((_, Token::RParen)) => return Ok(arguments),
                Some((position, _)) => return Err(parse_error(position, "expected ',' or ')'")),
                None => return Err(parse_error(self.input_length, "expected ',' or ')'")),
            }
        }
    }
}

fn build_call(name: &str, arguments: Vec<Expr>) -> Result<Expr, ExprError> {
    let arity_error = |expected: usize, got: usize| ExprError::WrongArity {
        name: name.to_string(),
        expected,
        got,
    };

    if name == "besselj" {
        return match <[Expr; 2]>::try_from(arguments) {
            Ok([order, argument]) => Ok(Expr::BesselJ(Box::new(order), Box::new(argument))),
            Err(rest) => Err(arity_error(2, rest.len())),
        };
    }

    if let Some(function) = UnaryFn::from_name(name) {
        return match <[Expr; 1]>::try_from(arguments) {
            Ok([inner]) => Ok(Expr::Unary(function, Box::new(inner))),
            Err(rest) => Err(arity_error(1, rest.len())),
        };
    }

    Err(ExprError::UnknownFunction(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::super::Expr;
    use super::*;

    #[test]
    fn tokenizes_operators_and_literals() {
        let tokens = tokenize("1 + x*2.5e-1").unwrap();
        let kinds: Vec<Token> = tokens.into_iter().map(|(_, token)| token).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Number(1.0),
                Token::Plus,
                Token::Ident("x".to_string()),
                Token::Star,
                Token::Number(0.25),
            ]
        );
    }

    #[test]
    fn euler_identifier_is_not_an_exponent() {
        let tokens = tokenize("2*e").unwrap();
        let kinds: Vec<Token> = tokens.into_iter().map(|(_, token)| token).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Number(2.0),
                Token::Star,
                Token::Ident("e".to_string()),
            ]
        );
    }

    #[test]
    fn builds_expected_tree() {
        assert_eq!(
            parse("x + y*z").unwrap(),
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Mul(
                    Box::new(Expr::Var("y".to_string())),
                    Box::new(Expr::Var("z".to_string())),
                )),
            )
        );
    }

    #[test]
    fn reports_error_positions() {
        match parse("1 + $") {
            Err(ExprError::Parse { position, .. }) => assert_eq!(position, 4),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
