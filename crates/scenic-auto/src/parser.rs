use crate::ast::*;
use crate::error::ScenarioError;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    String(String),
    Number(i64),
    LParen,
    RParen,
    Comma,
    Newline,
}

#[derive(Debug, Clone)]
struct Located {
    token: Token,
    line: usize,
}

fn tokenize(source: &str) -> Result<Vec<Located>, ScenarioError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1usize;

    while let Some(&ch) = chars.peek() {
        match ch {
            '#' => {
                // Skip comment to end of line
                while let Some(&c) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '\n' => {
                chars.next();
                // Only push Newline if the last token wasn't already a Newline
                if tokens
                    .last()
                    .map_or(true, |t: &Located| t.token != Token::Newline)
                {
                    tokens.push(Located {
                        token: Token::Newline,
                        line,
                    });
                }
                line += 1;
            }
            ' ' | '\t' | '\r' => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Located {
                    token: Token::LParen,
                    line,
                });
            }
            ')' => {
                chars.next();
                tokens.push(Located {
                    token: Token::RParen,
                    line,
                });
            }
            ',' => {
                chars.next();
                tokens.push(Located {
                    token: Token::Comma,
                    line,
                });
            }
            '"' | '\'' => {
                let quote = ch;
                chars.next();
                let mut s = String::new();
                loop {
                    match chars.peek() {
                        Some(&'\\') => {
                            chars.next();
                            match chars.next() {
                                Some('n') => s.push('\n'),
                                Some('t') => s.push('\t'),
                                Some('\\') => s.push('\\'),
                                Some(c) if c == quote => s.push(c),
                                Some(c) => {
                                    s.push('\\');
                                    s.push(c);
                                }
                                None => {
                                    return Err(ScenarioError::Parse {
                                        message: "Unterminated string".to_string(),
                                        line,
                                    })
                                }
                            }
                        }
                        Some(&c) if c == quote => {
                            chars.next();
                            break;
                        }
                        Some(&'\n') | None => {
                            return Err(ScenarioError::Parse {
                                message: "Unterminated string".to_string(),
                                line,
                            })
                        }
                        Some(_) => {
                            s.push(chars.next().unwrap());
                        }
                    }
                }
                tokens.push(Located {
                    token: Token::String(s),
                    line,
                });
            }
            c if c.is_ascii_digit()
                || (c == '-' && chars.clone().nth(1).map_or(false, |n| n.is_ascii_digit())) =>
            {
                let mut num_str = String::new();
                if c == '-' {
                    num_str.push('-');
                    chars.next();
                }
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        num_str.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let n: i64 = num_str.parse().map_err(|_| ScenarioError::Parse {
                    message: format!("Invalid number: {}", num_str),
                    line,
                })?;
                tokens.push(Located {
                    token: Token::Number(n),
                    line,
                });
            }
            c if c.is_ascii_alphanumeric() || c == '_' => {
                let mut ident = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Located {
                    token: Token::Ident(ident),
                    line,
                });
            }
            _ => {
                return Err(ScenarioError::Parse {
                    message: format!("Unexpected character: '{}'", ch),
                    line,
                });
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Located>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Located>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.tokens.last().map_or(1, |t| t.line), |t| t.line)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn advance(&mut self) -> Option<&Token> {
        let t = self.tokens.get(self.pos).map(|t| &t.token);
        self.pos += 1;
        t
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ScenarioError> {
        let line = self.current_line();
        match self.advance() {
            Some(t) if t == expected => Ok(()),
            Some(t) => Err(ScenarioError::Parse {
                message: format!("Expected {:?}, got {:?}", expected, t),
                line,
            }),
            None => Err(ScenarioError::Parse {
                message: format!("Expected {:?}, got end of input", expected),
                line,
            }),
        }
    }

    fn skip_newlines(&mut self) {
        while self.peek() == Some(&Token::Newline) {
            self.advance();
        }
    }

    fn parse_script(&mut self) -> Result<Script, ScenarioError> {
        let mut commands = Vec::new();
        self.skip_newlines();

        while self.pos < self.tokens.len() {
            self.skip_newlines();
            if self.pos >= self.tokens.len() {
                break;
            }
            commands.push(self.parse_command_call()?);
            self.skip_newlines();
        }

        Ok(Script { commands })
    }

    fn parse_command_call(&mut self) -> Result<CommandCall, ScenarioError> {
        let line = self.current_line();
        let name = match self.advance() {
            Some(Token::Ident(s)) => s.clone(),
            Some(other) => {
                return Err(ScenarioError::Parse {
                    message: format!("Expected command name, got {:?}", other),
                    line,
                })
            }
            None => {
                return Err(ScenarioError::Parse {
                    message: "Expected command name".to_string(),
                    line,
                })
            }
        };

        // Commands without parens (bare commands like launch)
        if self.peek() != Some(&Token::LParen) {
            return Ok(CommandCall {
                name,
                args: vec![],
                line,
            });
        }

        self.expect(&Token::LParen)?;
        let mut args = Vec::new();

        if self.peek() != Some(&Token::RParen) {
            args.push(self.parse_expression()?);
            while self.peek() == Some(&Token::Comma) {
                self.advance();
                args.push(self.parse_expression()?);
            }
        }

        self.expect(&Token::RParen)?;
        Ok(CommandCall { name, args, line })
    }

    fn parse_expression(&mut self) -> Result<Expression, ScenarioError> {
        let line = self.current_line();
        match self.advance() {
            Some(Token::String(s)) => Ok(Expression::String(s.clone())),
            Some(Token::Number(n)) => Ok(Expression::Number(*n)),
            Some(other) => Err(ScenarioError::Parse {
                message: format!("Expected string or number, got {:?}", other),
                line,
            }),
            None => Err(ScenarioError::Parse {
                message: "Expected argument, got end of input".to_string(),
                line,
            }),
        }
    }
}

/// Parses a scenario source into a [`Script`].
pub fn parse(source: &str) -> Result<Script, ScenarioError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser::new(tokens);
    parser.parse_script()
}
