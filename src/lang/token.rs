#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Sigil,
    Ident(String),
    Number(i32),
    Comma,
    End,
    Unknown(char),
}

impl Token {
    pub fn is_end(&self) -> bool {
        *self == Token::End
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Sigil => write!(f, "$"),
            Ident(s) => write!(f, "{}", s),
            Number(n) => write!(f, "{}", n),
            Comma => write!(f, ","),
            End => Ok(()),
            Unknown(c) => write!(f, "{}", c),
        }
    }
}
