use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"-?[0-9]+")]
    Number,

    #[regex(r"[+\-*/%]")]
    Operator,

    // Anything the grammar has no use for.
    #[regex(r"[^ \t\r\n\f()0-9+\-*/%]+")]
    Other,
}

/// Number of parentheses left open at the end of `buffer`.
///
/// Stray closing parentheses never make the depth negative; the parser
/// reports those.
pub fn open_depth(buffer: &str) -> usize {
    let mut depth: usize = 0;

    for token in Token::lexer(buffer) {
        match token {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth = depth.saturating_sub(1),
            Ok(_) | Err(_) => {}
        }
    }

    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Token::lexer(input).filter_map(Result::ok).collect()
    }

    #[test]
    fn test_tokens() {
        assert_eq!(
            tokens("+ 1 (* -2 3)"),
            vec![
                Token::Operator,
                Token::Number,
                Token::LParen,
                Token::Operator,
                Token::Number,
                Token::Number,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_minus_alone_is_operator() {
        assert_eq!(tokens("- 5"), vec![Token::Operator, Token::Number]);
        assert_eq!(tokens("abc"), vec![Token::Other]);
    }

    #[test]
    fn test_open_depth() {
        assert_eq!(open_depth("+ 1 2"), 0);
        assert_eq!(open_depth("+ (* 2"), 1);
        assert_eq!(open_depth("+ (* 2 (- 3"), 2);
        assert_eq!(open_depth("+ (* 2 3)"), 0);
        assert_eq!(open_depth("+ 1))"), 0);
    }
}
