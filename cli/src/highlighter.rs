use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;
use logos::Logos;

fn style_for(token: Result<Token, ()>) -> Style {
    match token {
        Ok(Token::Number) => Style::new().fg(Color::Cyan),
        Ok(Token::Operator) => Style::new().fg(Color::Magenta),
        Ok(Token::LParen) | Ok(Token::RParen) => Style::new().fg(Color::White),
        Ok(Token::Other) | Err(_) => Style::new().fg(Color::Red),
    }
}

/// Colours numbers, operators and parentheses; anything else shows in red.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token, span) in Token::lexer(line).spanned() {
            if span.start > curr_end {
                output.push((Style::new(), line[curr_end..span.start].to_string()));
            }
            output.push((style_for(token), line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new(), line[curr_end..].to_string()));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reedline::Highlighter as _;

    #[test]
    fn test_highlight_preserves_text() {
        let line = "  + 1 (* -2 x)  ";
        let styled = Highlighter.highlight(line, 0);
        let text: String = styled.buffer.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(text, line);
    }

    #[test]
    fn test_highlight_styles() {
        let styled = Highlighter.highlight("+ 12", 0);
        assert_eq!(
            styled.buffer,
            vec![
                (Style::new().fg(Color::Magenta), "+".to_string()),
                (Style::new(), " ".to_string()),
                (Style::new().fg(Color::Cyan), "12".to_string()),
            ]
        );
    }
}
