//! Two small parsers driven by a [`Stack`]: a delimiter matcher and an
//! infix-to-postfix (reverse Polish) converter.

use tracing::debug;

use crate::error::{Error, Result};
use crate::stack::Stack;

fn opener_for(closer: char) -> Option<char> {
    match closer {
        '}' => Some('{'),
        ')' => Some('('),
        ']' => Some('['),
        '>' => Some('<'),
        _ => None,
    }
}

/// Whether every `{`, `(`, `[` and `<` in `expr` is closed by its partner in
/// the right order, with nothing left open. Any other character is ignored.
///
/// # Examples
///
/// ```
/// use classic_collections::parse::check_delimiters;
///
/// assert!(check_delimiters("[{()} [] (<> <>) {}]"));
/// assert!(!check_delimiters("[ ( ] )"));
/// ```
pub fn check_delimiters(expr: &str) -> bool {
    let mut open = Stack::new();
    for c in expr.chars() {
        match c {
            '{' | '(' | '[' | '<' => open.push(c),
            _ => {
                let Some(expected) = opener_for(c) else {
                    continue;
                };
                if open.pop().ok() != Some(expected) {
                    debug!(position = open.len(), "mismatched closing delimiter");
                    return false;
                }
            }
        }
    }
    open.is_empty()
}

/// Binding strength of an operator; `(` binds weakest so nothing pops it.
fn precedence(op: char) -> u8 {
    match op {
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

/// Converts a whitespace-separated infix expression into postfix form.
///
/// Operands are alphanumeric tokens; `+ - * /` are left-associative with the
/// usual precedence and parentheses group.
///
/// # Examples
///
/// ```
/// use classic_collections::{parse::infix_to_postfix, Error};
///
/// assert_eq!(infix_to_postfix("1 * ( 2 + 3 ) * 4").unwrap(), "1 2 3 + * 4 *");
/// assert_eq!(infix_to_postfix("( 1 + 2"), Err(Error::UnbalancedParentheses));
/// ```
pub fn infix_to_postfix(expr: &str) -> Result<String> {
    let mut operators: Stack<char> = Stack::new();
    let mut postfix: Vec<String> = Vec::new();

    for token in expr.split_whitespace() {
        match token {
            "(" => operators.push('('),
            ")" => loop {
                match operators.pop() {
                    Ok('(') => break,
                    Ok(op) => postfix.push(op.to_string()),
                    Err(_) => {
                        debug!(expr, "`)` without a matching `(`");
                        return Err(Error::UnbalancedParentheses);
                    }
                }
            },
            "+" | "-" | "*" | "/" => {
                let op = token.chars().next().ok_or_else(|| unexpected(token))?;
                while let Some(&top) = operators.peek() {
                    if precedence(top) < precedence(op) {
                        break;
                    }
                    operators.pop()?;
                    postfix.push(top.to_string());
                }
                operators.push(op);
            }
            _ if token.chars().all(|c| c.is_ascii_alphanumeric()) => {
                postfix.push(token.to_string());
            }
            _ => return Err(unexpected(token)),
        }
    }

    while let Ok(op) = operators.pop() {
        if op == '(' {
            debug!(expr, "`(` never closed");
            return Err(Error::UnbalancedParentheses);
        }
        postfix.push(op.to_string());
    }

    Ok(postfix.join(" "))
}

fn unexpected(token: &str) -> Error {
    debug!(token, "unexpected token");
    Error::UnexpectedToken(token.to_string())
}
