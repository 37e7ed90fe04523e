//! Rewrites a raw equation string into a canonical expression string ready for parsing.
//!
//! The canonical form has no whitespace and no `y =` prefix, uses `**` as the power operator,
//! and spells out implicit multiplication between a coefficient and a following name (`2x`
//! becomes `2*x`). No numeric evaluation happens here.

use crate::parser::error::{kind, Error};

/// Normalizes the given raw equation into a canonical expression string.
///
/// An equation may contain at most one `=`; when present, the right-hand side is kept as the
/// working expression, so `y = x^2` and `x^2` normalize identically. More than one `=` is an
/// error pointing at the second occurrence.
///
/// Normalization is idempotent: canonical strings pass through unchanged.
pub fn normalize(raw: &str) -> Result<String, Error> {
    let stripped = raw.chars().filter(|c| !c.is_whitespace()).collect::<String>();

    let expr = match stripped.matches('=').count() {
        0 => stripped.as_str(),
        1 => stripped.split('=').nth(1).unwrap(),
        _ => {
            let (second_eq, _) = raw.match_indices('=').nth(1).unwrap();
            return Err(Error::new(vec![second_eq..second_eq + 1], kind::MultipleEquals));
        },
    };

    let expr = expr.replace('^', "**");

    // insert explicit multiplication between a digit and an immediately following letter, in a
    // single left-to-right scan; letter-digit and letter-letter pairs are left alone, so `x2`
    // stays one (unknown) identifier
    let mut canonical = String::with_capacity(expr.len());
    let mut chars = expr.chars().peekable();
    while let Some(c) = chars.next() {
        canonical.push(c);
        if c.is_ascii_digit() && chars.peek().is_some_and(|next| next.is_ascii_alphabetic()) {
            canonical.push('*');
        }
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn strips_whitespace_and_prefix() {
        assert_eq!(normalize("y = x ^ 2").unwrap(), "x**2");
    }

    #[test]
    fn bare_expression_accepted() {
        assert_eq!(normalize("x^2").unwrap(), "x**2");
    }

    #[test]
    fn keeps_right_hand_side() {
        assert_eq!(normalize("f = 1/x").unwrap(), "1/x");
    }

    #[test]
    fn rejects_multiple_equals() {
        let err = normalize("y=sin(x)=1").unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::MultipleEquals>().is_some());
        assert_eq!(err.spans, vec![8..9]);
    }

    #[test]
    fn implicit_coefficient() {
        assert_eq!(normalize("2x").unwrap(), "2*x");
    }

    #[test]
    fn implicit_coefficient_multi_digit() {
        assert_eq!(normalize("12x").unwrap(), "12*x");
    }

    #[test]
    fn implicit_coefficient_before_function() {
        assert_eq!(normalize("2sin(x)").unwrap(), "2*sin(x)");
    }

    #[test]
    fn no_insertion_after_letter() {
        assert_eq!(normalize("x2").unwrap(), "x2");
    }

    #[test]
    fn idempotent_on_canonical_input() {
        let canonical = normalize("y = 2x^2 + 3 sin(x)").unwrap();
        assert_eq!(normalize(&canonical).unwrap(), canonical);
    }

    #[test]
    fn empty_right_hand_side_is_empty() {
        // the parser rejects the empty expression afterwards
        assert_eq!(normalize("y=").unwrap(), "");
    }
}
