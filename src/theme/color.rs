use thiserror::Error;

/// Recognised shapes of a palette value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSyntax {
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
    Hex,
    /// `rgb(...)`, `hsl(...)`, `oklch(...)`, `color-mix(...)`, gradients
    Function,
    /// Bare channel list such as `222.2 84% 4.9%`, consumed as `hsl(var(--x))`
    Channels,
    /// Named colors and keywords: `transparent`, `rebeccapurple`, `currentColor`
    Keyword,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color value is empty")]
    Empty,
    #[error("color value contains forbidden character {0:?}")]
    ForbiddenChar(char),
    #[error("color value has unbalanced parentheses")]
    UnbalancedParens,
    #[error("unrecognised color syntax `{0}`")]
    Unrecognised(String),
}

const CHANNEL_UNITS: [&str; 5] = ["", "%", "deg", "rad", "turn"];
const COLOR_FUNCTIONS: [&str; 12] = [
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color", "color-mix",
    "var",
];

/// Classify a palette value, rejecting anything that could escape a
/// `--name: value;` declaration.
pub fn classify_color(value: &str) -> Result<ColorSyntax, ColorError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(c) = value.chars().find(|c| !is_color_char(*c)) {
        return Err(ColorError::ForbiddenChar(c));
    }
    if !parens_balanced(value) {
        return Err(ColorError::UnbalancedParens);
    }

    if let Some(digits) = value.strip_prefix('#') {
        if matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Ok(ColorSyntax::Hex);
        }
        return Err(ColorError::Unrecognised(value.to_string()));
    }

    if let Some(open) = value.find('(') {
        let name = &value[..open];
        if !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
            && value.ends_with(')')
            && function_names(value).all(|name| name.is_empty() || is_color_function(name))
        {
            return Ok(ColorSyntax::Function);
        }
        return Err(ColorError::Unrecognised(value.to_string()));
    }

    if value
        .split(|c: char| c.is_ascii_whitespace() || c == '/')
        .filter(|token| !token.is_empty())
        .all(is_channel_token)
    {
        return Ok(ColorSyntax::Channels);
    }

    if value.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        return Ok(ColorSyntax::Keyword);
    }

    Err(ColorError::Unrecognised(value.to_string()))
}

fn is_color_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '#' | '%' | '.' | ',' | '/' | '(' | ')' | '+' | '-')
}

fn is_color_function(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    COLOR_FUNCTIONS.contains(&name.as_str()) || name.ends_with("-gradient")
}

/// Identifier in front of every `(`, including nested calls. Empty for bare
/// grouping parentheses.
fn function_names(value: &str) -> impl Iterator<Item = &str> {
    value.match_indices('(').map(move |(open, _)| {
        let head = &value[..open];
        let start = head
            .rfind(|c: char| !(c.is_ascii_alphabetic() || c == '-'))
            .map_or(0, |index| index + 1);
        &head[start..]
    })
}

fn parens_balanced(value: &str) -> bool {
    let mut depth = 0usize;
    for c in value.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

fn is_channel_token(token: &str) -> bool {
    let body = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token);
    let numeric_len = body
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(body.len());
    let (number, unit) = body.split_at(numeric_len);

    number.chars().any(|c| c.is_ascii_digit())
        && number.matches('.').count() <= 1
        && CHANNEL_UNITS.contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_color_recognises_hex_forms() {
        for value in ["#fff", "#ffff", "#FF0000", "#ff000080"] {
            assert_eq!(classify_color(value), Ok(ColorSyntax::Hex), "{value}");
        }
        assert!(classify_color("#ff000").is_err());
        assert!(classify_color("#fffff").is_err());
        assert!(classify_color("#gggggg").is_err());
    }

    #[test]
    fn classify_color_recognises_functional_notation() {
        for value in [
            "rgb(10, 20, 30)",
            "rgba(1, 2, 3, 0.4)",
            "hsl(222.2 84% 4.9%)",
            "oklch(0.7 0.1 250 / 50%)",
            "color-mix(in srgb, red 40%, blue)",
            "linear-gradient(135deg, #161718 0%, #191A1B 100%)",
        ] {
            assert_eq!(classify_color(value), Ok(ColorSyntax::Function), "{value}");
        }
    }

    #[test]
    fn classify_color_recognises_channel_triples() {
        for value in ["222.2 84% 4.9%", "0 0% 100%", "210 40% 98% / 0.5", "-1.5deg 10% 20%"] {
            assert_eq!(classify_color(value), Ok(ColorSyntax::Channels), "{value}");
        }
        assert_eq!(classify_color("0"), Ok(ColorSyntax::Channels));
    }

    #[test]
    fn classify_color_recognises_keywords() {
        for value in ["transparent", "rebeccapurple", "currentColor"] {
            assert_eq!(classify_color(value), Ok(ColorSyntax::Keyword), "{value}");
        }
    }

    #[test]
    fn classify_color_rejects_declaration_breakouts() {
        assert_eq!(
            classify_color("red; background: url(x)"),
            Err(ColorError::ForbiddenChar(';'))
        );
        assert_eq!(
            classify_color("}</style><script>alert(1)</script>"),
            Err(ColorError::ForbiddenChar('}'))
        );
        assert_eq!(classify_color("red /* x */"), Err(ColorError::ForbiddenChar('*')));
        assert_eq!(classify_color("\"red\""), Err(ColorError::ForbiddenChar('"')));
        assert_eq!(classify_color("red\nblue"), Err(ColorError::ForbiddenChar('\n')));
        assert_eq!(classify_color("rgb(1, 2, 3"), Err(ColorError::UnbalancedParens));
        assert_eq!(classify_color("rgb(1, 2, 3))"), Err(ColorError::UnbalancedParens));
        assert_eq!(classify_color(""), Err(ColorError::Empty));
    }

    #[test]
    fn classify_color_rejects_non_color_functions() {
        for value in [
            "url(//evil.example/p.gif)",
            "URL(x)",
            "image-set(a 1x)",
            "linear-gradient(red, url(x))",
            "rgb(calc(1) 2 3)",
        ] {
            assert_eq!(
                classify_color(value),
                Err(ColorError::Unrecognised(value.to_string())),
                "{value}"
            );
        }
        assert_eq!(
            classify_color("rgb(var(--brand-r) 20 30)"),
            Ok(ColorSyntax::Function)
        );
        assert_eq!(
            classify_color("-webkit-linear-gradient(top, #fff, #000)"),
            Ok(ColorSyntax::Function)
        );
        assert_eq!(classify_color("RGB(1, 2, 3)"), Ok(ColorSyntax::Function));
    }

    #[test]
    fn classify_color_rejects_unknown_shapes() {
        assert!(classify_color("12px solid").is_err());
        assert!(classify_color("(1 2 3)").is_err());
        assert!(classify_color("1.2.3").is_err());
    }
}
