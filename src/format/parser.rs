//! Percent-style template scanning, `%(Field)s` placeholders only

use super::FormatError;

/// Scan `template` and return the fields its placeholders name, in order of appearance.
///
/// The first problem found left to right is reported. A field is checked as soon as its
/// closing parenthesis is read, before the conversion that follows it.
pub fn parse_template(template: &str, fields: &[&str]) -> Result<Vec<String>, FormatError> {
    let chars: Vec<char> = template.chars().collect();
    let mut referenced = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            i += 1;
            continue;
        }

        let start = i;
        i += 1;
        match chars.get(i) {
            None => return Err(FormatError::IncompleteFormat),
            Some('%') => {
                i += 1;
                continue;
            }
            Some('(') => {}
            Some(_) => return Err(FormatError::UnnamedPlaceholder(start)),
        }

        // Mapping key, parentheses may nest
        i += 1;
        let key_start = i;
        let mut depth = 1;
        while i < chars.len() {
            match chars[i] {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        if depth != 0 {
            return Err(FormatError::IncompleteKey);
        }
        let field: String = chars[key_start..i].iter().collect();
        i += 1;

        if !fields.contains(&field.as_str()) {
            return Err(FormatError::UnknownField(field));
        }

        while matches!(chars.get(i), Some('-' | '+' | ' ' | '#' | '0')) {
            i += 1;
        }

        if chars.get(i) == Some(&'*') {
            return Err(FormatError::StarWidth);
        }
        skip_number(&chars, &mut i).map_err(|_| FormatError::WidthTooBig)?;

        if chars.get(i) == Some(&'.') {
            i += 1;
            if chars.get(i) == Some(&'*') {
                return Err(FormatError::StarWidth);
            }
            skip_number(&chars, &mut i).map_err(|_| FormatError::PrecisionTooBig)?;
        }

        // Length modifiers carry no meaning for text
        if matches!(chars.get(i), Some('h' | 'l' | 'L')) {
            i += 1;
        }

        let Some(&c) = chars.get(i) else {
            return Err(FormatError::IncompleteFormat);
        };
        match c {
            's' | 'r' | 'a' => {}
            'd' | 'i' | 'u' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G' => {
                return Err(FormatError::RealNumberRequired(c));
            }
            'o' | 'x' | 'X' => return Err(FormatError::IntegerRequired(c)),
            'c' => return Err(FormatError::CharRequired),
            _ => return Err(FormatError::UnsupportedCharacter { ch: c, index: i }),
        }
        i += 1;

        referenced.push(field);
    }

    Ok(referenced)
}

/// Skip a run of decimal digits at `*i`. `Err` when the number overflows `usize`.
fn skip_number(chars: &[char], i: &mut usize) -> Result<(), ()> {
    let mut value: usize = 0;
    while let Some(digit) = chars.get(*i).and_then(|c| c.to_digit(10)) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as usize))
            .ok_or(())?;
        *i += 1;
    }
    Ok(())
}
