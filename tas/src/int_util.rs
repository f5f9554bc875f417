use num::Num;
use std::num::ParseIntError;

/// Parses an integer literal with the customary bases: leading `0x`
/// hex, leading `0` octal, else decimal; a leading `-` is allowed.
pub fn parse_int(text: &str) -> Result<i64, ParseIntError> {
    let (negative, rest) = if text.starts_with('-') {
        (true, &text[1..])
    } else {
        (false, text)
    };

    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    let value = <i64 as Num>::from_str_radix(digits, radix)?;
    Ok(if negative { -value } else { value })
}
