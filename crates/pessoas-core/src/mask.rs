//! Display masks for Brazilian identifiers.
//!
//! Values are always stored and transmitted as bare digits; the masks only
//! exist for display and edit staging. Masks are progressive so partially
//! typed input is punctuated as far as it goes.

/// Digits in a CPF (individual taxpayer id).
pub const CPF_DIGITS: usize = 11;
/// Digits in a CEP (postal code).
pub const CEP_DIGITS: usize = 8;

/// Remove everything that is not an ASCII digit.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format a CPF as `000.000.000-00`. Digits past the eleventh are dropped.
pub fn format_cpf(input: &str) -> String {
    let mut out = String::with_capacity(CPF_DIGITS + 3);
    for (i, digit) in strip_non_digits(input).chars().take(CPF_DIGITS).enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(digit);
    }
    out
}

/// Format a CEP as `00000-000`. Digits past the eighth are dropped.
pub fn format_cep(input: &str) -> String {
    let mut out = String::with_capacity(CEP_DIGITS + 1);
    for (i, digit) in strip_non_digits(input).chars().take(CEP_DIGITS).enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(digit);
    }
    out
}
