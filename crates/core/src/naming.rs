//! Filter-value normalization.
//!
//! Brand, name, type and country filters are title-cased before they reach
//! the query layer so they line up with the capitalization stored in the
//! reference dataset.

/// Upper-case the first letter of every word in `input`.
///
/// A word starts at the beginning of the string or after a separator. ASCII
/// characters other than letters, digits and `_` are separators; outside
/// ASCII only whitespace separates words. Characters that are not at the
/// start of a word are left untouched, so nothing is ever lower-cased.
///
/// Word starts use the Unicode *titlecase* form, not the uppercase one: the
/// DŽ/LJ/NJ/DZ digraphs become `ǅ`, `ǈ`, `ǋ`, `ǲ`, and a letter whose
/// uppercase form is longer than one character (`ß`, `ﬁ`) is kept as is.
///
/// # Examples
///
/// ```
/// use armory_core::naming::title_case;
///
/// assert_eq!(title_case("glock"), "Glock");
/// assert_eq!(title_case("smith & wesson"), "Smith & Wesson");
/// assert_eq!(title_case("h&k"), "H&K");
/// assert_eq!(title_case("sIG sauer"), "SIG Sauer");
/// ```
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev = ' ';

    for c in input.chars() {
        if is_separator(prev) {
            out.push(to_title(c));
        } else {
            out.push(c);
        }
        prev = c;
    }

    out
}

fn to_title(c: char) -> char {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        }
    }
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    c.is_whitespace()
}
