//! Code table tests against the international Morse standard

use rust_cw_beacon::code::{decode_pattern, lookup, Code, Symbol, CODE_TABLE};

const ITU: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

#[test]
fn test_every_entry_matches_standard() {
    for &(c, expected) in ITU {
        assert_eq!(Code(lookup(c)).to_string(), expected, "wrong code for {}", c);
    }
}

#[test]
fn test_table_has_exactly_36_entries() {
    let table: Vec<(char, String)> = CODE_TABLE
        .entries()
        .map(|(c, code)| (c, Code(code).to_string()))
        .collect();
    let expected: Vec<(char, String)> = ITU.iter().map(|&(c, s)| (c, s.to_string())).collect();
    assert_eq!(table, expected);
}

#[test]
fn test_lowercase_matches_uppercase() {
    assert_eq!(lookup('a'), lookup('A'));
    assert_eq!(lookup('z'), lookup('Z'));
}

#[test]
fn test_punctuation_has_no_code() {
    for c in "!?.,;:'\"/()-+=@&_$".chars() {
        assert!(lookup(c).is_empty(), "{:?} should be unsupported", c);
    }
}

/// Parse dot/dash text into symbols.
fn pattern(text: &str) -> Vec<Symbol> {
    text.chars()
        .map(|c| Symbol::from_char(c).expect("only . and - in the table"))
        .collect()
}

#[test]
fn test_reverse_lookup_covers_table() {
    for &(c, expected) in ITU {
        assert_eq!(decode_pattern(lookup(c)), Some(c));
        assert_eq!(decode_pattern(&pattern(expected)), Some(c));
    }
}

#[test]
fn test_unknown_pattern_has_no_letter() {
    assert_eq!(decode_pattern(&pattern("......")), None);
    assert_eq!(decode_pattern(&pattern(".-.-.-")), None);
    assert_eq!(decode_pattern(&[]), None);
}

#[test]
fn test_symbol_text_round_trips() {
    for symbol in [Symbol::Dot, Symbol::Dash] {
        assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
    }
    assert_eq!(Symbol::from_char(' '), None);
}
