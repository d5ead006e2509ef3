//! Caesar-cipher rotation over the ASCII alphabet.
//!
//! Each ASCII letter rotates within its own case's 26-letter alphabet;
//! everything else (digits, punctuation, whitespace, Unicode) passes
//! through unchanged, so the transform never changes string length.
//! Total over all strings and shifts — these functions never fail.

/// Shift applied when a request supplies none (or an unparseable one).
pub const DEFAULT_SHIFT: i64 = 3;

/// Rotate every ASCII letter in `text` forward by `shift` positions.
///
/// `shift` is normalized with `rem_euclid(26)` first, so 0, 26, 52 and -26
/// are all the identity and callers never need to pre-normalize.
pub fn encode_caesar(text: &str, shift: i64) -> String {
    let k = shift.rem_euclid(26) as u8;
    text.chars().map(|c| rotate(c, k)).collect()
}

/// Inverse of [`encode_caesar`]: decoding with the same `shift` used to
/// encode always recovers the original text exactly.
pub fn decode_caesar(text: &str, shift: i64) -> String {
    encode_caesar(text, 26 - shift.rem_euclid(26))
}

fn rotate(c: char, k: u8) -> char {
    match c {
        'a'..='z' => (b'a' + (c as u8 - b'a' + k) % 26) as char,
        'A'..='Z' => (b'A' + (c as u8 - b'A' + k) % 26) as char,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vector() {
        assert_eq!(encode_caesar("Attack at Dawn!", 3), "Dwwdfn dw Gdzq!");
    }

    #[test]
    fn decodes_known_vector() {
        assert_eq!(decode_caesar("Dwwdfn dw Gdzq!", 3), "Attack at Dawn!");
    }

    #[test]
    fn round_trips_for_many_shifts() {
        let inputs = ["", "a", "Zebra zigzag", "MiXeD CaSe 123 !?", "ünïcode ☃ stays"];
        for s in inputs {
            for shift in [-53, -26, -1, 0, 1, 3, 13, 25, 26, 27, 52, 1000] {
                assert_eq!(decode_caesar(&encode_caesar(s, shift), shift), s, "shift {shift}");
            }
        }
    }

    #[test]
    fn shift_zero_is_identity() {
        assert_eq!(encode_caesar("Hello, World!", 0), "Hello, World!");
    }

    #[test]
    fn shift_normalizes_modulo_26() {
        for s in ["wrap around xyz XYZ", "abc"] {
            assert_eq!(encode_caesar(s, 3), encode_caesar(s, 29));
            assert_eq!(encode_caesar(s, 3), encode_caesar(s, -23));
            assert_eq!(encode_caesar(s, 26), s);
            assert_eq!(encode_caesar(s, -26), s);
        }
    }

    #[test]
    fn wraps_at_alphabet_end() {
        assert_eq!(encode_caesar("xyz", 3), "abc");
        assert_eq!(encode_caesar("XYZ", 3), "ABC");
    }

    #[test]
    fn preserves_length_and_case() {
        let input = "AbC dEf 123 ☃!";
        let out = encode_caesar(input, 7);
        assert_eq!(out.chars().count(), input.chars().count());
        for (i, o) in input.chars().zip(out.chars()) {
            if i.is_ascii_alphabetic() {
                assert_eq!(i.is_ascii_uppercase(), o.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn non_letters_pass_through_unchanged() {
        let input = "0123456789 ,.;'[]\"<>?! \t\n ünïcode ☃";
        for shift in [1, 7, 25] {
            for (i, o) in input.chars().zip(encode_caesar(input, shift).chars()) {
                if !i.is_ascii_alphabetic() {
                    assert_eq!(i, o);
                }
            }
        }
    }

    #[test]
    fn empty_string_returns_empty() {
        assert_eq!(encode_caesar("", 13), "");
        assert_eq!(decode_caesar("", 13), "");
    }
}
