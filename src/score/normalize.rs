use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Latin letters that carry no canonical decomposition and would otherwise be
/// dropped outright by the ASCII filter.
fn fold_letter(c: char) -> Option<&'static str> {
    Some(match c {
        'ø' | 'Ø' => "o",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ß' => "ss",
        'ł' | 'Ł' => "l",
        'đ' | 'Đ' | 'ð' | 'Ð' => "d",
        'þ' | 'Þ' => "th",
        'ı' => "i",
        _ => return None,
    })
}

/// Canonical join key for a person's name.
///
/// Accents are removed by decomposing to base letters, the result is lowered
/// to ASCII, punctuation is dropped and whitespace runs collapse to one space.
/// `normalize_name("Højgaard") == normalize_name("Hojgaard") == "hojgaard"`.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for c in name.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match fold_letter(c) {
            Some(s) => folded.push_str(s),
            None => folded.push(c),
        }
    }

    let kept: String = folded
        .chars()
        .filter(char::is_ascii)
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized last name: the final whitespace-delimited token of `full_name`.
/// `"J.T. Poston"` and `"Poston"` both give `"poston"`.
#[must_use]
pub fn normalized_surname(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next_back()
        .map(normalize_name)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_insensitive() {
        assert_eq!(normalize_name("Højgaard"), normalize_name("Hojgaard"));
        assert_eq!(normalize_name("Åberg"), "aberg");
        assert_eq!(normalize_name("Nicolai Højgaard"), "nicolai hojgaard");
        assert_eq!(normalize_name("José María Olazábal"), "jose maria olazabal");
    }

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(normalize_name("J.T. Poston"), "jt poston");
        assert_eq!(normalize_name("  O'Hair  "), "ohair");
        assert_eq!(normalize_name("DeChambeau"), "dechambeau");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn idempotent() {
        for name in ["Højgaard", "Ludvig Åberg", "J.T. Poston", "Cam. Young", "ß-Œ"] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn surname_is_last_token() {
        assert_eq!(normalized_surname("Jon Rahm"), "rahm");
        assert_eq!(normalized_surname("J. Rahm"), "rahm");
        assert_eq!(normalized_surname("J.T. Poston"), "poston");
        assert_eq!(normalized_surname("R. Højgaard"), "hojgaard");
        assert_eq!(normalized_surname("Bezuidenhout"), "bezuidenhout");
        assert_eq!(normalized_surname("   "), "");
    }
}
