//! Diacritic folding for school-name matching.
//!
//! Maps Slovak accented characters to their base Latin equivalents so that
//! autocomplete matching tolerates missing or extra diacritics. Uppercase
//! accented letters fold to the lowercase base letter; unmapped characters
//! pass through unchanged. The fold is used only to widen matching, never
//! to mutate stored data.

/// Folds Slovak diacritics in `term` to base Latin characters.
///
/// Deterministic, total and idempotent; ASCII strings are fixed points.
pub fn fold_diacritics(term: &str) -> String {
    term.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'ä' => 'a',
        'č' => 'c',
        'ď' => 'd',
        'é' => 'e',
        'í' => 'i',
        'ĺ' | 'ľ' => 'l',
        'ň' => 'n',
        'ó' | 'ô' => 'o',
        'ŕ' => 'r',
        'š' => 's',
        'ť' => 't',
        'ú' => 'u',
        'ý' => 'y',
        'ž' => 'z',
        'Á' | 'Ǎ' | 'Ä' => 'a',
        'Č' => 'c',
        'Ď' => 'd',
        'É' => 'e',
        'Í' => 'i',
        'Ĺ' | 'Ľ' => 'l',
        'Ň' => 'n',
        'Ó' | 'Ô' => 'o',
        'Ŕ' => 'r',
        'Š' => 's',
        'Ť' => 't',
        'Ú' => 'u',
        'Ý' => 'y',
        'Ž' => 'z',
        other => other,
    }
}
