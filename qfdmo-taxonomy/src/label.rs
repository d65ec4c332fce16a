//! Category label formatting
//!
//! Turns a machine code such as `petit_electromenager_et_usb` into the display
//! label `Petit Electromenager et USB`.

/// Domain abbreviations that are always rendered in upper case
pub const ACRONYMS: &[&str] = &["RFID", "USB", "GPS", "DVD", "CD", "IPL", "WC", "BA13"];

/// French articles and prepositions that are never capitalized
pub const FRENCH_STOP_WORDS: &[&str] = &["et", "de", "du", "pour", "a", "en"];

/// Convert a category code into its display label
///
/// Underscores separate words. Each word is upper-cased if it is a known
/// acronym, kept as-is if it is a French stop word (case-sensitive), and
/// capitalized otherwise. Empty words produced by repeated underscores are
/// dropped.
///
/// # Example
/// ```
/// use qfdmo_taxonomy::format_category_label;
///
/// assert_eq!(
///     format_category_label("gros_electromenager_hors_refrigerant"),
///     "Gros Electromenager Hors Refrigerant"
/// );
/// assert_eq!(format_category_label("lecteur_dvd_et_cd"), "Lecteur DVD et CD");
/// ```
pub fn format_category_label(code: &str) -> String {
    code.replace('_', " ")
        .split_whitespace()
        .map(format_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(word: &str) -> String {
    let upper = word.to_uppercase();
    if ACRONYMS.contains(&upper.as_str()) {
        upper
    } else if FRENCH_STOP_WORDS.contains(&word) {
        word.to_string()
    } else {
        capitalize(word)
    }
}

/// First character upper case, the rest lower case
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
