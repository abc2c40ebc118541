//! Base-form detachment for inflected words.

/// Noun then verb detachment rules: (suffix, replacement).
const DETACHMENT_RULES: [(&str, &str); 14] = [
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

/// Candidate base forms of `word`, in rule order, without duplicates.
///
/// The word itself and empty stems are never returned. Whether a candidate
/// is a real word is up to the lexicon.
pub fn base_forms(word: &str) -> Vec<String> {
    let mut forms: Vec<String> = Vec::new();

    for (suffix, replacement) in DETACHMENT_RULES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        let form = format!("{stem}{replacement}");
        if form != word && !forms.contains(&form) {
            forms.push(form);
        }
    }

    forms
}
