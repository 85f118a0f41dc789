use std::collections::HashMap;

/// Output attribute a source field can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Username,
    Password,
    Url,
    CardholderName,
    CardNumber,
    Cvc,
    ExpiryDate,
}

lazy_static! {
    // Known field labels across the locales seen in real exports
    // (English and Slovak). All keys are lowercase.
    static ref SYNONYMS: HashMap<&'static str, Target> = {
        let table: &[(&[&str], Target)] = &[
            (&["username", "používateľské meno"], Target::Username),
            (&["password", "prihlasovacie heslo"], Target::Password),
            (&["url", "webová stránka"], Target::Url),
            (&["cardholder name", "držiteľ karty"], Target::CardholderName),
            (&["card number", "cardnumber", "číslo"], Target::CardNumber),
            (&["cvc", "cccvc"], Target::Cvc),
            (&["expiry date", "expirydate", "dátum platnosti"], Target::ExpiryDate),
        ];

        let mut m = HashMap::new();
        for (labels, target) in table {
            for label in labels.iter() {
                m.insert(*label, *target);
            }
        }
        m
    };
}

/// Look up a field label in the synonym table, case-insensitively.
pub fn target_for_label(label: &str) -> Option<Target> {
    SYNONYMS.get(label.to_lowercase().as_str()).copied()
}

/// Fallback for unknown labels: map by the field's type tag. Only fills
/// attributes that are still empty (the caller enforces that).
pub fn target_for_type(type_: &str) -> Option<Target> {
    match type_.to_lowercase().as_str() {
        "username" | "email" => Some(Target::Username),
        "password" => Some(Target::Password),
        _ => None,
    }
}
