use serde::Deserialize;

/// Top-level Enpass JSON export. A missing `items` key is a parse error.
#[derive(Deserialize, Debug)]
pub struct Export {
    pub items: Vec<Item>,
}

#[derive(Deserialize, Debug)]
pub struct Item {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Deserialize, Debug)]
pub struct Field {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// One prior value of a field. Enpass keeps these oldest-first.
#[derive(Deserialize, Debug)]
pub struct HistoryEntry {
    #[serde(default)]
    pub value: String,
}

impl Field {
    /// The current value, falling back to the most recent history entry.
    pub fn latest_value(&self) -> &str {
        if !self.value.is_empty() {
            &self.value
        } else {
            self.history.last().map(|h| h.value.as_str()).unwrap_or("")
        }
    }
}
