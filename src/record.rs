use serde::Serialize;

/// Folder assigned to every converted record, so imports are easy to spot.
pub const FOLDER_MARKER: &str = "imported_from_enpass";

/// One row of the NordPass import CSV. Field declaration order is the
/// column order NordPass expects; `zipcode` has no Enpass counterpart and
/// stays empty.
#[derive(Serialize, Debug, Default)]
pub struct Record {
    pub name: String,
    pub url: String,
    pub username: String,
    pub password: String,
    pub note: String,
    pub folder: String,
    pub cardholdername: String,
    pub cardnumber: String,
    pub cvc: String,
    pub expirydate: String,
    pub zipcode: String,
}

impl Record {
    pub fn new(name: &str, note: &str) -> Record {
        Record {
            name: name.to_string(),
            note: note.to_string(),
            folder: FOLDER_MARKER.to_string(),
            ..Default::default()
        }
    }
}
