use crate::item::{Export, Field, Item};
use crate::mapping::{self, Target};
use crate::record::Record;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    // Optional scheme, dotted domain, 2-6 letter extension, optional path.
    static ref URL_OR_DOMAIN: Regex = Regex::new(
        r"(?i)^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*$"
    )
    .expect("invalid URL pattern");
}

/// Whether `s` looks like a URL or a bare domain.
pub fn is_url_or_domain(s: &str) -> bool {
    URL_OR_DOMAIN.is_match(s)
}

/// Convert the Enpass JSON export at `source` into a NordPass CSV at
/// `dest`, overwriting it. Returns the number of rows written.
pub fn convert(source: &Path, dest: &Path) -> Result<usize> {
    if !source.exists() {
        bail!("'{}' does not exist", source.display());
    }

    let contents = fs::read_to_string(source)
        .with_context(|| format!("could not read '{}'", source.display()))?;
    let export: Export = serde_json::from_str(&contents)
        .with_context(|| format!("could not parse '{}'", source.display()))?;

    if export.items.is_empty() {
        bail!("'{}' contains no items", source.display());
    }

    let records: Vec<Record> = export.items.iter().map(map_item).collect();

    let mut writer = csv::Writer::from_path(dest)
        .with_context(|| format!("could not create '{}'", dest.display()))?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Build one output row from a source item.
fn map_item(item: &Item) -> Record {
    let mut record = Record::new(&item.title, &item.note);

    for field in &item.fields {
        match mapping::target_for_label(&field.label) {
            Some(target) => assign(&mut record, target, field, true),
            None => {
                if let Some(target) = field.type_.as_deref().and_then(mapping::target_for_type) {
                    assign(&mut record, target, field, false);
                }
            }
        }
    }

    if record.url.is_empty() && is_url_or_domain(&item.title) {
        record.url = item.title.clone();
    }

    record
}

fn assign(record: &mut Record, target: Target, field: &Field, overwrite: bool) {
    let slot = match target {
        Target::Username => &mut record.username,
        Target::Password => &mut record.password,
        Target::Url => &mut record.url,
        Target::CardholderName => &mut record.cardholdername,
        Target::CardNumber => &mut record.cardnumber,
        Target::Cvc => &mut record.cvc,
        Target::ExpiryDate => &mut record.expirydate,
    };

    if !overwrite && !slot.is_empty() {
        return;
    }

    *slot = match target {
        Target::Password => field.latest_value().to_string(),
        _ => field.value.clone(),
    };
}
