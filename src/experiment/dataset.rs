//! Vaccination records read from `country,date,vaccinations` CSV lines.

use crate::{
    error::{Error, Result},
    record::Record,
};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::debug;

const FIELDS: usize = 3;

/// Records are ordered by country first, then by date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VaccinationKey {
    pub country: String,
    pub date: String,
}

/// The number of vaccinations of a country on a date. The count is empty when it was not reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccination {
    key: VaccinationKey,
    vaccinations: Option<u64>,
}

impl Vaccination {
    pub fn new(country: &str, date: &str, vaccinations: Option<u64>) -> Self {
        Vaccination {
            key: VaccinationKey {
                country: country.to_string(),
                date: date.to_string(),
            },
            vaccinations,
        }
    }

    pub fn country(&self) -> &str {
        &self.key.country
    }

    pub fn date(&self) -> &str {
        &self.key.date
    }

    pub fn vaccinations(&self) -> Option<u64> {
        self.vaccinations
    }

    /// Parse one CSV line. `line` is 1-based and only used for the error.
    pub fn parse_line(text: &str, line: usize) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedRecord { line, reason };

        let fields: Vec<&str> = text.trim_end_matches('\r').split(',').map(str::trim).collect();
        if fields.len() != FIELDS {
            return Err(malformed(format!(
                "expected {} fields, got {}",
                FIELDS,
                fields.len()
            )));
        }

        let (country, date, count) = (fields[0], fields[1], fields[2]);
        if country.is_empty() {
            return Err(malformed("empty country".to_string()));
        }
        if date.is_empty() {
            return Err(malformed("empty date".to_string()));
        }

        let vaccinations = if count.is_empty() {
            None
        } else {
            let count = count
                .parse::<u64>()
                .map_err(|e| malformed(format!("invalid vaccination count {:?}: {}", count, e)))?;
            Some(count)
        };

        Ok(Vaccination::new(country, date, vaccinations))
    }
}

impl Record for Vaccination {
    type Key = VaccinationKey;

    fn key(&self) -> &Self::Key {
        &self.key
    }
}

/// Read every record from the reader, skipping blank lines.
pub fn parse<B: BufRead>(reader: B) -> Result<Vec<Vaccination>> {
    let mut records = Vec::new();

    for (idx, text) in reader.lines().enumerate() {
        let text = text?;
        if text.trim().is_empty() {
            continue;
        }

        records.push(Vaccination::parse_line(&text, idx + 1)?);
    }

    Ok(records)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Vaccination>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = parse(BufReader::new(file))?;

    debug!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}
