use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::JournalError;

/// A calendar day in local time, the canonical key for entry buckets.
///
/// Serialized as `YYYY-MM-DD`. Old blobs carry US-locale `MM/DD/YYYY`
/// strings; those are accepted on read and rewritten canonically on the
/// next save. The legacy form is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        // Legacy US-locale form found in pre-canonical blobs
        if let Ok(date) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
            return Ok(Self(date));
        }
        Err(JournalError::Api(format!("Invalid date: {}", s)))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A single journal entry, immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    #[serde(rename = "date")]
    pub day: DayKey,
    // Empty means "no image"; the fallback reference is applied at render
    // time and never persisted.
    #[serde(rename = "imageUrl", alias = "imgUrl", default)]
    pub image_url: String,
    pub rating: f32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn from_draft(draft: EntryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            day: draft.day,
            image_url: draft.image_url,
            rating: draft.rating,
            categories: draft.categories,
            description: draft.description,
            created_at: Utc::now(),
        }
    }
}

/// A not-yet-persisted entry: everything but the id, which is assigned
/// at save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(rename = "date")]
    pub day: DayKey,
    #[serde(rename = "imageUrl", alias = "imgUrl", default)]
    pub image_url: String,
    pub rating: f32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl EntryDraft {
    /// Reject drafts that must not reach the store. Failure leaves the
    /// store untouched.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.image_url.is_empty() {
            return Err(JournalError::Api(
                "An image is required before saving".to_string(),
            ));
        }
        if !(0.0..=5.0).contains(&self.rating) || self.rating.is_nan() {
            return Err(JournalError::Api(format!(
                "Rating must be between 0 and 5, got {}",
                self.rating
            )));
        }
        Ok(())
    }
}
