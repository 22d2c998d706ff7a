//! Film roll records and their enum-valued fields.
//!
//! Enum fields serialize as their display values - that is the wire
//! representation the hosted backend stores and the UI renders. The
//! symbolic keys live in code and form state; `key()`/`from_display()`
//! plus [`film_enum_table`] bridge the two.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{EnumDef, EnumTable};

/// Film stock type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilmType {
    #[serde(rename = "Black and White")]
    BlackAndWhite,
    #[serde(rename = "Color")]
    Color,
    #[serde(rename = "Slide")]
    Slide,
}

impl FilmType {
    pub const ALL: [FilmType; 3] = [Self::BlackAndWhite, Self::Color, Self::Slide];

    /// Symbolic key used in code and form state.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BlackAndWhite => "black_and_white",
            Self::Color => "color",
            Self::Slide => "slide",
        }
    }

    /// Human-readable display value (the wire representation).
    pub fn display(&self) -> &'static str {
        match self {
            Self::BlackAndWhite => "Black and White",
            Self::Color => "Color",
            Self::Slide => "Slide",
        }
    }

    pub fn from_display(display: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.display() == display)
    }

    pub fn enum_def() -> EnumDef {
        EnumDef::from_pairs(Self::ALL.map(|t| (t.key(), t.display())))
    }
}

impl fmt::Display for FilmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Physical film format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilmFormat {
    #[serde(rename = "35mm")]
    F35mm,
    #[serde(rename = "120")]
    F120,
}

impl FilmFormat {
    pub const ALL: [FilmFormat; 2] = [Self::F35mm, Self::F120];

    /// Symbolic key; prefixed with an underscore since the display
    /// values start with digits.
    pub fn key(&self) -> &'static str {
        match self {
            Self::F35mm => "_35mm",
            Self::F120 => "_120",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::F35mm => "35mm",
            Self::F120 => "120",
        }
    }

    pub fn from_display(display: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.display() == display)
    }

    pub fn enum_def() -> EnumDef {
        EnumDef::from_pairs(Self::ALL.map(|t| (t.key(), t.display())))
    }
}

impl fmt::Display for FilmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Lifecycle event of a roll: acquired, shot, sent off, back from the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilmEvent {
    #[serde(rename = "Acquired")]
    Acquired,
    #[serde(rename = "Used")]
    Used,
    #[serde(rename = "Developed")]
    Developed,
    #[serde(rename = "Received")]
    Received,
}

impl FilmEvent {
    pub const ALL: [FilmEvent; 4] = [Self::Acquired, Self::Used, Self::Developed, Self::Received];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Acquired => "acquired",
            Self::Used => "used",
            Self::Developed => "developed",
            Self::Received => "received",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::Acquired => "Acquired",
            Self::Used => "Used",
            Self::Developed => "Developed",
            Self::Received => "Received",
        }
    }

    pub fn from_display(display: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.display() == display)
    }

    pub fn enum_def() -> EnumDef {
        EnumDef::from_pairs(Self::ALL.map(|t| (t.key(), t.display())))
    }
}

impl fmt::Display for FilmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// One entry in a roll's append-only event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub date: DateTime<Utc>,
    pub event: FilmEvent,
}

/// One catalogued roll of film.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRoll {
    /// Server-assigned row id; 0 until the roll has been persisted.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub brand: String,
    pub film_type: FilmType,
    pub film_format: FilmFormat,
    pub iso: u32,
    pub date_acquired: NaiveDate,
    /// Free-form on the backend (stamped boxes carry anything from
    /// "2007-01" to "exp. 03/1999").
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub source: String,
    #[serde(default)]
    pub event_log: Option<Vec<LogEvent>>,
    #[serde(default)]
    pub dx_code: Option<i64>,
    #[serde(default)]
    pub album_url: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
}

/// The canonical table of recognized enum definitions, indexed by the
/// record field each applies to. This is what callers hand to
/// [`convert_enum_values_to_keys`](crate::enums::convert_enum_values_to_keys).
pub fn film_enum_table() -> EnumTable {
    EnumTable::new()
        .with_field("film_type", FilmType::enum_def())
        .with_field("film_format", FilmFormat::enum_def())
        .with_field("event", FilmEvent::enum_def())
}
