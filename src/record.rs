//! Parsed road records and field selection.
//!
//! A [`Record`] is one row of the source table. Records are created once by
//! the parser and never mutated afterwards; aggregators address their fields
//! through [`Field`] instead of reaching into the struct directly.

use std::fmt;

/// One road-naming entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    district: String,
    road_name: String,
    province: String,
    place_name: String,
    note: String,
}

impl Record {
    /// Build a record, returning `None` when a required field is blank.
    ///
    /// `district`, `road_name`, `province` and `place_name` must be
    /// non-empty after trimming; `note` may be empty.
    pub fn new(
        district: impl Into<String>,
        road_name: impl Into<String>,
        province: impl Into<String>,
        place_name: impl Into<String>,
        note: impl Into<String>,
    ) -> Option<Self> {
        let record = Self {
            district: district.into().trim().to_string(),
            road_name: road_name.into().trim().to_string(),
            province: province.into().trim().to_string(),
            place_name: place_name.into().trim().to_string(),
            note: note.into().trim().to_string(),
        };

        let required = [
            &record.district,
            &record.road_name,
            &record.province,
            &record.place_name,
        ];
        if required.iter().any(|value| value.is_empty()) {
            return None;
        }

        Some(record)
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    /// Deduplication key
    pub fn road_name(&self) -> &str {
        &self.road_name
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn place_name(&self) -> &str {
        &self.place_name
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Read a field by selector
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::District => &self.district,
            Field::RoadName => &self.road_name,
            Field::Province => &self.province,
            Field::PlaceName => &self.place_name,
            Field::Note => &self.note,
        }
    }
}

/// Positional column of the source table.
///
/// The discriminant order is the column order in the table: district, road,
/// province, place, note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    District,
    RoadName,
    Province,
    PlaceName,
    Note,
}

impl Field {
    /// All columns in table order
    pub const ALL: [Field; 5] = [
        Field::District,
        Field::RoadName,
        Field::Province,
        Field::PlaceName,
        Field::Note,
    ];

    /// Column index in the source table
    pub fn column_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::District => "district",
            Field::RoadName => "road_name",
            Field::Province => "province",
            Field::PlaceName => "place_name",
            Field::Note => "note",
        };
        write!(f, "{}", name)
    }
}
