// Stored individual records
//
// Individuals are owned by the record-management side of the system; this
// crate only reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recorded sex of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Gender {
    /// One-letter badge used by the charts
    pub fn badge(&self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
            Gender::Unknown => 'U',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// A parental slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Sire,
    Dam,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Sire, Side::Dam];

    /// Gender a parent in this slot is expected to have
    pub fn expected_gender(&self) -> Gender {
        match self {
            Side::Sire => Gender::Male,
            Side::Dam => Gender::Female,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Sire => f.write_str("sire"),
            Side::Dam => f.write_str("dam"),
        }
    }
}

/// A tracked animal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub id: String,
    pub name: String,
    /// Free-text genetic line label
    #[serde(default)]
    pub morph: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, alias = "image_url")]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub sire_id: Option<String>,
    #[serde(default)]
    pub dam_id: Option<String>,
    /// Fallback father name, meaningful only without `sire_id`
    #[serde(default)]
    pub sire_name: Option<String>,
    /// Fallback mother name, meaningful only without `dam_id`
    #[serde(default)]
    pub dam_name: Option<String>,
}

impl Individual {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            morph: String::new(),
            gender: Gender::Unknown,
            image_ref: None,
            sire_id: None,
            dam_id: None,
            sire_name: None,
            dam_name: None,
        }
    }

    pub fn with_morph(mut self, morph: impl Into<String>) -> Self {
        self.morph = morph.into();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn with_sire(mut self, id: impl Into<String>) -> Self {
        self.sire_id = Some(id.into());
        self
    }

    pub fn with_dam(mut self, id: impl Into<String>) -> Self {
        self.dam_id = Some(id.into());
        self
    }

    pub fn with_sire_name(mut self, name: impl Into<String>) -> Self {
        self.sire_name = Some(name.into());
        self
    }

    pub fn with_dam_name(mut self, name: impl Into<String>) -> Self {
        self.dam_name = Some(name.into());
        self
    }

    /// Linked parent id for a slot. Blank ids count as no link.
    pub fn parent_link(&self, side: Side) -> Option<&str> {
        let link = match side {
            Side::Sire => self.sire_id.as_deref(),
            Side::Dam => self.dam_id.as_deref(),
        };
        non_blank(link)
    }

    /// Declared (free-text) parent name for a slot. Blank names count as none.
    pub fn declared_parent(&self, side: Side) -> Option<&str> {
        let name = match side {
            Side::Sire => self.sire_name.as_deref(),
            Side::Dam => self.dam_name.as_deref(),
        };
        non_blank(name)
    }

    /// True when both slots link to the same record
    pub fn has_shared_parent_link(&self) -> bool {
        match (self.parent_link(Side::Sire), self.parent_link(Side::Dam)) {
            (Some(sire), Some(dam)) => sire == dam,
            _ => false,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
