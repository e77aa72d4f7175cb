use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Number of free-text "extra" fields a pigeon carries.
pub const EXTRA_FIELDS: usize = 6;

fn deserialize_extras<'de, D>(deserializer: D) -> Result<[String; EXTRA_FIELDS], D::Error>
where
    D: Deserializer<'de>,
{
    let mut extras = Vec::<String>::deserialize(deserializer)?;
    if extras.len() > EXTRA_FIELDS {
        return Err(serde::de::Error::invalid_length(
            extras.len(),
            &"at most 6 extra fields",
        ));
    }
    extras.resize(EXTRA_FIELDS, String::new());
    extras
        .try_into()
        .map_err(|_| serde::de::Error::custom("extra fields did not pad to 6 entries"))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PigeonId(String);

impl PigeonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PigeonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PigeonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Ring identity. `number` is the only mandatory part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub letters: String,
    pub number: String,
    #[serde(default)]
    pub year: String,
}

impl Band {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_letters(mut self, letters: impl Into<String>) -> Self {
        self.letters = letters.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [&self.country, &self.letters, &self.number, &self.year] {
            if part.is_empty() {
                continue;
            }
            if !first {
                f.write_str("-")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Cock,
    Hen,
    #[default]
    Young,
}

impl Sex {
    pub fn sign(self) -> Option<char> {
        match self {
            Sex::Cock => Some('\u{2642}'),
            Sex::Hen => Some('\u{2640}'),
            Sex::Young => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Cock => "cock",
            Sex::Hen => "hen",
            Sex::Young => "young bird",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pigeon {
    pub id: PigeonId,
    pub band: Band,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "color")]
    pub colour: String,
    #[serde(default)]
    pub strain: String,
    #[serde(default)]
    pub loft: String,
    /// Stores may list fewer than [`EXTRA_FIELDS`] entries; the rest are blank.
    #[serde(default, deserialize_with = "deserialize_extras")]
    pub extra: [String; EXTRA_FIELDS],
    #[serde(default)]
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub sire: Option<PigeonId>,
    #[serde(default)]
    pub dam: Option<PigeonId>,
}

impl Pigeon {
    pub fn new(id: impl Into<PigeonId>, band: Band, sex: Sex) -> Self {
        Self {
            id: id.into(),
            band,
            sex,
            name: String::new(),
            colour: String::new(),
            strain: String::new(),
            loft: String::new(),
            extra: Default::default(),
            image: None,
            sire: None,
            dam: None,
        }
    }

    pub fn with_parents(mut self, sire: Option<PigeonId>, dam: Option<PigeonId>) -> Self {
        self.sire = sire;
        self.dam = dam;
        self
    }

    pub fn field(&self, field: PigeonField) -> Cow<'_, str> {
        match field {
            PigeonField::Band => Cow::Owned(self.band.to_string()),
            PigeonField::Name => Cow::Borrowed(&self.name),
            PigeonField::Colour => Cow::Borrowed(&self.colour),
            PigeonField::Sex => Cow::Borrowed(self.sex.label()),
            PigeonField::Strain => Cow::Borrowed(&self.strain),
            PigeonField::Loft => Cow::Borrowed(&self.loft),
        }
    }

    /// Extra fields in their fixed order, blank ones included.
    pub fn extras(&self) -> impl Iterator<Item = &str> {
        self.extra.iter().map(String::as_str)
    }
}

/// Text attributes that can be placed in a pedigree box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PigeonField {
    Band,
    Name,
    #[serde(alias = "color")]
    Colour,
    Sex,
    Strain,
    Loft,
}

impl PigeonField {
    pub const ALL: [PigeonField; 6] = [
        PigeonField::Band,
        PigeonField::Name,
        PigeonField::Colour,
        PigeonField::Sex,
        PigeonField::Strain,
        PigeonField::Loft,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PigeonField::Band => "band",
            PigeonField::Name => "name",
            PigeonField::Colour => "colour",
            PigeonField::Sex => "sex",
            PigeonField::Strain => "strain",
            PigeonField::Loft => "loft",
        }
    }
}

impl FromStr for PigeonField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "color" {
            return Ok(PigeonField::Colour);
        }
        PigeonField::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or(Error::UnknownField {
                name: s.to_string(),
            })
    }
}
