use serde::{Deserialize, Deserializer, Serialize};

/// Top-level payload of a provider response.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResultsEnvelope {
    pub results: Vec<Employee>,
    #[serde(default)]
    pub info: Option<Info>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Info {
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub version: Option<String>,
}

/// One person's profile. Never modified after it has been fetched.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    pub id: Identity,
    #[serde(default)]
    pub login: Option<Login>,
    pub picture: Picture,
    pub name: Name,
    pub email: String,
    pub cell: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: Location,
    pub dob: BirthDate,
}

impl Employee {
    /// "First Last", the label shown on cards and matched by the search box.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// Provider identity token, falling back to the login uuid.
    pub fn identity_token(&self) -> Option<&str> {
        self.id
            .value
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.login.as_ref().map(|login| login.uuid.as_str()))
    }
}

/// National identifier; `value` is null for some nationalities.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Identity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Login {
    pub uuid: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Picture {
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    pub thumbnail: String,
}

impl Picture {
    /// Largest available rendition.
    pub fn best(&self) -> &str {
        self.large
            .as_deref()
            .or(self.medium.as_deref())
            .unwrap_or(&self.thumbnail)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Name {
    #[serde(default)]
    pub title: Option<String>,
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    #[serde(deserialize_with = "string_or_number")]
    pub postcode: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Street {
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BirthDate {
    /// ISO-like timestamp, e.g. `1990-05-17T00:00:00.000Z`.
    pub date: String,
    #[serde(default)]
    pub age: Option<u32>,
}

/// The provider ships postcodes as numbers for some nationalities and strings for others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}
