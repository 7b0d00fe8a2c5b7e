//! Read-only game data: the unit roster and per-language localization tables.
//!
//! Both files come from the upstream mirror (`sync`) and are loaded once per
//! run. A missing, unparseable, or empty file is fatal for the run.

mod error;
mod load;

pub use error::DatasetError;
pub use load::{load_languages, load_units, Dataset};

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Id prefix of playable units.
pub const PLAYER_MARKER: &str = "PID_";
/// Id prefix of enemy units.
pub const ENEMY_MARKER: &str = "EID_";

/// One record of `fullunits.json`. Only the boss flag drives planning; the
/// remaining attributes are kept as raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Unit {
    #[serde(default, deserialize_with = "truthy")]
    pub boss: bool,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// Accepts JSON booleans as well as the 0/1 and null values seen in dumps.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Null => false,
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

/// Units keyed by id. Sorted iteration keeps plans reproducible.
pub type UnitSet = BTreeMap<String, Unit>;

/// `key -> localized string` for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Localization(HashMap<String, String>);

impl Localization {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Localization {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// `language code -> Localization`, the shape of `fulllanguages.json`.
pub type Languages = HashMap<String, Localization>;

/// True for enemy ids (`EID_...`).
pub fn is_enemy_id(unit_id: &str) -> bool {
    unit_id.contains(ENEMY_MARKER)
}

/// True for player unit ids (`PID_...`).
pub fn is_player_id(unit_id: &str) -> bool {
    unit_id.contains(PLAYER_MARKER)
}
