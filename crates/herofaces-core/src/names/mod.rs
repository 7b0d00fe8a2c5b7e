//! Display names for units and the filenames derived from them.
//!
//! The wiki names media after the unit's English display name, so the same
//! string feeds both the wiki filename (verbatim) and the local filename
//! (sanitized).

mod sanitize;

pub use sanitize::sanitize_local_name;

use crate::dataset::{is_player_id, Localization};

/// Prefix of the localization key holding a unit's base name (`M` + id).
const NAME_KEY_PREFIX: &str = "M";

/// Localization key of the base name, e.g. `MPID_Marth`.
pub fn name_key(unit_id: &str) -> String {
    format!("{NAME_KEY_PREFIX}{unit_id}")
}

/// Localization key of the honorific, e.g. `MPID_HONOR_Marth`.
pub fn honor_key(unit_id: &str) -> String {
    unit_id.replace("PID", "MPID_HONOR")
}

/// Resolves the display name of a unit.
///
/// Falls back to the raw id when the table has no name. Player units with an
/// honorific get `": <honorific>"` appended.
///
/// # Examples
///
/// - `PID_Marth` with `MPID_Marth = Marth`, `MPID_HONOR_Marth = Hero-King`
///   → `"Marth: Hero-King"`
/// - `EID_Unknown` with no entries → `"EID_Unknown"`
pub fn display_name(unit_id: &str, table: &Localization) -> String {
    let mut name = table
        .get(&name_key(unit_id))
        .unwrap_or(unit_id)
        .to_string();

    if is_player_id(unit_id) {
        if let Some(honor) = table.get(&honor_key(unit_id)) {
            name.push_str(": ");
            name.push_str(honor);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> Localization {
        pairs.iter().copied().collect()
    }

    #[test]
    fn missing_entry_falls_back_to_raw_id() {
        let t = table(&[]);
        for id in ["PID_Nobody", "EID_Nobody", "weird id", ""] {
            assert_eq!(display_name(id, &t), id);
        }
    }

    #[test]
    fn honorific_is_appended_for_player_units() {
        let t = table(&[("MPID_Marth", "Marth"), ("MPID_HONOR_Marth", "Hero-King")]);
        assert_eq!(display_name("PID_Marth", &t), "Marth: Hero-King");
    }

    #[test]
    fn no_honorific_no_colon() {
        let t = table(&[("MPID_Anna", "Anna")]);
        assert_eq!(display_name("PID_Anna", &t), "Anna");
    }

    #[test]
    fn honorific_without_base_name_uses_raw_id() {
        let t = table(&[("MPID_HONOR_Ghost", "Phantom")]);
        assert_eq!(display_name("PID_Ghost", &t), "PID_Ghost: Phantom");
    }

    #[test]
    fn enemy_ids_never_get_honorifics() {
        let t = table(&[("MEID_Veronica", "Veronica"), ("MEID_HONOR_Veronica", "Brave Princess")]);
        assert_eq!(display_name("EID_Veronica", &t), "Veronica");
    }

    #[test]
    fn key_helpers() {
        assert_eq!(name_key("PID_Marth"), "MPID_Marth");
        assert_eq!(honor_key("PID_Marth"), "MPID_HONOR_Marth");
    }
}
