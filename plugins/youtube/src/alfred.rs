//! The Alfred script filter JSON format.
//!
//! See: <https://www.alfredapp.com/help/workflows/inputs/script-filter/json/>

use crate::aggregate::DisplayRecord;
use serde::Serialize;

/// The document a script filter prints on stdout.
#[derive(Debug, Default, Serialize)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
}

/// One result row.
#[derive(Debug, Serialize)]
pub struct Item {
    /// Lets Alfred learn which results the user tends to pick.
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    /// Passed to the next workflow object when the row is actioned.
    pub arg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<Mods>,
}

/// Per-modifier-key overrides.
#[derive(Debug, Serialize)]
pub struct Mods {
    pub cmd: Modifier,
}

#[derive(Debug, Serialize)]
pub struct Modifier {
    pub subtitle: String,
    pub arg: String,
}

impl From<DisplayRecord> for Item {
    fn from(record: DisplayRecord) -> Self {
        let mods = record.secondary.map(|subtitle| Mods {
            cmd: Modifier {
                subtitle,
                arg: record.action_url.clone(),
            },
        });
        Item {
            uid: record.id,
            title: record.title,
            subtitle: record.subtitle,
            arg: record.action_url,
            mods,
        }
    }
}

impl FromIterator<DisplayRecord> for ScriptFilter {
    fn from_iter<I: IntoIterator<Item = DisplayRecord>>(records: I) -> Self {
        ScriptFilter {
            items: records.into_iter().map(Item::from).collect(),
        }
    }
}
