//! Tabular rendering of resolution results.
//!
//! The table lists dependency rows first, then directly requested rows, each
//! in ID order. Items whose metadata could not be fetched show the error in
//! place of their data; items without a matching file show a marker in the
//! release date column.

use crate::fetch::{FetchMap, Fetched};
use crate::schema::{File, Mod, ModId};

use chrono::SecondsFormat;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};

/// Marker shown when no release matches the filter.
pub const NO_RELEASE: &str = "⛔No release found!⛔";
/// Marker shown when a release has no publish date.
pub const UNKNOWN_DATE: &str = "unknown";

pub(crate) fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());
    table
}

pub(crate) fn release_date(file: &File) -> String {
    file.file_date
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

fn row(
    index: usize,
    id: ModId,
    info: &Fetched<Mod>,
    file: &Fetched<File>,
    indirect: bool,
) -> Vec<String> {
    let (name, date) = match info {
        Fetched::Ok(m) => {
            let date = match file {
                Fetched::Ok(f) => release_date(f),
                Fetched::Err { .. } => NO_RELEASE.to_string(),
            };
            (m.name.clone(), date)
        }
        Fetched::Err { error, .. } => (error.to_string(), error.to_string()),
    };
    vec![
        index.to_string(),
        id.to_string(),
        name,
        date,
        indirect.to_string(),
    ]
}

/// Render the metadata and file results of a resolution as a table.
pub fn render_mod_table(
    mods: &FetchMap<Mod>,
    direct: &FetchMap<File>,
    dependencies: &FetchMap<File>,
) -> String {
    let mut table = new_table(&["#", "ModID", "Name", "Latest Release Date", "Indirect"]);
    let rows = dependencies
        .iter()
        .map(|(id, f)| (id, f, true))
        .chain(direct.iter().map(|(id, f)| (id, f, false)));
    for (index, (id, file, indirect)) in rows.enumerate() {
        // Every listed ID has a metadata slot once resolution finished.
        let placeholder = Fetched::Ok(Mod::placeholder(*id));
        let info = mods.get(id).unwrap_or(&placeholder);
        table.add_row(row(index + 1, *id, info, file, indirect));
    }
    table.to_string()
}
