//! `shelf extensions <file.json>` – render extension rows.

use anyhow::{Context, Result};
use shelf_core::extension::{ExtensionItem, ExtensionRow, RowView};
use std::path::Path;

fn format_row(position: usize, view: &RowView) -> String {
    let warning = view.warning.map(|w| w.as_str()).unwrap_or("-");
    let button = if view.button.enabled {
        view.button.label.to_string()
    } else {
        format!("({})", view.button.label)
    };
    format!(
        "{:<4} {:<24} {:<10} {:<22} {:<11} {}",
        position, view.title, view.version, view.lang, warning, button
    )
}

pub fn run_extensions(path: &Path) -> Result<()> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let items: Vec<ExtensionItem> = serde_json::from_str(&data)
        .with_context(|| format!("parse extension list: {}", path.display()))?;
    if items.is_empty() {
        println!("No extensions in list.");
        return Ok(());
    }

    println!(
        "{:<4} {:<24} {:<10} {:<22} {:<11} {}",
        "POS", "NAME", "VERSION", "LANGUAGE", "WARNING", "ACTION"
    );
    let mut row = ExtensionRow::new(0, |position: usize| {
        tracing::debug!(position, "button click");
    });
    for (position, item) in items.iter().enumerate() {
        row.set_position(position);
        let line = format_row(position, row.bind(item));
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::extension::{Extension, ExtensionInfo, InstallStep};

    fn item(step: Option<InstallStep>) -> ExtensionItem {
        ExtensionItem {
            extension: Extension::Installed {
                info: ExtensionInfo {
                    name: "Host".to_string(),
                    pkg_name: "ext.host".to_string(),
                    version_name: "1.2".to_string(),
                    version_code: 2,
                    lang: "en".to_string(),
                    is_nsfw: false,
                },
                has_update: false,
                is_obsolete: true,
                is_unofficial: false,
            },
            install_step: step,
        }
    }

    #[test]
    fn format_row_marks_disabled_button() {
        let mut row = ExtensionRow::new(0, |_: usize| {});
        let line = format_row(0, row.bind(&item(Some(InstallStep::Installing))));
        assert!(line.contains("OBSOLETE"));
        assert!(line.contains("(Installing)"));
        let line = format_row(0, row.bind(&item(None)));
        assert!(line.ends_with("Settings"));
    }

    #[test]
    fn run_extensions_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ext.json");
        let json = serde_json::to_string(&vec![item(None)]).unwrap();
        std::fs::write(&path, json).unwrap();
        run_extensions(&path).unwrap();
    }

    #[test]
    fn run_extensions_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ext.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(run_extensions(&path).is_err());
    }
}
