//! Export formats for resolved layouts

pub mod csv;
pub mod html;

use serde::Serialize;

use super::classify::{Resolution, ResolvedEntry};
use super::labels::Lang;

pub use self::csv::{parse_csv, to_csv};
pub use self::html::{to_html, HtmlMeta};

/// Output format for layout export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// File name used when no output path is given
    pub fn default_file_name(self) -> String {
        format!("nova-list.{}", self.extension())
    }
}

/// JSON export document
#[derive(Debug, Serialize)]
pub struct LayoutExport<'a> {
    pub source: &'a str,
    pub exported_at: i64,
    pub folders: &'a [ResolvedEntry],
    pub apps: &'a [ResolvedEntry],
}

/// Render a resolution in the requested format
pub fn render(
    format: ExportFormat,
    resolution: &Resolution,
    lang: Lang,
    source: &str,
    exported_at: i64,
) -> serde_json::Result<String> {
    let content = match format {
        ExportFormat::Html => {
            let meta = HtmlMeta {
                source: source.to_string(),
                exported_at,
            };
            to_html(resolution, lang, &meta)
        }
        ExportFormat::Csv => to_csv(resolution, lang),
        ExportFormat::Json => serde_json::to_string_pretty(&LayoutExport {
            source,
            exported_at,
            folders: &resolution.folders,
            apps: &resolution.apps,
        })?,
    };

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nova::classify::classify;
    use crate::nova::model::{Item, ItemType};

    #[test]
    fn test_export_format() {
        assert_eq!(ExportFormat::from_str("html"), Some(ExportFormat::Html));
        assert_eq!(ExportFormat::from_str("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_str("json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_str("xml"), None);
        assert_eq!(ExportFormat::Csv.default_file_name(), "nova-list.csv");
    }

    #[test]
    fn test_render_json() {
        let items = vec![Item {
            id: 5,
            title: Some("Camera".to_string()),
            item_type: ItemType::App,
            container: -100,
        }];
        let resolution = classify(&items, &[], &[], Lang::En);
        let json = render(ExportFormat::Json, &resolution, Lang::En, "b.novabackup", 0).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source"], "b.novabackup");
        assert_eq!(value["apps"][0]["name"], "Camera");
        assert_eq!(value["apps"][0]["affiliation"], "Desktop");
        assert_eq!(value["apps"][0]["placement"]["kind"], "desktop");
        assert_eq!(value["folders"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_render_csv_matches_to_csv() {
        let resolution = Resolution::default();
        let csv = render(ExportFormat::Csv, &resolution, Lang::En, "x", 0).unwrap();
        assert_eq!(csv, to_csv(&resolution, Lang::En));
    }
}
