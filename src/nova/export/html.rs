//! Standalone HTML export
//!
//! The document inlines its stylesheet and the header-click sort script so it
//! stays sortable when opened offline.

use crate::nova::classify::{Resolution, ResolvedEntry};
use crate::nova::labels::Lang;

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; width: 100%; margin-bottom: 2em; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; cursor: pointer; }
h2 { margin-top: 2em; }
th .sort-indicator { color: #ccc; float: right; }
th[data-order='asc'] .sort-indicator, th[data-order='desc'] .sort-indicator { color: #333; }
.note { color: #666; font-size: 0.9em; }
footer { color: #999; font-size: 0.8em; }
</style>"#;

const SORT_SCRIPT: &str = r#"<script>
function makeSortable(table) {
  table.querySelectorAll('thead th').forEach(function (header) {
    header.addEventListener('click', function () {
      var index = Array.prototype.indexOf.call(header.parentElement.children, header);
      var ascending = header.dataset.order !== 'asc';
      table.querySelectorAll('thead th').forEach(function (th) {
        delete th.dataset.order;
        th.querySelector('.sort-indicator').textContent = '↕';
      });
      header.dataset.order = ascending ? 'asc' : 'desc';
      header.querySelector('.sort-indicator').textContent = ascending ? '▲' : '▼';
      var tbody = table.querySelector('tbody');
      var rows = Array.prototype.slice.call(tbody.querySelectorAll('tr'));
      rows.sort(function (a, b) {
        var x = a.children[index].textContent.trim();
        var y = b.children[index].textContent.trim();
        var order = x.localeCompare(y, undefined, { numeric: true });
        return ascending ? order : -order;
      });
      rows.forEach(function (row) { tbody.appendChild(row); });
    });
  });
}
document.addEventListener('DOMContentLoaded', function () {
  document.querySelectorAll('table.table-sortable').forEach(makeSortable);
});
</script>"#;

/// Metadata shown in the document footer
#[derive(Debug, Clone)]
pub struct HtmlMeta {
    pub source: String,
    pub exported_at: i64,
}

/// Render both tables as a standalone HTML document
pub fn to_html(resolution: &Resolution, lang: Lang, meta: &HtmlMeta) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n<head>\n", lang.code()));
    html.push_str("<meta charset=\"UTF-8\">\n<title>Nova List Export</title>\n");
    html.push_str(STYLE);
    html.push_str("\n</head>\n<body>\n");

    if !resolution.folders.is_empty() {
        push_section(
            &mut html,
            lang.folders_title(),
            lang.folder_columns(),
            None,
            &resolution.folders,
        );
    }
    if !resolution.apps.is_empty() {
        push_section(
            &mut html,
            lang.apps_title(),
            lang.app_columns(),
            Some(lang.apps_note()),
            &resolution.apps,
        );
    }

    html.push_str(&format!(
        "<footer>{} &middot; {}</footer>\n",
        escape_html(&meta.source),
        format_timestamp(meta.exported_at)
    ));
    html.push_str(SORT_SCRIPT);
    html.push_str("\n</body>\n</html>\n");

    html
}

fn push_section(
    html: &mut String,
    title: &str,
    columns: [&str; 2],
    note: Option<&str>,
    entries: &[ResolvedEntry],
) {
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(title)));
    if let Some(note) = note {
        html.push_str(&format!("<p class=\"note\">{}</p>\n", escape_html(note)));
    }

    html.push_str("<table class=\"table-sortable\">\n<thead><tr>");
    for column in columns {
        html.push_str(&format!(
            "<th>{} <span class=\"sort-indicator\">\u{2195}</span></th>",
            escape_html(column)
        ));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for entry in entries {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&entry.name),
            escape_html(&entry.affiliation)
        ));
    }
    html.push_str("</tbody>\n</table>\n");
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nova::classify::classify;
    use crate::nova::model::{DrawerGroup, GroupType, Item, ItemType};

    fn meta() -> HtmlMeta {
        HtmlMeta {
            source: "backup.novabackup".to_string(),
            exported_at: 1704067200,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape_html("Plain"), "Plain");
    }

    #[test]
    fn test_document_contains_tables_and_script() {
        let items = vec![Item {
            id: 1,
            title: Some("Tom & Jerry".to_string()),
            item_type: ItemType::App,
            container: -100,
        }];
        let groups = vec![DrawerGroup {
            id: 3,
            title: "Games".to_string(),
            group_type: GroupType::TabAppGroup,
        }];
        let resolution = classify(&items, &groups, &[], Lang::En);
        let html = to_html(&resolution, Lang::En, &meta());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<td>Tom &amp; Jerry</td><td>Desktop</td>"));
        assert!(html.contains("<td>Games</td><td>App drawer (tab)</td>"));
        assert_eq!(html.matches("class=\"table-sortable\"").count(), 2);
        assert!(html.contains("makeSortable"));
        assert!(html.contains("2024-01-01 00:00:00 UTC"));

        let folders_at = html.find("<h2>Folders</h2>").unwrap();
        let apps_at = html.find("<h2>Apps &amp; Shortcuts</h2>").unwrap();
        assert!(folders_at < apps_at);
    }

    #[test]
    fn test_sort_script_keeps_case_and_accent_ties() {
        assert!(SORT_SCRIPT.contains("localeCompare(y, undefined, { numeric: true })"));
        assert!(!SORT_SCRIPT.contains("sensitivity"));
    }

    #[test]
    fn test_empty_lists_render_no_tables() {
        let html = to_html(&Resolution::default(), Lang::Ja, &meta());
        assert!(html.contains("<html lang=\"ja\">"));
        assert!(!html.contains("<table"));
    }
}
