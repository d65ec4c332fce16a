//! Taxonomy report generation
//!
//! The report is plain text in three parts:
//! - a fixed header describing the format
//! - a summary with one entry per category
//! - a detailed listing of the items of every non-empty category
//!
//! Categories are always visited in lexicographic code order and items are
//! sorted by label with a stable sort, so the same input always renders the
//! same bytes.

use crate::extractor::CategoryIndex;
use crate::label::format_category_label;
use crate::types::Record;

/// Fixed header placed at the top of every report
pub const HEADER: &str = "# QFDMO Categories Taxonomy
# Generated from qfdmo.json
# QFDMO: Où et comment donner, réparer et recycler tous vos objets
# https://www.ecosystem.eco/fr/qfdmo
#
# Format:
# - Each category starts with its code
# - fr: French name (libelle from the data)
# - Items under each category are listed with their codes
# - Parent-child relationships use < fr: Parent Category
#

";

/// Banner opening the detailed items section
const DETAILS_BANNER: &str = "\n# DETAILED ITEMS LIST\n#";

/// Render the full report: header, summary, then details
pub fn render_report(index: &CategoryIndex) -> String {
    let summary = render_summary(index);
    let details = render_details(index);

    let mut report = String::with_capacity(HEADER.len() + summary.len() + details.len());
    report.push_str(HEADER);
    report.push_str(&summary);
    report.push_str(&details);
    report
}

/// Render the category summary
///
/// Every known category gets a `#` marker, its label and code. The item count
/// line is only written for categories that have items.
pub fn render_summary(index: &CategoryIndex) -> String {
    let mut lines = Vec::new();

    for code in index.codes() {
        lines.push("#".to_string());
        lines.push(format!("fr: {}", format_category_label(code)));
        lines.push(format!("code: {}", code));

        let count = index.item_count(code);
        if count > 0 {
            lines.push(format!("# Items in this category: {}", count));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the detailed per-category item listing
pub fn render_details(index: &CategoryIndex) -> String {
    let mut lines = vec![DETAILS_BANNER.to_string()];

    for code in index.codes() {
        let items = index.items(code);
        if items.is_empty() {
            continue;
        }

        let label = format_category_label(code);
        lines.push(format!("\n## {} ({})", label, code));
        lines.push(format!("# {} items\n", items.len()));

        for item in sorted_by_label(items) {
            push_item(&mut lines, &label, item);
        }
    }

    lines.join("\n")
}

fn push_item(lines: &mut Vec<String>, category_label: &str, item: &Record) {
    lines.push(format!("< fr: {}", category_label));
    lines.push(format!("fr: {}", item.display_label()));
    lines.push(format!("code: {}", item.display_code()));
    if let Some(id) = &item.identifier {
        lines.push(format!("identifiant_qfdmod: {}", id));
    }
    lines.push(String::new());
}

/// Items ordered by label; equal labels keep their original order
fn sorted_by_label(items: &[Record]) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = items.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    sorted
}
