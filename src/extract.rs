use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// One extracted result table: the header row's cell texts plus every data
/// row's cell texts, whitespace-trimmed, aligned by column index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn cell_texts(row: ElementRef<'_>, cell_selector: &Selector) -> Vec<String> {
    row.select(cell_selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}

/// Extracts the single bordered result table from a document. Parsing is
/// lenient, so malformed markup still yields a tree. Zero or several matching
/// tables is a shape mismatch: the document is skipped without an error and
/// contributes no rows.
pub fn result_table(html: &str) -> Option<ResultTable> {
    let table_selector = Selector::parse(r#"table[border="1"]"#).expect("valid table selector");
    let row_selector = Selector::parse("tr").expect("valid row selector");
    let cell_selector = Selector::parse("td").expect("valid cell selector");

    let document = Html::parse_document(html);

    let mut tables = document.select(&table_selector);
    let table = tables.next()?;
    if tables.next().is_some() {
        debug!("more than one result table, skipping document");
        return None;
    }

    let mut rows = table.select(&row_selector);
    let header = cell_texts(rows.next()?, &cell_selector);
    let rows: Vec<Vec<String>> = rows.map(|row| cell_texts(row, &cell_selector)).collect();
    Some(ResultTable { header, rows })
}
