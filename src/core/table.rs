use crate::core::tokenizer::tokenize_line;
use crate::domain::model::{Record, Table};
use std::collections::HashMap;

/// Parse the whole text into records keyed by the first non-blank line.
pub fn parse_table(text: &str) -> Vec<Record> {
    parse_table_with_header(text).records
}

/// Same as [`parse_table`] but keeps the header row.
///
/// Blank lines are skipped wherever they appear. Short rows are padded with
/// `""`, long rows lose their extra values, and a repeated header name keeps
/// the value of its last column.
pub fn parse_table_with_header(text: &str) -> Table {
    // `lines` splits on `\n` and strips a trailing `\r`
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Table::default();
    };
    let header = tokenize_line(header_line);

    let records = lines
        .map(|line| {
            let cols = tokenize_line(line);
            let mut data = HashMap::with_capacity(header.len());
            for (idx, name) in header.iter().enumerate() {
                let value = cols.get(idx).cloned().unwrap_or_default();
                data.insert(name.clone(), value);
            }
            Record { data }
        })
        .collect();

    Table { header, records }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_records() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("  \n\r\n\t\n").is_empty());
        assert_eq!(parse_table_with_header(""), Table::default());
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let table = parse_table_with_header("Category,Item,Price\n");
        assert_eq!(table.header, vec!["Category", "Item", "Price"]);
        assert!(table.records.is_empty());
    }

    #[test]
    fn test_record_count_matches_non_blank_data_lines() {
        let text = "Category,Item,Price\r\nDrinks,Tea,50\r\n\r\nFood,Rice,120\n   \nDrinks,Coffee,60";
        let records = parse_table(text);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].field("Item"), "Tea");
        assert_eq!(records[1].field("Item"), "Rice");
        assert_eq!(records[2].field("Price"), "60");
    }

    #[test]
    fn test_short_row_pads_with_empty_strings() {
        let records = parse_table("Category,Item,Price\nDrinks,Tea");
        assert_eq!(records[0].data.len(), 3);
        assert_eq!(records[0].data.get("Price").map(String::as_str), Some(""));
    }

    #[test]
    fn test_long_row_drops_extra_values() {
        let records = parse_table("Category,Item\nDrinks,Tea,50,extra");
        assert_eq!(records[0].data.len(), 2);
        assert_eq!(records[0].field("Category"), "Drinks");
        assert_eq!(records[0].field("Item"), "Tea");
        assert!(!records[0].data.contains_key("Price"));
    }

    #[test]
    fn test_duplicate_header_last_column_wins() {
        let records = parse_table("Item,Price,Item\nTea,50,Green Tea");
        assert_eq!(records[0].data.len(), 2);
        assert_eq!(records[0].field("Item"), "Green Tea");
    }

    #[test]
    fn test_quoted_values_keep_embedded_commas() {
        let records = parse_table("Category,Item,Price\nFood,\"Rice, fried\",120");
        assert_eq!(records[0].field("Item"), "Rice, fried");
        assert_eq!(records[0].field("Price"), "120");
    }

    #[test]
    fn test_leading_blank_lines_before_header_are_skipped() {
        let table = parse_table_with_header("\n\n  Category , Item ,Price\nDrinks,Tea,50");
        assert_eq!(table.header, vec!["Category", "Item", "Price"]);
        assert_eq!(table.records.len(), 1);
    }
}
