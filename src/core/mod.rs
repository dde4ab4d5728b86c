pub mod engine;
pub mod grouper;
pub mod table;
pub mod tokenizer;

pub use crate::domain::model::{CategoryGroup, MenuItem, MenuModel, MenuSummary, Record, Table};
pub use crate::domain::ports::{ConfigProvider, Presenter, SourceLoader, Storage};
pub use crate::utils::error::Result;

use grouper::group_by_category;
use table::parse_table;

/// Raw menu text in, grouped menu out. Never fails: malformed rows are
/// filtered or defaulted.
pub fn build_menu(text: &str) -> MenuModel {
    let records = parse_table(text);
    tracing::debug!("Parsed {} records", records.len());

    let model = group_by_category(&records);
    tracing::debug!(
        "Grouped into {} categories ({} items)",
        model.category_count(),
        model.item_count()
    );
    model
}
