use crate::domain::model::{
    CategoryGroup, MenuItem, MenuModel, Record, CATEGORY_FIELD, ITEM_FIELD, PRICE_FIELD,
};
use std::collections::BTreeMap;

/// Group records by `Category`.
///
/// Records without a category or an item name are dropped. Categories come
/// out in ascending byte order; items keep the order of their source rows.
pub fn group_by_category(records: &[Record]) -> MenuModel {
    let mut by_category: BTreeMap<&str, Vec<MenuItem>> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let category = record.field(CATEGORY_FIELD);
        let item = record.field(ITEM_FIELD);
        if category.is_empty() || item.is_empty() {
            skipped += 1;
            continue;
        }
        by_category.entry(category).or_default().push(MenuItem {
            item: item.to_string(),
            price: record.field(PRICE_FIELD).to_string(),
        });
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} rows without a category or item", skipped);
    }

    let groups = by_category
        .into_iter()
        .map(|(category, items)| CategoryGroup {
            category: category.to_string(),
            items,
        })
        .collect();

    MenuModel { groups }
}
