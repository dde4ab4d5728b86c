use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CATEGORY_FIELD: &str = "Category";
pub const ITEM_FIELD: &str = "Item";
pub const PRICE_FIELD: &str = "Price";

/// One data row keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, String>,
}

impl Record {
    /// Trimmed value of `field`, or `""` when the header has no such column.
    pub fn field(&self, field: &str) -> &str {
        self.data.get(field).map(|v| v.trim()).unwrap_or("")
    }
}

/// Header row plus the records built from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<MenuItem>,
}

/// Categories in ascending order, items in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuModel {
    pub groups: Vec<CategoryGroup>,
}

impl MenuModel {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Flatten back into `Category`/`Item`/`Price` records, group by group.
    pub fn records(&self) -> Vec<Record> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.items.iter().map(move |it| {
                    let mut data = HashMap::new();
                    data.insert(CATEGORY_FIELD.to_string(), group.category.clone());
                    data.insert(ITEM_FIELD.to_string(), it.item.clone());
                    data.insert(PRICE_FIELD.to_string(), it.price.clone());
                    Record { data }
                })
            })
            .collect()
    }
}

/// What a run produced, for logging and exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSummary {
    pub categories: usize,
    pub items: usize,
}

impl From<&MenuModel> for MenuSummary {
    fn from(model: &MenuModel) -> Self {
        Self {
            categories: model.category_count(),
            items: model.item_count(),
        }
    }
}
