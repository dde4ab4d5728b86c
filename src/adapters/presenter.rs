use crate::core::{MenuModel, Presenter};
use crate::domain::model::{CATEGORY_FIELD, ITEM_FIELD, PRICE_FIELD};
use crate::utils::error::{MenuError, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub const NO_DATA_MESSAGE: &str = "No menu data available.";
pub const DEFAULT_PRICE_PREFIX: &str = "Rs ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const VARIANTS: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(MenuError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::VARIANTS.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Collapsible category panels as plain text.
///
/// Each category is a summary line (`▾` open, `▸` closed) with its item
/// count; open panels list their items below with the price prefixed.
/// Item names are padded by `char` count, so double-width characters
/// (CJK, most emoji) will not line up in a terminal.
#[derive(Debug, Clone)]
pub struct TextPresenter {
    pub price_prefix: String,
    pub collapsed: bool,
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self {
            price_prefix: DEFAULT_PRICE_PREFIX.to_string(),
            collapsed: false,
        }
    }
}

impl Presenter for TextPresenter {
    fn render(&self, model: &MenuModel, out: &mut dyn Write) -> Result<()> {
        if model.is_empty() {
            writeln!(out, "{}", NO_DATA_MESSAGE)?;
            return Ok(());
        }

        for group in &model.groups {
            let marker = if self.collapsed { '▸' } else { '▾' };
            writeln!(out, "{} {} ({})", marker, group.category, group.items.len())?;
            if self.collapsed {
                continue;
            }

            let width = group
                .items
                .iter()
                .map(|it| it.item.chars().count())
                .max()
                .unwrap_or(0);
            for it in &group.items {
                let pad = width - it.item.chars().count();
                writeln!(
                    out,
                    "    {}{}  {}{}",
                    it.item,
                    " ".repeat(pad),
                    self.price_prefix,
                    it.price
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonPresenter {
    pub pretty: bool,
}

impl Presenter for JsonPresenter {
    fn render(&self, model: &MenuModel, out: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, model)?;
        } else {
            serde_json::to_writer(&mut *out, model)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Flat `Category,Item,Price` table, one row per item.
#[derive(Debug, Clone, Default)]
pub struct CsvPresenter;

impl Presenter for CsvPresenter {
    fn render(&self, model: &MenuModel, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record([CATEGORY_FIELD, ITEM_FIELD, PRICE_FIELD])?;
        for group in &model.groups {
            for it in &group.items {
                writer.write_record([&group.category, &it.item, &it.price])?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

/// Settings shared by all presenters.
#[derive(Debug, Clone)]
pub struct PresenterSettings {
    pub price_prefix: String,
    pub collapsed: bool,
    pub pretty: bool,
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self {
            price_prefix: DEFAULT_PRICE_PREFIX.to_string(),
            collapsed: false,
            pretty: true,
        }
    }
}

pub fn presenter_for(format: OutputFormat, settings: &PresenterSettings) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter {
            price_prefix: settings.price_prefix.clone(),
            collapsed: settings.collapsed,
        }),
        OutputFormat::Json => Box::new(JsonPresenter {
            pretty: settings.pretty,
        }),
        OutputFormat::Csv => Box::new(CsvPresenter),
    }
}
