// Adapters layer: concrete implementations at the edges (where the menu
// text comes from, how the grouped menu is shown).

pub mod loader;
pub mod presenter;

pub use loader::{loader_for, FileLoader, HttpLoader};
pub use presenter::{
    presenter_for, CsvPresenter, JsonPresenter, OutputFormat, PresenterSettings, TextPresenter,
};
