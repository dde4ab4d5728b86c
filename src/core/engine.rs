use crate::core::{build_menu, MenuModel, MenuSummary, Presenter, SourceLoader};
use crate::utils::error::{MenuError, Result};
use std::io::Write;

pub struct MenuEngine<L: SourceLoader> {
    loader: L,
}

impl<L: SourceLoader> MenuEngine<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load and build the menu without rendering it.
    pub async fn load_menu(&self) -> Result<MenuModel> {
        tracing::info!("Loading menu from {}...", self.loader.describe());
        let text = self.loader.load().await?;
        tracing::debug!("Loaded {} bytes", text.len());

        Ok(build_menu(&text))
    }

    pub async fn run(&self, presenter: &dyn Presenter, out: &mut dyn Write) -> Result<MenuSummary> {
        let model = match self.load_menu().await {
            Ok(model) => model,
            Err(e) => {
                tracing::error!("{}", status_message(&e));
                return Err(e);
            }
        };

        if model.is_empty() {
            tracing::warn!("Menu source contained no usable rows");
        }

        presenter.render(&model, out)?;
        out.flush()?;

        let summary = MenuSummary::from(&model);
        tracing::info!(
            "Rendered {} categories ({} items)",
            summary.categories,
            summary.items
        );
        Ok(summary)
    }
}

/// Single status line shown to the user when a run fails.
pub fn status_message(err: &MenuError) -> String {
    err.user_friendly_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticLoader(&'static str);

    #[async_trait]
    impl SourceLoader for StaticLoader {
        async fn load(&self) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct FailingLoader;

    #[async_trait]
    impl SourceLoader for FailingLoader {
        async fn load(&self) -> Result<String> {
            Err(MenuError::load_failure("menu.csv", "HTTP 500 - Internal Server Error"))
        }

        fn describe(&self) -> String {
            "menu.csv".to_string()
        }
    }

    struct CountingPresenter;

    impl Presenter for CountingPresenter {
        fn render(&self, model: &MenuModel, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "{}", model.category_count())?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_renders_and_summarises() {
        let engine = MenuEngine::new(StaticLoader(
            "Category,Item,Price\nDrinks,Tea,50\nFood,Rice,120\nDrinks,Coffee,60",
        ));
        let mut out = Vec::new();

        let summary = engine.run(&CountingPresenter, &mut out).await.unwrap();

        assert_eq!(summary, MenuSummary { categories: 2, items: 3 });
        assert_eq!(String::from_utf8(out).unwrap(), "2\n");
    }

    #[tokio::test]
    async fn test_run_with_empty_menu_is_not_an_error() {
        let engine = MenuEngine::new(StaticLoader("Category,Item,Price\n,,\n"));
        let mut out = Vec::new();

        let summary = engine.run(&CountingPresenter, &mut out).await.unwrap();

        assert_eq!(summary, MenuSummary { categories: 0, items: 0 });
    }

    #[tokio::test]
    async fn test_load_failure_skips_rendering() {
        let engine = MenuEngine::new(FailingLoader);
        let mut out = Vec::new();

        let err = engine.run(&CountingPresenter, &mut out).await.unwrap_err();

        assert!(out.is_empty());
        assert_eq!(
            status_message(&err),
            "Failed to load menu CSV: HTTP 500 - Internal Server Error"
        );
    }
}
