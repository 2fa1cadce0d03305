use std::sync::Arc;

use services::TutorialService;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> String;

    /// Title for the native window; the app name unless configured.
    fn window_title(&self) -> String {
        self.app_name()
    }

    fn tutorial(&self) -> Arc<TutorialService>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    window_title: String,
    tutorial: Arc<TutorialService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name(),
            window_title: app.window_title(),
            tutorial: app.tutorial(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    #[must_use]
    pub fn tutorial(&self) -> Arc<TutorialService> {
        Arc::clone(&self.tutorial)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TitledApp {
        title: Option<&'static str>,
        tutorial: Arc<TutorialService>,
    }

    impl UiApp for TitledApp {
        fn app_name(&self) -> String {
            "CSS Mastery".to_string()
        }

        fn window_title(&self) -> String {
            self.title.map_or_else(|| self.app_name(), str::to_string)
        }

        fn tutorial(&self) -> Arc<TutorialService> {
            Arc::clone(&self.tutorial)
        }
    }

    fn context_for(title: Option<&'static str>) -> AppContext {
        let tutorial = Arc::new(TutorialService::builtin("CSS Mastery").unwrap());
        let app: Arc<dyn UiApp> = Arc::new(TitledApp { title, tutorial });
        build_app_context(&app)
    }

    #[test]
    fn configured_window_title_reaches_the_context() {
        let ctx = context_for(Some("Learn CSS"));
        assert_eq!(ctx.window_title(), "Learn CSS");
        assert_eq!(ctx.app_name(), "CSS Mastery");
    }

    #[test]
    fn window_title_defaults_to_app_name() {
        let ctx = context_for(None);
        assert_eq!(ctx.window_title(), "CSS Mastery");
    }
}
