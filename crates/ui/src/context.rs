use std::sync::Arc;

use primer_core::model::Course;

pub trait UiApp: Send + Sync {
    fn course(&self) -> Arc<Course>;
}

#[derive(Clone)]
pub struct AppContext {
    course: Arc<Course>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course: app.course(),
        }
    }

    /// The course this instance teaches from; loaded once, read-only.
    #[must_use]
    pub fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }
}

/// Builds the context the views consume. The composition root (`crates/app`)
/// or a test harness calls this and provides the result via Dioxus context.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
