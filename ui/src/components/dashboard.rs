use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::data::{DataSource, Datasets, EmbeddedSource};
use crate::t;

/// Read-only datasets shared with every page through context.
#[derive(Clone)]
pub struct Dashboard(Rc<Datasets>);

impl Dashboard {
    pub fn new(data: Datasets) -> Self {
        Self(Rc::new(data))
    }
}

impl Deref for Dashboard {
    type Target = Datasets;

    fn deref(&self) -> &Datasets {
        &self.0
    }
}

impl PartialEq for Dashboard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Datasets provided by the nearest [`DashboardRoot`].
pub fn use_dashboard() -> Dashboard {
    use_context::<Dashboard>()
}

/// Loads the datasets once and provides them to `children`.
///
/// `data_dir` reads CSVs from a directory instead of the bundled copies
/// (native targets only; ignored on the web).
#[component]
pub fn DashboardRoot(
    #[props(!optional)] data_dir: Option<String>,
    children: Element,
) -> Element {
    let loaded = use_hook(move || load(data_dir.as_deref()));

    match loaded {
        Ok(dashboard) => rsx! {
            DashboardScope { dashboard, {children} }
        },
        Err(message) => rsx! {
            section { class: "page page-error", role: "alert",
                h1 { {t!("loading-failed-title")} }
                p { class: "page-error__detail", "{message}" }
            }
        },
    }
}

#[component]
fn DashboardScope(dashboard: Dashboard, children: Element) -> Element {
    use_context_provider(move || dashboard);
    rsx! {
        {children}
    }
}

fn load(data_dir: Option<&str>) -> Result<Dashboard, String> {
    let source: Box<dyn DataSource> = match data_dir {
        #[cfg(not(target_arch = "wasm32"))]
        Some(dir) => Box::new(crate::data::DirectorySource::new(dir)),
        _ => Box::new(EmbeddedSource),
    };
    match Datasets::load(source.as_ref()) {
        Ok(data) => {
            info!(source = %source.describe(), "dashboard ready");
            Ok(Dashboard::new(data))
        }
        Err(err) => {
            error!(%err, "failed to load dashboard data");
            Err(t!("loading-failed", error = err.to_string()))
        }
    }
}
