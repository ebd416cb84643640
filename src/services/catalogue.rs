//! Catalogue service: scans every app root and looks up single components.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};
use std::sync::Arc;

use axum::extract::FromRef;
use serde::Serialize;

use crate::config::Config;
use crate::context::Context;
use crate::error::AppError;
use crate::models::{AppTag, ComponentInfo, PropDefinition};
use crate::scanner::{read_source, DeclarationParser, Scanner};

/// Response envelope shared by the JSON API.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// The sorted component list plus its summary indexes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalogue {
    pub components: Vec<ComponentInfo>,
    /// Distinct `directory` values, sorted.
    pub directories: Vec<String>,
    /// Components per app; apps with no components are left out.
    pub counts: BTreeMap<AppTag, usize>,
    pub total: usize,
}

impl Catalogue {
    /// Sort components by name (byte-wise, stable) and derive the indexes.
    pub fn from_components(mut components: Vec<ComponentInfo>) -> Self {
        components.sort_by(|a, b| a.name.cmp(&b.name));

        let directories = components
            .iter()
            .map(|c| c.directory.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut counts = BTreeMap::new();
        for component in &components {
            *counts.entry(component.app).or_insert(0) += 1;
        }

        Self {
            total: components.len(),
            components,
            directories,
            counts,
        }
    }

    /// Components matching `filter`, in catalogue order.
    pub fn filtered<'a>(&'a self, filter: &'a CatalogueFilter) -> impl Iterator<Item = &'a ComponentInfo> {
        self.components.iter().filter(move |c| filter.matches(c))
    }
}

/// Narrows the catalogue by app, directory and name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueFilter {
    pub app: Option<AppTag>,
    pub directory: Option<String>,
    /// Case-insensitive substring of the component name.
    pub query: Option<String>,
}

impl CatalogueFilter {
    pub fn is_empty(&self) -> bool {
        self.app.is_none() && self.directory.is_none() && self.query.is_none()
    }

    pub fn matches(&self, component: &ComponentInfo) -> bool {
        if self.app.is_some_and(|app| app != component.app) {
            return false;
        }
        if self
            .directory
            .as_ref()
            .is_some_and(|dir| *dir != component.directory)
        {
            return false;
        }
        match &self.query {
            Some(query) => component
                .name
                .to_lowercase()
                .contains(&query.to_lowercase()),
            None => true,
        }
    }
}

/// A single component with its source text and parsed props.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentDetail {
    pub component: ComponentInfo,
    pub content: String,
    pub props: Vec<PropDefinition>,
}

/// Service for scanning the configured app roots.
///
/// Every call rescans; nothing is cached between requests.
#[derive(Clone)]
pub struct CatalogueService {
    config: Arc<Config>,
    scanner: Scanner,
}

impl FromRef<Context> for CatalogueService {
    fn from_ref(ctx: &Context) -> Self {
        Self::new(ctx.config.clone())
    }
}

impl CatalogueService {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            scanner: Scanner::default(),
        }
    }

    /// Scan one app. A missing or unconfigured root yields no components.
    pub fn scan_app(&self, app: AppTag) -> Vec<ComponentInfo> {
        tracing::info!(app = %app, "Scanning app");
        let components = match self.config.apps.root(app) {
            Some(root) => self.scanner.scan_root(app, root),
            None => {
                tracing::warn!(app = %app, "No root directory configured");
                Vec::new()
            }
        };
        tracing::info!(app = %app, count = components.len(), "Found components");
        components
    }

    /// Full synchronous scan over `apps`, in the given order.
    pub fn scan_apps(&self, apps: &[AppTag]) -> Catalogue {
        tracing::info!("Starting component scan");
        let components = apps.iter().flat_map(|app| self.scan_app(*app)).collect();
        let catalogue = Catalogue::from_components(components);
        tracing::info!(total = catalogue.total, "Component scan complete");
        catalogue
    }

    /// Full synchronous scan over every app.
    pub fn scan(&self) -> Catalogue {
        self.scan_apps(AppTag::all())
    }

    /// Run [`Self::scan`] on the blocking pool.
    pub async fn catalogue(&self) -> Result<Catalogue, AppError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.scan())
            .await
            .map_err(|e| AppError::Scan(e.to_string()))
    }

    /// Look up one component by app tag and `/`-joined relative path.
    ///
    /// Unknown tags, paths escaping the root and missing files are not-found.
    pub fn find_component(&self, app: &str, relative: &str) -> Result<ComponentDetail, AppError> {
        let not_found = || AppError::ComponentNotFound {
            app: app.to_string(),
            path: relative.to_string(),
        };

        let tag: AppTag = app
            .parse()
            .map_err(|_| AppError::UnknownApp(app.to_string()))?;
        let root = self.config.apps.root(tag).ok_or_else(not_found)?;

        let rel = Path::new(relative);
        let is_plain = rel.components().count() > 0
            && rel.components().all(|c| matches!(c, Component::Normal(_)));
        if !is_plain {
            return Err(not_found());
        }

        let full_path = root.join(rel);
        if !full_path.is_file() {
            return Err(not_found());
        }

        let content = read_source(&full_path).map_err(|source| AppError::Io {
            path: full_path.display().to_string(),
            source,
        })?;

        let extractor = self.scanner.extractor();
        Ok(ComponentDetail {
            component: extractor.extract(tag, root, &full_path, &content),
            props: extractor.parser().parse_props(&content),
            content,
        })
    }

    /// Run [`Self::find_component`] on the blocking pool.
    pub async fn component(&self, app: String, relative: String) -> Result<ComponentDetail, AppError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.find_component(&app, &relative))
            .await
            .map_err(|e| AppError::Scan(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UiCharacteristics, ROOT_DIRECTORY};
    use std::fs;
    use tempfile::TempDir;

    fn component(name: &str, app: AppTag, directory: &str) -> ComponentInfo {
        ComponentInfo {
            name: name.to_string(),
            path: format!("/x/{}.tsx", name),
            relative_path: format!("{}.tsx", name),
            app,
            directory: directory.to_string(),
            has_props: false,
            props_interface: None,
            ui_characteristics: UiCharacteristics::default(),
        }
    }

    #[test]
    fn test_catalogue_sorts_bytewise_and_counts() {
        let catalogue = Catalogue::from_components(vec![
            component("card", AppTag::Clavet, "/ui"),
            component("Button", AppTag::Core, ROOT_DIRECTORY),
            component("Alert", AppTag::Clavet, "/ui"),
            component("Badge", AppTag::Core, "/feedback"),
        ]);

        let names: Vec<_> = catalogue.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alert", "Badge", "Button", "card"]);
        assert_eq!(catalogue.directories, vec!["/", "/feedback", "/ui"]);
        assert_eq!(catalogue.counts.get(&AppTag::Core), Some(&2));
        assert_eq!(catalogue.counts.get(&AppTag::Clavet), Some(&2));
        assert_eq!(catalogue.counts.get(&AppTag::Account), None);
        assert_eq!(catalogue.counts.values().sum::<usize>(), catalogue.total);
        assert_eq!(catalogue.total, catalogue.components.len());
    }

    #[test]
    fn test_counts_serialize_with_app_keys() {
        let catalogue = Catalogue::from_components(vec![component("A", AppTag::GearGrabber, "/")]);
        let json = serde_json::to_value(&catalogue).unwrap();
        assert_eq!(json["counts"]["geargrabber"], 1);
        assert_eq!(json["total"], 1);
    }

    #[test]
    fn test_filter() {
        let catalogue = Catalogue::from_components(vec![
            component("HeroCard", AppTag::Core, "/marketing"),
            component("PriceCard", AppTag::Account, "/billing"),
            component("Button", AppTag::Core, "/ui"),
        ]);

        let by_query = CatalogueFilter {
            query: Some("CARD".to_string()),
            ..Default::default()
        };
        assert_eq!(catalogue.filtered(&by_query).count(), 2);

        let by_app = CatalogueFilter {
            app: Some(AppTag::Core),
            query: Some("card".to_string()),
            ..Default::default()
        };
        let names: Vec<_> = catalogue.filtered(&by_app).map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["HeroCard"]);

        let by_dir = CatalogueFilter {
            directory: Some("/ui".to_string()),
            ..Default::default()
        };
        assert_eq!(catalogue.filtered(&by_dir).count(), 1);
        assert!(CatalogueFilter::default().is_empty());
    }

    fn service_with_core(root: &Path) -> CatalogueService {
        let mut config = Config::default();
        config.apps.set(AppTag::Core, root);
        CatalogueService::new(Arc::new(config))
    }

    #[test]
    fn test_find_component() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("ui")).unwrap();
        fs::write(
            dir.path().join("ui/icon-button.tsx"),
            "type IconButtonProps = { icon: string; size?: number; };",
        )
        .unwrap();

        let detail = service_with_core(dir.path())
            .find_component("core", "ui/icon-button.tsx")
            .unwrap();
        assert_eq!(detail.component.name, "IconButton");
        assert_eq!(detail.component.directory, "/ui");
        assert_eq!(detail.props.len(), 2);
        assert!(detail.content.contains("IconButtonProps"));
    }

    #[test]
    fn test_find_component_not_found_cases() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("card.tsx"), "").unwrap();
        let service = service_with_core(dir.path());

        assert!(matches!(
            service.find_component("web", "card.tsx"),
            Err(AppError::UnknownApp(_))
        ));
        assert!(matches!(
            service.find_component("core", "missing.tsx"),
            Err(AppError::ComponentNotFound { .. })
        ));
        assert!(matches!(
            service.find_component("core", "../card.tsx"),
            Err(AppError::ComponentNotFound { .. })
        ));
        assert!(matches!(
            service.find_component("account", "card.tsx"),
            Err(AppError::ComponentNotFound { .. })
        ));
        assert!(service.find_component("core", "card.tsx").is_ok());
    }

    #[test]
    fn test_find_component_with_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("footer.tsx"), b"// \xa9 Acme\ninterface FooterProps { year: number; }").unwrap();

        let detail = service_with_core(dir.path())
            .find_component("core", "footer.tsx")
            .unwrap();
        assert_eq!(detail.component.name, "Footer");
        assert_eq!(detail.props, vec![PropDefinition::new("year", "number", true)]);
        assert!(detail.content.starts_with("// \u{fffd} Acme"));
    }

    #[test]
    fn test_missing_root_does_not_abort_scan() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("card.tsx"), "").unwrap();

        let mut config = Config::default();
        config.apps.set(AppTag::Core, dir.path().join("gone"));
        config.apps.set(AppTag::Clavet, dir.path());
        let catalogue = CatalogueService::new(Arc::new(config)).scan();

        assert_eq!(catalogue.total, 1);
        assert_eq!(catalogue.components[0].app, AppTag::Clavet);
        assert_eq!(catalogue.counts.get(&AppTag::Core), None);
    }
}
