//! Server-rendered catalogue and component detail pages.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::html::{encode_path, encode_query, error_page, escape, layout};
use super::mock::render_mock;
use crate::models::{AppTag, ComponentInfo, Control, PreviewState, PropDefinition, PropValue};
use crate::services::controls::{control_for, state_with_overrides, PROP_PARAM_PREFIX};
use crate::services::usage::{import_statement, inline_usage, usage_example};
use crate::services::{Catalogue, CatalogueFilter, CatalogueService, ComponentDetail};

/// Query parameters of the catalogue page.
#[derive(Debug, Default)]
pub struct FilterParams {
    pub app: Option<String>,
    pub dir: Option<String>,
    pub q: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && *v != "all")
        .map(str::to_string)
}

impl FilterParams {
    /// Collect from raw query pairs; a repeated key keeps its last value.
    pub fn from_pairs(params: &[(String, String)]) -> Self {
        let mut out = Self::default();
        for (key, value) in params {
            let slot = match key.as_str() {
                "app" => &mut out.app,
                "dir" => &mut out.dir,
                "q" => &mut out.q,
                _ => continue,
            };
            *slot = Some(value.clone());
        }
        out
    }

    /// `all`, empty and unknown values mean "no filter".
    pub fn to_filter(&self) -> CatalogueFilter {
        CatalogueFilter {
            app: non_empty(&self.app).and_then(|a| a.parse().ok()),
            directory: non_empty(&self.dir),
            query: self
                .q
                .as_ref()
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
        }
    }
}

/// Handler for `GET /`.
pub async fn catalogue_page(
    State(service): State<CatalogueService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let filter = FilterParams::from_pairs(&params).to_filter();
    match service.catalogue().await {
        Ok(catalogue) => Html(render_catalogue(&catalogue, &filter)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render page");
            let (status, _) = e.status_and_code();
            (status, Html(error_page("Error", &e.client_message()))).into_response()
        }
    }
}

/// Handler for `GET /component/:app/*path`.
pub async fn component_page(
    State(service): State<CatalogueService>,
    Path((app, path)): Path<(String, String)>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    match service.component(app, path).await {
        Ok(detail) => Html(render_component(&detail, &params)).into_response(),
        Err(e) if e.is_not_found() => (
            StatusCode::NOT_FOUND,
            Html(error_page("Component not found", &e.to_string())),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render page");
            let (status, _) = e.status_and_code();
            (status, Html(error_page("Error", &e.client_message()))).into_response()
        }
    }
}

fn filter_href(app: Option<AppTag>, dir: Option<&str>, q: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(app) = app {
        parts.push(format!("app={}", app));
    }
    if let Some(dir) = dir {
        parts.push(format!("dir={}", encode_query(dir)));
    }
    if let Some(q) = q {
        parts.push(format!("q={}", encode_query(q)));
    }
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", parts.join("&"))
    }
}

fn component_href(component: &ComponentInfo) -> String {
    format!("/component/{}/{}", component.app, encode_path(&component.relative_path))
}

/// Render the catalogue page for a scan result and filter.
pub fn render_catalogue(catalogue: &Catalogue, filter: &CatalogueFilter) -> String {
    let visible: Vec<&ComponentInfo> = catalogue.filtered(filter).collect();
    let dir = filter.directory.as_deref();
    let q = filter.query.as_deref();
    let mut out = String::new();

    out.push_str(&format!(
        "<header><div><h1>Component Catalogue</h1><p>UI component reference across all apps</p></div>\
         <div><div class=\"stat\"><span class=\"count\">{}</span> of {} components</div></div></header>\n<main>\n",
        visible.len(),
        catalogue.total
    ));

    // Per-app counts, each toggling the app filter
    out.push_str("<div class=\"stats\">\n");
    for (app, count) in &catalogue.counts {
        let selected = filter.app == Some(*app);
        let target = if selected { None } else { Some(*app) };
        out.push_str(&format!(
            "<a class=\"stat{}\" href=\"{}\"><div class=\"badge\">{}</div><div class=\"count\">{}</div><div>{}</div></a>\n",
            if selected { " selected" } else { "" },
            escape(&filter_href(target, dir, q)),
            app,
            count,
            if selected { "Selected" } else { "Click to filter" }
        ));
    }
    out.push_str("</div>\n");

    out.push_str(&render_filter_form(catalogue, filter));

    if visible.is_empty() {
        out.push_str(
            "<div class=\"empty\"><h2>No components found</h2><p>Try adjusting your filters or search query</p></div>\n",
        );
    } else {
        out.push_str("<div class=\"grid\">\n");
        for component in visible {
            out.push_str(&render_card(component));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</main>\n");
    layout("Component Catalogue", &out)
}

fn render_filter_form(catalogue: &Catalogue, filter: &CatalogueFilter) -> String {
    let mut out = String::from("<div class=\"panel\"><form class=\"filters\" method=\"get\" action=\"/\">\n");

    out.push_str(&format!(
        "<div><label for=\"q\">Search</label><input id=\"q\" type=\"text\" name=\"q\" placeholder=\"Component name...\" value=\"{}\"></div>\n",
        escape(filter.query.as_deref().unwrap_or(""))
    ));

    out.push_str("<div><label for=\"app\">App</label><select id=\"app\" name=\"app\"><option value=\"all\">All Apps</option>");
    for app in AppTag::all() {
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            app,
            if filter.app == Some(*app) { " selected" } else { "" },
            app.label()
        ));
    }
    out.push_str("</select></div>\n");

    out.push_str("<div><label for=\"dir\">Directory</label><select id=\"dir\" name=\"dir\"><option value=\"all\">All Directories</option>");
    for dir in &catalogue.directories {
        out.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(dir),
            if filter.directory.as_deref() == Some(dir.as_str()) { " selected" } else { "" }
        ));
    }
    out.push_str("</select></div>\n<div><button type=\"submit\">Apply</button></div>\n</form>\n");

    if !filter.is_empty() {
        let dir = filter.directory.as_deref();
        let q = filter.query.as_deref();
        out.push_str("<p class=\"chips\">");
        if let Some(app) = filter.app {
            out.push_str(&format!(
                "<a href=\"{}\">App: {} &#x2715;</a>",
                escape(&filter_href(None, dir, q)),
                app
            ));
        }
        if let Some(d) = dir {
            out.push_str(&format!(
                "<a href=\"{}\">Dir: {} &#x2715;</a>",
                escape(&filter_href(filter.app, None, q)),
                escape(d)
            ));
        }
        if let Some(query) = q {
            out.push_str(&format!(
                "<a href=\"{}\">Search: {} &#x2715;</a>",
                escape(&filter_href(filter.app, dir, None)),
                escape(query)
            ));
        }
        out.push_str("<a href=\"/\">Clear All</a></p>\n");
    }

    out.push_str("</div>\n");
    out
}

fn render_card(component: &ComponentInfo) -> String {
    let mut out = format!(
        "<div class=\"card\"><h3>{}</h3><div><span class=\"badge\">{}</span>{}</div>\n",
        escape(&component.name),
        component.app,
        if component.has_props { "<span class=\"badge props\">Props</span>" } else { "" }
    );
    out.push_str(&format!(
        "<p>Directory: <span class=\"mono\">{}</span><br>File: <span class=\"mono\">{}</span></p>\n",
        escape(&component.directory),
        escape(&component.relative_path)
    ));
    if let Some(props) = &component.props_interface {
        out.push_str(&format!(
            "<details><summary>Show Props Interface</summary><pre>{}</pre></details>\n",
            escape(props)
        ));
    }
    out.push_str(&format!(
        "<p><a href=\"{}\">View Preview &amp; Props &rarr;</a></p>\
         <p class=\"mono\">{}</p><p class=\"mono\">{}</p></div>\n",
        escape(&component_href(component)),
        escape(&component.path),
        escape(&import_statement(component))
    ));
    out
}

/// Preview display mode of the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    Mock,
    Code,
}

impl PreviewMode {
    fn from_params(params: &[(String, String)]) -> Self {
        match params.iter().rev().find(|(k, _)| k == "mode") {
            Some((_, v)) if v == "code" => PreviewMode::Code,
            _ => PreviewMode::Mock,
        }
    }
}

fn mode_href(component: &ComponentInfo, mode: &str, params: &[(String, String)]) -> String {
    let mut query: Vec<String> = params
        .iter()
        .filter(|(k, _)| k.starts_with(PROP_PARAM_PREFIX))
        .map(|(k, v)| format!("{}={}", encode_query(k), encode_query(v)))
        .collect();
    query.push(format!("mode={}", mode));
    format!("{}?{}", component_href(component), query.join("&"))
}

/// Render the detail page for one component and the submitted parameters.
pub fn render_component(detail: &ComponentDetail, params: &[(String, String)]) -> String {
    let component = &detail.component;
    let state = state_with_overrides(&detail.props, params);
    let mode = PreviewMode::from_params(params);
    let mut out = String::new();

    out.push_str(&format!(
        "<header><div><a href=\"/\">&larr; Back to Catalogue</a><h1>{}</h1>\
         <p><span class=\"badge\">{}</span> <span class=\"mono\">{}</span></p></div></header>\n<main class=\"layout\">\n<div>\n",
        escape(&component.name),
        component.app,
        escape(&component.directory)
    ));

    // Preview
    out.push_str(&format!(
        "<div class=\"panel\"><p><a href=\"{}\">Mock Preview</a>{} | <a href=\"{}\">Code View</a>{}</p><div class=\"preview\">",
        escape(&mode_href(component, "mock", params)),
        if mode == PreviewMode::Mock { " &#x2713;" } else { "" },
        escape(&mode_href(component, "code", params)),
        if mode == PreviewMode::Code { " &#x2713;" } else { "" },
    ));
    match mode {
        PreviewMode::Mock => out.push_str(&render_mock(component, &state)),
        PreviewMode::Code => out.push_str(&format!(
            "<pre>{}</pre>",
            escape(&inline_usage(&component.name, &state))
        )),
    }
    out.push_str("</div></div>\n");

    if !detail.props.is_empty() {
        out.push_str(&render_controls(detail, &state, mode));
    }

    out.push_str(&format!(
        "<details class=\"panel\"><summary>View Props JSON</summary><pre>{}</pre></details>\n",
        escape(&state.to_json_pretty())
    ));
    out.push_str(&format!(
        "<details class=\"panel\"><summary>Usage Example</summary><pre>{}</pre></details>\n",
        escape(&usage_example(component, &state))
    ));
    out.push_str(&format!(
        "<details class=\"panel\"><summary>Source</summary><pre>{}</pre></details>\n</div>\n",
        escape(&detail.content)
    ));

    out.push_str(&render_sidebar(component));
    out.push_str("</main>\n");
    layout(&component.name, &out)
}

fn render_controls(detail: &ComponentDetail, state: &PreviewState, mode: PreviewMode) -> String {
    let component = &detail.component;
    let mut out = format!(
        "<div class=\"panel\"><h3>Props Controls ({})</h3>\n<form method=\"get\" action=\"{}\">\n",
        detail.props.len(),
        escape(&component_href(component))
    );
    if mode == PreviewMode::Code {
        out.push_str("<input type=\"hidden\" name=\"mode\" value=\"code\">\n");
    }

    for prop in &detail.props {
        out.push_str(&format!(
            "<div class=\"field\"><label>{}{} <span class=\"type mono\">{}</span></label>{}</div>\n",
            escape(&prop.name),
            if prop.required { " <span class=\"required\">*</span>" } else { "" },
            escape(&prop.type_expr),
            render_control(prop, state.get(&prop.name))
        ));
    }

    out.push_str(&format!(
        "<button type=\"submit\">Update Preview</button> <a href=\"{}\">Reset to Defaults</a>\n</form></div>\n",
        escape(&component_href(component))
    ));
    out
}

fn render_control(prop: &PropDefinition, value: Option<&PropValue>) -> String {
    let name = escape(&format!("{}{}", PROP_PARAM_PREFIX, prop.name));
    let current = match value {
        Some(PropValue::Absent) | Some(PropValue::Null) | Some(PropValue::Callback) | None => String::new(),
        Some(v) => v.display(),
    };

    match control_for(&prop.type_expr) {
        Control::Boolean => format!(
            "<input type=\"hidden\" name=\"{0}\" value=\"false\"><input type=\"checkbox\" name=\"{0}\" value=\"true\"{1}>",
            name,
            if value.is_some_and(PropValue::is_present) { " checked" } else { "" }
        ),
        Control::Number => format!(
            "<input type=\"number\" step=\"any\" name=\"{}\" value=\"{}\">",
            name,
            escape(if current.is_empty() { "0" } else { current.as_str() })
        ),
        Control::Select { options } => {
            let mut out = format!("<select name=\"{}\"><option value=\"\">Select...</option>", name);
            for option in &options {
                out.push_str(&format!(
                    "<option value=\"{0}\"{1}>{0}</option>",
                    escape(option),
                    if *option == current { " selected" } else { "" }
                ));
            }
            out.push_str("</select>");
            out
        }
        Control::Textarea => format!(
            "<textarea name=\"{}\" rows=\"3\" placeholder=\"Enter text or HTML...\">{}</textarea>",
            name,
            escape(&current)
        ),
        Control::Color => format!(
            "<input type=\"color\" name=\"{}\" value=\"{}\">",
            name,
            escape(if is_hex_color(&current) { current.as_str() } else { "#000000" })
        ),
        Control::Text => format!(
            "<input type=\"text\" name=\"{}\" value=\"{}\" placeholder=\"Enter value...\">",
            name,
            escape(&current)
        ),
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn render_sidebar(component: &ComponentInfo) -> String {
    let ui = &component.ui_characteristics;
    let signals: Vec<&str> = [
        (ui.has_tailwind(), "Utility classes"),
        (ui.has_styled_components(), "Styled components"),
        (ui.has_css_modules(), "CSS modules"),
        (ui.has_inline_styles(), "Inline styles"),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, label)| *label)
    .collect();

    let mut out = format!(
        "<aside><div class=\"panel\"><h3>File Info</h3>\
         <p>App: {}<br>Directory: <span class=\"mono\">{}</span><br>File: <span class=\"mono\">{}</span><br>\
         Full Path: <span class=\"mono\">{}</span></p>\
         <p>Styling: {}</p></div>\n",
        component.app,
        escape(&component.directory),
        escape(&component.relative_path),
        escape(&component.path),
        if signals.is_empty() { "none detected".to_string() } else { signals.join(", ") }
    );
    if let Some(props) = &component.props_interface {
        out.push_str(&format!(
            "<div class=\"panel\"><h3>Props Interface</h3><pre>{}</pre></div>\n",
            escape(props)
        ));
    }
    out.push_str("</aside>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UiCharacteristics;

    fn component(name: &str, app: AppTag, rel: &str, dir: &str) -> ComponentInfo {
        ComponentInfo {
            name: name.to_string(),
            path: format!("/apps/{}/{}", app, rel),
            relative_path: rel.to_string(),
            app,
            directory: dir.to_string(),
            has_props: false,
            props_interface: None,
            ui_characteristics: UiCharacteristics::default(),
        }
    }

    fn catalogue() -> Catalogue {
        Catalogue::from_components(vec![
            component("HeroCard", AppTag::Core, "marketing/hero-card.tsx", "/marketing"),
            component("Button", AppTag::Clavet, "button.tsx", "/"),
        ])
    }

    #[test]
    fn test_filter_params_ignore_all_and_unknown() {
        let params = FilterParams {
            app: Some("all".to_string()),
            dir: Some("".to_string()),
            q: Some("  ".to_string()),
        };
        assert!(params.to_filter().is_empty());

        let params = FilterParams {
            app: Some("web".to_string()),
            dir: Some("/ui".to_string()),
            q: Some("Card".to_string()),
        };
        let filter = params.to_filter();
        assert_eq!(filter.app, None);
        assert_eq!(filter.directory.as_deref(), Some("/ui"));
        assert_eq!(filter.query.as_deref(), Some("Card"));
    }

    #[test]
    fn test_filter_params_repeated_keys_keep_last() {
        let pairs: Vec<(String, String)> = [("app", "core"), ("q", "hero"), ("app", "clavet"), ("page", "2")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let params = FilterParams::from_pairs(&pairs);
        assert_eq!(params.app.as_deref(), Some("clavet"));
        assert_eq!(params.dir, None);
        assert_eq!(params.to_filter().app, Some(AppTag::Clavet));
        assert_eq!(params.to_filter().query.as_deref(), Some("hero"));
    }

    #[test]
    fn test_catalogue_page_lists_filtered_components() {
        let filter = CatalogueFilter {
            app: Some(AppTag::Core),
            ..Default::default()
        };
        let html = render_catalogue(&catalogue(), &filter);
        assert!(html.contains("HeroCard"));
        assert!(!html.contains("<h3>Button</h3>"));
        assert!(html.contains("href=\"/component/core/marketing/hero-card.tsx\""));
        assert!(html.contains("App: core"));
    }

    #[test]
    fn test_catalogue_page_empty_state() {
        let filter = CatalogueFilter {
            query: Some("zzz".to_string()),
            ..Default::default()
        };
        assert!(render_catalogue(&catalogue(), &filter).contains("No components found"));
    }

    #[test]
    fn test_filter_href_encodes_values() {
        assert_eq!(filter_href(None, None, None), "/");
        assert_eq!(
            filter_href(Some(AppTag::Account), Some("/ui"), Some("a b")),
            "/?app=account&dir=%2Fui&q=a%20b"
        );
    }

    #[test]
    fn test_component_page_modes_and_controls() {
        let detail = ComponentDetail {
            component: component("ToggleButton", AppTag::Core, "ui/toggle-button.tsx", "/ui"),
            content: "interface ToggleButtonProps { label: string; on?: boolean; }".to_string(),
            props: vec![
                PropDefinition::new("label", "string", true),
                PropDefinition::new("on", "boolean", false),
            ],
        };

        let mock = render_component(&detail, &[("prop.label".to_string(), "Go".to_string())]);
        assert!(mock.contains(">Go</button>"));
        assert!(mock.contains("name=\"prop.on\" value=\"true\">"));

        let code = render_component(
            &detail,
            &[
                ("prop.on".to_string(), "true".to_string()),
                ("mode".to_string(), "code".to_string()),
            ],
        );
        assert!(code.contains("&lt;ToggleButton label=&quot;&quot; on /&gt;"));
        assert!(code.contains("name=\"mode\" value=\"code\""));
    }

    #[test]
    fn test_render_control_kinds() {
        let select = render_control(
            &PropDefinition::new("size", "\"sm\" | \"lg\"", true),
            Some(&PropValue::Text("lg".to_string())),
        );
        assert!(select.contains("<option value=\"lg\" selected>lg</option>"));

        let color = render_control(&PropDefinition::new("accentColor", "string", false), None);
        assert!(color.contains("type=\"color\""));
        assert!(color.contains("#000000"));

        let node = render_control(&PropDefinition::new("children", "ReactNode", false), None);
        assert!(node.starts_with("<textarea"));
    }
}
