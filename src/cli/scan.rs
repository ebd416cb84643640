//! One-shot scan command handler.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::context::Context;
use crate::models::AppTag;
use crate::services::Envelope;

use super::App;

impl App {
    /// Scan once and print the catalogue envelope to stdout.
    pub async fn run_scan(&self, app: Option<&str>, pretty: bool) -> Result<()> {
        let apps: Vec<AppTag> = match app {
            Some(tag) => vec![tag.parse().map_err(|e: String| eyre!(e))?],
            None => AppTag::all().to_vec(),
        };

        let service = Context::new(self.load_config()?).catalogue();
        let catalogue = tokio::task::spawn_blocking(move || service.scan_apps(&apps)).await?;

        let envelope = Envelope::success(catalogue);
        let json = if pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };
        println!("{}", json);
        Ok(())
    }
}
