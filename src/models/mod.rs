//! Domain models for the component catalogue.

mod app;
mod component;
mod preview;
mod prop;

pub use app::AppTag;
pub use component::{ComponentInfo, UiCharacteristics, ROOT_DIRECTORY};
pub use preview::{PreviewState, PropValue};
pub use prop::{Control, PropDefinition};
