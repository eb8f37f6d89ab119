pub mod category;
pub mod html;
pub mod models;
pub mod render;
pub mod state;

pub use category::ScoreCategory;
pub use models::{CheckRequest, CheckResult};
pub use render::{render_result, Presentation, ReferenceLink, ResultView};
pub use state::UiState;
