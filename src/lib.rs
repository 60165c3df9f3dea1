pub mod aggregate;
pub mod app;
pub mod chart;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use aggregate::{aggregate, total_for_date, DailyTotals};
pub use app::router;
pub use chart::{layout, layout_with, ChartLayout};
pub use state::AppState;
pub use storage::{load_journal, resolve_data_path};
