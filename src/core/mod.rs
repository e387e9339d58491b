pub mod line_series;
pub mod record;
pub mod scale;
pub mod ticks;
pub mod time_scale;
pub mod types;

pub use line_series::{SeriesPoint, project_series_points};
pub use record::{Record, SeriesId};
pub use scale::LinearScale;
pub use time_scale::{TickInterval, TimeScale};
pub use types::{Margins, PlotArea, Viewport};
