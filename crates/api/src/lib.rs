pub mod dates;
pub mod db;
pub mod routes;
pub mod service;
pub mod startup;
pub mod templates;
pub mod utils;

pub use db::{ClimateStore, Measurement, MeasurementFilter, SqliteStore, Station};
pub use routes::*;
pub use service::{
    PrecipitationReading, QueryService, RangeSummary, StationRecord, TemperatureReading,
};
pub use startup::{app, build_app_state, AppState};
pub use templates::home_page;
pub use utils::{get_config_info, get_log_level, setup_logger, Cli};
