pub mod config;
pub mod fetch;
pub mod grouping;
pub mod holiday;
pub mod normalize;
pub mod persistence;
pub mod projection;
pub mod scheduler;
pub mod sensor;

#[cfg(feature = "http_api")]
pub mod http_api;

pub use config::SensorConfig;
pub use fetch::{HolidayApiClient, HolidaySource};
pub use holiday::{HolidayObservation, HolidayPeriod};
pub use projection::Projection;
pub use scheduler::{RefreshState, Throttle};
pub use sensor::{HolidayCountdownSensor, SensorState, SensorValue, UpdateOutcome};
