use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::fetch::HolidaySource;
use crate::persistence::HolidayStore;
use crate::sensor::{HolidayCountdownSensor, SensorValue, UpdateOutcome};

pub struct AppState<S, C> {
    sensor: Arc<HolidayCountdownSensor<S, C>>,
}

impl<S, C> Clone for AppState<S, C> {
    fn clone(&self) -> Self {
        Self {
            sensor: self.sensor.clone(),
        }
    }
}

impl<S, C> AppState<S, C> {
    pub fn new(sensor: HolidayCountdownSensor<S, C>) -> Self {
        Self {
            sensor: Arc::new(sensor),
        }
    }

    pub fn with_shared(sensor: Arc<HolidayCountdownSensor<S, C>>) -> Self {
        Self { sensor }
    }
}

pub fn router<S, C>(state: AppState<S, C>) -> Router
where
    S: HolidayStore + Send + Sync + 'static,
    C: HolidaySource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/state", get(get_state::<S, C>))
        .route("/holidays", get(list_holidays::<S, C>))
        .route("/refresh", post(trigger_refresh::<S, C>))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_state<S, C>(State(state): State<AppState<S, C>>) -> Json<Value>
where
    S: HolidayStore + Send + Sync + 'static,
    C: HolidaySource + Send + Sync + 'static,
{
    let sensor_state = state.sensor.state();
    let value = match sensor_state.value {
        SensorValue::Unknown => Value::Null,
        SensorValue::Days(days) => json!(days),
        SensorValue::Error => json!("error"),
    };
    Json(json!({
        "state": value,
        "attributes": {
            "holiday_name": sensor_state.holiday_name,
            "duration_days": sensor_state.duration_days,
            "countdown_days": sensor_state.countdown_days,
            "start_date": sensor_state.start_date,
            "next_holiday": sensor_state.next_holiday,
        },
    }))
}

async fn list_holidays<S, C>(State(state): State<AppState<S, C>>) -> Json<Value>
where
    S: HolidayStore + Send + Sync + 'static,
    C: HolidaySource + Send + Sync + 'static,
{
    Json(json!({ "holidays": state.sensor.holidays() }))
}

async fn trigger_refresh<S, C>(State(state): State<AppState<S, C>>) -> Json<Value>
where
    S: HolidayStore + Send + Sync + 'static,
    C: HolidaySource + Send + Sync + 'static,
{
    let outcome = match state.sensor.update().await {
        UpdateOutcome::Refreshed => "refreshed",
        UpdateOutcome::NotDue => "not_due",
        UpdateOutcome::Throttled => "throttled",
        UpdateOutcome::AlreadyRunning => "already_running",
        UpdateOutcome::Failed => "failed",
    };
    Json(json!({ "outcome": outcome }))
}
