//! Geofence registration request and registrar contract.

use crate::model::reminder::{Reminder, ReminderId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub const GEOFENCE_RADIUS_IN_METERS: f64 = 100.0;
pub const GEOFENCE_EXPIRATION: Duration = Duration::from_secs(60 * 60);
pub const ACTION_GEOFENCE_EVENT: &str =
    "com.udacity.project4.reminder.action.ACTION_GEOFENCE_EVENT";

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceTransition {
    Enter,
    Exit,
    Dwell,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeofenceError {
    /// The reminder has no coordinates to fence.
    MissingCoordinates(ReminderId),
    /// The platform refused or failed the registration.
    Registration(String),
}

impl Display for GeofenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCoordinates(id) => {
                write!(f, "reminder {id} has no coordinates for a geofence")
            }
            Self::Registration(message) => write!(f, "geofence registration failed: {message}"),
        }
    }
}

impl Error for GeofenceError {}

/// Circular geofence registration for one reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRequest {
    /// Same value as the reminder id, so transitions map back to reminders.
    pub request_id: ReminderId,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    pub expiration: Duration,
    pub transitions: Vec<GeofenceTransition>,
    /// Fire immediately when the device is already inside on registration.
    pub initial_trigger: Option<GeofenceTransition>,
}

impl GeofenceRequest {
    /// Builds the default enter-only fence around a reminder's point.
    pub fn for_reminder(reminder: &Reminder) -> Result<Self, GeofenceError> {
        let (latitude, longitude) = reminder
            .coordinates()
            .ok_or_else(|| GeofenceError::MissingCoordinates(reminder.id.clone()))?;

        Ok(Self {
            request_id: reminder.id.clone(),
            latitude,
            longitude,
            radius_meters: GEOFENCE_RADIUS_IN_METERS,
            expiration: GEOFENCE_EXPIRATION,
            transitions: vec![GeofenceTransition::Enter],
            initial_trigger: Some(GeofenceTransition::Enter),
        })
    }

    /// Great-circle distance in meters from the fence center.
    pub fn distance_meters(&self, latitude: f64, longitude: f64) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), latitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.distance_meters(latitude, longitude) <= self.radius_meters
    }
}

/// Platform geofencing client, implemented by the mobile shell.
#[async_trait]
pub trait GeofenceRegistrar: Send + Sync {
    async fn add_geofence(&self, request: &GeofenceRequest) -> Result<(), GeofenceError>;
}
