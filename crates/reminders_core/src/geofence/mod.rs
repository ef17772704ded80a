//! Geofence model shared with the platform shell.
//!
//! # Responsibility
//! - Build geofence registration requests from saved reminders.
//! - Turn geofence transition events into reminder notifications.
//!
//! The platform geofencing API itself lives in the shell behind
//! `GeofenceRegistrar`.

pub mod request;
pub mod transitions;

pub use request::{
    GeofenceError, GeofenceRegistrar, GeofenceRequest, GeofenceTransition,
    ACTION_GEOFENCE_EVENT, GEOFENCE_EXPIRATION, GEOFENCE_RADIUS_IN_METERS,
};
pub use transitions::{handle_geofence_event, GeofenceEvent, ReminderNotification};
