#![allow(dead_code)]

use async_trait::async_trait;
use reminders_core::{
    DataError, DataResult, GeofenceError, GeofenceRegistrar, GeofenceRequest, Reminder,
    ReminderDataSource,
};
use std::sync::Mutex;

/// In-memory data source double with a switchable storage failure.
#[derive(Default)]
pub struct FakeDataSource {
    reminders: Mutex<Vec<Reminder>>,
    fail_writes: Mutex<bool>,
    fail_reads: Mutex<bool>,
}

impl FakeDataSource {
    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: Mutex::new(reminders),
            fail_writes: Mutex::new(false),
            fail_reads: Mutex::new(false),
        }
    }

    pub fn remove_reminders(&self) {
        self.reminders.lock().unwrap().clear();
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.lock().unwrap() = fail;
    }

    pub fn snapshot(&self) -> Vec<Reminder> {
        self.reminders.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReminderDataSource for FakeDataSource {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        if *self.fail_reads.lock().unwrap() {
            let message = "database disk image is malformed".to_string();
            return DataResult::Error(DataError::Storage(message));
        }
        let reminders = self.reminders.lock().unwrap().clone();
        if reminders.is_empty() {
            DataResult::Error(DataError::NotFound)
        } else {
            DataResult::Success(reminders)
        }
    }

    async fn save_reminder(&self, reminder: &Reminder) -> Result<(), DataError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(DataError::Storage("disk full".to_string()));
        }
        let mut reminders = self.reminders.lock().unwrap();
        reminders.retain(|existing| existing.id != reminder.id);
        reminders.push(reminder.clone());
        Ok(())
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        self.reminders
            .lock()
            .unwrap()
            .iter()
            .find(|reminder| reminder.id == id)
            .cloned()
            .map_or(DataResult::Error(DataError::NotFound), DataResult::Success)
    }

    async fn delete_all_reminders(&self) -> Result<(), DataError> {
        self.remove_reminders();
        Ok(())
    }
}

/// Registrar double recording requests and optionally failing them.
#[derive(Default)]
pub struct RecordingRegistrar {
    pub requests: Mutex<Vec<GeofenceRequest>>,
    pub fail: bool,
}

#[async_trait]
impl GeofenceRegistrar for RecordingRegistrar {
    async fn add_geofence(&self, request: &GeofenceRequest) -> Result<(), GeofenceError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            Err(GeofenceError::Registration("GEOFENCE_NOT_AVAILABLE".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn reminder(n: u32) -> Reminder {
    Reminder::new(
        Some(format!("Title{n}")),
        Some(format!("Description{n}")),
        Some(format!("Location{n}")),
        Some(f64::from(n)),
        Some(f64::from(n) + 1.0),
    )
}
