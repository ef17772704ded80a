//! FFI use-case API for the mobile shell.
//!
//! # Responsibility
//! - Expose reminder list/get/save/delete flows through FRB.
//! - Keep error semantics simple: envelopes with `ok` + `message`.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All calls share the process-wide `ServiceLocator` data source.

use log::warn;
use reminders_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    DataResult, Reminder, ReminderConfig, ReminderDataSource, ServiceLocator,
};
use std::sync::{Arc, OnceLock};

static ENTRY_CONFIG: OnceLock<ReminderConfig> = OnceLock::new();

/// Health-check for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking. Never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to repeat with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Reminder row as seen by Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderItem {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Reminder> for ReminderItem {
    fn from(value: Reminder) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// List response; `message` carries the not-found or failure text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderListResponse {
    pub ok: bool,
    pub items: Vec<ReminderItem>,
    pub message: String,
}

/// Generic action response for get/save/delete.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderActionResponse {
    pub ok: bool,
    pub item: Option<ReminderItem>,
    pub message: String,
}

impl ReminderActionResponse {
    fn success(message: impl Into<String>, item: Option<ReminderItem>) -> Self {
        Self {
            ok: true,
            item,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item: None,
            message: message.into(),
        }
    }
}

/// Lists all reminders.
///
/// An empty store returns `ok = false` with `Reminder not found!`.
pub async fn reminders_list() -> ReminderListResponse {
    let data_source = match entry_data_source() {
        Ok(data_source) => data_source,
        Err(message) => {
            return ReminderListResponse {
                ok: false,
                items: Vec::new(),
                message,
            }
        }
    };

    match data_source.get_reminders().await {
        DataResult::Success(reminders) => ReminderListResponse {
            ok: true,
            message: format!("Found {} reminder(s).", reminders.len()),
            items: reminders.into_iter().map(ReminderItem::from).collect(),
        },
        DataResult::Error(err) => ReminderListResponse {
            ok: false,
            items: Vec::new(),
            message: err.message().to_string(),
        },
    }
}

/// Fetches one reminder by id.
pub async fn reminder_get(id: String) -> ReminderActionResponse {
    let data_source = match entry_data_source() {
        Ok(data_source) => data_source,
        Err(message) => return ReminderActionResponse::failure(message),
    };

    match data_source.get_reminder(id.trim()).await {
        DataResult::Success(reminder) => {
            ReminderActionResponse::success("Reminder loaded.", Some(reminder.into()))
        }
        DataResult::Error(err) => ReminderActionResponse::failure(err.message()),
    }
}

/// Saves (or replaces, when `id` is given) a reminder.
///
/// Title and location are required, mirroring the save screen's validation.
pub async fn reminder_save(
    id: Option<String>,
    title: String,
    description: Option<String>,
    location: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> ReminderActionResponse {
    let title = title.trim().to_string();
    let location = location.trim().to_string();
    if title.is_empty() {
        return ReminderActionResponse::failure("err_enter_title");
    }
    if location.is_empty() {
        return ReminderActionResponse::failure("err_select_location");
    }

    let mut reminder = Reminder::new(
        Some(title),
        description,
        Some(location),
        latitude,
        longitude,
    );
    if let Some(id) = id.map(|raw| raw.trim().to_string()).filter(|id| !id.is_empty()) {
        reminder = reminder.with_id(id);
    }

    let data_source = match entry_data_source() {
        Ok(data_source) => data_source,
        Err(message) => return ReminderActionResponse::failure(message),
    };
    match data_source.save_reminder(&reminder).await {
        Ok(()) => ReminderActionResponse::success("Reminder Saved !", Some(reminder.into())),
        Err(err) => {
            warn!("event=ffi_reminder_save module=ffi status=error error={err}");
            ReminderActionResponse::failure(format!("reminder_save failed: {err}"))
        }
    }
}

/// Removes every reminder.
pub async fn reminders_delete_all() -> ReminderActionResponse {
    let data_source = match entry_data_source() {
        Ok(data_source) => data_source,
        Err(message) => return ReminderActionResponse::failure(message),
    };
    match data_source.delete_all_reminders().await {
        Ok(()) => ReminderActionResponse::success("Reminders deleted.", None),
        Err(err) => ReminderActionResponse::failure(format!("reminders_delete_all failed: {err}")),
    }
}

fn entry_config() -> &'static ReminderConfig {
    ENTRY_CONFIG.get_or_init(ReminderConfig::from_env)
}

fn entry_data_source() -> Result<Arc<dyn ReminderDataSource>, String> {
    ServiceLocator::global()
        .provide_reminder_data_source(entry_config())
        .map_err(|err| format!("reminder DB open failed: {err}"))
}
