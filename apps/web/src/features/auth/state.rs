//! Session context for the console. The persisted record is loaded once when the
//! provider mounts and written back explicitly by the three writers below; no
//! other code mutates it. The record holds bearer tokens and must not be logged.

use crate::app_lib::{config::AppConfig, storage::BrowserStorage};
use admin_session::{SessionRecord, clear_session, load_session, save_session};
use leptos::prelude::*;
use tracing::{info, warn};

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub record: ReadSignal<SessionRecord>,
    pub is_authenticated: Signal<bool>,
    pub email: Signal<String>,
    set_record: WriteSignal<SessionRecord>,
    storage_key: StoredValue<String>,
}

impl SessionContext {
    /// Builds a context around the loaded record.
    fn new(initial: SessionRecord, storage_key: String) -> Self {
        let (record, set_record) = signal(initial);
        let is_authenticated = Signal::derive(move || record.with(|r| r.is_authenticated(now_unix())));
        let email = Signal::derive(move || record.with(|r| r.email.clone()));
        Self {
            record,
            is_authenticated,
            email,
            set_record,
            storage_key: StoredValue::new(storage_key),
        }
    }

    /// Login writer: remembers the email the code was sent to.
    pub fn start_verification(&self, record: SessionRecord) {
        self.replace(record);
    }

    /// Verification writer: stores the admitted token pair.
    pub fn admit(&self, record: SessionRecord) {
        self.replace(record);
        info!("Admin session admitted");
    }

    /// Drops the session locally. There is no server-side logout.
    pub fn sign_out(&self) {
        let key = self.storage_key.get_value();
        if let Err(err) = clear_session(&BrowserStorage, &key) {
            warn!("Failed to clear persisted session: {err}");
        }
        self.set_record.set(SessionRecord::default());
        info!("Session cleared");
    }

    fn replace(&self, record: SessionRecord) {
        let key = self.storage_key.get_value();
        if let Err(err) = save_session(&BrowserStorage, &key, &record) {
            // The in-memory session still works for this tab.
            warn!("Failed to persist session: {err}");
        }
        self.set_record.set(record);
    }
}

/// Browser clock in unix seconds.
pub fn now_unix() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Loads the persisted session and provides the context to the tree.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let config = AppConfig::load();
    let initial = load_session(&BrowserStorage, &config.session_storage_key);
    let session = SessionContext::new(initial, config.session_storage_key);
    provide_context(session);

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let config = AppConfig::load();
        SessionContext::new(SessionRecord::default(), config.session_storage_key)
    })
}
