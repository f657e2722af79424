//! Application Context
//!
//! Shared signals provided via the Leptos Context API: the interface
//! language and the transient status toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::STATUS_TOAST_MS;
use crate::i18n::{strings, Lang, Strings};
use crate::storage;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current interface language - read
    pub lang: ReadSignal<Lang>,
    set_lang: WriteSignal<Lang>,
    /// Transient status message - read
    pub status: ReadSignal<Option<String>>,
    set_status: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        lang: (ReadSignal<Lang>, WriteSignal<Lang>),
        status: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            lang: lang.0,
            set_lang: lang.1,
            status: status.0,
            set_status: status.1,
        }
    }

    /// Switch the interface language and persist the preference.
    pub fn set_language(&self, lang: Lang) {
        self.set_lang.set(lang);
        storage::save_lang(lang);
    }

    /// Tracked access to the active string table.
    pub fn strings(&self) -> &'static Strings {
        strings(self.lang.get())
    }

    /// Show a status toast and clear it after a few seconds, unless a
    /// newer message replaced it in the meantime.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        self.set_status.set(Some(message.clone()));
        let status = self.status;
        let set_status = self.set_status;
        spawn_local(async move {
            TimeoutFuture::new(STATUS_TOAST_MS).await;
            if status.get_untracked().as_deref() == Some(message.as_str()) {
                set_status.set(None);
            }
        });
    }
}
