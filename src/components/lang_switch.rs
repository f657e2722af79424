//! Interface language toggle.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::i18n::Lang;

#[component]
pub fn LangSwitch() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="lang-switch">
            <button
                class=move || if ctx.lang.get() == Lang::Zh { "lang-btn active" } else { "lang-btn" }
                on:click=move |_| ctx.set_language(Lang::Zh)
            >
                "中文"
            </button>
            <button
                class=move || if ctx.lang.get() == Lang::En { "lang-btn active" } else { "lang-btn" }
                on:click=move |_| ctx.set_language(Lang::En)
            >
                "EN"
            </button>
        </div>
    }
}
