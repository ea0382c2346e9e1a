use chrono::{DateTime, Local};

use super::*;
use crate::styles::sync_status::{
    format_last_saved, sync_status_indicator_styles, AUTO_SAVE_CLASS, AUTO_SAVE_MUTED_CLASS,
    AUTO_SAVE_ON_CLASS, SYNC_STATUS_CLASS, SYNC_STATUS_TEXT_CLASS,
};
use crate::SyncState;

pub(crate) fn auto_save_label(enabled: bool) -> (&'static str, &'static str) {
    if enabled {
        (AUTO_SAVE_ON_CLASS, "Auto-save on")
    } else {
        (AUTO_SAVE_MUTED_CLASS, "Auto-save off")
    }
}

/// Suffix shown after the auto-save label; only while enabled and once something was saved.
pub(crate) fn auto_save_suffix(
    now: DateTime<Local>,
    enabled: bool,
    last_saved: Option<DateTime<Local>>,
) -> Option<String> {
    if !enabled {
        return None;
    }
    last_saved.map(|saved| format!("\u{b7} Saved {}", format_last_saved(now, saved)))
}

#[component]
/// Sync indicator dot with its status copy, announced politely.
pub fn SyncStatus(
    #[prop(into)] status: MaybeSignal<SyncState>,
    #[prop(default = true)] show_text: bool,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    let class = cn!(SYNC_STATUS_CLASS, class_name);
    view! {
        <div
            aria-live="polite"
            class=class
            data-ui-primitive="true"
            data-ui-kind="sync-status"
            data-ui-state=move || status.get().token()
        >
            <SyncStatusIndicator status=status />
            {show_text.then(|| view! { <SyncStatusText status=status /> })}
        </div>
    }
}

#[component]
/// Status dot; pulses while a save is in flight.
pub fn SyncStatusIndicator(
    #[prop(into)] status: MaybeSignal<SyncState>,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    view! {
        <span
            class=move || sync_status_indicator_styles(status.get(), class_name.as_deref())
            aria-hidden="true"
            data-ui-slot="indicator"
        ></span>
    }
}

#[component]
/// Status copy; `text` overrides the default wording for the state.
pub fn SyncStatusText(
    #[prop(into)] status: MaybeSignal<SyncState>,
    #[prop(optional, into)] text: Option<String>,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    let class = cn!(SYNC_STATUS_TEXT_CLASS, class_name);
    view! {
        <span class=class data-ui-slot="text">
            {move || text.clone().unwrap_or_else(|| status.get().label().to_string())}
        </span>
    }
}

#[component]
/// Auto-save toggle state with a relative "saved" time.
pub fn AutoSaveIndicator(
    #[prop(into)] enabled: MaybeSignal<bool>,
    #[prop(optional, into)] last_saved: MaybeSignal<Option<DateTime<Local>>>,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    let class = cn!(AUTO_SAVE_CLASS, class_name);
    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind="auto-save"
            data-ui-enabled=move || bool_token(enabled.get())
        >
            <span class=move || auto_save_label(enabled.get()).0>
                {move || auto_save_label(enabled.get()).1}
            </span>
            {move || {
                auto_save_suffix(Local::now(), enabled.get(), last_saved.get())
                    .map(|suffix| view! { <span class=AUTO_SAVE_MUTED_CLASS>{suffix}</span> })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    fn noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 4, 12, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn text_is_optional() {
        let html = render(|| view! { <SyncStatus status=SyncState::Synced /> });
        assert!(html.contains("All changes saved"));
        assert!(html.contains(r#"aria-live="polite""#));

        let html = render(|| view! { <SyncStatus status=SyncState::Synced show_text=false /> });
        assert!(!html.contains("All changes saved"));
    }

    #[test]
    fn text_override_wins() {
        let html = render(|| view! { <SyncStatusText status=SyncState::Error text="Retrying" /> });
        assert!(html.contains("Retrying"));
        assert!(!html.contains("Error saving"));
    }

    #[test]
    fn label_reflects_toggle() {
        assert_eq!(auto_save_label(true), ("text-green-600", "Auto-save on"));
        assert_eq!(auto_save_label(false), ("text-gray-400", "Auto-save off"));
    }

    #[test]
    fn suffix_needs_enabled_and_a_save() {
        let now = noon();
        assert_eq!(auto_save_suffix(now, true, None), None);
        assert_eq!(auto_save_suffix(now, false, Some(now)), None);
        assert_eq!(
            auto_save_suffix(now, true, Some(now - Duration::minutes(5))),
            Some("\u{b7} Saved 5m ago".to_string())
        );
    }
}
