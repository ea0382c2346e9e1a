//! Component showcase for the Variation design system.
//!
//! Renders every variant, size, and shape of each primitive, plus a section of plain HTML
//! elements styled only through the framework-agnostic class generators. Demo state is
//! serde-serializable so a host can persist and restore it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use chrono::{DateTime, Local};
use design_system::prelude::*;
use design_system::styles::{
    alert_styles, badge_dot_styles, badge_styles, button_styles, card_styles, input_styles,
    spinner_styles, sync_status_indicator_styles, AlertStyles, BadgeStyles, ButtonStyles,
    CardStyles, InputStyles, SpinnerStyles,
};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const EMAIL_ERROR: &str = "Enter a valid email address";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct ShowcaseState {
    alert_dismissed: bool,
    button_loading: bool,
    input_value: String,
    sync_state: SyncState,
    auto_save: bool,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            alert_dismissed: false,
            button_loading: false,
            input_value: "hello@variation.app".to_string(),
            sync_state: SyncState::Synced,
            auto_save: true,
        }
    }
}

fn restore_state(restored: Option<Value>) -> ShowcaseState {
    let Some(restored) = restored else {
        return ShowcaseState::default();
    };
    match serde_json::from_value::<ShowcaseState>(restored) {
        Ok(state) => state,
        Err(err) => {
            logging::warn!("ui showcase restore failed: {err}");
            ShowcaseState::default()
        }
    }
}

fn next_sync_state(current: SyncState) -> SyncState {
    let states = SyncState::ALL;
    let index = states
        .iter()
        .position(|state| *state == current)
        .unwrap_or_default();
    states[(index + 1) % states.len()]
}

fn email_error(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    (!valid).then(|| EMAIL_ERROR.to_string())
}

#[component]
fn ShowcaseSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="flex flex-col gap-4" data-ui-slot="showcase-section">
            <h2 class="text-xl font-semibold text-gray-900">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn Row(children: Children) -> impl IntoView {
    view! { <div class="flex flex-wrap items-center gap-3">{children()}</div> }
}

#[component]
/// Showcase page.
pub fn UiShowcaseApp(
    /// Previously persisted demo state.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the demo state whenever it changes.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(restore_state(restored_state));
    let last_reported = create_rw_signal::<Option<String>>(None);
    let last_saved = create_rw_signal::<Option<DateTime<Local>>>(None);

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui showcase serialize failed: {err}");
                return;
            }
        };

        if last_reported.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        let first_report = last_reported.get_untracked().is_none();
        last_reported.set(Some(serialized));
        if !first_report {
            last_saved.set(Some(Local::now()));
        }

        if let Some(on_state_change) = on_state_change {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_state_change.call(value),
                Err(err) => logging::warn!("ui showcase state export failed: {err}"),
            }
        }
    });

    let button_loading = Signal::derive(move || state.get().button_loading);
    let sync_state = Signal::derive(move || state.get().sync_state);
    let auto_save = Signal::derive(move || state.get().auto_save);
    let input_value = Signal::derive(move || state.get().input_value);
    let input_error = Signal::derive(move || email_error(&state.get().input_value));

    view! {
        <main class="min-h-screen bg-gray-50 p-8 font-sans" data-ui-kind="showcase">
            <div class="mx-auto flex max-w-5xl flex-col gap-10">
                <header class="flex flex-col gap-2">
                    <h1 class="text-3xl font-bold text-gray-900">"Variation Design System"</h1>
                    <p class="text-base text-gray-500">
                        "Every primitive, every variant, rendered from the same tokens."
                    </p>
                </header>

                <ShowcaseSection title="Buttons">
                    <Row>
                        {ButtonVariant::ALL
                            .iter()
                            .map(|variant| view! { <Button variant=*variant>{variant.to_string()}</Button> })
                            .collect_view()}
                    </Row>
                    <Row>
                        {ButtonSize::ALL
                            .iter()
                            .map(|size| view! { <Button size=*size>{format!("Size {size}")}</Button> })
                            .collect_view()}
                    </Row>
                    <Row>
                        <Button disabled=true>"Disabled"</Button>
                        <Button variant=ButtonVariant::Outline loading=button_loading>
                            "Save draft"
                        </Button>
                        <Button
                            variant=ButtonVariant::Ghost
                            on_click=Callback::new(move |_| {
                                state.update(|value| value.button_loading = !value.button_loading);
                            })
                        >
                            {move || if button_loading.get() { "Stop loading" } else { "Start loading" }}
                        </Button>
                        <Button button_type=ButtonType::Submit class_name="w-40">"Submit"</Button>
                    </Row>
                </ShowcaseSection>

                <ShowcaseSection title="Badges">
                    <Row>
                        {BadgeVariant::ALL
                            .iter()
                            .map(|variant| view! { <Badge variant=*variant>{variant.to_string()}</Badge> })
                            .collect_view()}
                    </Row>
                    <Row>
                        {BadgeSize::ALL
                            .iter()
                            .map(|size| view! { <Badge size=*size variant=BadgeVariant::Primary>{size.to_string()}</Badge> })
                            .collect_view()}
                        {BadgeShape::ALL
                            .iter()
                            .map(|shape| view! { <Badge shape=*shape variant=BadgeVariant::Info>{shape.to_string()}</Badge> })
                            .collect_view()}
                    </Row>
                    <Row>
                        <Badge variant=BadgeVariant::Success dot=true>"Online"</Badge>
                        <Badge variant=BadgeVariant::Warning dot=true pulse=true role="status">
                            "Syncing"
                        </Badge>
                        <Badge variant=BadgeVariant::Error shape=BadgeShape::Pill>"3 errors"</Badge>
                    </Row>
                </ShowcaseSection>

                <ShowcaseSection title="Cards">
                    <div class="grid grid-cols-2 gap-4">
                        {CardVariant::ALL
                            .iter()
                            .map(|variant| view! {
                                <Card variant=*variant>
                                    <CardHeader>
                                        <CardTitle>{format!("{variant} card")}</CardTitle>
                                        <CardDescription>"Header, content, and footer sections."</CardDescription>
                                    </CardHeader>
                                    <CardContent>"Cards group related content on one surface."</CardContent>
                                    <CardFooter>
                                        <Button size=ButtonSize::Sm>"Open"</Button>
                                        <Button size=ButtonSize::Sm variant=ButtonVariant::Ghost>"Later"</Button>
                                    </CardFooter>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                    <Row>
                        {CardPadding::ALL
                            .iter()
                            .map(|padding| view! {
                                <Card variant=CardVariant::Outlined padding=*padding>
                                    {format!("padding {padding}")}
                                </Card>
                            })
                            .collect_view()}
                    </Row>
                    <Row>
                        <Card interactive=true element=CardElement::Article>
                            <CardTitle>"Interactive article"</CardTitle>
                            <CardDescription>"Lifts on hover."</CardDescription>
                        </Card>
                        <Card variant=CardVariant::Filled element=CardElement::Section>
                            <CardTitle>"Filled section"</CardTitle>
                        </Card>
                    </Row>
                </ShowcaseSection>

                <ShowcaseSection title="Inputs">
                    <div class="grid grid-cols-2 gap-4">
                        <Input
                            label="Email"
                            id="showcase-email"
                            input_type="email"
                            placeholder="you@example.com"
                            helper_text="We only use this for sync notifications."
                            value=input_value
                            error=input_error
                            on_input=Callback::new(move |next: String| {
                                state.update(|value| value.input_value = next);
                            })
                        />
                        <Input label="Disabled" disabled=true value="Read only".to_string() />
                        {InputSize::ALL
                            .iter()
                            .map(|size| view! {
                                <Input size=*size placeholder=format!("Size {size}") />
                            })
                            .collect_view()}
                    </div>
                </ShowcaseSection>

                <ShowcaseSection title="Alerts">
                    {AlertVariant::ALL
                        .iter()
                        .map(|variant| view! {
                            <Alert variant=*variant>
                                <AlertTitle>{format!("{variant} alert")}</AlertTitle>
                                <AlertDescription>"Alerts announce themselves to assistive technology."</AlertDescription>
                            </Alert>
                        })
                        .collect_view()}
                    <Alert animation=AlertAnimation::SlideDown show_icon=false>
                        <AlertDescription>"Slides down without an icon."</AlertDescription>
                    </Alert>
                    <Alert
                        variant=AlertVariant::Success
                        animation=AlertAnimation::None
                        icon=|| view! { <Spinner size=SpinnerSize::Sm color=SpinnerColor::Current /> }
                    >
                        <AlertDescription>"Custom icon slot."</AlertDescription>
                    </Alert>
                    <Show
                        when=move || !state.get().alert_dismissed
                        fallback=move || view! {
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| {
                                    state.update(|value| value.alert_dismissed = false);
                                })
                            >
                                "Restore alert"
                            </Button>
                        }
                    >
                        <Alert
                            variant=AlertVariant::Warning
                            dismissible=true
                            on_dismiss=Callback::new(move |_| {
                                state.update(|value| value.alert_dismissed = true);
                            })
                        >
                            <AlertTitle>"Unsaved changes"</AlertTitle>
                            <AlertDescription>"Dismiss me; the state is persisted."</AlertDescription>
                        </Alert>
                    </Show>
                </ShowcaseSection>

                <ShowcaseSection title="Spinners">
                    <Row>
                        {SpinnerSize::ALL
                            .iter()
                            .map(|size| view! { <Spinner size=*size /> })
                            .collect_view()}
                        {SpinnerSpeed::ALL
                            .iter()
                            .map(|speed| view! {
                                <Spinner speed=*speed aria_label=format!("Loading ({speed})") />
                            })
                            .collect_view()}
                    </Row>
                    <Row>
                        {SpinnerColor::ALL
                            .iter()
                            .map(|color| view! {
                                <span class="rounded-md bg-primary-500 p-2 text-gray-900">
                                    <Spinner color=*color />
                                </span>
                            })
                            .collect_view()}
                    </Row>
                </ShowcaseSection>

                <ShowcaseSection title="Sync status">
                    <Row>
                        {SyncState::ALL
                            .iter()
                            .map(|sync| view! { <SyncStatus status=*sync /> })
                            .collect_view()}
                        <SyncStatus status=SyncState::Synced show_text=false />
                    </Row>
                    <Row>
                        <SyncStatusIndicator status=sync_state />
                        <SyncStatusText status=sync_state />
                        <SyncStatusText status=sync_state text="Custom wording" />
                        <Button
                            size=ButtonSize::Sm
                            variant=ButtonVariant::Secondary
                            on_click=Callback::new(move |_| {
                                state.update(|value| value.sync_state = next_sync_state(value.sync_state));
                            })
                        >
                            "Next state"
                        </Button>
                    </Row>
                    <Row>
                        <AutoSaveIndicator enabled=auto_save last_saved=last_saved />
                        <Button
                            size=ButtonSize::Sm
                            variant=ButtonVariant::Ghost
                            on_click=Callback::new(move |_| {
                                state.update(|value| value.auto_save = !value.auto_save);
                            })
                        >
                            "Toggle auto-save"
                        </Button>
                    </Row>
                </ShowcaseSection>

                <ShowcaseSection title="Plain HTML patterns">
                    <PlainHtmlPatterns />
                </ShowcaseSection>
            </div>
        </main>
    }
}

#[component]
/// The same looks as the components, built from plain elements and class generators only.
fn PlainHtmlPatterns() -> impl IntoView {
    let card = card_styles(&CardStyles {
        variant: CardVariant::Elevated,
        ..CardStyles::default()
    });
    let primary = button_styles(&ButtonStyles::default());
    let outline = button_styles(&ButtonStyles {
        variant: ButtonVariant::Outline,
        size: ButtonSize::Sm,
        ..ButtonStyles::default()
    });
    let badge = badge_styles(&BadgeStyles {
        variant: BadgeVariant::Success,
        shape: BadgeShape::Pill,
        ..BadgeStyles::default()
    });
    let input = input_styles(&InputStyles::default());
    let alert = alert_styles(&AlertStyles {
        variant: AlertVariant::Info,
        animation: AlertAnimation::None,
        ..AlertStyles::default()
    });
    let spinner = spinner_styles(&SpinnerStyles {
        size: SpinnerSize::Sm,
        ..SpinnerStyles::default()
    });

    view! {
        <div class=card>
            <div class="flex flex-col gap-3">
                <div class="flex items-center gap-2">
                    <span class=badge>
                        <span class=badge_dot_styles(BadgeVariant::Success)></span>
                        "Published"
                    </span>
                    <span class="flex items-center gap-2 text-xs text-gray-500">
                        <span class=sync_status_indicator_styles(SyncState::Syncing, None)></span>
                        "Saving..."
                    </span>
                </div>
                <input class=input placeholder="Plain <input> with input_styles" />
                <div class=alert role="alert">
                    <p class="text-sm">"Alert container built with alert_styles."</p>
                </div>
                <div class="flex items-center gap-2">
                    <button type="button" class=primary>"Primary"</button>
                    <button type="button" class=outline>"Outline"</button>
                    <div class=spinner role="status" aria-label="Loading"></div>
                </div>
            </div>
        </div>
    }
}

/// Mounts the showcase into `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <UiShowcaseApp /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn restore_falls_back_to_default_state() {
        assert_eq!(restore_state(None), ShowcaseState::default());
        assert_eq!(restore_state(Some(json!("not an object"))), ShowcaseState::default());
    }

    #[test]
    fn restore_fills_missing_fields_from_defaults() {
        let state = restore_state(Some(json!({ "alert_dismissed": true, "sync_state": "offline" })));
        assert!(state.alert_dismissed);
        assert_eq!(state.sync_state, SyncState::Offline);
        assert_eq!(state.input_value, ShowcaseState::default().input_value);
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = ShowcaseState {
            alert_dismissed: true,
            button_loading: true,
            input_value: "draft".to_string(),
            sync_state: SyncState::Error,
            auto_save: false,
        };
        let value = serde_json::to_value(&state).expect("serialize");
        assert_eq!(value["sync_state"], "error");
        assert_eq!(restore_state(Some(value)), state);
    }

    #[test]
    fn sync_state_cycles_through_every_state() {
        let mut state = SyncState::Synced;
        let mut seen = vec![state];
        for _ in 0..3 {
            state = next_sync_state(state);
            seen.push(state);
        }
        assert_eq!(seen, SyncState::ALL.to_vec());
        assert_eq!(next_sync_state(SyncState::Offline), SyncState::Synced);
    }

    #[test]
    fn email_validation() {
        assert_eq!(email_error(""), None);
        assert_eq!(email_error("hello@variation.app"), None);
        assert_eq!(email_error("hello"), Some(EMAIL_ERROR.to_string()));
        assert_eq!(email_error("@variation.app"), Some(EMAIL_ERROR.to_string()));
    }
}
