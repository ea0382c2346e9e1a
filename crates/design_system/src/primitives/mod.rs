//! Leptos components rendering the [`crate::styles`] class strings.
//!
//! Every root element carries `data-ui-primitive="true"` plus `data-ui-kind` and, where a closed
//! prop set applies, `data-ui-variant` / `data-ui-size` tokens so tests and host stylesheets can
//! target primitives without depending on utility class order.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{cn, Icon, IconName, IconSize};

mod alert;
mod badge;
mod button;
mod card;
mod input;
mod spinner;
mod sync_status;

pub use alert::{Alert, AlertDescription, AlertTitle};
pub use badge::Badge;
pub use button::{Button, ButtonType};
pub use card::{Card, CardContent, CardDescription, CardElement, CardFooter, CardHeader, CardTitle};
pub use input::Input;
pub use spinner::Spinner;
pub use sync_status::{AutoSaveIndicator, SyncStatus, SyncStatusIndicator, SyncStatusText};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Invokes `callback` with `event` unless the control is inactive. Returns whether it fired.
pub(crate) fn forward_unless_inactive<E: 'static>(
    callback: Option<Callback<E>>,
    inactive: bool,
    event: E,
) -> bool {
    match callback {
        Some(callback) if !inactive => {
            callback.call(event);
            true
        }
        _ => false,
    }
}

static NEXT_INPUT_ID: AtomicUsize = AtomicUsize::new(1);

/// Process-unique id for inputs rendered without one.
pub(crate) fn next_input_id() -> String {
    format!("input-{}", NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Server-renders `view` to HTML for markup assertions.
#[cfg(test)]
pub(crate) fn render<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bool_tokens() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn inactive_controls_swallow_events() {
        let runtime = create_runtime();
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let callback = Callback::new(move |_: ()| counter.set(counter.get() + 1));

        assert!(forward_unless_inactive(Some(callback), false, ()));
        assert!(!forward_unless_inactive(Some(callback), true, ()));
        assert!(forward_unless_inactive(Some(callback), false, ()));
        assert!(!forward_unless_inactive(None::<Callback<()>>, false, ()));
        assert_eq!(clicks.get(), 2);

        runtime.dispose();
    }

    #[test]
    fn generated_input_ids_are_unique() {
        let first = next_input_id();
        let second = next_input_id();
        assert!(first.starts_with("input-"));
        assert_ne!(first, second);
    }
}
