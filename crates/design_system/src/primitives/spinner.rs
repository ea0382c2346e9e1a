use super::*;
use crate::styles::spinner::SpinnerStyles;
use crate::{SpinnerColor, SpinnerSize, SpinnerSpeed};

#[component]
/// Indeterminate loading ring announced as a status region.
pub fn Spinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional)] color: SpinnerColor,
    #[prop(optional)] speed: SpinnerSpeed,
    #[prop(into, default = "Loading".to_string())] aria_label: String,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    let class = SpinnerStyles {
        size,
        color,
        speed,
        class: class_name,
    }
    .to_class();

    view! {
        <div
            role="status"
            aria-label=aria_label
            class=class
            data-ui-primitive="true"
            data-ui-kind="spinner"
            data-ui-size=size.token()
            data-ui-speed=speed.token()
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announces_as_status_with_default_label() {
        let html = render(|| view! { <Spinner /> });
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"aria-label="Loading""#));
        assert!(html.contains(r#"data-ui-size="md""#));
    }

    #[test]
    fn label_can_be_overridden() {
        let html = render(|| view! { <Spinner aria_label="Uploading" speed=SpinnerSpeed::Fast /> });
        assert!(html.contains(r#"aria-label="Uploading""#));
        assert!(html.contains(r#"data-ui-speed="fast""#));
    }
}
