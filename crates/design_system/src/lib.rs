//! Variation design system for Leptos applications.
//!
//! The crate is split into framework-agnostic layers and a thin Leptos layer:
//!
//! - [`tokens`] holds the static design values (colors, typography, spacing, radii, motion) and
//!   can render them as a Tailwind preset or CSS custom properties.
//! - [`class_merge`] provides [`cn!`] and [`classes!`] for conditional class composition with
//!   last-wins conflict resolution per utility group.
//! - [`styles`] maps each component's closed prop set to its utility class string.
//! - The primitives ([`Button`], [`Badge`], [`Card`], [`Input`], [`Alert`], [`Spinner`],
//!   [`SyncStatus`]) render those class strings as Leptos markup.
//!
//! Apps that only need class strings (static HTML, server templates) can stay on the first three
//! layers and never mount a component.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod class_merge;
mod error;
mod icon;
mod primitives;
pub mod styles;
pub mod tokens;

pub use class_merge::{merge_classes, ClassMerger, ClassValue, MergeConfig};
pub use error::DesignSystemError;
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Alert, AlertDescription, AlertTitle, AutoSaveIndicator, Badge, Button, ButtonType, Card,
    CardContent, CardDescription, CardElement, CardFooter, CardHeader, CardTitle, Input, Spinner,
    SyncStatus, SyncStatusIndicator, SyncStatusText,
};
pub use styles::alert::{AlertAnimation, AlertVariant};
pub use styles::badge::{BadgeShape, BadgeSize, BadgeVariant};
pub use styles::button::{ButtonSize, ButtonVariant};
pub use styles::card::{CardPadding, CardVariant};
pub use styles::input::InputSize;
pub use styles::spinner::{SpinnerColor, SpinnerSize, SpinnerSpeed};
pub use styles::sync_status::SyncState;

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        classes, cn, Alert, AlertAnimation, AlertDescription, AlertTitle, AlertVariant,
        AutoSaveIndicator, Badge, BadgeShape, BadgeSize, BadgeVariant, Button, ButtonSize,
        ButtonType, ButtonVariant, Card, CardContent, CardDescription, CardElement, CardFooter,
        CardHeader, CardPadding, CardTitle, CardVariant, Icon, IconName, IconSize, Input,
        InputSize, Spinner, SpinnerColor, SpinnerSize, SpinnerSpeed, SyncState, SyncStatus,
        SyncStatusIndicator, SyncStatusText,
    };
}
