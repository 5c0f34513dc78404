//! Visual Primitives
//!
//! Stateless building blocks: button, card, input and badge. Style variants
//! are closed enums so an invalid variant cannot be expressed.

use leptos::*;

/// Button style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-slate-900 text-white hover:bg-slate-800",
            ButtonVariant::Outline => "border border-slate-300 text-slate-700 bg-white hover:bg-slate-50",
        }
    }
}

/// Badge style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
}

impl BadgeVariant {
    pub fn classes(self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-slate-900 text-white",
            BadgeVariant::Secondary => "bg-slate-100 text-slate-700",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button class=format!("px-3 py-2 rounded-xl text-sm {} {}", variant.classes(), class)>
            {children()}
        </button>
    }
}

#[component]
pub fn Card(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("rounded-2xl border border-slate-200 bg-white shadow-sm {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardContent(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=class>{children()}</div> }
}

/// Text input bound to a signal
#[component]
pub fn Input(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class=format!("w-full border border-slate-300 rounded-xl px-3 py-2 text-sm {}", class)
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("inline-block text-[10px] px-2 py-1 rounded-full {}", variant.classes())>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
    }

    #[test]
    fn test_variant_classes_differ() {
        assert_ne!(ButtonVariant::Default.classes(), ButtonVariant::Outline.classes());
        assert!(BadgeVariant::Secondary.classes().contains("bg-slate-100"));
    }
}
