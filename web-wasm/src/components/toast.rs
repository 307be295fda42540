//! 通知トースト

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

#[component]
pub fn ToastStack(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    let dismiss = move |id: u64| toasts.update(|list| list.retain(|t| t.id != id));

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class={format!("toast {}", toast.level.as_str())}>
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" on:click=move |_| dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_classes() {
        assert_eq!(ToastLevel::Info.as_str(), "info");
        assert_eq!(ToastLevel::Error.as_str(), "error");
    }
}
