use leptos::*;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
}

/// Context-provided notification queue. Any component can push a toast;
/// the viewport in the layout renders the stack.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: Option<String>) {
        self.push(ToastLevel::Success, title.into(), description);
    }

    pub fn error(&self, title: impl Into<String>, description: Option<String>) {
        self.push(ToastLevel::Error, title.into(), description);
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    fn push(&self, level: ToastLevel, title: String, description: Option<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.update(|next| *next = next.wrapping_add(1));
        self.items.update(|items| {
            items.push(Toast {
                id,
                level,
                title,
                description,
            })
        });
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u32) {
        let queue = *self;
        leptos::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            queue.dismiss(id);
        });
    }

    // No timers on the host; tests dismiss explicitly.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u32) {}
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id
                children=move |toast| {
                    let card_class = match toast.level {
                        ToastLevel::Success => {
                            "rounded-lg shadow-lg border border-green-200 bg-green-50 px-4 py-3"
                        }
                        ToastLevel::Error => {
                            "rounded-lg shadow-lg border border-red-200 bg-red-50 px-4 py-3"
                        }
                    };
                    let title_class = match toast.level {
                        ToastLevel::Success => "text-sm font-semibold text-green-800",
                        ToastLevel::Error => "text-sm font-semibold text-red-800",
                    };
                    let toast_id = toast.id;
                    view! {
                        <div class=card_class role="status">
                            <div class="flex items-start justify-between gap-3">
                                <div>
                                    <p class=title_class>{toast.title.clone()}</p>
                                    {toast.description.clone().map(|desc| view! {
                                        <p class="text-sm text-gray-600 mt-1">{desc}</p>
                                    })}
                                </div>
                                <button
                                    type="button"
                                    aria-label="Dismiss"
                                    class="text-gray-400 hover:text-gray-600"
                                    on:click=move |_| toasts.dismiss(toast_id)
                                >
                                    {"✕"}
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn queue_assigns_increasing_ids_and_dismisses() {
        with_runtime(|| {
            let toasts = Toasts::new();
            toasts.success("Employee added successfully", Some("EMP001 - Jane Doe".into()));
            toasts.error("Failed to fetch employees", None);

            let items = toasts.items().get_untracked();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].id, 0);
            assert_eq!(items[1].id, 1);
            assert_eq!(items[0].level, ToastLevel::Success);
            assert_eq!(items[1].level, ToastLevel::Error);

            toasts.dismiss(0);
            let items = toasts.items().get_untracked();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, "Failed to fetch employees");
        });
    }

    #[test]
    fn viewport_renders_titles_and_descriptions() {
        let html = render_to_string(move || {
            let toasts = provide_toasts();
            toasts.success("Attendance marked successfully", Some("EMP001 - Present".into()));
            view! { <ToastViewport /> }
        });
        assert!(html.contains("Attendance marked successfully"));
        assert!(html.contains("EMP001 - Present"));
        assert!(html.contains("role=\"status\""));
    }
}
