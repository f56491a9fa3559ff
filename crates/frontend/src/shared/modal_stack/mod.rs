use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    surface_class: Option<String>,
    can_close: Option<CloseGuard>,
}

impl ModalEntry {
    fn may_close(&self) -> bool {
        self.can_close.as_ref().map(|guard| guard()).unwrap_or(true)
    }
}

/// Entries paired with their depth, bottom first.
fn layered(stack: Vec<ModalEntry>) -> Vec<(usize, ModalEntry)> {
    stack.into_iter().enumerate().collect()
}

/// Id of the topmost dialog if its guard lets it close.
fn closable_top(stack: &[ModalEntry]) -> Option<u64> {
    stack.last().filter(|entry| entry.may_close()).map(|entry| entry.id)
}

/// Lets a dialog close itself. Cheap to clone into event handlers.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open dialogs rendered by [`ModalHost`].
///
/// Escape and overlay clicks close only the topmost dialog, and only when its
/// close guard allows it (a form that is saving keeps itself open).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Open a dialog. `surface_class` is added to the `div.modal` surface.
    pub fn push<F>(&self, surface_class: Option<&str>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(surface_class, None, Arc::new(builder))
    }

    /// Open a dialog that refuses Escape/overlay close while `can_close`
    /// returns false.
    pub fn push_guarded<G, F>(&self, surface_class: Option<&str>, can_close: G, builder: F) -> ModalHandle
    where
        G: Fn() -> bool + Send + Sync + 'static,
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(surface_class, Some(Arc::new(can_close)), Arc::new(builder))
    }

    fn push_entry(
        &self,
        surface_class: Option<&str>,
        can_close: Option<CloseGuard>,
        builder: ModalBuilder,
    ) -> ModalHandle {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                surface_class: surface_class.map(str::to_string),
                can_close,
            })
        });
        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Removal happens on the next tick so the DOM event that triggered it
    /// finishes dispatching before its handler is dropped.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }

    fn close_top_if_allowed(&self) {
        if let Some(id) = self.stack.with_untracked(|s| closable_top(s)) {
            self.close_deferred(id);
        }
    }
}

/// Renders the modal stack. Mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if key_event.key() == "Escape" {
                    svc.close_top_if_allowed();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // lives as long as the app
            closure.forget();
        }
    });

    view! {
        <For
            each=move || { layered(svc.stack.get()) }
            key=|(_, entry)| entry.id
            children=move |(depth, entry)| {
                let on_close = {
                    let entry = entry.clone();
                    Callback::new(move |_| {
                        if entry.may_close() {
                            svc.close_deferred(entry.id);
                        }
                    })
                };
                let body = (entry.builder)(ModalHandle { id: entry.id, svc });
                view! {
                    <ModalFrame
                        z_index=1000 + depth as i32
                        on_close=on_close
                        surface_class=entry.surface_class.clone().unwrap_or_default()
                    >
                        {body}
                    </ModalFrame>
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, can_close: Option<bool>) -> ModalEntry {
        ModalEntry {
            id,
            builder: Arc::new(|_| ().into_any()),
            surface_class: None,
            can_close: can_close.map(|allowed| Arc::new(move || allowed) as CloseGuard),
        }
    }

    #[test]
    fn test_layers_count_depth_from_the_bottom() {
        let layers = layered(vec![entry(4, None), entry(7, None), entry(9, None)]);
        let depths: Vec<_> = layers.iter().map(|(depth, e)| (*depth, e.id)).collect();
        assert_eq!(depths, vec![(0, 4), (1, 7), (2, 9)]);
    }

    #[test]
    fn test_only_the_top_dialog_is_closed() {
        let stack = vec![entry(1, None), entry(2, Some(true))];
        assert_eq!(closable_top(&stack), Some(2));
    }

    #[test]
    fn test_guarded_top_dialog_stays_open() {
        let stack = vec![entry(1, None), entry(2, Some(false))];
        assert_eq!(closable_top(&stack), None);
        assert_eq!(closable_top(&[]), None);
    }
}
