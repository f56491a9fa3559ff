use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay plus the dialog surface. Dialogs render their own header and
/// buttons inside.
#[component]
pub fn ModalFrame(
    /// Asked when the overlay is clicked; the host decides whether to close.
    on_close: Callback<()>,
    #[prop(optional)] z_index: Option<i32>,
    /// Extra class for `div.modal`
    #[prop(optional, into)]
    surface_class: String,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    // Both press and release must land on the overlay, so a text selection
    // that ends outside the dialog does not close it.
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(on_overlay(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let close = pressed_on_overlay.get_untracked() && on_overlay(&ev);
        pressed_on_overlay.set(false);
        if close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = if surface_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", surface_class)
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
