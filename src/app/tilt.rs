use leptos::{ev::MouseEvent, html, prelude::*};

use crate::tilt::{TiltState, SETTLE_SECS, TRACK_SECS};

/// Wraps content in a card that tilts toward the pointer. The rotation is
/// recomputed on every move event from the cursor offset within the card's
/// bounding box and settles back to rest when the pointer leaves.
#[component]
pub fn TiltCard(children: Children) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal(TiltState::default());
    let (settling, set_settling) = signal(false);

    let on_move = move |ev: MouseEvent| {
        let el = if let Some(el) = card_ref.get_untracked() {
            el
        } else {
            // not mounted yet, nothing to measure
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_settling(false);
        set_tilt(TiltState::from_pointer(
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
            rect.width(),
            rect.height(),
        ));
    };

    let on_leave = move |_: MouseEvent| {
        set_settling(true);
        set_tilt(TiltState::default());
    };

    view! {
        <div
            node_ref=card_ref
            class="perspective-1000"
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            <div
                class="preserve-3d"
                style=move || {
                    tilt.get().style(if settling() { SETTLE_SECS } else { TRACK_SECS })
                }
            >
                {children()}
            </div>
        </div>
    }
}
