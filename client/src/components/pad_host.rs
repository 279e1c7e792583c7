//! Bridge component between Leptos state and the imperative drawing surface.
//!
//! ARCHITECTURE
//! ============
//! The `surface` crate owns stroke capture and pixels; this host maps DOM
//! pointer events into surface operations and services the toolbar's
//! clear/classify requests. The `Surface` is created once when the canvas
//! element mounts and is reachable only from here.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use surface::consts::PAD_SIZE_PX;
use surface::engine::Surface;

use crate::net::api;
use crate::state::classifier::ClassifierState;
use crate::state::ui::UiState;
use crate::util::pointer::pointer_point;

/// Pad host component.
///
/// Mounts the 280x280 canvas, binds a [`Surface`] to it, and forwards
/// pointer-down/move/up events. Pointer-leave is treated as an implicit
/// pointer-up so a drag that exits the pad cannot leave the gesture stuck
/// active.
#[component]
pub fn PadHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let classifier = expect_context::<RwSignal<ClassifierState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let surface = Rc::new(RefCell::new(None::<Surface>));
    let last_clear_seq = RwSignal::new(0_u64);
    let last_classify_seq = RwSignal::new(0_u64);

    // Bind the surface once the canvas element exists. Construction fails
    // only when no 2d context is available, in which case the pad stays
    // inert and the failure is reported to the console.
    {
        let surface = Rc::clone(&surface);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if surface.borrow().is_some() {
                return;
            }
            match Surface::new(canvas) {
                Ok(instance) => *surface.borrow_mut() = Some(instance),
                Err(error) => log::error!("drawing surface unavailable: {error}"),
            }
        });
    }

    // Clear requests from the toolbar.
    {
        let surface = Rc::clone(&surface);
        Effect::new(move || {
            let seq = ui.get().clear_seq;
            if seq == last_clear_seq.get_untracked() {
                return;
            }
            if let Some(surface) = surface.borrow().as_ref() {
                surface.clear();
            }
            last_clear_seq.set(seq);
        });
    }

    // Classify requests: export the raster, then submit it off the event
    // loop. The surface is not borrowed across the await point.
    {
        let surface = Rc::clone(&surface);
        Effect::new(move || {
            let seq = ui.get().classify_seq;
            if seq == last_classify_seq.get_untracked() {
                return;
            }
            last_classify_seq.set(seq);

            let exported = match surface.borrow().as_ref().map(Surface::to_jpeg_data_url) {
                Some(Ok(data_url)) => data_url,
                Some(Err(error)) => {
                    log::warn!("image export failed: {error}");
                    return;
                }
                None => return,
            };

            classifier.set(ClassifierState::Pending);
            wasm_bindgen_futures::spawn_local(async move {
                match api::classify(&exported).await {
                    Some(resp) => classifier.set(ClassifierState::Classified(resp.label())),
                    None => {
                        log::warn!("classification request failed");
                        classifier.set(ClassifierState::Idle);
                    }
                }
            });
        });
    }

    let on_pointer_down = {
        let canvas_ref = canvas_ref.clone();
        let surface = Rc::clone(&surface);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            if let Some(surface) = surface.borrow_mut().as_mut() {
                surface.on_pointer_down(pointer_point(&ev, &canvas));
            }
        }
    };

    let on_pointer_move = {
        let canvas_ref = canvas_ref.clone();
        let surface = Rc::clone(&surface);
        move |ev: leptos::ev::PointerEvent| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if let Some(surface) = surface.borrow_mut().as_mut() {
                surface.on_pointer_move(pointer_point(&ev, &canvas));
            }
        }
    };

    let on_pointer_up = {
        let canvas_ref = canvas_ref.clone();
        let surface = Rc::clone(&surface);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas) = canvas_ref.get() {
                let _ = canvas.release_pointer_capture(ev.pointer_id());
            }
            if let Some(surface) = surface.borrow_mut().as_mut() {
                surface.on_pointer_up();
            }
        }
    };

    // Implicit pointer-up: a lost up event (focus change, pointer leaving
    // the pad) must not leave the gesture active.
    let on_pointer_leave = {
        let canvas_ref = canvas_ref.clone();
        let surface = Rc::clone(&surface);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas) = canvas_ref.get() {
                let _ = canvas.release_pointer_capture(ev.pointer_id());
            }
            if let Some(surface) = surface.borrow_mut().as_mut() {
                surface.on_pointer_up();
            }
        }
    };

    view! {
        <canvas
            class="pad"
            node_ref=canvas_ref
            width=PAD_SIZE_PX
            height=PAD_SIZE_PX
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
