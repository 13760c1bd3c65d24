use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::particles::{generate_batch, Particle, PARTICLE_COUNT, REGEN_INTERVAL_MS};

/// Decorative background layer. Starts empty (the server renders nothing),
/// fills once on mount, then swaps in a fresh batch on every interval tick.
/// The interval is cleared when the component is unmounted.
#[component]
pub fn ParticleField(#[prop(default = PARTICLE_COUNT)] count: usize) -> impl IntoView {
    let (particles, set_particles) = signal(Vec::<Particle>::new());

    let regenerate = move || {
        let width = window()
            .inner_width()
            .expect("should be able to get window width")
            .as_f64()
            .expect("window width should be a number");
        let height = window()
            .inner_height()
            .expect("should be able to get window height")
            .as_f64()
            .expect("window height should be a number");
        set_particles(generate_batch(count, width, height));
    };

    Effect::new(move |_| regenerate());
    let _ = use_interval_fn(regenerate, REGEN_INTERVAL_MS);

    view! {
        <div class="fixed inset-0 z-[-1] overflow-hidden pointer-events-none">
            {move || {
                particles
                    .get()
                    .into_iter()
                    .map(|p| {
                        view! {
                            <div
                                class="absolute rounded-full bg-cyan-300/20 blur-sm"
                                style=format!(
                                    "left: {}px; top: {}px; width: {}px; height: {}px; opacity: {}; animation: float {}s infinite alternate;",
                                    p.x,
                                    p.y,
                                    p.size,
                                    p.size,
                                    p.opacity,
                                    p.float_secs(),
                                )
                            ></div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
