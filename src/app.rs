mod home;
mod nav;
mod particles;
mod projects;
mod sections;
mod skills;
mod tilt;

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::section::{resolve, Section};
use nav::NavigationBar;
use particles::ParticleField;
use sections::ActiveSection;

/// How long the outgoing section animates out before the incoming one is
/// swapped in. Must match the `section-leave` animation in input.css.
const SECTION_EXIT_MS: u64 = 300;

/// Entrance-delay step for staggered list items.
const STAGGER_STEP_MS: usize = 100;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#0f172a] text-white overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Oumaima Takrour - {title}") />

        <Router>
            <main class="min-h-screen relative">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
        </Router>
    }
}

/// The app shell: sole owner of the active-section cell. Section switching is
/// client-side state, not routing; the chosen key is mirrored into the URL
/// hash so sections stay deep-linkable.
#[component]
fn PortfolioPage() -> impl IntoView {
    let (active, set_active) = signal(Section::Home);
    let (displayed, set_displayed) = signal(Section::Home);
    let (leaving, set_leaving) = signal(false);

    // restore a deep-linked section after hydration, without animating
    Effect::new(move |_| {
        if let Some(hash) = location_hash() {
            let key = hash.trim_start_matches('#');
            if !key.is_empty() {
                let initial = resolve(key);
                set_active(initial);
                set_displayed(initial);
            }
        }
    });

    // swaps in whatever is active once the outgoing section has animated out
    let finish_swap = move || {
        set_displayed(active.get_untracked());
        set_leaving(false);
    };

    let on_select = move |next: Section| {
        let prev = active.get_untracked();
        set_active(next);
        if next == prev {
            // re-selecting the active section is a no-op re-render
            return;
        }
        log::debug!("section change: {next}");
        set_leaving(true);
        set_timeout(finish_swap, Duration::from_millis(SECTION_EXIT_MS));
        let _ = window().location().set_hash(next.key());
    };

    view! {
        <ParticleField />
        <div class=move || {
            if leaving() { "section-leave" } else { "section-enter" }
        }>
            <ActiveSection section=displayed />
        </div>
        <NavigationBar items=Section::ALL.to_vec() active on_select />
    }
}
