use leptos::prelude::*;

use crate::section::Section;

/// Bottom navigation pill. Stateless: the active section and the selection
/// handler are both injected by the shell.
#[component]
pub fn NavigationBar<F>(
    items: Vec<Section>,
    active: ReadSignal<Section>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(Section) + Clone + 'static,
{
    view! {
        <nav class="fixed bottom-8 left-1/2 -translate-x-1/2 z-50">
            <div class="flex space-x-4 bg-white/10 backdrop-blur-lg rounded-full p-2 border border-white/10 shadow-2xl">
                {items
                    .into_iter()
                    .map(|item| {
                        let on_select = on_select.clone();
                        view! {
                            <button
                                aria-label=item.key()
                                class=move || {
                                    if active() == item {
                                        "group relative p-3 rounded-full transition-all duration-300 bg-white/20 text-cyan-300"
                                    } else {
                                        "group relative p-3 rounded-full transition-all duration-300 text-white/60 hover:text-white/80"
                                    }
                                }
                                on:click=move |_| on_select(item)
                            >
                                <div class="relative">
                                    <i class=item.icon()></i>
                                    {move || {
                                        (active() == item)
                                            .then(|| {
                                                view! {
                                                    <span class="absolute -bottom-2 left-1/2 -translate-x-1/2 w-1 h-1 bg-cyan-300 rounded-full"></span>
                                                }
                                            })
                                    }}
                                </div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
