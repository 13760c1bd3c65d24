use leptos::{either::*, prelude::*};
use leptos_meta::Title;

use crate::data::{SkillCategory, SKILL_CATEGORIES};

use super::STAGGER_STEP_MS;

const ORBIT_RADIUS_PX: f64 = 260.0;

/// The two near-identical skills renderers share this section contract; the
/// grid is the default and the orbit layout is reachable from the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillsLayout {
    Grid,
    Orbit,
}

#[component]
pub fn SkillsShowcase() -> impl IntoView {
    let (layout, set_layout) = signal(SkillsLayout::Grid);
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <Title text="Skills" />
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="max-w-6xl w-full">
                <h2 class="text-4xl font-light text-center text-white mb-12 tracking-tight fade-in-up">
                    "Technical " <span class="text-cyan-300">"Expertise"</span>
                </h2>

                {move || match layout() {
                    SkillsLayout::Grid => {
                        Either::Left(view! { <SkillsGrid hovered set_hovered /> })
                    }
                    SkillsLayout::Orbit => {
                        Either::Right(view! { <SkillsOrbit hovered set_hovered /> })
                    }
                }}

                <div class="mt-12 flex justify-center items-center gap-4 text-sm text-white/60">
                    <p class="bg-white/5 rounded-full px-6 py-2 backdrop-blur-sm border border-white/10">
                        "Hover over categories to explore skills"
                    </p>
                    <button
                        class="bg-white/5 rounded-full px-6 py-2 backdrop-blur-sm border border-white/10 hover:text-cyan-300 transition-all duration-300"
                        on:click=move |_| {
                            set_layout(
                                match layout.get_untracked() {
                                    SkillsLayout::Grid => SkillsLayout::Orbit,
                                    SkillsLayout::Orbit => SkillsLayout::Grid,
                                },
                            )
                        }
                    >
                        {move || {
                            match layout() {
                                SkillsLayout::Grid => "Orbit view",
                                SkillsLayout::Orbit => "Grid view",
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillsGrid(
    hovered: ReadSignal<Option<usize>>,
    set_hovered: WriteSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {SKILL_CATEGORIES
                .iter()
                .enumerate()
                .map(|(index, category)| {
                    view! {
                        <CategoryCard category=category.clone() index hovered set_hovered />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillsOrbit(
    hovered: ReadSignal<Option<usize>>,
    set_hovered: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let count = SKILL_CATEGORIES.len();
    view! {
        <div class="relative h-[640px]">
            {SKILL_CATEGORIES
                .iter()
                .enumerate()
                .map(|(index, category)| {
                    let (dx, dy) = orbit_offset(index, count, ORBIT_RADIUS_PX);
                    view! {
                        <div
                            class="absolute left-1/2 top-1/2 w-64"
                            style=format!(
                                "transform: translate({}px, {}px) translate(-50%, -50%);",
                                dx,
                                dy,
                            )
                        >
                            <CategoryCard category=category.clone() index hovered set_hovered />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CategoryCard(
    category: SkillCategory,
    index: usize,
    hovered: ReadSignal<Option<usize>>,
    set_hovered: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let SkillCategory {
        name,
        icon,
        skills,
        color,
    } = category;
    let span_all = skills.len() == 1;

    view! {
        <div
            class=format!(
                "relative p-6 rounded-xl bg-gradient-to-br {} border border-white/10 backdrop-blur-sm group hover:border-cyan-300/30 transition-all duration-300 h-full fade-in-up",
                color,
            )
            style=format!("animation-delay: {}ms", index * STAGGER_STEP_MS)
            on:mouseenter=move |_| set_hovered(Some(index))
            on:mouseleave=move |_| set_hovered(None)
        >
            <div class="flex items-center mb-4">
                <span class="text-2xl mr-2">{icon}</span>
                <h3 class="text-xl font-light text-white">{name}</h3>
            </div>

            <div class="grid grid-cols-2 gap-3">
                {skills
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <div class=move || {
                                let mut class = String::from(
                                    "p-3 rounded-lg bg-white/5 border border-white/10 hover:border-cyan-300/30 hover:bg-white/10 transition-all duration-300",
                                );
                                if hovered() == Some(index) {
                                    class.push_str(" scale-105");
                                }
                                if span_all {
                                    class.push_str(" col-span-2");
                                }
                                class
                            }>
                                <p class="text-white/80 text-sm text-center">{skill}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class=move || {
                if hovered() == Some(index) {
                    "absolute -bottom-2 left-1/2 -translate-x-1/2 w-8 h-1 bg-cyan-300/50 rounded-full blur-sm opacity-100 transition-opacity duration-300"
                } else {
                    "absolute -bottom-2 left-1/2 -translate-x-1/2 w-8 h-1 bg-cyan-300/50 rounded-full blur-sm opacity-0 transition-opacity duration-300"
                }
            }></div>
        </div>
    }
}

/// Position of the `index`-th of `count` items on a circle of the given
/// radius, measured from the circle's center.
fn orbit_offset(index: usize, count: usize, radius: f64) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let angle = index as f64 / count as f64 * std::f64::consts::TAU;
    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_starts_at_three_oclock() {
        let (dx, dy) = orbit_offset(0, 6, 100.0);
        assert!((dx - 100.0).abs() < 1e-9);
        assert!(dy.abs() < 1e-9);
    }

    #[test]
    fn orbit_spreads_quarter_turns() {
        let (dx, dy) = orbit_offset(1, 4, 100.0);
        assert!(dx.abs() < 1e-9);
        assert!((dy - 100.0).abs() < 1e-9);
        let (dx, dy) = orbit_offset(2, 4, 100.0);
        assert!((dx + 100.0).abs() < 1e-9);
        assert!(dy.abs() < 1e-9);
    }

    #[test]
    fn orbit_keeps_radius() {
        for index in 0..6 {
            let (dx, dy) = orbit_offset(index, 6, ORBIT_RADIUS_PX);
            let r = (dx * dx + dy * dy).sqrt();
            assert!((r - ORBIT_RADIUS_PX).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_orbit_collapses_to_center() {
        assert_eq!(orbit_offset(0, 0, 100.0), (0.0, 0.0));
    }
}
