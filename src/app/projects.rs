use leptos::prelude::*;
use leptos_meta::Title;

use crate::data::{Project, PROJECTS};

use super::tilt::TiltCard;
use super::STAGGER_STEP_MS;

#[component]
pub fn ProjectGallery() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="max-w-4xl w-full grid md:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! { <ProjectCard project=project.clone() index /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let Project {
        name,
        description,
        technologies,
        link,
    } = project;

    view! {
        <div class="fade-in-up" style=format!("animation-delay: {}ms", index * STAGGER_STEP_MS)>
            <TiltCard>
                <div class="bg-white/5 border border-white/10 rounded-2xl p-6 transition-all duration-300 hover:border-cyan-300/30 backdrop-blur-sm">
                    <h3 class="text-2xl font-light text-white mb-3 tracking-tight flex items-center">
                        {name}
                        <i class="extra-arrow-up-right ml-2 text-cyan-300"></i>
                    </h3>

                    <p class="text-white/70 mb-4">{description}</p>

                    <div class="flex flex-wrap gap-2 mb-4">
                        {technologies
                            .into_iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                view! {
                                    <span
                                        class="px-2 py-1 rounded-full text-xs bg-white/10 text-white/80 fade-in-up"
                                        style=format!(
                                            "animation-delay: {}ms",
                                            400 + i * STAGGER_STEP_MS,
                                        )
                                    >
                                        {tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <a
                        href=link
                        class="inline-block px-4 py-2 rounded-full border border-white/20 text-white/80 hover:bg-cyan-300/10 hover:text-cyan-300 transition-all duration-300"
                    >
                        "View Project"
                    </a>
                </div>
            </TiltCard>
        </div>
    }
}
