use leptos::{either::*, prelude::*};

use crate::section::Section;

use super::home::HomeSection;
use super::projects::ProjectGallery;
use super::skills::SkillsShowcase;

/// Renders exactly one view for the current selection. Placeholder sections
/// canonicalize to `Home`, so dispatch is total and never shows a "not
/// found" state.
#[component]
pub fn ActiveSection(section: ReadSignal<Section>) -> impl IntoView {
    move || match section.get().canonical() {
        Section::Projects => EitherOf3::A(view! { <ProjectGallery /> }),
        Section::Skills => EitherOf3::B(view! { <SkillsShowcase /> }),
        _ => EitherOf3::C(view! { <HomeSection /> }),
    }
}
