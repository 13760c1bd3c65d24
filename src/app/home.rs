use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn HomeSection() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="min-h-screen flex flex-col justify-center items-center text-center px-4 relative">
            <div class="max-w-2xl text-white fade-in-up">
                <div class="w-32 h-32 mx-auto mb-6 rounded-full border-2 border-cyan-300/50 bg-white/5 flex items-center justify-center overflow-hidden">
                    <div class="w-28 h-28 rounded-full bg-gradient-to-br from-cyan-400/30 to-blue-500/30 animate-pulse"></div>
                </div>

                <h1 class="text-5xl font-extralight mb-4 tracking-tight">
                    <span class="text-cyan-300">"Oumaima Takrour"</span>
                </h1>

                <p class="text-xl text-white/70 mb-8 font-light tracking-wide">
                    "Full Stack Developer | Creating Digital Experiences"
                </p>

                <div class="flex justify-center space-x-4">
                    <a
                        href="https://github.com/OUMAIMAtakrour"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-2 rounded-full border border-white/20 bg-white/5 text-white/80 hover:bg-white/10 hover:text-cyan-300 transition-all duration-300 backdrop-blur-sm flex items-center space-x-2"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                        <span>"GitHub"</span>
                    </a>
                    <a
                        href="https://www.linkedin.com/in/oumaima-takrour/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-2 rounded-full border border-white/20 bg-white/5 text-white/80 hover:bg-white/10 hover:text-cyan-300 transition-all duration-300 backdrop-blur-sm flex items-center space-x-2"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                        <span>"LinkedIn"</span>
                    </a>
                </div>

                <p class="mt-16 text-xs text-white/30">"built " {env!("BUILD_TIME")}</p>
            </div>
        </div>
    }
}
