use leptos::prelude::*;

use crate::content::{Accent, Portfolio};
use crate::motion::Decoration;
use crate::nav::Section;

use super::components::Rich;
use super::icons::{GithubIcon, LinkedinIcon, MailIcon, Outline, OutlineIcon};
use super::state::ViewState;

#[component]
pub fn Hero(state: ViewState, portfolio: &'static Portfolio) -> impl IntoView {
    let owner = &portfolio.owner;
    let links = &portfolio.links;
    let transform = move |deco: Decoration| move || deco.transform(state.scroll_y());
    let github = links.github.clone().unwrap_or_else(|| "#".to_string());

    view! {
        <section
            id=Section::Home.anchor()
            class="min-h-screen flex flex-col justify-center items-center relative overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div
                    class="absolute top-20 left-10 w-4 h-4 bg-cyan-400 rotate-45 animate-float"
                    style:animation-delay="0s"
                ></div>
                <div
                    class="absolute top-40 right-20 w-6 h-6 border-2 border-amber-500 rotate-12 animate-float"
                    style:animation-delay="1s"
                ></div>
                <div
                    class="absolute bottom-40 left-20 w-3 h-3 bg-purple-500 rounded-full animate-float"
                    style:animation-delay="2s"
                ></div>
                <div
                    class="absolute bottom-20 right-10 w-5 h-5 border-2 border-cyan-400 animate-float"
                    style:animation-delay="0.5s"
                ></div>

                <div
                    class="absolute top-1/2 left-1/3 w-48 h-48 bg-gradient-to-br from-amber-500/30 to-amber-700/30 backdrop-blur-sm border border-amber-500/20 rounded-2xl"
                    style:transform=transform(Decoration::AmberPrism)
                ></div>
                <div
                    class="absolute top-1/3 right-1/4 w-40 h-40 bg-gradient-to-br from-cyan-500/30 to-blue-700/30 backdrop-blur-sm border border-cyan-500/20 rounded-2xl"
                    style:transform=transform(Decoration::CyanPrism)
                ></div>

                <div
                    class="absolute w-72 h-72 bg-cyan-500/20 rounded-full blur-3xl animate-pulse-slow"
                    style:top="20%"
                    style:left="10%"
                    style:transform=transform(Decoration::CyanOrb)
                ></div>
                <div
                    class="absolute w-96 h-96 bg-purple-500/20 rounded-full blur-3xl animate-pulse-slow"
                    style:top="60%"
                    style:right="10%"
                    style:animation-delay="1s"
                    style:transform=transform(Decoration::PurpleOrb)
                ></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 pt-24 flex flex-col md:flex-row items-center gap-12">
                <div class="relative flex-shrink-0 animate-fadeInUp">
                    <div class="relative w-72 h-72 md:w-96 md:h-96 rounded-3xl p-1 bg-gradient-to-br from-cyan-400 via-purple-500 to-amber-500">
                        <div class="w-full h-full rounded-3xl overflow-hidden bg-[#121621]">
                            <img
                                src=state.asset(&owner.photo)
                                alt=owner.full_name()
                                width="384"
                                height="384"
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                    <div class="absolute -top-4 -right-4 w-8 h-8 bg-cyan-400 rounded-lg rotate-12 animate-float"></div>
                    <div
                        class="absolute -bottom-4 -left-4 w-6 h-6 bg-purple-500 rounded-full animate-float"
                        style:animation-delay="1s"
                    ></div>
                </div>

                <div
                    class="text-center md:text-left animate-fadeInUp"
                    style:animation-delay="0.3s"
                >
                    <div class="mb-6">
                        <span class="inline-block px-4 py-2 rounded-full bg-white/5 border border-white/10 text-sm text-gray-300">
                            {owner.greeting.as_str()}
                        </span>
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        <span class="gradient-text">"Full-Stack"</span>
                        <br />
                        <span class="text-white">"Developer"</span>
                    </h1>
                    <div class="mb-6">
                        <p class="text-2xl md:text-3xl text-gray-300 font-light">
                            {owner.full_name()}
                        </p>
                        <div class="w-20 h-1 bg-gradient-to-r from-cyan-400 to-purple-500 mt-4 rounded-full mx-auto md:mx-0"></div>
                    </div>
                    <p class="text-lg text-gray-400 max-w-xl mb-10 leading-relaxed">
                        <Rich spans=owner.tagline.as_slice() />
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start">
                        <a
                            href=Section::Expertise.href()
                            class="group inline-flex items-center justify-center px-8 py-4 bg-gradient-to-r from-cyan-500 to-purple-600 text-white rounded-xl font-medium transition-all duration-300 hover:scale-105 shadow-lg"
                        >
                            <span>"Explore My Work"</span>
                            <OutlineIcon
                                icon=Outline::ArrowRight
                                class="w-5 h-5 ml-2 group-hover:translate-x-1 transition-transform"
                            />
                        </a>
                        <a
                            href=Section::Contact.href()
                            class="inline-flex items-center justify-center px-8 py-4 border border-white/20 text-white rounded-xl font-medium transition-all duration-300 hover:bg-white/5 hover:border-cyan-400/50"
                        >
                            <OutlineIcon icon=Outline::Chat class="w-5 h-5 mr-2" />
                            <span>"Let's Talk"</span>
                        </a>
                    </div>

                    <div class="flex justify-center md:justify-start space-x-6 mt-8">
                        <SocialLink href=github accent=Accent::Cyan label="GitHub">
                            <GithubIcon class="w-5 h-5 text-gray-400 group-hover:text-cyan-400 transition-colors" />
                        </SocialLink>
                        <SocialLink href=links.linkedin.clone() accent=Accent::Blue label="LinkedIn">
                            <LinkedinIcon class="w-5 h-5 text-gray-400 group-hover:text-blue-400 transition-colors" />
                        </SocialLink>
                        <SocialLink
                            href=format!("mailto:{}", links.primary_email)
                            accent=Accent::Amber
                            label="Email"
                        >
                            <MailIcon class="w-5 h-5 text-gray-400 group-hover:text-amber-400 transition-colors" />
                        </SocialLink>
                    </div>
                </div>
            </div>

            <div
                class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-fadeInUp"
                style:animation-delay="1s"
            >
                <div class="flex flex-col items-center space-y-2">
                    <p class="text-xs text-gray-500 uppercase tracking-widest">"Scroll to explore"</p>
                    <div class="w-6 h-10 border-2 border-white/20 rounded-full flex justify-center">
                        <div class="w-1 h-3 bg-cyan-400 rounded-full mt-2 animate-bounce"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Round icon button linking out; opens a new tab unless it is a mailto.
#[component]
pub fn SocialLink(
    href: String,
    accent: Accent,
    label: &'static str,
    #[prop(optional)] large: bool,
    children: Children,
) -> impl IntoView {
    let external = href.starts_with("http");
    let padding = if large { "p-4" } else { "p-3" };
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            aria-label=label
            class=format!(
                "{padding} rounded-full bg-white/5 backdrop-blur-sm border border-white/10 {} transition-all duration-300 hover:scale-110 hover:bg-white/10 group",
                accent.hover_border(),
            )
        >
            {children()}
        </a>
    }
}
