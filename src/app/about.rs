use leptos::prelude::*;

use crate::content::{About, Links};
use crate::nav::Section;

use super::components::{Backdrop, Rich};
use super::icons::MailIcon;

#[component]
pub fn AboutMe(about: &'static About, links: &'static Links) -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="py-24 relative overflow-hidden">
            <Backdrop delay="2s" />
            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <div>
                            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                                <span class="gradient-text">{Section::About.code_label()}</span>
                            </h2>
                            <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-purple-500 rounded-full"></div>
                        </div>
                        <div class="space-y-6">
                            {about
                                .paragraphs
                                .iter()
                                .map(|p| {
                                    view! {
                                        <p class="text-lg text-gray-300 leading-relaxed">
                                            <Rich spans=p.as_slice() />
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            {about
                                .highlights
                                .iter()
                                .map(|h| {
                                    view! {
                                        <div class="glass-effect rounded-xl p-4 border border-white/10">
                                            <h4 class=format!(
                                                "{} font-semibold mb-2",
                                                h.accent.text(),
                                            )>{h.label.as_str()}</h4>
                                            <p class="text-gray-300 text-sm">{h.value.as_str()}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="glass-effect rounded-3xl p-8 border border-white/10">
                        <div class="flex items-center space-x-4 mb-8">
                            <div class="p-3 rounded-xl bg-gradient-to-br from-cyan-400 to-purple-500">
                                <MailIcon class="w-6 h-6 text-white" />
                            </div>
                            <h3 class="text-2xl font-bold text-white">"Contattami"</h3>
                        </div>
                        <div class="space-y-4">
                            <EmailCard label="Email Principale" address=links.primary_email.as_str() />
                            <EmailCard label="Email Alternativa" address=links.alternate_email.as_str() />
                        </div>
                        <div class="mt-8 pt-6 border-t border-white/10">
                            <p class="text-gray-400 text-sm text-center">{about.availability.as_str()}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Direct address, the fallback path when the form handoff does not work.
#[component]
fn EmailCard(label: &'static str, address: &'static str) -> impl IntoView {
    view! {
        <a
            href=format!("mailto:{}", address)
            class="group flex items-center p-4 rounded-xl hover:bg-white/5 transition-all duration-300"
        >
            <div class="p-2 rounded-lg bg-white/5 mr-4">
                <MailIcon class="w-5 h-5 text-cyan-400" />
            </div>
            <div>
                <p class="text-sm text-gray-400">{label}</p>
                <p class="text-white group-hover:text-cyan-400 transition-colors">{address}</p>
            </div>
        </a>
    }
}
