use leptos::prelude::*;

use crate::config::build_year;
use crate::content::{Accent, Portfolio};
use crate::nav::Section;

use super::hero::SocialLink;
use super::icons::{GithubIcon, LinkedinIcon, MailIcon};

#[component]
pub fn Footer(portfolio: &'static Portfolio) -> impl IntoView {
    let owner = &portfolio.owner;
    let links = &portfolio.links;
    let copyright = match build_year() {
        Some(year) => format!("© {} {}. {}", year, owner.full_name(), portfolio.footer.rights),
        None => format!("© {}. {}", owner.full_name(), portfolio.footer.rights),
    };
    let github = links.github.clone().unwrap_or_else(|| "#".to_string());

    view! {
        <footer class="relative overflow-hidden bg-gradient-to-t from-[#0a0f1a] to-[#121621] border-t border-white/10">
            <div class="absolute inset-0 bg-gradient-to-br from-transparent via-cyan-500/5 to-purple-500/5"></div>
            <div class="max-w-7xl mx-auto px-6 py-16 relative z-10">
                <div class="text-center">
                    <div class="flex justify-center items-center mb-8">
                        <div class="w-12 h-12 bg-gradient-to-br from-cyan-400 to-purple-500 rounded-2xl flex items-center justify-center mr-4 animate-glow">
                            <span class="text-white font-bold text-xl">{owner.initials.as_str()}</span>
                        </div>
                        <div>
                            <h3 class="text-xl font-bold">
                                <span class="gradient-text">{owner.full_name()}</span>
                            </h3>
                            <p class="text-gray-400 text-sm">{owner.role.as_str()}</p>
                        </div>
                    </div>

                    <div class="flex justify-center space-x-6 mb-8">
                        <SocialLink href=links.linkedin.clone() accent=Accent::Blue label="LinkedIn" large=true>
                            <LinkedinIcon class="w-6 h-6 text-gray-400 group-hover:text-blue-400 transition-colors" />
                        </SocialLink>
                        <SocialLink
                            href=format!("mailto:{}", links.primary_email)
                            accent=Accent::Cyan
                            label="Email"
                            large=true
                        >
                            <MailIcon class="w-6 h-6 text-gray-400 group-hover:text-cyan-400 transition-colors" />
                        </SocialLink>
                        <SocialLink href=github accent=Accent::Purple label="GitHub" large=true>
                            <GithubIcon class="w-6 h-6 text-gray-400 group-hover:text-purple-400 transition-colors" />
                        </SocialLink>
                    </div>

                    <div class="flex justify-center space-x-8 mb-8 text-sm">
                        {Section::FOOTER
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class="text-gray-400 hover:text-cyan-400 transition-colors"
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="border-t border-white/10 pt-8">
                        <p class="text-gray-400 text-sm">
                            {copyright}
                            <span class="block mt-2 text-xs">{portfolio.footer.note.as_str()}</span>
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
