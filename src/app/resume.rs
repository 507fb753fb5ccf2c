use leptos::prelude::*;

use crate::content::{Job, SkillGroup, Study};
use crate::nav::Section;

use super::components::{Backdrop, Rich, SectionHeading};
use super::icons::GlyphIcon;

#[component]
pub fn Expertise(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <section id=Section::Expertise.anchor() class="py-24 relative overflow-hidden">
            <Backdrop delay="1s" />
            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <SectionHeading
                    section=Section::Expertise
                    subtitle="Specialized in cutting-edge technologies and modern development practices"
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {groups.iter().map(|group| view! { <SkillCard group /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    let accent = group.accent;
    view! {
        <div class="group glass-effect rounded-2xl p-8 border border-white/10 hover:border-white/20 transition-all duration-500 hover:-translate-y-2">
            <div class="flex items-center justify-between mb-6">
                <h3 class=format!(
                    "text-2xl font-bold text-white {} transition-colors",
                    accent.hover_text(),
                )>{group.title.as_str()}</h3>
                <div class=format!("p-3 rounded-xl border {}", accent.badge())>
                    <GlyphIcon glyph=group.icon class="w-6 h-6" />
                </div>
            </div>
            <ul class="space-y-3">
                {group
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center group/item">
                                <div class=format!("w-2 h-2 rounded-full mr-3 {}", accent.dot())></div>
                                <span class="text-gray-300 group-hover/item:text-white transition-colors">
                                    {item.as_str()}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Experience(jobs: &'static [Job]) -> impl IntoView {
    view! {
        <section id=Section::Experience.anchor() class="py-24 relative overflow-hidden">
            <Backdrop delay="1s" />
            <div class="max-w-5xl mx-auto px-6 relative z-10">
                <SectionHeading
                    section=Section::Experience
                    subtitle="Professional journey in software development and technology"
                />
                <div class="space-y-8">
                    {jobs.iter().map(|job| view! { <JobCard job /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn JobCard(job: &'static Job) -> impl IntoView {
    let accent = job.accent;
    view! {
        <div class="group glass-effect rounded-2xl p-8 border border-white/10 hover:border-white/20 transition-all duration-500">
            <div class="relative z-10">
                <div class="flex flex-col md:flex-row items-start justify-between mb-6 gap-4">
                    <div class="flex items-center space-x-4">
                        <div class=format!(
                            "w-4 h-16 bg-gradient-to-b {} rounded-full",
                            accent.bar(),
                        )></div>
                        <div>
                            <h3 class=format!(
                                "text-2xl font-bold text-white {} transition-colors",
                                accent.hover_text(),
                            )>{job.title.as_str()}</h3>
                            <p class=format!("text-lg font-medium {}", accent.text())>
                                {job.company.as_str()}
                            </p>
                        </div>
                    </div>
                    <span class=format!(
                        "px-4 py-2 rounded-lg text-sm font-medium border {}",
                        accent.badge(),
                    )>{job.period.as_str()}</span>
                </div>
                <ul class="space-y-3 ml-8">
                    {job
                        .highlights
                        .iter()
                        .map(|line| {
                            view! {
                                <li class="flex items-start space-x-3">
                                    <div class=format!(
                                        "w-2 h-2 rounded-full mt-2 flex-shrink-0 {}",
                                        accent.dot(),
                                    )></div>
                                    <span class="text-gray-300">{line.as_str()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn Education(studies: &'static [Study]) -> impl IntoView {
    view! {
        <section id=Section::Education.anchor() class="py-24 relative overflow-hidden">
            <Backdrop delay="1.5s" />
            <div class="max-w-5xl mx-auto px-6 relative z-10">
                <SectionHeading
                    section=Section::Education
                    subtitle="Academic foundation and continuous learning journey"
                />
                <div class="space-y-8">
                    {studies.iter().map(|study| view! { <StudyCard study /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StudyCard(study: &'static Study) -> impl IntoView {
    let accent = study.accent;
    view! {
        <div class="group glass-effect rounded-2xl p-8 border border-white/10 hover:border-white/20 transition-all duration-500">
            <div class="flex flex-col md:flex-row items-start justify-between mb-6 gap-4">
                <div class="flex items-center space-x-4">
                    <div class=format!("p-3 rounded-xl border {}", accent.badge())>
                        <GlyphIcon glyph=study.icon class="w-8 h-8" />
                    </div>
                    <div>
                        <h3 class=format!(
                            "text-2xl font-bold text-white {} transition-colors",
                            accent.hover_text(),
                        )>{study.title.as_str()}</h3>
                        <p class=format!("text-lg font-medium {}", accent.text())>
                            {study.program.as_str()}
                        </p>
                        <p class="text-gray-400">{study.school.as_str()}</p>
                    </div>
                </div>
                <span class=format!(
                    "px-4 py-2 rounded-lg text-sm font-medium border {}",
                    accent.badge(),
                )>{study.period.as_str()}</span>
            </div>
            <p class="text-gray-300 leading-relaxed">
                <Rich spans=study.summary.as_slice() />
            </p>
        </div>
    }
}
