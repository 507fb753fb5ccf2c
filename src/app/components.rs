use leptos::{either::*, prelude::*};

use crate::content::Span;
use crate::nav::Section;

/// Inline rich text: plain runs as-is, accented runs tinted and bold.
#[component]
pub fn Rich(spans: &'static [Span]) -> impl IntoView {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => Either::Left(text.as_str()),
            Span::Accented { accent, text } => Either::Right(view! {
                <span class=format!("{} font-semibold", accent.text())>{text.as_str()}</span>
            }),
        })
        .collect_view()
}

#[component]
pub fn SectionHeading(section: Section, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                <span class="gradient-text">{section.code_label()}</span>
            </h2>
            <p class="text-gray-400 text-lg max-w-2xl mx-auto">{subtitle}</p>
            <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-purple-500 mx-auto mt-6 rounded-full"></div>
        </div>
    }
}

/// Blurred colour blobs behind a section.
#[component]
pub fn Backdrop(#[prop(optional)] delay: &'static str) -> impl IntoView {
    view! {
        <div class="absolute inset-0 bg-gradient-to-br from-transparent via-cyan-500/5 to-purple-500/5"></div>
        <div class="absolute top-20 right-20 w-64 h-64 bg-cyan-500/10 rounded-full blur-3xl"></div>
        <div
            class="absolute bottom-20 left-20 w-72 h-72 bg-purple-500/10 rounded-full blur-3xl animate-float"
            style:animation-delay=delay
        ></div>
    }
}
