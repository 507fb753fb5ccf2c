use leptos::prelude::*;

use crate::content::Owner;
use crate::nav::Section;

use super::icons::MenuToggleIcon;
use super::state::ViewState;

#[component]
pub fn Brand(owner: &'static Owner) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <div class="w-10 h-10 bg-gradient-to-br from-cyan-400 to-purple-500 rounded-xl flex items-center justify-center animate-glow">
                <span class="text-white font-bold text-lg">{owner.initials.as_str()}</span>
            </div>
            <div>
                <div class="text-xl font-bold">
                    <span class="gradient-text">{owner.first_name.as_str()}</span>
                    <span class="text-white">" " {owner.last_name.as_str()}</span>
                </div>
                <div class="text-xs text-gray-400">{owner.role.as_str()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn Header(state: ViewState, owner: &'static Owner) -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 glass-effect border-b border-white/10">
            <div class="max-w-7xl mx-auto flex justify-between items-center p-6">
                <Brand owner />

                <nav class="hidden md:flex items-center space-x-8">
                    {Section::HEADER
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="relative group px-3 py-2 rounded-lg transition-all duration-300 hover:bg-white/5"
                                >
                                    <span class="text-gray-300 group-hover:text-cyan-400 transition-colors">
                                        {section.code_label()}
                                    </span>
                                    <div class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-to-r from-cyan-400 to-purple-500 group-hover:w-full transition-all duration-300"></div>
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=Section::Contact.href()
                        class="px-6 py-2 bg-gradient-to-r from-cyan-500 to-purple-600 text-white rounded-xl font-medium hover:from-cyan-600 hover:to-purple-700 transition-all duration-300 transform hover:scale-105 shadow-lg hover:shadow-cyan-500/25"
                    >
                        "Contact Me"
                    </a>
                </nav>

                <button
                    class="md:hidden p-2 rounded-lg bg-white/5 border border-white/10 text-white hover:bg-white/10 transition-all duration-300"
                    aria-label="Toggle navigation"
                    aria-expanded=move || state.menu_open().to_string()
                    on:click=move |_| state.toggle_menu()
                >
                    {move || view! { <MenuToggleIcon open=state.menu_open() class="w-5 h-5" /> }}
                </button>
            </div>
        </header>
        <Show when=move || state.menu_open()>
            <MobileMenu state />
        </Show>
    }
}

/// Full-screen overlay for small viewports. Any link closes it.
#[component]
fn MobileMenu(state: ViewState) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-40 glass-effect pt-20 p-6 md:hidden animate-fadeInUp">
            <div class="absolute inset-0 bg-gradient-to-br from-transparent via-cyan-500/5 to-purple-500/5"></div>
            <nav class="relative z-10 flex flex-col space-y-8 text-xl">
                {Section::HEADER
                    .into_iter()
                    .map(|section| {
                        view! {
                            <a
                                href=section.href()
                                on:click=move |_| state.close_menu()
                                class="group flex items-center space-x-4 p-4 rounded-xl hover:bg-white/5 transition-all duration-300"
                            >
                                <div class="w-2 h-2 bg-cyan-400 rounded-full group-hover:scale-125 transition-transform"></div>
                                <span class="text-gray-300 group-hover:text-cyan-400 transition-colors">
                                    {section.code_label()}
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
                <a
                    href=Section::Contact.href()
                    on:click=move |_| state.close_menu()
                    class="flex items-center justify-center mt-8 px-8 py-4 bg-gradient-to-r from-cyan-500 to-purple-600 text-white rounded-xl font-medium transition-all duration-300 transform hover:scale-105 shadow-lg"
                >
                    "Contact Me"
                </a>
            </nav>
        </div>
    }
}
