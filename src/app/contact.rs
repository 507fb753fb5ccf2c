use leptos::{either::*, ev, prelude::*};
use web_sys::Element;

use crate::contact::FormField;
use crate::nav::Section;

use super::components::{Backdrop, SectionHeading};
use super::icons::{Outline, OutlineIcon, Spinner};
use super::state::ViewState;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-white/5 border border-white/10 text-white placeholder-gray-500 focus:outline-none focus:border-cyan-400/50 focus:ring-2 focus:ring-cyan-400/20 transition-all duration-300";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-300 mb-2";

#[component]
pub fn ContactSection(state: ViewState) -> impl IntoView {
    // inputs are routed by their DOM id
    let on_input = move |ev: ev::Event| {
        let id = event_target::<Element>(&ev).id();
        match id.parse::<FormField>() {
            Ok(field) => state.set_field(field, event_target_value(&ev)),
            Err(err) => log::warn!("{}", err),
        }
    };
    let value = move |field: FormField| move || state.field(field);

    view! {
        <section id=Section::Contact.anchor() class="py-24 relative overflow-hidden">
            <Backdrop delay="1.5s" />
            <div class="max-w-4xl mx-auto px-6 relative z-10">
                <SectionHeading
                    section=Section::Contact
                    subtitle="Pronto per nuove sfide e opportunità di collaborazione"
                />
                <div class="relative">
                    <div class="absolute -inset-1 bg-gradient-to-r from-cyan-500/20 to-purple-500/20 rounded-3xl blur"></div>
                    <div class="relative glass-effect rounded-3xl p-8 md:p-12 border border-white/10">
                        <form
                            class="space-y-6"
                            on:submit=move |ev: ev::SubmitEvent| {
                                ev.prevent_default();
                                state.submit();
                            }
                        >
                            <div class="grid md:grid-cols-2 gap-6">
                                <div>
                                    <label for=FormField::Name.id() class=LABEL_CLASS>
                                        "Nome"
                                    </label>
                                    <input
                                        type="text"
                                        id=FormField::Name.id()
                                        prop:value=value(FormField::Name)
                                        on:input=on_input
                                        placeholder="Il tuo nome"
                                        class=INPUT_CLASS
                                        required=FormField::Name.is_required()
                                    />
                                </div>
                                <div>
                                    <label for=FormField::Email.id() class=LABEL_CLASS>
                                        "Email"
                                    </label>
                                    <input
                                        type="email"
                                        id=FormField::Email.id()
                                        prop:value=value(FormField::Email)
                                        on:input=on_input
                                        placeholder="la-tua-email@esempio.com"
                                        class=INPUT_CLASS
                                        required=FormField::Email.is_required()
                                    />
                                </div>
                            </div>
                            <div>
                                <label for=FormField::Subject.id() class=LABEL_CLASS>
                                    "Oggetto"
                                </label>
                                <input
                                    type="text"
                                    id=FormField::Subject.id()
                                    prop:value=value(FormField::Subject)
                                    on:input=on_input
                                    placeholder="Oggetto del messaggio"
                                    class=INPUT_CLASS
                                    required=FormField::Subject.is_required()
                                />
                            </div>
                            <div>
                                <label for=FormField::Message.id() class=LABEL_CLASS>
                                    "Messaggio"
                                </label>
                                <textarea
                                    id=FormField::Message.id()
                                    rows="6"
                                    prop:value=value(FormField::Message)
                                    on:input=on_input
                                    placeholder="Scrivi il tuo messaggio qui..."
                                    class=format!("{} resize-none", INPUT_CLASS)
                                    required=FormField::Message.is_required()
                                ></textarea>
                            </div>

                            <StatusPanel state />

                            <div class="flex justify-center pt-4">
                                <button
                                    type="submit"
                                    disabled=move || state.status().is_submitting()
                                    class="group inline-flex items-center px-10 py-4 bg-gradient-to-r from-cyan-500 to-purple-600 text-white rounded-xl font-medium transition-all duration-300 hover:scale-105 shadow-lg disabled:opacity-60 disabled:cursor-not-allowed disabled:hover:scale-100"
                                >
                                    {move || {
                                        if state.status().is_submitting() {
                                            Either::Left(
                                                view! {
                                                    <Spinner class="animate-spin -ml-1 mr-3 h-5 w-5 text-white" />
                                                    <span>"Invio in corso..."</span>
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    <span>"Invia Messaggio"</span>
                                                    <OutlineIcon
                                                        icon=Outline::Send
                                                        class="w-5 h-5 ml-2 rotate-90 group-hover:translate-x-1 transition-transform"
                                                    />
                                                },
                                            )
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Inline outcome of the last submission. `Submitted` only means the mail
/// client was asked to open.
#[component]
fn StatusPanel(state: ViewState) -> impl IntoView {
    move || {
        let status = state.status();
        if status.is_submitted() {
            EitherOf3::A(view! {
                <div class="flex items-center p-4 rounded-xl bg-green-500/10 border border-green-500/30 text-green-400">
                    <OutlineIcon icon=Outline::Check class="w-5 h-5 mr-3 flex-shrink-0" />
                    <span>"Messaggio inviato con successo! Grazie per avermi contattato."</span>
                </div>
            })
        } else if status.is_errored() {
            EitherOf3::B(view! {
                <div class="flex items-center p-4 rounded-xl bg-red-500/10 border border-red-500/30 text-red-400">
                    <OutlineIcon icon=Outline::Warning class="w-5 h-5 mr-3 flex-shrink-0" />
                    <span>
                        "Errore nell'invio del messaggio. Riprova o contattami direttamente via email."
                    </span>
                </div>
            })
        } else {
            EitherOf3::C(())
        }
    }
}
