use leptos::{either::*, prelude::*};
use leptos_meta::{Meta, Title};

use crate::config::SiteConfig;
use crate::content::{plain_text, portfolio};

use super::about::AboutMe;
use super::contact::ContactSection;
use super::footer::Footer;
use super::header::Header;
use super::hero::Hero;
use super::resume::{Education, Experience, Expertise};
use super::state::ViewState;

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = match portfolio() {
        Ok(p) => p,
        Err(err) => {
            log::error!("{}", err);
            return Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center text-gray-400">"This page is temporarily unavailable."</p>
            });
        }
    };
    let state = ViewState::new(SiteConfig::from_build_env());

    Either::Left(view! {
        <Title text=portfolio.owner.role.clone() />
        <Meta name="description" content=plain_text(&portfolio.owner.tagline) />
        <div class="min-h-screen bg-[#121621] text-white font-mono">
            <Header state owner=&portfolio.owner />
            <Hero state portfolio />
            <Expertise groups=portfolio.expertise.as_slice() />
            <Experience jobs=portfolio.experience.as_slice() />
            <Education studies=portfolio.education.as_slice() />
            <AboutMe about=&portfolio.about links=&portfolio.links />
            <ContactSection state />
            <Footer portfolio />
        </div>
    })
}
