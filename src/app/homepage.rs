use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::Contact,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    sections::{About, Experience, Projects, Skills},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-black text-white font-[Inter]">
            <Navbar />
            <Hero />
            <About />
            <Experience />
            <Projects />
            <Skills />
            <Contact />
            <Footer />
        </div>
    }
}
