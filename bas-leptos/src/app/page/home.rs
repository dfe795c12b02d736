use leptos::prelude::*;

use crate::app::components::navbar::Navbar;
use crate::app::components::scroll_indicator::ScrollIndicator;

use about::About;
use bitart::BitArt;
use community::Community;
use events::Events;
use features::Features;
use footer::Footer;
use hero::Hero;

mod about;
mod bitart;
mod community;
mod events;
mod features;
mod footer;
mod hero;

#[component]
pub fn Page() -> impl IntoView {
    view! {
        <main class="relative">
            <div class="noise-overlay"></div>
            <Navbar />
            <ScrollIndicator />
            <Hero />
            <Features />
            <About />
            <BitArt />
            <Events />
            <Community />
            <Footer />
        </main>
    }
}
