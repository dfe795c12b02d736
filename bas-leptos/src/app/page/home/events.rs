use bas_state::content::{assets, EVENTS};
use bas_state::prelude::*;
use leptos::{html, prelude::*};

use crate::app::hooks::use_reveal::use_reveal;

#[component]
pub fn Events() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    let heading = Motion::fade_up(50.0, 800, 0);

    let cards = EVENTS
        .into_iter()
        .enumerate()
        .map(|(index, event)| {
            let motion = Motion::new(
                Pose::new().opacity(0.0).y(50.0),
                Transition::new(600).stagger(0, 100, index),
            );

            let cover = match event.image {
                Some(image) => view! {
                    <div class="h-48 overflow-hidden">
                        <img
                            src=image
                            alt=event.title
                            class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                        />
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="h-48 bg-gradient-to-br from-[#ec7f30] to-[#c96820] flex items-center justify-center">
                        <img src=assets::LOGO alt="BAS Logo" class="w-20 h-20 opacity-50" />
                    </div>
                }
                .into_any(),
            };

            view! {
                <div style=move || motion.style(revealed.get())>
                    <div class="group h-full bg-black border border-[#ec7f30]/40 rounded-3xl overflow-hidden shadow-lg hover:shadow-2xl hover:border-[#ec7f30] transition-all duration-500 hover:-translate-y-2.5">
                        {cover}
                        <div class="p-6">
                            <div class="flex items-center justify-between mb-3">
                                <span class=format!(
                                    "text-xs font-semibold px-3 py-1 rounded-full {}",
                                    event.status.badge_class(),
                                )>{event.status.to_string()}</span>
                                <span class="text-sm text-white/60">{event.date}</span>
                            </div>
                            <h3 class="text-xl font-bold text-white mb-2">{event.title}</h3>
                            <p class="text-sm text-white/60 mb-3">{event.location}</p>
                            <p class="text-white/70">{event.description}</p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Events.id()
            node_ref=section_ref
            class="py-32 bg-black relative z-10"
        >
            <div class="container mx-auto px-6">
                <div class="text-center mb-16" style=move || heading.style(revealed.get())>
                    <h2 class="section-title text-white mb-4">
                        "GLOBAL "
                        <span class="gradient-text">"EVENTS"</span>
                    </h2>
                    <p class="text-xl text-white/70">
                        "Exhibitions, auctions, and community gatherings focused on Bitcoin-native art."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}
