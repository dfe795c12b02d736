use bas_state::content::{mosaic_strip, BITART_CARDS, BITART_QUESTION, MINT_URL};
use bas_state::prelude::*;
use leptos::{html, prelude::*};

use crate::app::components::icons::ExternalLinkIcon;
use crate::app::hooks::use_parallax::use_parallax;
use crate::app::hooks::use_reveal::use_reveal;

#[component]
pub fn BitArt() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    let drift = use_parallax(section_ref, Parallax::BITART);

    let heading = Motion::fade_up(50.0, 800, 0);
    let cta = Motion::fade_up(30.0, 600, 400);

    let cards = BITART_CARDS
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let delay = 200 + 200 * index as u32;
            let motion = card.enter.motion(50.0, 600, delay);
            view! {
                <div
                    class="bg-white/5 backdrop-blur-sm rounded-3xl p-8 border border-white/10"
                    style=move || motion.style(revealed.get())
                >
                    <h3 class="text-2xl font-bold text-[#ec7f30] mb-4">{card.title}</h3>
                    <p class="opacity-80 leading-relaxed">{card.body}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::BitArt.id()
            node_ref=section_ref
            class="py-32 bg-black text-white overflow-hidden relative z-10"
        >
            <div class="container mx-auto px-6">
                <div class="text-center mb-16" style=move || heading.style(revealed.get())>
                    <h2 class="section-title mb-4">
                        <span class="text-[#ec7f30]">"MOSAIC"</span>
                        " BY BITART"
                    </h2>
                    <p class="text-xl opacity-80 max-w-2xl mx-auto">{BITART_QUESTION}</p>
                </div>

                <div class="relative overflow-hidden py-8" style=move || drift.get()>
                    <div class="flex gap-6 marquee">
                        {mosaic_strip()
                            .map(|(index, src)| {
                                view! {
                                    <div class="flex-shrink-0 w-64 h-40 rounded-2xl overflow-hidden transition-transform duration-300 hover:scale-105 hover:-translate-y-2.5">
                                        <img
                                            src=src
                                            alt=format!("Mosaic {}", index + 1)
                                            class="w-full h-full object-cover"
                                        />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="text-center mt-16" style=move || cta.style(revealed.get())>
                    <a
                        href=MINT_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-secondary inline-flex items-center gap-2 text-xl"
                    >
                        "Mint Now"
                        <ExternalLinkIcon size=20 />
                    </a>
                </div>

                <div class="grid md:grid-cols-2 gap-8 mt-20">{cards}</div>
            </div>
        </section>
    }
}
