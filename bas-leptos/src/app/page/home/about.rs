use bas_state::content::{assets, ABOUT_BADGES, ABOUT_PARAGRAPHS, BRAND};
use bas_state::prelude::*;
use leptos::{html, prelude::*};

use crate::app::components::icons::ArrowRightIcon;
use crate::app::hooks::use_parallax::use_parallax;
use crate::app::hooks::use_reveal::use_reveal;

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let parallax = use_parallax(section_ref, Parallax::ABOUT);
    let revealed = use_reveal(section_ref);

    let text = Motion::fade_x(-100.0, 800, 0);
    let visual = Motion::fade_x(100.0, 800, 200);
    let [founded, community] = ABOUT_BADGES;
    let founded_motion = Motion::fade_up(20.0, 600, 600);
    let community_motion = Motion::fade_up(-20.0, 600, 800);

    view! {
        <section
            id=SectionId::About.id()
            node_ref=section_ref
            class="section py-32 overflow-hidden bg-black relative z-10"
        >
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-16 items-center" style=move || parallax.get()>
                    <div style=move || text.style(revealed.get())>
                        <h2 class="section-title text-white mb-8">
                            "DISCOVER"
                            <br />
                            <span class="gradient-text">"BITCOIN ART"</span>
                        </h2>
                        <div class="space-y-6 text-lg text-white/80">
                            {ABOUT_PARAGRAPHS
                                .into_iter()
                                .map(|paragraph| view! { <p>{paragraph}</p> })
                                .collect_view()}
                        </div>
                        <a
                            href=SectionId::BitArt.anchor()
                            class="btn-secondary inline-flex items-center gap-2 mt-8"
                        >
                            "Explore BitArt"
                            <ArrowRightIcon size=18 />
                        </a>
                    </div>

                    <div class="relative" style=move || visual.style(revealed.get())>
                        <div class="relative">
                            <div class="absolute -inset-4 bg-gradient-to-r from-[#ec7f30] to-[#c96820] rounded-3xl opacity-20 blur-2xl animate-glow"></div>
                            <img
                                src=assets::COVER
                                alt=BRAND
                                class="relative rounded-3xl shadow-2xl w-full"
                            />
                        </div>

                        <div
                            class="absolute -bottom-8 -left-8 bg-[#ec7f30] rounded-2xl p-6 shadow-xl"
                            style=move || founded_motion.style(revealed.get())
                        >
                            <div class="text-3xl font-bold text-white">{founded.value}</div>
                            <div class="text-sm text-white/80">{founded.label}</div>
                        </div>

                        <div
                            class="absolute -top-8 -right-8 bg-white rounded-2xl p-6 shadow-xl text-black"
                            style=move || community_motion.style(revealed.get())
                        >
                            <div class="text-3xl font-bold">{community.value}</div>
                            <div class="text-sm opacity-60">{community.label}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
