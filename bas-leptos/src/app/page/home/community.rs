use bas_state::content::{COMMUNITY_CARDS, COMMUNITY_STATS, COMMUNITY_TAGLINE, SOCIAL_LINKS};
use bas_state::prelude::*;
use leptos::{html, prelude::*};

use crate::app::hooks::use_reveal::use_reveal;

#[component]
pub fn Community() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    let heading = Motion::fade_up(50.0, 800, 0);
    let socials = Motion::fade_up(30.0, 600, 600);

    let stats = COMMUNITY_STATS
        .into_iter()
        .enumerate()
        .map(|(index, stat)| {
            let motion = Motion::new(
                Pose::new().opacity(0.0).y(30.0),
                Transition::new(500).stagger(0, 100, index),
            );
            view! {
                <div style=move || motion.style(revealed.get())>
                    <div class="h-full bg-black border border-[#ec7f30]/40 rounded-2xl p-6 text-center shadow-lg hover:border-[#ec7f30] transition-all duration-300 hover:-translate-y-[5px] hover:shadow-[0_20px_40px_rgba(236,127,48,0.2)]">
                        <div class="text-sm text-white/60 mb-2">{stat.label}</div>
                        <div class="text-lg font-bold text-white">{stat.value}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let cards = COMMUNITY_CARDS
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let motion = card
                .enter
                .motion(50.0, 600, 200 + 100 * index as u32);
            let class = match card.color {
                Some(color) => format!("feature-card {}", color.class()),
                None => String::from("feature-card"),
            };
            view! {
                <div class=class style=move || motion.style(revealed.get())>
                    <h3 class="text-2xl font-bold mb-4">{card.title}</h3>
                    <p class="opacity-80">{card.body}</p>
                </div>
            }
        })
        .collect_view();

    let links = SOCIAL_LINKS
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.name
                    class="w-14 h-14 bg-black rounded-full flex items-center justify-center text-white hover:bg-[#ec7f30] transition-all hover:scale-110 active:scale-90"
                >
                    {link.icon.map(|icon| view! { <img src=icon alt=link.name class="w-6 h-6 invert" /> })}
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Community.id()
            node_ref=section_ref
            class="py-32 bg-black relative z-10"
        >
            <div class="container mx-auto px-6">
                <div class="text-center mb-16" style=move || heading.style(revealed.get())>
                    <h2 class="section-title text-white mb-4">
                        "JOIN THE "
                        <span class="gradient-text">"COMMUNITY"</span>
                    </h2>
                    <p class="text-xl text-[#ec7f30] max-w-2xl mx-auto">{COMMUNITY_TAGLINE}</p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-16">{stats}</div>

                <div class="grid md:grid-cols-3 gap-8">{cards}</div>

                <div class="flex justify-center gap-6 mt-16" style=move || socials.style(revealed.get())>
                    {links}
                </div>
            </div>
        </section>
    }
}
