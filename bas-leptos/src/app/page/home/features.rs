use bas_state::content::{assets, FEATURES};
use bas_state::prelude::*;
use leptos::{html, prelude::*};

use crate::app::components::icons::ArrowRightIcon;
use crate::app::hooks::use_reveal::use_reveal;

#[component]
pub fn Features() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let cards = FEATURES
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let motion = Motion::new(
                Pose::new().opacity(0.0).y(50.0).rotate_x(10.0),
                Transition::new(600).stagger(0, 100, index),
            );

            let body = if feature.is_center {
                view! {
                    <h2 class="section-title text-white whitespace-pre-line text-4xl md:text-5xl mb-6">
                        {feature.title}
                    </h2>
                    <img src=assets::LOGO alt="BAS Logo" class="w-20 h-20 animate-sway" />
                }
                    .into_any()
            } else {
                view! {
                    <h3 class="text-2xl font-bold mb-2">{feature.title}</h3>
                    {feature
                        .subtitle
                        .map(|subtitle| view! { <p class="text-sm opacity-70 mb-4">{subtitle}</p> })}
                    {feature
                        .description
                        .map(|description| view! { <p class="opacity-80">{description}</p> })}
                    <div class="mt-auto pt-6 transition-transform hover:translate-x-[5px]">
                        <ArrowRightIcon class="opacity-60" />
                    </div>
                }
                    .into_any()
            };

            view! {
                <div class=feature.class() style=move || motion.style(revealed.get())>
                    {body}
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Features.id()
            node_ref=section_ref
            class="section py-32 bg-black relative z-10"
        >
            <div class="container mx-auto px-6">
                <div class="bento-grid">{cards}</div>
            </div>
        </section>
    }
}
