use bas_state::content::{assets, GLANCE_STATS, HERO_LINES, HERO_SUBTITLE};
use bas_state::motion::split_glyphs;
use bas_state::prelude::*;
use leptos::{html, prelude::*};

use crate::app::components::icons::ArrowRightIcon;
use crate::app::hooks::use_parallax::use_parallax;
use crate::app::hooks::use_reveal::use_mounted;

struct HeroLine {
    text: &'static str,
    class: &'static str,
    tilt: f64,
    delay_ms: u32,
    glyph_delay_ms: u32,
}

const LINES: [HeroLine; 2] = [
    HeroLine {
        text: HERO_LINES[0],
        class: "block bg-gradient-to-r from-white via-[#f5a55a] to-[#ec7f30] bg-clip-text text-transparent relative",
        tilt: 90.0,
        delay_ms: 200,
        glyph_delay_ms: 300,
    },
    HeroLine {
        text: HERO_LINES[1],
        class: "block bg-gradient-to-r from-[#ec7f30] via-[#f5a55a] to-white bg-clip-text text-transparent relative",
        tilt: -90.0,
        delay_ms: 800,
        glyph_delay_ms: 900,
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let parallax = use_parallax(section_ref, Parallax::HERO);
    let mounted = use_mounted();

    let title = Motion::new(Pose::new().opacity(0.0), Transition::new(500));
    let subtitle = Motion::fade_up(50.0, 800, 600);
    let buttons = Motion::fade_up(50.0, 800, 800);
    let glance = Motion::fade_up(50.0, 800, 1000);
    let logo = Motion::new(
        Pose::new().opacity(0.0).scale(0.0),
        Transition::new(800).delay(1800),
    );

    let lines = LINES
        .into_iter()
        .map(|line| {
            let motion = Motion::new(
                Pose::new()
                    .opacity(0.0)
                    .y(50.0)
                    .rotate_x(line.tilt)
                    .scale(0.8),
                Transition::new(800)
                    .delay(line.delay_ms)
                    .ease(Ease::Spring),
            );
            let glyphs = split_glyphs(line.text, line.glyph_delay_ms, 50)
                .into_iter()
                .map(|glyph| {
                    let motion = glyph.motion;
                    let min_width = if glyph.is_space { "0.3em" } else { "auto" };
                    view! {
                        <span style=move || {
                            format!(
                                "display: inline-block; min-width: {}; {}",
                                min_width,
                                motion.style(mounted.get()),
                            )
                        }>{glyph.text}</span>
                    }
                })
                .collect_view();

            view! {
                <span class=line.class style=move || motion.style(mounted.get())>
                    {glyphs}
                </span>
            }
        })
        .collect_view();

    let stats = GLANCE_STATS
        .into_iter()
        .enumerate()
        .map(|(index, stat)| {
            let motion = Motion::new(
                Pose::new().opacity(0.0).y(30.0),
                Transition::new(500).stagger(1200, 100, index),
            );
            view! {
                <div style=move || motion.style(mounted.get())>
                    <div class="h-full rounded-xl border border-[#ec7f30]/40 bg-black/50 backdrop-blur-sm p-6 min-h-[120px] transition-all duration-300 hover:border-[#ec7f30] hover:-translate-y-1 hover:shadow-[0_4px_16px_rgb(236,127,48,0.2)]">
                        <dt class="text-white/70 text-sm mb-2">{stat.label}</dt>
                        <dd class="text-white font-medium leading-snug">{stat.value}</dd>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Hero.id()
            node_ref=section_ref
            class="section min-h-screen flex flex-col items-center justify-center relative pt-32 md:pt-24 z-10"
        >
            <div
                class="container mx-auto px-6 text-center relative z-10 mt-8 md:mt-0"
                style=move || parallax.get()
            >
                <h1 class="hero-title mb-8 relative" style=move || title.style(mounted.get())>
                    {lines}
                </h1>

                <p
                    class="text-lg md:text-xl text-white/70 mb-12 max-w-2xl mx-auto leading-relaxed"
                    style=move || subtitle.style(mounted.get())
                >
                    {HERO_SUBTITLE}
                </p>

                <div
                    class="flex flex-col sm:flex-row gap-4 justify-center mb-20"
                    style=move || buttons.style(mounted.get())
                >
                    <a
                        href=SectionId::BitArt.anchor()
                        class="btn-primary inline-flex items-center gap-2 text-xl"
                    >
                        "Explore BitArt"
                        <ArrowRightIcon size=20 />
                    </a>
                    <a
                        href=SectionId::Events.anchor()
                        class="btn-secondary inline-flex items-center gap-2 text-xl"
                    >
                        "View Events"
                    </a>
                </div>

                <div class="max-w-5xl mx-auto" style=move || glance.style(mounted.get())>
                    <h2 class="text-[#ec7f30] text-2xl md:text-3xl font-semibold mb-8">
                        "At a glance"
                    </h2>
                    <dl class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">{stats}</dl>
                </div>

                <div class="mt-16" style=move || logo.style(mounted.get())>
                    <img
                        src=assets::LOGO
                        alt="BAS Logo"
                        class="w-20 h-20 mx-auto drop-shadow-2xl animate-bob"
                    />
                </div>
            </div>
        </section>
    }
}
