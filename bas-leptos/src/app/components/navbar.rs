use bas_state::content::{assets, BRAND, JOIN_TARGET, NAV_LINKS};
use bas_state::prelude::*;
use leptos::prelude::*;

use crate::app::components::icons::{CloseIcon, MenuIcon};
use crate::app::hooks::use_reveal::use_mounted;
use crate::app::GlobalState;

const HEADER_TRANSITION: &str = "transition: transform 600ms ease-out, background-color 300ms, border-color 300ms, box-shadow 300ms;";

#[component]
pub fn Navbar() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    let menu = RwSignal::new(MobileMenu::default());
    let entered = use_mounted();
    let slide = Motion::new(Pose::new().y(-100.0), Transition::new(600));

    let nav_style = move || NavStyle::from_threshold(global_state.nav_past_threshold.get());

    let header_class = move || {
        format!(
            "fixed top-0 left-0 right-0 z-50 {}",
            nav_style().class()
        )
    };

    let header_style = move || {
        format!(
            "{} {} box-shadow: {};",
            slide.pose(entered.get()).css(),
            HEADER_TRANSITION,
            nav_style().box_shadow()
        )
    };

    let on_toggle = move |_| menu.update(MobileMenu::toggle);

    view! {
        <header class=header_class style=header_style>
            <nav class="container mx-auto px-6 md:px-8 py-4 md:py-5 flex items-center justify-between">
                <a href="#" class="flex items-center gap-2.5 transition-transform hover:scale-[1.02] active:scale-[0.98]">
                    <img src=assets::LOGO alt=BRAND class="w-7 h-7 md:w-9 md:h-9" />
                    <div class="hidden sm:block">
                        <div class="text-white font-semibold text-sm md:text-base leading-tight tracking-tight">
                            {BRAND}
                        </div>
                    </div>
                </a>

                <div class="hidden md:flex items-center gap-6 lg:gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href()
                                    class="text-white/80 text-sm font-medium hover:text-white transition-all hover:-translate-y-px"
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex items-center gap-4">
                    <a
                        href=JOIN_TARGET.anchor()
                        class="hidden md:inline-flex items-center gap-2 px-5 py-2 bg-[#ec7f30] text-white text-sm font-medium rounded-full hover:bg-[#f5a55a] transition-all duration-200 hover:scale-[1.03] active:scale-[0.97]"
                    >
                        "Join Us"
                    </a>

                    <button
                        type="button"
                        class="md:hidden p-2 rounded-full bg-[#ec7f30] text-white transition-transform active:scale-90"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=on_toggle
                    >
                        <Show when=move || menu.get().is_open() fallback=|| view! { <MenuIcon /> }>
                            <CloseIcon />
                        </Show>
                    </button>
                </div>
            </nav>

            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-black border-t border-[#ec7f30]/20 mobile-menu">
                    <div class="container mx-auto px-6 py-6 flex flex-col gap-4">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="text-white font-medium text-lg py-2"
                                        on:click=move |_| menu.update(MobileMenu::choose_link)
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=JOIN_TARGET.anchor()
                            class="btn-secondary text-center mt-4"
                            on:click=move |_| menu.update(MobileMenu::choose_link)
                        >
                            "JOIN US"
                        </a>
                    </div>
                </div>
            </Show>
        </header>
    }
}
