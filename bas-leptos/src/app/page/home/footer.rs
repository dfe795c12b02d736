use bas_state::content::{assets, BRAND, COPYRIGHT, LEGAL_LINKS, NAV_LINKS, TAGLINE};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black text-white py-16 relative z-10">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8">
                    <div class="flex items-center gap-4">
                        <img src=assets::LOGO alt=BRAND class="w-12 h-12" />
                        <div>
                            <div class="font-bold text-lg">{BRAND}</div>
                            <div class="text-white/60 text-sm">{TAGLINE}</div>
                        </div>
                    </div>

                    <div class="flex gap-8">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="text-white/60 hover:text-[#ec7f30] transition-colors"
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex gap-4 text-sm text-white/40">
                        {LEGAL_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="hover:text-[#ec7f30] transition-colors"
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="border-t border-white/10 mt-12 pt-8 text-center text-white/40 text-sm">
                    {COPYRIGHT}
                </div>
            </div>
        </footer>
    }
}
