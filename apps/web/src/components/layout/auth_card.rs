use leptos::prelude::*;

/// Two-panel card used by the login and two-factor pages. These pages render
/// without the navigation frame.
#[component]
pub fn AuthCard(
    icon: &'static str,
    heading: &'static str,
    tagline: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white flex items-center justify-center p-8">
            <div class="flex flex-col md:flex-row w-full max-w-7xl md:h-[800px] bg-white rounded-3xl shadow-2xl overflow-hidden">
                <div class="md:w-1/2 w-full bg-gradient-to-b from-[#DABEDB] to-[#C8A7CB] p-14 flex flex-col justify-center items-center text-white text-center">
                    <div class="text-4xl mb-4">{icon}</div>
                    <h2 class="text-3xl font-bold">{heading}</h2>
                    <h1 class="text-5xl font-extrabold mb-6">"FLAWLESS"</h1>
                    <p class="text-lg leading-relaxed">{tagline}</p>
                    <div class="mt-12">
                        <div class="rounded-full w-60 h-60 bg-[#fbe8fc] flex items-center justify-center shadow-2xl">
                            <img
                                src="/img/flawless.png"
                                alt="Logo"
                                class="w-60 h-60 rounded-full object-cover"
                            />
                        </div>
                    </div>
                </div>
                <div class="md:w-1/2 w-full p-14 flex flex-col justify-center">{children()}</div>
            </div>
        </div>
    }
}
