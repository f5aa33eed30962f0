use yew::prelude::*;

use crate::booking::notify::Notification;
use crate::components::booking_form::BookingForm;
use crate::components::dealers::DealerLocator;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::testimonials::Testimonials;
use crate::components::video::VideoSection;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub notify: Callback<Notification>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <section class="hero-section" id="top">
                <div class="hero-background"></div>
                <Hero />
                <div class="booking-side" id="booking-form">
                    <BookingForm notify={props.notify.clone()} />
                </div>
            </section>
            <Testimonials />
            <VideoSection />
            <DealerLocator />
            <Footer />
            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    padding-top: 5rem;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    background: radial-gradient(circle at 30% 40%, rgba(220, 38, 38, 0.15), transparent 60%);
                    animation: bgShift 12s ease-in-out infinite alternate;
                }
                .booking-side {
                    background: #27272a;
                    padding: 3rem;
                    display: flex;
                    align-items: center;
                    animation: slideInRight 0.8s ease-out;
                }
                @keyframes bgShift {
                    from { background-position: 0% 0%; }
                    to { background-position: 100% 100%; }
                }
                @media (max-width: 1024px) {
                    .hero-section { grid-template-columns: 1fr; }
                    .booking-side { padding: 1.5rem; }
                }
                "#}
            </style>
        </>
    }
}
