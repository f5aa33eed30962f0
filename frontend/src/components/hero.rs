use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

const HERO_IMAGE: &str = "https://gumlet.assettype.com/evoindia/2024-01/2808d83a-0df5-4a3e-982a-19c5d4c9e273/Hunter_350___Dapper_O__Orange__2.jpg";

const SPECS: &[(&str, &str)] = &[
    ("Engine", "349cc"),
    ("Power", "20.2 bhp"),
    ("Torque", "27 Nm"),
    ("Top Speed", "114 km/h"),
];

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds before the first letter appears.
    #[prop_or(0.1)]
    pub delay: f64,
    /// Seconds between consecutive letters.
    #[prop_or(0.05)]
    pub stagger: f64,
}

#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let letters = props.text.chars().enumerate().map(|(i, c)| {
        let style = format!("animation-delay: {:.2}s;", props.delay + props.stagger * i as f64);
        if c == ' ' {
            html! { <span class="letter" style={style}>{"\u{00a0}"}</span> }
        } else {
            html! { <span class="letter" style={style}>{c.to_string()}</span> }
        }
    }).collect::<Html>();

    html! {
        <h1 class={props.class.clone()} aria-label={props.text.clone()}>
            { letters }
        </h1>
    }
}

fn scroll_to_booking_form() {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("booking-form"));
    if let Some(target) = target {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let on_book = Callback::from(|_: MouseEvent| scroll_to_booking_form());

    html! {
        <div class="hero-side">
            <div class="hero-bike">
                <img src={HERO_IMAGE} alt="Royal Enfield Hunter 350" />
            </div>
            <div class="floating-specs">
                { for SPECS.iter().enumerate().map(|(i, (label, value))| html! {
                    <div class="spec-chip" style={format!("animation-delay: {}s;", 0.6 + 0.2 * i as f64)}>
                        <span class="spec-label">{*label}</span>
                        <span class="spec-value">{*value}</span>
                    </div>
                }) }
            </div>
            <div class="hero-copy">
                <AnimatedText text="HUNT YOUR HOOD" class={classes!("hero-title")} delay={0.1} stagger={0.05} />
                <p class="hero-tagline">
                    {"Book a test ride for the all-new Hunter 350 and experience the thrill."}
                </p>
                <button class="hero-cta" onclick={on_book}>{"BOOK TEST RIDE"}</button>
            </div>
            <style>
                {r#"
                .hero-side {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    padding: 1.5rem;
                }
                .hero-bike img {
                    width: 100%;
                    max-width: 640px;
                    border-radius: 12px;
                    animation: heroFloat 6s ease-in-out infinite;
                }
                .floating-specs {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    justify-content: center;
                    margin-top: 1rem;
                }
                .spec-chip {
                    background: rgba(39, 39, 42, 0.85);
                    border: 1px solid rgba(220, 38, 38, 0.4);
                    border-radius: 999px;
                    padding: 0.4rem 0.9rem;
                    display: flex;
                    gap: 0.5rem;
                    opacity: 0;
                    animation: fadeUp 0.6s ease-out forwards;
                }
                .spec-label { color: #a1a1aa; font-size: 0.8rem; }
                .spec-value { color: white; font-weight: 600; font-size: 0.8rem; }
                .hero-copy {
                    text-align: center;
                    margin-top: 2rem;
                }
                .hero-title {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 700;
                    color: #dc2626;
                    margin-bottom: 1rem;
                }
                .hero-title .letter {
                    display: inline-block;
                    opacity: 0;
                    animation: fadeUp 0.4s ease-out forwards;
                }
                .hero-tagline {
                    font-size: 1.25rem;
                    color: #d4d4d8;
                    margin-bottom: 1.5rem;
                    opacity: 0;
                    animation: fadeUp 0.6s ease-out 1.8s forwards;
                }
                .hero-cta {
                    display: none;
                    background: #dc2626;
                    color: white;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 6px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-cta:hover {
                    background: #b91c1c;
                    box-shadow: 0 0 15px rgba(220, 38, 38, 0.5);
                }
                @media (max-width: 1024px) {
                    .hero-cta { display: inline-block; }
                }
                @keyframes heroFloat {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}
