use yew::prelude::*;

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rahul Sharma",
        location: "Mumbai",
        quote: "The Hunter 350 is the perfect bike for city riding. Nimble, powerful, and turns heads wherever I go!",
        image: "https://avatars.githubusercontent.com/u/30511472?v=4",
        rating: 5,
    },
    Testimonial {
        name: "Priya Patel",
        location: "Bangalore",
        quote: "As a female rider, I was looking for something manageable but with character. The Hunter 350 delivers on both fronts.",
        image: "https://avatars.githubusercontent.com/u/30511472?v=4",
        rating: 4,
    },
    Testimonial {
        name: "Vikram Singh",
        location: "Delhi",
        quote: "The retro styling combined with modern features makes this bike a standout in its segment. Highly recommended!",
        image: "https://avatars.githubusercontent.com/u/30511472?v=4",
        rating: 5,
    },
];

fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

fn prev_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let active = use_state(|| 0usize);
    let len = TESTIMONIALS.len();
    let current = &TESTIMONIALS[*active];

    let on_prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(prev_index(*active, len)))
    };
    let on_next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(next_index(*active, len)))
    };

    let stars = (0..5u8).map(|i| {
        let class = if i < current.rating { "star filled" } else { "star" };
        html! { <span class={class}>{"★"}</span> }
    }).collect::<Html>();

    let dots = (0..len).map(|index| {
        let active = active.clone();
        let is_active = *active == index;
        html! {
            <button
                class={classes!("carousel-dot", is_active.then(|| "active"))}
                aria-label={format!("Show review {}", index + 1)}
                onclick={Callback::from(move |_: MouseEvent| active.set(index))}
            />
        }
    }).collect::<Html>();

    html! {
        <section class="testimonials" id="reviews">
            <div class="section-inner">
                <h2 class="section-title">{"What Riders Are Saying"}</h2>
                <div class="testimonial-card" key={*active}>
                    <div class="testimonial-avatar">
                        <img src={current.image} alt={current.name} />
                    </div>
                    <div class="testimonial-body">
                        <div class="testimonial-stars">{ stars }</div>
                        <p class="testimonial-quote">{format!("\"{}\"", current.quote)}</p>
                        <h4>{current.name}</h4>
                        <p class="testimonial-location">{current.location}</p>
                    </div>
                </div>
                <div class="carousel-controls">
                    <button class="carousel-arrow" onclick={on_prev} aria-label="Previous review">{"‹"}</button>
                    { dots }
                    <button class="carousel-arrow" onclick={on_next} aria-label="Next review">{"›"}</button>
                </div>
            </div>
            <style>
                {r#"
                .testimonials {
                    padding: 4rem 0;
                    background: #27272a;
                }
                .section-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .testimonial-card {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                    background: #3f3f46;
                    border-radius: 8px;
                    padding: 2rem;
                    animation: slideInRight 0.5s ease-out;
                }
                .testimonial-avatar img {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .star { color: #71717a; font-size: 1.25rem; }
                .star.filled { color: #eab308; }
                .testimonial-quote {
                    font-size: 1.25rem;
                    font-style: italic;
                    margin: 0.5rem 0 1rem;
                }
                .testimonial-location { color: #a1a1aa; }
                .carousel-controls {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .carousel-arrow {
                    background: #52525b;
                    color: white;
                    border: none;
                    border-radius: 50%;
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: none;
                    background: #52525b;
                    cursor: pointer;
                }
                .carousel-dot.active { background: #dc2626; }
                @keyframes slideInRight {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @media (max-width: 768px) {
                    .testimonial-card { flex-direction: column; text-align: center; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_both_ways() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
    }

    #[test]
    fn ratings_are_within_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
