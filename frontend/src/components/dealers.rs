use web_sys::HtmlInputElement;
use yew::prelude::*;

pub struct Dealer {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub distance: &'static str,
}

const DEALERS: &[Dealer] = &[
    Dealer {
        name: "Royal Enfield Mumbai Central",
        address: "123 Marine Drive, Mumbai, Maharashtra 400001",
        phone: "+91 9876543210",
        distance: "2.5 km",
    },
    Dealer {
        name: "Royal Enfield Bandra",
        address: "456 Linking Road, Bandra West, Mumbai, Maharashtra 400050",
        phone: "+91 9876543211",
        distance: "5.8 km",
    },
    Dealer {
        name: "Royal Enfield Andheri",
        address: "789 Andheri East, Mumbai, Maharashtra 400069",
        phone: "+91 9876543212",
        distance: "12.3 km",
    },
];

/// Keeps digits only, at most six of them.
fn sanitize_pincode(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(6).collect()
}

fn directions_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(address)
    )
}

#[function_component(DealerLocator)]
pub fn dealer_locator() -> Html {
    let pincode = use_state(String::new);
    let searched = use_state(|| None::<String>);

    let oninput = {
        let pincode = pincode.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let clean = sanitize_pincode(&input.value());
            input.set_value(&clean);
            pincode.set(clean);
        })
    };

    let onsubmit = {
        let pincode = pincode.clone();
        let searched = searched.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if pincode.len() == 6 {
                searched.set(Some((*pincode).clone()));
            }
        })
    };

    html! {
        <section class="dealer-section" id="dealers">
            <div class="dealer-intro">
                <h2 class="section-title">{"Find a Dealer Near You"}</h2>
                <p>
                    {"Locate your nearest Royal Enfield dealership to book a test ride in person or get more information about the Hunter 350."}
                </p>
            </div>
            <div class="dealer-inner">
                <form class="dealer-search" {onsubmit}>
                    <input
                        type="text"
                        placeholder="Enter your pincode"
                        maxlength="6"
                        value={(*pincode).clone()}
                        {oninput}
                    />
                    <button type="submit">{"Find Dealers"}</button>
                </form>
                {
                    if let Some(code) = (*searched).as_ref() {
                        html! {
                            <div class="dealer-results">
                                <h3>{format!("Dealers near {}", code)}</h3>
                                { for DEALERS.iter().enumerate().map(|(i, dealer)| html! {
                                    <div class="dealer-card" style={format!("animation-delay: {:.1}s;", 0.1 * (i + 1) as f64)}>
                                        <div>
                                            <h4>{dealer.name}</h4>
                                            <p class="dealer-address">{dealer.address}</p>
                                            <p class="dealer-phone">{dealer.phone}</p>
                                        </div>
                                        <div class="dealer-side">
                                            <span class="dealer-distance">{dealer.distance}</span>
                                            <a
                                                class="dealer-directions"
                                                href={directions_url(dealer.address)}
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                {"Get Directions"}
                                            </a>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                .dealer-section {
                    padding: 4rem 1rem;
                    background: #27272a;
                }
                .dealer-intro {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }
                .dealer-intro p { color: #a1a1aa; }
                .dealer-inner {
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .dealer-search {
                    display: flex;
                    margin-bottom: 2rem;
                }
                .dealer-search input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    background: #3f3f46;
                    color: white;
                    border: none;
                    border-radius: 6px 0 0 6px;
                }
                .dealer-search button {
                    background: #dc2626;
                    color: white;
                    border: none;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0 6px 6px 0;
                    cursor: pointer;
                }
                .dealer-search button:hover { background: #b91c1c; }
                .dealer-results h3 { font-size: 1.25rem; margin-bottom: 1rem; }
                .dealer-card {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    background: #3f3f46;
                    padding: 1rem;
                    border-radius: 8px;
                    margin-bottom: 1rem;
                    opacity: 0;
                    animation: fadeUp 0.3s ease-out forwards;
                }
                .dealer-address { color: #a1a1aa; font-size: 0.875rem; margin-top: 0.25rem; }
                .dealer-phone { font-size: 0.875rem; margin-top: 0.5rem; }
                .dealer-side { text-align: right; }
                .dealer-distance { color: #a1a1aa; font-size: 0.875rem; }
                .dealer-directions {
                    display: block;
                    margin-top: 0.5rem;
                    color: #ef4444;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .dealer-directions:hover { color: #f87171; }
                "#}
            </style>
        </section>
    }
}
