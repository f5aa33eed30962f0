use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{"ROYAL ENFIELD"}</h3>
                    <p>{"Pure motorcycling since 1901. The Hunter 350 is built for the streets you call home."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        <li><a href="#booking-form">{"Book a Test Ride"}</a></li>
                        <li><a href="#reviews">{"Reviews"}</a></li>
                        <li><a href="#dealers">{"Find a Dealer"}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Legal"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} Royal Enfield. All rights reserved.", year)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #09090b;
                    color: #a1a1aa;
                    padding: 3rem 1rem 1.5rem;
                }
                .footer-grid {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                }
                .footer-brand { color: #dc2626; font-weight: 700; margin-bottom: 0.5rem; }
                .site-footer h4 { color: white; margin-bottom: 0.5rem; }
                .site-footer ul { list-style: none; padding: 0; }
                .site-footer a { color: #a1a1aa; text-decoration: none; }
                .site-footer a:hover { color: #ef4444; }
                .footer-copy { text-align: center; margin-top: 2rem; font-size: 0.875rem; }
                "#}
            </style>
        </footer>
    }
}
