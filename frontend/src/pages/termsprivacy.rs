use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Back to booking"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

const LEGAL_STYLE: &str = r#"
.legal-content {
    min-height: 100vh;
    background: #18181b;
    padding: 6rem 2rem 4rem;
    color: #fff;
    display: flex;
    flex-direction: column;
    align-items: center;
}
.legal-content h1 {
    font-size: 2rem;
    color: #dc2626;
    margin-bottom: 2.5rem;
    text-align: center;
}
.legal-content section {
    background: #27272a;
    border-radius: 12px;
    width: 100%;
    max-width: 640px;
    padding: 2rem;
    margin: 1rem auto;
    box-sizing: border-box;
}
.legal-content h2 {
    font-size: 1.2rem;
    margin-bottom: 0.75rem;
}
.legal-content p, .legal-content li {
    color: #d4d4d8;
    line-height: 1.6;
}
.legal-links {
    margin-top: 2rem;
}
.legal-links a {
    color: #ef4444;
    text-decoration: none;
}
"#;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What We Collect"}</h2>
                <p>{"When you book a test ride we collect:"}</p>
                <ul>
                    <li>{"Your full name"}</li>
                    <li>{"Mobile number (verified with a one-time code)"}</li>
                    <li>{"Email address"}</li>
                    <li>{"Pincode and, optionally, your address"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Why We Collect It"}</h2>
                <ul>
                    <li>{"To schedule your test ride with the nearest dealership"}</li>
                    <li>{"To contact you about your booking"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Who Sees It"}</h2>
                <p>{"Your details are shared only with the dealership handling your test ride. We do not sell your data."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"You can ask us to correct or delete your booking details at any time by contacting your dealership."}</p>
            </section>
            { legal_links() }
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h1>{"Test Ride Terms of Service"}</h1>

            <section>
                <h2>{"1. Eligibility"}</h2>
                <p>{"Riders must hold a valid two-wheeler driving licence and carry it to the dealership on the day of the ride."}</p>
            </section>

            <section>
                <h2>{"2. Booking"}</h2>
                <p>{"A booking is a request. The dealership will call the verified mobile number to confirm a slot; submitting the form does not guarantee availability."}</p>
            </section>

            <section>
                <h2>{"3. Safety"}</h2>
                <ul>
                    <li>{"Helmets are mandatory and will be provided if needed."}</li>
                    <li>{"Follow the route and instructions of the dealership staff."}</li>
                    <li>{"The dealership may refuse a ride if conditions are unsafe."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Changes"}</h2>
                <p>{"These terms may change for future bookings. The version shown when you submit applies to your ride."}</p>
            </section>
            { legal_links() }
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}
