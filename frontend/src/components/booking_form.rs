use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::booking::form::{submit, LeadForm};
use crate::booking::lead::{Field, FieldValue};
use crate::booking::notify::{DelayedNotifier, Notification};
use crate::booking::sink::ConfiguredSink;
use crate::booking::verification::{MockCodeVerifier, VerificationState};
use crate::components::otp_input::OtpInput;
use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub notify: Callback<Notification>,
}

fn error_line(message: Option<&str>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let form = use_mut_ref(LeadForm::default);
    let update = use_update();
    let sink = use_memo(|_| ConfiguredSink::from_config(), ());
    let focused = use_state(|| None::<Field>);

    let on_text_input = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = Field::from_name(&input.name()) {
                form.borrow_mut().update_field(field, FieldValue::Text(input.value()));
                update();
            }
        })
    };

    let on_address_input = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.borrow_mut().update_field(Field::Address, input.value());
            update();
        })
    };

    let on_terms_change = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().update_field(Field::TermsAccepted, input.checked());
            update();
        })
    };

    let on_send_otp = {
        let form = form.clone();
        let update = update.clone();
        let delayed = DelayedNotifier {
            target: props.notify.clone(),
            delay_ms: config::OTP_SENT_DELAY_MS,
        };
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            form.borrow_mut().request_verification(&delayed);
            update();
        })
    };

    let on_verify = {
        let form = form.clone();
        let update = update.clone();
        let notify = props.notify.clone();
        Callback::from(move |code: String| {
            form.borrow_mut()
                .submit_verification_code(&code, &MockCodeVerifier::default(), &notify);
            update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let update = update.clone();
        let notify = props.notify.clone();
        let sink = sink.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form.clone();
            let update = update.clone();
            let notify = notify.clone();
            let sink: Rc<ConfiguredSink> = sink.clone();
            spawn_local(async move {
                let started = {
                    let update = update.clone();
                    move || update()
                };
                submit(&form, sink.as_ref(), &notify, started).await;
                update();
            });
        })
    };

    let focus_handlers = |field: Field| {
        let onfocus = {
            let focused = focused.clone();
            Callback::from(move |_: FocusEvent| focused.set(Some(field)))
        };
        let onblur = {
            let focused = focused.clone();
            Callback::from(move |_: FocusEvent| focused.set(None))
        };
        (onfocus, onblur)
    };

    let state = form.borrow().clone();
    let record = state.record();
    let errors = state.errors();
    let verification = state.verification();
    let is_verified = verification == VerificationState::Verified;
    let is_busy = state.is_busy();
    let submit_disabled = !state.can_submit();

    let input_class = |field: Field| classes!("form-input", errors.contains(field).then(|| "has-error"));
    let focus_icon = |field: Field, icon: &'static str| {
        if *focused == Some(field) {
            html! { <span class="field-icon">{icon}</span> }
        } else {
            html! {}
        }
    };

    let (name_focus, name_blur) = focus_handlers(Field::Name);
    let (mobile_focus, mobile_blur) = focus_handlers(Field::Mobile);
    let (email_focus, email_blur) = focus_handlers(Field::Email);
    let (pincode_focus, pincode_blur) = focus_handlers(Field::Pincode);
    let (address_focus, address_blur) = focus_handlers(Field::Address);

    html! {
        <div class="booking-form-wrapper">
            <div class="glow glow-top"></div>
            <div class="glow glow-bottom"></div>
            <h2 class="booking-title">{"Book Your Test Ride"}</h2>

            <form class="booking-form" onsubmit={on_submit} novalidate={true}>
                <div class="form-item">
                    <label for="name">{"Full Name"}</label>
                    <div class="input-wrap">
                        <input
                            type="text"
                            id="name"
                            name={Field::Name.as_str()}
                            class={input_class(Field::Name)}
                            placeholder="John Doe"
                            value={record.name.clone()}
                            oninput={on_text_input.clone()}
                            onfocus={name_focus}
                            onblur={name_blur}
                        />
                        { focus_icon(Field::Name, "👤") }
                    </div>
                    { error_line(errors.get(Field::Name)) }
                </div>

                <div class="form-item">
                    <label for="mobile">{"Mobile Number"}</label>
                    <div class="mobile-row">
                        <div class="country-prefix"><span>{"+91"}</span></div>
                        <input
                            type="text"
                            id="mobile"
                            name={Field::Mobile.as_str()}
                            class={classes!(input_class(Field::Mobile), "mobile-input", is_verified.then(|| "verified"))}
                            placeholder="9876543210"
                            maxlength="10"
                            disabled={is_verified}
                            value={record.mobile.clone()}
                            oninput={on_text_input.clone()}
                            onfocus={mobile_focus}
                            onblur={mobile_blur}
                        />
                        {
                            if is_verified {
                                html! { <div class="verified-badge" title="Verified">{"✓"}</div> }
                            } else {
                                html! {
                                    <button type="button" class="send-otp-button" onclick={on_send_otp}>
                                        { if verification == VerificationState::ChallengeSent { "Resend" } else { "Verify" } }
                                    </button>
                                }
                            }
                        }
                    </div>
                    { error_line(errors.get(Field::Mobile)) }
                    {
                        if verification == VerificationState::ChallengeSent {
                            html! { <OtpInput on_verify={on_verify} /> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="form-item">
                    <label for="email">{"Email Address"}</label>
                    <div class="input-wrap">
                        <input
                            type="email"
                            id="email"
                            name={Field::Email.as_str()}
                            class={input_class(Field::Email)}
                            placeholder="john@example.com"
                            value={record.email.clone()}
                            oninput={on_text_input.clone()}
                            onfocus={email_focus}
                            onblur={email_blur}
                        />
                        { focus_icon(Field::Email, "✉") }
                    </div>
                    { error_line(errors.get(Field::Email)) }
                </div>

                <div class="form-item">
                    <label for="pincode">{"Pincode"}</label>
                    <div class="input-wrap">
                        <input
                            type="text"
                            id="pincode"
                            name={Field::Pincode.as_str()}
                            class={input_class(Field::Pincode)}
                            placeholder="400001"
                            maxlength="6"
                            value={record.pincode.clone()}
                            oninput={on_text_input}
                            onfocus={pincode_focus}
                            onblur={pincode_blur}
                        />
                        { focus_icon(Field::Pincode, "📍") }
                    </div>
                    { error_line(errors.get(Field::Pincode)) }
                </div>

                <div class="form-item">
                    <label for="address">{"Address"}</label>
                    <textarea
                        id="address"
                        name={Field::Address.as_str()}
                        class="form-input"
                        placeholder="Your full address"
                        rows="3"
                        value={record.address.clone()}
                        oninput={on_address_input}
                        onfocus={address_focus}
                        onblur={address_blur}
                    />
                </div>

                <div class="form-item terms-row">
                    <input
                        type="checkbox"
                        id="termsAccepted"
                        name={Field::TermsAccepted.as_str()}
                        checked={record.terms_accepted}
                        onchange={on_terms_change}
                    />
                    <div class="terms-text">
                        <label for="termsAccepted">
                            {"I agree to the "}
                            <Link<Route> to={Route::Terms} classes="terms-link">{"Terms of Service"}</Link<Route>>
                            {" and "}
                            <Link<Route> to={Route::Privacy} classes="terms-link">{"Privacy Policy"}</Link<Route>>
                        </label>
                        { error_line(errors.get(Field::TermsAccepted)) }
                    </div>
                </div>

                <button
                    type="submit"
                    class={classes!("submit-button", submit_disabled.then(|| "disabled"))}
                    disabled={submit_disabled}
                >
                    {
                        if is_busy {
                            html! { <div class="submit-busy"><span class="button-spinner"></span>{"Processing..."}</div> }
                        } else {
                            html! { {"SUBMIT"} }
                        }
                    }
                </button>
            </form>
            <style>
                {r#"
                .booking-form-wrapper {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 auto;
                }
                .glow {
                    position: absolute;
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: rgba(220, 38, 38, 0.2);
                    filter: blur(24px);
                    animation: glowPulse 4s ease-in-out infinite alternate;
                }
                .glow-top { top: -2.5rem; right: -2.5rem; }
                .glow-bottom { bottom: -2.5rem; left: -2.5rem; animation-delay: 2s; }
                @keyframes glowPulse {
                    from { transform: scale(1); opacity: 0.5; }
                    to { transform: scale(1.2); opacity: 0.8; }
                }
                .booking-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .booking-form {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .form-item label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.25rem;
                }
                .input-wrap {
                    position: relative;
                }
                .form-input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: #3f3f46;
                    color: white;
                    border: 1px solid transparent;
                    border-radius: 6px;
                    transition: all 0.2s ease;
                    box-sizing: border-box;
                }
                .form-input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #ef4444;
                    transform: scale(1.01);
                }
                .form-input.has-error {
                    border-color: #ef4444;
                }
                .field-icon {
                    position: absolute;
                    right: 0.75rem;
                    top: 50%;
                    transform: translateY(-50%);
                    color: #ef4444;
                }
                .field-error {
                    color: #ef4444;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                .mobile-row {
                    display: flex;
                }
                .country-prefix {
                    background: #3f3f46;
                    padding: 0.75rem;
                    border-radius: 6px 0 0 6px;
                    display: flex;
                    align-items: center;
                }
                .mobile-input {
                    flex: 1;
                    border-radius: 0;
                }
                .mobile-input.verified {
                    border-color: #22c55e;
                }
                .send-otp-button {
                    background: #dc2626;
                    color: white;
                    border: none;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0 6px 6px 0;
                    cursor: pointer;
                }
                .send-otp-button:hover {
                    background: #b71c1c;
                }
                .verified-badge {
                    background: #16a34a;
                    color: white;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0 6px 6px 0;
                    display: flex;
                    align-items: center;
                }
                .terms-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .terms-text {
                    font-size: 0.875rem;
                    color: #d4d4d8;
                }
                .terms-link {
                    color: #ef4444;
                }
                .submit-button {
                    width: 100%;
                    background: #dc2626;
                    color: white;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 6px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .submit-button:hover:not(.disabled) {
                    background: #b71c1c;
                    transform: scale(1.03);
                }
                .submit-button.disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                }
                .submit-busy {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .button-spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    margin-right: 0.5rem;
                    border-radius: 50%;
                    border-top: 2px solid white;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
        </div>
    }
}
