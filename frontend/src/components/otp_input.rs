use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::booking::otp::{OtpEntry, OTP_LENGTH};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct OtpInputProps {
    pub on_verify: Callback<String>,
}

#[function_component(OtpInput)]
pub fn otp_input(props: &OtpInputProps) -> Html {
    let entry = use_state(OtpEntry::default);
    let refs = use_memo(|_| (0..OTP_LENGTH).map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    // Move focus whenever the entry asks for another slot (and on mount).
    {
        let refs = refs.clone();
        use_effect_with_deps(move |focus| {
            if let Some(input) = refs[*focus].cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        }, entry.focus());
    }

    let slots = entry.slots().iter().enumerate().map(|(index, digit)| {
        let oninput = {
            let entry = entry.clone();
            let on_verify = props.on_verify.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*entry).clone();
                let completed = next.input(index, &input.value());
                // Rejected characters never reach the state, so reset the element by hand.
                input.set_value(&next.slots()[index]);
                entry.set(next);
                if let Some(code) = completed {
                    on_verify.emit(code);
                }
            })
        };

        let onkeydown = {
            let entry = entry.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Backspace" {
                    let mut next = (*entry).clone();
                    next.backspace(index);
                    entry.set(next);
                }
            })
        };

        let onpaste = {
            let entry = entry.clone();
            let on_verify = props.on_verify.clone();
            Callback::from(move |e: Event| {
                e.prevent_default();
                let text = e
                    .dyn_ref::<ClipboardEvent>()
                    .and_then(|e| e.clipboard_data())
                    .and_then(|data| data.get_data("text/plain").ok())
                    .unwrap_or_default();
                let mut next = (*entry).clone();
                if let Some(code) = next.paste(&text) {
                    entry.set(next);
                    on_verify.emit(code);
                }
            })
        };

        html! {
            <input
                ref={refs[index].clone()}
                type="text"
                inputmode="numeric"
                class="otp-slot"
                maxlength="1"
                value={digit.clone()}
                {oninput}
                {onkeydown}
                {onpaste}
            />
        }
    }).collect::<Html>();

    let verify_now = {
        let entry = entry.clone();
        let on_verify = props.on_verify.clone();
        Callback::from(move |_: MouseEvent| on_verify.emit(entry.code()))
    };

    html! {
        <div class="otp-container">
            <p class="otp-prompt">{"Enter the 6-digit OTP sent to your mobile number"}</p>
            <div class="otp-slots">
                { slots }
            </div>
            <div class="otp-footer">
                <p class="otp-hint">{format!("For demo: Use \"{}\" as OTP", config::MOCK_OTP)}</p>
                <button type="button" class="otp-verify-button" onclick={verify_now}>
                    {"Verify OTP"}
                </button>
            </div>
            <style>
                {r#"
                .otp-container {
                    margin-top: 0.75rem;
                    animation: otpIn 0.3s ease-out;
                }
                .otp-prompt {
                    font-size: 0.875rem;
                    color: #a1a1aa;
                    margin-bottom: 0.75rem;
                }
                .otp-slots {
                    display: flex;
                    justify-content: space-between;
                    gap: 0.5rem;
                }
                .otp-slot {
                    width: 2.5rem;
                    height: 3rem;
                    text-align: center;
                    font-size: 1.125rem;
                    background: #3f3f46;
                    color: white;
                    border: 1px solid #52525b;
                    border-radius: 6px;
                }
                .otp-slot:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #ef4444;
                }
                .otp-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 0.75rem;
                }
                .otp-hint {
                    font-size: 0.75rem;
                    color: #a1a1aa;
                }
                .otp-verify-button {
                    background: none;
                    border: none;
                    color: #ef4444;
                    cursor: pointer;
                    font-size: 0.875rem;
                }
                .otp-verify-button:hover {
                    color: #f87171;
                }
                @keyframes otpIn {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}
