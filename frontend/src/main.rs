use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};

mod config;
mod booking {
    pub mod lead;
    pub mod verification;
    pub mod otp;
    pub mod notify;
    pub mod sink;
    pub mod form;
}
mod components {
    pub mod booking_form;
    pub mod otp_input;
    pub mod toast;
    pub mod hero;
    pub mod testimonials;
    pub mod video;
    pub mod dealers;
    pub mod footer;
    pub mod loader;
}
mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use booking::notify::Notification;
use components::{
    loader::Loader,
    toast::{ToastAction, ToastContainer, ToastList},
};
use pages::{
    home::Home,
    termsprivacy::{TermsAndConditions, PrivacyPolicy},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route, notify: Callback<Notification>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {notify} /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 50.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"ROYAL ENFIELD"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <a href="/#booking-form" class="nav-link">{"Test Ride"}</a>
                    <a href="/#reviews" class="nav-link">{"Reviews"}</a>
                    <a href="/#video" class="nav-link">{"Video"}</a>
                    <a href="/#dealers" class="nav-link nav-cta">{"Find a Dealer"}</a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 1.5rem;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(9, 9, 11, 0.9);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .nav-logo {
                    color: #dc2626;
                    font-weight: 700;
                    font-size: 1.25rem;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: white;
                    text-decoration: none;
                }
                .nav-link:hover { color: #ef4444; }
                .nav-cta {
                    background: #dc2626;
                    padding: 0.4rem 1rem;
                    border-radius: 6px;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: white;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: rgba(9, 9, 11, 0.95);
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let is_loading = use_state(|| true);
    let toasts = use_reducer(ToastList::default);

    {
        let is_loading = is_loading.clone();
        use_timeout(move || is_loading.set(false), config::LOADING_SCREEN_MS);
    }

    let notify = {
        let toasts = toasts.clone();
        Callback::from(move |notification: Notification| {
            toasts.dispatch(ToastAction::Push(notification));
        })
    };

    let dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    if *is_loading {
        return html! { <Loader /> };
    }

    html! {
        <BrowserRouter>
            <div class="app-shell">
                <Nav />
                <ToastContainer toasts={toasts.toasts.clone()} on_dismiss={dismiss} />
                <Switch<Route> render={move |route: Route| switch(route, notify.clone())} />
            </div>
            <style>
                {r#"
                .app-shell {
                    min-height: 100vh;
                    background: #18181b;
                    color: white;
                    overflow-x: hidden;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                "#}
            </style>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
