use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::booking::notify::{Notification, ToastPosition};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notification) => {
                next.toasts.push(Toast { id: next.next_id, notification });
                next.next_id += 1;
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    let notification = &props.toast.notification;

    {
        let on_dismiss = props.on_dismiss.clone();
        let auto_close_ms = notification.auto_close_ms;
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(auto_close_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        }, ());
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", notification.severity.class())} {onclick} role="alert">
            <span class="toast-message">{&notification.message}</span>
            <div
                class="toast-progress"
                style={format!("animation-duration: {}ms;", notification.auto_close_ms)}
            ></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    let column = |position: ToastPosition| -> Html {
        html! {
            <div class={classes!("toast-column", position.class())}>
                { for props.toasts.iter()
                    .filter(|toast| toast.notification.position == position)
                    .map(|toast| html! {
                        <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
                    })
                }
            </div>
        }
    };

    html! {
        <>
            { column(ToastPosition::TopRight) }
            { column(ToastPosition::TopCenter) }
            <style>
                {r#"
                .toast-column {
                    position: fixed;
                    top: 1rem;
                    z-index: 1000;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    width: 320px;
                    max-width: calc(100vw - 2rem);
                }
                .toast-top-right {
                    right: 1rem;
                }
                .toast-top-center {
                    left: 50%;
                    transform: translateX(-50%);
                }
                .toast {
                    position: relative;
                    overflow: hidden;
                    padding: 1rem 1.2rem;
                    border-radius: 8px;
                    background: #27272a;
                    color: white;
                    cursor: pointer;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                    animation: toastIn 0.3s ease-out;
                }
                .toast-info { border-left: 4px solid #3b82f6; }
                .toast-success { border-left: 4px solid #16a34a; }
                .toast-error { border-left: 4px solid #dc2626; }
                .toast-progress {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    height: 3px;
                    width: 100%;
                    background: rgba(255, 255, 255, 0.4);
                    transform-origin: left;
                    animation-name: toastProgress;
                    animation-timing-function: linear;
                    animation-fill-mode: forwards;
                }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes toastProgress {
                    from { transform: scaleX(1); }
                    to { transform: scaleX(0); }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes_one() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(Notification::otp_sent()));
        let list = list.reduce(ToastAction::Push(Notification::otp_invalid()));
        assert_eq!(list.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1]);

        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].notification, Notification::otp_invalid());

        let list = list.reduce(ToastAction::Push(Notification::otp_verified()));
        assert_eq!(list.toasts.last().map(|t| t.id), Some(2));
    }
}
