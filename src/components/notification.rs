use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, PartialEq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub kind: NoticeKind,
    pub message: String,
    pub on_dismiss: Callback<()>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(()));
                // Dropping the handle cancels a still-pending dismiss.
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let kind_class = match props.kind {
        NoticeKind::Success => "success",
        NoticeKind::Failure => "failure",
    };

    html! {
        <div class={classes!("form-notice", kind_class)} role="status">
            <span class="notice-message">{ &props.message }</span>
            <button class="notice-dismiss" onclick={on_close}>{"✕"}</button>
            <style>
                {r#"
                .form-notice {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.9rem 1.2rem;
                    border-radius: 10px;
                    margin-bottom: 1.2rem;
                    font-size: 0.95rem;
                    animation: notice-in 0.3s ease-out;
                }

                .form-notice.success {
                    background: rgba(94, 139, 107, 0.15);
                    border: 1px solid rgba(94, 139, 107, 0.4);
                    color: #3a5a46;
                }

                .form-notice.failure {
                    background: rgba(186, 74, 63, 0.12);
                    border: 1px solid rgba(186, 74, 63, 0.35);
                    color: #8f3a32;
                }

                .notice-dismiss {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    font-size: 0.9rem;
                    padding: 0.2rem;
                }

                @keyframes notice-in {
                    from { opacity: 0; transform: translateY(-6px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}
