use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::lead::{post_lead, LeadAction, LeadSubmission, SubmitStatus};

/// Length of the exit animation in `.lead-modal--closing`.
const EXIT_MS: u32 = 350;

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub on_close: Callback<()>,
}

/// Lead capture dialog. Its form state lives only while it is mounted.
#[function_component(LeadModal)]
pub fn lead_modal(props: &LeadModalProps) -> Html {
    let lead = use_reducer(LeadSubmission::default);
    let closing = use_state(|| false);

    let close = {
        let closing = closing.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if *closing {
                return;
            }
            closing.set(true);
            let on_close = on_close.clone();
            Timeout::new(EXIT_MS, move || on_close.emit(())).forget();
        })
    };

    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target().is_some() && e.target() == e.current_target() {
                close.emit(());
            }
        })
    };

    let text_input = |action: fn(String) -> LeadAction| {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lead.dispatch(action(input.value()));
        })
    };

    let on_attend = {
        let lead = lead.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lead.dispatch(LeadAction::CanAttend(input.checked()));
        })
    };

    let on_submit = {
        let lead = lead.clone();
        Callback::from(move |_: MouseEvent| {
            if !lead.can_submit() {
                return;
            }
            let form = lead.form.clone();
            lead.dispatch(LeadAction::Start);
            let lead = lead.clone();
            spawn_local(async move {
                let result = post_lead(config::get_lead_endpoint(), &form).await;
                match &result {
                    Ok(()) => log::info!("Lead submitted"),
                    Err(e) => gloo_console::error!(format!("Lead submission failed: {}", e)),
                }
                lead.dispatch(LeadAction::Finish(result));
            });
        })
    };

    let on_close_click = close.reform(|_: MouseEvent| ());

    let status = lead.status;
    let state_class = if *closing { "lead-modal--closing" } else { "lead-modal--open" };

    html! {
        <div class={classes!("lead-modal", state_class)} onmousedown={on_backdrop}>
            <div class="lead-modal__panel" role="dialog" aria-modal="true">
                <div class="lead-modal__body">
                    <div class="lead-modal__header">
                        <div>
                            <div class="lead-modal__eyebrow">{"בקשת שיחת התאמה"}</div>
                            <div class="lead-modal__title">{"HERSALON | Inner Circle"}</div>
                        </div>
                        <button
                            class="lead-modal__close"
                            aria-label="close"
                            onclick={on_close_click}
                        >
                            {"✕"}
                        </button>
                    </div>

                    <div class="lead-modal__fields">
                        <input
                            class="lead-input"
                            placeholder="שם מלא"
                            value={lead.form.full_name.clone()}
                            oninput={text_input(LeadAction::FullName)}
                        />
                        <input
                            class="lead-input"
                            type="tel"
                            placeholder="טלפון"
                            value={lead.form.phone.clone()}
                            oninput={text_input(LeadAction::Phone)}
                        />
                        <input
                            class="lead-input"
                            type="email"
                            placeholder="מייל"
                            value={lead.form.email.clone()}
                            oninput={text_input(LeadAction::Email)}
                        />

                        <label class="lead-modal__attend">
                            <input
                                type="checkbox"
                                checked={lead.form.can_attend}
                                onchange={on_attend}
                            />
                            <span>
                                {"יש לי אפשרות להגיע למפגש פיזי שבועי בין 19:00-22:00 בשכונת בילויים ברמת גן"}
                            </span>
                        </label>

                        <button
                            class="lead-modal__submit"
                            disabled={!lead.can_submit()}
                            onclick={on_submit}
                        >
                            { if status.is_pending() { "שולחת..." } else { "שליחה" } }
                        </button>

                        {
                            match status {
                                SubmitStatus::Succeeded => html! {
                                    <div class="lead-modal__ok">{"נשלח! אחזור אלייך לתיאום שיחה 💜"}</div>
                                },
                                SubmitStatus::Failed => html! {
                                    <div class="lead-modal__error">
                                        { format!("משהו השתבש. אפשר לשלוח ידנית: {}", config::FALLBACK_CONTACT) }
                                    </div>
                                },
                                SubmitStatus::Idle | SubmitStatus::Pending => html! {},
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
