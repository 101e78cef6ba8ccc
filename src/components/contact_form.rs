use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form::{
    complete_submission, ContactForm, FormAction, FAILURE_NOTICE, SENDING_LABEL,
};
use crate::contact::validation::Field;
use crate::timer::{BrowserScheduler, TimerHandle};

const SUBMIT_LABEL: &str = "Send Message";
const ERROR_BORDER: &str = "border-color: #ef4444";
const DEFAULT_BORDER: &str = "border-color: var(--border-color)";

fn input_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn alert_failure() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(FAILURE_NOTICE) {
            log::warn!("failure alert not shown: {:?}", e);
        }
    }
}

#[function_component(ContactFormView)]
pub fn contact_form() -> Html {
    let form = use_reducer(ContactForm::default);
    let delivery = use_memo(|_| config::get_form_delivery(), ());
    // Owns the success-banner timer; replaced or dropped, it cancels.
    let dismiss_timer = use_mut_ref(|| None::<TimerHandle>);

    let oninput = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.dispatch(FormAction::Input(field, input_value(&e)));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_sending() {
                return;
            }
            let prepared = form.prepare();
            form.dispatch(FormAction::Submit);
            let message = match prepared {
                Ok(message) => message,
                Err(fields) => {
                    log::debug!("contact form rejected: {:?}", fields);
                    return;
                }
            };

            let dispatcher = form.dispatcher();
            let delivery = (*delivery).clone();
            let dismiss_timer = dismiss_timer.clone();
            spawn_local(async move {
                let outcome = delivery.send(&message).await;
                let failed = outcome.is_err();
                let dispatch = move |action: FormAction| dispatcher.dispatch(action);
                let timer = complete_submission(outcome, dispatch, &BrowserScheduler);
                if failed {
                    alert_failure();
                } else {
                    log::info!("contact message sent");
                }
                if timer.is_some() {
                    *dismiss_timer.borrow_mut() = timer;
                }
            });
        })
    };

    let field_view = |field: Field, multiline: bool| {
        let state = form.field(field);
        let style = if state.error.is_some() { ERROR_BORDER } else { DEFAULT_BORDER };
        let value = state.value.clone();
        html! {
            <div class="form-group">
                <label for={field.id()}>{ field.label() }</label>
                {
                    if multiline {
                        html! {
                            <textarea id={field.id()} name={field.id()} rows="5"
                                {style} {value} oninput={oninput(field)} />
                        }
                    } else {
                        html! {
                            <input id={field.id()} name={field.id()} type="text"
                                {style} {value} oninput={oninput(field)} />
                        }
                    }
                }
                <span class="form-error" id={format!("{}-error", field.id())}>
                    { state.error.unwrap_or_default() }
                </span>
            </div>
        }
    };

    html! {
        <form id="contact-form" class="contact-form" novalidate={true} {onsubmit}>
            { field_view(Field::Name, false) }
            { field_view(Field::Email, false) }
            { field_view(Field::Message, true) }
            <button type="submit" class="btn btn-primary" disabled={form.is_sending()}>
                { if form.is_sending() { SENDING_LABEL } else { SUBMIT_LABEL } }
            </button>
            <div id="form-success" class={classes!("form-success", form.success_visible.then(|| "show"))}>
                {"Thanks! Your message has been sent."}
            </div>
        </form>
    }
}
