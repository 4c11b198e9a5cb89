use shared::constants::TERMS_REQUIRED_ERROR;
use shared::user_info::{IntakeField, IntakeForm, UserInfo};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{BrandHeader, StadiumBackground};
use crate::hooks::{use_intake_form, Consent};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct IntakePageProps {
    pub on_submit: Callback<UserInfo>,
}

fn render_field(
    form: &IntakeForm,
    field: IntakeField,
    handle_field: &Callback<(IntakeField, String)>,
) -> Html {
    let oninput = handle_field.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    });
    let error = form.error(field);
    let (input_type, placeholder) = match field {
        IntakeField::Email => ("email", ""),
        IntakeField::Phone => ("text", "mm/dd/yyyy"),
        _ => ("text", ""),
    };

    html! {
        <div>
            <label for={field.name()} class={styles::TEXT_LABEL}>{field.label()}</label>
            <input
                id={field.name()}
                name={field.name()}
                type={input_type}
                placeholder={placeholder}
                value={form.value(field).to_string()}
                class={if error.is_some() { styles::INPUT_ERROR } else { styles::INPUT }}
                {oninput}
            />
            if let Some(message) = error {
                <p class={styles::TEXT_ERROR}>{message}</p>
            }
        </div>
    }
}

fn render_consent(
    checked: bool,
    consent: Consent,
    handle_consent: &Callback<(Consent, bool)>,
    text: Html,
) -> Html {
    let onchange = handle_consent.reform(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (consent, input.checked())
    });

    html! {
        <label class={styles::CHECKBOX_ROW}>
            <input type="checkbox" class={styles::CHECKBOX} {checked} {onchange} />
            <span>{text}</span>
        </label>
    }
}

#[function_component(IntakePage)]
pub fn intake_page(props: &IntakePageProps) -> Html {
    let state = use_intake_form(props.on_submit.clone());
    let form = &state.form;

    html! {
        <StadiumBackground>
            <div class={styles::CARD}>
                <BrandHeader title="FAN APPRECIATION PRIZE WHEEL" />
                <h2 class={styles::TEXT_HERO}>{"SPIN TO WIN A PRIZE!"}</h2>
                <p class={styles::TEXT_BODY}>
                    {"Rays Fans! Play the Rays Fan Appreciation Prize Wheel for your chance to instantly win exclusive Prizes from Culver's and your favorite ball club!"}
                </p>

                <form class={styles::FORM} onsubmit={state.handle_submit.clone()} novalidate={true}>
                    { for IntakeField::ALL.iter().map(|&field| render_field(form, field, &state.handle_field)) }

                    { render_consent(form.agreed_to_terms, Consent::Terms, &state.handle_consent, html! {
                        <>
                            {"I have read and agree to the "}
                            <span class={styles::LINK}>{"Sweepstakes Rules"}</span>
                            {" and the "}
                            <span class={styles::LINK}>{"Terms of Use"}</span>
                            {"."}
                        </>
                    }) }
                    { render_consent(form.agreed_to_emails, Consent::Emails, &state.handle_consent, html! {
                        <>
                            {"I would like to receive commercial e-mails from "}
                            <span class={styles::LINK}>{"TampaBayRays.com"}</span>
                            {", "}
                            <span class={styles::LINK}>{"MLB.com"}</span>
                            {" and their partners."}
                        </>
                    }) }
                    { render_consent(form.agreed_to_exclusive, Consent::Exclusive, &state.handle_consent, html! {
                        <>
                            {"Subscribe to receive exclusive access to "}
                            <span class={styles::LINK}>{"TheBayRepublic.com"}</span>
                            {" product launches, sales, and more!"}
                        </>
                    }) }

                    if state.terms_blocked {
                        <div class={styles::CARD_ERROR}>{TERMS_REQUIRED_ERROR}</div>
                    }

                    <button type="submit" class={styles::BUTTON_PRIMARY} disabled={!form.can_submit()}>
                        if form.is_submitting {
                            <div class={styles::LOADING_SPINNER}></div>
                            <span>{"Loading..."}</span>
                        } else {
                            <span>{"PLAY NOW"}</span>
                        }
                    </button>
                </form>

                <div class={styles::TEXT_FINE_PRINT}>
                    <p class="font-semibold mb-2">{"NO PURCHASE NECESSARY. TRAVEL NOT INCLUDED."}</p>
                    <p>
                        {"Open to legal residents of Florida who are 18 years of age or older. Void where prohibited. Restrictions apply. See Official Rules for details."}
                    </p>
                </div>
            </div>
        </StadiumBackground>
    }
}
