use std::rc::Rc;

use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::context::ContextHandle;
use yew::prelude::*;

use crate::contact::form::{ContactForm as FormModel, Field, SubmitOutcome};
use crate::contact::services::{service_label, SERVICES};
use crate::contact::submit::{Ack, ContactSubmitter};
use crate::error::SubmitError;
use crate::notification::host::Notifier;
use crate::notification::toast::Notification;

/// Shared submitter, compared by identity so props stay cheap to diff.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn ContactSubmitter>);

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.0) as *const () == Rc::as_ptr(&other.0) as *const ()
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub submitter: SubmitterHandle,
    #[prop_or(AttrValue::Static("Відправити повідомлення"))]
    pub submit_label: AttrValue,
}

pub enum ContactFormMsg {
    Edit(Field, String),
    Submit,
    Completed(Result<Ack, SubmitError>),
    NotifierChanged(Notifier),
}

pub struct ContactForm {
    form: FormModel,
    notifier: Option<Notifier>,
    _notifier_handle: Option<ContextHandle<Notifier>>,
    // Option selectedness stops following the `selected` attribute once the
    // visitor picks one, so the value is pushed as a property after render.
    service_ref: NodeRef,
}

impl ContactForm {
    fn notify(&self, notification: Notification) {
        match &self.notifier {
            Some(notifier) => notifier.show(notification),
            None => warn!("No notification host for: {}", notification.text),
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, input_type: &'static str, placeholder: &'static str) -> Html {
        html! {
            <input
                type={input_type}
                id={field.id()}
                name={field.id()}
                placeholder={placeholder}
                value={self.form.fields().get(field).to_string()}
                oninput={ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    ContactFormMsg::Edit(field, input.value())
                })}
            />
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (notifier, handle) = match ctx
            .link()
            .context::<Notifier>(ctx.link().callback(ContactFormMsg::NotifierChanged))
        {
            Some((notifier, handle)) => (Some(notifier), Some(handle)),
            None => {
                warn!("ContactForm rendered outside a NotificationHost");
                (None, None)
            }
        };

        Self {
            form: FormModel::new(ctx.props().submit_label.to_string()),
            notifier,
            _notifier_handle: handle,
            service_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Edit(field, value) => {
                self.form.edit(field, value);
                true
            }
            ContactFormMsg::Submit => match self.form.submit() {
                SubmitOutcome::Rejected(notification) => {
                    info!("Contact form rejected: {}", notification.text);
                    self.notify(notification);
                    false
                }
                SubmitOutcome::Started(input) => {
                    info!(
                        "Submitting contact form ({})",
                        service_label(&input.service).unwrap_or("no service")
                    );
                    let submitter = ctx.props().submitter.0.clone();
                    ctx.link().send_future(async move {
                        ContactFormMsg::Completed(submitter.submit_contact(&input).await)
                    });
                    true
                }
                SubmitOutcome::Ignored => false,
            },
            ContactFormMsg::Completed(result) => {
                match &result {
                    Ok(_) => info!("Contact form sent"),
                    Err(e) => warn!("Contact form failed: {:?}", e),
                }
                if let Some(notification) = self.form.complete(result) {
                    self.notify(notification);
                }
                true
            }
            ContactFormMsg::NotifierChanged(notifier) => {
                self.notifier = Some(notifier);
                false
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(select) = self.service_ref.cast::<HtmlSelectElement>() {
            let service = &self.form.fields().service;
            if select.value() != *service {
                select.set_value(service);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let control = self.form.submit_control();

        html! {
            <form id="contactForm" class="contact-form" onsubmit={onsubmit} novalidate=true>
                <div class="form-row">
                    { self.text_input(ctx, Field::Name, "text", "Ваше ім'я *") }
                    { self.text_input(ctx, Field::Email, "email", "Email *") }
                </div>
                <div class="form-row">
                    { self.text_input(ctx, Field::Phone, "tel", "Телефон") }
                    <select
                        ref={self.service_ref.clone()}
                        id={Field::Service.id()}
                        name={Field::Service.id()}
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            ContactFormMsg::Edit(Field::Service, select.value())
                        })}
                    >
                        <option value="">{"Оберіть послугу"}</option>
                        { for SERVICES.iter().map(|option| html! {
                            <option value={option.value}>
                                {option.label}
                            </option>
                        }) }
                    </select>
                </div>
                <textarea
                    id={Field::Message.id()}
                    name={Field::Message.id()}
                    rows="5"
                    placeholder="Ваше повідомлення *"
                    value={self.form.fields().message.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                        ContactFormMsg::Edit(Field::Message, textarea.value())
                    })}
                />
                <button type="submit" class="btn btn-primary" disabled={control.disabled}>
                    if control.loading {
                        <i class="fas fa-spinner fa-spin"></i>{" "}
                    }
                    { control.label }
                </button>
            </form>
        }
    }
}
