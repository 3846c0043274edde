//! Contact methods and the contact form.
//!
//! The form is a small state machine: idle, submitting, then back to idle with either
//! the fields cleared (sent) or kept as typed (failed). Submissions are never retried.

use icondata::{FiMail, FiMapPin, FiPhone, FiSend};
use leptos::prelude::*;
use portfolio_api::types::{ContactReceipt, ContactSubmission};

use crate::api::{messages, submit_contact, user_message};
use crate::catalog::PERSONAL_INFO;
use crate::components::icons::{self, icon};
use crate::components::notice;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn set(self, fields: &mut ContactSubmission, value: String) {
        match self {
            Self::Name => fields.name = value,
            Self::Email => fields.email = value,
            Self::Subject => fields.subject = value,
            Self::Message => fields.message = value,
        }
    }

    #[must_use]
    pub fn get(self, fields: &ContactSubmission) -> &str {
        match self {
            Self::Name => &fields.name,
            Self::Email => &fields.email,
            Self::Subject => &fields.subject,
            Self::Message => &fields.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Sent(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    submitting: bool,
    feedback: Option<Feedback>,
}

impl ContactForm {
    /// Edits one field. Typing clears the previous outcome. Fields are frozen while a
    /// submission is in flight.
    pub fn edit(&mut self, field: Field, value: String) {
        if self.submitting {
            return;
        }
        field.set(&mut self.fields, value);
        self.feedback = None;
    }

    /// Moves to submitting and hands back the payload, or `None` when a submission is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.feedback = None;
        Some(self.fields.clone())
    }

    pub fn finish(&mut self, outcome: Result<ContactReceipt, String>) {
        self.submitting = false;
        self.feedback = Some(match outcome {
            Ok(receipt) => {
                self.fields = ContactSubmission::default();
                let message = receipt.message.trim();
                Feedback::Sent(if message.is_empty() {
                    SENT_MESSAGE.to_owned()
                } else {
                    message.to_owned()
                })
            }
            Err(message) => Feedback::Failed(message),
        });
    }

    #[must_use]
    pub const fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}

const INPUT_CLASS: &str = "py-3 px-4 w-full placeholder-gray-500 text-white bg-gray-900 rounded-lg border border-gray-700 transition-shadow focus:ring-2 focus:ring-blue-500 focus:outline-none disabled:opacity-60";

fn input(form: RwSignal<ContactForm>, field: Field, id: &'static str, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            id=id
            name=id
            type=kind
            placeholder=placeholder
            autocomplete=id
            required=true
            disabled=move || form.with(ContactForm::is_submitting)
            prop:value=move || form.with(|f| field.get(f.fields()).to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| f.edit(field, value));
            }
            class=INPUT_CLASS
        />
    }
}

fn contact_methods() -> impl IntoView {
    let methods = [
        (FiMail, "Email", PERSONAL_INFO.email, Some(format!("mailto:{}", PERSONAL_INFO.email))),
        (FiPhone, "Phone", PERSONAL_INFO.phone, Some(format!("tel:{}", PERSONAL_INFO.phone.replace(' ', "")))),
        (FiMapPin, "Location", PERSONAL_INFO.location, None),
    ];

    methods
        .into_iter()
        .map(|(glyph, label, value, href)| {
            view! {
                <div class="flex gap-4 items-center">
                    <div class="flex justify-center items-center text-blue-400 rounded-lg size-12 bg-blue-600/20">
                        {icon(glyph, "size-5")}
                    </div>
                    <div>
                        <p class="text-sm text-gray-400">{label}</p>
                        {match href {
                            Some(href) => {
                                view! { <a href=href class="text-white transition-colors hover:text-blue-400">{value}</a> }
                                    .into_any()
                            }
                            None => view! { <p class="text-white">{value}</p> }.into_any(),
                        }}
                    </div>
                </div>
            }
        })
        .collect_view()
}

pub fn component() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let submit = Action::new(move |data: &ContactSubmission| {
        let data = data.clone();
        async move {
            let outcome = submit_contact(data)
                .await
                .map_err(|e| user_message(&e, messages::CONTACT));
            if let Err(message) = &outcome {
                leptos::logging::warn!("Contact submission failed: {message}");
            }
            form.update(|f| f.finish(outcome));
        }
    });

    view! {
        <section id="contact" class="py-20 bg-gray-900">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="mb-16 text-center">
                    <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl">"Get In Touch"</h2>
                    <p class="mx-auto max-w-3xl text-xl text-gray-300">
                        "Have a project in mind or just want to say hello? Send me a message."
                    </p>
                </div>
                <div class="grid gap-12 lg:grid-cols-2">
                    <div class="space-y-8">
                        <h3 class="text-2xl font-bold text-white">"Let's talk"</h3>
                        <div class="space-y-6">{contact_methods()}</div>
                        {icons::component()}
                    </div>
                    <form
                        class="p-8 space-y-6 bg-gray-800 rounded-2xl border border-gray-700"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            if let Some(data) = form.try_update(ContactForm::begin_submit).flatten() {
                                let _ = submit.dispatch(data);
                            }
                        }
                    >
                        <div class="grid gap-6 md:grid-cols-2">
                            {input(form, Field::Name, "name", "text", "Your Name")}
                            {input(form, Field::Email, "email", "email", "Your Email")}
                        </div>
                        {input(form, Field::Subject, "subject", "text", "Subject")}
                        <textarea
                            id="message"
                            name="message"
                            placeholder="Your Message"
                            rows="6"
                            required=true
                            disabled=move || form.with(ContactForm::is_submitting)
                            prop:value=move || form.with(|f| f.fields().message.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.edit(Field::Message, value));
                            }
                            class=INPUT_CLASS
                        />
                        <button
                            type="submit"
                            disabled=move || form.with(ContactForm::is_submitting)
                            class="flex gap-2 justify-center items-center py-3 px-6 w-full text-lg font-semibold text-white bg-blue-600 rounded-lg transition-colors hover:bg-blue-700 disabled:opacity-60 disabled:cursor-not-allowed"
                        >
                            <Show
                                when=move || form.with(ContactForm::is_submitting)
                                fallback=|| view! { {icon(FiSend, "size-5")} "Send Message" }
                            >
                                <span class="rounded-full border-2 border-white animate-spin size-5 border-t-transparent" aria-hidden="true"></span>
                                "Sending..."
                            </Show>
                        </button>
                        {move || {
                            form.with(|f| match f.feedback() {
                                Some(Feedback::Sent(message)) => {
                                    Some(notice::component(message.clone(), notice::Tone::Success))
                                }
                                Some(Feedback::Failed(message)) => {
                                    Some(notice::component(message.clone(), notice::Tone::Error))
                                }
                                None => None,
                            })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".to_owned());
        form.edit(Field::Email, "ada@example.com".to_owned());
        form.edit(Field::Subject, "Hello".to_owned());
        form.edit(Field::Message, "Let's build something".to_owned());
        form
    }

    #[test]
    fn test_edit_sets_each_field() {
        let form = filled();
        assert_eq!(Field::Name.get(form.fields()), "Ada");
        assert_eq!(Field::Email.get(form.fields()), "ada@example.com");
        assert_eq!(Field::Subject.get(form.fields()), "Hello");
        assert_eq!(Field::Message.get(form.fields()), "Let's build something");
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.name, "Ada");
        assert!(form.is_submitting());

        form.finish(Ok(ContactReceipt {
            success: true,
            message: "Thanks, Ada!".to_owned(),
            id: Some("42".to_owned()),
        }));

        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &ContactSubmission::default());
        assert_eq!(form.feedback(), Some(&Feedback::Sent("Thanks, Ada!".to_owned())));
    }

    #[test]
    fn test_blank_receipt_message_uses_default() {
        let mut form = filled();
        form.begin_submit();
        form.finish(Ok(ContactReceipt::default()));
        assert_eq!(form.feedback(), Some(&Feedback::Sent(SENT_MESSAGE.to_owned())));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let before = form.fields().clone();
        form.begin_submit();
        form.finish(Err("Too many requests".to_owned()));

        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &before);
        assert_eq!(form.feedback(), Some(&Feedback::Failed("Too many requests".to_owned())));
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_fields_frozen_while_submitting() {
        let mut form = filled();
        form.edit(Field::Message, "first draft".to_owned());
        let payload = form.begin_submit().unwrap();

        form.edit(Field::Message, "second thought, not yet sent".to_owned());
        assert_eq!(form.fields().message, "first draft");
        assert_eq!(form.fields(), &payload);

        form.finish(Err("Failed to send message".to_owned()));
        assert_eq!(form.fields().message, "first draft");
        form.edit(Field::Message, "second thought".to_owned());
        assert_eq!(form.fields().message, "second thought");
    }

    #[test]
    fn test_typing_clears_feedback() {
        let mut form = filled();
        form.begin_submit();
        form.finish(Err("Failed to send message".to_owned()));
        form.edit(Field::Name, "Grace".to_owned());
        assert_eq!(form.feedback(), None);
    }
}
