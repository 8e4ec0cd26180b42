use iced::widget::{text_input, Space};
use iced::Length;

use vitrine_ui::{
    component::{button, card, form, modal, notification, text},
    theme,
    widget::*,
};

use super::{validate::Field, ContactForm, Experience, Message, Step};

pub(super) fn name_input_id() -> text_input::Id {
    text_input::Id::new("contact-name")
}

pub(super) fn email_input_id() -> text_input::Id {
    text_input::Id::new("contact-email")
}

pub(super) fn link_input_id() -> text_input::Id {
    text_input::Id::new("contact-link")
}

pub(super) fn wizard(form: &ContactForm) -> Element<'_, Message> {
    let title: Element<'_, Message> = Container::new(text::h4_bold("Application form"))
        .id(form.labels.title.container_id())
        .into();
    let description: Element<'_, Message> = Container::new(modal::description(
        "Fill in your application details. Press escape at any time to cancel.",
    ))
    .id(form.labels.description.container_id())
    .into();

    let body = match form.step {
        Step::Identity => identity_step(form),
        Step::Experience => experience_step(form),
        Step::Link => link_step(form),
    };

    Column::new()
        .spacing(20)
        .push(modal::header(
            Some(title),
            None::<fn() -> Message>,
            Some(|| Message::Cancel),
        ))
        .push(description)
        .push(progress(form.step))
        .push_maybe(
            form.warning
                .as_ref()
                .map(|warning| notification::warning(warning.to_string())),
        )
        .push_maybe(
            form.submitting
                .then(|| notification::pending("Submitting your application...")),
        )
        .push(body)
        .push(footer(form))
        .into()
}

fn progress(step: Step) -> Element<'static, Message> {
    let percent = (step.index() - 1) as f32 / Step::COUNT as f32 * 100.0;
    Column::new()
        .spacing(5)
        .push(
            Row::new()
                .push(
                    text::caption(format!("Step {} of {}", step.index(), Step::COUNT))
                        .style(theme::text::secondary),
                )
                .push(Space::with_width(Length::Fill))
                .push(
                    text::caption(format!("{}% complete", percent.round() as u32))
                        .style(theme::text::secondary),
                ),
        )
        .push(ProgressBar::new(0.0..=100.0, percent).height(Length::Fixed(8.0)))
        .into()
}

fn identity_step(form: &ContactForm) -> Element<'_, Message> {
    Column::new()
        .spacing(15)
        .push(text::p1_medium("Basic information"))
        .push(labeled(
            "Name",
            input(
                form,
                "Jane Doe",
                &form.name,
                Message::NameEdited,
                name_input_id(),
                Field::Name,
            ),
        ))
        .push(labeled(
            "Email address",
            input(
                form,
                "jane@example.com",
                &form.email,
                Message::EmailEdited,
                email_input_id(),
                Field::Email,
            ),
        ))
        .into()
}

fn experience_step(form: &ContactForm) -> Element<'_, Message> {
    let selector = PickList::new(
        &Experience::ALL[..],
        form.experience,
        Message::ExperienceSelected,
    )
    .placeholder("Select your years of experience")
    .padding(10)
    .width(Length::Fill);
    let selector = if form.visible_error(Field::Experience).is_some() {
        selector.style(theme::pick_list::invalid)
    } else {
        selector
    };

    Column::new()
        .spacing(15)
        .push(text::p1_medium("Professional experience"))
        .push(labeled(
            "Years of frontend experience",
            Column::new()
                .spacing(5)
                .push(selector)
                .push_maybe(
                    form.visible_error(Field::Experience)
                        .map(|error| text::caption(error.message()).style(theme::text::error)),
                )
                .into(),
        ))
        .into()
}

fn link_step(form: &ContactForm) -> Element<'_, Message> {
    Column::new()
        .spacing(15)
        .push(text::p1_medium("GitHub profile"))
        .push(labeled(
            "GitHub link (optional)",
            input(
                form,
                "https://github.com/username",
                &form.link,
                Message::LinkEdited,
                link_input_id(),
                Field::GithubLink,
            ),
        ))
        .push(card::simple(
            text::p2_regular("Tip: your GitHub profile URL, e.g. https://github.com/username")
                .style(theme::text::secondary),
        ))
        .into()
}

fn input<'a, F>(
    form: &'a ContactForm,
    placeholder: &str,
    value: &'a form::Value<String>,
    on_change: F,
    id: text_input::Id,
    field: Field,
) -> Element<'a, Message>
where
    F: 'static + Fn(String) -> Message,
{
    let input = if form.submitting {
        form::Form::new_disabled(placeholder, value)
    } else {
        form::Form::new(placeholder, value, on_change)
            .id(id)
            .on_submit(Message::Next)
    };
    input
        .maybe_warning(form.visible_error(field).map(|error| error.message()))
        .padding(10)
        .into()
}

fn labeled<'a>(label: &'static str, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(5)
        .push(text::p2_medium(label))
        .push(content)
        .into()
}

fn footer(form: &ContactForm) -> Element<'_, Message> {
    let enabled = !form.submitting;
    let previous = (form.step != Step::Identity).then(|| {
        button::secondary("< Previous")
            .on_press_maybe(enabled.then_some(Message::Previous))
            .into()
    });
    let next_label = match (form.step, form.submitting) {
        (Step::Link, true) => "Submitting...",
        (Step::Link, false) => "Submit",
        _ => "Next",
    };
    let actions = Row::new()
        .spacing(modal::SPACING)
        .push(button::secondary("Cancel").on_press_maybe(enabled.then_some(Message::Cancel)))
        .push(button::primary(next_label).on_press_maybe(enabled.then_some(Message::Next)));
    modal::footer(previous, actions.into())
}

pub(super) fn completed(form: &ContactForm) -> Element<'_, Message> {
    let Some(payload) = form.payload() else {
        // Only rendered once a payload exists; nothing sensible to show
        // otherwise.
        return Column::new().into();
    };

    let title: Element<'_, Message> = Container::new(text::h4_bold("Application submitted"))
        .id(form.labels.title.container_id())
        .into();
    let description: Element<'_, Message> = Container::new(modal::description(
        "Your application has been submitted successfully.",
    ))
    .id(form.labels.description.container_id())
    .into();

    let applicant = card::success(
        Column::new()
            .spacing(8)
            .push(text::p2_medium("Applicant"))
            .push(modal::summary_line("Name:", payload.name.clone()))
            .push(modal::summary_line("Email:", payload.email.clone())),
    );

    let experience = card::success(
        Column::new()
            .spacing(8)
            .push(text::p2_medium("Experience"))
            .push(modal::summary_line(
                "Years:",
                payload.experience.to_string(),
            ))
            .push_maybe(
                payload
                    .github_link
                    .as_ref()
                    .map(|link| modal::summary_line("GitHub:", link.clone())),
            ),
    );

    let summary = match &payload.github_link {
        Some(_) => format!(
            "{}'s application was submitted, along with their GitHub profile.",
            payload.name
        ),
        None => format!(
            "{}'s application was submitted. No GitHub profile was registered.",
            payload.name
        ),
    };

    Column::new()
        .spacing(20)
        .push(modal::header(
            Some(title),
            None::<fn() -> Message>,
            None::<fn() -> Message>,
        ))
        .push(description)
        .push(applicant)
        .push(experience)
        .push(card::success(
            text::p2_regular(summary).style(theme::text::success),
        ))
        .push(modal::footer(
            None,
            button::primary("Confirm").on_press(Message::Confirm).into(),
        ))
        .into()
}
