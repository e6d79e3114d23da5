//! Contact form handlers
//!
//! The browser never holds form state: every change and submit event is
//! applied to the server-side [`ContactForm`] and answered with freshly
//! rendered HTML.

use std::collections::HashMap;

use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::error::ContactFormError;
use crate::forms::{ContactForm, Field, FormRenderOptions, FormRenderer, FormValues, SubmitOutcome};
use crate::htmx::{submitted_trigger, HxRequest};
use crate::state::{AppState, FormId};
use crate::template::ContactPage;

fn render_component(id: FormId, form: &ContactForm) -> String {
    FormRenderer::render_component(&id.base_path(), form, &FormRenderOptions::default())
}

fn render_page(id: FormId, form: &ContactForm) -> Result<String, ContactFormError> {
    let component = render_component(id, form);
    ContactPage::new(&component).to_html()
}

/// `GET /`: start a new form and render the full page
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ContactFormError> {
    let id = state.forms().create();
    tracing::debug!(form_id = %id, "created form");
    Ok(Html(render_page(id, &ContactForm::new())?))
}

/// `GET /forms/{id}`: render an existing form
///
/// HTMX requests get the component only; regular navigation gets the page.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<FormId>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Html<String>, ContactFormError> {
    let form = state
        .forms()
        .get(id)
        .ok_or(ContactFormError::FormNotFound(id))?;

    if is_htmx {
        Ok(Html(render_component(id, &form)))
    } else {
        Ok(Html(render_page(id, &form)?))
    }
}

/// `POST /forms/{id}/fields/{field}`: apply one field change
///
/// The body is the form-encoded input, keyed by the field's name; a missing
/// key means the field was cleared. Responds with the field's error slot.
pub async fn field_change(
    State(state): State<AppState>,
    Path((id, field)): Path<(FormId, String)>,
    Form(body): Form<HashMap<String, String>>,
) -> Result<Html<String>, ContactFormError> {
    let field: Field = field.parse()?;
    let value = body.get(field.name()).cloned().unwrap_or_default();

    let error = state
        .forms()
        .update(id, |form| {
            form.on_field_change(field, value);
            form.errors().get(field).cloned()
        })
        .ok_or(ContactFormError::FormNotFound(id))?;

    tracing::debug!(form_id = %id, %field, valid = error.is_none(), "field changed");

    Ok(Html(FormRenderer::render_error_slot(
        field,
        error.as_ref(),
        &FormRenderOptions::default(),
    )))
}

/// `POST /forms/{id}/submit`: apply the posted values, then submit
///
/// Accepted submissions carry an `HX-Trigger: contact-submitted` header.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<FormId>,
    HxRequest(is_htmx): HxRequest,
    Form(values): Form<FormValues>,
) -> Result<Response, ContactFormError> {
    let (form, outcome) = state
        .forms()
        .update(id, |form| {
            for field in Field::ALL {
                form.on_field_change(field, values.get(field));
            }
            let outcome = form.on_submit();
            (form.clone(), outcome)
        })
        .ok_or(ContactFormError::FormNotFound(id))?;

    match outcome {
        SubmitOutcome::Accepted => tracing::info!(form_id = %id, "submission accepted"),
        SubmitOutcome::Rejected { errors } => {
            tracing::debug!(form_id = %id, errors, "submission rejected");
        }
    }

    let body = if is_htmx {
        render_component(id, &form)
    } else {
        render_page(id, &form)?
    };
    let trigger = outcome.is_accepted().then(submitted_trigger);

    Ok((trigger, Html(body)).into_response())
}

/// `GET /forms/{id}/state`: JSON snapshot of the controller
pub async fn form_state(
    State(state): State<AppState>,
    Path(id): Path<FormId>,
) -> Result<Json<ContactForm>, ContactFormError> {
    state
        .forms()
        .get(id)
        .map(Json)
        .ok_or(ContactFormError::FormNotFound(id))
}
