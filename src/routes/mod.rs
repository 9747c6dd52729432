use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

pub mod ads;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}

/// Render the message page: a heading plus a link back to the board.
pub fn message_page(tera: &Tera, status: StatusCode, message: &str) -> HttpResponse {
    let mut context = Context::new();
    context.insert("message", message);

    HttpResponse::build(status).body(tera.render("message.html", &context).unwrap_or_else(|e| {
        log::error!("Failed to render template 'message.html': {e}");
        String::new()
    }))
}
