use actix_multipart::form::MultipartForm;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::assets::FsAssetStore;
use crate::forms::ads::{SubmitAdForm, SubmitAdFormError};
use crate::repository::{AdSortOrder, DieselRepository};
use crate::routes::{message_page, render_template};
use crate::services::ServiceError;
use crate::services::ads::submit_ad as submit_ad_service;
use crate::services::listing::{CategoryGroup, search_by_city, show_board};

#[derive(Deserialize)]
struct SearchQueryParams {
    city: Option<String>,
}

fn board_page(
    tera: &Tera,
    groups: Vec<CategoryGroup>,
    show_category: bool,
) -> HttpResponse {
    let mut context = Context::new();
    context.insert("groups", &groups);
    context.insert("show_category", &show_category);
    render_template(tera, "index.html", &context)
}

#[get("/")]
pub async fn index(repo: web::Data<DieselRepository>, tera: web::Data<Tera>) -> impl Responder {
    match show_board(AdSortOrder::NewestFirst, repo.get_ref()) {
        Ok(groups) => board_page(&tera, groups, false),
        Err(e) => {
            log::error!("Failed to render the board: {e}");
            message_page(&tera, StatusCode::INTERNAL_SERVER_ERROR, "Failed to load ads")
        }
    }
}

#[get("/ads")]
pub async fn all_ads(repo: web::Data<DieselRepository>, tera: web::Data<Tera>) -> impl Responder {
    match show_board(AdSortOrder::OldestFirst, repo.get_ref()) {
        Ok(groups) => board_page(&tera, groups, true),
        Err(e) => {
            log::error!("Failed to render the board: {e}");
            message_page(&tera, StatusCode::INTERNAL_SERVER_ERROR, "Failed to load ads")
        }
    }
}

#[get("/search")]
pub async fn search(
    params: web::Query<SearchQueryParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match search_by_city(params.city.as_deref(), repo.get_ref()) {
        Ok(result) => {
            let mut context = Context::new();
            context.insert("query", &result.query);
            context.insert("ads", &result.ads);
            render_template(&tera, "search.html", &context)
        }
        Err(ServiceError::BadRequest(message)) => {
            message_page(&tera, StatusCode::BAD_REQUEST, &message)
        }
        Err(e) => {
            log::error!("Failed to search ads: {e}");
            message_page(&tera, StatusCode::INTERNAL_SERVER_ERROR, "Search failed")
        }
    }
}

#[post("/submit")]
pub async fn submit(
    MultipartForm(form): MultipartForm<SubmitAdForm>,
    repo: web::Data<DieselRepository>,
    assets: web::Data<FsAssetStore>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let submission = match form.into_submission() {
        Ok(submission) => submission,
        Err(SubmitAdFormError::Upload(e)) => {
            return message_page(
                &tera,
                StatusCode::BAD_REQUEST,
                &format!("Upload Error: {e}"),
            );
        }
        Err(e) => {
            return message_page(&tera, StatusCode::BAD_REQUEST, &format!("Invalid input: {e}"));
        }
    };

    match submit_ad_service(
        submission.payload,
        submission.image,
        repo.get_ref(),
        assets.get_ref(),
    ) {
        Ok(_) => message_page(&tera, StatusCode::OK, "Ad submitted successfully!"),
        // The original responded 200 to a quota rejection; preserved.
        Err(ServiceError::QuotaExceeded) => message_page(
            &tera,
            StatusCode::OK,
            &ServiceError::QuotaExceeded.to_string(),
        ),
        Err(e) => {
            log::error!("Failed to submit ad: {e}");
            message_page(&tera, StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}
