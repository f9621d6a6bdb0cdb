//! Request middleware.

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse};

/// Sign-in page unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/auth/login";

/// Turns `401 Unauthorized` responses into a redirect to the sign-in page.
///
/// Use with [`actix_web::middleware::from_fn`].
pub async fn redirect_unauthorized<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    let response = next.call(req).await?;
    if response.status() != StatusCode::UNAUTHORIZED {
        return Ok(response.map_into_left_body());
    }

    log::debug!("Redirecting unauthorized request for {}", response.request().path());
    let (request, _) = response.into_parts();
    let redirect = HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LOGIN_PATH))
        .finish();
    Ok(ServiceResponse::new(request, redirect).map_into_right_body())
}
