//! HTTP inbound adapter exposing REST endpoints.
//!
//! [`configure`] mounts the full route table. Callers register
//! `web::Data<HttpState>` and `web::Data<HealthState>` on the `App`.

use actix_web::web;

pub mod bearer;
pub mod blogs;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register the JSON and path error handlers, the `/api` scope, and the
/// health probes.
///
/// `/blogs/stats` is registered ahead of `/blogs/{id}` so the literal
/// segment wins.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(validation::path_error_handler))
        .service(
            web::scope("/api")
                .service(blogs::list_blogs)
                .service(blogs::blog_stats)
                .service(blogs::get_blog)
                .service(blogs::create_blog)
                .service(blogs::update_blog)
                .service(blogs::delete_blog)
                .service(blogs::add_comment)
                .service(users::register_user)
                .service(users::list_users),
        )
        .service(health::ready)
        .service(health::live);
}
