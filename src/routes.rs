use crate::{api::attendance, config::Config};
use actix_files::Files;
use actix_web::web;

/// Largest accepted /add body.
const MAX_FORM_BYTES: usize = 10 << 20;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.app_data(web::PayloadConfig::new(MAX_FORM_BYTES));

    cfg.service(web::resource("/").route(web::route().to(attendance::index)))
        .service(
            web::resource("/add")
                .route(web::post().to(attendance::save))
                .default_service(web::route().to(attendance::ignore)),
        )
        .service(
            web::resource("/delete")
                .route(web::get().to(attendance::delete))
                .route(web::post().to(attendance::delete)),
        )
        // Files rejects `..` segments and never lists directories
        .service(Files::new("/static", &config.static_dir));
}
