use actix_web::web;

use crate::api::routes::{
    accept_request, attest, check_request, get_user, health_check, leaderboard, rate_mentor,
    request_help,
};

pub fn configure(conf: &mut web::ServiceConfig) {
    let scope = web::scope("/api")
        .service(get_user)
        .service(request_help)
        .service(accept_request)
        .service(rate_mentor)
        .service(check_request)
        .service(attest)
        .service(leaderboard)
        .service(health_check);

    conf.service(scope);
}
