use actix_web::web;

pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::index)
        .service(users::create_user)
        .service(users::edit_user)
        .service(users::delete_user_form)
        .service(users::update_or_delete_user)
        .service(users::put_user)
        .service(users::delete_user);
}
