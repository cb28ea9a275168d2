mod fetch_all_assignments;
mod fetch_assignments;
mod schedule_reminders;
mod sync_assignments;

use actix_web::web;
use fetch_assignments::fetch_assignments_controller;

pub use fetch_all_assignments::FetchAllAssignmentsUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/fetch",
        web::post().to(fetch_assignments_controller),
    );
}
