mod get_pending_reminders;
mod send_due_reminders;

use actix_web::web;
use get_pending_reminders::get_pending_reminders_controller;

pub use send_due_reminders::SendDueRemindersUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/reminders",
        web::get().to(get_pending_reminders_controller),
    );
}
