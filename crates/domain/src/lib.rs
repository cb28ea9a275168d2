mod assignment;
mod date;
pub mod extractor;
mod reminder;
mod scrape;
mod shared;
mod user;

pub use assignment::AssignmentRecord;
pub use date::{date_at, format_date, start_of_day_millis, DateGrammar, DateParseError};
pub use extractor::{extract, SectionNotFoundError};
pub use reminder::{plan_reminders, LeadDays, Reminder};
pub use scrape::{Credentials, ScrapeError};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::User;

pub use chrono::NaiveDate;
pub use chrono_tz::Tz;
