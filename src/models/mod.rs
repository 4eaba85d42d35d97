pub mod auth;
pub mod leads;
pub mod logs;
pub mod messages;
pub mod tenancy;
pub mod users;
pub mod vacancies;
