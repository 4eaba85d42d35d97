pub mod auth;
pub mod clients;
pub mod leads;
pub mod logs;
pub mod messages;
pub mod spa;
pub mod users;
pub mod vacancies;
