pub mod queries;

pub mod leads_repo;
pub use leads_repo::LeadsRepository;
pub mod message_repo;
pub use message_repo::MessageRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod vacancy_repo;
pub use vacancy_repo::VacancyRepository;
pub mod log_repo;
pub use log_repo::LogRepository;
