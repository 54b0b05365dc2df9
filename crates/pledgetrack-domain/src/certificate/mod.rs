mod aggregate;
mod repository;

pub use aggregate::Certificate;
pub use repository::CertificateRepository;
