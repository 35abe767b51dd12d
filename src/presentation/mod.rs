/// Lenient deserializers for backend scalars
pub mod serialization;
/// Permanent user records
pub mod user;
/// Voucher records
pub mod voucher;

pub use user::PermanentUser;
pub use voucher::Voucher;
