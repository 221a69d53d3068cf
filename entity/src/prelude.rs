pub use super::alert::Entity as Alert;
pub use super::automation_log::Entity as AutomationLog;
pub use super::claim::Entity as Claim;
pub use super::patient::Entity as Patient;
pub use super::practice::Entity as Practice;
pub use super::user::Entity as User;
