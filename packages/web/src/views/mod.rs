mod dashboard;
mod login;
mod pet_detail;
mod pet_form;
mod pet_new;
mod pets;
mod users;

pub use dashboard::Dashboard;
pub use login::Login;
pub use pet_detail::PetDetail;
pub use pet_new::PetNew;
pub use pets::Pets;
pub use users::Users;
