mod books;
mod login;
mod register;

pub use books::BooksPage;
pub use login::LoginPage;
pub use register::RegisterPage;
