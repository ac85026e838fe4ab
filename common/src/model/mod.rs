pub mod application;
pub mod contact;
pub mod department;
pub mod product;
pub mod vacancy;
