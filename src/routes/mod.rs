pub mod contact;
pub mod cors;
pub mod feedback;
pub mod gate;
pub mod health;
pub mod pages;
pub mod resource;
