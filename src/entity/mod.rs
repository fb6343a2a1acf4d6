pub mod feedback;
pub mod resource;
pub mod student;
