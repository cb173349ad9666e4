pub mod entities;
pub mod markup;
pub mod sort;
