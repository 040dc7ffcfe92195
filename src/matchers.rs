pub mod anything;
pub mod comparison;
pub mod elements_are;
pub mod elements_are_array;
pub mod equal_to;
pub mod not;
