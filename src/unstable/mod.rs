pub mod bubble;
pub mod heap;
pub mod quick;
pub mod transposition;
