//! Port traits - the seams between application logic and the outside world

pub mod outbound;
