pub mod translations;
