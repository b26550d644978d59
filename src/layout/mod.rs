pub mod floating;
